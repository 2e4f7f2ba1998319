pub mod correction;
pub mod integrator;

pub use correction::{
    handle_all_collisions, handle_collision, move_out_of_collision, move_out_of_wall,
    move_out_of_walls,
};
pub use integrator::{integrate, plan_substeps, StepReport};
