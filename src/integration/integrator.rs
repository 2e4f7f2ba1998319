use tracing::{trace, warn};

use crate::common::KinematicsConfig;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;

/// Summary of one call to [`integrate`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    /// Substeps actually executed.
    pub substeps: u32,
    /// Total position change, corrections included.
    pub displacement: Vec2,
    /// Sum of the corrections returned by the substep callback.
    pub correction: Vec2,
}

/// Number of substeps needed so that no substep moves further than the configured shift.
pub fn plan_substeps(shift: Vec2, config: &KinematicsConfig) -> u32 {
    let wanted = (shift.magnitude() / config.max_substep_shift()).ceil();
    let limit = config.max_substeps();
    if !(wanted <= f64::from(limit)) {
        warn!(wanted, limit, "substep count clamped");
        return limit;
    }
    (wanted as u32).max(1)
}

/// Integrates a kinematic body using semi-implicit Euler split into substeps.
///
/// Each substep applies gravity then drag to the velocity, moves the body by
/// `velocity * h + step / n` and hands it to `on_substep`, which may push it
/// back out of obstacles and returns the correction it applied. Static bodies
/// and non-positive `dt` with no `step` leave the body untouched.
pub fn integrate<F>(
    body: &mut Body,
    dt: f64,
    step: Vec2,
    config: &KinematicsConfig,
    mut on_substep: F,
) -> StepReport
where
    F: FnMut(&mut Body, f64) -> Vec2,
{
    let mut report = StepReport::default();
    if !body.is_kinematic() || !step.is_finite() {
        return report;
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let gravity = if dt > 0.0 { config.gravity() } else { Vec2::ZERO };

    let shift = (body.velocity + gravity * dt) * dt + step;
    let substeps = plan_substeps(shift, config);
    let h = dt / f64::from(substeps);
    let step_part = step / f64::from(substeps);
    let damping = (1.0 - config.drag() * h).max(0.0);
    let start = body.position();

    for index in 0..substeps {
        if step_part.is_zero() && gravity.is_zero() && (body.velocity.is_zero() || h == 0.0) {
            break;
        }

        body.velocity += gravity * h;
        body.velocity *= damping;
        let displacement = body.velocity * h + step_part;
        body.translate(displacement);

        let correction = on_substep(body, h);
        report.correction += correction;
        report.substeps += 1;

        trace!(
            substep = index,
            x = body.position().x,
            y = body.position().y,
            vx = body.velocity.x,
            vy = body.velocity.y,
            "substep"
        );
    }

    report.displacement = body.position() - start;
    report
}
