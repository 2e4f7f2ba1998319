//! Tunables for integration, correction and level-load merging.

use crate::math::vec2::Vec2;

use super::error::ConfigError;

/// Validated kinematics parameters.
///
/// Fields are private; every constructor validates, so an integrator never sees
/// a non-positive substep shift or a NaN gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "KinematicsConfigBuilder", into = "KinematicsConfigBuilder")
)]
pub struct KinematicsConfig {
    gravity: Vec2,
    drag: f64,
    max_substep_shift: f64,
    penetration_tolerance: f64,
    merge_tolerance: f64,
    max_substeps: u32,
}

impl KinematicsConfig {
    pub const DEFAULT_GRAVITY: Vec2 = Vec2 { x: 0.0, y: 981.0 }; // positive y-down
    pub const DEFAULT_DRAG: f64 = 0.01;
    pub const DEFAULT_MAX_SUBSTEP_SHIFT: f64 = 0.5;
    pub const DEFAULT_TOLERANCE: f64 = 1e-3;
    pub const DEFAULT_MAX_SUBSTEPS: u32 = 1024;

    /// Creates a configuration with the given gravity, drag and per-substep shift;
    /// tolerances and the substep cap keep their defaults.
    pub fn new(gravity: Vec2, drag: f64, max_substep_shift: f64) -> Result<Self, ConfigError> {
        Self::builder()
            .gravity(gravity)
            .drag(drag)
            .max_substep_shift(max_substep_shift)
            .build()
    }

    pub fn builder() -> KinematicsConfigBuilder {
        KinematicsConfigBuilder::default()
    }

    /// Acceleration applied to kinematic bodies, in units per second squared.
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Linear damping per second.
    pub fn drag(&self) -> f64 {
        self.drag
    }

    /// Largest displacement a single substep may cover.
    pub fn max_substep_shift(&self) -> f64 {
        self.max_substep_shift
    }

    /// Penetrations at or below this depth are left unresolved.
    pub fn penetration_tolerance(&self) -> f64 {
        self.penetration_tolerance
    }

    /// Slack used when deciding whether two wall segments share an edge.
    pub fn merge_tolerance(&self) -> f64 {
        self.merge_tolerance
    }

    pub fn max_substeps(&self) -> u32 {
        self.max_substeps
    }
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            gravity: Self::DEFAULT_GRAVITY,
            drag: Self::DEFAULT_DRAG,
            max_substep_shift: Self::DEFAULT_MAX_SUBSTEP_SHIFT,
            penetration_tolerance: Self::DEFAULT_TOLERANCE,
            merge_tolerance: Self::DEFAULT_TOLERANCE,
            max_substeps: Self::DEFAULT_MAX_SUBSTEPS,
        }
    }
}

/// Unvalidated field set for [`KinematicsConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KinematicsConfigBuilder {
    pub gravity: Vec2,
    pub drag: f64,
    pub max_substep_shift: f64,
    pub penetration_tolerance: f64,
    pub merge_tolerance: f64,
    pub max_substeps: u32,
}

impl Default for KinematicsConfigBuilder {
    fn default() -> Self {
        KinematicsConfig::default().into()
    }
}

impl KinematicsConfigBuilder {
    pub fn gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn drag(mut self, drag: f64) -> Self {
        self.drag = drag;
        self
    }

    pub fn max_substep_shift(mut self, shift: f64) -> Self {
        self.max_substep_shift = shift;
        self
    }

    pub fn penetration_tolerance(mut self, tolerance: f64) -> Self {
        self.penetration_tolerance = tolerance;
        self
    }

    pub fn merge_tolerance(mut self, tolerance: f64) -> Self {
        self.merge_tolerance = tolerance;
        self
    }

    pub fn max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps;
        self
    }

    pub fn build(self) -> Result<KinematicsConfig, ConfigError> {
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFiniteValue { field: "gravity" });
        }
        for (field, value) in [
            ("drag", self.drag),
            ("max_substep_shift", self.max_substep_shift),
            ("penetration_tolerance", self.penetration_tolerance),
            ("merge_tolerance", self.merge_tolerance),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue { field });
            }
        }
        if self.drag < 0.0 {
            return Err(ConfigError::NegativeDrag(self.drag));
        }
        if self.max_substep_shift <= 0.0 {
            return Err(ConfigError::NonPositiveSubstepShift(self.max_substep_shift));
        }
        for (field, value) in [
            ("penetration_tolerance", self.penetration_tolerance),
            ("merge_tolerance", self.merge_tolerance),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeTolerance { field, value });
            }
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::ZeroSubsteps);
        }

        Ok(KinematicsConfig {
            gravity: self.gravity,
            drag: self.drag,
            max_substep_shift: self.max_substep_shift,
            penetration_tolerance: self.penetration_tolerance,
            merge_tolerance: self.merge_tolerance,
            max_substeps: self.max_substeps,
        })
    }
}

impl From<KinematicsConfig> for KinematicsConfigBuilder {
    fn from(config: KinematicsConfig) -> Self {
        Self {
            gravity: config.gravity,
            drag: config.drag,
            max_substep_shift: config.max_substep_shift,
            penetration_tolerance: config.penetration_tolerance,
            merge_tolerance: config.merge_tolerance,
            max_substeps: config.max_substeps,
        }
    }
}

impl TryFrom<KinematicsConfigBuilder> for KinematicsConfig {
    type Error = ConfigError;

    fn try_from(builder: KinematicsConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
