//! Surface response of a body hitting a static wall.

/// Material properties consulted by wall correction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "MaterialFields"))]
pub struct Material {
    /// Coefficient of restitution (bounciness). Range [0, 1].
    /// 0 = the velocity component into the wall is removed, 1 = perfectly elastic.
    restitution: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MaterialFields {
    restitution: f64,
}

#[cfg(feature = "serde")]
impl From<MaterialFields> for Material {
    fn from(fields: MaterialFields) -> Self {
        Material::new(fields.restitution)
    }
}

impl Material {
    pub const INELASTIC: Material = Material { restitution: 0.0 };

    /// Creates a new material, clamping restitution into [0, 1].
    pub fn new(restitution: f64) -> Self {
        Material {
            restitution: if restitution.is_nan() { 0.0 } else { restitution.clamp(0.0, 1.0) },
        }
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    /// Velocity component along a wall's axis after contact.
    pub fn rebound(&self, velocity: f64) -> f64 {
        -velocity * self.restitution
    }
}

impl Default for Material {
    /// Bodies stop dead against walls unless told otherwise.
    fn default() -> Self {
        Material::INELASTIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_new_clamps_restitution() {
        assert_eq!(Material::new(1.5).restitution(), 1.0);
        assert_eq!(Material::new(-0.5).restitution(), 0.0);
        assert_eq!(Material::new(f64::NAN).restitution(), 0.0);
        assert!((Material::new(0.3).restitution() - 0.3).abs() < EPSILON);
    }

    #[test]
    fn test_rebound() {
        assert_eq!(Material::default().rebound(10.0), 0.0);
        assert!((Material::new(0.5).rebound(10.0) - -5.0).abs() < EPSILON);
    }
}
