//! Surface hit resolution
//!
//! Converts a pointer-surface intersection into a window placement: the hit
//! point pushed off the surface along its world-space normal, oriented so
//! the window's forward axis points outward from the surface.
//!
//! Resolution is a pure function of the hit. It performs no registry access
//! and has no side effects, so the same hit always yields the same placement.

use glam::{Mat3, Mat4, Quat, Vec3};

/// Default distance a placed window floats off its surface, in world units.
/// Keeps the panel clear of the geometry so it neither z-fights the surface
/// nor buries its interaction affordances in it.
pub const DEFAULT_STANDOFF: f32 = 0.1;

const MIN_LENGTH_SQUARED: f32 = 1e-10;
const MIN_DETERMINANT: f32 = 1e-10;

/// One pointer-ray/geometry intersection, as reported by the scene renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// World-space intersection point.
    pub point: Vec3,
    /// Surface normal in the clicked object's local space.
    pub normal: Vec3,
    /// World transform of the clicked object, used to map the normal into
    /// world space.
    pub object_transform: Mat4,
}

/// World transform for a re-anchored window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Quat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("surface normal has zero length")]
    DegenerateNormal,
    #[error("object transform is singular and cannot map directions")]
    SingularTransform,
}

/// Resolves surface hits into outward-facing window placements.
#[derive(Debug, Clone, Copy)]
pub struct AnchorResolver {
    /// Standoff between the surface and the placed window, in world units.
    pub standoff: f32,
}

impl Default for AnchorResolver {
    fn default() -> Self {
        Self {
            standoff: DEFAULT_STANDOFF,
        }
    }
}

impl AnchorResolver {
    pub fn new(standoff: f32) -> Self {
        Self { standoff }
    }

    /// Resolve a hit into a placement.
    ///
    /// The local normal is mapped through the upper 3x3 of the object's
    /// world transform (direction-only: translation is never applied),
    /// normalized, and used both to offset the anchor point off the surface
    /// and as the forward axis of the returned orientation.
    pub fn resolve(&self, hit: &SurfaceHit) -> Result<Placement, GeometryError> {
        if hit.normal.length_squared() <= MIN_LENGTH_SQUARED {
            return Err(GeometryError::DegenerateNormal);
        }
        let direction_basis = Mat3::from_mat4(hit.object_transform);
        if direction_basis.determinant().abs() <= MIN_DETERMINANT {
            return Err(GeometryError::SingularTransform);
        }
        let world_normal = direction_basis * hit.normal;
        if world_normal.length_squared() <= MIN_LENGTH_SQUARED {
            return Err(GeometryError::DegenerateNormal);
        }
        let forward = world_normal.normalize();

        Ok(Placement {
            position: hit.point + forward * self.standoff,
            rotation: outward_rotation(forward),
        })
    }
}

/// Orientation whose forward (+Z) axis equals `forward`, upright against
/// world +Y. Near the poles the up seed switches to +Z so the basis stays
/// orthonormal instead of collapsing.
///
/// `forward` must be unit length.
pub(crate) fn outward_rotation(forward: Vec3) -> Quat {
    let up_seed = if forward.dot(Vec3::Y).abs() > 0.999 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let right = up_seed.cross(forward).normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

#[cfg(test)]
mod tests {
    use super::{AnchorResolver, GeometryError, SurfaceHit, DEFAULT_STANDOFF};
    use glam::{Mat4, Quat, Vec3};

    fn identity_hit(point: Vec3, normal: Vec3) -> SurfaceHit {
        SurfaceHit {
            point,
            normal,
            object_transform: Mat4::IDENTITY,
        }
    }

    #[test]
    fn offsets_hit_point_along_world_normal() {
        let resolver = AnchorResolver::default();
        let hit = identity_hit(Vec3::new(1.0, 0.0, 0.0), Vec3::Z);
        let placement = resolver.resolve(&hit).unwrap();
        assert!(placement
            .position
            .abs_diff_eq(Vec3::new(1.0, 0.0, DEFAULT_STANDOFF), 1e-6));
    }

    #[test]
    fn forward_axis_matches_world_normal() {
        let resolver = AnchorResolver::default();
        let normals = [
            Vec3::Z,
            Vec3::NEG_Z,
            Vec3::X,
            Vec3::new(1.0, 0.3, -0.5).normalize(),
            Vec3::new(-0.2, 0.9, 0.4).normalize(),
        ];
        for normal in normals {
            let placement = resolver.resolve(&identity_hit(Vec3::ZERO, normal)).unwrap();
            let forward = placement.rotation * Vec3::Z;
            assert!(
                forward.dot(normal) > 0.9999,
                "forward {forward:?} not aligned with normal {normal:?}"
            );
            assert!(placement.rotation.is_normalized());
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = AnchorResolver::default();
        let hit = SurfaceHit {
            point: Vec3::new(0.3, 1.7, -2.2),
            normal: Vec3::new(0.4, 0.1, 0.9),
            object_transform: Mat4::from_rotation_y(0.7),
        };
        let a = resolver.resolve(&hit).unwrap();
        let b = resolver.resolve(&hit).unwrap();
        assert_eq!(a.position.to_array(), b.position.to_array());
        assert_eq!(a.rotation.to_array(), b.rotation.to_array());
    }

    #[test]
    fn zero_normal_is_rejected() {
        let resolver = AnchorResolver::default();
        let err = resolver
            .resolve(&identity_hit(Vec3::ZERO, Vec3::ZERO))
            .unwrap_err();
        assert_eq!(err, GeometryError::DegenerateNormal);
    }

    #[test]
    fn singular_transform_is_rejected() {
        let resolver = AnchorResolver::default();
        let hit = SurfaceHit {
            point: Vec3::ZERO,
            normal: Vec3::Z,
            object_transform: Mat4::from_scale(Vec3::new(1.0, 1.0, 0.0)),
        };
        let err = resolver.resolve(&hit).unwrap_err();
        assert_eq!(err, GeometryError::SingularTransform);
    }

    #[test]
    fn object_rotation_maps_normal_into_world_space() {
        // Object rotated a quarter turn about Y carries its local +Z normal
        // onto world +X.
        let resolver = AnchorResolver::default();
        let hit = SurfaceHit {
            point: Vec3::new(2.0, 1.0, 0.0),
            normal: Vec3::Z,
            object_transform: Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2),
        };
        let placement = resolver.resolve(&hit).unwrap();
        assert!(placement
            .position
            .abs_diff_eq(Vec3::new(2.0 + DEFAULT_STANDOFF, 1.0, 0.0), 1e-6));
        let forward = placement.rotation * Vec3::Z;
        assert!(forward.abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn scaled_transform_still_yields_unit_standoff() {
        let resolver = AnchorResolver::default();
        let hit = SurfaceHit {
            point: Vec3::ZERO,
            normal: Vec3::Z,
            object_transform: Mat4::from_scale(Vec3::splat(4.5)),
        };
        let placement = resolver.resolve(&hit).unwrap();
        assert!(placement
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, DEFAULT_STANDOFF), 1e-6));
    }

    #[test]
    fn vertical_normal_degrades_to_perpendicular_up() {
        let resolver = AnchorResolver::default();
        for normal in [Vec3::Y, Vec3::NEG_Y] {
            let placement = resolver.resolve(&identity_hit(Vec3::ZERO, normal)).unwrap();
            let rotation = placement.rotation;
            assert!(rotation.is_finite());
            assert!(rotation.is_normalized());
            let forward = rotation * Vec3::Z;
            let up = rotation * Vec3::Y;
            assert!(forward.dot(normal) > 0.9999);
            assert!(up.dot(forward).abs() < 1e-5);
        }
    }

    #[test]
    fn custom_standoff_is_honored() {
        let resolver = AnchorResolver::new(0.35);
        let hit = identity_hit(Vec3::ZERO, Vec3::X);
        let placement = resolver.resolve(&hit).unwrap();
        assert!(placement.position.abs_diff_eq(Vec3::new(0.35, 0.0, 0.0), 1e-6));
    }
}
