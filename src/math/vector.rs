//! Three-component vector algebra for atomic positions and rotation axes.
//!
//! Kept deliberately small: the symmetrizers only ever add, scale, project,
//! and rotate positions, so there is no benefit in pulling in a general
//! linear-algebra crate for a handful of closed-form operations.

use num_traits::Float;

/// A point or direction in 3-D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// x component.
    pub x: f64,
    /// y component.
    pub y: f64,
    /// z component.
    pub z: f64,
}

impl Vec3 {
    /// Build a vector from its three components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y.mul_add(other.y, self.z * other.z))
    }

    /// Squared Euclidean length, `|v|^2`.
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Componentwise sum.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Componentwise difference.
    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Uniform scale.
    #[must_use]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Orthogonal projection of `self` onto `axis`, where `axis` is assumed
    /// to already be a unit vector (the classifier hands us unit axes, per
    /// the `SymmetryOperation` data model).
    #[must_use]
    pub fn project_onto(self, axis: Self) -> Self {
        axis.scale(self.dot(axis))
    }

    /// Reflection of `self` through the plane with unit normal `normal`.
    #[must_use]
    pub fn reflect_through(self, normal: Self) -> Self {
        self.sub(normal.scale(2.0 * self.dot(normal)))
    }

    /// Rotation of `self` by `angle` radians about the unit axis `axis`,
    /// via Rodrigues' rotation formula.
    #[must_use]
    pub fn rotate_about(self, axis: Self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let parallel = axis.scale(self.dot(axis));
        let perp = self.sub(parallel);
        let crossed = axis.cross(self);
        parallel.add(perp.scale(cos)).add(crossed.scale(sin))
    }

    /// Cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Point reflection through the origin.
    #[must_use]
    pub fn negate(self) -> Self {
        self.scale(-1.0)
    }
}

/// True when `value`'s magnitude is at or below `eps`.
///
/// Generic over any [`Float`] so the same check can be reused for a `f32`
/// caller without duplicating the comparison.
#[must_use]
pub fn is_near_zero<T: Float>(value: T, eps: T) -> bool {
    value.abs() <= eps
}
