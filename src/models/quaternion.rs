use crate::interactions::{add_vectors, cross_product, normalize_vector, scale_vector};

/// Rotation quaternion used to pose convex hulls in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    /// Creates a new identity quaternion (no rotation)
    pub fn identity() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    pub fn is_near_identity(&self, epsilon: f64) -> bool {
        (self.w - 1.0).abs() < epsilon &&
            self.x.abs() < epsilon &&
            self.y.abs() < epsilon &&
            self.z.abs() < epsilon
    }

    /// Creates a quaternion rotating by `angle` radians around `axis`.
    ///
    /// A zero axis yields the identity rotation.
    ///
    /// # Example
    /// ```
    /// use rs_gjk::models::Quaternion;
    /// use std::f64::consts::PI;
    ///
    /// let q = Quaternion::from_axis_angle((0.0, 0.0, 2.0), PI / 2.0);
    /// let rotated = q.rotate_point((1.0, 0.0, 0.0));
    ///
    /// assert!(rotated.0.abs() < 1e-10);
    /// assert!((rotated.1 - 1.0).abs() < 1e-10);
    /// ```
    pub fn from_axis_angle(axis: (f64, f64, f64), angle: f64) -> Self {
        let unit_axis = match normalize_vector(axis) {
            Ok(unit_axis) => unit_axis,
            Err(_) => return Quaternion::identity(),
        };

        let half_angle = angle / 2.0;
        let (x, y, z) = scale_vector(unit_axis, half_angle.sin());

        Quaternion { w: half_angle.cos(), x, y, z }
    }

    /// Returns the length/magnitude of the quaternion
    pub fn magnitude(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a normalized version of the quaternion
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < 1e-10 || !mag.is_finite() {
            return Quaternion::identity();
        }
        Quaternion {
            w: self.w / mag,
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Multiplies two quaternions (`self` applied after `other`)
    pub fn multiply(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
    }

    pub fn conjugate(&self) -> Quaternion {
        Quaternion {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Inverse rotation. For unit quaternions this is the conjugate.
    pub fn inverse(&self) -> Quaternion {
        self.normalized().conjugate()
    }

    /// Rotates a point using the quaternion
    ///
    /// Uses `v' = v + 2w(q × v) + 2 q × (q × v)` on the normalized quaternion.
    pub fn rotate_point(&self, point: (f64, f64, f64)) -> (f64, f64, f64) {
        let q = self.normalized();
        let axis = (q.x, q.y, q.z);

        let t = scale_vector(cross_product(axis, point), 2.0);
        add_vectors(add_vectors(point, scale_vector(t, q.w)), cross_product(axis, t))
    }
}
