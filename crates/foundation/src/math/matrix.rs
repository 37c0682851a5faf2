//! Row-major 3x3 rotations and 4x4 affine transforms in `f64`.
//!
//! Only what the tangent-frame math needs: build, compose, apply.

use super::{Geodetic, Vec3, enu_axes, geodetic_to_ecef};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Counterclockwise rotation about +Z when looking down from +Z.
    pub fn from_rotation_z(angle_rad: f64) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self {
            m: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub fn mul_vec3(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub m: [[f64; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub fn from_rotation_translation(rotation: Mat3, translation: Vec3) -> Self {
        let r = &rotation.m;
        Self {
            m: [
                [r[0][0], r[0][1], r[0][2], translation.x],
                [r[1][0], r[1][1], r[1][2], translation.y],
                [r[2][0], r[2][1], r[2][2], translation.z],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Affine transform whose basis columns are `x`, `y`, `z`, translated by `origin`.
    pub fn from_columns(x: Vec3, y: Vec3, z: Vec3, origin: Vec3) -> Self {
        Self {
            m: [
                [x.x, y.x, z.x, origin.x],
                [x.y, y.y, z.y, origin.y],
                [x.z, y.z, z.z, origin.z],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Local east-north-up frame at `origin` expressed in ECEF: maps local
    /// meters (east, north, up) to world Cartesian.
    pub fn east_north_up_to_fixed_frame(origin: Geodetic) -> Self {
        let [east, north, up] = enu_axes(origin);
        Self::from_columns(east, north, up, geodetic_to_ecef(origin).as_vec3())
    }

    /// `self * other`: `other` is applied first.
    pub fn multiply(&self, other: &Mat4) -> Mat4 {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        Mat4 { m: out }
    }

    /// Transforms a point (w = 1).
    pub fn mul_point(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3],
            m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3],
            m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3],
        )
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.m[0][3], self.m[1][3], self.m[2][3])
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, other: Mat4) -> Mat4 {
        self.multiply(&other)
    }
}
