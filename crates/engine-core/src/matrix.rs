//! 3x3 matrices for 2D homogeneous transforms.
//!
//! Column-vector convention: `p' = M * p`, so in a product `a * b` the
//! right-hand matrix is applied to the point first. Storage is row-major
//! (`m[row * 3 + col]`); [`Mat3::to_uniform`] converts to the padded
//! column-major layout WGSL expects for `mat3x3<f32>` uniforms.

use std::ops::Mul;

/// An immutable 3x3 matrix. Every operation returns a new value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    pub m: [f32; 9],
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ],
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// A matrix that adds `(tx, ty)` to any point it transforms.
    pub fn translation(tx: f32, ty: f32) -> Self {
        Self {
            m: [
                1.0, 0.0, tx, //
                0.0, 1.0, ty, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Counter-clockwise rotation about the origin, in degrees.
    pub fn rotation_deg(degrees: f32) -> Self {
        let r = degrees.to_radians();
        let (s, c) = r.sin_cos();
        Self {
            m: [
                c, -s, 0.0, //
                s, c, 0.0, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn scaling(sx: f32, sy: f32) -> Self {
        Self {
            m: [
                sx, 0.0, 0.0, //
                0.0, sy, 0.0, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Maps pixel space (origin top-left, y-down, `[0,w] x [0,h]`) to clip
    /// space (`[-1,1]` per axis, y-up): the flip and normalization the
    /// render pipeline expects after all other transforms.
    pub fn projection(width: f32, height: f32) -> Self {
        Self {
            m: [
                2.0 / width, 0.0, -1.0, //
                0.0, -2.0 / height, 1.0, //
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Standard 3x3 matrix product. Not commutative: `a` is applied after `b`.
    pub fn multiply(a: Self, b: Self) -> Self {
        let mut m = [0.0f32; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut acc = 0.0;
                for k in 0..3 {
                    acc += a.m[row * 3 + k] * b.m[k * 3 + col];
                }
                m[row * 3 + col] = acc;
            }
        }
        Self { m }
    }

    /// Transforms a 2D point through the homogeneous matrix (w taken as 1).
    pub fn apply(&self, p: [f32; 2]) -> [f32; 2] {
        let [x, y] = p;
        [
            self.m[0] * x + self.m[1] * y + self.m[2],
            self.m[3] * x + self.m[4] * y + self.m[5],
        ]
    }

    /// Converts to the WGSL `mat3x3<f32>` uniform layout: column-major with
    /// each column padded to a vec4.
    pub fn to_uniform(&self) -> [[f32; 4]; 3] {
        let mut cols = [[0.0f32; 4]; 3];
        for (col, out) in cols.iter_mut().enumerate() {
            out[0] = self.m[col];
            out[1] = self.m[3 + col];
            out[2] = self.m[6 + col];
        }
        cols
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        Mat3::multiply(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_mat_eq(a: Mat3, b: Mat3) {
        for i in 0..9 {
            assert!(
                (a.m[i] - b.m[i]).abs() < EPS,
                "element {} differs: {:?} vs {:?}",
                i,
                a.m,
                b.m
            );
        }
    }

    fn assert_point_eq(a: [f32; 2], b: [f32; 2]) {
        assert!(
            (a[0] - b[0]).abs() < EPS && (a[1] - b[1]).abs() < EPS,
            "{:?} vs {:?}",
            a,
            b
        );
    }

    #[test]
    fn identity_is_multiplicative_unit() {
        let m = Mat3::translation(3.0, -7.0) * Mat3::rotation_deg(30.0) * Mat3::scaling(2.0, 0.5);
        assert_mat_eq(Mat3::identity() * m, m);
        assert_mat_eq(m * Mat3::identity(), m);
    }

    #[test]
    fn trivial_parameters_yield_identity() {
        assert_mat_eq(Mat3::translation(0.0, 0.0), Mat3::identity());
        assert_mat_eq(Mat3::scaling(1.0, 1.0), Mat3::identity());
        assert_mat_eq(Mat3::rotation_deg(0.0), Mat3::identity());
    }

    #[test]
    fn translations_compose_additively() {
        let m = Mat3::translation(10.0, 20.0) * Mat3::translation(-3.0, 5.0);
        assert_point_eq(m.apply([0.0, 0.0]), [7.0, 25.0]);
    }

    #[test]
    fn full_turn_matches_zero_rotation() {
        assert_mat_eq(Mat3::rotation_deg(360.0), Mat3::rotation_deg(0.0));
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        // 90 degrees CCW takes the +x axis to +y.
        let p = Mat3::rotation_deg(90.0).apply([1.0, 0.0]);
        assert_point_eq(p, [0.0, 1.0]);
    }

    #[test]
    fn projection_maps_pixel_corners_to_clip_corners() {
        let p = Mat3::projection(800.0, 600.0);
        assert_point_eq(p.apply([0.0, 0.0]), [-1.0, 1.0]);
        assert_point_eq(p.apply([800.0, 600.0]), [1.0, -1.0]);
        assert_point_eq(p.apply([400.0, 300.0]), [0.0, 0.0]);
    }

    #[test]
    fn multiplication_order_matters() {
        let t = Mat3::translation(10.0, 0.0);
        let r = Mat3::rotation_deg(90.0);
        // Rotate-then-translate leaves the origin at (10, 0); the reverse
        // order sweeps it to (0, 10).
        assert_point_eq((t * r).apply([0.0, 0.0]), [10.0, 0.0]);
        assert_point_eq((r * t).apply([0.0, 0.0]), [0.0, 10.0]);
    }

    #[test]
    fn uniform_layout_is_padded_column_major() {
        let m = Mat3::translation(5.0, 9.0);
        let cols = m.to_uniform();
        assert_eq!(cols[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(cols[1], [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(cols[2], [5.0, 9.0, 1.0, 0.0]);
    }
}
