//! Transform state and per-frame matrix composition.

use rand::Rng;

use crate::matrix::Mat3;

/// Surface dimensions in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// The mutable state driven by keyboard input and read by the renderer.
///
/// Owned by the event-loop driver and passed explicitly into the input and
/// render layers; there is no ambient global.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Independent x/y scale factors.
    pub scale: [f32; 2],
    /// Rotation in degrees, counter-clockwise.
    pub rotation_deg: f32,
    /// World-space placement in pixels.
    pub translation: [f32; 2],
    /// Linear RGBA, each channel in [0, 1].
    pub color: [f32; 4],
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: [1.0, 1.0],
            rotation_deg: 0.0,
            translation: [250.0, 250.0],
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl TransformState {
    pub fn translate_by(&mut self, dx: f32, dy: f32) {
        self.translation[0] += dx;
        self.translation[1] += dy;
    }

    pub fn rotate_by(&mut self, degrees: f32) {
        self.rotation_deg += degrees;
    }

    pub fn scale_x_by(&mut self, delta: f32) {
        self.scale[0] += delta;
    }

    pub fn scale_y_by(&mut self, delta: f32) {
        self.scale[1] += delta;
    }

    /// Picks a fresh random RGB with alpha fixed at 1.
    pub fn randomize_color<R: Rng>(&mut self, rng: &mut R) {
        self.color = [
            rng.gen_range(0.0..1.0),
            rng.gen_range(0.0..1.0),
            rng.gen_range(0.0..1.0),
            1.0,
        ];
    }

    /// Composes the model transform. `origin_offset` recenters the shape's
    /// local origin before rotation and scaling, so both pivot about that
    /// point rather than the shape's top-left corner. Applied right to left:
    ///
    /// ```text
    /// model = translation * rotation * scaling * origin_recenter
    /// ```
    ///
    /// This order is load-bearing: translation must land after rotation and
    /// scaling so it stays a world-space placement, and the recenter must be
    /// innermost to fix the pivot.
    pub fn model_matrix(&self, origin_offset: [f32; 2]) -> Mat3 {
        Mat3::translation(self.translation[0], self.translation[1])
            * Mat3::rotation_deg(self.rotation_deg)
            * Mat3::scaling(self.scale[0], self.scale[1])
            * Mat3::translation(origin_offset[0], origin_offset[1])
    }

    /// The full per-frame matrix: projection to clip space applied last.
    /// Recomputed from scratch on every redraw; composing a handful of 3x3
    /// products is cheap enough that no caching is kept.
    pub fn pipeline_matrix(&self, viewport: Viewport, origin_offset: [f32; 2]) -> Mat3 {
        Mat3::projection(viewport.width as f32, viewport.height as f32)
            * self.model_matrix(origin_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_point_eq(a: [f32; 2], b: [f32; 2]) {
        assert!(
            (a[0] - b[0]).abs() < EPS && (a[1] - b[1]).abs() < EPS,
            "{:?} vs {:?}",
            a,
            b
        );
    }

    // The local pivot point (where the recenter offset maps the shape origin
    // to (0,0)) must always land exactly on `translation`, whatever the
    // rotation and scale.
    #[test]
    fn pivot_lands_on_translation() {
        let state = TransformState {
            scale: [1.7, 0.4],
            rotation_deg: 123.0,
            translation: [640.0, 123.0],
            ..Default::default()
        };
        let m = state.model_matrix([-250.0, -250.0]);
        assert_point_eq(m.apply([250.0, 250.0]), state.translation);
    }

    #[test]
    fn rotation_does_not_move_the_pivot() {
        let mut state = TransformState {
            translation: [100.0, 100.0],
            ..Default::default()
        };

        // One clockwise rotation step.
        state.rotate_by(15.0);
        assert_eq!(state.rotation_deg, 15.0);

        let m = state.model_matrix([-250.0, -250.0]);
        assert_point_eq(m.apply([250.0, 250.0]), [100.0, 100.0]);

        // A point offset from the pivot swings through 15 degrees.
        let p = m.apply([350.0, 250.0]);
        let r = 15.0f32.to_radians();
        assert_point_eq(p, [100.0 + 100.0 * r.cos(), 100.0 + 100.0 * r.sin()]);
    }

    #[test]
    fn pipeline_applies_projection_last() {
        let state = TransformState {
            translation: [400.0, 300.0],
            ..Default::default()
        };
        let vp = Viewport {
            width: 800,
            height: 600,
        };
        // The pivot sits at the viewport center, which projects to clip (0,0).
        let m = state.pipeline_matrix(vp, [-250.0, -250.0]);
        assert_point_eq(m.apply([250.0, 250.0]), [0.0, 0.0]);
    }

    #[test]
    fn random_color_keeps_alpha_opaque() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut state = TransformState::default();
        state.randomize_color(&mut rng);
        assert_eq!(state.color[3], 1.0);
        for c in &state.color[..3] {
            assert!((0.0..1.0).contains(c));
        }
    }
}
