//! Keyboard dispatch: a flat map from key identity (plus shift for the two
//! scale keys) to a transform-state mutation.

use engine_core::TransformState;
use rand::Rng;
use spin_config::InputConfig;
use winit::keyboard::KeyCode;

/// Applies the mutation for one key press. Returns whether the key was
/// recognized; unrecognized keys leave the state untouched and the caller
/// skips the redraw.
pub fn apply_key<R: Rng>(
    state: &mut TransformState,
    code: KeyCode,
    shift: bool,
    steps: &InputConfig,
    rng: &mut R,
) -> bool {
    match code {
        KeyCode::KeyA => state.translate_by(-steps.move_step, 0.0),
        KeyCode::KeyD => state.translate_by(steps.move_step, 0.0),
        KeyCode::KeyW => state.translate_by(0.0, -steps.move_step),
        KeyCode::KeyS => state.translate_by(0.0, steps.move_step),
        KeyCode::KeyQ => state.rotate_by(steps.rotate_step_deg),
        KeyCode::KeyE => state.rotate_by(-steps.rotate_step_deg),
        KeyCode::Space => state.randomize_color(rng),
        KeyCode::KeyX => {
            let step = if shift { -steps.scale_step } else { steps.scale_step };
            state.scale_x_by(step);
        }
        KeyCode::KeyY => {
            let step = if shift { -steps.scale_step } else { steps.scale_step };
            state.scale_y_by(step);
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixture() -> (TransformState, InputConfig, StdRng) {
        (
            TransformState::default(),
            InputConfig::default(),
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn movement_keys_step_translation() {
        let (mut state, steps, mut rng) = fixture();
        let start = state.translation;

        assert!(apply_key(&mut state, KeyCode::KeyD, false, &steps, &mut rng));
        assert!(apply_key(&mut state, KeyCode::KeyS, false, &steps, &mut rng));
        assert_eq!(state.translation, [start[0] + 25.0, start[1] + 25.0]);

        assert!(apply_key(&mut state, KeyCode::KeyA, false, &steps, &mut rng));
        assert!(apply_key(&mut state, KeyCode::KeyW, false, &steps, &mut rng));
        assert_eq!(state.translation, start);
    }

    #[test]
    fn rotation_keys_step_in_opposite_directions() {
        let (mut state, steps, mut rng) = fixture();
        apply_key(&mut state, KeyCode::KeyQ, false, &steps, &mut rng);
        assert_eq!(state.rotation_deg, 15.0);
        apply_key(&mut state, KeyCode::KeyE, false, &steps, &mut rng);
        apply_key(&mut state, KeyCode::KeyE, false, &steps, &mut rng);
        assert_eq!(state.rotation_deg, -15.0);
    }

    #[test]
    fn five_scale_presses_reach_one_and_a_half() {
        let (mut state, steps, mut rng) = fixture();
        for _ in 0..5 {
            assert!(apply_key(&mut state, KeyCode::KeyX, false, &steps, &mut rng));
        }
        assert!((state.scale[0] - 1.5).abs() < 1e-6);
        assert_eq!(state.scale[1], 1.0);
    }

    #[test]
    fn shift_inverts_scale_keys() {
        let (mut state, steps, mut rng) = fixture();
        apply_key(&mut state, KeyCode::KeyY, true, &steps, &mut rng);
        assert!((state.scale[1] - 0.9).abs() < 1e-6);
        assert_eq!(state.scale[0], 1.0);
    }

    #[test]
    fn space_rerolls_color_with_opaque_alpha() {
        let (mut state, steps, mut rng) = fixture();
        let before = state.color;
        assert!(apply_key(&mut state, KeyCode::Space, false, &steps, &mut rng));
        assert_ne!(state.color, before);
        assert_eq!(state.color[3], 1.0);
    }

    #[test]
    fn unrecognized_keys_leave_state_untouched() {
        let (mut state, steps, mut rng) = fixture();
        let before = state;
        assert!(!apply_key(&mut state, KeyCode::KeyZ, false, &steps, &mut rng));
        assert!(!apply_key(&mut state, KeyCode::Enter, true, &steps, &mut rng));
        assert_eq!(state, before);
    }
}
