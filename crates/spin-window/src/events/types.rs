use winit::dpi::PhysicalSize;
use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinWindowEvent {
    Resized(PhysicalSize<u32>),
    /// A physical key went down. `shift` reflects the modifier state at the
    /// time of the press; key repeat is passed through untouched.
    KeyPressed {
        code: KeyCode,
        shift: bool,
    },
    RedrawRequested,
    CloseRequested,
}
