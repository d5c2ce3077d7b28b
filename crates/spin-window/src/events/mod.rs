pub mod types;

pub use types::SpinWindowEvent;

use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::PhysicalKey;

/// Translate a raw winit event into the subset the demo dispatches on.
/// `shift` is the modifier state tracked by the event loop.
pub fn translate_window_event(event: &WindowEvent, shift: bool) -> Option<SpinWindowEvent> {
    match event {
        WindowEvent::Resized(sz) => Some(SpinWindowEvent::Resized(*sz)),
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } => Some(SpinWindowEvent::KeyPressed { code: *code, shift }),
        WindowEvent::RedrawRequested => Some(SpinWindowEvent::RedrawRequested),
        WindowEvent::CloseRequested => Some(SpinWindowEvent::CloseRequested),
        _ => None,
    }
}
