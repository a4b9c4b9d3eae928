use glam::Vec2;
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

use crate::camera::{Camera, MoveDirection};

/// Accumulated input for one frame: held movement keys plus the mouse
/// deltas received since the last tick.
#[derive(Debug, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    mouse_delta: Vec2,
    scroll_delta: f32,
}

impl InputState {
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::KeyW | KeyCode::ArrowUp => self.forward = pressed,
            KeyCode::KeyS | KeyCode::ArrowDown => self.backward = pressed,
            KeyCode::KeyA | KeyCode::ArrowLeft => self.left = pressed,
            KeyCode::KeyD | KeyCode::ArrowRight => self.right = pressed,
            _ => {}
        }
    }

    pub fn handle_mouse_move(&mut self, delta_x: f32, delta_y: f32) {
        self.mouse_delta += Vec2::new(delta_x, delta_y);
    }

    pub fn handle_mouse_scroll(&mut self, delta: MouseScrollDelta) {
        self.scroll_delta += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
        };
    }

    /// Drains the frame's input into the camera: position first, then
    /// orientation, then zoom, so the view matrix sampled afterwards
    /// reflects everything received this frame.
    pub fn apply_to_camera(&mut self, camera: &mut Camera, elapsed_seconds: f32) {
        if self.forward {
            camera.move_in_direction(MoveDirection::Forward, elapsed_seconds);
        }
        if self.backward {
            camera.move_in_direction(MoveDirection::Backward, elapsed_seconds);
        }
        if self.left {
            camera.move_in_direction(MoveDirection::Left, elapsed_seconds);
        }
        if self.right {
            camera.move_in_direction(MoveDirection::Right, elapsed_seconds);
        }

        if self.mouse_delta != Vec2::ZERO {
            // Screen Y grows downward, pitch grows upward.
            camera.rotate(self.mouse_delta.x, -self.mouse_delta.y);
        }
        if self.scroll_delta != 0.0 {
            camera.zoom_by(self.scroll_delta);
        }
        self.reset();
    }

    /// Clears per-frame deltas. Held-key state persists until a release
    /// event arrives.
    pub fn reset(&mut self) {
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }
}
