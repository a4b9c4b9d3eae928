pub mod camera;
pub mod config;
pub mod input;
pub mod renderer;
pub mod shader;

// Re-export commonly used types
pub use camera::{Camera, MoveDirection};
pub use config::{CameraConfig, DemoConfig, WindowConfig};
pub use input::InputState;
pub use renderer::{RenderError, Renderer};
pub use shader::{ShaderError, ShaderProgram};
