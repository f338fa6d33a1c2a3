pub mod r#trait;
pub use r#trait::{WindowEngine, WindowEvent};

pub mod glfw_window_engine;
pub use self::glfw_window_engine::GlfwWindowEngine;
