pub mod simulator;
pub use simulator::Simulator;
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::RendererEngine;
// Physic engine
pub mod physic_engine;
pub use physic_engine::PhysicEngine;
// Window engine
pub mod window_engine;
pub use window_engine::WindowEngine;
// Utilities
pub mod utils;
