pub mod tools;
pub use self::tools::show_rust_core_dependencies;

pub mod frame_limiter;
pub use self::frame_limiter::FrameLimiter;
