//! Final resume output: JSON persistence and HTML rendering

pub mod renderer;

pub use renderer::ResumeRenderer;
