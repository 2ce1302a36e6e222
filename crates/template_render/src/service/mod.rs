pub mod renderer;
pub mod validation;

pub use renderer::render;
