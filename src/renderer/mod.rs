// ABOUTME: Renderer module for substituting argument values into queries
// ABOUTME: Exports the renderer, argument value model, and render errors

pub mod error;
pub mod render;
pub mod value;

pub use error::{RenderError, Result};
pub use render::Renderer;
pub use value::QueryValue;
