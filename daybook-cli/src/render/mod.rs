mod color_mode;
mod renderer;
mod skin;

pub use color_mode::ColorMode;
pub use renderer::{RenderOptions, Renderer};
