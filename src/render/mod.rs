pub mod cards;
pub mod format;

pub use cards::RenderContext;
