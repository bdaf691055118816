pub mod font;
pub mod layout;

pub use font::optimal_font_size;
pub use layout::{build_overlays, OverlayInstruction};
