pub mod geometry;
pub mod overlay;
pub mod recognition;
pub mod utils;

pub use geometry::{
    FitMode, ImageDescriptor, ImageOrientation, Rect, ViewDescriptor, ViewRect,
};
pub use overlay::{build_overlays, optimal_font_size, OverlayInstruction};
pub use recognition::{
    BlockId, CaptureId, RawObservation, RecognitionError, RecognitionMethod, RecognitionPipeline,
    RecognizedTextBlock,
};
