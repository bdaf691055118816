pub mod block;
pub mod engine;
pub mod error;
pub mod observation;
pub mod pipeline;
pub mod router;

pub use block::{BlockId, CaptureId, RecognizedTextBlock};
pub use engine::{EngineError, ImageRef, NativeTextEngine, ScriptTextEngine, Translator};
pub use error::RecognitionError;
pub use observation::RawObservation;
pub use pipeline::{merge_translations, RecognitionPipeline};
pub use router::{resolve, CapabilityCache, RecognitionMethod, Route, ScriptFamily};
