//! The recognition cycle.
//!
//! One cycle runs: route -> engine call -> normalization -> (optionally)
//! translation merge. The engine and translator calls suspend; everything
//! between them is pure, so cycles for different images can run
//! concurrently. The only shared mutable state is the capability cache and
//! the current-capture counter.
//!
//! Captures can be retaken or cleared while an engine or translation call is
//! still outstanding, so every in-flight result is keyed by a [`CaptureId`];
//! a result that no longer matches the current capture is discarded instead
//! of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::recognition::block::{BlockId, CaptureId, RecognizedTextBlock};
use crate::recognition::engine::{
    EngineError, ImageRef, NativeTextEngine, ScriptTextEngine, Translator,
};
use crate::recognition::error::RecognitionError;
use crate::recognition::router::{self, CapabilityCache, RecognitionMethod, Route};

fn backend_error(e: EngineError) -> RecognitionError {
    match e {
        EngineError::InvalidImage { message } => RecognitionError::InvalidImage { message },
        EngineError::Failed { message } => RecognitionError::BackendFailure { message },
    }
}

/// The recognition pipeline over a pair of OCR engines and a translator.
pub struct RecognitionPipeline<N, S, T> {
    native: N,
    script: S,
    translator: T,
    capabilities: CapabilityCache,
    current_capture: AtomicU64,
}

impl<N, S, T> RecognitionPipeline<N, S, T>
where
    N: NativeTextEngine,
    S: ScriptTextEngine,
    T: Translator,
{
    #[must_use]
    pub fn new(native: N, script: S, translator: T) -> Self {
        Self {
            native,
            script,
            translator,
            capabilities: CapabilityCache::new(),
            current_capture: AtomicU64::new(0),
        }
    }

    /// The capability cache held by the pipeline's router.
    #[must_use]
    pub fn capabilities(&self) -> &CapabilityCache {
        &self.capabilities
    }

    /// Starts a new capture, superseding any capture still in flight.
    ///
    /// Results keyed to an older capture will be discarded when they arrive.
    pub fn begin_capture(&self) -> CaptureId {
        let id = CaptureId(self.current_capture.fetch_add(1, Ordering::SeqCst) + 1);
        debug!(capture = id.0, "began capture");
        id
    }

    /// Whether `capture` is still the newest capture.
    #[must_use]
    pub fn is_current(&self, capture: CaptureId) -> bool {
        self.current_capture.load(Ordering::SeqCst) == capture.0
    }

    /// Runs one recognition cycle for `capture`.
    ///
    /// Routes the request, calls the selected engine, and normalizes its
    /// observations into canonical blocks. An image without text yields an
    /// empty list. If the capture was superseded while the engine call was
    /// outstanding, the stale result is discarded with
    /// [`RecognitionError::CaptureSuperseded`].
    pub async fn recognize(
        &self,
        capture: CaptureId,
        image: &ImageRef,
        language: &str,
        method: RecognitionMethod,
    ) -> Result<Vec<RecognizedTextBlock>, RecognitionError> {
        let route = router::resolve(language, method, &self.capabilities, &self.native)?;

        let observations = match &route {
            Route::Native { language } => self
                .native
                .recognize(image, std::slice::from_ref(language))
                .await
                .map_err(backend_error)?,
            Route::Script { family } => self
                .script
                .recognize(image, *family)
                .await
                .map_err(backend_error)?,
        };

        if !self.is_current(capture) {
            warn!(capture = capture.0, "discarding stale recognition result");
            return Err(RecognitionError::CaptureSuperseded);
        }

        let blocks: Vec<RecognizedTextBlock> = observations
            .into_iter()
            .enumerate()
            .map(|(i, observation)| observation.into_block(BlockId(i as u64)))
            .collect();

        info!(
            capture = capture.0,
            blocks = blocks.len(),
            ?route,
            "recognition cycle complete"
        );
        Ok(blocks)
    }

    /// Translates the blocks' texts and merges the results back by id.
    ///
    /// The translator keeps the ordered-list contract, so translations are
    /// paired with the block ids recorded at request time and merged through
    /// those ids; reordering or filtering `blocks` between call and merge
    /// cannot misassign a translation. An empty translation means the text
    /// was not in the source language and leaves the block untranslated.
    ///
    /// Returns the id/translation pairs so callers holding a newer block
    /// list can merge selectively via [`merge_translations`].
    pub async fn translate(
        &self,
        capture: CaptureId,
        blocks: &mut [RecognizedTextBlock],
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Vec<(BlockId, String)>, RecognitionError> {
        let ids: Vec<BlockId> = blocks.iter().map(|b| b.id).collect();
        let texts: Vec<String> = blocks.iter().map(|b| b.text.clone()).collect();

        let translations = self
            .translator
            .translate(&texts, source_lang, target_lang)
            .await
            .map_err(|e| RecognitionError::TranslationFailure {
                message: e.to_string(),
            })?;

        if translations.len() != texts.len() {
            return Err(RecognitionError::TranslationFailure {
                message: format!(
                    "expected {} translations, got {}",
                    texts.len(),
                    translations.len()
                ),
            });
        }

        if !self.is_current(capture) {
            warn!(capture = capture.0, "discarding stale translation result");
            return Err(RecognitionError::CaptureSuperseded);
        }

        let keyed: Vec<(BlockId, String)> = ids.into_iter().zip(translations).collect();
        merge_translations(blocks, &keyed);
        Ok(keyed)
    }
}

/// Merges id-keyed translations into a block list.
///
/// Blocks without a matching id and empty translations are left untouched.
pub fn merge_translations(blocks: &mut [RecognizedTextBlock], translations: &[(BlockId, String)]) {
    for (id, translation) in translations {
        if translation.is_empty() {
            continue;
        }
        if let Some(block) = blocks.iter_mut().find(|b| b.id == *id) {
            block.translation = Some(translation.clone());
        }
    }
}
