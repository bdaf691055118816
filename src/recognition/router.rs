//! Backend selection for a requested language.
//!
//! The router decides, once per recognition request, which OCR engine to
//! call and with which engine-specific parameter: the native engine takes an
//! exact capability tag, the script-family engine takes one of its coarse
//! script models.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::recognition::engine::{EngineError, NativeTextEngine};
use crate::recognition::error::RecognitionError;
use crate::utils::lang;

/// Caller preference for which backend handles a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionMethod {
    /// Always use the per-language native engine.
    Native,
    /// Always use the script-family engine.
    Script,
    /// Prefer the native engine when it supports the language.
    Auto,
}

/// The coarse script groupings the script-family engine ships models for.
///
/// Anything outside the four dedicated families falls back to the general
/// Latin model, so script routing always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFamily {
    Chinese,
    Korean,
    Japanese,
    Devanagari,
    Latin,
}

impl ScriptFamily {
    /// Maps a language tag's primary subtag to a script family.
    #[must_use]
    pub fn from_language(tag: &str) -> Self {
        match lang::primary_subtag(tag).as_str() {
            "zh" => Self::Chinese,
            "ko" => Self::Korean,
            "ja" => Self::Japanese,
            "hi" => Self::Devanagari,
            _ => Self::Latin,
        }
    }
}

/// A resolved backend choice with its engine-specific parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Call the native engine with this capability tag.
    Native { language: String },
    /// Call the script-family engine with this model family.
    Script { family: ScriptFamily },
}

/// Process-lifetime cache of the native engine's capability set.
///
/// Lazily populated on the first routing decision, then a pure read; safe
/// for concurrent readers and passed by reference rather than held as
/// ambient global state.
#[derive(Debug, Default)]
pub struct CapabilityCache {
    languages: OnceCell<Vec<String>>,
}

impl CapabilityCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached capability set, querying `engine` on first use.
    pub fn get_or_query<E: NativeTextEngine>(
        &self,
        engine: &E,
    ) -> Result<&[String], EngineError> {
        self.languages
            .get_or_try_init(|| {
                let languages = engine.supported_languages()?;
                debug!(count = languages.len(), "cached native capability set");
                Ok(languages)
            })
            .map(Vec::as_slice)
    }

    /// Pre-populates the cache, for tests and for hosts that already hold
    /// the capability list.
    pub fn populate(&self, languages: Vec<String>) {
        let _ = self.languages.set(languages);
    }
}

/// Resolves the native capability tag for a requested language.
///
/// Two fixed overrides come first: any Chinese-family tag maps to the single
/// canonical simplified-Chinese entry, and Arabic maps to the regional entry
/// the engine actually ships. Everything else is matched by primary subtag
/// against the capability set.
fn native_language_for(requested: &str, capabilities: &[String]) -> Option<String> {
    match lang::primary_subtag(requested).as_str() {
        "zh" | "ch" => Some("zh-Hans".to_string()),
        "ar" => Some("ar-SA".to_string()),
        _ => lang::find_matching_tag(requested, capabilities).map(str::to_string),
    }
}

/// Selects the backend for a requested language.
///
/// `Auto` resolves to the native engine when the capability set covers the
/// language's primary subtag, otherwise to the script-family engine.
/// An explicit `Native` request fails with
/// [`RecognitionError::UnsupportedLanguage`] when no capability matches;
/// an explicit `Script` request always succeeds.
pub fn resolve<E: NativeTextEngine>(
    language: &str,
    method: RecognitionMethod,
    cache: &CapabilityCache,
    engine: &E,
) -> Result<Route, RecognitionError> {
    let capabilities = cache
        .get_or_query(engine)
        .map_err(|e| RecognitionError::BackendFailure {
            message: e.to_string(),
        })?;

    let method = match method {
        RecognitionMethod::Auto => {
            if lang::find_matching_tag(language, capabilities).is_some() {
                RecognitionMethod::Native
            } else {
                RecognitionMethod::Script
            }
        }
        other => other,
    };

    let route = match method {
        RecognitionMethod::Native => {
            let resolved = native_language_for(language, capabilities).ok_or_else(|| {
                RecognitionError::UnsupportedLanguage {
                    language: language.to_string(),
                }
            })?;
            Route::Native { language: resolved }
        }
        RecognitionMethod::Script => Route::Script {
            family: ScriptFamily::from_language(language),
        },
        RecognitionMethod::Auto => unreachable!("auto resolved above"),
    };

    debug!(%language, ?route, "resolved recognition backend");
    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeNative(Vec<String>);

    impl NativeTextEngine for FakeNative {
        fn supported_languages(&self) -> Result<Vec<String>, EngineError> {
            Ok(self.0.clone())
        }

        async fn recognize(
            &self,
            _image: &crate::recognition::engine::ImageRef,
            _languages: &[String],
        ) -> Result<Vec<crate::recognition::observation::RawObservation>, EngineError> {
            Ok(vec![])
        }
    }

    fn engine() -> FakeNative {
        FakeNative(vec![
            "en-US".into(),
            "fr-FR".into(),
            "ja".into(),
            "zh-Hans".into(),
            "ar-SA".into(),
        ])
    }

    #[test]
    fn test_auto_prefers_native_for_supported_language() {
        let cache = CapabilityCache::new();
        let route = resolve("ja-JP", RecognitionMethod::Auto, &cache, &engine()).unwrap();
        assert_eq!(
            route,
            Route::Native {
                language: "ja".into()
            }
        );
    }

    #[test]
    fn test_auto_falls_back_to_script() {
        let cache = CapabilityCache::new();
        let route = resolve("th-TH", RecognitionMethod::Auto, &cache, &engine()).unwrap();
        assert_eq!(
            route,
            Route::Script {
                family: ScriptFamily::Latin
            }
        );
    }

    #[test]
    fn test_native_chinese_override() {
        let cache = CapabilityCache::new();
        let route = resolve("zh-TW", RecognitionMethod::Native, &cache, &engine()).unwrap();
        assert_eq!(
            route,
            Route::Native {
                language: "zh-Hans".into()
            }
        );
    }

    #[test]
    fn test_native_arabic_override() {
        let cache = CapabilityCache::new();
        let route = resolve("ar-EG", RecognitionMethod::Native, &cache, &engine()).unwrap();
        assert_eq!(
            route,
            Route::Native {
                language: "ar-SA".into()
            }
        );
    }

    #[test]
    fn test_native_unsupported_language() {
        let cache = CapabilityCache::new();
        let err = resolve("th-TH", RecognitionMethod::Native, &cache, &engine()).unwrap_err();
        assert!(matches!(
            err,
            RecognitionError::UnsupportedLanguage { language } if language == "th-TH"
        ));
    }

    #[test]
    fn test_script_families() {
        assert_eq!(ScriptFamily::from_language("zh-CN"), ScriptFamily::Chinese);
        assert_eq!(ScriptFamily::from_language("ko-KR"), ScriptFamily::Korean);
        assert_eq!(ScriptFamily::from_language("ja"), ScriptFamily::Japanese);
        assert_eq!(ScriptFamily::from_language("hi-IN"), ScriptFamily::Devanagari);
        assert_eq!(ScriptFamily::from_language("th-TH"), ScriptFamily::Latin);
    }

    #[test]
    fn test_capability_cache_queries_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct Counting(AtomicUsize);
        impl NativeTextEngine for Counting {
            fn supported_languages(&self) -> Result<Vec<String>, EngineError> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(vec!["en".into()])
            }
            async fn recognize(
                &self,
                _image: &crate::recognition::engine::ImageRef,
                _languages: &[String],
            ) -> Result<Vec<crate::recognition::observation::RawObservation>, EngineError>
            {
                Ok(vec![])
            }
        }

        let engine = Counting(AtomicUsize::new(0));
        let cache = CapabilityCache::new();
        for _ in 0..3 {
            resolve("en-GB", RecognitionMethod::Auto, &cache, &engine).unwrap();
        }
        assert_eq!(engine.0.load(Ordering::SeqCst), 1);
    }
}
