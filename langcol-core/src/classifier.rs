//! Classification engine boundary
//!
//! The external engine is modeled as a single-method trait so the row
//! mapper never depends on lingua directly and tests can substitute a
//! deterministic stub.

use lingua::{LanguageDetector, LanguageDetectorBuilder};

use crate::detection::Detection;
use crate::error::Result;

/// Opaque capability: classify text into a language, or decline.
///
/// `Ok(Some(code))` carries an uppercase two-letter ISO 639-1 code.
/// `Ok(None)` means no language was confidently determined. `Err` is
/// reserved for engine failures and is downgraded to a per-row
/// sentinel by [`Detector::detect`].
pub trait LanguageClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Option<String>>;
}

/// Classifier backed by the lingua statistical models.
///
/// Built from all supported languages once per process; the build is a
/// load-time cost and the instance is reused for every row. Each
/// `classify` call is independent and side-effect free.
pub struct LinguaClassifier {
    detector: LanguageDetector,
}

impl LinguaClassifier {
    pub fn new() -> Self {
        let detector = LanguageDetectorBuilder::from_all_languages().build();
        Self { detector }
    }
}

impl Default for LinguaClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageClassifier for LinguaClassifier {
    fn classify(&self, text: &str) -> Result<Option<String>> {
        Ok(self
            .detector
            .detect_language_of(text)
            .map(|language| language.iso_code_639_1().to_string().to_uppercase()))
    }
}

/// Wraps a classifier and normalizes its outcomes into [`Detection`].
pub struct Detector {
    classifier: Box<dyn LanguageClassifier>,
}

impl Detector {
    pub fn new(classifier: Box<dyn LanguageClassifier>) -> Self {
        Self { classifier }
    }

    /// Detector backed by the default lingua engine
    pub fn with_lingua() -> Self {
        Self::new(Box::new(LinguaClassifier::new()))
    }

    /// Classify one text cell, exactly once, never propagating failure.
    ///
    /// An engine error is logged as a diagnostic and returned as
    /// [`Detection::Failed`] so one bad row cannot abort the others.
    pub fn detect(&self, text: &str) -> Detection {
        match self.classifier.classify(text) {
            Ok(Some(code)) => Detection::Detected(code),
            Ok(None) => Detection::Undetermined,
            Err(e) => {
                log::warn!("Error detecting language: {e}");
                Detection::Failed(e.to_string())
            }
        }
    }
}
