//! Language identification primitives for the langcol CSV annotator.
//!
//! The crate wraps an external language-identification engine behind a
//! single-method [`LanguageClassifier`] trait and normalizes its three
//! possible outcomes into the [`Detection`] enum:
//!
//! - `Detected(code)` — an uppercase two-letter ISO 639-1 code
//! - `Undetermined` — the engine declined to pick a language
//! - `Failed(reason)` — the engine returned an error for this input
//!
//! # Example
//!
//! ```rust
//! use langcol_core::{Detection, Detector, LinguaClassifier};
//!
//! let detector = Detector::new(Box::new(LinguaClassifier::new()));
//! match detector.detect("Bonjour tout le monde") {
//!     Detection::Detected(code) => assert_eq!(code, "FR"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod classifier;
pub mod detection;
pub mod error;

pub use classifier::{Detector, LanguageClassifier, LinguaClassifier};
pub use detection::Detection;
pub use error::{ClassifyError, Result};
