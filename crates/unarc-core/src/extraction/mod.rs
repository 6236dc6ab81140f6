//! Extraction engine.

mod engine;

pub use engine::ExtractionEngine;
