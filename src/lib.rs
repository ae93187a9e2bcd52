pub mod config;
pub mod core;
pub mod dedup;
pub mod ocr;
pub mod prefs;

pub use self::core::error::{JamoError, SimilarityError};
pub use self::core::normalizer::{decompose, filter_to_hangul_and_whitespace, Normalizer, NormalizerConfig};
pub use self::core::similarity::{edit_distance, similarity_score, DistanceScratch, SimilarityScorer};
pub use dedup::{DedupDecision, MatchThreshold, ReadDeduplicator};
