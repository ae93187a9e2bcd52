//! 정규화 + 유사도 핵심 로직

pub mod error;
pub mod normalizer;
pub mod similarity;
pub mod unicode;
