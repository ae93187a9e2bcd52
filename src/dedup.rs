//! 반복 OCR 결과 중복 제거
//!
//! 천천히 바뀌는 화면 영역을 반복 인식할 때, 직전에 받아들인 결과와
//! 자모 단위 편집 거리가 임계값 이하이면 같은 내용으로 봅니다.

use crate::core::normalizer::Normalizer;
use crate::core::similarity::DistanceScratch;

/// "같은 텍스트" 판정 임계값 (호출자 지정)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchThreshold {
    max_distance: usize,
}

impl MatchThreshold {
    /// 거리 `max_distance` 이하를 같은 텍스트로 판정
    pub fn new(max_distance: usize) -> Self {
        Self { max_distance }
    }

    /// 완전히 같을 때만 같은 텍스트
    pub fn exact() -> Self {
        Self::new(0)
    }

    /// 설정값에서 생성 (None이면 exact)
    pub fn from_setting(setting: Option<usize>) -> Self {
        setting.map(Self::new).unwrap_or_else(Self::exact)
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    pub fn is_same(&self, distance: usize) -> bool {
        distance <= self.max_distance
    }
}

impl Default for MatchThreshold {
    fn default() -> Self {
        Self::exact()
    }
}

/// 인식 결과 판정
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DedupDecision {
    /// 새 내용 (기준 결과로 채택됨)
    New { text: String },
    /// 기준 결과와 같은 내용
    Duplicate { distance: usize },
    /// 한글이 하나도 없음 (기준 결과 유지)
    Blank,
}

/// 연속 인식 결과 중복 제거기
///
/// 마지막으로 채택한 결과와만 비교합니다. 중복으로 판정된 결과는 기준을 바꾸지 않으므로
/// 조금씩 누적되는 변화도 결국 새 내용으로 잡힙니다.
#[derive(Debug, Default)]
pub struct ReadDeduplicator {
    normalizer: Normalizer,
    threshold: MatchThreshold,
    scratch: DistanceScratch,
    last: Option<Vec<char>>,
}

impl ReadDeduplicator {
    pub fn new(threshold: MatchThreshold) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn with_normalizer(normalizer: Normalizer, threshold: MatchThreshold) -> Self {
        Self {
            normalizer,
            threshold,
            ..Self::default()
        }
    }

    pub fn threshold(&self) -> MatchThreshold {
        self.threshold
    }

    /// 원문 인식 결과 하나를 판정
    pub fn observe(&mut self, raw: &str) -> DedupDecision {
        let filtered = self.normalizer.filter(raw);
        // 앞뒤 잡음이 남긴 구분자는 비교에서 제외
        let content = filtered.trim_matches(' ');
        if content.is_empty() {
            log::debug!("빈 인식 결과");
            return DedupDecision::Blank;
        }

        let key: Vec<char> = if self.normalizer.config().decompose {
            self.normalizer.decompose(content).chars().collect()
        } else {
            content.chars().collect()
        };

        if let Some(last) = &self.last {
            let distance = self.scratch.distance(last, &key);
            if self.threshold.is_same(distance) {
                log::debug!("중복 인식 결과 (거리 {})", distance);
                return DedupDecision::Duplicate { distance };
            }
            log::debug!("새 인식 결과 (거리 {})", distance);
        }

        self.last = Some(key);
        DedupDecision::New { text: filtered }
    }

    /// 기준 결과 초기화
    pub fn reset(&mut self) {
        self.last = None;
    }
}
