//! 편집 거리 기반 유사도
//!
//! 문자(char) 단위 레벤슈타인 거리입니다. 분해된 자모 하나하나가 비교 단위가 됩니다.
//! "같은 텍스트" 판정 임계값은 호출자가 정합니다 ([`crate::dedup::MatchThreshold`]).

use super::error::SimilarityError;

/// 거리 계산용 작업 버퍼
///
/// 두 행만 유지하며 호출 사이에 재사용하면 힙 할당을 피할 수 있습니다.
/// 스레드마다 하나씩 두고 공유하지 않습니다.
#[derive(Debug, Default)]
pub struct DistanceScratch {
    prev: Vec<usize>,
    curr: Vec<usize>,
}

impl DistanceScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// 길이 `len`까지의 입력을 재할당 없이 처리할 수 있도록 준비
    pub fn with_capacity(len: usize) -> Self {
        Self {
            prev: Vec::with_capacity(len + 1),
            curr: Vec::with_capacity(len + 1),
        }
    }

    /// 두 문자 배열의 편집 거리
    pub fn distance(&mut self, s1: &[char], s2: &[char]) -> usize {
        // 짧은 쪽을 열로 사용 (거리는 대칭)
        let (rows, cols) = if s1.len() >= s2.len() { (s1, s2) } else { (s2, s1) };
        let n = cols.len();

        self.prev.clear();
        self.prev.extend(0..=n);
        self.curr.clear();
        self.curr.resize(n + 1, 0);

        for (i, &rc) in rows.iter().enumerate() {
            self.curr[0] = i + 1;
            for (j, &cc) in cols.iter().enumerate() {
                self.curr[j + 1] = if rc == cc {
                    self.prev[j]
                } else {
                    let insert = self.curr[j];
                    let delete = self.prev[j + 1];
                    let replace = self.prev[j];
                    1 + insert.min(delete).min(replace)
                };
            }
            std::mem::swap(&mut self.prev, &mut self.curr);
        }

        self.prev[n]
    }
}

/// 두 문자 배열의 편집 거리 (삽입/삭제/치환 비용 1)
pub fn edit_distance(s1: &[char], s2: &[char]) -> usize {
    DistanceScratch::with_capacity(s1.len().min(s2.len())).distance(s1, s2)
}

/// 두 문자열의 편집 거리 (호출자용 판정 신호)
pub fn similarity_score(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let distance = edit_distance(&a, &b);
    log::debug!("dist {:?} {:?} {}", s1, s2, distance);
    distance
}

/// 입력 검증을 포함한 유사도 계산기
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    /// 입력 최대 문자 수 (None이면 제한 없음)
    max_input_chars: Option<usize>,
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 입력 길이 제한 설정 (비용이 두 길이의 곱에 비례하므로)
    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = Some(max);
        self
    }

    pub fn max_input_chars(&self) -> Option<usize> {
        self.max_input_chars
    }

    /// 두 입력의 편집 거리
    ///
    /// 입력이 없으면 `InvalidInput`. 빈 문자열은 정상 입력입니다.
    pub fn score(&self, s1: Option<&str>, s2: Option<&str>) -> Result<usize, SimilarityError> {
        let mut scratch = DistanceScratch::new();
        self.score_with(&mut scratch, s1, s2)
    }

    /// 작업 버퍼를 재사용하는 [`score`](Self::score)
    pub fn score_with(
        &self,
        scratch: &mut DistanceScratch,
        s1: Option<&str>,
        s2: Option<&str>,
    ) -> Result<usize, SimilarityError> {
        let s1 = s1.ok_or(SimilarityError::InvalidInput("s1"))?;
        let s2 = s2.ok_or(SimilarityError::InvalidInput("s2"))?;

        let a: Vec<char> = s1.chars().collect();
        let b: Vec<char> = s2.chars().collect();
        if let Some(max) = self.max_input_chars {
            let len = a.len().max(b.len());
            if len > max {
                return Err(SimilarityError::InputTooLong { len, max });
            }
        }

        let distance = scratch.distance(&a, &b);
        log::debug!("dist {:?} {:?} {}", s1, s2, distance);
        Ok(distance)
    }
}
