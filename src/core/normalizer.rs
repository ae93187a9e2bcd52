//! OCR 원문 정규화
//!
//! 인식 결과에서 완성형 한글만 남기고(필터), 비교를 위해 자모 단위로 분해합니다.

use super::unicode::{is_complete_hangul, jamo_triple, CodepointClass, CodepointRanges, VOWEL_PLACEHOLDER};

/// 완성형 한글과 공백만 남김
///
/// 가-힣, 개행, 공백이 아닌 문자는 공백으로 바꾸고,
/// 연속된 공백 문자(개행 포함)는 공백 하나로 합칩니다.
pub fn filter_to_hangul_and_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;

    for c in raw.chars() {
        if is_complete_hangul(c) {
            out.push(c);
            in_space = false;
        } else if !in_space {
            // 걸러진 문자와 공백류는 모두 구분자 하나가 됨
            out.push(' ');
            in_space = true;
        }
    }

    out
}

/// 기본 범위로 자모 분해
pub fn decompose(text: &str) -> String {
    decompose_with(text, &CodepointRanges::DEFAULT)
}

/// 주어진 범위로 자모 분해
///
/// | 분류 | 출력 |
/// |---|---|
/// | 공백/개행 | 그대로 |
/// | 단독 자음 | 그대로 |
/// | 단독 모음 | U+0000 자리표시 |
/// | 완성형 음절 | 초성 + 중성 + (종성) |
/// | 그 외 | 그대로 |
pub fn decompose_with(text: &str, ranges: &CodepointRanges) -> String {
    let mut out = String::with_capacity(text.len() * 3);

    for c in text.chars() {
        match ranges.classify(c) {
            CodepointClass::Whitespace
            | CodepointClass::StandaloneConsonant
            | CodepointClass::Other => out.push(c),
            CodepointClass::StandaloneVowel => out.push(VOWEL_PLACEHOLDER),
            CodepointClass::ComposedSyllable => match jamo_triple(c) {
                Ok(triple) => triple.push_to(&mut out),
                Err(e) => {
                    // 미할당 영역이나 블록 밖으로 넓힌 범위: 그대로 둠
                    log::debug!("분해 생략: {}", e);
                    out.push(c);
                }
            },
        }
    }

    out
}

/// 분해 결과를 문자 배열로 반환 (거리 계산 입력용)
pub fn decompose_chars(text: &str) -> Vec<char> {
    decompose(text).chars().collect()
}

/// 정규화 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    pub ranges: CodepointRanges,
    /// 필터 후 자모 분해 여부
    pub decompose: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            ranges: CodepointRanges::DEFAULT,
            decompose: true,
        }
    }
}

impl NormalizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 분해 여부 설정
    pub fn with_decompose(mut self, decompose: bool) -> Self {
        self.decompose = decompose;
        self
    }

    /// 분류 범위 설정
    ///
    /// 분류만 바뀝니다. 음절 범위를 한글 음절 블록 밖으로 넓혀도 그 문자는 분해되지 않습니다.
    pub fn with_ranges(mut self, ranges: CodepointRanges) -> Self {
        self.ranges = ranges;
        self
    }
}

/// 정규화기
///
/// 상태가 없으므로 여러 스레드에서 공유해도 됩니다.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// 필터만 적용
    pub fn filter(&self, raw: &str) -> String {
        filter_to_hangul_and_whitespace(raw)
    }

    /// 분류 범위로 분해만 적용
    pub fn decompose(&self, text: &str) -> String {
        decompose_with(text, &self.config.ranges)
    }

    /// 필터 후 (설정에 따라) 분해
    pub fn normalize(&self, raw: &str) -> String {
        let filtered = filter_to_hangul_and_whitespace(raw);
        if self.config.decompose {
            decompose_with(&filtered, &self.config.ranges)
        } else {
            filtered
        }
    }
}
