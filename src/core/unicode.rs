//! 유니코드 한글 분류/분해 유틸리티
//!
//! 완성형 음절의 인덱스 연산과 자모 코드포인트 변환을 담당합니다.
//! 모든 범위 경계는 불변 상수이며, 정규화기가 [`CodepointRanges`]로 묶어 소유합니다.

use super::error::JamoError;

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 마지막 완성형 음절 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;
/// 음절 블록 끝 (분해 대상 판별용, 미할당 영역 포함)
pub const HANGUL_SYLLABLE_BLOCK_END: u32 = 0xD7AF;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;
/// 완성형 음절 수 (19 × 21 × 28)
pub const SYLLABLE_COUNT: u32 = CHOSEONG_COUNT * JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 첫가끝 초성 시작 (ᄀ)
pub const CHOSEONG_BASE: u32 = 0x1100;
/// 첫가끝 중성 시작 (ᅡ)
pub const JUNGSEONG_BASE: u32 = 0x1161;
/// 첫가끝 종성 기준: 실제 첫 종성(ᆨ, U+11A8)보다 하나 앞. 인덱스 0 = 종성 없음
pub const JONGSEONG_BASE: u32 = 0x11A8 - 1;

/// 호환용 자음 시작 (ㄱ)
pub const COMPAT_CONSONANT_BASE: u32 = 0x3131;
/// 호환용 자음 판별 폭
pub const COMPAT_CONSONANT_SPAN: u32 = 36;
/// 호환용 모음 시작 (ㅏ)
pub const COMPAT_VOWEL_BASE: u32 = 0x314F;
/// 호환용 모음 판별 폭
pub const COMPAT_VOWEL_SPAN: u32 = 58;

/// 단독 모음 자리표시 문자 (U+0000)
pub const VOWEL_PLACEHOLDER: char = '\0';

/// 문자 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodepointClass {
    /// 개행 범위 제어문자 또는 공백
    Whitespace,
    /// 호환용 자음 (단독 입력)
    StandaloneConsonant,
    /// 호환용 모음 (단독 입력)
    StandaloneVowel,
    /// 완성형 음절 블록
    ComposedSyllable,
    /// 그 외
    Other,
}

/// 분류에 쓰이는 코드포인트 범위 (양 끝 포함)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointRanges {
    /// 이 값 이하의 코드포인트는 공백으로 취급
    pub line_break_max: u32,
    pub consonant: (u32, u32),
    pub vowel: (u32, u32),
    /// 분해 대상 판별 범위. 인덱스 연산은 항상 U+AC00~U+D7AF 블록 기준이므로
    /// 블록 밖으로 넓힌 부분은 분해되지 않고 그대로 출력됨
    pub syllable: (u32, u32),
}

impl CodepointRanges {
    /// 기본 범위
    pub const DEFAULT: CodepointRanges = CodepointRanges {
        line_break_max: 10,
        consonant: (COMPAT_CONSONANT_BASE, COMPAT_CONSONANT_BASE + COMPAT_CONSONANT_SPAN),
        vowel: (COMPAT_VOWEL_BASE, COMPAT_VOWEL_BASE + COMPAT_VOWEL_SPAN),
        syllable: (HANGUL_SYLLABLE_BASE, HANGUL_SYLLABLE_BLOCK_END),
    };

    /// 문자 하나를 분류
    ///
    /// 자음/모음 범위가 겹치는 구간(U+314F~U+3155)은 먼저 검사하는 자음으로 판정됩니다.
    pub fn classify(&self, c: char) -> CodepointClass {
        let cp = c as u32;
        if cp <= self.line_break_max || c == ' ' {
            CodepointClass::Whitespace
        } else if (self.consonant.0..=self.consonant.1).contains(&cp) {
            CodepointClass::StandaloneConsonant
        } else if (self.vowel.0..=self.vowel.1).contains(&cp) {
            CodepointClass::StandaloneVowel
        } else if (self.syllable.0..=self.syllable.1).contains(&cp) {
            CodepointClass::ComposedSyllable
        } else {
            CodepointClass::Other
        }
    }
}

impl Default for CodepointRanges {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 기본 범위로 문자 분류
pub fn classify(c: char) -> CodepointClass {
    CodepointRanges::DEFAULT.classify(c)
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 완성형 음절 하나를 분해한 결과 (첫가끝 자모)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JamoTriple {
    pub leading: char,
    pub vowel: char,
    /// 받침 없으면 None
    pub trailing: Option<char>,
}

impl JamoTriple {
    /// 출력 문자 수 (2 또는 3)
    pub fn char_count(&self) -> usize {
        if self.trailing.is_some() {
            3
        } else {
            2
        }
    }

    /// 초성, 중성, (종성) 순서로 문자열에 추가
    pub fn push_to(&self, out: &mut String) {
        out.push(self.leading);
        out.push(self.vowel);
        if let Some(t) = self.trailing {
            out.push(t);
        }
    }
}

/// 초성 인덱스 (0~18) → 첫가끝 초성 문자
pub fn leading_char(index: u32) -> Result<char, JamoError> {
    if index >= CHOSEONG_COUNT {
        return Err(JamoError::LeadingOutOfRange(index));
    }
    char::from_u32(CHOSEONG_BASE + index).ok_or(JamoError::LeadingOutOfRange(index))
}

/// 중성 인덱스 (0~20) → 첫가끝 중성 문자
pub fn vowel_char(index: u32) -> Result<char, JamoError> {
    if index >= JUNGSEONG_COUNT {
        return Err(JamoError::VowelOutOfRange(index));
    }
    char::from_u32(JUNGSEONG_BASE + index).ok_or(JamoError::VowelOutOfRange(index))
}

/// 종성 인덱스 (0~27) → 첫가끝 종성 문자, 0이면 None
pub fn trailing_char(index: u32) -> Result<Option<char>, JamoError> {
    if index >= JONGSEONG_COUNT {
        return Err(JamoError::TrailingOutOfRange(index));
    }
    if index == 0 {
        return Ok(None);
    }
    char::from_u32(JONGSEONG_BASE + index)
        .map(Some)
        .ok_or(JamoError::TrailingOutOfRange(index))
}

/// 음절 블록 코드포인트를 초성/중성/종성 인덱스로 분해 (범위 검사 없음)
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
fn split_indices(code: u32) -> (u32, u32, u32) {
    let offset = code - HANGUL_SYLLABLE_BASE;
    let choseong = offset / JONGSEONG_COUNT / JUNGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    (choseong, jungseong, jongseong)
}

/// 음절 블록 문자를 첫가끝 자모 셋으로 분해
///
/// 블록 끝의 미할당 영역(U+D7A4~U+D7AF)은 초성 인덱스가 19가 되어
/// `LeadingOutOfRange`를 반환합니다.
pub fn jamo_triple(c: char) -> Result<JamoTriple, JamoError> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_BLOCK_END).contains(&code) {
        return Err(JamoError::NotASyllable(c));
    }
    let (cho, jung, jong) = split_indices(code);
    Ok(JamoTriple {
        leading: leading_char(cho)?,
        vowel: vowel_char(jung)?,
        trailing: trailing_char(jong)?,
    })
}

/// 첫가끝 자모 셋을 완성형 음절로 재조합 (분해의 역연산)
pub fn compose_triple(triple: &JamoTriple) -> Result<char, JamoError> {
    let cho = (triple.leading as u32).wrapping_sub(CHOSEONG_BASE);
    let jung = (triple.vowel as u32).wrapping_sub(JUNGSEONG_BASE);
    let jong = match triple.trailing {
        Some(t) => {
            let idx = (t as u32).wrapping_sub(JONGSEONG_BASE);
            if idx == 0 {
                return Err(JamoError::TrailingOutOfRange(idx));
            }
            idx
        }
        None => 0,
    };
    if cho >= CHOSEONG_COUNT {
        return Err(JamoError::LeadingOutOfRange(cho));
    }
    if jung >= JUNGSEONG_COUNT {
        return Err(JamoError::VowelOutOfRange(jung));
    }
    if jong >= JONGSEONG_COUNT {
        return Err(JamoError::TrailingOutOfRange(jong));
    }
    let code = HANGUL_SYLLABLE_BASE + (cho * JUNGSEONG_COUNT + jung) * JONGSEONG_COUNT + jong;
    char::from_u32(code).ok_or(JamoError::NotASyllable(triple.leading))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_indices() {
        // 한 = 초성 ㅎ(18) + 중성 ㅏ(0) + 종성 ㄴ(4)
        assert_eq!(split_indices('가' as u32), (0, 0, 0));
        assert_eq!(split_indices('한' as u32), (18, 0, 4));
        assert_eq!(split_indices('글' as u32), (0, 18, 8));
        // 미할당 영역은 초성 인덱스가 범위를 벗어남
        assert_eq!(split_indices(0xD7A4).0, 19);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(' '), CodepointClass::Whitespace);
        assert_eq!(classify('\n'), CodepointClass::Whitespace);
        assert_eq!(classify('\t'), CodepointClass::Whitespace);
        // \r(13)은 개행 범위 검사(≤10)에 포함되지 않음
        assert_eq!(classify('\r'), CodepointClass::Other);
        assert_eq!(classify('ㄱ'), CodepointClass::StandaloneConsonant);
        assert_eq!(classify('ㅎ'), CodepointClass::StandaloneConsonant);
        // 자음 판별 폭이 모음 앞부분(ㅏ~ㅕ)까지 덮음
        assert_eq!(classify('ㅏ'), CodepointClass::StandaloneConsonant);
        assert_eq!(classify('ㅗ'), CodepointClass::StandaloneVowel);
        assert_eq!(classify('ㅣ'), CodepointClass::StandaloneVowel);
        assert_eq!(classify('가'), CodepointClass::ComposedSyllable);
        assert_eq!(classify('\u{D7AF}'), CodepointClass::ComposedSyllable);
        assert_eq!(classify('a'), CodepointClass::Other);
        assert_eq!(classify('1'), CodepointClass::Other);
    }

    #[test]
    fn test_index_conversions() {
        assert_eq!(leading_char(0), Ok('\u{1100}'));
        assert_eq!(leading_char(18), Ok('\u{1112}'));
        assert_eq!(leading_char(19), Err(JamoError::LeadingOutOfRange(19)));
        assert_eq!(vowel_char(20), Ok('\u{1175}'));
        assert_eq!(vowel_char(21), Err(JamoError::VowelOutOfRange(21)));
        assert_eq!(trailing_char(0), Ok(None));
        assert_eq!(trailing_char(1), Ok(Some('\u{11A8}')));
        assert_eq!(trailing_char(27), Ok(Some('\u{11C2}')));
        assert_eq!(trailing_char(28), Err(JamoError::TrailingOutOfRange(28)));
    }

    #[test]
    fn test_jamo_triple() {
        let t = jamo_triple('한').unwrap();
        assert_eq!(t.leading, '\u{1112}');
        assert_eq!(t.vowel, '\u{1161}');
        assert_eq!(t.trailing, Some('\u{11AB}'));
        assert_eq!(t.char_count(), 3);

        let t = jamo_triple('가').unwrap();
        assert_eq!(t.trailing, None);
        assert_eq!(t.char_count(), 2);

        assert_eq!(jamo_triple('a'), Err(JamoError::NotASyllable('a')));
        assert_eq!(
            jamo_triple('\u{D7A4}'),
            Err(JamoError::LeadingOutOfRange(19))
        );
    }

    #[test]
    fn test_compose_triple_round_trip() {
        for c in ['가', '각', '한', '글', '힣'] {
            let t = jamo_triple(c).unwrap();
            assert_eq!(compose_triple(&t), Ok(c));
        }
    }

    #[test]
    fn test_compose_triple_rejects_foreign_jamo() {
        let t = JamoTriple {
            leading: 'ㄱ',
            vowel: '\u{1161}',
            trailing: None,
        };
        assert!(compose_triple(&t).is_err());

        let t = JamoTriple {
            leading: '\u{1100}',
            vowel: '\u{1161}',
            trailing: Some('\u{11A7}'),
        };
        assert_eq!(compose_triple(&t), Err(JamoError::TrailingOutOfRange(0)));
    }
}
