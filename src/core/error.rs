//! 자모 변환 / 유사도 계산 에러

/// 인덱스 → 코드포인트 변환 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JamoError {
    /// 초성 인덱스 범위 초과 (0~18)
    LeadingOutOfRange(u32),
    /// 중성 인덱스 범위 초과 (0~20)
    VowelOutOfRange(u32),
    /// 종성 인덱스 범위 초과 (1~27, 0은 종성 없음)
    TrailingOutOfRange(u32),
    /// 완성형 한글 음절이 아님
    NotASyllable(char),
}

impl std::fmt::Display for JamoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JamoError::LeadingOutOfRange(i) => write!(f, "초성 인덱스 범위 초과: {}", i),
            JamoError::VowelOutOfRange(i) => write!(f, "중성 인덱스 범위 초과: {}", i),
            JamoError::TrailingOutOfRange(i) => write!(f, "종성 인덱스 범위 초과: {}", i),
            JamoError::NotASyllable(c) => write!(f, "완성형 한글 음절이 아님: U+{:04X}", *c as u32),
        }
    }
}

impl std::error::Error for JamoError {}

/// 유사도 계산 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// 입력 시퀀스가 없음 (빈 문자열은 허용)
    InvalidInput(&'static str),
    /// 설정된 최대 길이 초과
    InputTooLong { len: usize, max: usize },
}

impl std::fmt::Display for SimilarityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimilarityError::InvalidInput(which) => write!(f, "입력 문자열이 없습니다: {}", which),
            SimilarityError::InputTooLong { len, max } => {
                write!(f, "입력 길이 초과: {}자 (최대 {}자)", len, max)
            }
        }
    }
}

impl std::error::Error for SimilarityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            JamoError::NotASyllable('a').to_string(),
            "완성형 한글 음절이 아님: U+0061"
        );
        assert_eq!(
            SimilarityError::InputTooLong { len: 10, max: 4 }.to_string(),
            "입력 길이 초과: 10자 (최대 4자)"
        );
    }
}
