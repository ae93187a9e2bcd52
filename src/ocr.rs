//! OCR 엔진 연동 경계
//!
//! 인식 엔진 자체는 외부 구성요소입니다. 여기서는 엔진이 지켜야 할 인터페이스와
//! 언어 모델 파일 준비(번들 → 쓰기 가능한 위치 복사), 인식 결과 필터링만 다룹니다.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::normalizer::Normalizer;

/// 기본 인식 언어
pub const DEFAULT_LANGUAGE: &str = "kor";

/// 언어 모델 파일 확장자
const TRAINED_DATA_EXT: &str = "traineddata";

/// OCR 에러
#[derive(Debug)]
pub enum OcrError {
    /// 파일 입출력 실패
    Io(std::io::Error),
    /// 언어 모델 파일을 찾을 수 없음
    MissingLanguageData(PathBuf),
    /// 엔진 초기화 실패
    Init(String),
    /// 인식 실패
    Recognize(String),
}

impl std::fmt::Display for OcrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OcrError::Io(e) => write!(f, "파일 입출력 오류: {}", e),
            OcrError::MissingLanguageData(p) => {
                write!(f, "언어 모델 파일이 없습니다: {}", p.display())
            }
            OcrError::Init(s) => write!(f, "OCR 초기화 실패: {}", s),
            OcrError::Recognize(s) => write!(f, "OCR 인식 실패: {}", s),
        }
    }
}

impl std::error::Error for OcrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OcrError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OcrError {
    fn from(e: std::io::Error) -> Self {
        OcrError::Io(e)
    }
}

/// 외부 OCR 엔진 인터페이스
pub trait OcrEngine {
    /// 인식 대상 이미지 타입
    type Image: ?Sized;

    /// 최초 1회 초기화. `data_path` 아래 `tessdata/<language>.traineddata`가 있어야 함
    fn initialize(&mut self, data_path: &Path, language: &str) -> Result<(), OcrError>;

    /// 이미지에서 원문 텍스트 인식 (필터링 전)
    fn recognize(&mut self, image: &Self::Image) -> Result<String, OcrError>;

    /// 엔진 자원 해제
    fn release(&mut self) {}
}

/// 언어 모델 파일 위치
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageData {
    data_path: PathBuf,
    language: String,
}

impl LanguageData {
    pub fn new(data_path: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
            language: language.into(),
        }
    }

    /// 엔진에 넘길 데이터 경로
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// `<data_path>/tessdata`
    pub fn tessdata_dir(&self) -> PathBuf {
        self.data_path.join("tessdata")
    }

    fn file_name(&self) -> String {
        format!("{}.{}", self.language, TRAINED_DATA_EXT)
    }

    /// `<data_path>/tessdata/<language>.traineddata`
    pub fn trained_data_path(&self) -> PathBuf {
        self.tessdata_dir().join(self.file_name())
    }

    pub fn is_installed(&self) -> bool {
        self.trained_data_path().is_file()
    }

    /// 모델 파일이 없으면 번들 디렉토리(`<bundle_dir>/tessdata/`)에서 복사
    ///
    /// 반환: 새로 복사했으면 true
    pub fn ensure_installed(&self, bundle_dir: &Path) -> Result<bool, OcrError> {
        fs::create_dir_all(self.tessdata_dir())?;

        let target = self.trained_data_path();
        if target.is_file() {
            return Ok(false);
        }

        let source = bundle_dir.join("tessdata").join(self.file_name());
        if !source.is_file() {
            return Err(OcrError::MissingLanguageData(source));
        }

        let bytes = fs::copy(&source, &target)?;
        log::info!("언어 모델 복사: {} ({} bytes)", target.display(), bytes);
        Ok(true)
    }
}

/// 엔진 + 필터 묶음
///
/// 생성 시 언어 모델을 준비하고 엔진을 초기화하며, drop 시 엔진을 해제합니다.
pub struct OcrReader<E: OcrEngine> {
    engine: E,
    normalizer: Normalizer,
}

impl<E: OcrEngine> OcrReader<E> {
    pub fn new(
        mut engine: E,
        language_data: &LanguageData,
        bundle_dir: &Path,
    ) -> Result<Self, OcrError> {
        language_data.ensure_installed(bundle_dir)?;
        engine.initialize(language_data.data_path(), language_data.language())?;
        Ok(Self {
            engine,
            normalizer: Normalizer::new(),
        })
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// 인식 후 완성형 한글과 공백만 남긴 텍스트
    pub fn read(&mut self, image: &E::Image) -> Result<String, OcrError> {
        let raw = self.engine.recognize(image)?;
        log::info!("text {}", raw);
        Ok(self.normalizer.filter(&raw))
    }

    /// 인식 후 정규화(필터 + 분해 설정)까지 적용한 텍스트
    pub fn read_normalized(&mut self, image: &E::Image) -> Result<String, OcrError> {
        let raw = self.engine.recognize(image)?;
        log::info!("text {}", raw);
        Ok(self.normalizer.normalize(&raw))
    }
}

impl<E: OcrEngine> Drop for OcrReader<E> {
    fn drop(&mut self) {
        self.engine.release();
    }
}
