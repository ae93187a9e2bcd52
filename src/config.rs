//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::normalizer::NormalizerConfig;
use crate::core::similarity::SimilarityScorer;
use crate::dedup::MatchThreshold;
use crate::ocr::DEFAULT_LANGUAGE;

/// jamosim 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JamosimConfig {
    /// 같은 텍스트로 볼 최대 편집 거리 (없으면 완전 일치만)
    #[serde(default)]
    pub similarity_threshold: Option<usize>,
    /// 비교 전 자모 분해 여부
    #[serde(default = "default_decompose")]
    pub decompose: bool,
    /// 유사도 계산 입력 최대 문자 수
    #[serde(default)]
    pub max_input_chars: Option<usize>,
    /// OCR 언어 모델 데이터 경로
    #[serde(default)]
    pub tessdata_dir: String,
    /// OCR 언어 코드
    #[serde(default = "default_language")]
    pub language: String,
    /// 환경설정 파일 경로 (비어 있으면 설정 파일 옆)
    #[serde(default)]
    pub preferences_path: String,
}

fn default_decompose() -> bool {
    true
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for JamosimConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: None,
            decompose: default_decompose(),
            max_input_chars: None,
            tessdata_dir: String::new(),
            language: default_language(),
            preferences_path: String::new(),
        }
    }
}

impl JamosimConfig {
    pub fn normalizer_config(&self) -> NormalizerConfig {
        NormalizerConfig::new().with_decompose(self.decompose)
    }

    pub fn match_threshold(&self) -> MatchThreshold {
        MatchThreshold::from_setting(self.similarity_threshold)
    }

    pub fn scorer(&self) -> SimilarityScorer {
        match self.max_input_chars {
            Some(max) => SimilarityScorer::new().with_max_input_chars(max),
            None => SimilarityScorer::new(),
        }
    }

    /// 환경설정 파일 경로
    pub fn preferences_path(&self) -> PathBuf {
        if self.preferences_path.is_empty() {
            config_dir().join(format!("{}.json", crate::prefs::PREFERENCES_NAME))
        } else {
            PathBuf::from(&self.preferences_path)
        }
    }
}

/// 설정 디렉토리: ~/.config/jamosim
pub fn config_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("jamosim")
}

/// 설정 파일 경로: ~/.config/jamosim/config.json
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> JamosimConfig {
    load_config_from(&config_path())
}

/// 지정 경로에서 설정 로드
pub fn load_config_from(path: &std::path::Path) -> JamosimConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용: {}", e);
            JamosimConfig::default()
        }),
        Err(_) => JamosimConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &JamosimConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정 경로에 설정 저장
pub fn save_config_to(config: &JamosimConfig, path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JamosimConfig::default();
        assert_eq!(config.similarity_threshold, None);
        assert!(config.decompose);
        assert_eq!(config.language, "kor");
        assert_eq!(config.match_threshold(), MatchThreshold::exact());
    }

    #[test]
    fn test_backward_compat_missing_field() {
        let json = r#"{"similarity_threshold": 3}"#;
        let config: JamosimConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.similarity_threshold, Some(3));
        assert!(config.decompose);
        assert_eq!(config.language, "kor");
        assert_eq!(config.match_threshold().max_distance(), 3);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = JamosimConfig {
            similarity_threshold: Some(2),
            decompose: false,
            max_input_chars: Some(512),
            ..JamosimConfig::default()
        };
        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);
        assert_eq!(config.scorer().max_input_chars(), Some(512));
        assert!(!config.normalizer_config().decompose);
    }

    #[test]
    fn test_broken_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{").unwrap();
        assert_eq!(load_config_from(&path), JamosimConfig::default());
    }

    #[test]
    fn test_explicit_preferences_path() {
        let config = JamosimConfig {
            preferences_path: "/tmp/prefs.json".into(),
            ..JamosimConfig::default()
        };
        assert_eq!(config.preferences_path(), PathBuf::from("/tmp/prefs.json"));
    }
}
