//! 문자열 키-값 환경설정 저장소 (JSON 파일)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// 저장소 이름 (파일명 `<이름>.json`)
pub const PREFERENCES_NAME: &str = "rebuild_preference";

/// 환경설정 에러
#[derive(Debug)]
pub enum PrefsError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(String),
}

impl std::fmt::Display for PrefsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefsError::Io(e) => write!(f, "환경설정 파일 오류: {}", e),
            PrefsError::Parse(s) => write!(f, "환경설정 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for PrefsError {}

impl From<std::io::Error> for PrefsError {
    fn from(e: std::io::Error) -> Self {
        PrefsError::Io(e)
    }
}

/// 키-값 저장소
///
/// 없는 키는 빈 문자열을 돌려주고, `set_string`은 즉시 파일에 씁니다.
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl Preferences {
    /// `dir/rebuild_preference.json` 열기 (없으면 빈 저장소)
    pub fn open_in(dir: &Path) -> Result<Self, PrefsError> {
        Self::open(dir.join(format!("{}.json", PREFERENCES_NAME)))
    }

    /// 지정 경로의 저장소 열기 (없으면 빈 저장소)
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| PrefsError::Parse(e.to_string()))?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 값 조회, 없으면 ""
    pub fn get_string(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }

    /// 값 저장 후 파일 기록
    ///
    /// 기록에 실패하면 메모리의 값도 바뀌지 않습니다.
    pub fn set_string(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut next = self.values.clone();
        next.insert(key.to_string(), value.to_string());
        self.write(&next)?;
        self.values = next;
        Ok(())
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json =
            serde_json::to_string_pretty(values).map_err(|e| PrefsError::Parse(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::open_in(dir.path()).unwrap();
        assert_eq!(prefs.get_string("last_text"), "");
    }

    #[test]
    fn test_set_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = Preferences::open_in(dir.path()).unwrap();
        prefs.set_string("last_text", "안녕하세요").unwrap();
        assert_eq!(prefs.get_string("last_text"), "안녕하세요");

        let reopened = Preferences::open_in(dir.path()).unwrap();
        assert_eq!(reopened.get_string("last_text"), "안녕하세요");
        assert!(reopened.path().ends_with("rebuild_preference.json"));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store_dir = dir.path().join("store");
        let mut prefs = Preferences::open_in(&store_dir).unwrap();
        prefs.set_string("last_text", "첫 번째").unwrap();

        // 저장 디렉토리 자리에 일반 파일을 두어 기록을 막음
        fs::remove_dir_all(&store_dir).unwrap();
        fs::write(&store_dir, "").unwrap();

        assert!(matches!(
            prefs.set_string("last_text", "두 번째"),
            Err(PrefsError::Io(_))
        ));
        assert_eq!(prefs.get_string("last_text"), "첫 번째");
    }

    #[test]
    fn test_broken_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(Preferences::open(&path), Err(PrefsError::Parse(_))));
    }
}
