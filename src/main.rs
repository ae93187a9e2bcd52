//! jamosim - 한글 OCR 결과 정규화 / 유사도 CLI

use jamosim::config::{config_dir, load_config, JamosimConfig};
use jamosim::ocr::LanguageData;
use jamosim::prefs::Preferences;
use jamosim::{DedupDecision, MatchThreshold, Normalizer, ReadDeduplicator};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// 직전 실행에서 마지막으로 채택한 인식 결과 키
const LAST_TEXT_KEY: &str = "last_text";

const USAGE: &str = "\
사용법: jamosim <명령>

  filter                  표준입력 각 줄에서 완성형 한글과 공백만 남김
  decompose [--hex]       필터 후 자모 분해 (--hex: 코드포인트로 출력)
  distance <a> <b>        두 텍스트의 정규화 후 편집 거리
  dedup [--threshold N]   표준입력 각 줄을 인식 결과로 보고 새 내용만 출력
  provision <bundle_dir>  OCR 언어 모델 파일을 데이터 경로로 복사";

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config();

    let result = match args.first().map(String::as_str) {
        Some("filter") => run_filter(&config),
        Some("decompose") => run_decompose(&config, args.iter().any(|a| a == "--hex")),
        Some("distance") if args.len() == 3 => run_distance(&config, &args[1], &args[2]),
        Some("dedup") => match parse_threshold(&args[1..]) {
            Ok(flag) => run_dedup(&config, flag),
            Err(e) => return usage_error(&e),
        },
        Some("provision") if args.len() == 2 => run_provision(&config, Path::new(&args[1])),
        _ => return usage_error("알 수 없는 명령"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("오류: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn usage_error(message: &str) -> ExitCode {
    eprintln!("{}\n\n{}", message, USAGE);
    ExitCode::from(2)
}

/// `--threshold N` 파싱
fn parse_threshold(args: &[String]) -> Result<Option<usize>, String> {
    match args {
        [] => Ok(None),
        [flag, value] if flag == "--threshold" => value
            .parse()
            .map(Some)
            .map_err(|_| format!("잘못된 임계값: {}", value)),
        _ => Err("dedup 인자 오류".to_string()),
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn for_each_line(mut f: impl FnMut(&str, &mut dyn Write) -> CliResult) -> CliResult {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let out: &mut dyn Write = &mut lock;
    for line in stdin.lock().lines() {
        let line = line?;
        f(&line, &mut *out)?;
    }
    Ok(())
}

fn run_filter(config: &JamosimConfig) -> CliResult {
    let normalizer = Normalizer::with_config(config.normalizer_config());
    for_each_line(|line, out| {
        writeln!(out, "{}", normalizer.filter(line))?;
        Ok(())
    })
}

fn run_decompose(config: &JamosimConfig, hex: bool) -> CliResult {
    let normalizer = Normalizer::with_config(config.normalizer_config().with_decompose(true));
    for_each_line(|line, out| {
        let decomposed = normalizer.normalize(line);
        if hex {
            let codes: Vec<String> = decomposed
                .chars()
                .map(|c| format!("U+{:04X}", c as u32))
                .collect();
            writeln!(out, "{}", codes.join(" "))?;
        } else {
            writeln!(out, "{}", decomposed)?;
        }
        Ok(())
    })
}

fn run_distance(config: &JamosimConfig, a: &str, b: &str) -> CliResult {
    let normalizer = Normalizer::with_config(config.normalizer_config());
    let distance = config
        .scorer()
        .score(Some(&normalizer.normalize(a)), Some(&normalizer.normalize(b)))?;
    println!("{}", distance);
    Ok(())
}

fn run_dedup(config: &JamosimConfig, threshold_flag: Option<usize>) -> CliResult {
    let threshold = match threshold_flag {
        Some(n) => MatchThreshold::new(n),
        None => config.match_threshold(),
    };
    let normalizer = Normalizer::with_config(config.normalizer_config());
    let mut dedup = ReadDeduplicator::with_normalizer(normalizer, threshold);

    // 직전 실행의 마지막 결과를 기준으로 삼음
    let mut prefs = Preferences::open(config.preferences_path())?;
    let previous = prefs.get_string(LAST_TEXT_KEY);
    if !previous.is_empty() {
        dedup.observe(&previous);
    }

    let mut last_new = None;
    for_each_line(|line, out| {
        if let DedupDecision::New { text } = dedup.observe(line) {
            writeln!(out, "{}", text)?;
            last_new = Some(text);
        }
        Ok(())
    })?;

    if let Some(text) = last_new {
        prefs.set_string(LAST_TEXT_KEY, &text)?;
    }
    Ok(())
}

fn run_provision(config: &JamosimConfig, bundle_dir: &Path) -> CliResult {
    let data_path = if config.tessdata_dir.is_empty() {
        config_dir().join("tesseract")
    } else {
        PathBuf::from(&config.tessdata_dir)
    };
    let data = LanguageData::new(data_path, config.language.clone());
    if data.ensure_installed(bundle_dir)? {
        println!("복사됨: {}", data.trained_data_path().display());
    } else {
        println!("이미 있음: {}", data.trained_data_path().display());
    }
    Ok(())
}
