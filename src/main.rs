//! koroman - 한글 로마자 변환 명령행 도구

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use koroman::config::{load_config, load_config_from};
use koroman::{
    romanize_text, romanize_text_parts, AssimilationDirection, RomanizeOptions, RomanizedParts,
    WordClass,
};

#[derive(Parser, Debug)]
#[command(name = "koroman", version, about = "한글을 발음 규칙에 따라 로마자로 변환")]
struct Cli {
    /// 변환할 텍스트 (없으면 표준 입력을 줄 단위로 변환)
    text: Vec<String>,

    /// 단어 유형: substantive, compound, place, name, generic
    #[arg(short = 'c', long = "class")]
    word_class: Option<WordClass>,

    /// ㄴ+ㄹ 동화 방향: progressive, regressive
    #[arg(short, long)]
    direction: Option<AssimilationDirection>,

    /// 설정 파일 경로
    #[arg(long)]
    config: Option<PathBuf>,

    /// 음절별 결과를 JSON으로 출력
    #[arg(long)]
    json: bool,
}

/// JSON 출력 한 줄
#[derive(Serialize)]
struct JsonLine<'a> {
    input: &'a str,
    romanized: String,
    syllables: Vec<RomanizedParts>,
}

fn main() -> ExitCode {
    // 로깅 초기화 (기본 warn, RUST_LOG로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 설정 로드 (명령행 옵션이 우선)
    let config = match &cli.config {
        Some(path) => match load_config_from(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("설정 파일 로드 실패 ({}): {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => load_config(),
    };
    let mut options = config.options();
    if let Some(direction) = cli.direction {
        options = options.with_direction(direction);
    }
    if let Some(word_class) = cli.word_class {
        options = options.with_word_class(word_class);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if cli.text.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .try_for_each(|line| emit(&mut out, &line?, &options, cli.json))
    } else {
        emit(&mut out, &cli.text.join(" "), &options, cli.json)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("출력 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn emit(out: &mut impl Write, input: &str, options: &RomanizeOptions, json: bool) -> io::Result<()> {
    let romanized = romanize_text(input, options);
    if json {
        let line = JsonLine {
            input,
            romanized,
            syllables: romanize_text_parts(input, options),
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)
    } else {
        writeln!(out, "{}", romanized)
    }
}
