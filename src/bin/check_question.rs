use std::io::Write;
use std::{
    env,
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use anyhow::Context;
use question_ksc::contract::{snapshot_deviations, summarize, violations, QuestionInfo};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const DEFAULT_OUTPUT_DIR: &str = "output/questions";
const OUTPUT_DIR_VAR: &str = "QUESTION_KSC_OUTPUT_DIR";

pub struct Config {
    pub payload_path: String,
    pub output_dir: String,
}

impl Config {
    pub fn new(payload_path: String, output_dir: &str) -> Self {
        Self {
            payload_path,
            output_dir: output_dir.to_string(),
        }
    }
}

/// Output directory: second argument, then `QUESTION_KSC_OUTPUT_DIR`, then
/// `output/questions`.
fn parse_config(
    mut args: impl Iterator<Item = String>,
    env_output_dir: Option<String>,
) -> anyhow::Result<Config> {
    let payload_path = args
        .next()
        .context("payload path is required, pass the JSON body returned by the question service")?;
    let output_dir = args
        .next()
        .or(env_output_dir)
        .unwrap_or(DEFAULT_OUTPUT_DIR.to_string());

    Ok(Config::new(payload_path, &output_dir))
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = env::args().skip(1);

    let config = match parse_config(args, env::var(OUTPUT_DIR_VAR).ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Usage: cargo run --bin check_question <payload.json> [output_dir]");
            return Err(e);
        }
    };

    let raw = fs::read_to_string(&config.payload_path)
        .context(format!("failed to read {}", config.payload_path))?;

    let info = check_payload(&raw, &config.payload_path)?;
    log::info!(
        "parsed question {} with {} ksc entries",
        info.question_data.question_id,
        info.ksc_data_list.len()
    );

    let deviations = snapshot_deviations(&info);

    let summary = summarize(&info).context("failed to summarize question")?;
    let summary_path = save_summary(
        Path::new(&config.output_dir),
        info.question_data.question_id,
        &summary,
    )?;

    println!("Question summary\n");
    println!("---");
    println!("{}", summary);
    println!("---\n");

    if !deviations.is_empty() {
        println!(
            "{BOLD}{}{RESET} fields differ from the documented snapshot",
            deviations.len()
        );
    }

    println!("wrote {BOLD}{}{RESET}", summary_path.display());

    Ok(())
}

/// Parses the payload into a `Value` once, reports every violation in it, then
/// deserializes that same value.
fn check_payload(raw: &str, source: &str) -> anyhow::Result<QuestionInfo> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context(format!("{} is not JSON", source))?;
    let found = violations(&value);
    if !found.is_empty() {
        for violation in &found {
            eprintln!("{}", violation);
        }
        return Err(anyhow::anyhow!(
            "{} schema violations in {}",
            found.len(),
            source
        ));
    }

    serde_json::from_value(value).context("payload has the right constraints but wrong types")
}

fn summary_path(output_dir: &Path, question_id: u32) -> PathBuf {
    output_dir.join(format!("question-{}.yaml", question_id))
}

/// Writes `<output_dir>/question-<id>.yaml`, creating the directory if needed.
fn save_summary(output_dir: &Path, question_id: u32, summary: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(output_dir).context("failed to create output directory")?;
    let path = summary_path(output_dir, question_id);
    write_summary(&path, summary)?;
    Ok(path)
}

fn write_summary(path: &Path, summary: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)
        .context(format!("failed to open {}", path.display()))?;

    write!(file, "{}", summary).context("failed to write question summary")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("check-question-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn reads_positional_arguments() {
        let config = parse_config(args(&["q.json", "out"]), None).unwrap();
        assert_eq!(config.payload_path, "q.json");
        assert_eq!(config.output_dir, "out");
    }

    #[test]
    fn payload_path_is_required() {
        assert!(parse_config(std::iter::empty(), None).is_err());
    }

    #[test]
    fn output_dir_precedence() {
        let from_arg = parse_config(args(&["q.json", "out"]), Some("env-dir".into())).unwrap();
        assert_eq!(from_arg.output_dir, "out");

        let from_env = parse_config(args(&["q.json"]), Some("env-dir".into())).unwrap();
        assert_eq!(from_env.output_dir, "env-dir");

        let fallback = parse_config(args(&["q.json"]), None).unwrap();
        assert_eq!(fallback.output_dir, DEFAULT_OUTPUT_DIR);
    }

    const FIXTURE: &str = include_str!("../../tests/fixtures/question_info.json");

    #[test]
    fn checks_and_parses_fixture() {
        let info = check_payload(FIXTURE, "fixture").unwrap();
        assert_eq!(info.question_data.question_id, 1832);
        assert_eq!(info.ksc_data_list.len(), 2);
    }

    #[test]
    fn counts_every_violation() {
        let mut raw: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
        raw["questionData"]["questionLevelId"] = serde_json::json!(3);
        raw["hintVideo"] = serde_json::json!("hint.mp4");

        let err = check_payload(&raw.to_string(), "edited").unwrap_err();
        assert_eq!(err.to_string(), "2 schema violations in edited");
    }

    #[test]
    fn wrong_types_after_clean_constraints() {
        let mut raw: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
        raw["questionData"]["questionScore"] = serde_json::json!("high");
        assert!(check_payload(&raw.to_string(), "edited").is_err());
        assert!(check_payload("{ nope", "broken").is_err());
    }

    #[test]
    fn summary_file_is_named_after_question() {
        assert_eq!(
            summary_path(Path::new("out"), 1832),
            Path::new("out").join("question-1832.yaml")
        );
    }

    #[test]
    fn save_creates_directory_and_truncates() {
        let root = scratch_dir("save");
        let output_dir = root.join("nested").join("questions");

        let path = save_summary(&output_dir, 1832, "question_id: 1832\ncode: long-first-write\n")
            .unwrap();
        assert_eq!(path, output_dir.join("question-1832.yaml"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "question_id: 1832\ncode: long-first-write\n"
        );

        write_summary(&path, "question_id: 1832\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "question_id: 1832\n");

        fs::remove_dir_all(&root).unwrap();
    }
}
