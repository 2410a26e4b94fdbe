use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{QuestionBank, QuizSettings, QuizSettingsDraft};
use services::{Clock, QuizLoopService};
use storage::repository::Storage;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeconds { flag: &'static str, raw: String },
    InvalidQuestionsPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeconds { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected whole seconds)")
            }
            ArgsError::InvalidQuestionsPath { raw } => {
                write!(f, "invalid --questions value: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_seconds(flag: &'static str, raw: String) -> Result<u32, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeconds { flag, raw })
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
    bank: Arc<QuestionBank>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }
}

#[derive(Debug)]
struct Args {
    questions: PathBuf,
    settings: QuizSettingsDraft,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--questions <path>] [--duration <secs>] [--critical <secs>]");
    eprintln!("  cargo run -p app -- check [--questions <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions {DEFAULT_QUESTIONS_PATH}");
    eprintln!("  --duration 60");
    eprintln!("  --critical 10");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_DURATION_SECS, QUIZ_CRITICAL_SECS, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    /// Flags win over the environment, which wins over defaults. Unparsable environment
    /// values are ignored.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut questions = env("QUIZ_QUESTIONS")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_QUESTIONS_PATH), PathBuf::from);
        let mut settings = QuizSettingsDraft {
            duration_secs: env("QUIZ_DURATION_SECS").and_then(|v| v.trim().parse().ok()),
            critical_threshold_secs: env("QUIZ_CRITICAL_SECS")
                .and_then(|v| v.trim().parse().ok()),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidQuestionsPath { raw: value });
                    }
                    questions = PathBuf::from(value);
                }
                "--duration" => {
                    let value = require_value(args, "--duration")?;
                    settings.duration_secs = Some(parse_seconds("--duration", value)?);
                }
                "--critical" => {
                    let value = require_value(args, "--critical")?;
                    settings.critical_threshold_secs = Some(parse_seconds("--critical", value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            questions,
            settings,
        })
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let settings: QuizSettings = parsed.settings.validate()?;

    let storage = Storage::json_file(&parsed.questions);
    let quiz_loop = QuizLoopService::new(Clock::system(), Arc::clone(&storage.questions))
        .with_settings(settings);

    // A quiz without questions is unusable: fail before any window opens.
    let bank = quiz_loop.load_bank().await.map_err(|err| {
        error!(path = %parsed.questions.display(), %err, "could not load questions");
        err
    })?;

    match cmd {
        Command::Ui => {
            info!(
                questions = bank.len(),
                duration_secs = settings.duration_secs(),
                "launching quiz window"
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                quiz_loop: Arc::new(quiz_loop),
                bank,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Python Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            println!(
                "{}: {} questions, {}s per attempt",
                parsed.questions.display(),
                bank.len(),
                settings.duration_secs()
            );
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("Could not start quiz: {err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        let mut iter = args.iter().map(|a| (*a).to_owned());
        Args::parse(&mut iter, |key| {
            env.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn defaults_apply_without_flags_or_env() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args.questions, PathBuf::from(DEFAULT_QUESTIONS_PATH));
        let settings = args.settings.validate().unwrap();
        assert_eq!(settings.duration_secs(), 60);
        assert_eq!(settings.critical_threshold_secs(), 10);
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--questions", "bank.json", "--duration", "90"],
            &[
                ("QUIZ_QUESTIONS", "env.json"),
                ("QUIZ_DURATION_SECS", "30"),
                ("QUIZ_CRITICAL_SECS", "5"),
            ],
        )
        .unwrap();
        assert_eq!(args.questions, PathBuf::from("bank.json"));
        assert_eq!(args.settings.duration_secs, Some(90));
        assert_eq!(args.settings.critical_threshold_secs, Some(5));
    }

    #[test]
    fn short_duration_alone_is_accepted() {
        let args = parse(&["--duration", "5"], &[]).unwrap();
        let settings = args.settings.validate().unwrap();
        assert_eq!(settings.duration_secs(), 5);
        assert_eq!(settings.critical_threshold_secs(), 5);
    }

    #[test]
    fn bad_environment_values_are_ignored() {
        let args = parse(&[], &[("QUIZ_DURATION_SECS", "soon")]).unwrap();
        assert_eq!(args.settings.duration_secs, None);
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(matches!(
            parse(&["--duration"], &[]),
            Err(ArgsError::MissingValue { flag: "--duration" })
        ));
        assert!(matches!(
            parse(&["--critical", "ten"], &[]),
            Err(ArgsError::InvalidSeconds { flag: "--critical", .. })
        ));
        assert!(matches!(
            parse(&["--questions", " "], &[]),
            Err(ArgsError::InvalidQuestionsPath { .. })
        ));
        assert!(matches!(
            parse(&["--verbose"], &[]),
            Err(ArgsError::UnknownArg(_))
        ));
    }
}
