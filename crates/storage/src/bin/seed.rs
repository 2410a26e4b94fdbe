use std::fmt;
use std::path::PathBuf;

use storage::json::JsonFileRepository;
use storage::repository::bank_from_records;
use storage::sample::sample_records;

#[derive(Debug, Clone)]
struct Args {
    out: PathBuf,
    force: bool,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidOut { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidOut { raw } => write!(f, "invalid --out value: {raw:?}"),
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

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut out = std::env::var("QUIZ_QUESTIONS")
            .map_or_else(|_| PathBuf::from("questions.json"), PathBuf::from);
        let mut force = false;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out" => {
                    let value = require_value(&mut args, "--out")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidOut { raw: value });
                    }
                    out = PathBuf::from(value);
                }
                "--force" => force = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { out, force })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --out <path>              Where to write the bank (default: questions.json)");
    eprintln!("  --force                   Overwrite an existing file");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  QUIZ_QUESTIONS");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let records = sample_records();
    // The app must be able to load whatever we write.
    let bank = bank_from_records(records.clone())?;

    let repo = JsonFileRepository::new(&args.out);
    repo.write_records(&records, args.force).await?;

    println!("Wrote {} questions to {}", bank.len(), args.out.display());

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
