//! pwd-audit - password strength analysis and targeted wordlist generation.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pwd_audit::{
    CommonWords, DEFAULT_MAX_SIZE, ScorerPreference, ScorerSelector, StrengthReport,
    WordlistRequest, YearsSource, generate,
};

#[derive(Debug, Parser)]
#[command(name = "pwd-audit", version)]
#[command(about = "Password strength analyzer and targeted wordlist generator", long_about = None)]
struct Cli {
    /// Password to analyze
    #[arg(long)]
    password: Option<String>,

    /// Personal terms (names, pets, dates) driving generation
    #[arg(long, num_args = 1..)]
    inputs: Vec<String>,

    /// Years as a list or range, e.g. 1990-1995,2024 (default: current year ± 1)
    #[arg(long)]
    years: Option<String>,

    /// Separators placed between two terms
    #[arg(long, num_args = 0.., default_values = ["", "_", "-", "."])]
    separators: Vec<String>,

    /// Disable character-substitution variants
    #[arg(long, default_value_t = false)]
    no_leet: bool,

    /// Maximum number of wordlist entries
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,

    /// Output path for the generated wordlist
    #[arg(long)]
    wordlist: Option<PathBuf>,

    /// Always use the built-in heuristic scorer
    #[arg(long, default_value_t = false)]
    heuristic: bool,
}

fn print_report(report: &StrengthReport) {
    println!("Password Analysis");
    println!("{}", "=".repeat(30));
    println!("Scorer: {}", report.scorer);
    println!("Score: {}", report.score);
    println!("Estimated entropy (bits): {:.2}", report.entropy_bits);
    println!("Crack time: {}", report.crack_time);
    for line in &report.feedback {
        println!("Feedback: {}", line);
    }
    println!();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.password.is_none() && cli.wordlist.is_none() {
        println!("Provide --password to analyze and/or --wordlist to generate a list.");
        return Ok(());
    }

    if let Some(password) = cli.password {
        let selector = if cli.heuristic {
            ScorerSelector::new(ScorerPreference::Heuristic)
        } else {
            ScorerSelector::from_env()
        };
        let words = CommonWords::load().context("Failed to load common words")?;
        let scorer = selector.select(words);

        let password = SecretString::new(password.into());
        let inputs: Vec<&str> = cli.inputs.iter().map(String::as_str).collect();
        print_report(&scorer.analyze_with_inputs(&password, &inputs));
    }

    if let Some(path) = cli.wordlist {
        let request = WordlistRequest {
            tokens: cli.inputs,
            years: YearsSource::from(cli.years.as_deref()),
            separators: cli.separators,
            leet: !cli.no_leet,
            max_size: cli.max_size,
            ..WordlistRequest::default()
        };
        let wordlist = generate(&request).context("Invalid wordlist configuration")?;
        wordlist.save(&path)?;
        println!(
            "Generated wordlist with {} entries -> {}",
            wordlist.len(),
            path.display()
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pwd_audit=info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
