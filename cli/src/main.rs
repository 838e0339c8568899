//! a11yscore CLI - rule-based web accessibility scoring tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use a11yscore::batch::{audit_batch_with_progress, read_url_list};
use a11yscore::render::{self, JsonFormat};
use a11yscore::{Auditor, BatchOptions, FetchOptions, ScoringConfig, ScoringPreset};

#[derive(Parser)]
#[command(name = "a11yscore")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Score web pages against basic accessibility rules", long_about = None)]
#[command(arg_required_else_help = true, subcommand_negates_reqs = true)]
struct Cli {
    /// Page URL to audit (http, https, or file)
    #[arg(long, value_name = "URL", required = true)]
    url: Option<String>,

    #[command(flatten)]
    report: ReportArgs,

    #[command(flatten)]
    scoring: ScoringArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a single page
    Audit {
        /// Page URL to audit (http, https, or file)
        #[arg(value_name = "URL")]
        url: String,

        #[command(flatten)]
        report: ReportArgs,

        #[command(flatten)]
        scoring: ScoringArgs,
    },

    /// Audit every URL listed in a file
    Batch {
        /// File with one URL per line (`#` starts a comment)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Worker threads (defaults to the number of CPUs)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        scoring: ScoringArgs,
    },

    /// Print a scoring configuration to start from
    Config {
        /// Rule preset to print
        #[arg(long, value_enum, default_value = "standard")]
        preset: PresetLevel,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone)]
struct ReportArgs {
    /// Report format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Include per-element findings and suggestions
    #[arg(long)]
    detailed: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct ScoringArgs {
    /// Scoring configuration file (JSON)
    #[arg(long, value_name = "FILE", env = "A11YSCORE_CONFIG")]
    config: Option<PathBuf>,

    /// Rule preset (ignored when --config is given)
    #[arg(long, value_enum)]
    preset: Option<PresetLevel>,

    /// Fetch timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// User-Agent header for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// JSON report
    Json,
    /// Human-readable summary
    Text,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PresetLevel {
    /// Standard rules (default)
    Standard,
    /// Stricter alt text and link rules
    Strict,
}

impl From<PresetLevel> for ScoringPreset {
    fn from(level: PresetLevel) -> Self {
        match level {
            PresetLevel::Standard => ScoringPreset::Standard,
            PresetLevel::Strict => ScoringPreset::Strict,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Audit {
            url,
            report,
            scoring,
        }) => cmd_audit(&url, &report, &scoring),
        Some(Commands::Batch {
            input,
            jobs,
            output,
            compact,
            scoring,
        }) => cmd_batch(&input, jobs, output.as_deref(), compact, &scoring),
        Some(Commands::Config { preset }) => cmd_config(preset),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            let Some(url) = cli.url else {
                Cli::command()
                    .error(ErrorKind::MissingRequiredArgument, "--url <URL> is required")
                    .exit()
            };
            cmd_audit(&url, &cli.report, &cli.scoring)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_config(args: &ScoringArgs) -> a11yscore::Result<ScoringConfig> {
    match (&args.config, args.preset) {
        (Some(path), preset) => {
            if preset.is_some() {
                log::warn!("--preset ignored because --config was given");
            }
            log::debug!("Loading scoring config from {}", path.display());
            ScoringConfig::from_file(path)
        }
        (None, Some(preset)) => Ok(ScoringConfig::from_preset(preset.into())),
        (None, None) => Ok(ScoringConfig::default()),
    }
}

fn build_auditor(args: &ScoringArgs) -> a11yscore::Result<Auditor> {
    let config = load_config(args)?;

    let mut fetch = FetchOptions::new();
    if let Some(secs) = args.timeout {
        fetch = fetch.with_timeout(Duration::from_secs(secs));
    }
    if let Some(ref ua) = args.user_agent {
        fetch = fetch.with_user_agent(ua.clone());
    }

    Ok(Auditor::new().with_config(&config).with_fetch_options(fetch))
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_audit(
    url: &str,
    report_args: &ReportArgs,
    scoring: &ScoringArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let auditor = build_auditor(scoring)?;
    let evaluation = auditor.audit_detailed(url)?;

    let json_format = if report_args.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let content = match (report_args.format, report_args.detailed) {
        (OutputFormat::Json, false) => render::to_json(&evaluation.report, json_format)?,
        (OutputFormat::Json, true) => render::to_detailed_json(&evaluation, json_format)?,
        (OutputFormat::Text, false) => render::to_text(&evaluation.report),
        (OutputFormat::Text, true) => {
            let mut text = render::to_text(&evaluation.report);
            text.push_str("\n\nSuggestions:");
            for hint in render::suggestions(&evaluation) {
                text.push_str("\n  - ");
                text.push_str(&hint);
            }
            text
        }
    };

    write_output(report_args.output.as_deref(), &content)
}

fn cmd_batch(
    input: &Path,
    jobs: Option<usize>,
    output: Option<&Path>,
    compact: bool,
    scoring: &ScoringArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let urls = read_url_list(input)?;
    if urls.is_empty() {
        return Err(format!("No URLs found in {}", input.display()).into());
    }

    let auditor = build_auditor(scoring)?;
    let mut options = BatchOptions::new();
    if let Some(jobs) = jobs {
        options = options.with_jobs(jobs);
    }

    let pb = ProgressBar::new(urls.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let entries = audit_batch_with_progress(&urls, &auditor, &options, |entry| {
        pb.set_message(entry.url.clone());
        pb.inc(1);
    })?;

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    pb.finish_with_message("Done!");

    let json = if compact {
        serde_json::to_string(&entries)?
    } else {
        serde_json::to_string_pretty(&entries)?
    };
    write_output(output, &json)?;

    eprintln!(
        "{} {} audited, {} failed",
        "Done!".green().bold(),
        entries.len() - failed,
        failed
    );
    Ok(())
}

fn cmd_config(preset: PresetLevel) -> Result<(), Box<dyn std::error::Error>> {
    let config = ScoringConfig::from_preset(preset.into());
    println!("{}", config.to_json_pretty()?);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "a11yscore".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Rule-based web accessibility scoring tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/a11yscore".dimmed());
    println!("License: MIT");
}
