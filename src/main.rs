// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use polycat::app_config::{self, Config};
use polycat::catalog::{ReconcileOptions, RolloutFile};
use polycat::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add the keys of a rollout file to every catalog, never overwriting existing text
    Reconcile {
        /// Rollout file listing the new keys and their texts
        #[arg(value_name = "ROLLOUT_FILE")]
        rollout_file: PathBuf,

        /// Compute changes without writing any catalog
        #[arg(short, long)]
        dry_run: bool,

        /// Language whose text is used when an entry has none for a catalog
        #[arg(long)]
        fallback_language: Option<String>,

        /// Output format for the run summary
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check every catalog for the leaf keys of a baseline subtree
    Audit {
        /// Subtree to audit (e.g. 'hero'); defaults to the configured subtree
        #[arg(short, long)]
        subtree: Option<String>,

        /// Baseline language; defaults to the configured baseline
        #[arg(short, long)]
        baseline: Option<String>,

        /// Output format for the report
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Exit with an error when any key is missing
        #[arg(long)]
        strict: bool,
    },

    /// Resolve a stored field value for a language
    Resolve {
        /// Raw stored value (plain text or JSON object keyed by language)
        #[arg(value_name = "VALUE")]
        value: String,

        /// Active language, region suffix allowed (e.g. 'zh-CN')
        #[arg(short = 'L', long)]
        language: String,
    },

    /// Convert a legacy plain-text field value into its multilingual stored form
    Upgrade {
        /// Raw stored value
        #[arg(value_name = "VALUE")]
        value: String,

        /// Language the plain text is written in
        #[arg(short = 'L', long)]
        language: String,
    },

    /// List configured languages and whether their catalog exists
    Languages,

    /// Generate shell completions for polycat
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// polycat - multilingual content catalogs
///
/// Keeps per-language UI catalogs consistent and resolves multilingual fields.
#[derive(Parser, Debug)]
#[command(name = "polycat")]
#[command(version)]
#[command(about = "Multilingual catalog maintenance tool")]
#[command(long_about = "polycat rolls out new UI keys across per-language JSON catalogs, audits them against a baseline language and resolves multilingual field values.

EXAMPLES:
    polycat reconcile rollout.json             # Add new keys to every catalog
    polycat reconcile -d rollout.json          # Show what would change
    polycat audit -s hero                      # Check the 'hero' namespace against the baseline
    polycat audit --format json --strict       # Machine-readable audit, fail on gaps
    polycat resolve -L zh-CN '{\"en\":\"Jade\",\"zh\":\"玉\"}'
    polycat upgrade -L en 'Jade Bracelet'      # Wrap legacy text as {\"en\":...}
    polycat languages                          # List catalogs
    polycat completions bash > polycat.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Directory holding the catalogs (overrides the config file)
    #[arg(long, global = true)]
    locales_dir: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌ "),
            Level::Warn => ("1;33", "🚧 "),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "🔍 "),
            Level::Trace => ("1;35", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger with the most verbose level; the effective
    // level is applied through set_max_level once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "polycat", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let config = load_config(&cli)?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Reconcile { rollout_file, dry_run, fallback_language, format } => {
            run_reconcile(&controller, &rollout_file, dry_run, fallback_language, format)
        }
        Commands::Audit { subtree, baseline, format, strict } => {
            run_audit(&controller, subtree.as_deref(), baseline.as_deref(), format, strict)
        }
        Commands::Resolve { value, language } => {
            println!("{}", controller.resolve_field(Some(&value), &language));
            Ok(())
        }
        Commands::Upgrade { value, language } => {
            println!("{}", controller.upgrade_field(&value, &language)?);
            Ok(())
        }
        Commands::Languages => run_languages(&controller),
        Commands::Completions { .. } => Ok(()),
    }
}

// Load or create configuration, then apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let config_path = &cli.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::load(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        config.save(config_path)
            .context(format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    if let Some(locales_dir) = &cli.locales_dir {
        config.locales_dir = locales_dir.clone();
    }

    // Update log level in config if specified via command line
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

fn run_reconcile(
    controller: &Controller,
    rollout_file: &Path,
    dry_run: bool,
    fallback_language: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let entries = RolloutFile::load(rollout_file)?.into_entries()?;
    if entries.is_empty() {
        warn!("Rollout file {:?} contains no entries", rollout_file);
    }
    info!("Reconciling {} key(s) from {:?}", entries.len(), rollout_file);

    let mut options = ReconcileOptions::from(&controller.config().reconcile);
    if fallback_language.is_some() {
        options.fallback_language = fallback_language;
    }

    let report = controller.reconcile_all(&entries, &options, dry_run)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            for summary in &report.languages {
                if summary.changed {
                    println!("✓ {}: added {}", summary.language, summary.applied.join(", "));
                } else {
                    println!("- {}: up to date", summary.language);
                }
            }
            if dry_run {
                println!("\n(dry run, nothing written)");
            }
        }
    }

    Ok(())
}

fn run_audit(
    controller: &Controller,
    subtree: Option<&str>,
    baseline: Option<&str>,
    format: OutputFormat,
    strict: bool,
) -> Result<()> {
    let report = controller.audit(subtree, baseline)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", report.render_text()),
    }

    if strict && !report.is_complete() {
        return Err(anyhow!("Audit found {} incomplete row(s)", report.gaps().count()));
    }

    Ok(())
}

fn run_languages(controller: &Controller) -> Result<()> {
    for status in controller.language_statuses()? {
        let marker = if status.has_catalog { "✓" } else { "✗" };
        let note = if status.supported { "" } else { " (not a storefront language)" };
        println!("{} {:<8} {}{}", marker, status.code, status.name, note);
    }
    Ok(())
}
