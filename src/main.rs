//! RST Warden CLI - Command-line interface for cheatsheet validation
//!
//! CDD Principle: Application Layer - CLI coordinates user interactions with domain services
//! - Translates user commands to domain operations
//! - Handles external concerns like process exit codes and terminal output
//! - Provides clean separation between user interface and validation logic

use clap::{Parser, Subcommand, ValueEnum};
use rst_warden::{
    DecodePolicy, OutputFormat, ReportFormatter, ReportOptions, ScanOptions, WardenConfig,
    WardenResult, WardenValidator,
};
use std::path::{Path, PathBuf};
use std::process;

/// RST Warden - validation gate for reStructuredText cheatsheets
#[derive(Parser)]
#[command(name = "rst-warden")]
#[command(version = "0.1.0")]
#[command(about = "Validates reStructuredText documents for characters that break rendering")]
#[command(
    long_about = "RST Warden scans a documentation tree for decorative box-drawing characters that do not render as tables in the publishing pipeline, and reports a pass/fail summary suitable as a CI gate."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a documentation tree for box-drawing characters
    Check {
        /// Root directory to scan (defaults to the current directory)
        root: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Maximum issues shown per document before eliding the rest
        #[arg(long, default_value = "3")]
        max_shown: usize,

        /// Treat undecodable documents as fatal instead of skipping them
        #[arg(long)]
        strict_decode: bool,

        /// Limit the number of documents scanned
        #[arg(long)]
        max_files: Option<usize>,
    },

    /// Validate configuration file
    ValidateConfig {
        /// Configuration file to validate
        config_file: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Human,
    Json,
    Github,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Github => OutputFormat::GitHub,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Run the command and handle the result
    let result = run_command(cli);

    match result {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run_command(cli: Cli) -> WardenResult<i32> {
    match cli.command {
        Commands::Check { root, format, max_shown, strict_decode, max_files } => run_check(
            cli.config,
            root,
            format,
            max_shown,
            strict_decode,
            max_files,
            !cli.no_color,
        ),
        Commands::ValidateConfig { config_file } => run_validate_config(config_file.or(cli.config)),
    }
}

fn run_check(
    config_path: Option<PathBuf>,
    root: Option<PathBuf>,
    format: OutputFormatArg,
    max_shown: usize,
    strict_decode: bool,
    max_files: Option<usize>,
    use_colors: bool,
) -> WardenResult<i32> {
    // Load configuration
    let config = if let Some(config_path) = config_path {
        WardenConfig::load_from_file(config_path)?
    } else {
        // Try to find default config file
        let default_configs = ["rst_warden.yaml", "rst_warden.yml", ".rst_warden.yaml"];
        let mut config = None;

        for config_name in &default_configs {
            if Path::new(config_name).exists() {
                config = Some(WardenConfig::load_from_file(config_name)?);
                break;
            }
        }

        config.unwrap_or_default()
    };

    // Create validator
    let validator = WardenValidator::new_with_config(config)?.with_report_formatter(
        ReportFormatter::new(ReportOptions {
            use_colors,
            max_issues_per_file: max_shown,
            ..Default::default()
        }),
    );

    // Use current directory if no root specified
    let root = root.unwrap_or_else(|| PathBuf::from("."));

    let scan_options = ScanOptions {
        decode_policy: if strict_decode { DecodePolicy::Fail } else { DecodePolicy::Skip },
        max_files,
    };

    // Run validation
    let report = validator.validate_root(&root, &scan_options)?;

    // Format and output results
    let formatted = validator.format_report(&report, format.into())?;
    print!("{formatted}");

    // Return appropriate exit code
    if report.has_issues() {
        Ok(1) // Exit code 1 when issues were found
    } else {
        Ok(0) // Exit code 0 for a clean tree
    }
}

fn run_validate_config(config_path: Option<PathBuf>) -> WardenResult<i32> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from("rst_warden.yaml"));

    println!("Validating configuration: {}", config_path.display());

    match WardenConfig::load_from_file(&config_path) {
        Ok(config) => {
            println!("✅ Configuration is valid");
            println!("📊 Configuration summary:");
            println!("  Extensions: {}", config.paths.extensions.join(", "));
            println!("  Exclude patterns: {}", config.paths.exclude.len());

            Ok(0)
        }
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {e}");
            Ok(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();
}
