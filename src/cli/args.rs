//! CLI argument definitions for `gradepoint`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradepoint::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime
/// use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `scale`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Calculate GPA figures from a course CSV file.
    ///
    /// Computes institutional, transfer, and cumulative GPA under the
    /// configured institutional policy, with per-course breakdowns and
    /// policy warnings.
    Calc {
        /// Path to the course CSV file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Grading scale name (defaults to the configured scale)
        #[arg(short, long, value_name = "NAME")]
        scale: Option<String>,

        /// Student name for report headers
        #[arg(long, value_name = "NAME")]
        student: Option<String>,

        /// Write a report in the specified format (csv, markdown)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Report output path (defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Plain single-bucket calculation: no transfer policy or bonuses
        #[arg(long)]
        simple: bool,
    },
    /// Calculate GPAs for every student in a batch transcript CSV.
    ///
    /// The sheet must carry the batch header set (university_name,
    /// program_name, student_id, student_name, term/semester, course_code,
    /// course_name, credits, grade); rows group per student.
    Batch {
        /// Path to the batch transcript CSV file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Grading scale name (defaults to the configured scale)
        #[arg(short, long, value_name = "NAME")]
        scale: Option<String>,

        /// Write one report per student in the specified format (csv, markdown)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,
    },
    /// Convert a foreign transcript onto the 4.0 scale.
    ///
    /// Applies the institution's grading-system conversion table and a
    /// rigor-based adjustment.
    Transcript {
        /// Path to the course CSV file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Originating institution name
        #[arg(long, value_name = "NAME")]
        institution: String,

        /// Grading system the transcript was issued under
        /// (e.g. "10-point CGPA", "Class Honours")
        #[arg(long, value_name = "SYSTEM")]
        system: String,

        /// Institution rigor rating in [1, 5]
        #[arg(long, value_name = "RATING", default_value_t = 4.0)]
        rigor: f64,
    },
    /// List the built-in grading scales.
    Scales,
}

#[derive(Parser, Debug)]
#[command(
    name = "gradepoint",
    about = "gradepoint command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override config default grading scale
    #[arg(long = "config-scale", value_name = "NAME")]
    pub config_scale: Option<String>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over
    /// long-form flags (e.g., `--config-reports-dir`) when both are
    /// provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            scale: self.config_scale.clone(),
        }
    }
}
