//! Configuration module for `gradepoint`

use crate::core::models::InstitutionalSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Calculation policy configuration
///
/// Holds the default grading scale and the institutional policy knobs the
/// engine is invoked with when the CLI is not told otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationConfig {
    /// Default grading scale name
    #[serde(default)]
    pub scale: String,
    /// Whether transfer credits feed the cumulative GPA
    #[serde(default = "default_include_transfer")]
    pub include_transfer_in_gpa: bool,
    /// Whether electives are excluded from all totals
    #[serde(default)]
    pub core_subjects_only: bool,
    /// Additive bonus for honors courses
    #[serde(default = "default_honors_bonus")]
    pub honors_bonus_points: f64,
    /// Additive bonus for AP courses
    #[serde(default = "default_ap_bonus")]
    pub ap_bonus_points: f64,
    /// Rigor multiplier factor for transfer courses
    #[serde(default = "default_rigor_adjustment")]
    pub rigor_adjustment: f64,
}

const fn default_include_transfer() -> bool {
    true
}

const fn default_honors_bonus() -> f64 {
    0.5
}

const fn default_ap_bonus() -> f64 {
    1.0
}

const fn default_rigor_adjustment() -> f64 {
    1.0
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            scale: String::new(),
            include_transfer_in_gpa: default_include_transfer(),
            core_subjects_only: false,
            honors_bonus_points: default_honors_bonus(),
            ap_bonus_points: default_ap_bonus(),
            rigor_adjustment: default_rigor_adjustment(),
        }
    }
}

impl CalculationConfig {
    /// Build the engine settings this configuration describes
    #[must_use]
    pub const fn institutional_settings(&self) -> InstitutionalSettings {
        InstitutionalSettings {
            include_transfer_in_gpa: self.include_transfer_in_gpa,
            core_subjects_only: self.core_subjects_only,
            honors_bonus_points: self.honors_bonus_points,
            ap_bonus_points: self.ap_bonus_points,
            rigor_adjustment: self.rigor_adjustment,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Calculation policy settings
    #[serde(default)]
    pub calculation: CalculationConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override default grading scale name
    pub scale: Option<String>,
}

impl Config {
    /// Get the `$GRADEPOINT` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gradepoint`
    /// - macOS: `~/Library/Application Support/gradepoint`
    /// - Windows: `%APPDATA%\gradepoint`
    #[must_use]
    pub fn get_gradepoint_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradepoint")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty in the current config and
    /// non-empty in defaults are updated; numeric policy knobs already
    /// default through serde.
    ///
    /// # Returns
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        // Merge logging fields - only if they're empty (use defaults for empty values)
        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        // Merge paths fields
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        // Merge calculation fields
        if self.calculation.scale.is_empty() && !defaults.calculation.scale.is_empty() {
            self.calculation
                .scale
                .clone_from(&defaults.calculation.scale);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Allows command-line arguments to override configuration file values
    /// without modifying the persistent configuration file. Only non-`None`
    /// values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }

        if let Some(scale) = &overrides.scale {
            self.calculation.scale.clone_from(scale);
        }
    }

    /// Get the user config file path
    ///
    /// Returns `config.toml` for release builds and `dconfig.toml` for
    /// debug builds (allows a separate debug config).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gradepoint_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GRADEPOINT` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$GRADEPOINT") {
            let gradepoint_dir = Self::get_gradepoint_dir();
            value.replace("$GRADEPOINT", gradepoint_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$GRADEPOINT`
    /// variables in path values. Missing fields use their serde defaults.
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// The defaults differ between debug and release builds.
    ///
    /// # Panics
    /// Panics if the compiled-in default configuration is invalid TOML.
    /// This should never happen in practice since the defaults are
    /// compiled into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        // Save the updated config with new fields
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }

            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save config to user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be saved
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "reports_dir" => Some(self.paths.reports_dir.clone()),
            "scale" => Some(self.calculation.scale.clone()),
            "include_transfer" => Some(self.calculation.include_transfer_in_gpa.to_string()),
            "core_only" => Some(self.calculation.core_subjects_only.to_string()),
            "honors_bonus" => Some(self.calculation.honors_bonus_points.to_string()),
            "ap_bonus" => Some(self.calculation.ap_bonus_points.to_string()),
            "rigor_adjustment" => Some(self.calculation.rigor_adjustment.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = parse_bool_value(key, value)?;
            }
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            "scale" => self.calculation.scale = value.to_string(),
            "include_transfer" => {
                self.calculation.include_transfer_in_gpa = parse_bool_value(key, value)?;
            }
            "core_only" => {
                self.calculation.core_subjects_only = parse_bool_value(key, value)?;
            }
            "honors_bonus" => {
                self.calculation.honors_bonus_points = parse_numeric_value(key, value)?;
            }
            "ap_bonus" => {
                self.calculation.ap_bonus_points = parse_numeric_value(key, value)?;
            }
            "rigor_adjustment" => {
                self.calculation.rigor_adjustment = parse_numeric_value(key, value)?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "reports_dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "scale" => self
                .calculation
                .scale
                .clone_from(&defaults.calculation.scale),
            "include_transfer" => {
                self.calculation.include_transfer_in_gpa =
                    defaults.calculation.include_transfer_in_gpa;
            }
            "core_only" => {
                self.calculation.core_subjects_only = defaults.calculation.core_subjects_only;
            }
            "honors_bonus" => {
                self.calculation.honors_bonus_points = defaults.calculation.honors_bonus_points;
            }
            "ap_bonus" => {
                self.calculation.ap_bonus_points = defaults.calculation.ap_bonus_points;
            }
            "rigor_adjustment" => {
                self.calculation.rigor_adjustment = defaults.calculation.rigor_adjustment;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_bool_value(key: &str, value: &str) -> Result<bool, String> {
    value
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

fn parse_numeric_value(key: &str, value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("Invalid numeric value for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[calculation]")?;
        writeln!(f, "  scale = \"{}\"", self.calculation.scale)?;
        writeln!(
            f,
            "  include_transfer = {}",
            self.calculation.include_transfer_in_gpa
        )?;
        writeln!(f, "  core_only = {}", self.calculation.core_subjects_only)?;
        writeln!(
            f,
            "  honors_bonus = {}",
            self.calculation.honors_bonus_points
        )?;
        writeln!(f, "  ap_bonus = {}", self.calculation.ap_bonus_points)?;
        writeln!(
            f,
            "  rigor_adjustment = {}",
            self.calculation.rigor_adjustment
        )?;

        Ok(())
    }
}
