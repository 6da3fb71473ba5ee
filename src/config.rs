use clap::Parser;
use config::{Config as ConfigCrate, ConfigError as ConfigCrateError, Environment, File, Map, Source, Value};
use directories::ProjectDirs;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const ENV_PREFIX: &str = "RESUME_TUI";
const APP_NAME: &str = "resume-tui";
const STATE_FILE_NAME: &str = "state.json";
const LOG_FILE_NAME: &str = "resume-tui.log";

const DEFAULT_ACCENT: &str = "yellow";
const DEFAULT_POSITIVE: &str = "green";
const DEFAULT_INFO: &str = "cyan";
const DEFAULT_HEADER_FG: &str = "white";
const DEFAULT_HEADER_BG: &str = "blue";
const DEFAULT_CURRENT_MATCH: &str = "yellow";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Terminal resume viewer.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about = "Browse a resume in the terminal", long_about = None)]
pub struct CliArgs {
    /// Resume document to open (YAML by default, `.json` and `.toml` by extension)
    pub resume: Option<PathBuf>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where collapsed sections are remembered
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Neither load nor save collapsed sections
    #[arg(long)]
    pub no_persist: bool,

    /// Log destination
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the merged configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

// Every field optional so file and environment layers can each fill a part.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    resume_file: Option<PathBuf>,
    state_file: Option<PathBuf>,
    persist_state: Option<bool>,
    log_file: Option<PathBuf>,
    theme: FileTheme,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileTheme {
    accent: Option<String>,
    positive: Option<String>,
    info: Option<String>,
    header_fg: Option<String>,
    header_bg: Option<String>,
    current_match: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub accent: Color,
    pub positive: Color,
    pub info: Color,
    pub header_fg: Color,
    pub header_bg: Color,
    pub current_match: Color,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: Color::Yellow,
            positive: Color::Green,
            info: Color::Cyan,
            header_fg: Color::White,
            header_bg: Color::Blue,
            current_match: Color::Yellow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub resume_file: Option<PathBuf>,
    pub state_file: Option<PathBuf>,
    pub persist_state: bool,
    pub log_file: Option<PathBuf>,
    pub theme: ThemeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resume_file: None,
            state_file: default_state_file(),
            persist_state: true,
            log_file: default_log_file(),
            theme: ThemeConfig::default(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn default_state_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(STATE_FILE_NAME))
}

pub fn default_log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Loads configuration: defaults, then the config file, then `RESUME_TUI_*`
/// environment variables, then command-line flags.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    // RESUME_TUI_THEME__ACCENT -> theme.accent
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__");
    // A failure to read the environment only loses that layer
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config(args, Some(env_map))
}

/// Same layering as `load_config` with the environment layer supplied by the caller.
pub fn build_config(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = args.config.clone().or_else(default_config_file);

    let mut builder = ConfigCrate::builder();
    if let Some(ref path) = config_file_path {
        builder = builder.add_source(File::from(path.clone()).required(false));
    }
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            builder = builder.set_override(&key, value)?;
        }
    }
    let loaded: FileConfig = builder.build()?.try_deserialize()?;

    let theme = &loaded.theme;
    let config = AppConfig {
        resume_file: args.resume.clone().or(loaded.resume_file),
        state_file: args
            .state_file
            .clone()
            .or(loaded.state_file)
            .or_else(default_state_file),
        persist_state: !args.no_persist && loaded.persist_state.unwrap_or(true),
        log_file: args
            .log_file
            .clone()
            .or(loaded.log_file)
            .or_else(default_log_file),
        theme: ThemeConfig {
            accent: parse_color("theme.accent", theme.accent.as_deref(), DEFAULT_ACCENT)?,
            positive: parse_color("theme.positive", theme.positive.as_deref(), DEFAULT_POSITIVE)?,
            info: parse_color("theme.info", theme.info.as_deref(), DEFAULT_INFO)?,
            header_fg: parse_color("theme.header_fg", theme.header_fg.as_deref(), DEFAULT_HEADER_FG)?,
            header_bg: parse_color("theme.header_bg", theme.header_bg.as_deref(), DEFAULT_HEADER_BG)?,
            current_match: parse_color(
                "theme.current_match",
                theme.current_match.as_deref(),
                DEFAULT_CURRENT_MATCH,
            )?,
        },
    };

    Ok(config)
}

fn parse_color(key: &str, value: Option<&str>, default: &str) -> Result<Color, ConfigError> {
    let name = value.unwrap_or(default);
    Color::from_str(name.trim())
        .map_err(|_| ConfigError::Validation(format!("{key}: unknown color \"{name}\"")))
}
