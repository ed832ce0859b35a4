use anyhow::Context;
use kundali::chart::report::DEFAULT_DEGREE_PRECISION;
use kundali::vedic::dashas::DEFAULT_DASHA_PERIODS;
use kundali::{NameScript, ReportOptions};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative locations probed for `configs/kundali.toml`, from the repo root
/// and from inside a crate directory.
pub const CONFIG_PATHS: [&str; 2] = ["configs/kundali.toml", "../../configs/kundali.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct KundaliSettings {
    /// `None` when reports keep full-precision degrees.
    pub degree_precision: Option<u32>,
    pub dasha_periods: usize,
    pub script: NameScript,
    pub log_level: String,
    /// File the settings were read from; `None` for built-in defaults or text.
    pub source: Option<PathBuf>,
}

impl Default for KundaliSettings {
    fn default() -> Self {
        Self {
            degree_precision: Some(DEFAULT_DEGREE_PRECISION),
            dasha_periods: DEFAULT_DASHA_PERIODS,
            script: NameScript::Latin,
            log_level: default_log_level(),
            source: None,
        }
    }
}

impl KundaliSettings {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            script: self.script,
            degree_precision: self.degree_precision,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ChartToml {
    #[serde(default = "default_precision")]
    degree_precision: u32,
    #[serde(default = "default_round_degrees")]
    round_degrees: bool,
    #[serde(default = "default_dasha_periods")]
    dasha_periods: usize,
    #[serde(default)]
    script: NameScript,
}

impl Default for ChartToml {
    fn default() -> Self {
        Self {
            degree_precision: default_precision(),
            round_degrees: default_round_degrees(),
            dasha_periods: default_dasha_periods(),
            script: NameScript::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingToml {
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for LoggingToml {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: ChartToml,
    #[serde(default)]
    logging: LoggingToml,
}

fn default_precision() -> u32 {
    DEFAULT_DEGREE_PRECISION
}

fn default_round_degrees() -> bool {
    true
}

fn default_dasha_periods() -> usize {
    DEFAULT_DASHA_PERIODS
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Tries the common relative paths for `configs/kundali.toml`.
/// `Ok(None)` means no config file was found.
pub fn read_config_text() -> anyhow::Result<Option<(PathBuf, String)>> {
    for p in &CONFIG_PATHS {
        let path = Path::new(p);
        if path.exists() {
            let text =
                fs::read_to_string(path).with_context(|| format!("Failed to read {}", p))?;
            return Ok(Some((path.to_path_buf(), text)));
        }
    }
    Ok(None)
}

/// Loads settings from the probed config file, or defaults when there is none.
/// Check [`KundaliSettings::source`] to tell the two apart.
pub fn load_settings() -> anyhow::Result<KundaliSettings> {
    match read_config_text()? {
        Some((path, text)) => {
            let mut settings = parse_settings(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?;
            settings.source = Some(path);
            Ok(settings)
        }
        None => {
            log::debug!("No kundali.toml found in {:?}; using defaults", CONFIG_PATHS);
            Ok(KundaliSettings::default())
        }
    }
}

/// Loads settings from an explicit path. Unlike [`load_settings`], a missing
/// file is an error here.
pub fn load_settings_from(path: &Path) -> anyhow::Result<KundaliSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let mut settings =
        parse_settings(&text).with_context(|| format!("Invalid config {}", path.display()))?;
    settings.source = Some(path.to_path_buf());
    Ok(settings)
}

pub fn parse_settings(text: &str) -> anyhow::Result<KundaliSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse kundali.toml: {e}"))?;
    let RootConfigToml { chart, logging } = root;
    if chart.dasha_periods == 0 {
        anyhow::bail!("chart.dasha_periods must be at least 1");
    }
    Ok(KundaliSettings {
        degree_precision: chart.round_degrees.then_some(chart.degree_precision),
        dasha_periods: chart.dasha_periods,
        script: chart.script,
        log_level: logging.log_level,
        source: None,
    })
}
