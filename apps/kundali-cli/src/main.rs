use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use kundali::ephemeris::julian_day_to_utc;
use kundali::{BirthMoment, ChartAssembler, ChartReport, FixedEphemeris, NameScript};
use kundali_config::KundaliSettings;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Script {
    Latin,
    Devanagari,
}

impl From<Script> for NameScript {
    fn from(script: Script) -> Self {
        match script {
            Script::Latin => NameScript::Latin,
            Script::Devanagari => NameScript::Devanagari,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Ephemeris snapshot JSON: `{"julian_day": .., "grahas": {..}, "lagna": ..}`.
    #[arg(long)]
    input: PathBuf,

    /// Config file (otherwise probes configs/kundali.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Naming script for sign, mansion, lord and dasha names in the report.
    /// The `grahas` keys stay Latin. Overrides the config.
    #[arg(long, value_enum)]
    script: Option<Script>,

    /// Number of dasha periods to report. Overrides the config.
    #[arg(long)]
    periods: Option<usize>,

    /// Birth instant (RFC 3339) the snapshot was computed for. A snapshot taken
    /// at a different instant is still used, with a warning.
    #[arg(long)]
    birth: Option<DateTime<Utc>>,

    /// Pretty-print the report JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn load_settings(args: &Args) -> anyhow::Result<KundaliSettings> {
    let mut settings = match &args.config {
        Some(path) => kundali_config::load_settings_from(path)?,
        None => kundali_config::load_settings()?,
    };
    if let Some(script) = args.script {
        settings.script = script.into();
    }
    if let Some(periods) = args.periods {
        if periods == 0 {
            anyhow::bail!("--periods must be at least 1");
        }
        settings.dasha_periods = periods;
    }
    Ok(settings)
}

/// Birth instant handed to the provider: `--birth`, else the snapshot's own Julian day.
fn birth_instant(
    birth: Option<DateTime<Utc>>,
    provider: &FixedEphemeris,
) -> anyhow::Result<DateTime<Utc>> {
    if let Some(instant) = birth {
        return Ok(instant);
    }
    let jd = provider.snapshot().julian_day;
    julian_day_to_utc(jd)
        .ok_or_else(|| anyhow::anyhow!("Snapshot julian_day {} is not a valid instant", jd))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args)?;

    let env = env_logger::Env::default().default_filter_or(&settings.log_level);
    env_logger::Builder::from_env(env).init();
    match &settings.source {
        Some(path) => log::debug!("Loaded settings from {}", path.display()),
        None => log::debug!("No config file found; using default settings"),
    }

    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read snapshot {}", args.input.display()))?;
    let provider = FixedEphemeris::from_json(&json)
        .with_context(|| format!("Invalid snapshot {}", args.input.display()))?;

    let birth = birth_instant(args.birth, &provider)?;

    let assembler = ChartAssembler::new().with_dasha_periods(settings.dasha_periods);
    let chart = match assembler.assemble_from(&provider, &BirthMoment::new(birth, None)) {
        Ok(chart) => chart,
        Err(e) => {
            log::error!("Chart assembly failed for {}: {}", args.input.display(), e);
            return Err(e.into());
        }
    };
    if let Some(first) = chart.dasha.first() {
        log::info!(
            "Assembled chart: Moon in {} pada {}, {} dasha at birth",
            chart.moon_mansion.nakshatra,
            chart.moon_mansion.pada,
            first.planet
        );
    }

    let report = ChartReport::from_chart(&chart, &settings.report_options());
    let out = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use kundali::EphemerisSnapshot;
    use std::collections::HashMap;

    fn provider() -> FixedEphemeris {
        FixedEphemeris::new(EphemerisSnapshot {
            julian_day: 2446200.7708333335,
            grahas: HashMap::new(),
            lagna: None,
        })
    }

    #[test]
    fn test_birth_defaults_to_snapshot_instant() {
        let birth = birth_instant(None, &provider()).unwrap();
        assert_eq!(birth, Utc.with_ymd_and_hms(1985, 5, 15, 6, 30, 0).unwrap());
    }

    #[test]
    fn test_birth_flag_overrides_snapshot() {
        let args = Args::try_parse_from([
            "kundali",
            "--input",
            "snapshot.json",
            "--birth",
            "1990-01-01T00:00:00Z",
            "--script",
            "devanagari",
        ])
        .unwrap();
        let birth = birth_instant(args.birth, &provider()).unwrap();
        assert_eq!(birth, Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap());
        assert!(matches!(args.script, Some(Script::Devanagari)));
    }

    #[test]
    fn test_zero_periods_flag_rejected() {
        let args = Args::try_parse_from([
            "kundali",
            "--input",
            "snapshot.json",
            "--periods",
            "0",
        ])
        .unwrap();
        assert!(load_settings(&args).is_err());
    }
}
