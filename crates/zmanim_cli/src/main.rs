use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use zmanim_halacha::{
    DailyZmanim, HalachaError, JsonFileStore, Preferences, Profile, SolarDay, ZmanimConfig,
    catalog, compute, hebrew_info_at,
};
use zmanim_solar::{GeoContext, SolarDirection, SolarError, solar_noon};
use zmanim_time::format_hhmm;

#[derive(Parser)]
#[command(name = "zmanim", about = "Halachic daily times")]
struct Cli {
    /// JSON config file (polar policy, rollover, Havdalah rule, fallback location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Preference file holding the profile, Custom picks and candle offset
    #[arg(long, global = true, default_value = "zmanim-prefs.json")]
    prefs: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct LocationArgs {
    /// Latitude in degrees, north positive
    #[arg(long, requires = "lon", requires = "tz", allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Elevation above sea level in meters
    #[arg(long, default_value = "0")]
    elevation: f64,
    /// IANA timezone of the coordinates (e.g. Asia/Jerusalem)
    #[arg(long, requires = "lat")]
    tz: Option<String>,
    /// Place name for display
    #[arg(long, default_value = "")]
    name: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily markers for a date and location
    Day {
        /// Civil date (YYYY-MM-DD), default today at the location
        date: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
        /// Profile id, overriding the stored one
        #[arg(long)]
        profile: Option<String>,
        /// Show every opinion instead of the effective one
        #[arg(long)]
        all: bool,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Hebrew date for an instant
    Hebrew {
        /// RFC 3339 instant (e.g. 2024-06-21T19:30:00+03:00), default now
        instant: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Sunrise, sunset and depression-angle crossings
    Sun {
        /// Civil date (YYYY-MM-DD), default today at the location
        date: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
        /// Depression angle in degrees below the horizon (repeatable)
        #[arg(long = "depression")]
        depressions: Vec<f64>,
    },
    /// Choose an opinion for a marker (Custom profile only)
    Pick {
        /// Marker id (e.g. alos)
        marker: String,
        /// Opinion id (e.g. alos-16.1)
        opinion: String,
    },
    /// Clear every Custom pick
    Reset,
    /// Show or set the profile
    Profile {
        /// sephardi, ashkenazi, chabad or custom
        id: Option<String>,
    },
    /// Show or set the candle-lighting offset (18, 24, 30 or 40 minutes)
    Candles { minutes: Option<u32> },
    /// List markers and their opinion ids
    Markers {
        #[arg(long)]
        profile: Option<String>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Halacha(#[from] HalachaError),
    #[error(transparent)]
    Solar(#[from] SolarError),
    #[error("invalid {what} '{value}': {reason}")]
    Parse {
        what: &'static str,
        value: String,
        reason: String,
    },
    #[error("--tz is required with --lat/--lon")]
    MissingTimeZone,
    #[error("json output failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_date(s: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| CliError::Parse {
        what: "date",
        value: s.to_string(),
        reason: e.to_string(),
    })
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| CliError::Parse {
            what: "instant",
            value: s.to_string(),
            reason: e.to_string(),
        })
}

fn parse_profile(s: &str) -> Result<Profile, CliError> {
    Ok(s.parse::<Profile>()?)
}

/// `None` when no coordinates were given; the config's fallback applies.
fn resolve_location(args: &LocationArgs) -> Result<Option<GeoContext>, CliError> {
    let (Some(lat), Some(lon)) = (args.lat, args.lon) else {
        return Ok(None);
    };
    let tz = args.tz.as_deref().ok_or(CliError::MissingTimeZone)?;
    Ok(Some(GeoContext::new(
        lat,
        lon,
        args.elevation,
        tz,
        args.name.clone(),
    )?))
}

fn load_config(path: Option<&Path>) -> Result<ZmanimConfig, CliError> {
    match path {
        Some(p) => Ok(ZmanimConfig::load(p)?),
        None => {
            tracing::debug!("no config file, using defaults");
            Ok(ZmanimConfig::default())
        }
    }
}

fn open_prefs(path: &Path) -> Result<Preferences<JsonFileStore>, CliError> {
    Ok(Preferences::new(JsonFileStore::open(path)?))
}

fn date_or_today(date: Option<&str>, geo: &GeoContext) -> Result<NaiveDate, CliError> {
    match date {
        Some(s) => parse_date(s),
        None => Ok(Utc::now().with_timezone(&geo.time_zone).date_naive()),
    }
}

fn print_day(page: &DailyZmanim, all: bool) {
    let hebrew = &page.hebrew;
    println!(
        "{} {}  {}  {} {}",
        page.location.display_name,
        page.date,
        hebrew.weekday_name,
        hebrew.formatted(),
        hebrew.year_numeral
    );
    println!(
        "Profile: {} [{}] ({})",
        page.profile.title(),
        page.profile.short_symbol(),
        page.profile
    );
    println!();

    for marker in &page.markers {
        if all {
            println!("{}", marker.title);
            for o in &marker.opinions {
                let mark = if o.id == marker.effective_opinion_id {
                    '*'
                } else {
                    ' '
                };
                println!("  {mark} {:>5}  {}  [{}]", o.formatted_time, o.label, o.id);
            }
        } else if let Some(o) = marker.effective() {
            println!("{:>5}  {}  ({})", o.formatted_time, marker.title, o.label);
        }
    }

    if let Some(special) = &page.special {
        println!();
        println!(
            "{}: candle lighting {} ({} min), Havdalah {} ({})",
            special.kind.name(),
            special.candle_lighting_text,
            special.candle_offset_minutes,
            special.havdalah_text,
            special.havdalah_rule
        );
    }
}

/// The fixed profiles, then Custom; `*` marks `current`.
fn profile_lines(current: Profile) -> Vec<String> {
    Profile::basic()
        .iter()
        .copied()
        .chain([Profile::Custom])
        .map(|p| {
            let mark = if p == current { '*' } else { ' ' };
            format!("{mark} {:<10} {:<6} {}", p.id(), p.short_symbol(), p.title())
        })
        .collect()
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Day {
            date,
            location,
            profile,
            all,
            json,
        } => {
            let prefs = open_prefs(&cli.prefs)?;
            let geo = resolve_location(&location)?;
            let place = geo.as_ref().unwrap_or(&config.fallback_location);
            let date = date_or_today(date.as_deref(), place)?;
            let profile = match profile {
                Some(p) => parse_profile(&p)?,
                None => prefs.profile(),
            };
            let page = compute(
                date,
                geo.as_ref(),
                profile,
                &prefs.overrides(),
                prefs.candle_offset(config.candle_offset_minutes),
                &config,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                print_day(&page, all);
            }
        }

        Commands::Hebrew { instant, location } => {
            let geo = resolve_location(&location)?.unwrap_or_else(|| config.fallback_location.clone());
            let instant = match instant {
                Some(s) => parse_instant(&s)?,
                None => Utc::now(),
            };
            let info = hebrew_info_at(&instant, &geo, &config);
            if info.date.is_none() {
                println!("{} {}: Hebrew date unavailable", info.civil_date, info.weekday_name);
            } else {
                println!(
                    "{} {}  {} {}",
                    info.civil_date,
                    info.weekday_name,
                    info.formatted(),
                    info.year_numeral
                );
            }
        }

        Commands::Sun {
            date,
            location,
            depressions,
        } => {
            let geo = resolve_location(&location)?.unwrap_or_else(|| config.fallback_location.clone());
            let date = date_or_today(date.as_deref(), &geo)?;
            let day = SolarDay::compute(date, &geo, &config.solar, config.polar_policy);
            println!("{} {}", geo.display_name, date);
            println!("Sunrise (visible):   {}", format_hhmm(day.sunrise.as_ref()));
            println!("Sunrise (sea level): {}", format_hhmm(day.sea_level_sunrise.as_ref()));
            println!(
                "Solar noon:          {}",
                format_hhmm(solar_noon(date, &geo, &config.solar).as_ref())
            );
            println!("Sunset (sea level):  {}", format_hhmm(day.sea_level_sunset.as_ref()));
            println!("Sunset (visible):    {}", format_hhmm(day.sunset.as_ref()));
            for deg in depressions {
                let dawn = day.depression_crossing(deg, SolarDirection::Morning);
                let dusk = day.depression_crossing(deg, SolarDirection::Evening);
                println!(
                    "{deg:>5}° below:  dawn {}  dusk {}",
                    format_hhmm(dawn.as_ref()),
                    format_hhmm(dusk.as_ref())
                );
            }
        }

        Commands::Pick { marker, opinion } => {
            let prefs = open_prefs(&cli.prefs)?;
            let profile = prefs.profile();
            if prefs.pick_opinion(profile, &marker, &opinion)? {
                println!("{marker} = {opinion}");
            } else {
                println!("Profile is {profile}; picks apply only to the custom profile");
            }
        }

        Commands::Reset => {
            open_prefs(&cli.prefs)?.reset_to_defaults()?;
            println!("Custom picks cleared");
        }

        Commands::Profile { id } => {
            let prefs = open_prefs(&cli.prefs)?;
            if let Some(id) = id {
                prefs.set_profile(parse_profile(&id)?)?;
            }
            for line in profile_lines(prefs.profile()) {
                println!("{line}");
            }
        }

        Commands::Candles { minutes } => {
            let prefs = open_prefs(&cli.prefs)?;
            if let Some(m) = minutes {
                prefs.set_candle_offset(m)?;
            }
            println!(
                "Candle lighting {} min before sunset",
                prefs.candle_offset(config.candle_offset_minutes)
            );
        }

        Commands::Markers { profile } => {
            let profile = match profile {
                Some(p) => parse_profile(&p)?,
                None => open_prefs(&cli.prefs)?.profile(),
            };
            for marker in catalog(profile) {
                println!("{}  {}", marker.id, marker.title);
                for o in marker.opinions() {
                    println!("    {}  {}  ({})", o.id, o.label, o.rule);
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
