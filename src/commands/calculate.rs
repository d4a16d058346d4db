use crate::OutputFormat;
use crate::config::{Config, ServiceConfig};
use crate::duration::{Speed, format_clock, seconds_at_speed};
use crate::lookup::client::LookupClient;
use crate::session::{Session, View};
use anyhow::{Context, Result};
use serde::Serialize;

/// One row of the speed table
#[derive(Debug, Serialize)]
pub struct SpeedRow {
    pub speed: String,
    pub adjusted: String,
    pub adjusted_seconds: u64,
}

#[derive(Debug, Serialize)]
pub struct SpeedTable {
    pub total: String,
    pub total_seconds: u64,
    pub rows: Vec<SpeedRow>,
}

pub fn lookup_client(config: &Config, endpoint: Option<&str>) -> Result<LookupClient> {
    let service = match endpoint {
        Some(endpoint) => {
            let service = ServiceConfig {
                endpoint: endpoint.to_string(),
                ..config.service.clone()
            };
            service.validate()?;
            service
        }
        None => config.service.clone(),
    };
    LookupClient::new(&service.endpoint, service.timeout())
}

/// Look up a playlist and show its duration at `speed`.
///
/// Returns `false` when an error was shown instead of a duration.
pub fn calc(
    config: &Config,
    playlist_url: &str,
    speed: Option<Speed>,
    endpoint: Option<&str>,
    format: OutputFormat,
) -> Result<bool> {
    let client = lookup_client(config, endpoint)?;

    let mut session = Session::new(speed.unwrap_or(config.display.default_speed));
    session.set_playlist_url(playlist_url);
    session.calculate(&client);

    let view = session.view();
    print_view(&view, format)?;
    Ok(view.error.is_none())
}

/// Look up a playlist once and show its duration at every slider stop.
pub fn table(
    config: &Config,
    playlist_url: &str,
    endpoint: Option<&str>,
    format: OutputFormat,
) -> Result<bool> {
    let client = lookup_client(config, endpoint)?;

    let mut session = Session::default();
    session.set_playlist_url(playlist_url);
    session.calculate(&client);

    let Some(total) = session.total_seconds() else {
        print_view(&session.view(), format)?;
        return Ok(false);
    };

    let table = speed_table(total);
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&table).context("Failed to serialize speed table")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Total Playlist Duration: {}", table.total);
            println!();
            println!("{:<8} {:>12}", "Speed", "Watch time");
            println!("{}", "-".repeat(21));
            for row in &table.rows {
                println!("{:<8} {:>12}", row.speed, row.adjusted);
            }
        }
    }

    Ok(true)
}

pub fn speed_table(total_seconds: u64) -> SpeedTable {
    let rows = Speed::steps()
        .map(|speed| {
            let adjusted_seconds = seconds_at_speed(total_seconds, speed);
            SpeedRow {
                speed: speed.to_string(),
                adjusted: format_clock(adjusted_seconds),
                adjusted_seconds,
            }
        })
        .collect();

    SpeedTable {
        total: format_clock(total_seconds),
        total_seconds,
        rows,
    }
}

fn print_view(view: &View, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(view).context("Failed to serialize result")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            if let Some(error) = &view.error {
                eprintln!("✗ {}", error);
                return Ok(());
            }
            if let (Some(total), Some(adjusted)) = (&view.total, &view.adjusted) {
                println!("Total Playlist Duration: {}", total);
                println!("Current Speed: {}", view.speed);
                println!("Total Time at {} Speed: {}", view.speed, adjusted);
            }
        }
    }
    Ok(())
}
