use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use playlist_clock::duration::Speed;
use playlist_clock::{OutputFormat, commands, config, logging};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "plclock")]
#[command(about = "YouTube playlist duration at any playback speed")]
#[command(version)]
struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show total playlist duration and watch time at a playback speed
    Calc {
        #[arg(help = "YouTube playlist link (must contain 'list=')")]
        url: String,
        #[arg(long, help = "Playback speed, 1.00 to 2.00 (e.g. 1.5 or 1.5x)")]
        speed: Option<Speed>,
        #[arg(long, help = "Override the duration service endpoint")]
        endpoint: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show watch time at every speed from 1.00x to 2.00x
    Table {
        #[arg(help = "YouTube playlist link (must contain 'list=')")]
        url: String,
        #[arg(long, help = "Override the duration service endpoint")]
        endpoint: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Manage configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
    Set { key: String, value: String },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let shown = match &cli.command {
        Commands::Calc {
            url,
            speed,
            endpoint,
            format,
        } => {
            let config = config::load()?;
            commands::calculate::calc(&config, url, *speed, endpoint.as_deref(), *format)?
        }
        Commands::Table {
            url,
            endpoint,
            format,
        } => {
            let config = config::load()?;
            commands::calculate::table(&config, url, endpoint.as_deref(), *format)?
        }
        // A broken config file must not lock out the commands that repair it.
        Commands::Config(args) => {
            match &args.action {
                ConfigAction::List => commands::config::list(&config::load_or_default())?,
                ConfigAction::Get { key } => {
                    commands::config::get(key, &config::load_or_default())?
                }
                ConfigAction::Set { key, value } => commands::config::set(key, value)?,
            }
            true
        }
    };

    Ok(if shown {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
