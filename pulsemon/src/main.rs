use clap::{Parser, Subcommand};
use pulsemon_client::{fetch_measurements, PollerConfig};
use pulsemon_gui::{run_gui, GuiConfig};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "pulsemon", version, about = "Heart-rate polling dashboard")]
struct Cli {
    /// Measurement endpoint to poll
    #[arg(long, default_value = "http://192.168.4.1/api/measurements")]
    endpoint: String,
    /// Poll period in milliseconds
    #[arg(long, default_value_t = 200)]
    interval_ms: u64,
    /// Maximum samples kept in the rolling window
    #[arg(long, default_value_t = 600)]
    max_points: usize,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a single batch and print it without opening the dashboard
    Fetch,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Fetch) => match fetch_measurements(&cli.endpoint) {
            Ok(Some(measurements)) => {
                if measurements.is_empty() {
                    println!("No measurements pending");
                } else {
                    for entry in &measurements {
                        println!("{:>10} ms  {}", entry.timestamp, entry.summary_line());
                    }
                }
            }
            Ok(None) => eprintln!("Response carried no measurement batch"),
            Err(err) => eprintln!("{err}"),
        },
        None => {
            let poller_config = PollerConfig {
                endpoint: cli.endpoint,
                interval: Duration::from_millis(cli.interval_ms),
            };
            run_gui(GuiConfig::default(), poller_config, cli.max_points)?;
        }
    }
    Ok(())
}
