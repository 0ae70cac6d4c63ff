mod events;
mod sink;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossbeam_channel::{Receiver, Sender};
use events::AppEvent;
use nice_view::{Canvas, Direction, DisplayConfig, ResolvedConfig, Rotator};
use nice_view_ui::{Page, StatusPage};
use sink::Sink;
use std::path::PathBuf;
use std::time::Duration;

/// Battery levels shown by `--sweep`
const SWEEP_LEVELS: [u8; 5] = [0, 25, 50, 75, 100];
const SWEEP_INTERVAL: Duration = Duration::from_millis(500);

/// Render the nice!view status canvas, rotated for the sideways panel
#[derive(Parser, Debug)]
#[command(name = "status-view")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Battery charge in percent
    #[arg(long, short, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
    battery: u8,

    /// Overlay the charging bolt
    #[arg(long, short)]
    charging: bool,

    /// JSON display configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rotation direction (overrides the config file)
    #[arg(long, value_enum)]
    direction: Option<DirectionArg>,

    /// Pixel shift applied after rotating (overrides the config file)
    #[arg(long, allow_negative_numbers = true)]
    edge_offset: Option<i32>,

    /// Swap lit and dark pixels on output
    #[arg(long)]
    inverted: bool,

    /// Write a PBM file instead of printing ASCII art (numbered per frame
    /// with --sweep)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Step through several battery levels instead of a single frame
    #[arg(long)]
    sweep: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    Clockwise,
    CounterClockwise,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Clockwise => Self::Clockwise,
            DirectionArg::CounterClockwise => Self::CounterClockwise,
        }
    }
}

fn load_config(cli: &Cli) -> Result<ResolvedConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<DisplayConfig>(&text)
                .with_context(|| format!("Invalid display config in {}", path.display()))?
        }
        None => DisplayConfig::default(),
    };

    if let Some(direction) = cli.direction {
        config.direction = Some(direction.into());
    }
    if let Some(edge_offset) = cli.edge_offset {
        config.edge_offset = Some(edge_offset);
    }
    if cli.inverted {
        config.inverted = Some(true);
    }

    Ok(config.resolve()?)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let sink = match &cli.output {
        Some(path) if cli.sweep => Sink::pbm_frames(path.clone()),
        Some(path) => Sink::Pbm(path.clone()),
        None => Sink::Terminal,
    };

    let (app_tx, app_rx) = crossbeam_channel::unbounded();

    if cli.sweep {
        spawn_sweep(app_tx.clone(), SWEEP_INTERVAL);
    } else {
        app_tx.send(AppEvent::Battery {
            percent: cli.battery,
            charging: cli.charging,
        })?;
        app_tx.send(AppEvent::Shutdown)?;
    }

    run_ui_loop(&config, &sink, &app_tx, &app_rx)?;
    log::info!("Shutdown complete");
    Ok(())
}

fn spawn_sweep(tx: Sender<AppEvent>, interval: Duration) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        for (i, percent) in SWEEP_LEVELS.into_iter().enumerate() {
            let event = AppEvent::Battery {
                percent,
                charging: i % 2 == 1,
            };
            if tx.send(event).is_err() {
                return;
            }
            std::thread::sleep(interval);
        }
        let _ = tx.send(AppEvent::Shutdown);
    })
}

fn run_ui_loop(
    config: &ResolvedConfig,
    sink: &Sink,
    tx: &Sender<AppEvent>,
    rx: &Receiver<AppEvent>,
) -> Result<()> {
    let tx_for_rotator = tx.clone();
    let mut rotator = Rotator::new(config.geometry, config.rotation, move || {
        let _ = tx_for_rotator.send(AppEvent::DirtyDisplay);
    });
    let mut canvas = Canvas::new(config.geometry);
    let mut page = StatusPage::new(0, false);

    for event in rx {
        match event {
            AppEvent::Battery { percent, charging } => {
                log::debug!("Battery event: {percent}% charging={charging}");
                page.set_battery(percent, charging);
                page.show(&mut canvas)?;
                rotator.rotate(&mut canvas);
            }
            AppEvent::DirtyDisplay => {
                sink.present(&canvas, config.palette)?;
            }
            AppEvent::Shutdown => {
                log::info!("Shutting down UI...");
                // Events queued before shutdown still reach the sink.
                for pending in rx.try_iter() {
                    if pending == AppEvent::DirtyDisplay {
                        sink.present(&canvas, config.palette)?;
                    }
                }
                return Ok(());
            }
        }
    }

    Ok(())
}
