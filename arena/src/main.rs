use anyhow::Result;
use bevy::prelude::With;
use clap::Parser;
use std::{
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};
use tracing::{info, warn};

use arena::{
    build_app,
    config::{init_tracing, load_settings},
    resources::{GameState, Outcome},
};
use common::markers::CopMarker;

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser)]
#[command(author, version, about = "Headless cop chase arena", long_about = None)]
struct Args {
    // JSON settings file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    // Seed for every random draw
    #[arg(short, long)]
    seed: Option<u64>,

    // Number of fixed steps to simulate
    #[arg(short, long)]
    ticks: Option<u64>,

    // Fixed step rate
    #[arg(long)]
    hz: Option<u32>,

    // Cops allowed at once before the difficulty ramp
    #[arg(long)]
    max_cops: Option<u32>,

    // Disable bomb pickups and throwing
    #[arg(long, default_value_t = false)]
    no_bombs: bool,

    // Pace ticks to wall-clock time instead of running flat out
    #[arg(long, default_value_t = false)]
    realtime: bool,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        settings.ticks = ticks;
    }
    if let Some(hz) = args.hz {
        settings.hz = hz;
    }
    if let Some(max_cops) = args.max_cops {
        settings.max_cops = max_cops;
    }
    if args.no_bombs {
        settings.bombs_enabled = false;
    }
    settings.validate()?;

    info!(
        "starting arena: seed {}, {} ticks at {} Hz",
        settings.seed, settings.ticks, settings.hz
    );
    let mut app = build_app(&settings);

    let tick_duration = Duration::from_secs_f64(settings.tick_seconds());
    let mut frame: u64 = 0;
    while frame < settings.ticks {
        let update_start = Instant::now();
        app.update();
        let update_elapsed = update_start.elapsed();

        if update_elapsed > tick_duration {
            warn!(
                "tick {} took {:.2}ms (exceeded {:.2}ms budget)",
                frame,
                update_elapsed.as_secs_f64() * 1000.0,
                tick_duration.as_secs_f64() * 1000.0
            );
        } else if args.realtime {
            thread::sleep(tick_duration - update_elapsed);
        }

        frame += 1;
        if app.world().resource::<GameState>().outcome != Outcome::Running {
            break;
        }
    }

    let mut cop_query = app.world_mut().query_filtered::<(), With<CopMarker>>();
    let cops = cop_query.iter(app.world()).count();
    let state = app.world().resource::<GameState>();
    info!(
        "finished after {} ticks: {:?}, score {:.0}, {} lives, {} bombs, {} cops on the streets",
        frame, state.outcome, state.score, state.lives, state.bombs, cops
    );
    Ok(())
}
