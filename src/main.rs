//! Bounce Lab entry point
//!
//! Headless demo: runs one simulation session at a fixed 120 Hz for ten
//! simulated seconds, logging a readout once per second and a final energy
//! summary. Pass a JSON parameter file as the first argument to override the
//! defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use bounce_lab::SimParams;
use bounce_lab::consts::SIM_DT;
use bounce_lab::render::{self, BallStyle, Viewport};
use bounce_lab::schedule::{Driver, FixedStep};
use bounce_lab::sim::Session;

/// Demo run length in simulated seconds
const RUN_SECONDS: u64 = 10;

fn main() {
    env_logger::init();

    let params = match std::env::args().nth(1) {
        Some(path) => match SimParams::from_json_file(&path) {
            Ok(params) => {
                log::info!("loaded parameters from {path}");
                params
            }
            Err(e) => {
                log::error!("{e}; using defaults");
                SimParams::default()
            }
        },
        None => SimParams::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };
    let style = BallStyle::from_seed(seed, &viewport);
    log::info!("ball at x={:.0}px, color {:?}", style.x, style.color);

    let frames_per_second = (1.0 / SIM_DT).round() as u64;
    let mut session = Session::new(params, seed);
    let mut driver = Driver::new();
    driver.start(FixedStep::new(1.0 / SIM_DT, RUN_SECONDS * frames_per_second));

    let mut frame = 0u64;
    driver.run(&mut session, |session| {
        frame += 1;
        if frame % frames_per_second == 0 {
            log::info!("{}", render::readout(session));
        }
    });

    // One frame of geometry through each adapter
    let scene_vertices = render::ball(&session.body, &style, &viewport).len()
        + render::ground(&viewport).len();
    let bar_vertices = render::bar_chart(&session.body, &viewport).len();
    let line_vertices =
        render::line_chart(&session.history, session.body.initial_energy, &viewport).len();
    log::info!(
        "frame geometry: {scene_vertices} scene + {bar_vertices} bar + {line_vertices} line vertices"
    );

    let last = render::readout(&session);
    println!("final state after {frame} frames:");
    println!("  {last}");
    println!(
        "  energy closed to {:.3}% of launch total",
        if last.initial_energy > 0.0 {
            last.total / last.initial_energy * 100.0
        } else {
            100.0
        }
    );
}
