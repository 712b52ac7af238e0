#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use rover_rust::simulation::agent::{Agent, MoveOutcome};
use rover_rust::simulation::history::{ActionLog, ActionRecord, Activity};
use rover_rust::simulation::params::TICK_MS;
use rover_rust::simulation::rng::{RandomSource, SeededRandom, ThreadRandom};
use rover_rust::simulation::trail::VisitGrid;
use rover_rust::ui::{field::compute_field_grid, render::draw_ui};

/// Scripted patrol for the demonstration run.
const DEMO_ACTIONS: [&str; 12] = [
    "move up",
    "move right",
    "scan",
    "move left",
    "move down",
    "scan",
    "move down",
    "move left",
    "scan",
    "move right",
    "move up",
    "scan",
];

#[derive(Parser, Debug)]
#[command(name = "rover_rust")]
#[command(about = "Single-rover grid simulation with a scripted demo patrol")]
struct Args {
    /// Rover name (sanitized on construction).
    #[arg(long, default_value = "Rover_1")]
    name: String,

    /// Starting x coordinate.
    #[arg(long, default_value_t = 0)]
    x: i32,

    /// Starting y coordinate.
    #[arg(long, default_value_t = 0)]
    y: i32,

    /// Seed for a reproducible run; omitted means thread randomness.
    #[arg(long)]
    seed: Option<u64>,

    /// Print notices to stdout instead of drawing the terminal UI.
    #[arg(long)]
    headless: bool,

    /// Milliseconds between scripted actions.
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    if args.headless {
        run_headless(&args, rng.as_mut());
        return Ok(());
    }

    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &args, rng.as_mut());

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Executes one script entry against the rover.
fn perform(agent: &mut Agent, action: &str, tick: u64, rng: &mut dyn RandomSource) -> ActionRecord {
    let activity = if let Some(direction) = action.strip_prefix("move ") {
        Activity::Move(agent.move_toward(direction, rng))
    } else if action == "scan" {
        Activity::Scan(agent.scan(rng))
    } else {
        Activity::UnknownAction
    };
    ActionRecord { tick, activity }
}

/// Plain console mode: one notice line per action, paced by the tick
/// interval, stopping early once the rover deactivates.
fn run_headless(args: &Args, rng: &mut dyn RandomSource) {
    let mut agent = Agent::new(&args.name, (args.x, args.y));
    let init = ActionRecord {
        tick: 0,
        activity: Activity::Initialized {
            position: agent.position,
        },
    };
    println!("{}", init.describe(&agent.name));

    for (i, action) in DEMO_ACTIONS.iter().enumerate() {
        if !agent.active {
            break;
        }
        thread::sleep(Duration::from_millis(args.tick_ms));
        let record = perform(&mut agent, action, (i + 1) as u64, rng);
        println!("{}", record.describe(&agent.name));
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    args: &Args,
    rng: &mut dyn RandomSource,
) -> io::Result<()> {
    let mut agent = Agent::new(&args.name, (args.x, args.y));
    let mut trail = VisitGrid::new();
    let mut log: ActionLog<16> = ActionLog::new();

    trail.visit(agent.position);
    log.record(ActionRecord {
        tick: 0,
        activity: Activity::Initialized {
            position: agent.position,
        },
    });

    let tick_rate = Duration::from_millis(args.tick_ms);
    let mut last_tick = Instant::now();
    let mut cursor = 0usize;

    loop {
        // 1. Advance the script
        let running = cursor < DEMO_ACTIONS.len() && agent.active;
        if running && last_tick.elapsed() >= tick_rate {
            let record = perform(&mut agent, DEMO_ACTIONS[cursor], (cursor + 1) as u64, rng);
            cursor += 1;
            if let Activity::Move(MoveOutcome::Moved { .. }) = record.activity {
                trail.visit(agent.position);
            }
            log.record(record);
            last_tick = Instant::now();
        }

        // 2. Render
        terminal.draw(|f| {
            let grid = compute_field_grid(&trail, agent.position);
            let state = if agent.active { "active" } else { "depleted" };
            let phase = if cursor < DEMO_ACTIONS.len() && agent.active {
                "running"
            } else {
                "done, q quits"
            };
            let hud = format!(
                "{} | pos ({}, {}) | battery {:>3}% | {state} | {phase}",
                agent.name, agent.position.0, agent.position.1, agent.battery
            );
            let events: Vec<String> = log.iter().map(|r| r.describe(&agent.name)).collect();
            draw_ui(f, grid, &hud, &events);
        })?;

        // 3. Input
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Char('q') {
                    return Ok(());
                }
            }
        }
    }
}
