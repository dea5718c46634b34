use std::io;
use std::panic;
use std::process;
use std::time::Instant;

use clap::Parser;
use wrap_snake::clock::GameClock;
use wrap_snake::config::{
    GridSize, Settings, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, THEME_CLASSIC,
};
use wrap_snake::game::{GameState, StepResult};
use wrap_snake::input::{Direction, GameInput, InputHandler};
use wrap_snake::renderer::{Renderer, TerminalRenderer};
use wrap_snake::terminal_runtime::{restore_terminal, TerminalSession};

#[derive(Debug, Parser)]
#[command(about = "Snake on a wrap-around grid")]
struct Cli {
    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            bounds: GridSize {
                width: self.width,
                height: self.height,
            },
            seed: self.seed,
        }
    }
}

/// Lines to print once the terminal is back in cooked mode.
#[derive(Debug, Default)]
struct SessionReport {
    score_lines: Vec<String>,
    final_score: Option<u32>,
}

fn main() -> io::Result<()> {
    let settings = Cli::parse().settings();
    if let Err(error) = settings.validate() {
        eprintln!("Invalid settings: {error}");
        process::exit(2);
    }

    install_panic_hook();

    let report = run(settings)?;
    for line in &report.score_lines {
        println!("{line}");
    }
    if let Some(score) = report.final_score {
        println!("Game Over!! -- Your Score: {score}");
    }

    Ok(())
}

fn run(settings: Settings) -> io::Result<SessionReport> {
    let mut renderer = TerminalRenderer::new(TerminalSession::enter()?, THEME_CLASSIC);
    let mut input = InputHandler::new();
    let mut state = match settings.seed {
        Some(seed) => GameState::new_with_seed(settings.bounds, seed),
        None => GameState::new(settings.bounds),
    };
    let mut clock = GameClock::new(Instant::now());
    let mut report = SessionReport::default();
    let mut requested: Option<Direction> = None;

    renderer.render(&state.snapshot())?;

    loop {
        let wait = clock.time_until_tick(Instant::now());
        match input.poll_input(wait)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Direction(direction)) => requested = Some(direction),
            None => {}
        }

        let now = Instant::now();
        if !clock.is_tick_due(now) {
            continue;
        }

        let previous_score = state.score;
        match state.step(requested.take()) {
            StepResult::Continuing(snapshot) => {
                if snapshot.score > previous_score {
                    report.score_lines.push(format!("Score: {}", snapshot.score));
                }
                clock.mark_ticked(now, snapshot.score);
                renderer.render(&snapshot)?;
            }
            StepResult::GameOver { final_score } => {
                report.final_score = Some(final_score);
                break;
            }
        }
    }

    Ok(report)
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
