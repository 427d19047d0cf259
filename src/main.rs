//! Jungletrail - Entry Point
//!
//! Loads the track configuration and player roster, sets up the
//! terminal, and runs the main loop.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use jungletrail::data::TrackConfig;
use jungletrail::roster::{sample_roster, Roster};
use jungletrail::save::{load_cached_points, save_cached_points};
use jungletrail::ui::{App, InputAction};

/// Target frames per second for the render loop
const TARGET_FPS: u64 = 30;
const FRAME_TIME: Duration = Duration::from_millis(1000 / TARGET_FPS);

fn main() -> Result<()> {
    // Initialize logging to file (to avoid interfering with TUI)
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("jungletrail.log")
        .unwrap_or_else(|_| OpenOptions::new().write(true).open("/dev/null").unwrap());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting Jungletrail v{}", env!("CARGO_PKG_VERSION"));

    // A broken track config is fatal; there is nothing sensible to
    // draw without validated tables.
    let config = TrackConfig::load().context("track configuration is invalid")?;

    let roster_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("players.json"));
    let roster = load_roster(&roster_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    let result = run_loop(&mut terminal, &mut app, &config, roster, &roster_path);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Report any errors
    if let Err(ref e) = result {
        log::error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Jungletrail shut down cleanly");
    result
}

/// Load the roster with the same fallback chain the web version had:
/// shared data file first, then the sample roster topped up with any
/// locally cached point totals.
fn load_roster(path: &Path) -> Roster {
    match Roster::load_from(path) {
        Ok(roster) => {
            if let Err(e) = save_cached_points(&roster.players) {
                log::warn!("Failed to cache points: {}", e);
            }
            roster
        }
        Err(e) => {
            log::warn!("{}; using the sample roster", e);
            let mut roster = sample_roster();
            if let Some(records) = load_cached_points() {
                let records: Vec<(String, u32)> = records
                    .into_iter()
                    .map(|r| (r.id, r.points))
                    .collect();
                roster.apply_points(&records);
            }
            roster
        }
    }
}

/// Main render loop
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &TrackConfig,
    mut roster: Roster,
    roster_path: &Path,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        // Handle input
        if event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press {
                    match app.handle_input(key, &roster) {
                        InputAction::Quit => break,
                        InputAction::Reload => {
                            roster = load_roster(roster_path);
                            log::info!("Roster reloaded ({} players)", roster.len());
                        }
                        InputAction::None => {}
                    }
                }
            }
        }

        // Render
        terminal.draw(|frame| {
            app.render(frame, config, &roster);
        })?;

        // Frame rate limiting
        let frame_time = frame_start.elapsed();
        if frame_time < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - frame_time);
        }
    }

    Ok(())
}
