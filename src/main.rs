// UI module is not part of the library; it's tightly coupled to the terminal
mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use serpent::audio::TerminalBell;
use serpent::cli::{parse_args, CliCommand, CliOverrides, HELP};
use serpent::constants::FRAME_POLL_MS;
use serpent::game::Grid;
use serpent::high_score::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
use serpent::input::{map_key, KeyAction};
use serpent::settings::{load_settings, Settings};
use serpent::utils::{build_info, logging, persistence};
use serpent::Session;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let overrides = match parse_args(&args) {
        Ok(CliCommand::Play(overrides)) => overrides,
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", HELP);
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'serpent --help' for usage.");
            std::process::exit(1);
        }
    };

    let mut session = build_session(overrides);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut session);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Terminal loop failed");
    }
    result
}

/// Resolve storage, logging, settings and the high score. Any storage problem
/// downgrades to an in-memory session rather than refusing to start.
fn build_session(overrides: CliOverrides) -> Session<rand::rngs::ThreadRng> {
    let data_dir = persistence::data_dir().ok();
    if let Some(dir) = &data_dir {
        logging::init(dir);
    }

    let stored = data_dir
        .as_deref()
        .map(load_settings)
        .unwrap_or_default();
    let settings: Settings = overrides.apply(stored);

    let high_scores: Box<dyn HighScoreStore> = match &data_dir {
        Some(dir) => Box::new(FileHighScoreStore::new(dir)),
        None => Box::new(MemoryHighScoreStore::default()),
    };
    Session::new(
        Grid::default(),
        settings,
        high_scores,
        Box::new(TerminalBell::stdout()),
        data_dir,
        rand::thread_rng(),
    )
}

/// Frame loop: poll input, advance the simulation by the elapsed wall-clock
/// time, draw. Ticks run inside `Session::frame`, so each draw sees a settled
/// state.
fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session<rand::rngs::ThreadRng>,
) -> io::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &session.game))?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Game(input) => {
                        session.input(input);
                    }
                    KeyAction::Ignore => {}
                }
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        // Carry sub-millisecond remainders into the next frame
        last_frame += Duration::from_millis(dt_ms);
        session.frame(dt_ms);
    }
}
