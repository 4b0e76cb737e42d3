use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use lander::build_info;
use lander::cli::{self, Command, RunOptions};
use lander::clock::TickClock;
use lander::config::LanderConfig;
use lander::input::HeldKeys;
use lander::simulation::Simulation;
use lander::ui::{draw_game, renderer::DisplayList};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::fs::File;
use std::io::{self, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Poll interval once the run is over and only quit is accepted.
const FROZEN_POLL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn Error>> {
    let options = match cli::parse(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("{}", build_info::version_string());
            return Ok(());
        }
        Ok(Command::Run(options)) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'lander --help' for usage.");
            std::process::exit(2);
        }
    };

    if let Some(path) = &options.log {
        init_logging(path)?;
    }
    log::info!("Starting {}", build_info::version_string());

    let sim = build_simulation(&options)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, sim);

    // Restore the terminal before any error is reported.
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Log to a file; stderr belongs to the terminal UI.
fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn build_simulation(options: &RunOptions) -> Result<Simulation, Box<dyn Error>> {
    let config = match &options.config {
        Some(path) => LanderConfig::load(path)?,
        None => {
            let config = LanderConfig::default();
            config.validate()?;
            config
        }
    };

    let seed = options.seed.unwrap_or_else(rand::random);
    log::info!("Terrain seed {}", seed);

    let sim = Simulation::from_seed(config, seed)?;
    sim.visible_terrain()?;
    Ok(sim)
}

fn run(terminal: &mut Term, mut sim: Simulation) -> Result<(), Box<dyn Error>> {
    let mut keys = HeldKeys::new(sim.config().key_hold_ticks);
    let mut clock = TickClock::new(sim.config().tick_interval());
    let mut display = DisplayList::new();

    // Carries a scroll error out of the draw closure.
    let mut draw_error = None;

    loop {
        terminal.draw(|frame| {
            if let Err(e) = draw_game(frame, &sim, &mut display) {
                draw_error = Some(e);
            }
        })?;
        if let Some(e) = draw_error.take() {
            return Err(e.into());
        }

        if sim.outcome().is_terminal() {
            // Frozen: only quit is accepted.
            if event::poll(FROZEN_POLL)? {
                if let Event::Key(key) = event::read()? {
                    keys.handle_key(&key);
                }
            }
            if keys.quit_requested() {
                return Ok(());
            }
            continue;
        }

        // Drain input until the next tick is due.
        loop {
            let now = Instant::now();
            if clock.is_due(now) {
                break;
            }
            if event::poll(clock.until_next_tick(now))? {
                if let Event::Key(key) = event::read()? {
                    keys.handle_key(&key);
                }
            }
            if keys.quit_requested() {
                log::info!("Quit after {} ticks", sim.tick_count());
                return Ok(());
            }
        }

        sim.tick(&keys.snapshot())?;
        keys.end_tick();
        clock.advance(Instant::now());
    }
}
