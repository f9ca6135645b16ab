pub mod app_dirs;
pub mod audio;
pub mod celebration;
pub mod game;
pub mod highscore;
pub mod runtime;
pub mod ui;

use crate::{
    audio::Audio,
    celebration::Celebration,
    game::{Session, DEFAULT_SESSION_SECS, TICK_RATE_MS},
    highscore::{FileHighScoreStore, HighScoreStore},
    runtime::{CrosstermEvents, GameEvent, Runner},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use webbrowser::Browser;

/// minimal tap-reflex tui game
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A minimal tap-reflex TUI game: a target blinks in and out at random while the clock runs down; tap it with the spacebar to score. Your best score is kept between runs."
)]
pub struct Cli {
    /// number of seconds in a session
    #[clap(short = 's', long, default_value_t = DEFAULT_SESSION_SECS, value_parser = clap::value_parser!(u32).range(1..))]
    seconds: u32,

    /// seed the visibility randomizer for a reproducible session
    #[clap(long)]
    seed: Option<u64>,

    /// disable the tap sound
    #[clap(short = 'm', long)]
    mute: bool,

    /// path to the high score file (defaults to the platform state dir)
    #[clap(long)]
    high_score_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Start,
    Playing,
    Summary,
}

#[derive(Debug)]
pub struct App {
    pub cli: Option<Cli>,
    pub session: Session,
    pub scores: FileHighScoreStore,
    pub best: u32,
    pub new_best: bool,
    pub celebration: Celebration,
    pub state: AppState,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let scores = match &cli.high_score_file {
            Some(path) => FileHighScoreStore::with_path(path),
            None => FileHighScoreStore::new(),
        };
        let best = scores.load();
        let session = match cli.seed {
            Some(seed) => Session::from_seed(cli.seconds, seed),
            None => Session::new(cli.seconds),
        };

        Self {
            cli: Some(cli),
            session,
            scores,
            best,
            new_best: false,
            celebration: Celebration::new(),
            state: AppState::Start,
        }
    }

    /// Start a fresh session; also the restart affordance from Summary.
    pub fn begin(&mut self) {
        self.session.start();
        self.new_best = false;
        self.state = AppState::Playing;
    }

    /// Session over: submit the score once, celebrate an improvement.
    pub fn finish_session(&mut self, width: u16, height: u16) {
        self.new_best = self.scores.submit(self.session.score);
        if self.new_best {
            self.best = self.session.score;
            self.celebration.start(width, height);
        }
        self.state = AppState::Summary;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    // A missing output device degrades to silence, same as --mute.
    let audio = if cli.mute { None } else { Audio::new().ok() };

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cli);
    start_tui(&mut terminal, &mut app, audio.as_ref())?;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    Ok(())
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    audio: Option<&Audio>,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEvents::new(), Duration::from_millis(TICK_RATE_MS));

    loop {
        terminal.draw(|f| ui(app, f))?;

        match runner.step() {
            GameEvent::Tick => {
                if app.state == AppState::Playing {
                    app.session.on_tick();

                    if app.session.has_finished() {
                        let size = terminal.size().unwrap_or_default();
                        app.finish_session(size.width, size.height);
                    }
                }

                app.celebration.on_tick();
            }
            GameEvent::Resize => {}
            GameEvent::Key(key) => match key.code {
                KeyCode::Esc => {
                    break;
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    break;
                }
                KeyCode::Char(' ') => match app.state {
                    AppState::Start => app.begin(),
                    AppState::Playing => {
                        if app.session.tap() {
                            if let Some(audio) = audio {
                                audio.play_tap();
                            }
                        }
                    }
                    AppState::Summary => {}
                },
                KeyCode::Enter if app.state == AppState::Start => {
                    app.begin();
                }
                KeyCode::Char('r') if app.state == AppState::Summary => {
                    app.begin();
                }
                KeyCode::Char('t') if app.state == AppState::Summary => {
                    if Browser::is_available() {
                        webbrowser::open(&format!(
                            "https://twitter.com/intent/tweet?text=I%20scored%20{}%20in%20tapp%21",
                            app.session.score
                        ))
                        .unwrap_or_default();
                    }
                }
                _ => {}
            },
        }
    }

    Ok(())
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
