mod ui;

use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::{Duration, Instant},
};

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use keyshooter::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    history::SessionLog,
    logging,
    runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner},
    score::SessionSummary,
    Game, GameResult, KeyInput, WordBank,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::ui::keyboard::KeyFlash;

const TICK_RATE_MS: u64 = 50;
const INTERVAL_STEP_SECS: f64 = 0.5;

/// type the drifting words before they get away
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Words drift across the field; type each one to shoot it down. Your score and words per minute are shown when you end the session with Esc."
)]
pub struct Cli {
    /// seconds between new words (1-5)
    #[clap(short = 'i', long)]
    interval: Option<f64>,

    /// built-in word list to draw from
    #[clap(short = 'l', long, value_enum)]
    language: Option<BuiltinLanguage>,

    /// word file to draw from instead, one word per line
    #[clap(short = 'w', long)]
    words: Option<PathBuf>,

    /// seconds a word takes to drift across the field
    #[clap(short = 't', long)]
    travel: Option<f64>,

    /// remove words once they finish drifting
    #[clap(long)]
    expire: bool,

    /// store these options as the new defaults
    #[clap(long)]
    save_config: bool,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum BuiltinLanguage {
    English5,
    English,
}

impl Cli {
    /// Command-line values win over the stored config
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(interval) = self.interval {
            config.spawn_interval_secs = interval;
        }
        if let Some(language) = self.language {
            config.language = language.to_string().to_lowercase();
            config.word_file = None;
        }
        if let Some(ref words) = self.words {
            config.word_file = Some(words.clone());
        }
        if let Some(travel) = self.travel {
            config.travel_secs = travel;
        }
        if self.expire {
            config.expire_words = true;
        }
        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    Playing,
    Results(SessionSummary),
}

#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub bank: WordBank,
    pub game: Game,
    pub state: AppState,
    pub key_flash: KeyFlash,
}

impl App {
    pub fn new(config: Config, bank: WordBank, now: Instant) -> Self {
        let game = Game::new(bank.clone(), config.game_settings(), now);
        Self {
            config,
            bank,
            game,
            state: AppState::Playing,
            key_flash: KeyFlash::default(),
        }
    }

    pub fn reset(&mut self, now: Instant) {
        // keep whatever interval the player dialed in during the last round
        self.config.spawn_interval_secs = self.game.spawn_interval_secs();
        self.game = Game::new(self.bank.clone(), self.config.game_settings(), now);
        self.state = AppState::Playing;
        self.key_flash = KeyFlash::default();
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.state == AppState::Playing {
            self.game.on_tick(now);
            self.absorb_events(now);
        }
    }

    pub fn on_play_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Tab => self.game.give_up(),
            KeyCode::Up => self.game.adjust_spawn_interval(-INTERVAL_STEP_SECS),
            KeyCode::Down => self.game.adjust_spawn_interval(INTERVAL_STEP_SECS),
            _ => self.game.on_key(KeyInput::from(key)),
        }
        self.absorb_events(now);
    }

    fn absorb_events(&mut self, now: Instant) {
        for event in self.game.drain_events() {
            self.key_flash.observe(&event, now);
        }
    }

    pub fn end_session(&mut self, now: Instant) -> SessionSummary {
        let summary = self.game.finish(now);
        self.state = AppState::Results(summary);
        summary
    }
}

fn load_bank(config: &Config) -> GameResult<WordBank> {
    let words = config.word_source().load()?;
    WordBank::new(words)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(log_path) = AppDirs::log_path() {
        // the game still runs, just without a log
        if let Err(err) = logging::init_file_logger(&log_path) {
            eprintln!(
                "keyshooter: logging disabled, cannot open {}: {err}",
                log_path.display()
            );
        }
    }

    let store = FileConfigStore::new();
    let config = cli.apply_to(store.load());
    let bank = load_bank(&config)?;

    if cli.save_config {
        if let Err(err) = store.save(&config) {
            log::warn!("could not save config to {}: {err}", store.path().display());
        }
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, bank, Instant::now());
    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn record_session(summary: &SessionSummary, spawn_interval_secs: f64) {
    let Some(history) = SessionLog::new() else {
        return;
    };
    if let Err(err) = history.append(summary, spawn_interval_secs) {
        log::warn!("could not write {}: {err}", history.path().display());
    }
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| ui::draw(app, f, Instant::now()))?;

    loop {
        let event = runner.step();
        let now = Instant::now();

        match event {
            AppEvent::Tick => app.on_tick(now),
            AppEvent::Resize => {}
            AppEvent::Closed => {
                log::warn!("terminal input closed, leaving");
                break;
            }
            AppEvent::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    break;
                }

                match app.state {
                    AppState::Playing => {
                        if key.code == KeyCode::Esc {
                            let summary = app.end_session(now);
                            record_session(&summary, app.game.spawn_interval_secs());
                        } else {
                            app.on_play_key(key, now);
                        }
                    }
                    AppState::Results(_) => match key.code {
                        KeyCode::Esc | KeyCode::Char('q') => break,
                        KeyCode::Char('r') | KeyCode::Enter => app.reset(now),
                        _ => {}
                    },
                }
            }
        }

        terminal.draw(|f| ui::draw(app, f, now))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(words: &[&str]) -> (App, Instant) {
        let now = Instant::now();
        let bank = WordBank::new(words.iter().copied()).unwrap();
        (App::new(Config::default(), bank, now), now)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::parse_from(["keyshooter", "-i", "2", "-l", "english", "--expire"]);
        let config = cli.apply_to(Config {
            word_file: Some(PathBuf::from("old.txt")),
            ..Config::default()
        });

        assert_eq!(config.spawn_interval_secs, 2.0);
        assert_eq!(config.language, "english");
        assert_eq!(config.word_file, None);
        assert!(config.expire_words);
    }

    #[test]
    fn cli_word_file_wins() {
        let cli = Cli::parse_from(["keyshooter", "--words", "mine.txt"]);
        let config = cli.apply_to(Config::default());
        assert_eq!(config.word_file, Some(PathBuf::from("mine.txt")));
    }

    #[test]
    fn play_keys_reach_the_game() {
        let (mut app, now) = test_app(&["cat"]);
        app.on_tick(now);

        app.on_play_key(key(KeyCode::Char('c')), now);
        app.on_play_key(key(KeyCode::Char('a')), now);
        assert_eq!(app.game.typed(), "CA");
        assert!(app.key_flash.is_lit('A', now));

        app.on_play_key(key(KeyCode::Tab), now);
        assert_eq!(app.game.typed(), "");

        for c in "cat".chars() {
            app.on_play_key(key(KeyCode::Char(c)), now);
        }
        assert_eq!(app.game.score(), 1);
    }

    #[test]
    fn arrow_keys_adjust_interval() {
        let (mut app, now) = test_app(&["cat"]);
        app.on_play_key(key(KeyCode::Up), now);
        assert_eq!(app.game.spawn_interval_secs(), 2.5);
        app.on_play_key(key(KeyCode::Down), now);
        app.on_play_key(key(KeyCode::Down), now);
        assert_eq!(app.game.spawn_interval_secs(), 3.5);
    }

    #[test]
    fn end_and_reset_session() {
        let (mut app, now) = test_app(&["cat"]);
        app.on_tick(now);
        for c in "cat".chars() {
            app.on_play_key(key(KeyCode::Char(c)), now);
        }
        app.on_play_key(key(KeyCode::Up), now);

        let summary = app.end_session(now + Duration::from_secs(120));
        assert_eq!(app.state, AppState::Results(summary));
        assert_eq!(summary.score, 1);
        assert_eq!(summary.words_per_minute, 0.5);

        app.reset(now);
        assert_eq!(app.state, AppState::Playing);
        assert_eq!(app.game.score(), 0);
        assert_eq!(app.game.spawn_interval_secs(), 2.5);
    }
}
