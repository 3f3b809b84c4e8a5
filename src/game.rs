use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::input::{uppercase_letter, InputBuffer, KeyInput};
use crate::matcher;
use crate::pool::{ActiveWord, ActiveWordPool, Placement};
use crate::scheduler::{clamp_interval, SpawnScheduler, DEFAULT_SPAWN_INTERVAL_SECS};
use crate::score::{ScoreTracker, SessionSummary};
use crate::word_bank::WordBank;

pub const DEFAULT_TRAVEL_SECS: f64 = 5.0;
pub const MAX_TRAVEL_SECS: f64 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    pub spawn_interval_secs: f64,
    pub travel: Duration,
    pub expire_words: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            spawn_interval_secs: DEFAULT_SPAWN_INTERVAL_SECS,
            travel: Duration::from_secs_f64(DEFAULT_TRAVEL_SECS),
            expire_words: false,
        }
    }
}

/// Things that happened inside the engine, in order, for whoever renders it.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    WordSpawned(ActiveWord),
    WordMatched(ActiveWord),
    WordExpired(ActiveWord),
    KeyAccepted(char),
    KeyErased,
}

/// Read-only view of the game at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub words: Vec<ActiveWord>,
    pub typed: String,
    pub score: u32,
    pub spawn_interval_secs: f64,
    pub elapsed: Duration,
}

/// One play session: owns every piece of state and applies ticks and keys
/// strictly one at a time.
#[derive(Debug)]
pub struct Game {
    bank: WordBank,
    pool: ActiveWordPool,
    input: InputBuffer,
    scheduler: SpawnScheduler,
    score: ScoreTracker,
    settings: GameSettings,
    rng: StdRng,
    events: Vec<GameEvent>,
    finished: Option<SessionSummary>,
}

impl Game {
    pub fn new(bank: WordBank, settings: GameSettings, now: Instant) -> Self {
        Self::with_rng(bank, settings, now, StdRng::from_entropy())
    }

    pub fn with_rng(bank: WordBank, mut settings: GameSettings, now: Instant, rng: StdRng) -> Self {
        settings.spawn_interval_secs = clamp_interval(settings.spawn_interval_secs);
        info!(
            "session started: {} words in bank, spawn every {:.1}s",
            bank.len(),
            settings.spawn_interval_secs
        );
        Self {
            bank,
            pool: ActiveWordPool::new(),
            input: InputBuffer::new(),
            scheduler: SpawnScheduler::new(),
            score: ScoreTracker::new(now),
            settings,
            rng,
            events: vec![],
            finished: None,
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.has_finished() {
            return;
        }

        if self.settings.expire_words {
            for word in self.pool.expire(now) {
                debug!("word {} {} expired", word.id, word.text);
                self.events.push(GameEvent::WordExpired(word));
            }
        }

        if self.scheduler.tick(now, self.settings.spawn_interval_secs) {
            self.spawn_word(now);
        }
    }

    fn spawn_word(&mut self, now: Instant) {
        let text = self.bank.draw_with(&mut self.rng).to_string();
        let placement = self.random_placement();
        let word = self.pool.spawn(&text, placement, now);
        debug!("spawned {} {}", word.id, word.text);
        self.events.push(GameEvent::WordSpawned(word));
    }

    /// Enter from the left edge, drift towards a random point on the field.
    fn random_placement(&mut self) -> Placement {
        Placement {
            start: (0.0, self.rng.gen_range(0.0..0.75)),
            end: (self.rng.gen_range(0.0..0.9), self.rng.gen_range(0.0..1.0)),
            duration: self.settings.travel,
        }
    }

    pub fn on_key(&mut self, key: KeyInput) {
        if self.has_finished() {
            return;
        }

        match key {
            KeyInput::Letter(c) => {
                let Some(upper) = uppercase_letter(c) else {
                    return;
                };
                self.input.append_letter(c);
                self.events.push(GameEvent::KeyAccepted(upper));
            }
            KeyInput::Backspace => {
                if self.input.erase_last() {
                    self.events.push(GameEvent::KeyErased);
                }
            }
            KeyInput::Other => return,
        }

        if let Some(word) = matcher::resolve(&mut self.input, &mut self.pool, &mut self.score) {
            debug!("matched {} {}, score {}", word.id, word.text, self.score.score());
            self.events.push(GameEvent::WordMatched(word));
        }
    }

    pub fn write(&mut self, c: char) {
        self.on_key(KeyInput::classify(c));
    }

    pub fn backspace(&mut self) {
        self.on_key(KeyInput::Backspace);
    }

    /// Throw away whatever has been typed. Pool and score stay as they are.
    pub fn give_up(&mut self) {
        self.input.clear();
    }

    pub fn set_spawn_interval(&mut self, secs: f64) {
        self.settings.spawn_interval_secs = clamp_interval(secs);
    }

    pub fn adjust_spawn_interval(&mut self, delta: f64) {
        self.set_spawn_interval(self.settings.spawn_interval_secs + delta);
    }

    pub fn spawn_interval_secs(&self) -> f64 {
        self.settings.spawn_interval_secs
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn typed(&self) -> String {
        self.input.as_text()
    }

    pub fn active_words(&self) -> &[ActiveWord] {
        self.pool.all()
    }

    pub fn snapshot(&self, now: Instant) -> Snapshot {
        Snapshot {
            words: self.pool.all().to_vec(),
            typed: self.input.as_text(),
            score: self.score.score(),
            spawn_interval_secs: self.settings.spawn_interval_secs,
            elapsed: self.score.elapsed(now),
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// End the session. Later calls return the first result unchanged.
    pub fn finish(&mut self, now: Instant) -> SessionSummary {
        if let Some(summary) = self.finished {
            return summary;
        }
        let summary = self.score.summary(now);
        info!(
            "session finished: {} words in {:.1}s, {:.1} wpm",
            summary.score,
            summary.elapsed.as_secs_f64(),
            summary.words_per_minute
        );
        self.finished = Some(summary);
        summary
    }

    pub fn has_finished(&self) -> bool {
        self.finished.is_some()
    }
}
