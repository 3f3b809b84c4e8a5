use std::time::Instant;

pub const MIN_SPAWN_INTERVAL_SECS: f64 = 1.0;
pub const MAX_SPAWN_INTERVAL_SECS: f64 = 5.0;
pub const DEFAULT_SPAWN_INTERVAL_SECS: f64 = 3.0;

/// Clamp a requested spawn interval to the supported range.
pub fn clamp_interval(secs: f64) -> f64 {
    if secs.is_nan() {
        return DEFAULT_SPAWN_INTERVAL_SECS;
    }
    secs.clamp(MIN_SPAWN_INTERVAL_SECS, MAX_SPAWN_INTERVAL_SECS)
}

/// Decides when the next word appears.
///
/// A fresh scheduler is due immediately. Every `true` from [`tick`](Self::tick)
/// advances the internal clock, so callers must spawn a word whenever it
/// returns `true` or that slot is lost.
#[derive(Debug, Default, Clone)]
pub struct SpawnScheduler {
    last_spawn: Option<Instant>,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now: Instant, interval_secs: f64) -> bool {
        let due = match self.last_spawn {
            None => true,
            Some(last) => now.saturating_duration_since(last).as_secs_f64() >= interval_secs,
        };
        if due {
            self.last_spawn = Some(now);
        }
        due
    }

    pub fn last_spawn(&self) -> Option<Instant> {
        self.last_spawn
    }
}
