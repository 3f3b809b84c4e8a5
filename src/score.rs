use std::time::{Duration, Instant};

/// Final numbers of a finished session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub score: u32,
    pub elapsed: Duration,
    pub words_per_minute: f64,
}

/// Count of typed words since the session started.
#[derive(Debug, Clone)]
pub struct ScoreTracker {
    score: u32,
    started_at: Instant,
}

impl ScoreTracker {
    pub fn new(started_at: Instant) -> Self {
        Self {
            score: 0,
            started_at,
        }
    }

    pub fn increment(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Sessions shorter than a minute are rated as if they lasted exactly one.
    pub fn words_per_minute(&self, now: Instant) -> f64 {
        words_per_minute(self.score, self.elapsed(now))
    }

    pub fn summary(&self, now: Instant) -> SessionSummary {
        SessionSummary {
            score: self.score,
            elapsed: self.elapsed(now),
            words_per_minute: self.words_per_minute(now),
        }
    }
}

pub fn words_per_minute(score: u32, elapsed: Duration) -> f64 {
    let minutes = (elapsed.as_secs_f64() / 60.0).max(1.0);
    score as f64 / minutes
}
