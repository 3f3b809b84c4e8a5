use std::fmt;
use std::time::{Duration, Instant};

/// Identity of one spawned word. Never reused within a pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u64);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Trajectory in normalized field coordinates (0.0..=1.0 on both axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub duration: Duration,
}

impl Placement {
    pub fn stationary(at: (f64, f64)) -> Self {
        Self {
            start: at,
            end: at,
            duration: Duration::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveWord {
    pub id: WordId,
    pub text: String,
    pub spawned_at: Instant,
    pub placement: Placement,
}

impl ActiveWord {
    /// Fraction of the trajectory covered at `now`, clamped to 0.0..=1.0.
    pub fn progress(&self, now: Instant) -> f64 {
        let travel = self.placement.duration.as_secs_f64();
        if travel <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.spawned_at).as_secs_f64();
        (elapsed / travel).clamp(0.0, 1.0)
    }

    pub fn position_at(&self, now: Instant) -> (f64, f64) {
        let t = self.progress(now);
        let (sx, sy) = self.placement.start;
        let (ex, ey) = self.placement.end;
        (sx + (ex - sx) * t, sy + (ey - sy) * t)
    }

    pub fn has_arrived(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.spawned_at) >= self.placement.duration
    }
}

/// Words currently on the field, kept in spawn order (oldest first).
#[derive(Debug, Default)]
pub struct ActiveWordPool {
    words: Vec<ActiveWord>,
    next_id: u64,
}

impl ActiveWordPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// `text` must be non-empty; `WordBank` guarantees that for drawn words.
    pub fn spawn(&mut self, text: &str, placement: Placement, now: Instant) -> ActiveWord {
        debug_assert!(!text.is_empty());
        let word = ActiveWord {
            id: WordId(self.next_id),
            text: text.to_uppercase(),
            spawned_at: now,
            placement,
        };
        self.next_id += 1;
        self.words.push(word.clone());
        word
    }

    /// Removing an id that is no longer present is a no-op.
    pub fn remove(&mut self, id: WordId) -> Option<ActiveWord> {
        let idx = self.words.iter().position(|w| w.id == id)?;
        Some(self.words.remove(idx))
    }

    pub fn find_all_by_text(&self, text: &str) -> Vec<&ActiveWord> {
        let text = text.to_uppercase();
        self.words.iter().filter(|w| w.text == text).collect()
    }

    /// Remove and return every word whose trajectory has finished.
    pub fn expire(&mut self, now: Instant) -> Vec<ActiveWord> {
        let (expired, active): (Vec<_>, Vec<_>) = std::mem::take(&mut self.words)
            .into_iter()
            .partition(|w| w.has_arrived(now));
        self.words = active;
        expired
    }

    pub fn all(&self) -> &[ActiveWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
