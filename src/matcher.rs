use crate::input::InputBuffer;
use crate::pool::{ActiveWord, ActiveWordPool};
use crate::score::ScoreTracker;

/// Check the typed text against the field and clear the oldest exact match.
///
/// On a match the word leaves the pool, the score goes up by one and the
/// buffer is emptied, all in this one call. Returns the cleared word.
pub fn resolve(
    input: &mut InputBuffer,
    pool: &mut ActiveWordPool,
    score: &mut ScoreTracker,
) -> Option<ActiveWord> {
    let current = input.as_text();
    let id = pool.find_all_by_text(&current).first().map(|w| w.id)?;
    let word = pool.remove(id)?;
    score.increment();
    input.clear();
    Some(word)
}
