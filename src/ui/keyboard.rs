use std::collections::HashMap;
use std::time::{Duration, Instant};

use keyshooter::GameEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

const FLASH: Duration = Duration::from_millis(300);

/// Remembers which keys were pressed recently so they can be drawn lit.
#[derive(Debug, Default)]
pub struct KeyFlash {
    pressed: HashMap<char, Instant>,
}

impl KeyFlash {
    pub fn observe(&mut self, event: &GameEvent, now: Instant) {
        if let GameEvent::KeyAccepted(c) = event {
            self.pressed.insert(*c, now);
        }
    }

    pub fn is_lit(&self, c: char, now: Instant) -> bool {
        self.pressed
            .get(&c)
            .is_some_and(|at| now.saturating_duration_since(*at) < FLASH)
    }
}

/// On-screen keyboard, letters only.
pub struct Keyboard<'a> {
    pub flash: &'a KeyFlash,
    pub now: Instant,
}

impl Widget for Keyboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let idle = Style::default().fg(Color::Gray).add_modifier(Modifier::DIM);
        let lit = Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); KEY_ROWS.len()])
            .split(area);

        for (row, chunk) in KEY_ROWS.iter().zip(rows.iter()) {
            let spans = row
                .chars()
                .map(|c| {
                    let style = if self.flash.is_lit(c, self.now) { lit } else { idle };
                    Span::styled(format!(" {c} "), style)
                })
                .collect::<Vec<Span>>();

            Paragraph::new(Line::from(spans))
                .alignment(Alignment::Center)
                .render(*chunk, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_lasts_briefly() {
        let mut flash = KeyFlash::default();
        let t0 = Instant::now();
        flash.observe(&GameEvent::KeyAccepted('Q'), t0);

        assert!(flash.is_lit('Q', t0 + Duration::from_millis(100)));
        assert!(!flash.is_lit('Q', t0 + Duration::from_millis(300)));
        assert!(!flash.is_lit('W', t0));
    }

    #[test]
    fn other_events_do_not_flash() {
        let mut flash = KeyFlash::default();
        let t0 = Instant::now();
        flash.observe(&GameEvent::KeyErased, t0);
        assert!(KEY_ROWS.iter().flat_map(|r| r.chars()).all(|c| !flash.is_lit(c, t0)));
    }

    #[test]
    fn renders_all_rows() {
        let flash = KeyFlash::default();
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        Keyboard {
            flash: &flash,
            now: Instant::now(),
        }
        .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains(" Q  W  E "));
        assert!(text.contains(" Z  X  C "));
    }
}
