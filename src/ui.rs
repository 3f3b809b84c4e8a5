pub mod keyboard;
pub mod screen;

use std::time::Instant;

use keyshooter::{pool::ActiveWord, score::SessionSummary};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{ui::keyboard::Keyboard, App};

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

pub fn draw(app: &App, f: &mut Frame, now: Instant) {
    screen::current_screen(&app.state).render(app, f, now);
}

/// Terminal cell for a word at a normalized field position. The word is kept
/// fully inside `area`.
pub fn field_cell(pos: (f64, f64), word_width: u16, area: Rect) -> (u16, u16) {
    let span_x = area.width.saturating_sub(word_width) as f64;
    let span_y = area.height.saturating_sub(1) as f64;
    let x = (pos.0.clamp(0.0, 1.0) * span_x).round() as u16;
    let y = (pos.1.clamp(0.0, 1.0) * span_y).round() as u16;
    (area.x + x, area.y + y)
}

pub struct PlayView<'a> {
    pub app: &'a App,
    pub now: Instant,
}

impl Widget for PlayView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game = &self.app.game;
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1), // score + pacing
                Constraint::Length(1), // typed so far
                Constraint::Min(3),    // play field
                Constraint::Length(3), // keyboard
                Constraint::Length(1), // legend
            ])
            .split(area);

        let status = Paragraph::new(Line::from(vec![
            Span::styled(format!("score {}", game.score()), bold_style),
            Span::raw("   "),
            Span::styled(
                format!("new word every {:.1}s", game.spawn_interval_secs()),
                dim_style,
            ),
        ]))
        .alignment(Alignment::Center);
        status.render(chunks[0], buf);

        let typed = Paragraph::new(Span::styled(
            game.typed(),
            Style::default().patch(bold_style).fg(Color::Cyan),
        ))
        .alignment(Alignment::Center);
        typed.render(chunks[1], buf);

        let field_block = Block::default().borders(Borders::TOP | Borders::BOTTOM);
        let field = field_block.inner(chunks[2]);
        field_block.render(chunks[2], buf);
        for word in game.active_words() {
            render_word(word, field, self.now, buf);
        }

        Keyboard {
            flash: &self.app.key_flash,
            now: self.now,
        }
        .render(chunks[3], buf);

        let legend = Paragraph::new(Span::styled(
            "(tab) clear / (↑↓) pace / (esc) end",
            Style::default().add_modifier(Modifier::ITALIC),
        ));
        legend.render(chunks[4], buf);
    }
}

fn render_word(word: &ActiveWord, field: Rect, now: Instant, buf: &mut Buffer) {
    if field.width == 0 || field.height == 0 {
        return;
    }
    let width = (word.text.width() as u16).min(field.width);
    let (x, y) = field_cell(word.position_at(now), width, field);
    buf.set_stringn(
        x,
        y,
        &word.text,
        width as usize,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    );
}

pub struct ResultsView {
    pub summary: SessionSummary,
}

impl Widget for ResultsView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1), // headline
                Constraint::Length(1), // words typed
                Constraint::Length(1), // wpm
                Constraint::Length(1), // time
                Constraint::Min(1),
                Constraint::Length(1), // legend
            ])
            .split(area);

        let lines = [
            ("Good job!".to_string(), bold_style.fg(Color::Green)),
            (format!("words typed: {}", self.summary.score), bold_style),
            (
                format!("{:.1} words per minute", self.summary.words_per_minute),
                bold_style.fg(Color::Magenta),
            ),
            (
                format!("played for {:.0}s", self.summary.elapsed.as_secs_f64()),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ];
        for ((text, style), chunk) in lines.into_iter().zip(chunks[1..5].iter()) {
            Paragraph::new(Span::styled(text, style))
                .alignment(Alignment::Center)
                .render(*chunk, buf);
        }

        let legend = Paragraph::new(Span::styled(
            "(r)estart / (esc)ape",
            Style::default().add_modifier(Modifier::ITALIC),
        ));
        legend.render(chunks[6], buf);
    }
}
