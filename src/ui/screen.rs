use std::time::Instant;

use ratatui::Frame;

use crate::{ui, App, AppState};

/// A UI Screen boundary: one per app state
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame, now: Instant);
}

/// Play field, status line and keyboard
pub struct PlayingScreen;

impl Screen for PlayingScreen {
    fn render(&self, app: &App, f: &mut Frame, now: Instant) {
        f.render_widget(ui::PlayView { app, now }, f.area());
    }
}

/// End-of-session numbers
pub struct ResultsScreen;

impl Screen for ResultsScreen {
    fn render(&self, app: &App, f: &mut Frame, _now: Instant) {
        if let AppState::Results(summary) = app.state {
            f.render_widget(ui::ResultsView { summary }, f.area());
        }
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Playing => Box::new(PlayingScreen),
        AppState::Results(_) => Box::new(ResultsScreen),
    }
}
