// Library surface: the game engine plus the plumbing the terminal front end
// and headless tests share. Rendering lives in the binary.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod input;
pub mod language;
pub mod logging;
pub mod matcher;
pub mod pool;
pub mod runtime;
pub mod scheduler;
pub mod score;
pub mod word_bank;

pub use error::{GameError, GameResult};
pub use game::{Game, GameEvent, GameSettings, Snapshot};
pub use input::KeyInput;
pub use word_bank::WordBank;
