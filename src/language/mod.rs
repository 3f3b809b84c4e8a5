pub mod core;
pub mod source;

// Re-export the main types for convenience
pub use core::Language;
pub use source::{read_word_file, WordSource};
