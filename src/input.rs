use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key event as far as the game cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Letter(char),
    Backspace,
    Other,
}

impl KeyInput {
    pub fn classify(c: char) -> Self {
        match uppercase_letter(c) {
            Some(_) => KeyInput::Letter(c),
            None => KeyInput::Other,
        }
    }
}

/// Uppercase form of a letter that stays a single char when uppercased.
/// Letters like 'ß' expand to several chars and are not typeable.
pub fn uppercase_letter(c: char) -> Option<char> {
    if !c.is_alphabetic() {
        return None;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

impl From<KeyEvent> for KeyInput {
    fn from(key: KeyEvent) -> Self {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return KeyInput::Other;
        }
        match key.code {
            KeyCode::Char(c) => KeyInput::classify(c),
            KeyCode::Backspace => KeyInput::Backspace,
            _ => KeyInput::Other,
        }
    }
}

/// Letters typed since the last match or clear, stored uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    chars: Vec<char>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false (and leaves the buffer alone) for anything but a letter.
    pub fn append_letter(&mut self, c: char) -> bool {
        match uppercase_letter(c) {
            Some(u) => {
                self.chars.push(u);
                true
            }
            None => false,
        }
    }

    /// Returns false when there was nothing to erase.
    pub fn erase_last(&mut self) -> bool {
        self.chars.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    pub fn as_text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
