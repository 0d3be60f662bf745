//! Password generation settings.

use crate::pass::charset::CharClass;

pub const DEFAULT_PASS_LENGTH: usize = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Settings {
    pub fn enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.lowercase,
            CharClass::Upper => self.uppercase,
            CharClass::Number => self.numbers,
            CharClass::Symbol => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, on: bool) {
        match class {
            CharClass::Lower => self.lowercase = on,
            CharClass::Upper => self.uppercase = on,
            CharClass::Number => self.numbers = on,
            CharClass::Symbol => self.symbols = on,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_PASS_LENGTH,
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: false,
        }
    }
}
