//! Character set building for password generation.

use zeroize::Zeroizing;

use crate::settings::Settings;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lower,
    Upper,
    Number,
    Symbol,
}

impl CharClass {
    /// Concatenation order of the effective charset.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Number,
        CharClass::Symbol,
    ];

    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Number => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }
}

/// Build the character pool from the enabled classes, in class order.
/// The pool is wiped when dropped.
pub fn build(settings: &Settings) -> Zeroizing<Vec<u8>> {
    let mut chars = Zeroizing::new(Vec::with_capacity(size(settings)));

    for class in CharClass::ALL {
        if settings.enabled(class) {
            chars.extend_from_slice(class.alphabet());
        }
    }

    chars
}

/// Effective charset size.
pub fn size(settings: &Settings) -> usize {
    CharClass::ALL
        .iter()
        .filter(|c| settings.enabled(**c))
        .map(|c| c.alphabet().len())
        .sum()
}
