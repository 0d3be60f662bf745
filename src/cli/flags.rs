use crate::pass::charset::CharClass;

/// A single command-line argument, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Enable(CharClass),
    Disable(CharClass),
    Help,
    Unrecognized,
}

impl Flag {
    pub fn classify(arg: &str) -> Self {
        match arg {
            "+l" | "--enable-lower" => Flag::Enable(CharClass::Lower),
            "-l" | "--disable-lower" => Flag::Disable(CharClass::Lower),
            "+u" | "--enable-upper" => Flag::Enable(CharClass::Upper),
            "-u" | "--disable-upper" => Flag::Disable(CharClass::Upper),
            "+n" | "--enable-number" => Flag::Enable(CharClass::Number),
            "-n" | "--disable-number" => Flag::Disable(CharClass::Number),
            "+s" | "--enable-symbol" => Flag::Enable(CharClass::Symbol),
            "-s" | "--disable-symbol" => Flag::Disable(CharClass::Symbol),
            "--help" => Flag::Help,
            _ => Flag::Unrecognized,
        }
    }
}
