//! Centralized diagnostics for CLI output. Everything goes to stderr.

use std::fmt::Display;
use std::io::IsTerminal;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Colors only when a person is watching; piped stderr gets the plain text.
fn paint(color: &'static str) -> (&'static str, &'static str) {
    if std::io::stderr().is_terminal() {
        (color, RESET)
    } else {
        ("", "")
    }
}

/// Print an unrecognized-option warning (yellow)
pub fn unrecognized(arg: &str) {
    let (on, off) = paint(YELLOW);
    eprintln!("{on}Unrecognized option: {arg}{off}");
}

/// Print a fatal error (red)
pub fn error(err: &impl Display) {
    let (on, off) = paint(RED);
    eprintln!("{on}{err}{off}");
}
