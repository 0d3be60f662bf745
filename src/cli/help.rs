//! Usage text.

pub const USAGE: &str = "\
NAME
\tpassgen - password generator

SYNOPSIS
\tpassgen [OPTION...] [LENGTH]

DESCRIPTION
\tGenerate cryptographically secure passwords of LENGTH characters,
\tdefault length is 22.

OPTIONS
\t+l, --enable-lower
\t\tenables lowercase letters to be generated, default
\t-l, --disable-lower
\t\tdisables lowercase letters
\t+u, --enable-upper
\t\tenables uppercase letters to be generated, default
\t-u, --disable-upper
\t\tdisables uppercase letters
\t+n, --enable-number
\t\tenables numbers to be generated, default
\t-n, --disable-number
\t\tdisables numbers
\t+s, --enable-symbol
\t\tenables symbols to be generated
\t-s, --disable-symbol
\t\tdisables symbols, default
\t--help
\t\tprints this message
";

pub fn print_help() {
    eprint!("{USAGE}");
}
