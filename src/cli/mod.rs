mod flags;
mod help;
mod parse;
mod prompts;

use std::io;
use std::process::ExitCode;

pub use flags::Flag;
pub use parse::parse;

use crate::error::Result;
use crate::exits;
use crate::pass;
use crate::rand::OsRandom;
use crate::settings::Settings;

/// Run the CLI over `args` (program name excluded).
pub fn run(args: &[String]) -> ExitCode {
    let parsed = parse(args);

    for arg in &parsed.unrecognized {
        prompts::unrecognized(arg);
    }

    if parsed.help {
        help::print_help();
        return ExitCode::SUCCESS;
    }

    tracing::debug!(settings = ?parsed.settings, "arguments parsed");

    let result = generate_output(&parsed.settings);
    if let Err(ref err) = result {
        tracing::debug!(error = ?err, "generation failed");
        prompts::error(err);
    }
    exits::status(&result)
}

fn generate_output(settings: &Settings) -> Result<()> {
    let pass = pass::generate(settings, &mut OsRandom)?;
    let stdout = io::stdout();
    pass::write_line(&mut stdout.lock(), pass)
}
