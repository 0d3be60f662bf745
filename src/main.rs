use std::env;
use std::process::ExitCode;

mod cli;
mod error;
mod exits;
mod logging;
mod pass;
mod rand;
mod settings;

fn main() -> ExitCode {
    exits::harden();
    logging::init();

    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    cli::run(&args)
}
