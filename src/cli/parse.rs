use super::Flag;
use crate::settings::Settings;

/// Result of walking the argument list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Parsed {
    pub settings: Settings,
    /// Arguments to report, in the order they were seen.
    pub unrecognized: Vec<String>,
    pub help: bool,
}

/// Parse arguments, program name excluded.
///
/// Never fails: unknown arguments are collected and skipped, and `--help`
/// stops the walk. Only the final argument may be read as the length.
pub fn parse(args: &[String]) -> Parsed {
    let mut parsed = Parsed::default();
    let last = args.len().saturating_sub(1);

    for (i, arg) in args.iter().enumerate() {
        match Flag::classify(arg) {
            Flag::Enable(class) => parsed.settings.set(class, true),
            Flag::Disable(class) => parsed.settings.set(class, false),
            Flag::Help => {
                parsed.help = true;
                return parsed;
            }
            Flag::Unrecognized => {
                if i == last
                    && let Ok(len) = arg.parse::<usize>()
                {
                    parsed.settings.pass_length = len;
                } else {
                    parsed.unrecognized.push(arg.clone());
                }
            }
        }
    }

    parsed
}
