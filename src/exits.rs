//! Exit handling: process hardening and exit status.

use std::process::ExitCode;

use crate::error::Result;

/// Keep secrets out of core dumps and away from ptrace by other users.
/// Call this early in main().
pub fn harden() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    #[cfg(all(unix, not(target_os = "linux")))]
    unsafe {
        let no_core = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        libc::setrlimit(libc::RLIMIT_CORE, &no_core);
    }
}

/// Help and warnings exit 0; only a failed generation is nonzero.
pub fn status(result: &Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
