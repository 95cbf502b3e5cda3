//! Command-line host: flags, settings, rendering and outputs.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

pub use context::{Context, Stop, apply_flags};
pub use flags::CliFlags;

/// Parse `args` and run once. Flag errors exit through clap.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let flags = match CliFlags::try_parse_from(args) {
        Ok(flags) => flags,
        Err(e) => e.exit(),
    };

    let mut ctx = Context::new(flags);
    match ctx.run() {
        Ok(()) | Err(Stop::Done) => ExitCode::SUCCESS,
        Err(Stop::Failed(e)) => {
            error!(error = %e, "run failed");
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
