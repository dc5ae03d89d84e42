//! Helpers shared by the CLI commands.

use std::io::Write;

use snafu::ResultExt;

use crate::cli::{Error, error};

/// Writes rendered output to stdout in one piece.
pub fn write_stdout(output: impl AsRef<[u8]>) -> Result<(), Error> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_ref()).context(error::WriteStdoutSnafu)?;
    stdout.flush().context(error::WriteStdoutSnafu)
}
