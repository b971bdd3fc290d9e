use crate::error::GenError;
use crate::types::GenerationResponse;
use std::io::{self, Write};

const DEFAULT_SUCCESS_LINE: &str = "3D assets generated successfully.";

/// Writes the outcome of a generation call the way the smoke-test programs
/// show it: success lines to `out`, a single `Error:` line to `err`.
///
/// A server-reported failure prints the server's `error` string verbatim.
/// Any other failure prints the error's display text.
pub fn print_outcome<O: Write, E: Write>(
    result: &Result<GenerationResponse, GenError>,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match result {
        Ok(response) => {
            let headline = response.message.as_deref().unwrap_or(DEFAULT_SUCCESS_LINE);
            writeln!(out, "{}", headline)?;
            writeln!(out, "Google Drive Folder ID: {}", response.drive_folder_id)?;
            writeln!(out, "View Files: {}", response.folder_url())?;
        }
        Err(GenError::ApiError { message, .. }) => {
            writeln!(err, "Error: {}", message)?;
        }
        Err(e) => {
            writeln!(err, "Error: {}", e)?;
        }
    }
    Ok(())
}

/// [`print_outcome`] against the process's stdout and stderr.
pub fn print_outcome_to_console(result: &Result<GenerationResponse, GenError>) -> io::Result<()> {
    print_outcome(result, &mut io::stdout().lock(), &mut io::stderr().lock())
}
