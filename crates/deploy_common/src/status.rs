use std::fmt;
use std::io::Write;

/// Write one progress line to the status stream
///
/// Progress lines carry no result, so a failed write is ignored.
pub fn progress<W: Write>(status: &mut W, message: fmt::Arguments<'_>) {
    let _ = writeln!(status, "{message}");
}
