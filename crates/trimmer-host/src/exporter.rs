use trimmer_core::time::TimeRange;

/// Writes the trimmed asset somewhere permanent.
///
/// Exports run asynchronously; the host event loop reports the outcome back
/// as [`crate::message::Message::ExportFinished`].
pub trait Exporter {
    /// Start exporting `range`. An error means the export never started.
    fn start_export(&mut self, range: TimeRange) -> Result<(), String>;
}
