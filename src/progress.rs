/// Per-source progress for a fetch round.
/// Frontends implement this to surface status; the lookup itself only logs.
pub trait Progress {
    /// Called at the start with the number of sources.
    fn begin(&mut self, _total: usize) {}

    /// One source came back as CSV.
    fn source_done(&mut self, _index: usize, _url: &str, _rows: usize) {}

    /// One source failed and contributes nothing.
    fn source_failed(&mut self, _index: usize, _url: &str, _err: &crate::error::SourceError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
