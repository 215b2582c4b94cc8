use trimmer_core::time::{MediaTime, TimeRange};

/// The playback engine the trimmer session drives.
pub trait MediaPlayer {
    fn is_playing(&self) -> bool;

    fn play(&mut self);

    fn pause(&mut self);

    /// Seek to a time relative to the start of the current item.
    fn seek(&mut self, to: MediaTime);

    /// Replace the current item with the asset trimmed to `range`.
    /// The full asset range means the untrimmed asset.
    fn replace_item(&mut self, range: TimeRange);
}
