use std::path::PathBuf;

use trimmer_core::time::MediaTime;

#[derive(Debug, Clone)]
pub enum Message {
    // Asset
    AssetLoaded(MediaTime),

    // Layout
    Layout(f32),

    // Pointer
    PointerDown(f32),
    PointerMoved(f32),
    PointerReleased,
    PointerCancelled,

    // Playback
    PlayerTick(MediaTime),

    // Export
    Export,
    ExportFinished(Result<PathBuf, String>),
}
