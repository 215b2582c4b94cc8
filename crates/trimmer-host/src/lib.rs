pub mod app;
pub mod exporter;
pub mod message;
pub mod player;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
