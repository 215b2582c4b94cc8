pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod geometry;
pub mod range;
pub mod time;
