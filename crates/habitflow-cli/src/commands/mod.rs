pub mod calendar;
pub mod config;
pub mod input;
pub mod progress;
pub mod scheduled;
pub mod summary;
