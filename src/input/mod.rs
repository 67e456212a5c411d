//! Input adapters: turn platform events into view events.

#[cfg(feature = "gui")]
pub mod gui;
