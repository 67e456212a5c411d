//! Input/view-state controller.
//!
//! Translates windowing-free [`ViewEvent`]s into changes of the view state and
//! produces a [`FrameRequest`] snapshot for the renderer.

mod controller;
pub mod events;
pub mod frame;

pub use controller::ViewController;
pub use events::ViewEvent;
pub use frame::FrameRequest;
