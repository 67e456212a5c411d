use crate::core::data::screen::{ScreenPoint, ScreenSize};
use crate::core::hue::HueKind;

/// Windowing-free input, already converted to logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    Resized(ScreenSize),
    CursorMoved(ScreenPoint),
    /// Left mouse button pressed (`true`) or released (`false`).
    PanButton(bool),
    /// Wheel movement in lines; positive zooms in.
    Scroll(f64),
    IterationsUp,
    IterationsDown,
    SetIterations(u32),
    SelectHue(HueKind),
    ResetView,
}
