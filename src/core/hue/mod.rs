pub mod kinds;
pub mod palette;

pub use kinds::HueKind;
pub use palette::{HuePalette, HuePalettes};
