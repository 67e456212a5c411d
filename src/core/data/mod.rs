pub mod complex;
pub mod screen;
