use crate::core::data::complex::Complex;

/// Iterations `z = z² + c` takes to leave the radius-2 disc, or `None` if it
/// stays inside for `max_iterations` steps.
///
/// Runs the same loop as the fragment shader, in double precision, so the HUD
/// can report what the pixel under the cursor is coloured by.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> Option<u32> {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > 4.0 {
            return Some(iteration);
        }
        z = z * z + c;
    }

    None
}
