use pixels::wgpu;

/// Runs `f` inside a validation error scope and returns what the scope caught.
pub fn validated<T>(device: &wgpu::Device, f: impl FnOnce() -> T) -> (T, Option<wgpu::Error>) {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = f();
    let error = pollster::block_on(device.pop_error_scope());

    (value, error)
}
