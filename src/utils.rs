use gpui::{Pixels, Point};

pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}

/// Window position relative to `origin`, as plain floats.
pub fn relative_to(position: Point<Pixels>, origin: Point<Pixels>) -> (f32, f32) {
    let delta = position - origin;
    (delta.x.as_f32(), delta.y.as_f32())
}
