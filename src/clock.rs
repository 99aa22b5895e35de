use chrono::Timelike;

/// Hand rotations in degrees, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        let (h, m, s) = (f64::from(hour % 12), f64::from(minute), f64::from(second));
        Self {
            hour: (h + m / 60.0) * 30.0,
            minute: (m + s / 60.0) * 6.0,
            second: s * 6.0,
        }
    }

    pub fn at<T: Timelike>(time: &T) -> Self {
        Self::new(time.hour(), time.minute(), time.second())
    }
}

/// Tip of a hand of length `len` at `degrees`, with y pointing up.
pub fn hand_tip(degrees: f64, len: f64) -> (f64, f64) {
    let rad = degrees.to_radians();
    (len * rad.sin(), len * rad.cos())
}
