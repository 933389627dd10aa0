//! Classical easing equations.
//!
//! Every function takes `(t, b, c, d)`: elapsed time, start value, change in
//! value and duration, and returns `b` at `t == 0` and `b + c` at `t == d`.
//! `d` is assumed non-zero; [`crate::clamp`] guarantees that on the standard
//! path. Operation order follows the classical formulas so results agree
//! with host-side evaluation of the same text.

use core::f64::consts::PI;

// ---------------------------------------------------------------------------
// Polynomial families
// ---------------------------------------------------------------------------

#[inline]
pub fn quad_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t + b
}

#[inline]
pub fn quad_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

pub fn quad_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    let t = t - 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

#[inline]
pub fn cubic_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t + b
}

#[inline]
pub fn cubic_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

pub fn cubic_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

#[inline]
pub fn quart_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t * t + b
}

#[inline]
pub fn quart_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    -c * (t * t * t * t - 1.0) + b
}

pub fn quart_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t + b;
    }
    let t = t - 2.0;
    -c / 2.0 * (t * t * t * t - 2.0) + b
}

#[inline]
pub fn quintic_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t * t * t + b
}

#[inline]
pub fn quintic_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * t * t * t + 1.0) + b
}

pub fn quintic_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t * t * t + 2.0) + b
}

// ---------------------------------------------------------------------------
// Sine / circular / exponential
// ---------------------------------------------------------------------------

#[inline]
pub fn sine_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c * (t / d * (PI / 2.0)).cos() + c + b
}

#[inline]
pub fn sine_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d * (PI / 2.0)).sin() + b
}

#[inline]
pub fn sine_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}

#[inline]
pub fn circ_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * ((1.0 - t * t).sqrt() - 1.0) + b
}

#[inline]
pub fn circ_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

pub fn circ_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
    }
    let t = t - 2.0;
    c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
}

/// Exact at `t == 0`; the power term never reaches zero on its own.
pub fn expo_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        b
    } else {
        c * 2f64.powf(10.0 * (t / d - 1.0)) + b
    }
}

/// Exact at `t == d`.
pub fn expo_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == d {
        b + c
    } else {
        c * (-(2f64.powf(-10.0 * t / d)) + 1.0) + b
    }
}

pub fn expo_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * 2f64.powf(10.0 * (t - 1.0)) + b;
    }
    let t = t - 1.0;
    c / 2.0 * (-(2f64.powf(-10.0 * t)) + 2.0) + b
}

// ---------------------------------------------------------------------------
// Back (overshoot)
// ---------------------------------------------------------------------------

#[inline]
pub fn back_in(t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

#[inline]
pub fn back_out(t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

/// The overshoot is scaled by 1.525 so each half overshoots about as much
/// as the single-sided curves.
pub fn back_in_out(t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
    let s = s * 1.525;
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
}

// ---------------------------------------------------------------------------
// Bounce
// ---------------------------------------------------------------------------

pub fn bounce_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

/// Reflection of [`bounce_out`] in time and value.
#[inline]
pub fn bounce_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c - bounce_out(d - t, 0.0, c, d) + b
}

pub fn bounce_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t < d / 2.0 {
        bounce_in(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        bounce_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}
