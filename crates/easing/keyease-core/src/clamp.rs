//! Frame clamp & remap.
//!
//! Turns an absolute host frame and a keyframe interval into the `(t, d)`
//! pair an easing function expects. The steps run in a fixed order and
//! later steps read the values earlier steps produced:
//!
//! 1. `duration = end - start`
//! 2. clamp the frame to `start` if below, else to `end` if above
//! 3. rebase to zero if the frame lies within `[start, end]`
//! 4. a non-positive duration becomes `1`
//! 5. a negative local time becomes `0`
//!
//! For an inverted interval (`end < start`) step 3 never fires, so the
//! clamped absolute frame is passed through with duration `1`.

use serde::{Deserialize, Serialize};

/// The two authored keyframes a preset interpolates between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyframeInterval {
    pub start_value: f64,
    pub end_value: f64,
    pub start_frame: f64,
    pub end_frame: f64,
}

impl KeyframeInterval {
    pub fn new(start_value: f64, end_value: f64, start_frame: f64, end_frame: f64) -> Self {
        Self {
            start_value,
            end_value,
            start_frame,
            end_frame,
        }
    }

    /// Raw span, may be zero or negative.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_frame - self.start_frame
    }

    /// Value passed as `c` under `convention`.
    #[inline]
    pub fn change(&self, convention: ChangeConvention) -> f64 {
        match convention {
            ChangeConvention::Difference => self.end_value - self.start_value,
            ChangeConvention::EndValue => self.end_value,
        }
    }

    /// Value a curve reaches at the end frame under `convention`.
    #[inline]
    pub fn target(&self, convention: ChangeConvention) -> f64 {
        self.start_value + self.change(convention)
    }

    /// Remap a captured frame and bind the change value; the result feeds
    /// an easing function directly.
    pub fn ease_inputs(&self, frame: CapturedFrame, convention: ChangeConvention) -> EaseInputs {
        let local = remap_frame(frame.frame(), self.start_frame, self.end_frame);
        EaseInputs {
            t: local.time,
            b: self.start_value,
            c: self.change(convention),
            d: local.duration,
        }
    }
}

/// How a preset derives the easing function's `c` argument.
///
/// Presets disagree here and both behaviours are kept: changing one to the
/// other would move every value already authored with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeConvention {
    /// `c = end - start`; the curve ends on `end`.
    #[default]
    Difference,
    /// `c = end`; the curve ends on `start + end`.
    EndValue,
}

/// Snapshot of the host's frame input, taken before any computation reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapturedFrame(f64);

impl CapturedFrame {
    #[inline]
    pub fn frame(&self) -> f64 {
        self.0
    }
}

/// Capture the current frame. Evaluation reads only the returned snapshot.
#[inline]
pub fn capture_frame(current: f64) -> CapturedFrame {
    CapturedFrame(current)
}

/// Zero-based time and positive duration for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTime {
    pub time: f64,
    pub duration: f64,
}

/// Arguments for a single easing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaseInputs {
    pub t: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Map `current` into `[0, duration]` local time for the given keyframes.
pub fn remap_frame(current: f64, start_frame: f64, end_frame: f64) -> LocalTime {
    let mut duration = end_frame - start_frame;
    let mut frame = current;

    if frame < start_frame {
        log::trace!("frame {frame} clamped to start {start_frame}");
        frame = start_frame;
    } else if frame > end_frame {
        log::trace!("frame {frame} clamped to end {end_frame}");
        frame = end_frame;
    }

    if frame >= start_frame && frame <= end_frame {
        frame -= start_frame;
    }

    if duration <= 0.0 {
        log::trace!("degenerate duration {duration}, using 1");
        duration = 1.0;
    }

    if frame < 0.0 {
        frame = 0.0;
    }

    LocalTime {
        time: frame,
        duration,
    }
}
