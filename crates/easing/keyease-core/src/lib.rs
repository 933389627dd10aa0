//! KeyEase Core (host-agnostic)
//!
//! Parameterized easing presets for keyframe animation hosts. A preset is a
//! template of host expression text with four placeholders (start/end value,
//! start/end frame); rendering binds them to literals for one interval.
//! The same curves can be evaluated natively through [`evaluate`], which
//! applies the frame clamp/remap rules the rendered text applies in the host.

pub mod clamp;
pub mod config;
pub mod curve;
pub mod easing;
pub mod error;
pub mod library;
pub mod preset;
pub mod template;

// Re-exports for consumers (adapters)
pub use clamp::{
    capture_frame, remap_frame, CapturedFrame, ChangeConvention, EaseInputs, KeyframeInterval,
    LocalTime,
};
pub use config::{PresetConfig, DEFAULT_FRAME_IDENTIFIER, DEFAULT_REGION_MARKER};
pub use curve::{CurveFamily, CurveKind, EaseDirection, IntoCurveKind};
pub use easing::{EasingFunction, EasingRegistry, DEFAULT_OVERSHOOT};
pub use error::PresetError;
pub use library::{
    evaluate, get_template, list_curve_kinds, placeholder_names, render, PresetLibrary,
};
pub use preset::{PresetSource, PresetTemplate, RenderedPreset, BUILTIN_PRESETS};
pub use template::{Literal, Placeholder, PlaceholderSet, Region, RegionRole, TemplateShape};

pub type Result<T> = core::result::Result<T, PresetError>;
