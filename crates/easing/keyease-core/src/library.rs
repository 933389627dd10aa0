//! Preset library: curve registry, shipped templates and the call surface
//! hosts use (`list_curve_kinds`, `get_template`, `render`, `evaluate`).

use hashbrown::HashMap;
use once_cell::sync::Lazy;

use crate::clamp::{capture_frame, CapturedFrame, ChangeConvention, KeyframeInterval};
use crate::config::{PresetConfig, DEFAULT_FRAME_IDENTIFIER, DEFAULT_REGION_MARKER};
use crate::curve::{CurveKind, IntoCurveKind};
use crate::easing::EasingRegistry;
use crate::preset::{PresetSource, PresetTemplate, RenderedPreset, BUILTIN_PRESETS};
use crate::template::{emitted_value, Placeholder, PlaceholderSet, SubstituteOptions};
use crate::{PresetError, Result};

static GLOBAL: Lazy<PresetLibrary> = Lazy::new(|| PresetLibrary::new(PresetConfig::default()));

/// Read-only set of curves and presets. Construct once and share; every
/// method takes `&self`.
#[derive(Debug)]
pub struct PresetLibrary {
    config: PresetConfig,
    easing: EasingRegistry,
    presets: HashMap<CurveKind, PresetSource>,
}

impl PresetLibrary {
    /// Build a library with the shipped presets.
    pub fn new(config: PresetConfig) -> Self {
        Self::with_presets(config, BUILTIN_PRESETS.iter().copied())
    }

    /// Build a library with a custom preset set. Later entries for the same
    /// curve replace earlier ones.
    pub fn with_presets(config: PresetConfig, presets: impl IntoIterator<Item = PresetSource>) -> Self {
        let easing = EasingRegistry::with_overshoot(config.back_overshoot);
        let presets = presets.into_iter().map(|p| (p.curve, p)).collect();
        Self {
            config,
            easing,
            presets,
        }
    }

    /// Library built from the default config on first use.
    pub fn global() -> &'static PresetLibrary {
        &GLOBAL
    }

    #[inline]
    pub fn config(&self) -> &PresetConfig {
        &self.config
    }

    #[inline]
    pub fn easing(&self) -> &EasingRegistry {
        &self.easing
    }

    /// Every curve `evaluate` accepts, in canonical order.
    pub fn list_curve_kinds(&self) -> Vec<CurveKind> {
        self.easing.list_functions()
    }

    /// Curves with a preset template, in canonical order.
    pub fn preset_kinds(&self) -> Vec<CurveKind> {
        CurveKind::all()
            .filter(|kind| self.presets.contains_key(kind))
            .collect()
    }

    /// Change convention `evaluate` applies for `curve`: the preset's own,
    /// or `Difference` for curves without a template.
    pub fn convention(&self, curve: CurveKind) -> ChangeConvention {
        self.presets
            .get(&curve)
            .map(|p| p.convention)
            .unwrap_or_default()
    }

    fn source(&self, curve: CurveKind) -> Result<&PresetSource> {
        self.presets.get(&curve).ok_or_else(|| {
            PresetError::unknown_curve(format!("{curve} (no preset template)"))
        })
    }

    /// Marker `source` is split on. Shipped presets are always written
    /// with the default marker; the configured one applies to custom sources.
    fn marker_for(&self, source: &PresetSource) -> &str {
        if BUILTIN_PRESETS.contains(source) {
            DEFAULT_REGION_MARKER
        } else {
            &self.config.region_marker
        }
    }

    /// Parsed template for `curve`.
    pub fn get_template(&self, curve: impl IntoCurveKind) -> Result<PresetTemplate> {
        let curve = curve.into_curve_kind()?;
        let source = self.source(curve)?;
        PresetTemplate::parse(source, self.marker_for(source)).map_err(|err| {
            log::warn!("preset {curve} failed to parse: {err}");
            err
        })
    }

    fn substitute_options(&self) -> SubstituteOptions<'_> {
        SubstituteOptions {
            precision: self.config.literal_precision,
            frame_source: DEFAULT_FRAME_IDENTIFIER,
            frame_target: &self.config.frame_identifier,
        }
    }

    /// Render with explicit bindings, keeping regions apart.
    pub fn render_parts(
        &self,
        curve: impl IntoCurveKind,
        placeholders: &PlaceholderSet,
    ) -> Result<RenderedPreset> {
        let template = self.get_template(curve)?;
        template.render(placeholders, &self.substitute_options())
    }

    /// Render `curve` for one keyframe interval into a single host expression.
    pub fn render(
        &self,
        curve: impl IntoCurveKind,
        start_value: f64,
        end_value: f64,
        start_frame: f64,
        end_frame: f64,
    ) -> Result<String> {
        let curve = curve.into_curve_kind()?;
        let interval = KeyframeInterval::new(start_value, end_value, start_frame, end_frame);
        log::debug!(
            "render {curve}: values {start_value} -> {end_value}, frames {start_frame} -> {end_frame}"
        );
        let rendered = self.render_parts(curve, &PlaceholderSet::from_interval(&interval))?;
        Ok(rendered.expression())
    }

    /// Clamp/remap `current_frame` into the interval and evaluate `curve`
    /// directly, without generating text.
    pub fn evaluate(
        &self,
        curve: impl IntoCurveKind,
        current_frame: f64,
        start_value: f64,
        end_value: f64,
        start_frame: f64,
        end_frame: f64,
    ) -> Result<f64> {
        let captured = capture_frame(current_frame);
        let interval = KeyframeInterval::new(start_value, end_value, start_frame, end_frame);
        self.evaluate_captured(curve, captured, &interval)
    }

    /// Second phase of evaluation: compute from an already captured frame.
    pub fn evaluate_captured(
        &self,
        curve: impl IntoCurveKind,
        frame: CapturedFrame,
        interval: &KeyframeInterval,
    ) -> Result<f64> {
        let curve = curve.into_curve_kind()?;
        // Same checks render applies to the literals it would emit.
        PlaceholderSet::from_interval(interval).validate(&curve.name())?;

        let function = self
            .easing
            .get_function(curve)
            .ok_or_else(|| PresetError::unknown_curve(curve.name()))?;
        // Evaluate the interval the host would read back from rendered text.
        let precision = self.config.literal_precision;
        let interval = KeyframeInterval::new(
            emitted_value(interval.start_value, precision),
            emitted_value(interval.end_value, precision),
            emitted_value(interval.start_frame, precision),
            emitted_value(interval.end_frame, precision),
        );
        let inputs = interval.ease_inputs(frame, self.convention(curve));
        Ok(function.ease(inputs.t, inputs.b, inputs.c, inputs.d))
    }
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self::new(PresetConfig::default())
    }
}

/// Every curve `evaluate` accepts.
pub fn list_curve_kinds() -> Vec<CurveKind> {
    PresetLibrary::global().list_curve_kinds()
}

/// Parsed preset template for `curve`.
pub fn get_template(curve: impl IntoCurveKind) -> Result<PresetTemplate> {
    PresetLibrary::global().get_template(curve)
}

/// Render `curve` into a host expression for one keyframe interval.
pub fn render(
    curve: impl IntoCurveKind,
    start_value: f64,
    end_value: f64,
    start_frame: f64,
    end_frame: f64,
) -> Result<String> {
    PresetLibrary::global().render(curve, start_value, end_value, start_frame, end_frame)
}

/// Evaluate `curve` at `current_frame` for one keyframe interval.
pub fn evaluate(
    curve: impl IntoCurveKind,
    current_frame: f64,
    start_value: f64,
    end_value: f64,
    start_frame: f64,
    end_frame: f64,
) -> Result<f64> {
    PresetLibrary::global().evaluate(
        curve,
        current_frame,
        start_value,
        end_value,
        start_frame,
        end_frame,
    )
}

/// Placeholder names a template may use, for host UIs.
pub fn placeholder_names() -> [&'static str; 4] {
    Placeholder::ALL.map(|p| p.name())
}
