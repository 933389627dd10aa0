//! Preset templates: the shipped catalogue and per-template rendering.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::clamp::ChangeConvention;
use crate::curve::CurveKind;
use crate::template::{
    parse_regions, substitute, PlaceholderSet, Region, RegionRole, SubstituteOptions,
    TemplateShape,
};
use crate::Result;

/// Raw preset as shipped: template text plus the facts that are not
/// visible in the text itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetSource {
    pub curve: CurveKind,
    pub convention: ChangeConvention,
    pub shape: TemplateShape,
    pub text: &'static str,
}

const fn preset(curve: CurveKind, convention: ChangeConvention, text: &'static str) -> PresetSource {
    PresetSource {
        curve,
        convention,
        shape: TemplateShape::STANDARD,
        text,
    }
}

/// Presets offered to the host, in menu order.
pub const BUILTIN_PRESETS: [PresetSource; 7] = [
    preset(
        CurveKind::QUINTIC_IN_OUT,
        ChangeConvention::Difference,
        include_str!("../presets/quintic-in-out.js"),
    ),
    preset(
        CurveKind::SINE_IN_OUT,
        ChangeConvention::Difference,
        include_str!("../presets/sine-in-out.js"),
    ),
    preset(
        CurveKind::QUINTIC_IN,
        ChangeConvention::EndValue,
        include_str!("../presets/quintic-in.js"),
    ),
    preset(
        CurveKind::SINE_IN,
        ChangeConvention::Difference,
        include_str!("../presets/sine-in.js"),
    ),
    preset(
        CurveKind::BOUNCE_OUT,
        ChangeConvention::Difference,
        include_str!("../presets/bounce-out.js"),
    ),
    preset(
        CurveKind::CIRC_OUT,
        ChangeConvention::EndValue,
        include_str!("../presets/circ-out.js"),
    ),
    preset(
        CurveKind::EXPO_OUT,
        ChangeConvention::EndValue,
        include_str!("../presets/expo-out.js"),
    ),
];

/// A parsed preset: ordered regions with roles assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetTemplate {
    pub curve: CurveKind,
    pub convention: ChangeConvention,
    pub shape: TemplateShape,
    pub regions: Vec<Region>,
}

impl PresetTemplate {
    /// Parse a preset source with the given region marker.
    pub fn parse(source: &PresetSource, marker: &str) -> Result<Self> {
        let regions = parse_regions(&source.curve.name(), source.text, marker, source.shape)?;
        Ok(Self {
            curve: source.curve,
            convention: source.convention,
            shape: source.shape,
            regions,
        })
    }

    /// Regions with the given role, in source order.
    pub fn regions_with(&self, role: RegionRole) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(move |r| r.role == role)
    }

    /// Bind placeholders in setup and body; helpers are copied untouched.
    pub fn render(
        &self,
        set: &PlaceholderSet,
        options: &SubstituteOptions<'_>,
    ) -> Result<RenderedPreset> {
        let curve = self.curve.name();
        set.validate(&curve)?;

        let mut rendered = RenderedPreset {
            curve: self.curve,
            helpers: String::new(),
            setup: String::new(),
            body: String::new(),
        };
        for region in &self.regions {
            match region.role {
                RegionRole::Preamble => {}
                RegionRole::Helper => rendered.helpers.push_str(&region.text),
                RegionRole::Setup => rendered
                    .setup
                    .push_str(&substitute(&curve, &region.text, set, options)?),
                RegionRole::Body => rendered
                    .body
                    .push_str(&substitute(&curve, &region.text, set, options)?),
            }
        }
        Ok(rendered)
    }
}

/// Host-ready text for one preset. Hosts that keep definitions, frame
/// bindings and script apart read the fields; the rest use [`expression`].
///
/// [`expression`]: RenderedPreset::expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPreset {
    pub curve: CurveKind,
    pub helpers: String,
    pub setup: String,
    pub body: String,
}

impl RenderedPreset {
    /// All regions joined in source order, markers stripped.
    pub fn expression(&self) -> String {
        let mut out = String::with_capacity(self.helpers.len() + self.setup.len() + self.body.len());
        out.push_str(&self.helpers);
        out.push_str(&self.setup);
        out.push_str(&self.body);
        out
    }
}

impl fmt::Display for RenderedPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.helpers)?;
        f.write_str(&self.setup)?;
        f.write_str(&self.body)
    }
}
