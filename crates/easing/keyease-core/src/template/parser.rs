//! Region splitting.

use serde::{Deserialize, Serialize};

use crate::{PresetError, Result};

/// What a region of template text is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionRole {
    /// Text before the first marker; must be blank.
    Preamble,
    /// Curve math, emitted verbatim.
    Helper,
    /// Captures the host's current frame.
    Setup,
    /// Placeholder-bearing evaluation that produces the value.
    Body,
}

/// One marker-delimited slice of a template, marker removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub role: RegionRole,
    pub text: String,
}

/// Region layout a template declares: preamble, `helper_regions` helpers,
/// one setup and one body, each after its own marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateShape {
    pub helper_regions: usize,
}

impl TemplateShape {
    pub const STANDARD: TemplateShape = TemplateShape { helper_regions: 1 };

    #[inline]
    pub fn expected_markers(&self) -> usize {
        self.helper_regions + 2
    }

    /// Roles in source order, preamble first.
    pub fn roles(&self) -> Vec<RegionRole> {
        let mut roles = Vec::with_capacity(self.expected_markers() + 1);
        roles.push(RegionRole::Preamble);
        roles.extend(std::iter::repeat(RegionRole::Helper).take(self.helper_regions));
        roles.push(RegionRole::Setup);
        roles.push(RegionRole::Body);
        roles
    }
}

impl Default for TemplateShape {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Split on every occurrence of `marker`; `k` markers give `k + 1` slices.
pub fn split_regions<'a>(text: &'a str, marker: &str) -> Vec<&'a str> {
    if marker.is_empty() {
        return vec![text];
    }
    text.split(marker).collect()
}

/// Split `text` and assign roles from `shape`.
pub fn parse_regions(
    curve: &str,
    text: &str,
    marker: &str,
    shape: TemplateShape,
) -> Result<Vec<Region>> {
    let malformed = |reason: &str, found: usize| PresetError::TemplateMalformed {
        curve: curve.to_string(),
        reason: reason.to_string(),
        expected: shape.expected_markers(),
        found,
    };

    if marker.is_empty() {
        return Err(malformed("empty region marker", 0));
    }

    let slices = split_regions(text, marker);
    let found = slices.len() - 1;
    if found != shape.expected_markers() {
        return Err(malformed("marker count does not match template shape", found));
    }

    let regions: Vec<Region> = shape
        .roles()
        .into_iter()
        .zip(slices)
        .map(|(role, slice)| Region {
            role,
            text: slice.to_string(),
        })
        .collect();

    for region in &regions {
        match region.role {
            RegionRole::Preamble if !region.text.trim().is_empty() => {
                return Err(malformed("text before the first marker", found));
            }
            RegionRole::Setup | RegionRole::Body if region.text.trim().is_empty() => {
                return Err(malformed("empty setup or body region", found));
            }
            _ => {}
        }
    }

    Ok(regions)
}
