//! Curve identifiers: easing family × direction.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{PresetError, Result};

/// Easing families in the classical set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveFamily {
    Quad,
    Cubic,
    Quart,
    Quintic,
    Sine,
    Circ,
    Expo,
    Back,
    Bounce,
}

impl CurveFamily {
    pub const ALL: [CurveFamily; 9] = [
        Self::Quad,
        Self::Cubic,
        Self::Quart,
        Self::Quintic,
        Self::Sine,
        Self::Circ,
        Self::Expo,
        Self::Back,
        Self::Bounce,
    ];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quad => "quad",
            Self::Cubic => "cubic",
            Self::Quart => "quart",
            Self::Quintic => "quintic",
            Self::Sine => "sine",
            Self::Circ => "circ",
            Self::Expo => "expo",
            Self::Back => "back",
            Self::Bounce => "bounce",
        }
    }

    /// Suffix used by host function names (`easeInOutQuint`).
    fn host_suffix(&self) -> &'static str {
        match self {
            Self::Quad => "Quad",
            Self::Cubic => "Cubic",
            Self::Quart => "Quart",
            Self::Quintic => "Quint",
            Self::Sine => "Sine",
            Self::Circ => "Circ",
            Self::Expo => "Expo",
            Self::Back => "Back",
            Self::Bounce => "Bounce",
        }
    }

    fn from_alias(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quad" | "quadratic" => Some(Self::Quad),
            "cubic" => Some(Self::Cubic),
            "quart" | "quartic" => Some(Self::Quart),
            "quint" | "quintic" => Some(Self::Quintic),
            "sine" | "sinusoidal" => Some(Self::Sine),
            "circ" | "circular" => Some(Self::Circ),
            "expo" | "exponential" => Some(Self::Expo),
            "back" => Some(Self::Back),
            "bounce" => Some(Self::Bounce),
            _ => None,
        }
    }
}

/// Which end of the span the curve accelerates or decelerates at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EaseDirection {
    In,
    Out,
    InOut,
}

impl EaseDirection {
    pub const ALL: [EaseDirection; 3] = [Self::In, Self::Out, Self::InOut];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "in-out",
        }
    }

    fn host_infix(&self) -> &'static str {
        match self {
            Self::In => "In",
            Self::Out => "Out",
            Self::InOut => "InOut",
        }
    }
}

/// One registered curve, e.g. `quintic-in-out`.
///
/// Serializes as its canonical name. Parsing also accepts family aliases
/// (`quint-in`, `circular-out`) and host function names (`easeOutBounce`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurveKind {
    family: CurveFamily,
    direction: EaseDirection,
}

impl CurveKind {
    pub const QUINTIC_IN_OUT: Self = Self::new(CurveFamily::Quintic, EaseDirection::InOut);
    pub const QUINTIC_IN: Self = Self::new(CurveFamily::Quintic, EaseDirection::In);
    pub const SINE_IN_OUT: Self = Self::new(CurveFamily::Sine, EaseDirection::InOut);
    pub const SINE_IN: Self = Self::new(CurveFamily::Sine, EaseDirection::In);
    pub const BOUNCE_OUT: Self = Self::new(CurveFamily::Bounce, EaseDirection::Out);
    pub const CIRC_OUT: Self = Self::new(CurveFamily::Circ, EaseDirection::Out);
    pub const EXPO_OUT: Self = Self::new(CurveFamily::Expo, EaseDirection::Out);

    pub const fn new(family: CurveFamily, direction: EaseDirection) -> Self {
        Self { family, direction }
    }

    #[inline]
    pub fn family(&self) -> CurveFamily {
        self.family
    }

    #[inline]
    pub fn direction(&self) -> EaseDirection {
        self.direction
    }

    /// Every curve, family-major.
    pub fn all() -> impl Iterator<Item = CurveKind> + Clone {
        CurveFamily::ALL.into_iter().flat_map(|family| {
            EaseDirection::ALL
                .into_iter()
                .map(move |direction| CurveKind::new(family, direction))
        })
    }

    /// Canonical `<family>-<direction>` name.
    pub fn name(&self) -> String {
        format!("{}-{}", self.family.name(), self.direction.name())
    }

    /// Name of the function a preset defines for this curve in host text.
    pub fn host_name(&self) -> String {
        format!(
            "ease{}{}",
            self.direction.host_infix(),
            self.family.host_suffix()
        )
    }

    fn parse_host_name(s: &str) -> Option<Self> {
        let rest = s.strip_prefix("ease")?;
        // InOut before In: "In" is a prefix of "InOut".
        for direction in [EaseDirection::InOut, EaseDirection::In, EaseDirection::Out] {
            if let Some(family) = rest.strip_prefix(direction.host_infix()) {
                return CurveFamily::from_alias(family).map(|f| Self::new(f, direction));
            }
        }
        None
    }

    fn parse_dashed(s: &str) -> Option<Self> {
        let lowered = s.to_ascii_lowercase().replace('_', "-");
        for direction in [EaseDirection::InOut, EaseDirection::In, EaseDirection::Out] {
            let suffix = format!("-{}", direction.name());
            if let Some(family) = lowered.strip_suffix(suffix.as_str()) {
                return CurveFamily::from_alias(family).map(|f| Self::new(f, direction));
            }
        }
        None
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.family.name(), self.direction.name())
    }
}

impl FromStr for CurveKind {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::parse_host_name(trimmed)
            .or_else(|| Self::parse_dashed(trimmed))
            .ok_or_else(|| PresetError::unknown_curve(trimmed))
    }
}

impl TryFrom<String> for CurveKind {
    type Error = PresetError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CurveKind> for String {
    #[inline]
    fn from(kind: CurveKind) -> Self {
        kind.name()
    }
}

/// Anything a caller can name a curve with.
pub trait IntoCurveKind {
    fn into_curve_kind(self) -> Result<CurveKind>;
}

impl IntoCurveKind for CurveKind {
    #[inline]
    fn into_curve_kind(self) -> Result<CurveKind> {
        Ok(self)
    }
}

impl IntoCurveKind for &str {
    fn into_curve_kind(self) -> Result<CurveKind> {
        self.parse()
    }
}

impl IntoCurveKind for &String {
    fn into_curve_kind(self) -> Result<CurveKind> {
        self.parse()
    }
}

impl IntoCurveKind for String {
    fn into_curve_kind(self) -> Result<CurveKind> {
        self.parse()
    }
}
