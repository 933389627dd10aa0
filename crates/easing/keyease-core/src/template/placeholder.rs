//! Named placeholders and the values bound to them.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::clamp::KeyframeInterval;
use crate::template::expression::is_numeric_expression;
use crate::template::substitute::placeholder_tokens;
use crate::{PresetError, Result};

/// The four tokens a preset's setup and body may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Placeholder {
    StartValue,
    EndValue,
    StartFrame,
    EndFrame,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [
        Self::StartValue,
        Self::EndValue,
        Self::StartFrame,
        Self::EndFrame,
    ];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartValue => "START_VALUE",
            Self::EndValue => "END_VALUE",
            Self::StartFrame => "START_FRAME",
            Self::EndFrame => "END_FRAME",
        }
    }

    /// Token as written in template text.
    #[inline]
    pub fn token(&self) -> &'static str {
        match self {
            Self::StartValue => "__START_VALUE__",
            Self::EndValue => "__END_VALUE__",
            Self::StartFrame => "__START_FRAME__",
            Self::EndFrame => "__END_FRAME__",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value bound to a placeholder: a number, or numeric expression text the
/// host evaluates itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    Expression(String),
}

impl Literal {
    fn check(&self, curve: &str, placeholder: Placeholder) -> Result<()> {
        let invalid = |value: String| PresetError::InvalidLiteral {
            curve: curve.to_string(),
            placeholder: placeholder.name().to_string(),
            value,
        };
        match self {
            Literal::Number(v) if !v.is_finite() => Err(invalid(v.to_string())),
            Literal::Number(_) => Ok(()),
            Literal::Expression(text) => {
                let text = text.trim();
                if !is_numeric_expression(text) || !placeholder_tokens(text).is_empty() {
                    Err(invalid(text.to_string()))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Text emitted into a template. Negative numbers and expressions are
    /// parenthesised so they bind as one operand wherever they land.
    pub fn to_source(&self, precision: Option<u32>) -> String {
        match self {
            Literal::Number(v) => {
                let text = format_number(*v, precision);
                if text.starts_with('-') {
                    format!("({text})")
                } else {
                    text
                }
            }
            Literal::Expression(text) => format!("({})", text.trim()),
        }
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::Number(v)
    }
}

impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Literal::Number(v as f64)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::Expression(v.to_string())
    }
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Literal::Expression(v)
    }
}

/// Number a host reads back from the literal emitted for `v`.
pub fn emitted_value(v: f64, precision: Option<u32>) -> f64 {
    match precision {
        None => v,
        Some(_) => format_number(v, precision).parse().unwrap_or(v),
    }
}

fn format_number(v: f64, precision: Option<u32>) -> String {
    // -0 and anything that rounds to it print as 0
    let v = if v == 0.0 { 0.0 } else { v };
    let text = match precision {
        None => v.to_string(),
        Some(places) => {
            let fixed = format!("{:.*}", places as usize, v);
            let trimmed = if fixed.contains('.') {
                fixed.trim_end_matches('0').trim_end_matches('.')
            } else {
                fixed.as_str()
            };
            trimmed.to_string()
        }
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

/// Placeholder bindings for one render. Unbound placeholders are allowed
/// until a template actually references them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_value: Option<Literal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_value: Option<Literal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_frame: Option<Literal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_frame: Option<Literal>,
}

impl PlaceholderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind all four placeholders from an interval.
    pub fn from_interval(interval: &KeyframeInterval) -> Self {
        Self::new()
            .with(Placeholder::StartValue, interval.start_value)
            .with(Placeholder::EndValue, interval.end_value)
            .with(Placeholder::StartFrame, interval.start_frame)
            .with(Placeholder::EndFrame, interval.end_frame)
    }

    /// Builder: bind a placeholder
    pub fn with(mut self, placeholder: Placeholder, value: impl Into<Literal>) -> Self {
        self.set(placeholder, value);
        self
    }

    pub fn set(&mut self, placeholder: Placeholder, value: impl Into<Literal>) {
        *self.slot_mut(placeholder) = Some(value.into());
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&Literal> {
        match placeholder {
            Placeholder::StartValue => self.start_value.as_ref(),
            Placeholder::EndValue => self.end_value.as_ref(),
            Placeholder::StartFrame => self.start_frame.as_ref(),
            Placeholder::EndFrame => self.end_frame.as_ref(),
        }
    }

    fn slot_mut(&mut self, placeholder: Placeholder) -> &mut Option<Literal> {
        match placeholder {
            Placeholder::StartValue => &mut self.start_value,
            Placeholder::EndValue => &mut self.end_value,
            Placeholder::StartFrame => &mut self.start_frame,
            Placeholder::EndFrame => &mut self.end_frame,
        }
    }

    /// Check every bound value can be emitted.
    pub fn validate(&self, curve: &str) -> Result<()> {
        for placeholder in Placeholder::ALL {
            if let Some(literal) = self.get(placeholder) {
                literal.check(curve, placeholder)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_wrap_names() {
        for p in Placeholder::ALL {
            assert_eq!(p.token(), format!("__{}__", p.name()));
            assert_eq!(Placeholder::from_name(p.name()), Some(p));
        }
        assert_eq!(Placeholder::from_name("start_value"), None);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(Literal::from(100.0).to_source(None), "100");
        assert_eq!(Literal::from(0.5).to_source(None), "0.5");
        assert_eq!(Literal::from(-5.0).to_source(None), "(-5)");
        assert_eq!(Literal::from(-0.0).to_source(None), "0");
        assert_eq!(Literal::from(1.0 / 3.0).to_source(Some(3)), "0.333");
        assert_eq!(Literal::from(2.5).to_source(Some(3)), "2.5");
        assert_eq!(Literal::from(20.0).to_source(Some(2)), "20");
        assert_eq!(Literal::from(-0.0001).to_source(Some(2)), "0");
    }

    #[test]
    fn emitted_value_follows_precision() {
        assert_eq!(emitted_value(1.0 / 3.0, None), 1.0 / 3.0);
        assert_eq!(emitted_value(1.0 / 3.0, Some(2)), 0.33);
        assert_eq!(emitted_value(0.4, Some(0)), 0.0);
        assert_eq!(emitted_value(-0.0001, Some(2)), 0.0);
    }

    #[test]
    fn expressions_are_parenthesised() {
        assert_eq!(Literal::from(" 12 * 2 ").to_source(None), "(12 * 2)");
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let set = PlaceholderSet::new().with(Placeholder::EndValue, f64::NAN);
        let err = set.validate("sine-in").unwrap_err();
        assert_eq!(
            err,
            PresetError::InvalidLiteral {
                curve: "sine-in".to_string(),
                placeholder: "END_VALUE".to_string(),
                value: "NaN".to_string(),
            }
        );
        let set = PlaceholderSet::new().with(Placeholder::StartFrame, f64::INFINITY);
        assert!(set.validate("sine-in").is_err());
    }

    #[test]
    fn rejects_malformed_expressions() {
        for bad in [
            "",
            "  ",
            "1; x = 2",
            "(1 + 2",
            "1)",
            "__END_VALUE__ + 1",
            "{}",
            "1 /* x */",
            "x = 2",
            "x += 2",
            "1, 2",
            "x = 'oops', y",
            "'1'",
            "\"1\"",
            "1 ? 2 : 3",
            "1 == 1",
            "NaN",
            "Infinity * 2",
            "1e999",
            "1--2",
            "x++",
            "2 ** 3",
            "1\n+ 2",
        ] {
            let set = PlaceholderSet::new().with(Placeholder::StartValue, bad);
            assert!(set.validate("quintic-in").is_err(), "{bad:?}");
        }
        for good in ["Math.PI * (2 + 1)", "Math.pow(2, 3) - .5", "-(1e3 % 7)", "Math.max()"] {
            let ok = PlaceholderSet::new().with(Placeholder::StartValue, good);
            assert!(ok.validate("quintic-in").is_ok(), "{good:?}");
        }
    }

    #[test]
    fn from_interval_binds_all() {
        let set = PlaceholderSet::from_interval(&KeyframeInterval::new(0.0, 100.0, 0.0, 20.0));
        for p in Placeholder::ALL {
            assert!(set.get(p).is_some());
        }
        assert_eq!(set.get(Placeholder::EndValue), Some(&Literal::Number(100.0)));
    }
}
