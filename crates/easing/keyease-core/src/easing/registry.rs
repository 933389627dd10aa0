use core::fmt;

use hashbrown::HashMap;

use crate::curve::{CurveFamily, CurveKind, EaseDirection};
use crate::easing::functions as f;
use crate::{PresetError, Result};

/// Default overshoot for the back family (about 10% past the target).
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// Plain `(t, b, c, d)` easing equation.
pub type EaseFn = fn(f64, f64, f64, f64) -> f64;

/// Trait for registered easing functions.
pub trait EasingFunction: Send + Sync {
    /// Curve this function implements
    fn kind(&self) -> CurveKind;

    /// Evaluate at elapsed time `t` of duration `d`, from `b` changing by `c`
    fn ease(&self, t: f64, b: f64, c: f64, d: f64) -> f64;
}

/// Parameterless classical equation.
#[derive(Debug, Clone, Copy)]
pub struct Classical {
    kind: CurveKind,
    func: EaseFn,
}

impl Classical {
    pub const fn new(kind: CurveKind, func: EaseFn) -> Self {
        Self { kind, func }
    }
}

impl EasingFunction for Classical {
    fn kind(&self) -> CurveKind {
        self.kind
    }

    #[inline]
    fn ease(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        (self.func)(t, b, c, d)
    }
}

/// Back easing with a fixed overshoot coefficient.
#[derive(Debug, Clone, Copy)]
pub struct Back {
    direction: EaseDirection,
    overshoot: f64,
}

impl Back {
    pub const fn new(direction: EaseDirection, overshoot: f64) -> Self {
        Self {
            direction,
            overshoot,
        }
    }

    #[inline]
    pub fn overshoot(&self) -> f64 {
        self.overshoot
    }
}

impl EasingFunction for Back {
    fn kind(&self) -> CurveKind {
        CurveKind::new(CurveFamily::Back, self.direction)
    }

    fn ease(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        match self.direction {
            EaseDirection::In => f::back_in(t, b, c, d, self.overshoot),
            EaseDirection::Out => f::back_out(t, b, c, d, self.overshoot),
            EaseDirection::InOut => f::back_in_out(t, b, c, d, self.overshoot),
        }
    }
}

fn classical_fn(family: CurveFamily, direction: EaseDirection) -> Option<EaseFn> {
    use CurveFamily as F;
    use EaseDirection as D;
    let func: EaseFn = match (family, direction) {
        (F::Quad, D::In) => f::quad_in,
        (F::Quad, D::Out) => f::quad_out,
        (F::Quad, D::InOut) => f::quad_in_out,
        (F::Cubic, D::In) => f::cubic_in,
        (F::Cubic, D::Out) => f::cubic_out,
        (F::Cubic, D::InOut) => f::cubic_in_out,
        (F::Quart, D::In) => f::quart_in,
        (F::Quart, D::Out) => f::quart_out,
        (F::Quart, D::InOut) => f::quart_in_out,
        (F::Quintic, D::In) => f::quintic_in,
        (F::Quintic, D::Out) => f::quintic_out,
        (F::Quintic, D::InOut) => f::quintic_in_out,
        (F::Sine, D::In) => f::sine_in,
        (F::Sine, D::Out) => f::sine_out,
        (F::Sine, D::InOut) => f::sine_in_out,
        (F::Circ, D::In) => f::circ_in,
        (F::Circ, D::Out) => f::circ_out,
        (F::Circ, D::InOut) => f::circ_in_out,
        (F::Expo, D::In) => f::expo_in,
        (F::Expo, D::Out) => f::expo_out,
        (F::Expo, D::InOut) => f::expo_in_out,
        (F::Bounce, D::In) => f::bounce_in,
        (F::Bounce, D::Out) => f::bounce_out,
        (F::Bounce, D::InOut) => f::bounce_in_out,
        (F::Back, _) => return None,
    };
    Some(func)
}

/// Immutable map from curve to easing function.
///
/// Built once with every curve registered; there is no way to add or
/// replace a function afterwards.
pub struct EasingRegistry {
    functions: HashMap<CurveKind, Box<dyn EasingFunction>>,
    overshoot: f64,
}

impl EasingRegistry {
    /// Create a registry using the default back overshoot
    #[inline]
    pub fn new() -> Self {
        Self::with_overshoot(DEFAULT_OVERSHOOT)
    }

    /// Create a registry whose back curves use overshoot `s`
    pub fn with_overshoot(overshoot: f64) -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
            overshoot,
        };
        registry.register_builtin_functions();
        registry
    }

    fn register_builtin_functions(&mut self) {
        for kind in CurveKind::all() {
            match classical_fn(kind.family(), kind.direction()) {
                Some(func) => self.register_function(Box::new(Classical::new(kind, func))),
                None => {
                    self.register_function(Box::new(Back::new(kind.direction(), self.overshoot)))
                }
            }
        }
    }

    fn register_function(&mut self, function: Box<dyn EasingFunction>) {
        self.functions.insert(function.kind(), function);
    }

    /// Get an easing function by curve
    #[inline]
    pub fn get_function(&self, kind: CurveKind) -> Option<&dyn EasingFunction> {
        self.functions.get(&kind).map(|f| f.as_ref())
    }

    /// Registered curves in canonical order
    pub fn list_functions(&self) -> Vec<CurveKind> {
        CurveKind::all()
            .filter(|kind| self.functions.contains_key(kind))
            .collect()
    }

    #[inline]
    pub fn contains(&self, kind: CurveKind) -> bool {
        self.functions.contains_key(&kind)
    }

    #[inline]
    pub fn overshoot(&self) -> f64 {
        self.overshoot
    }

    /// Evaluate `kind` at `(t, b, c, d)`
    pub fn ease(&self, kind: CurveKind, t: f64, b: f64, c: f64, d: f64) -> Result<f64> {
        let function = self
            .get_function(kind)
            .ok_or_else(|| PresetError::unknown_curve(kind.name()))?;
        Ok(function.ease(t, b, c, d))
    }
}

impl Default for EasingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EasingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EasingRegistry")
            .field("functions", &self.list_functions())
            .field("overshoot", &self.overshoot)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_curve() {
        let registry = EasingRegistry::new();
        assert_eq!(registry.list_functions().len(), 27);
        for kind in CurveKind::all() {
            assert!(registry.contains(kind));
            let function = registry.get_function(kind).unwrap();
            assert_eq!(function.kind(), kind);
        }
    }

    #[test]
    fn listing_is_stable() {
        let registry = EasingRegistry::new();
        assert_eq!(registry.list_functions(), registry.list_functions());
        assert_eq!(
            registry.list_functions()[0],
            CurveKind::new(CurveFamily::Quad, EaseDirection::In)
        );
    }

    #[test]
    fn overshoot_reaches_back_curves() {
        let soft = EasingRegistry::with_overshoot(0.5);
        let hard = EasingRegistry::new();
        let back_out = CurveKind::new(CurveFamily::Back, EaseDirection::Out);
        let a = soft.ease(back_out, 8.0, 0.0, 1.0, 10.0).unwrap();
        let b = hard.ease(back_out, 8.0, 0.0, 1.0, 10.0).unwrap();
        assert!(b > a);
        assert_eq!(hard.overshoot(), DEFAULT_OVERSHOOT);
    }

    #[test]
    fn deterministic() {
        let registry = EasingRegistry::new();
        for kind in registry.list_functions() {
            let a = registry.ease(kind, 3.3, 1.0, 4.0, 7.0).unwrap();
            let b = registry.ease(kind, 3.3, 1.0, 4.0, 7.0).unwrap();
            assert_eq!(a.to_bits(), b.to_bits(), "{kind}");
        }
    }
}
