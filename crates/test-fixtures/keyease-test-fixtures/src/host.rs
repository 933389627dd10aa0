//! Script host for checking rendered presets.
//!
//! Rendered text runs in an embedded JavaScript engine as a function body,
//! so a top-level `return` yields the result. Each run gets a fresh realm
//! with the frame input bound as a global.

use anyhow::{anyhow, bail, Result};
use boa_engine::property::Attribute;
use boa_engine::{Context, JsString, Script as EngineScript, Source};

/// Rendered preset text, syntax-checked once and runnable per frame.
#[derive(Debug, Clone)]
pub struct Script {
    code: String,
}

impl Script {
    pub fn parse(text: &str) -> Result<Self> {
        let code = format!("(function () {{\n{text}\n}})();");
        let mut context = Context::default();
        EngineScript::parse(Source::from_bytes(&code), None, &mut context)
            .map_err(|err| anyhow!("script does not parse: {err}"))?;
        Ok(Self { code })
    }

    /// Run with `frame_identifier` bound to `frame`.
    pub fn run(&self, frame_identifier: &str, frame: f64) -> Result<f64> {
        let mut context = Context::default();
        context
            .register_global_property(JsString::from(frame_identifier), frame, Attribute::all())
            .map_err(|err| anyhow!("cannot bind {frame_identifier}: {err}"))?;
        let result = context
            .eval(Source::from_bytes(&self.code))
            .map_err(|err| anyhow!("script threw: {err}"))?;
        match result.as_number() {
            Some(value) => Ok(value),
            None => bail!("script returned {}, not a number", result.display()),
        }
    }
}

/// Parse and run `text` once.
pub fn run_expression(text: &str, frame_identifier: &str, frame: f64) -> Result<f64> {
    Script::parse(text)?.run(frame_identifier, frame)
}
