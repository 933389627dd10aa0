use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub mod host;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    samples: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let path = fixtures_root().join(rel);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

/// Golden values recorded by running each rendered preset in a JS host.
pub mod samples {
    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    pub struct SampleFile {
        pub curve: String,
        pub intervals: Vec<IntervalSamples>,
    }

    #[derive(Debug, Clone, Copy, Deserialize)]
    pub struct Interval {
        pub start_value: f64,
        pub end_value: f64,
        pub start_frame: f64,
        pub end_frame: f64,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct IntervalSamples {
        pub interval: Interval,
        pub samples: Vec<Sample>,
    }

    #[derive(Debug, Clone, Copy, Deserialize)]
    pub struct Sample {
        pub frame: f64,
        pub value: f64,
    }

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.samples.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn load(name: &str) -> Result<SampleFile> {
        let rel = MANIFEST
            .samples
            .get(name)
            .ok_or_else(|| anyhow!("unknown sample fixture '{name}'"))?;
        super::load_json(rel)
    }
}
