use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, Result};

/// One `key=value` component of a node locality, e.g. `region=us-east`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalityTier {
    pub key: String,
    pub value: String,
}

impl LocalityTier {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for LocalityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl FromStr for LocalityTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self::new(key, value)),
            _ => Err(AppError::InvalidLocality(s.to_string())),
        }
    }
}

/// Props of the node canvas view.
///
/// Every view that can stand in for the canvas takes exactly this type so the
/// caller can swap one for the other without touching the call site.
#[derive(Props, Debug, Clone, PartialEq, Default)]
pub struct NodeCanvasContainerProps {
    /// Locality the map is zoomed into, outermost tier first.
    #[props(default)]
    pub tiers: Vec<LocalityTier>,
}

/// Parse the path segments after `/overview/map` into locality tiers.
pub fn parse_locality_route<S: AsRef<str>>(segments: &[S]) -> Result<Vec<LocalityTier>> {
    segments
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|segment| !segment.is_empty())
        .map(str::parse)
        .collect()
}

/// Inverse of [`parse_locality_route`].
pub fn locality_route(tiers: &[LocalityTier]) -> String {
    let segments: Vec<String> = tiers.iter().map(ToString::to_string).collect();
    format!("/{}", segments.join("/"))
}
