//! Links into the public documentation and the trial signup page.
//!
//! The docs version is fixed at build time through `NODEMAP_DOCS_VERSION`;
//! the browser has no process environment to read it from later.

use once_cell::sync::Lazy;

const DOCS_HOST: &str = "https://www.cockroachlabs.com/docs";
const STABLE: &str = "stable";

pub const START_TRIAL: &str = "https://www.cockroachlabs.com/pricing/start-trial/";

pub static ENTERPRISE_LICENSING: Lazy<String> =
    Lazy::new(|| docs_url("enterprise-licensing.html"));

pub static ENABLE_NODE_MAP: Lazy<String> = Lazy::new(|| docs_url("enable-node-map.html"));

/// Docs version the links point at.
pub fn docs_version() -> &'static str {
    resolve_version(option_env!("NODEMAP_DOCS_VERSION"))
}

fn resolve_version(configured: Option<&'static str>) -> &'static str {
    match configured.map(str::trim) {
        Some(version) if !version.is_empty() => version,
        _ => STABLE,
    }
}

/// Build the URL of a docs page for the configured version.
pub fn docs_url(page: &str) -> String {
    format!("{DOCS_HOST}/{}/{page}", docs_version())
}
