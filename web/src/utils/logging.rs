//! Backend for the `log` facade.
//!
//! Native builds log through `env_logger`, filtered by `NODEMAP_LOGLEVEL`.
//! In the browser, `log` records are bridged into the Dioxus tracing
//! subscriber so they reach the console.

#[cfg(not(target_arch = "wasm32"))]
pub const ENV_NODEMAP_LOGLEVEL: &str = "NODEMAP_LOGLEVEL";

/// Logger configured from the environment; defaults to `info`.
#[cfg(not(target_arch = "wasm32"))]
pub fn builder() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(ENV_NODEMAP_LOGLEVEL, "info"))
}

/// Install the logger. Safe to call more than once.
pub fn init() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = builder().try_init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        dioxus::logger::initialize_default();
        let _ = tracing_log::LogTracer::init();
    }
}
