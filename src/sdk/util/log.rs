use env_logger::{Builder, Env};
use std::env;

// HTTP client internals stay quiet unless RUST_LOG asks for them.
const QUIET_DEPS: &str = "reqwest=warn,hyper=warn,hyper_util=warn";

pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let level = env::var("RUST_LOG").unwrap_or_else(|_| format!("{},{}", default, QUIET_DEPS));
    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
