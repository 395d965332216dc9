#![forbid(unsafe_code)]

mod bessel;

pub use bessel::j0;

/// Initializes a global tracing subscriber for the example binaries.
///
/// The filter defaults to `info`; override it with `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
