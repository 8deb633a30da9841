//! Route and navigation inspector for the TI-OS site.
//!
//! Run with: cargo run --bin site-inspect -- resolve /eec-172-final-project/about

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use ti_os_site::cli::{Cli, run};

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
