// Public API (shared between the browser build and native tooling)
pub mod config;
pub mod domain;
pub mod shared;

pub mod app;

// Native-only inspection CLI (NOT compiled for WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
