use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const BASE_PATH_ENV: &str = "TI_OS_BASE_PATH";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");
    println!("cargo:rerun-if-changed=Dioxus.toml");
    println!("cargo:rerun-if-env-changed={BASE_PATH_ENV}");

    export_base_path();
    bundle_css();
}

/// Forward `[web.app] base_path` from Dioxus.toml so the crate and the
/// Dioxus CLI agree on the deployment prefix. An explicit env var wins.
fn export_base_path() {
    if std::env::var_os(BASE_PATH_ENV).is_some() {
        return;
    }

    let Ok(raw) = fs::read_to_string("Dioxus.toml") else {
        return;
    };
    let manifest: toml::Table = raw.parse().expect("Dioxus.toml is not valid TOML");

    let base_path = manifest
        .get("web")
        .and_then(|web| web.get("app"))
        .and_then(|app| app.get("base_path"))
        .and_then(|value| value.as_str());

    if let Some(base_path) = base_path {
        println!("cargo:rustc-env={BASE_PATH_ENV}={base_path}");
    }
}

fn bundle_css() {
    // Create output directory if it doesn't exist
    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    // Bundle CSS starting from main.css
    let mut stylesheet = bundler
        .bundle(Path::new("assets/css/main.css"))
        .expect("Failed to bundle CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write("assets/dist/bundle.css", css.code).expect("Failed to write bundle.css");
}
