use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-env-changed=SENTRY_DSN");

    // "undefined" keeps Sentry uninitialised at startup
    let dsn = env::var("SENTRY_DSN").unwrap_or_else(|_| "undefined".to_string());
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    fs::write(
        Path::new(&out_dir).join("sentry_dsn.rs"),
        format!("pub const SENTRY_DSN: &str = {dsn:?};\n"),
    )
    .expect("failed to write sentry_dsn.rs");
}
