//! Environment overrides for configuration loading.
//!
//! Kept in its own test binary so the variables it sets cannot leak into
//! tests that expect default values.

use shareinfo_core::config::AppConfig;

#[test]
fn test_env_overrides_use_single_underscore_prefix() {
    // SAFETY: this is the only test in this binary, so no other thread
    // reads the environment concurrently.
    unsafe {
        std::env::set_var("SHAREINFO_OUTPUT__FORMAT", "json");
        std::env::set_var("SHAREINFO_LOGGING__LEVEL", "debug");
    }

    let config = AppConfig::load(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/absent"))
        .expect("load");

    assert_eq!(config.output.format, "json");
    assert_eq!(config.logging.level, "debug");
    assert!(!config.output.include_unknown);
}
