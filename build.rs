fn main() {
    // Propagate ESP-IDF build environment for espidf-feature builds.
    // Host builds (lib + tests) have nothing to propagate.
    if std::env::var("CARGO_FEATURE_ESPIDF").is_ok() {
        embuild::espidf::sysenv::output();
    }
}
