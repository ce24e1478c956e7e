// Version information for the CharacterCut backend

/// Semantic version number (from Cargo.toml)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name reported by /health
pub const SERVICE_NAME: &str = "charactercut-backend";

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("{} v{}", SERVICE_NAME, VERSION)
}
