pub const LANGUAGE_NAME: &str = "Rust";
pub const UNKNOWN: &str = "unknown";

/// Vendor reported for official rust-lang builds, which carry a commit
/// hash but no distributor description.
pub const OFFICIAL_VENDOR: &str = "The Rust Project Developers";

pub fn greeting() -> String {
    format!("Hello from {}!", LANGUAGE_NAME)
}
