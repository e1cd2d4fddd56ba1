/// Application-level constants
pub const APP_NAME: &str = "MatriCare";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter for host applications embedding the core.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_matricare() {
        assert_eq!(APP_NAME, "MatriCare");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_targets_this_crate() {
        assert!(default_log_filter().starts_with("matricare"));
        assert!(default_log_filter().ends_with("=info"));
    }
}
