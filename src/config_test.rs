use super::*;

#[test]
fn override_trims_trailing_slashes() {
    let config = AppConfig::from_env().with_api_base_url("https://bank.test/api///");
    assert_eq!(config.api_base_url(), "https://bank.test/api");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = AppConfig::from_env().with_api_base_url("https://bank.test/api");
    assert_eq!(config.endpoint("/auth/login"), "https://bank.test/api/auth/login");
    assert_eq!(config.endpoint("users/me"), "https://bank.test/api/users/me");
}

#[test]
fn endpoint_preserves_trailing_slash_of_collection_paths() {
    let config = AppConfig::from_env().with_api_base_url("https://bank.test/api");
    assert_eq!(config.endpoint("/rm/clients/"), "https://bank.test/api/rm/clients/");
}

#[test]
fn default_base_url_has_no_trailing_slash() {
    assert!(!AppConfig::default().api_base_url().ends_with('/'));
}
