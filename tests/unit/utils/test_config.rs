use rossum_client::utils::config::get_env_or_default;

#[test]
fn test_get_env_or_default_missing_var() {
    let value: u32 = get_env_or_default("ROSSUM_CLIENT_TEST_SURELY_UNSET_VAR", 42);
    assert_eq!(value, 42);
}

#[test]
fn test_get_env_or_default_existing_var() {
    // PATH is set in every test environment
    let path: String = get_env_or_default("PATH", String::new());
    assert!(!path.is_empty());
}
