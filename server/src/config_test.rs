use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn parses_host_and_port() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn parses_ipv6_host() {
    let cfg = ServerConfig::from_vars(Some("::1"), Some("3001")).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:3001");
}

#[test]
fn rejects_invalid_port() {
    let err = ServerConfig::from_vars(None, Some("http")).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn rejects_out_of_range_port() {
    assert!(ServerConfig::from_vars(None, Some("70000")).is_err());
}

#[test]
fn rejects_invalid_host() {
    let err = ServerConfig::from_vars(Some("localhost:80"), None).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "HOST", .. }));
}
