use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT });
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("8081"), Some("127.0.0.1")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8081");
}

#[test]
fn rejects_bad_port() {
    assert_eq!(
        ServerConfig::from_vars(Some("http"), None),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
    assert!(ServerConfig::from_vars(Some("70000"), None).is_err());
}

#[test]
fn rejects_bad_bind_addr() {
    assert_eq!(
        ServerConfig::from_vars(None, Some("localhost")),
        Err(ConfigError::InvalidBindAddr("localhost".to_owned()))
    );
}
