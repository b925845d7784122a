use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_valid_value() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 8081 ")), Ok(8081));
}

#[test]
fn parse_port_rejects_invalid_value() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::Port("http".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::Port("70000".to_owned())));
}

#[test]
fn parse_bind_addr_defaults_to_unspecified() {
    assert_eq!(parse_bind_addr(None), Ok(DEFAULT_BIND_ADDR));
}

#[test]
fn parse_bind_addr_accepts_v4_and_v6() {
    assert_eq!(parse_bind_addr(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert!(matches!(parse_bind_addr(Some("::1")), Ok(IpAddr::V6(_))));
}

#[test]
fn parse_bind_addr_rejects_hostnames() {
    assert_eq!(parse_bind_addr(Some("localhost")), Err(ConfigError::BindAddr("localhost".to_owned())));
}

#[test]
fn socket_addr_combines_parts() {
    let config = ServerConfig { bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 4000 };
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:4000");
}

#[test]
fn from_env_reads_port_override() {
    // Only this test touches PORT/BIND_ADDR.
    unsafe {
        std::env::set_var("PORT", "4321");
        std::env::remove_var("BIND_ADDR");
    }
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.port, 4321);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    unsafe { std::env::remove_var("PORT") };
}
