use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 8081 ")).unwrap(), 8081);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT value 'eighty'");
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_host_defaults_to_all_interfaces() {
    assert_eq!(parse_host(None).unwrap(), DEFAULT_BIND_HOST);
}

#[test]
fn parse_host_rejects_blank() {
    assert!(matches!(parse_host(Some("  ")), Err(ConfigError::EmptyHost)));
}

#[test]
fn bind_addr_joins_host_and_port() {
    let cfg = ServerConfig { host: "127.0.0.1".to_owned(), port: 4000 };
    assert_eq!(cfg.bind_addr(), "127.0.0.1:4000");
}
