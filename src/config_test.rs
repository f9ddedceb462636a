use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.addr, "0.0.0.0:3000".parse().unwrap());
}

#[test]
fn reads_host_and_port() {
    let config = HostConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = HostConfig::from_lookup(lookup(&[("HOST", ""), ("PORT", "  ")])).unwrap();
    assert_eq!(config.addr.port(), 3000);
}

#[test]
fn unparsable_port_is_an_error() {
    assert_eq!(
        HostConfig::from_lookup(lookup(&[("PORT", "eighty")])),
        Err(ConfigError::InvalidPort { value: "eighty".to_owned() })
    );
    assert!(HostConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn unparsable_host_is_an_error() {
    assert_eq!(
        HostConfig::from_lookup(lookup(&[("HOST", "localhost")])),
        Err(ConfigError::InvalidHost { value: "localhost".to_owned() })
    );
}

#[test]
fn error_messages_name_the_variable() {
    let err = ConfigError::InvalidPort { value: "x".to_owned() };
    assert!(err.to_string().starts_with("invalid PORT"));
}
