use crate::base::error::WireError;
use crate::base::state::ConnState;

#[test]
fn test_error_display() {
    let err = WireError::UnsupportedScheme("http".to_string());
    assert_eq!(err.to_string(), "Unsupported URL scheme: http");

    let err = WireError::NotConnected;
    assert_eq!(err.to_string(), "Connection is not open");
}

#[test]
fn test_invalid_url_from_parse_error() {
    let parse_err = url::Url::parse("not a url").unwrap_err();
    let err = WireError::from(parse_err);
    assert!(matches!(err, WireError::InvalidUrl(_)));
    assert!(err.to_string().starts_with("Invalid URL:"));
}

#[test]
fn test_encode_from_serde_error() {
    // A map with non-string keys cannot be encoded as JSON
    let mut map = std::collections::HashMap::new();
    map.insert(vec![1u8], "value");
    let serde_err = serde_json::to_string(&map).unwrap_err();
    let err = WireError::from(serde_err);
    assert!(matches!(err, WireError::Encode(_)));
}

#[test]
fn test_conn_state_default() {
    assert_eq!(ConnState::default(), ConnState::Connecting);
}

#[test]
fn test_conn_state_terminal() {
    assert!(!ConnState::Connecting.is_terminal());
    assert!(!ConnState::Open.is_terminal());
    assert!(!ConnState::Closing.is_terminal());
    assert!(ConnState::Closed.is_terminal());
}
