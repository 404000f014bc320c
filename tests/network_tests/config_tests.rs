//! Tests for connection configuration
//!
//! These tests verify:
//! - Connection URI parsing and rejection
//! - localhost normalization
//! - Credential pairing rules
//! - URI/flag precedence in the builder
//! - Display URL and prompt rendering
//! - Command-line `-url` spelling

use kvcli::config::{normalize_args, Config, DEFAULT_RECEIVE_BUFFER_SIZE};
use kvcli::network::{parse_connection_uri, ConnectionInfo, UriParts};
use kvcli::KvError;

// =============================================================================
// URI Parsing Tests
// =============================================================================

#[test]
fn test_parse_uri_with_credentials() {
    let parts = parse_connection_uri("kv://bob:secret@10.0.0.5:7000").unwrap();
    assert_eq!(
        parts,
        UriParts {
            user: "bob".to_string(),
            password: "secret".to_string(),
            host: "10.0.0.5".to_string(),
            port: 7000,
        }
    );
}

#[test]
fn test_parse_uri_without_credentials() {
    let parts = parse_connection_uri("kv://cache.internal:6379").unwrap();
    assert_eq!(parts.user, "");
    assert_eq!(parts.password, "");
    assert_eq!(parts.host, "cache.internal");
    assert_eq!(parts.port, 6379);
}

#[test]
fn test_parse_uri_normalizes_localhost() {
    let parts = parse_connection_uri("kv://localhost:6379").unwrap();
    assert_eq!(parts.host, "127.0.0.1");
}

#[test]
fn test_parse_uri_rejects_malformed() {
    for uri in [
        "",
        "redis://localhost:6379",
        "kv://localhost",
        "kv://localhost:port",
        "kv://user@localhost:6379",
        "kv://localhost:6379/extra",
        "kv://localhost:0",
        "kv://localhost:70000",
    ] {
        assert!(
            matches!(parse_connection_uri(uri), Err(KvError::InvalidUri(_))),
            "expected {:?} to be rejected",
            uri
        );
    }
}

// =============================================================================
// ConnectionInfo Tests
// =============================================================================

#[test]
fn test_connection_info_defaults() {
    let info = ConnectionInfo::default();
    assert_eq!(info.host, "127.0.0.1");
    assert_eq!(info.port, 6379);
    assert!(!info.require_auth);
    assert_eq!(info.url, "kv://127.0.0.1:6379");
    assert_eq!(info.prompt(), "127.0.0.1:6379> ");
}

#[test]
fn test_connection_info_with_credentials() {
    let info = ConnectionInfo::new("localhost", 7001).with_credentials("bob", "secret");
    assert_eq!(info.host, "127.0.0.1");
    assert!(info.require_auth);
    assert_eq!(info.url, "kv://bob@127.0.0.1:7001");
    assert!(!info.url.contains("secret"));
    assert_eq!(info.prompt(), "bob@127.0.0.1:7001> ");
    assert_eq!(info.addr(), "127.0.0.1:7001");
}

// =============================================================================
// Builder Tests
// =============================================================================

#[test]
fn test_builder_defaults() {
    let config = Config::builder().build().unwrap();
    assert_eq!(config.connection, ConnectionInfo::default());
    assert_eq!(config.receive_buffer_size, DEFAULT_RECEIVE_BUFFER_SIZE);
}

#[test]
fn test_builder_flags() {
    let config = Config::builder()
        .host("localhost")
        .port(7000)
        .user("alice")
        .password("pw")
        .build()
        .unwrap();

    assert_eq!(config.connection.host, "127.0.0.1");
    assert_eq!(config.connection.port, 7000);
    assert_eq!(config.connection.user, "alice");
    assert_eq!(config.connection.password, "pw");
    assert!(config.connection.require_auth);
}

#[test]
fn test_builder_uri() {
    let config = Config::builder()
        .uri("kv://bob:secret@localhost:6380")
        .build()
        .unwrap();

    assert_eq!(config.connection.host, "127.0.0.1");
    assert_eq!(config.connection.port, 6380);
    assert_eq!(config.connection.user, "bob");
    assert!(config.connection.require_auth);
}

#[test]
fn test_builder_flags_override_uri() {
    let config = Config::builder()
        .uri("kv://bob:secret@10.0.0.1:6380")
        .port(7000)
        .build()
        .unwrap();

    assert_eq!(config.connection.host, "10.0.0.1");
    assert_eq!(config.connection.port, 7000);
    assert_eq!(config.connection.user, "bob");
}

#[test]
fn test_builder_rejects_lone_user_or_password() {
    let result = Config::builder().user("bob").build();
    assert!(matches!(result, Err(KvError::Config(_))));

    let result = Config::builder().password("secret").build();
    assert!(matches!(result, Err(KvError::Config(_))));
}

#[test]
fn test_builder_rejects_invalid_values() {
    assert!(matches!(Config::builder().port(0).build(), Err(KvError::Config(_))));
    assert!(matches!(Config::builder().host("").build(), Err(KvError::Config(_))));
    assert!(matches!(
        Config::builder().receive_buffer_size(0).build(),
        Err(KvError::Config(_))
    ));
    assert!(matches!(
        Config::builder().uri("nope").build(),
        Err(KvError::InvalidUri(_))
    ));
}

// =============================================================================
// Argument Normalization Tests
// =============================================================================

fn argv(args: &[&str]) -> Vec<String> {
    std::iter::once("kv-cli")
        .chain(args.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn test_normalize_args_rewrites_url_flag() {
    assert_eq!(
        normalize_args(argv(&["-url", "kv://bob:pw@localhost:6379"])),
        argv(&["--url", "kv://bob:pw@localhost:6379"])
    );
    assert_eq!(
        normalize_args(argv(&["-url=kv://localhost:6379"])),
        argv(&["--url=kv://localhost:6379"])
    );
    assert_eq!(
        normalize_args(argv(&["-p", "7000", "-url", "kv://localhost:6379"])),
        argv(&["-p", "7000", "--url", "kv://localhost:6379"])
    );
}

#[test]
fn test_normalize_args_keeps_flag_values() {
    // A password or user that happens to read `-url` is a value, not a flag
    for args in [
        vec!["-P", "-url"],
        vec!["-U", "-url", "-P", "-url=x"],
        vec!["--password", "-url"],
        vec!["-h", "localhost", "-p", "6379"],
    ] {
        assert_eq!(normalize_args(argv(&args)), argv(&args), "{:?}", args);
    }
}

#[test]
fn test_normalize_args_leaves_program_name() {
    assert_eq!(normalize_args(vec!["-url".to_string()]), vec!["-url".to_string()]);
    assert!(normalize_args(Vec::<String>::new()).is_empty());
}

#[test]
fn test_normalize_args_ignores_similar_flags() {
    assert_eq!(normalize_args(argv(&["-urlx"])), argv(&["-urlx"]));
    assert_eq!(normalize_args(argv(&["--url", "-url"])), argv(&["--url", "-url"]));
}
