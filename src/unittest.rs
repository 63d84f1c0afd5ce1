use {
    crate::{
        canonical::{canonicalize_params, escape_uri_element, is_rfc3986_unreserved, string_to_sign},
        crypto::hmac_sha256_base64,
        sign::{sign_params, sign_params_at, signed_path_at, signed_url_at},
        SecretKey, SignatureError,
    },
    chrono::{DateTime, Utc},
    http::status::StatusCode,
    std::collections::HashMap,
};

const TEST_TIMESTAMP: i64 = 1714521600; // 2024-05-01T00:00:00Z

fn test_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(TEST_TIMESTAMP, 0).unwrap()
}

fn params_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn expect_invalid_argument(result: Result<HashMap<String, String>, SignatureError>) {
    match result {
        Err(SignatureError::InvalidArgument(_)) => (),
        Err(e) => panic!("Expected InvalidArgument; got {:?}", e),
        Ok(_) => panic!("Expected InvalidArgument; got Ok"),
    }
}

#[test]
fn check_unreserved_charset() {
    for c in b'A'..=b'Z' {
        assert!(is_rfc3986_unreserved(c));
    }
    for c in b'a'..=b'z' {
        assert!(is_rfc3986_unreserved(c));
    }
    for c in b'0'..=b'9' {
        assert!(is_rfc3986_unreserved(c));
    }
    for c in [b'-', b'.', b'_', b'~'] {
        assert!(is_rfc3986_unreserved(c));
    }
    for c in [b' ', b'+', b'=', b'&', b'%', b'/', b'?', b'#', b'\n', 0u8, 0xff] {
        assert!(!is_rfc3986_unreserved(c));
    }
}

#[test]
fn check_escape() {
    assert_eq!(escape_uri_element(""), "");
    assert_eq!(escape_uri_element("abc-XYZ_0.9~"), "abc-XYZ_0.9~");

    // Space is %20, never '+', and '+' itself is encoded.
    assert_eq!(escape_uri_element("a b"), "a%20b");
    assert_eq!(escape_uri_element("a+b"), "a%2Bb");

    // Hex escapes are uppercase.
    assert_eq!(escape_uri_element("/?&="), "%2F%3F%26%3D");

    // Multi-byte UTF-8 is encoded byte-wise.
    assert_eq!(escape_uri_element("caf\u{e9}"), "caf%C3%A9");
}

#[test]
fn check_canonicalize_params() {
    assert_eq!(canonicalize_params(&HashMap::new()), "");

    let params = params_of(&[("b", "2"), ("a", "1"), ("c", "3")]);
    assert_eq!(canonicalize_params(&params), "a=1&b=2&c=3");

    // Keys and values are both encoded before sorting.
    let params = params_of(&[("key one", "value&1"), ("key_two", "value=2")]);
    assert_eq!(canonicalize_params(&params), "key%20one=value%261&key_two=value%3D2");

    // The sort is over the full encoded key=value string, so '%' (0x25) in a key sorts before
    // the '=' (0x3D) separator of a shorter key.
    let params = params_of(&[("a", "c"), ("a!", "x")]);
    assert_eq!(canonicalize_params(&params), "a%21=x&a=c");
}

#[test]
fn check_canonicalize_order_independence() {
    let forward = params_of(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
    let reverse = params_of(&[("d", "4"), ("c", "3"), ("b", "2"), ("a", "1")]);
    assert_eq!(canonicalize_params(&forward), canonicalize_params(&reverse));
}

#[test]
fn check_string_to_sign() {
    let params = params_of(&[("b", "2"), ("a", "1")]);
    assert_eq!(string_to_sign("GET", "/api/search", &params), "GET\n/api/search\na=1&b=2");
    assert_eq!(string_to_sign("GET", "/", &HashMap::new()), "GET\n/\n");
}

#[test]
fn check_hmac_sha256_base64() {
    // RFC 4231 test case 2, base64-encoded.
    assert_eq!(
        hmac_sha256_base64(b"Jefe", b"what do ya want for nothing?"),
        "W9zBRr9gdU5qBCQmCJV1x1oAPwidJzmDnexYuWTsOEM="
    );
}

#[test]
fn check_sign_params() {
    let params = params_of(&[("a", "param_a"), ("b", "param_b"), ("c", "param_c")]);
    let secret = SecretKey::from("secret");
    let signed = sign_params_at("GET", "/api/search", &params, "key", &secret, 10, test_timestamp()).unwrap();

    assert_eq!(signed.get("auth_key").unwrap(), "key");
    assert_eq!(signed.get("expiry").unwrap(), &(TEST_TIMESTAMP + 10).to_string());
    assert!(!signed.get("auth_hash").unwrap().is_empty());
    assert_eq!(signed.get("a").unwrap(), "param_a");
    assert_eq!(signed.get("b").unwrap(), "param_b");
    assert_eq!(signed.get("c").unwrap(), "param_c");
    assert_eq!(signed.len(), 6);

    // Signing is deterministic for a fixed timestamp.
    let again = sign_params_at("GET", "/api/search", &params, "key", &secret, 10, test_timestamp()).unwrap();
    assert_eq!(signed, again);

    // A different secret yields a different hash.
    let other =
        sign_params_at("GET", "/api/search", &params, "key", &SecretKey::from("other"), 10, test_timestamp()).unwrap();
    assert_ne!(signed.get("auth_hash"), other.get("auth_hash"));
}

#[test]
fn check_sign_params_wallclock_expiry() {
    let params = params_of(&[("a", "param_a")]);
    let before = Utc::now().timestamp();
    let signed = sign_params("GET", "/api/search", &params, "key", &SecretKey::from("secret"), 10).unwrap();
    let after = Utc::now().timestamp();

    let expiry: i64 = signed.get("expiry").unwrap().parse().unwrap();
    assert!(expiry >= before + 10);
    assert!(expiry <= after + 10);
}

#[test]
fn check_sign_rejects_bad_arguments() {
    let params = params_of(&[("a", "param_a")]);
    let secret = SecretKey::from("secret");

    expect_invalid_argument(sign_params("", "/api/search", &params, "key", &secret, 10));
    expect_invalid_argument(sign_params("GET", "", &params, "key", &secret, 10));
    expect_invalid_argument(sign_params("GET", "/api/search", &params, "", &secret, 10));
    expect_invalid_argument(sign_params("GET", "/api/search", &params, "key", &SecretKey::from(""), 10));
}

#[test]
fn check_sign_rejects_reserved_parameters() {
    let secret = SecretKey::from("secret");

    for reserved in ["auth_key", "auth_hash", "expiry"] {
        let params = params_of(&[("a", "param_a"), (reserved, "hoge")]);
        expect_invalid_argument(sign_params("GET", "/api/search", &params, "key", &secret, 10));
    }
}

#[test]
fn check_signed_url_and_path() {
    let params = params_of(&[("a", "param_a")]);
    let secret = SecretKey::from("secret");

    let url = signed_url_at("http://example.com", "GET", "/api/search", &params, "key", &secret, 10, test_timestamp())
        .unwrap();
    assert!(url.starts_with("http://example.com/api/search?"));

    let path = signed_path_at("GET", "/api/search", &params, "key", &secret, 10, test_timestamp()).unwrap();
    assert!(path.starts_with("/api/search?"));
    assert_eq!(url, format!("http://example.com{}", path));

    // The query string is the canonical form of the signed parameter set.
    let query = path.split_once('?').unwrap().1;
    let signed = sign_params_at("GET", "/api/search", &params, "key", &secret, 10, test_timestamp()).unwrap();
    assert_eq!(query, canonicalize_params(&signed));
    assert!(query.contains("auth_hash="));
    assert!(query.contains("auth_key=key"));
}

#[test]
fn check_error_codes_and_statuses() {
    let e = SignatureError::InvalidArgument("x".to_string());
    assert_eq!(e.error_code(), "InvalidArgument");
    assert_eq!(e.http_status(), StatusCode::BAD_REQUEST);
    assert!(!e.is_verification_failure());

    let e = SignatureError::MissingParameter("x".to_string());
    assert_eq!(e.error_code(), "MissingParameter");
    assert_eq!(e.http_status(), StatusCode::BAD_REQUEST);
    assert!(e.is_verification_failure());

    let e = SignatureError::AuthSecretNotFound("x".to_string());
    assert_eq!(e.error_code(), "AuthSecretNotFound");
    assert_eq!(e.http_status(), StatusCode::FORBIDDEN);
    assert!(e.is_verification_failure());

    let e = SignatureError::SignatureExpired("x".to_string());
    assert_eq!(e.error_code(), "SignatureExpired");
    assert_eq!(e.http_status(), StatusCode::FORBIDDEN);
    assert!(e.is_verification_failure());

    let e = SignatureError::SignatureUnmatch("x".to_string());
    assert_eq!(e.error_code(), "SignatureUnmatch");
    assert_eq!(e.http_status(), StatusCode::FORBIDDEN);
    assert!(e.is_verification_failure());

    let e = SignatureError::InternalServiceError("boom".into());
    assert_eq!(e.error_code(), "InternalFailure");
    assert_eq!(e.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!e.is_verification_failure());
    assert_eq!(e.to_string(), "boom");
    assert!(std::error::Error::source(&e).is_some());
}

#[test]
fn check_secret_key_redaction() {
    let secret = SecretKey::from("do-not-print-me");
    assert_eq!(format!("{:?}", secret), "SecretKey");
    assert_eq!(format!("{}", secret), "SecretKey");
    assert_eq!(secret.as_bytes(), b"do-not-print-me");
    assert!(!secret.is_empty());
    assert_eq!(secret, SecretKey::new("do-not-print-me".as_bytes().to_vec()));
}
