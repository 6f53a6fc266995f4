//! Error-handling and exit-code tests.
//!
//! Validation failures must be reported with their fixed messages and the
//! mapped exit code, and nothing partial may be produced.

use crate::common::run;

/// RFC 8032 test vector 1 public key.
const PUBLIC_HEX: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

#[test]
fn test_short_private_key_message_and_exit_code() {
    let failure = run(&[
        "wampcheck",
        "auth",
        "cryptosign",
        "sign-challenge",
        "abc123",
        &hex::encode([0u8; 16]),
    ])
    .expect_err("16-byte key must be rejected");

    assert_eq!(
        failure.message,
        "invalid private-key: must be of length 32 or 64"
    );
    assert_eq!(failure.exit_code, 2);
}

#[test]
fn test_wrong_public_key_length_message_and_exit_code() {
    let failure = run(&[
        "wampcheck",
        "auth",
        "cryptosign",
        "verify-signature",
        &hex::encode([0x42u8; 96]),
        &hex::encode([0u8; 31]),
    ])
    .expect_err("31-byte public key must be rejected");

    assert_eq!(failure.message, "invalid public-key: must be of length 32");
    assert_eq!(failure.exit_code, 2);
}

#[test]
fn test_undecodable_private_key_is_a_decode_error() {
    let failure = run(&[
        "wampcheck",
        "auth",
        "cryptosign",
        "get-pubkey",
        "neither hex nor base64!",
    ])
    .expect_err("garbage key must be rejected");

    assert!(failure.message.starts_with("invalid private-key:"));
    assert_eq!(failure.exit_code, 2);
}

#[test]
fn test_verification_failure_uses_dedicated_exit_code() {
    let failure = run(&[
        "wampcheck",
        "auth",
        "cryptosign",
        "verify-signature",
        &hex::encode([0x42u8; 96]),
        PUBLIC_HEX,
    ])
    .expect_err("forged signature must not verify");

    assert_eq!(failure.message, "signature verification failed");
    assert_eq!(failure.exit_code, 1);
}

#[test]
fn test_short_signature_is_a_validation_error_not_a_verification_failure() {
    let failure = run(&[
        "wampcheck",
        "auth",
        "cryptosign",
        "verify-signature",
        &hex::encode([0x42u8; 10]),
        PUBLIC_HEX,
    ])
    .expect_err("10-byte blob must be rejected");

    assert_eq!(failure.message, "invalid signature: must be at least 64 bytes");
    assert_eq!(failure.exit_code, 2);
}

#[test]
fn test_mismatched_combined_key_is_rejected() {
    // Seed followed by a public key that does not belong to it.
    let mut combined = vec![0x9d_u8; 32];
    combined.extend_from_slice(&[0u8; 32]);

    let failure = run(&[
        "wampcheck",
        "auth",
        "cryptosign",
        "get-pubkey",
        &hex::encode(combined),
    ])
    .expect_err("inconsistent combined key must be rejected");

    assert!(failure.message.starts_with("invalid private-key:"));
    assert_eq!(failure.exit_code, 2);
}
