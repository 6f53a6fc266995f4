//! End-to-end cryptosign flows.

use crate::common::{run, run_ok};

/// RFC 8032 test vector 1.
const SEED_HEX: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
const PUBLIC_HEX: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

/// Signing with the 32-byte seed must equal signing with the expanded
/// 64-byte key.
#[test]
fn test_seed_and_expanded_key_sign_identically() {
    let from_seed = run_ok(&[
        "wampcheck",
        "auth",
        "cryptosign",
        "sign-challenge",
        "abc123",
        SEED_HEX,
    ]);
    let expanded = format!("{SEED_HEX}{PUBLIC_HEX}");
    let from_expanded = run_ok(&[
        "wampcheck",
        "auth",
        "cryptosign",
        "sign-challenge",
        "abc123",
        &expanded,
    ]);
    assert_eq!(from_seed, from_expanded);
}

/// A full challenge/response exchange: generate, sign, verify.
#[test]
fn test_generate_sign_verify_round_trip() {
    let challenge = run_ok(&["wampcheck", "auth", "cryptosign", "generate-challenge"]);
    assert_eq!(challenge.len(), 64);

    let signature = run_ok(&[
        "wampcheck",
        "auth",
        "cryptosign",
        "sign-challenge",
        &challenge,
        SEED_HEX,
    ]);
    // 64-byte signature followed by the 32-byte challenge, hex encoded.
    assert_eq!(signature.len(), (64 + 32) * 2);

    let verdict = run_ok(&[
        "wampcheck",
        "auth",
        "cryptosign",
        "verify-signature",
        &signature,
        PUBLIC_HEX,
    ]);
    assert_eq!(verdict, "Signature verified successfully");
}

/// A forged signature is the dedicated expected-failure outcome, not a
/// decode error.
#[test]
fn test_bad_signature_fails_verification() {
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

/// Keygen output feeds straight back into get-pubkey.
#[test]
fn test_keygen_output_round_trips_through_get_pubkey() {
    let keypair = run_ok(&["wampcheck", "auth", "cryptosign", "keygen"]);
    let mut lines = keypair.lines();
    let public = lines
        .next()
        .and_then(|line| line.strip_prefix("Public Key: "))
        .expect("labeled public key");
    let private = lines
        .next()
        .and_then(|line| line.strip_prefix("Private Key: "))
        .expect("labeled private key");

    let derived = run_ok(&["wampcheck", "auth", "cryptosign", "get-pubkey", private]);
    assert_eq!(derived, public);
}

/// The whole command set honors the global output flag.
#[test]
fn test_base64_output_flows_through() {
    let challenge = run_ok(&[
        "wampcheck",
        "auth",
        "cryptosign",
        "generate-challenge",
        "--output=base64",
    ]);
    let decoded = wampcheck_core::decode_any(&challenge).expect("decodable challenge");
    assert_eq!(decoded.len(), 32);

    let public = run_ok(&[
        "wampcheck",
        "auth",
        "cryptosign",
        "get-pubkey",
        SEED_HEX,
        "--output=base64",
    ]);
    let decoded = wampcheck_core::decode_any(&public).expect("decodable public key");
    assert_eq!(hex::encode(decoded), PUBLIC_HEX);
}

/// get-pubkey derives the RFC 8032 public key from its seed.
#[test]
fn test_get_pubkey_matches_rfc8032_vector() {
    let derived = run_ok(&["wampcheck", "auth", "cryptosign", "get-pubkey", SEED_HEX]);
    assert_eq!(derived, PUBLIC_HEX);
}
