//! End-to-end message building flows.
//!
//! Each test runs a complete command line through parsing, building,
//! serialization, and output encoding.

use crate::common::run_ok;

/// Canonical scenario: a CALL with mixed typed arguments, JSON-serialized
/// and hex-encoded. `arg1` stays a string, `42` converts to an integer, and
/// no kwargs field is emitted.
#[test]
fn test_call_json_hex_canonical_output() {
    let line = run_ok(&[
        "wampcheck",
        "message",
        "call",
        "1",
        "my.proc",
        "arg1",
        "42",
        "--serializer=json",
        "--output=hex",
    ]);
    assert_eq!(line, hex::encode(br#"[48,1,{},"my.proc",["arg1",42]]"#));
}

#[test]
fn test_call_defaults_match_explicit_flags() {
    let defaulted = run_ok(&["wampcheck", "message", "call", "1", "my.proc", "arg1", "42"]);
    let explicit = run_ok(&[
        "wampcheck",
        "message",
        "call",
        "1",
        "my.proc",
        "arg1",
        "42",
        "--serializer=json",
        "--output=hex",
    ]);
    assert_eq!(defaulted, explicit);
}

#[test]
fn test_call_with_options_and_kwargs() {
    let line = run_ok(&[
        "wampcheck",
        "message",
        "call",
        "1",
        "my.proc",
        "-o",
        "timeout=10",
        "-k",
        "mode=fast",
    ]);
    let expected = br#"[48,1,{"timeout":10},"my.proc",[],{"mode":"fast"}]"#;
    assert_eq!(line, hex::encode(expected));
}

#[test]
fn test_typed_conversion_covers_all_scalars() {
    let line = run_ok(&[
        "wampcheck",
        "message",
        "publish",
        "13",
        "com.example.topic",
        "text",
        "7",
        "2.5",
        "true",
        "null",
    ]);
    let expected = br#"[16,13,{},"com.example.topic",["text",7,2.5,true,null]]"#;
    assert_eq!(line, hex::encode(expected));
}

#[test]
fn test_result_with_details_flag() {
    let line = run_ok(&[
        "wampcheck",
        "message",
        "result",
        "7",
        "done",
        "-d",
        "progress=true",
    ]);
    let expected = br#"[50,7,{"progress":true},["done"]]"#;
    assert_eq!(line, hex::encode(expected));
}

#[test]
fn test_every_kind_produces_output_with_every_serializer() {
    let kind_argvs: Vec<Vec<&str>> = vec![
        vec!["call", "1", "p"],
        vec!["result", "1"],
        vec!["register", "1", "p"],
        vec!["registered", "1", "2"],
        vec!["invocation", "1", "2"],
        vec!["yield", "1"],
        vec!["unregister", "1", "2"],
        vec!["unregistered", "1"],
        vec!["subscribe", "1", "t"],
        vec!["subscribed", "1", "2"],
        vec!["publish", "1", "t"],
    ];
    for serializer in ["json", "cbor", "msgpack", "protobuf"] {
        for fields in &kind_argvs {
            let mut argv = vec!["wampcheck", "message"];
            argv.extend(fields);
            argv.push("--serializer");
            argv.push(serializer);
            let line = run_ok(&argv);
            assert!(
                !line.is_empty(),
                "{serializer} produced no output for {fields:?}"
            );
        }
    }
}

#[test]
fn test_base64_output_decodes_to_same_bytes_as_hex() {
    let hex_line = run_ok(&["wampcheck", "message", "subscribed", "12", "8000"]);
    let base64_line = run_ok(&[
        "wampcheck",
        "message",
        "subscribed",
        "12",
        "8000",
        "--output=base64",
    ]);

    let from_hex = hex::decode(hex_line).expect("valid hex");
    let from_base64 =
        wampcheck_core::decode_any(&base64_line).expect("valid base64");
    assert_eq!(from_hex, from_base64);
}

#[test]
fn test_registered_msgpack_bytes() {
    let line = run_ok(&[
        "wampcheck",
        "message",
        "registered",
        "5",
        "700",
        "--serializer=msgpack",
    ]);
    // fixarray(3), fixint 65, fixint 5, uint16 700
    assert_eq!(line, "934105cd02bc");
}

#[test]
fn test_duplicate_flag_keys_keep_the_last_value() {
    let line = run_ok(&[
        "wampcheck",
        "message",
        "register",
        "4",
        "p",
        "-o",
        "match=prefix",
        "-o",
        "match=exact",
    ]);
    let expected = br#"[64,4,{"match":"exact"},"p"]"#;
    assert_eq!(line, hex::encode(expected));
}
