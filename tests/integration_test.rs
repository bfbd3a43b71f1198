//! Integration tests for cidr-calc
//!
//! These tests drive the library from an argument vector to rendered output.

use cidr_calc::input::InputError;
use cidr_calc::processing::{compute_prefix, derive_address_count, derive_network};
use cidr_calc::{compute_cidr, run, Address, Mask};

fn run_ok(args: &[&str]) -> String {
    let mut argv = vec!["cidr-calc"];
    argv.extend_from_slice(args);
    run(argv).expect("run failed")
}

fn run_err(args: &[&str]) -> InputError {
    let mut argv = vec!["cidr-calc"];
    argv.extend_from_slice(args);
    let err = run(argv).expect_err("run should fail");
    err.downcast_ref::<InputError>()
        .expect("expected an InputError")
        .clone()
}

#[test]
fn test_normal_output() {
    assert_eq!(
        run_ok(&["192.168.1.10", "192.168.1.20"]),
        "\n192.168.1.0/27, (32)\nnetmask: 255.255.255.224\n\n"
    );
}

#[test]
fn test_script_output() {
    assert_eq!(
        run_ok(&["-b", "192.168.0.0", "192.168.255.255"]),
        "192.168.0.0|16|65536|255.255.0.0\n"
    );
    assert_eq!(run_ok(&["-b", "10.0.0.1", "10.0.0.1"]), "10.0.0.1|32|1|255.255.255.255\n");
}

#[test]
fn test_slash_zero_does_not_overflow() {
    assert_eq!(
        run_ok(&["--script", "1.2.3.4", "129.2.3.4"]),
        "0.0.0.0|0|4294967296|0.0.0.0\n"
    );
}

#[test]
fn test_json_output() {
    let text = run_ok(&["-j", "192.168.1.10", "192.168.1.20"]);
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(value["network"], "192.168.1.0");
    assert_eq!(value["prefix_len"], 27);
    assert_eq!(value["address_count"], 32);
    assert_eq!(value["netmask"], "255.255.255.224");
}

#[test]
fn test_lenient_octets_pass_through() {
    // 999 keeps its low 8 bits (231)
    assert_eq!(
        run_ok(&["-b", "999.1.1.1", "231.1.1.1"]),
        "231.1.1.1|32|1|255.255.255.255\n"
    );
}

#[test]
fn test_invalid_input() {
    let err = run_err(&["192.168.1", "192.168.1.20"]);
    assert_eq!(err.to_string(), "ip1 has invalid format: 192.168.1");
    assert_eq!(err.exit_code(), 254);

    let err = run_err(&["--strict", "192.168.1.1", "192.168.1.300"]);
    assert_eq!(err.exit_code(), 254);

    let err = run_err(&["-q", "192.168.1.1", "192.168.1.2"]);
    assert_eq!(err.exit_code(), 252);
}

#[test]
fn test_engine_public_api() {
    let a = Address::new(172, 16, 5, 1);
    let b = Address::new(172, 16, 7, 254);
    let (mask, len) = compute_prefix(a, b);
    assert_eq!(len, 22);
    assert_eq!(mask, Mask::new(255, 255, 252, 0));
    assert_eq!(derive_network(a, mask), Address::new(172, 16, 4, 0));
    assert_eq!(derive_network(b, mask), Address::new(172, 16, 4, 0));
    assert_eq!(derive_address_count(mask), 1024);

    let result = compute_cidr(a, b);
    assert_eq!(result.to_string(), "172.16.4.0/22");
}
