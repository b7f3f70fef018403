use std::process::{Command, Output};

const SENDER: &str = "0xf642060ad79BB34232172DC3d195B0930C8321a0";

fn create_addr(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_create-addr"))
        .args(args)
        .env_remove("DEPLOYER")
        .env_remove("NONCE")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_of(args: &[&str]) -> String {
    let output = create_addr(args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("create-addr {args:?} failed: {stderr}");
    }
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn create_address_prints_known_deployments() {
    for (nonce, expected) in [
        ("0", "0xF1c6443AD2B87ba79B1838D8D7835712E9A92dbb"),
        ("1", "0xC086D50fDe19ADa3fE2C31F013eF02614aBd9A47"),
        ("2", "0x8bBD31DDE7a2BF8D94953BE5B0a3d7CDf6889d12"),
    ] {
        let stdout = stdout_of(&["create-address", SENDER, "--nonce", nonce]);
        let address = stdout.trim().strip_prefix("Address: ").unwrap();
        assert_eq!(address.to_lowercase(), expected.to_lowercase());
    }
}

#[test]
fn create_address_reads_deployer_and_nonce_from_env() {
    let output = Command::new(env!("CARGO_BIN_EXE_create-addr"))
        .arg("create-address")
        .env("DEPLOYER", SENDER)
        .env("NONCE", "1")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim().to_lowercase(),
        "address: 0xc086d50fde19ada3fe2c31f013ef02614abd9a47"
    );
}

#[test]
fn create_address_count_lists_consecutive_nonces() {
    let stdout = stdout_of(&["ca", SENDER, "-n", "0", "--count", "3"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[2].to_lowercase(),
        "2 0x8bbd31dde7a2bf8d94953be5b0a3d7cdf6889d12"
    );
}

#[test]
fn create_address_rejects_malformed_deployer() {
    let output = create_addr(&["create-address", &SENDER[..41], "--nonce", "0"]);
    assert!(!output.status.success());
}

#[test]
fn demo_prints_notice() {
    assert_eq!(
        stdout_of(&["demo"]).trim(),
        "您部署的智能合约地址为 0x8bbd31dde7a2bf8d94953be5b0a3d7cdf6889d12"
    );
}

#[test]
fn checksummed_bytes_normalize_back() {
    let checksummed = stdout_of(&["checksum", SENDER, "--bytes"]);
    let checksummed = checksummed.trim();
    assert_eq!(checksummed.len(), 50);

    let normalized = stdout_of(&["normalize", checksummed]);
    assert_eq!(normalized.trim(), SENDER.to_lowercase());
}

#[test]
fn normalize_blank_requires_flag() {
    assert!(!create_addr(&["normalize", ""]).status.success());
    assert_eq!(stdout_of(&["normalize", "", "--allow-blank"]), "\n");
}

#[test]
fn decode_accepts_only_empty_or_twenty_bytes() {
    assert_eq!(
        stdout_of(&["decode", SENDER]).trim(),
        SENDER.to_lowercase()
    );
    assert_eq!(stdout_of(&["decode", "0x"]).trim(), "0x");

    let output = create_addr(&["decode", "0x0011"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Serialized addresses must be empty or 20 bytes long"));
}

#[test]
fn hash_uses_keccak_padding() {
    assert_eq!(
        stdout_of(&["hash", "", "--string"]).trim(),
        "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
    );
    assert_eq!(
        stdout_of(&["hash", "42", "--integer"]),
        stdout_of(&["hash", "42", "--string"])
    );
}

#[test]
fn create2_address_matches_eip_1014() {
    let zero_salt = format!("0x{}", "00".repeat(32));
    let stdout = stdout_of(&[
        "create2-address",
        "--deployer",
        "0xdeadbeef00000000000000000000000000000000",
        "--salt",
        &zero_salt,
        "--init-code",
        "0x00",
    ]);
    assert_eq!(
        stdout.trim().to_lowercase(),
        "address: 0xb928f69bb1d91cd65274e3c79d8986362984fda3"
    );
}

#[test]
fn autocomplete_generates_a_script() {
    let stdout = stdout_of(&["autocomplete", "generate", "bash"]);
    assert!(stdout.contains("create-addr"));
}
