//! End-to-end tests for the `bytepatch` binary.

use assert_cmd::Command;
use bytepatch_testkit::prelude::*;
use predicates::prelude::*;
use proptest::prelude::*;

fn bytepatch() -> Command {
    Command::cargo_bin("bytepatch").unwrap()
}

#[test]
fn help_prints_usage_and_grammar() {
    bytepatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("usage:\n"))
        .stdout(predicate::str::contains("r[ead] [<offset> <length>] <file>"))
        .stdout(predicate::str::contains("`append'"));
}

#[test]
fn no_arguments_is_usage_error() {
    bytepatch()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("usage:\n"));
}

#[test]
fn unknown_command_is_usage_error() {
    let file = TempBinFile::counting(4);
    bytepatch()
        .arg("dump")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("m[emset]"));
}

#[test]
fn read_with_two_arguments_is_usage_error() {
    let file = TempBinFile::counting(4);
    bytepatch()
        .args(["read", "0"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("usage:\n"));
}

#[test]
fn short_read_form_matches_explicit_form() {
    let file = TempBinFile::counting(40);

    let short = bytepatch().arg("read").arg(file.path()).output().unwrap();
    let explicit = bytepatch()
        .args(["read", "0", "all"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(short.status.success());
    assert_eq!(short.stdout, explicit.stdout);
    assert_eq!(
        String::from_utf8(short.stdout).unwrap(),
        expected_dump(&counting_bytes(40))
    );
}

#[test]
fn read_range_in_hex_offsets() {
    let file = TempBinFile::counting(64);
    bytepatch()
        .args(["r", "0x10", "\\x04"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(" 10 11 12 13 \n");
}

#[test]
fn command_names_ignore_case() {
    let file = TempBinFile::with_contents(b"AB");
    bytepatch()
        .arg("READ")
        .arg(file.path())
        .assert()
        .success()
        .stdout(" 41 42\n");
}

#[test]
fn read_offset_past_end_fails() {
    let file = TempBinFile::counting(8);
    bytepatch()
        .args(["read", "8", "all"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr("error: offset equals or exceeds filesize\n");
}

#[test]
fn read_append_offset_fails() {
    let file = TempBinFile::counting(8);
    bytepatch()
        .args(["read", "APPEND", "1"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("offset equals or exceeds filesize"));
}

#[test]
fn read_missing_file_fails() {
    let file = TempBinFile::missing();
    bytepatch()
        .arg("read")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: cannot open"));
}

#[test]
fn write_then_read_round_trip() {
    let file = TempBinFile::counting(32);

    bytepatch()
        .args(["write", "4", "de ad be ef"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(format!(
            "4 bytes successfully written to `{}'\n",
            file.path().display()
        ));

    bytepatch()
        .args(["read", "4", "4"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(" DE AD BE EF \n");

    assert_eq!(file.len(), 32);
}

#[test]
fn write_append_extends_file() {
    let file = TempBinFile::with_contents(b"abc");

    bytepatch()
        .args(["w", "append", "6465"])
        .arg(file.path())
        .assert()
        .success();

    assert_eq!(file.contents(), b"abcde");
}

#[test]
fn write_creates_missing_file() {
    let file = TempBinFile::missing();

    bytepatch()
        .args(["write", "0", "a"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 bytes successfully written"));

    assert_eq!(file.contents(), vec![0x0A]);
}

#[test]
fn write_rejects_bad_hex() {
    let file = TempBinFile::with_contents(b"abc");

    bytepatch()
        .args(["write", "0", "zz"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr("error: character `z' is not a hexadecimal digit\n");

    assert_eq!(file.contents(), b"abc");
}

#[test]
fn write_rejects_empty_data() {
    let file = TempBinFile::missing();

    bytepatch()
        .args(["write", "0", ""])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr("error: empty argument\n");

    assert!(!file.path().exists());
}

#[test]
fn write_rejects_bad_offset_before_creating_file() {
    let file = TempBinFile::missing();

    bytepatch()
        .args(["write", "12z", "ff"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr("error: argument cannot be interpreted as number: 12z\n");

    assert!(!file.path().exists());
}

#[test]
fn memset_fresh_file() {
    let file = TempBinFile::missing();

    bytepatch()
        .args(["memset", "0", "100", "\\e"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(format!(
            "100 bytes successfully written to `{}'\n",
            file.path().display()
        ));

    let contents = file.contents();
    assert_eq!(contents.len(), 100);
    assert!(contents.iter().all(|&b| b == 0x1B));
}

#[test]
fn memset_append_with_sync() {
    let file = TempBinFile::with_contents(b"xy");

    bytepatch()
        .args(["--sync", "M", "Append", "3", "z"])
        .arg(file.path())
        .assert()
        .success();

    assert_eq!(file.contents(), b"xyzzz");
}

#[test]
fn memset_rejects_zero_length() {
    let file = TempBinFile::missing();

    bytepatch()
        .args(["memset", "0", "0", "A"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr("error: length must be 1 or more: 0\n");
}

#[test]
fn memset_rejects_negative_length() {
    let file = TempBinFile::missing();

    bytepatch()
        .args(["memset", "0", "-2", "A"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr("error: length must be 1 or more: -2\n");
}

#[test]
fn memset_rejects_out_of_range_byte() {
    let file = TempBinFile::missing();

    bytepatch()
        .args(["memset", "0", "1", "0x1ff"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr("error: argument value outside of 8 bit range: 0x1ff (511)\n");
}

#[test]
fn verbose_logs_go_to_stderr() {
    let file = TempBinFile::with_contents(b"\x00");

    bytepatch()
        .args(["--verbose", "read"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(" 00\n")
        .stderr(predicate::str::contains("dumping range"));
}

#[test]
fn negative_read_length_means_whole_file() {
    let file = TempBinFile::with_contents(b"abcd");

    let whole = bytepatch().arg("read").arg(file.path()).output().unwrap();
    bytepatch()
        .args(["read", "0", "-1"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(String::from_utf8(whole.stdout).unwrap());

    bytepatch()
        .args(["read", "0", "-1"])
        .arg(file.path())
        .assert()
        .stdout(" 61 62 63 64\n");
}

#[test]
fn write_negative_offset_reports_seek_error() {
    let file = TempBinFile::with_contents(b"abc");

    bytepatch()
        .args(["write", "-1", "ff"])
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error: cannot seek to offset -1: "));

    assert_eq!(file.contents(), b"abc");
}

#[test]
fn memset_negative_offset_reports_seek_error() {
    let file = TempBinFile::with_contents(b"abc");

    bytepatch()
        .args(["memset", "-1", "1", "A"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: cannot seek to offset -1: "));

    assert_eq!(file.contents(), b"abc");
}

#[test]
fn help_with_extra_arguments_is_usage_error() {
    bytepatch()
        .args(["--help", "x"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("usage:\n"));
}

#[test]
fn subcommand_help_is_usage_error() {
    bytepatch()
        .args(["read", "--help"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("usage:\n"));
}

#[test]
fn version_succeeds() {
    bytepatch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn memset_rejects_bare_octal_byte() {
    let file = TempBinFile::missing();

    bytepatch()
        .args(["memset", "0", "1", "0101"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr("error: invalid argument: 0101\n");

    assert!(!file.path().exists());
}

proptest! {
    #![proptest_config(PropTestConfig::quick().to_proptest_config())]

    #[test]
    fn written_bytes_read_back(data in patch_data_strategy(), offset in 0u64..64) {
        let file = TempBinFile::counting(64);

        bytepatch()
            .arg("write")
            .arg(offset.to_string())
            .arg(to_hex_arg(&data))
            .arg(file.path())
            .assert()
            .success();

        let output = bytepatch()
            .arg("read")
            .arg(offset.to_string())
            .arg(data.len().to_string())
            .arg(file.path())
            .output()
            .unwrap();

        prop_assert!(output.status.success());
        prop_assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_dump(&data));
    }
}
