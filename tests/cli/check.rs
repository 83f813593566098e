use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const CONFIG: &str = r#"{
    "sourceRoots": ["src"],
    "dictionary": "./messages/en.json"
}"#;

#[test]
fn test_reports_unreferenced_key() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keysweeprc.json", CONFIG)?;
    test.write_file(
        "messages/en.json",
        r#"{"app.title": "My App", "app.button.ok": "OK", "unused.key": "Never"}"#,
    )?;
    test.write_file(
        "src/app.rs",
        r#"let title = t("app.title"); let ok = t("app.button.ok");"#,
    )?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("error: \"unused.key\"  unreferenced-key  ("));
    assert!(out.contains("1 unreferenced key found"));
    assert!(!out.contains("app.title"));
    Ok(())
}

#[test]
fn test_success_when_all_keys_referenced() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keysweeprc.json", CONFIG)?;
    test.write_file("messages/en.json", r#"{"app.title": "My App"}"#)?;
    test.write_file("src/app.rs", r#"t("app.title")"#)?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("all 1 key is referenced"));
    Ok(())
}

#[test]
fn test_missing_keys_are_sorted() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keysweeprc.json", CONFIG)?;
    test.write_file(
        "messages/en.json",
        r#"{"zebra.key": "z", "apple.key": "a", "mango.key": "m"}"#,
    )?;
    test.write_file("src/app.rs", "no references at all")?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    let apple = out.find("apple.key").unwrap();
    let mango = out.find("mango.key").unwrap();
    let zebra = out.find("zebra.key").unwrap();
    assert!(apple < mango && mango < zebra);
    Ok(())
}

#[test]
fn test_overlapping_keys_both_detected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keysweeprc.json", CONFIG)?;
    test.write_file("messages/en.json", r#"{"a": "1", "ab": "2"}"#)?;
    test.write_file("src/app.rs", "xaby")?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_missing_dictionary_is_config_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keysweeprc.json", CONFIG)?;
    test.write_file("src/app.rs", "whatever")?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read dictionary file"));
    Ok(())
}

#[test]
fn test_malformed_dictionary_is_config_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keysweeprc.json", CONFIG)?;
    test.write_file("messages/en.json", "{ not json")?;
    test.write_file("src/app.rs", "whatever")?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse dictionary file"));
    Ok(())
}

#[test]
fn test_empty_dictionary_succeeds() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keysweeprc.json", CONFIG)?;
    test.write_file("messages/en.json", "{}")?;
    test.write_file("src/app.rs", "whatever")?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_key_in_ignored_directory_reported_missing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".keysweeprc.json",
        r#"{
            "sourceRoots": ["src"],
            "dictionary": "./messages/en.json",
            "ignores": ["src/generated"]
        }"#,
    )?;
    test.write_file("messages/en.json", r#"{"hidden.key": "h"}"#)?;
    test.write_file("src/generated/out.rs", r#"t("hidden.key")"#)?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("hidden.key"));
    Ok(())
}

#[test]
fn test_dictionary_directory_never_counts_as_reference() -> Result<()> {
    // The en.json file itself contains every key literally; scanning it
    // would make every key look referenced.
    let test = CliTest::new()?;
    test.write_file(
        ".keysweeprc.json",
        r#"{
            "sourceRoots": ["."],
            "dictionary": "./messages/en.json"
        }"#,
    )?;
    test.write_file("messages/en.json", r#"{"only.here": "x"}"#)?;
    test.write_file("app.rs", "no references")?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("only.here"));
    Ok(())
}

#[test]
fn test_serial_and_parallel_agree() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keysweeprc.json", CONFIG)?;
    test.write_file(
        "messages/en.json",
        r#"{"used.key": "u", "lost.key": "l"}"#,
    )?;
    test.write_file("src/a.rs", r#"t("used.key")"#)?;

    let parallel = test.check()?;
    let serial = test.command().arg("check").arg("--serial").output()?;
    assert_eq!(parallel.status.code(), serial.status.code());
    assert_eq!(stdout(&parallel), stdout(&serial));
    Ok(())
}

#[test]
fn test_no_early_exit_same_result() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keysweeprc.json", CONFIG)?;
    test.write_file("messages/en.json", r#"{"k.one": "1", "k.two": "2"}"#)?;
    test.write_file("src/a.rs", "k.one k.two")?;
    test.write_file("src/b.rs", "k.one again")?;

    let default_run = test.check()?;
    let exhaustive = test
        .command()
        .arg("check")
        .arg("--no-early-exit")
        .output()?;
    assert_eq!(default_run.status.code(), Some(0));
    assert_eq!(exhaustive.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_cli_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/keys.json", r#"{"cli.key": "c"}"#)?;
    test.write_file("code/main.rs", r#"uses cli.key here"#)?;

    let output = test
        .command()
        .arg("check")
        .arg("--dictionary")
        .arg("i18n/keys.json")
        .arg("--source-root")
        .arg("code")
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_works_without_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"default.key": "d"}"#)?;
    test.write_file("src/app.rs", r#"t("default.key")"#)?;

    let output = test.check()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.command().arg("--help").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("check"));
    Ok(())
}
