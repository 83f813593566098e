use anyhow::Result;

use crate::{CliTest, stderr};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));

    let config_path = test.root().join(".keysweeprc.json");
    assert!(config_path.exists());

    let content = std::fs::read_to_string(config_path)?;
    let config: keysweep::config::Config = serde_json::from_str(&content)?;
    assert_eq!(config.dictionary, "./messages/en.json");
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".keysweeprc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("already exists"));
    Ok(())
}
