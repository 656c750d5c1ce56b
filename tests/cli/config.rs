use crate::{ehmgmt_in, write_config};
use predicates::prelude::*;

const CONFIG: &str = r#"# contexts for ci
contexts:
  default:
    subscription_id: 00000000-0000-0000-0000-000000000000
    access_token: secret
  preview:
    subscription_id: 11111111-1111-1111-1111-111111111111
    access_token: other-secret
    api_version: "2018-01-01-preview"
"#;

#[test]
fn config_get() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    write_config(home.path(), CONFIG)?;

    ehmgmt_in(home.path())
        .args(["config", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Context \"default\""))
        .stdout(predicate::str::contains(
            "00000000-0000-0000-0000-000000000000",
        ))
        .stdout(predicate::str::contains("secret").not());

    Ok(())
}

#[test]
fn config_get_all_json() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    write_config(home.path(), CONFIG)?;

    ehmgmt_in(home.path())
        .args(["-O", "json", "config", "get", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains(r#""name":"preview""#))
        .stdout(predicate::str::contains(
            r#""api_version":"2018-01-01-preview""#,
        ))
        .stdout(predicate::str::contains("secret").not());

    Ok(())
}

#[test]
fn config_get_missing_context() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    write_config(home.path(), CONFIG)?;

    ehmgmt_in(home.path())
        .args(["-C", "nope", "config", "get"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Context 'nope' not found"));

    Ok(())
}

#[test]
fn config_set_creates_file() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;

    ehmgmt_in(home.path())
        .args(["config", "set", "subscription_id", "abc"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Set subscription_id for context \"default\""));

    ehmgmt_in(home.path())
        .args(["config", "set", "access_token", "token"])
        .assert()
        .success();

    ehmgmt_in(home.path())
        .args(["-O", "json", "config", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""subscription_id":"abc""#));

    Ok(())
}

#[test]
fn config_set_preserves_file() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    write_config(home.path(), CONFIG)?;

    ehmgmt_in(home.path())
        .args(["-C", "preview", "config", "set", "api_profile", "latest"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(home.path().join(".config/eventhub-mgmt.yaml"))?;
    assert!(contents.starts_with("# contexts for ci"));

    ehmgmt_in(home.path())
        .args(["-C", "preview", "-O", "json", "config", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""api_profile":"latest""#));

    Ok(())
}

#[test]
fn config_set_rejects_unknown_setting() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;

    ehmgmt_in(home.path())
        .args(["config", "set", "api_key", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'api_key'"));

    Ok(())
}
