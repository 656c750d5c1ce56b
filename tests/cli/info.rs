use crate::{ehmgmt_in, write_config};
use predicates::prelude::*;

const CONFIG: &str = r#"
contexts:
  default:
    subscription_id: 00000000-0000-0000-0000-000000000000
    access_token: secret
    base_url: http://127.0.0.1:9
"#;

#[test]
fn info_resolves_versions() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    write_config(home.path(), CONFIG)?;

    ehmgmt_in(home.path())
        .args(["info"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "00000000-0000-0000-0000-000000000000",
        ))
        .stdout(predicate::str::contains("http://127.0.0.1:9/"))
        .stdout(predicate::str::is_match(r"event_hubs\s+2017-04-01")?)
        .stdout(predicate::str::is_match(
            r"clusters\s+2017-04-01 \(unavailable\)",
        )?);

    Ok(())
}

#[test]
fn info_with_explicit_version() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    write_config(home.path(), CONFIG)?;

    ehmgmt_in(home.path())
        .args(["--api-version", "2018-01-01-preview", "-O", "json", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""clusters":"2018-01-01-preview""#,
        ));

    Ok(())
}

#[test]
fn commands_need_credentials() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;

    ehmgmt_in(home.path())
        .args(["namespace", "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No access token found"));

    Ok(())
}

#[test]
fn unsupported_version_fails_before_io() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    write_config(home.path(), CONFIG)?;

    ehmgmt_in(home.path())
        .args(["--api-version", "2015-08-01", "cluster", "ls", "-g", "rg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "API version 2015-08-01 is not available for operation group clusters",
        ));

    Ok(())
}
