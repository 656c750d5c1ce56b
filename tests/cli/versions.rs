use crate::{ehmgmt_in, write_config};
use predicates::prelude::*;

#[test]
fn versions_default_profile() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    ehmgmt_in(home.path())
        .args(["versions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GROUP"))
        .stdout(predicate::str::is_match(r"event_hubs\s+2017-04-01")?)
        .stdout(predicate::str::contains("2017-04-01 (unavailable)"));

    Ok(())
}

#[test]
fn versions_profile_file() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    let profile = home.path().join("hybrid.yaml");
    std::fs::write(
        &profile,
        "name: hybrid\noperation_groups:\n  clusters: \"2018-01-01-preview\"\n",
    )?;

    ehmgmt_in(home.path())
        .args(["-O", "json", "versions", "clusters", "--api-profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains(
            r#""api_version":"2018-01-01-preview""#,
        ));

    Ok(())
}

#[test]
fn versions_explicit_version() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    ehmgmt_in(home.path())
        .args(["--api-version", "2015-08-01", "versions"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"event_hubs\s+2015-08-01")?)
        .stdout(predicate::str::contains("2015-08-01 (unavailable)"));

    Ok(())
}

#[test]
fn versions_follow_context() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    write_config(
        home.path(),
        "contexts:\n  default:\n    api_version: \"2015-08-01\"\n  preview:\n    api_version: \"2018-01-01-preview\"\n",
    )?;

    ehmgmt_in(home.path())
        .args(["versions", "event_hubs"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"event_hubs\s+2015-08-01")?);

    ehmgmt_in(home.path())
        .args(["-C", "preview", "-O", "json", "versions", "clusters"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""api_version":"2018-01-01-preview""#,
        ));

    ehmgmt_in(home.path())
        .env("EVENTHUB_MGMT_API_VERSION", "2017-04-01")
        .args(["versions", "event_hubs"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"event_hubs\s+2017-04-01")?);

    ehmgmt_in(home.path())
        .args(["--api-version", "2017-04-01", "versions", "event_hubs"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"event_hubs\s+2017-04-01")?);

    ehmgmt_in(home.path())
        .args(["-C", "nope", "versions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Context 'nope' not found"));

    Ok(())
}

#[test]
fn versions_unsupported() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    ehmgmt_in(home.path())
        .args(["--api-version", "1999-01-01", "versions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "API version 1999-01-01 is not available",
        ));

    Ok(())
}

#[test]
fn versions_unknown_group() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    ehmgmt_in(home.path())
        .args(["versions", "widgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation group: widgets"));

    Ok(())
}

#[test]
fn models_by_version() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    ehmgmt_in(home.path())
        .args(["models", "2015-08-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NamespaceResource"))
        .stdout(predicate::str::contains("EHNamespace").not());

    ehmgmt_in(home.path())
        .args(["--api-version", "2018-01-01-preview", "-O", "json", "models"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""Cluster""#));

    Ok(())
}

#[test]
fn models_follow_context() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    write_config(
        home.path(),
        "contexts:\n  default:\n    api_version: \"2015-08-01\"\n",
    )?;

    ehmgmt_in(home.path())
        .args(["models"])
        .assert()
        .success()
        .stdout(predicate::str::contains("models in 2015-08-01"))
        .stdout(predicate::str::contains("NamespaceResource"));

    Ok(())
}

#[test]
fn models_unsupported() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    ehmgmt_in(home.path())
        .args(["models", "1999-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API version 1999-01-01 is not available"));

    Ok(())
}
