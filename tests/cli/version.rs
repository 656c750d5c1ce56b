use crate::ehmgmt;
use predicates::prelude::*;

#[test]
fn cli_version() {
    ehmgmt()
        .args(["version"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(concat!(
            "ehmgmt ",
            env!("CARGO_PKG_VERSION")
        )));
}
