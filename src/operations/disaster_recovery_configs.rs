//! Geo-disaster recovery aliases. Not available before `2017-04-01`.

use super::{DISASTER_RECOVERY_CONFIGS, OperationDef, OperationTable};

const DISASTER_RECOVERY_OPERATIONS: &[OperationDef] = &[
    OperationDef::post(
        "check_name_availability",
        namespace_path!("/disasterRecoveryConfigs/checkNameAvailability"),
    )
    .body("CheckNameAvailabilityParameter")
    .returns("CheckNameAvailabilityResult"),
    OperationDef::get("list", namespace_path!("/disasterRecoveryConfigs"))
        .paged("ArmDisasterRecovery"),
    OperationDef::put(
        "create_or_update",
        namespace_path!("/disasterRecoveryConfigs/{alias}"),
    )
    .body("ArmDisasterRecovery")
    .returns("ArmDisasterRecovery"),
    OperationDef::delete("delete", namespace_path!("/disasterRecoveryConfigs/{alias}")),
    OperationDef::get("get", namespace_path!("/disasterRecoveryConfigs/{alias}"))
        .returns("ArmDisasterRecovery"),
    OperationDef::post(
        "break_pairing",
        namespace_path!("/disasterRecoveryConfigs/{alias}/breakPairing"),
    ),
    OperationDef::post(
        "fail_over",
        namespace_path!("/disasterRecoveryConfigs/{alias}/failover"),
    ),
    OperationDef::get(
        "list_authorization_rules",
        namespace_path!("/disasterRecoveryConfigs/{alias}/authorizationRules"),
    )
    .paged("AuthorizationRule"),
    OperationDef::get(
        "get_authorization_rule",
        namespace_path!("/disasterRecoveryConfigs/{alias}/authorizationRules/{authorizationRuleName}"),
    )
    .returns("AuthorizationRule"),
    OperationDef::post(
        "list_keys",
        namespace_path!(
            "/disasterRecoveryConfigs/{alias}/authorizationRules/{authorizationRuleName}/listKeys"
        ),
    )
    .returns("AccessKeys"),
];

/// Disaster recovery configs at `2017-04-01`.
pub static V2017_04_01: OperationTable = OperationTable {
    group: DISASTER_RECOVERY_CONFIGS,
    api_version: "2017-04-01",
    operations: DISASTER_RECOVERY_OPERATIONS,
};

/// Disaster recovery configs at `2018-01-01-preview`.
pub static V2018_01_01_PREVIEW: OperationTable = OperationTable {
    group: DISASTER_RECOVERY_CONFIGS,
    api_version: "2018-01-01-preview",
    operations: DISASTER_RECOVERY_OPERATIONS,
};
