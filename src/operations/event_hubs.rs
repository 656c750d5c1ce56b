//! Event hubs within a namespace, with their authorization rules.

use super::{EVENT_HUBS, OperationDef, OperationTable};

/// Event hubs at `2015-08-01`.
pub static V2015_08_01: OperationTable = OperationTable {
    group: EVENT_HUBS,
    api_version: "2015-08-01",
    operations: &[
        OperationDef::get("list_all", namespace_path!("/eventhubs")).paged("EventHubResource"),
        OperationDef::put("create_or_update", namespace_path!("/eventhubs/{eventHubName}"))
            .body("EventHubCreateOrUpdateParameters")
            .returns("EventHubResource"),
        OperationDef::delete("delete", namespace_path!("/eventhubs/{eventHubName}")),
        OperationDef::get("get", namespace_path!("/eventhubs/{eventHubName}"))
            .returns("EventHubResource"),
        OperationDef::get(
            "list_authorization_rules",
            namespace_path!("/eventhubs/{eventHubName}/authorizationRules"),
        )
        .paged("SharedAccessAuthorizationRuleResource"),
        OperationDef::put(
            "create_or_update_authorization_rule",
            namespace_path!("/eventhubs/{eventHubName}/authorizationRules/{authorizationRuleName}"),
        )
        .body("SharedAccessAuthorizationRuleCreateOrUpdateParameters")
        .returns("SharedAccessAuthorizationRuleResource"),
        OperationDef::get(
            "get_authorization_rule",
            namespace_path!("/eventhubs/{eventHubName}/authorizationRules/{authorizationRuleName}"),
        )
        .returns("SharedAccessAuthorizationRuleResource"),
        OperationDef::delete(
            "delete_authorization_rule",
            namespace_path!("/eventhubs/{eventHubName}/authorizationRules/{authorizationRuleName}"),
        ),
        OperationDef::post(
            "list_keys",
            namespace_path!(
                "/eventhubs/{eventHubName}/authorizationRules/{authorizationRuleName}/ListKeys"
            ),
        )
        .returns("ResourceListKeys"),
        OperationDef::post(
            "regenerate_keys",
            namespace_path!(
                "/eventhubs/{eventHubName}/authorizationRules/{authorizationRuleName}/regenerateKeys"
            ),
        )
        .body("RegenerateKeysParameters")
        .returns("ResourceListKeys"),
    ],
};

// Shared by `2017-04-01` and `2018-01-01-preview`.
const EVENTHUB_OPERATIONS: &[OperationDef] = &[
    OperationDef::get("list_by_namespace", namespace_path!("/eventhubs")).paged("Eventhub"),
    OperationDef::put("create_or_update", namespace_path!("/eventhubs/{eventHubName}"))
        .body("Eventhub")
        .returns("Eventhub"),
    OperationDef::delete("delete", namespace_path!("/eventhubs/{eventHubName}")),
    OperationDef::get("get", namespace_path!("/eventhubs/{eventHubName}")).returns("Eventhub"),
    OperationDef::get(
        "list_authorization_rules",
        namespace_path!("/eventhubs/{eventHubName}/authorizationRules"),
    )
    .paged("AuthorizationRule"),
    OperationDef::put(
        "create_or_update_authorization_rule",
        namespace_path!("/eventhubs/{eventHubName}/authorizationRules/{authorizationRuleName}"),
    )
    .body("AuthorizationRule")
    .returns("AuthorizationRule"),
    OperationDef::get(
        "get_authorization_rule",
        namespace_path!("/eventhubs/{eventHubName}/authorizationRules/{authorizationRuleName}"),
    )
    .returns("AuthorizationRule"),
    OperationDef::delete(
        "delete_authorization_rule",
        namespace_path!("/eventhubs/{eventHubName}/authorizationRules/{authorizationRuleName}"),
    ),
    OperationDef::post(
        "list_keys",
        namespace_path!(
            "/eventhubs/{eventHubName}/authorizationRules/{authorizationRuleName}/listKeys"
        ),
    )
    .returns("AccessKeys"),
    OperationDef::post(
        "regenerate_keys",
        namespace_path!(
            "/eventhubs/{eventHubName}/authorizationRules/{authorizationRuleName}/regenerateKeys"
        ),
    )
    .body("RegenerateAccessKeyParameters")
    .returns("AccessKeys"),
];

/// Event hubs at `2017-04-01`.
pub static V2017_04_01: OperationTable = OperationTable {
    group: EVENT_HUBS,
    api_version: "2017-04-01",
    operations: EVENTHUB_OPERATIONS,
};

/// Event hubs at `2018-01-01-preview`.
pub static V2018_01_01_PREVIEW: OperationTable = OperationTable {
    group: EVENT_HUBS,
    api_version: "2018-01-01-preview",
    operations: EVENTHUB_OPERATIONS,
};
