//! Consumer groups of an event hub.

use super::{CONSUMER_GROUPS, OperationDef, OperationTable};

/// Consumer groups at `2015-08-01`.
pub static V2015_08_01: OperationTable = OperationTable {
    group: CONSUMER_GROUPS,
    api_version: "2015-08-01",
    operations: &[
        OperationDef::put(
            "create_or_update",
            namespace_path!("/eventhubs/{eventHubName}/consumergroups/{consumerGroupName}"),
        )
        .body("ConsumerGroupCreateOrUpdateParameters")
        .returns("ConsumerGroupResource"),
        OperationDef::delete(
            "delete",
            namespace_path!("/eventhubs/{eventHubName}/consumergroups/{consumerGroupName}"),
        ),
        OperationDef::get(
            "get",
            namespace_path!("/eventhubs/{eventHubName}/consumergroups/{consumerGroupName}"),
        )
        .returns("ConsumerGroupResource"),
        OperationDef::get(
            "list_all",
            namespace_path!("/eventhubs/{eventHubName}/consumergroups"),
        )
        .paged("ConsumerGroupResource"),
    ],
};

const CONSUMER_GROUP_OPERATIONS: &[OperationDef] = &[
    OperationDef::put(
        "create_or_update",
        namespace_path!("/eventhubs/{eventHubName}/consumergroups/{consumerGroupName}"),
    )
    .body("ConsumerGroup")
    .returns("ConsumerGroup"),
    OperationDef::delete(
        "delete",
        namespace_path!("/eventhubs/{eventHubName}/consumergroups/{consumerGroupName}"),
    ),
    OperationDef::get(
        "get",
        namespace_path!("/eventhubs/{eventHubName}/consumergroups/{consumerGroupName}"),
    )
    .returns("ConsumerGroup"),
    OperationDef::get(
        "list_by_event_hub",
        namespace_path!("/eventhubs/{eventHubName}/consumergroups"),
    )
    .paged("ConsumerGroup"),
];

/// Consumer groups at `2017-04-01`.
pub static V2017_04_01: OperationTable = OperationTable {
    group: CONSUMER_GROUPS,
    api_version: "2017-04-01",
    operations: CONSUMER_GROUP_OPERATIONS,
};

/// Consumer groups at `2018-01-01-preview`.
pub static V2018_01_01_PREVIEW: OperationTable = OperationTable {
    group: CONSUMER_GROUPS,
    api_version: "2018-01-01-preview",
    operations: CONSUMER_GROUP_OPERATIONS,
};
