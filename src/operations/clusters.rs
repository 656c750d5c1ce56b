//! Dedicated clusters. Only available in `2018-01-01-preview`.

use super::{CLUSTERS, OperationDef, OperationTable};

/// Clusters at `2018-01-01-preview`.
pub static V2018_01_01_PREVIEW: OperationTable = OperationTable {
    group: CLUSTERS,
    api_version: "2018-01-01-preview",
    operations: &[
        OperationDef::get(
            "list_available_cluster_region",
            subscription_path!("/availableClusterRegions"),
        )
        .returns("AvailableClustersList"),
        OperationDef::get("list_by_resource_group", resource_group_path!("/clusters"))
            .paged("Cluster"),
        OperationDef::get("get", resource_group_path!("/clusters/{clusterName}"))
            .returns("Cluster"),
        OperationDef::put(
            "create_or_update",
            resource_group_path!("/clusters/{clusterName}"),
        )
        .body("Cluster")
        .returns("Cluster"),
        OperationDef::patch("update", resource_group_path!("/clusters/{clusterName}"))
            .body("Cluster")
            .returns("Cluster"),
        OperationDef::delete("delete", resource_group_path!("/clusters/{clusterName}")),
        OperationDef::get(
            "list_namespaces",
            resource_group_path!("/clusters/{clusterName}/namespaces"),
        )
        .returns("EHNamespaceIdListResult"),
    ],
};
