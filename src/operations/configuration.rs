//! Quota configuration of dedicated clusters.

use super::{CONFIGURATION, OperationDef, OperationTable};

/// Cluster configuration at `2018-01-01-preview`.
pub static V2018_01_01_PREVIEW: OperationTable = OperationTable {
    group: CONFIGURATION,
    api_version: "2018-01-01-preview",
    operations: &[
        OperationDef::patch(
            "patch",
            resource_group_path!("/clusters/{clusterName}/quotaConfiguration/default"),
        )
        .body("ClusterQuotaConfigurationProperties")
        .returns("ClusterQuotaConfigurationProperties"),
        OperationDef::get(
            "get",
            resource_group_path!("/clusters/{clusterName}/quotaConfiguration/default"),
        )
        .returns("ClusterQuotaConfigurationProperties"),
    ],
};
