//! Models for API version `2018-01-01-preview`.
//!
//! Adds dedicated clusters, cluster quota configuration and namespace network
//! rules on top of the `2017-04-01` shapes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The SKU name of a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum SkuName {
    Basic,
    Standard,
    /// A value added by the service after this API version.
    #[serde(untagged)]
    Other(String),
}

/// SKU parameters supplied to the create namespace operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    /// Name of this SKU.
    pub name: SkuName,
    /// The billing tier of this particular SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<SkuName>,
    /// The Event Hubs throughput units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
}

/// The SKU of a dedicated cluster.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClusterSku {
    /// Name of this SKU. Always `Dedicated`.
    pub name: String,
    /// The quantity of Event Hubs cluster capacity units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
}

/// The status of an event hub.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum EntityStatus {
    Active,
    Disabled,
    Restoring,
    SendDisabled,
    ReceiveDisabled,
    Creating,
    Deleting,
    Renaming,
    Unknown,
    /// A value added by the service after this API version.
    #[serde(untagged)]
    Other(String),
}

/// A right granted by an authorization rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum AccessRights {
    Manage,
    Send,
    Listen,
    /// A value added by the service after this API version.
    #[serde(untagged)]
    Other(String),
}

/// Which access key to regenerate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum KeyType {
    PrimaryKey,
    SecondaryKey,
    /// A value added by the service after this API version.
    #[serde(untagged)]
    Other(String),
}

/// The role of a namespace in a disaster recovery pairing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum RoleDisasterRecovery {
    Primary,
    PrimaryNotReplicating,
    Secondary,
    /// A value added by the service after this API version.
    #[serde(untagged)]
    Other(String),
}

/// Why a name is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum UnavailableReason {
    None,
    InvalidName,
    SubscriptionIsDisabled,
    NameInUse,
    NameInLockdown,
    TooManyNamespaceInCurrentSubscription,
    /// A value added by the service after this API version.
    #[serde(untagged)]
    Other(String),
}

/// The IP filter action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum IpAction {
    Accept,
    Reject,
    /// A value added by the service after this API version.
    #[serde(untagged)]
    Other(String),
}

/// Default action for a network rule set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum DefaultAction {
    Allow,
    Deny,
    /// A value added by the service after this API version.
    #[serde(untagged)]
    Other(String),
}

/// The action of a network rule set IP rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum NetworkRuleIpAction {
    Allow,
    /// A value added by the service after this API version.
    #[serde(untagged)]
    Other(String),
}

/// Properties of a dedicated cluster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterProperties {
    /// The UTC time when the cluster was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// The UTC time when the cluster was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// The metric ID of the cluster resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_id: Option<String>,
    /// Status of the cluster resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A single dedicated Event Hubs cluster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Cluster {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Resource location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Resource tags.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    /// Properties of the cluster SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<ClusterSku>,
    /// Cluster properties.
    #[serde(default)]
    pub properties: ClusterProperties,
}

/// A region where clusters can be created.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AvailableCluster {
    /// Location fo the available cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// The regions where clusters can be created.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AvailableClustersList {
    /// The available clusters.
    #[serde(default)]
    pub value: Vec<AvailableCluster>,
}

/// Quota settings of a dedicated cluster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClusterQuotaConfigurationProperties {
    /// All possible cluster settings, as key/value pairs.
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

/// The ID of a namespace in a cluster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EhNamespaceIdContainer {
    /// ID of the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// The namespaces that belong to a cluster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EhNamespaceIdListResult {
    /// Namespace IDs.
    #[serde(default)]
    pub value: Vec<EhNamespaceIdContainer>,
}

/// Properties of an Event Hubs namespace.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EhNamespaceProperties {
    /// Provisioning state of the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
    /// The time the namespace was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// The time the namespace was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Endpoint you can use to perform Service Bus operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_bus_endpoint: Option<String>,
    /// Cluster ARM ID of the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_arm_id: Option<String>,
    /// Identifier for Azure Insights metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_id: Option<String>,
    /// Whether auto-inflate is enabled for the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_inflate_enabled: Option<bool>,
    /// Upper limit of throughput units when auto-inflate is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_throughput_units: Option<i32>,
    /// Whether Kafka is enabled for the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kafka_enabled: Option<bool>,
    /// Whether zone redundancy is enabled for the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_redundant: Option<bool>,
}

/// A single Event Hubs namespace.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EhNamespace {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Resource location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Resource tags.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    /// Properties of the SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    /// Namespace properties.
    #[serde(default)]
    pub properties: EhNamespaceProperties,
}

/// Properties of an IP filter rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpFilterRuleProperties {
    /// IP mask.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_mask: Option<String>,
    /// The IP filter action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<IpAction>,
    /// IP filter name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_name: Option<String>,
}

/// A single IP filter rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct IpFilterRule {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Rule properties.
    #[serde(default)]
    pub properties: IpFilterRuleProperties,
}

/// Properties of a virtual network rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetworkRuleProperties {
    /// ARM ID of the virtual network subnet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_network_subnet_id: Option<String>,
}

/// A single virtual network rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VirtualNetworkRule {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Rule properties.
    #[serde(default)]
    pub properties: VirtualNetworkRuleProperties,
}

/// A subnet reference.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Subnet {
    /// Resource ID of the virtual network subnet.
    pub id: String,
}

/// A virtual network rule inside a network rule set.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NwRuleSetVirtualNetworkRules {
    /// Subnet properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<Subnet>,
    /// Whether to ignore a missing virtual network service endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_missing_vnet_service_endpoint: Option<bool>,
}

/// An IP rule inside a network rule set.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NwRuleSetIpRules {
    /// IP mask.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_mask: Option<String>,
    /// The IP filter action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<NetworkRuleIpAction>,
}

/// Properties of a network rule set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRuleSetProperties {
    /// Default action for the rule set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<DefaultAction>,
    /// Virtual network rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtual_network_rules: Vec<NwRuleSetVirtualNetworkRules>,
    /// IP rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_rules: Vec<NwRuleSetIpRules>,
}

/// The network rule set of a namespace.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NetworkRuleSet {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Rule set properties.
    #[serde(default)]
    pub properties: NetworkRuleSetProperties,
}

/// Properties of an event hub.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventhubProperties {
    /// Current number of shards on the event hub.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partition_ids: Vec<String>,
    /// The time the event hub was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// The time the event hub was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Number of days to retain the events for this event hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_retention_in_days: Option<i64>,
    /// Number of partitions created for the event hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_count: Option<i64>,
    /// Status of the event hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}

/// A single event hub.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Eventhub {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Event hub properties.
    #[serde(default)]
    pub properties: EventhubProperties,
}

/// Properties of a consumer group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerGroupProperties {
    /// The time the consumer group was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// The time the consumer group was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// User metadata stored with the consumer group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<String>,
}

/// A single consumer group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ConsumerGroup {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Consumer group properties.
    #[serde(default)]
    pub properties: ConsumerGroupProperties,
}

/// Properties of an authorization rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AuthorizationRuleProperties {
    /// The rights associated with the rule.
    #[serde(default)]
    pub rights: Vec<AccessRights>,
}

/// A single authorization rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AuthorizationRule {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Authorization rule properties.
    #[serde(default)]
    pub properties: AuthorizationRuleProperties,
}

/// The connection strings and keys of an authorization rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessKeys {
    /// Primary connection string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_connection_string: Option<String>,
    /// Secondary connection string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_connection_string: Option<String>,
    /// Primary connection string of the alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_primary_connection_string: Option<String>,
    /// Secondary connection string of the alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_secondary_connection_string: Option<String>,
    /// The primary key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,
    /// The secondary key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_key: Option<String>,
    /// The name of the authorization rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
}

/// Parameters supplied to the regenerate keys operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateAccessKeyParameters {
    /// The access key to regenerate.
    pub key_type: KeyType,
    /// Optional, if the key value is provided this is set to the key type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Properties of a disaster recovery configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmDisasterRecoveryProperties {
    /// Provisioning state of the pairing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
    /// ARM id of the primary or secondary namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_namespace: Option<String>,
    /// Alternate name used when the alias and namespace names are the same.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    /// The role of this namespace in the pairing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleDisasterRecovery>,
    /// Number of entities pending replication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_replication_operations_count: Option<i64>,
}

/// A single disaster recovery configuration (alias).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArmDisasterRecovery {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Pairing properties.
    #[serde(default)]
    pub properties: ArmDisasterRecoveryProperties,
}

/// Properties of a messaging region.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingRegionsProperties {
    /// Region code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Full name of the region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// A region where a SKU is available.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MessagingRegions {
    /// Resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Resource location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Region properties.
    #[serde(default)]
    pub properties: MessagingRegionsProperties,
}

/// Parameters supplied to the check name availability operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CheckNameAvailabilityParameter {
    /// Name to check the namespace name availability.
    pub name: String,
}

/// The result of the check name availability operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckNameAvailabilityResult {
    /// The detailed info regarding the reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Whether the name is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_available: Option<bool>,
    /// The reason the name is unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UnavailableReason>,
}

/// The object that represents the operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OperationDisplay {
    /// Service provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Resource on which the operation is performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Operation type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

/// An Event Hubs REST API operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Operation {
    /// Operation name: `{provider}/{resource}/{operation}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// How the operation is displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<OperationDisplay>,
}

model_set! {
    "2018-01-01-preview";
    AccessKeys,
    ArmDisasterRecovery,
    AuthorizationRule,
    AvailableClustersList,
    CheckNameAvailabilityParameter,
    CheckNameAvailabilityResult,
    Cluster,
    ClusterQuotaConfigurationProperties,
    ConsumerGroup,
    EhNamespace => "EHNamespace",
    EhNamespaceIdListResult => "EHNamespaceIdListResult",
    Eventhub,
    IpFilterRule,
    MessagingRegions,
    NetworkRuleSet,
    Operation,
    RegenerateAccessKeyParameters,
    VirtualNetworkRule,
}
