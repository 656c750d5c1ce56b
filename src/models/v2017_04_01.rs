//! Models for API version `2017-04-01`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The SKU name (and billing tier) of a namespace.
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
    /// The Event Hubs throughput units, value should be 0 to 20 throughput units.
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

/// The encoding format of capture descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum EncodingCaptureDescription {
    Avro,
    AvroDeflate,
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
}

/// A single Event Hubs namespace.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
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

/// Properties of the storage destination for captured events.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationProperties {
    /// Resource id of the storage account to be used to create the blobs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_account_resource_id: Option<String>,
    /// Blob container name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_container: Option<String>,
    /// Blob naming convention for archive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_name_format: Option<String>,
}

/// Capture storage details.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Destination {
    /// Name for capture destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Destination properties.
    #[serde(default)]
    pub properties: DestinationProperties,
}

/// Properties to configure capture for an event hub.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureDescription {
    /// Whether capture is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The encoding format of the capture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<EncodingCaptureDescription>,
    /// The time window in seconds between captures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_in_seconds: Option<i32>,
    /// The size window in bytes between captures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_limit_in_bytes: Option<i32>,
    /// Where captured events are stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    /// Whether empty archives are skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_empty_archives: Option<bool>,
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
    /// Capture configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_description: Option<CaptureDescription>,
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
    /// Primary connection string of the alias, if a disaster recovery pairing exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_primary_connection_string: Option<String>,
    /// Secondary connection string of the alias, if a disaster recovery pairing exists.
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
    /// Resource tags.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
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
    "2017-04-01";
    AccessKeys,
    ArmDisasterRecovery,
    AuthorizationRule,
    CheckNameAvailabilityParameter,
    CheckNameAvailabilityResult,
    ConsumerGroup,
    EhNamespace => "EHNamespace",
    Eventhub,
    MessagingRegions,
    Operation,
    RegenerateAccessKeyParameters,
}
