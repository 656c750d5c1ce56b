//! Models for API version `2015-08-01`.
//!
//! This version predates the `EHNamespace` shape: namespaces are created from
//! [`NamespaceCreateOrUpdateParameters`] and read back as
//! [`NamespaceResource`], and every child resource carries a location.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The SKU name of a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum SkuName {
    Basic,
    Standard,
    Premium,
    /// A value added by the service after this API version.
    #[serde(untagged)]
    Other(String),
}

/// The billing tier of a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum SkuTier {
    Basic,
    Standard,
    Premium,
    /// A value added by the service after this API version.
    #[serde(untagged)]
    Other(String),
}

/// SKU parameters supplied to the create namespace operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    /// Name of this SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<SkuName>,
    /// The billing tier of this particular SKU.
    pub tier: SkuTier,
    /// The Event Hubs throughput units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
}

/// The state of a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum NamespaceState {
    Unknown,
    Creating,
    Created,
    Activating,
    Enabling,
    Active,
    Disabling,
    Disabled,
    SoftDeleting,
    SoftDeleted,
    Removing,
    Removed,
    Failed,
    /// A value added by the service after this API version.
    #[serde(untagged)]
    Other(String),
}

/// The status of an entity (event hub, consumer group).
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

/// Which key to regenerate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum Policykey {
    PrimaryKey,
    SecondaryKey,
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

/// Properties of a namespace.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceProperties {
    /// Status of the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NamespaceState>,
    /// Provisioning state of the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
    /// The time the namespace was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// The time the namespace was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Endpoint for Service Bus operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_bus_endpoint: Option<String>,
    /// Identifier for Azure Insights metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_id: Option<String>,
    /// Whether this namespace is to be enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Parameters supplied to the create or update namespace operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceCreateOrUpdateParameters {
    /// Namespace location.
    pub location: String,
    /// SKU parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    /// Namespace tags.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    /// Namespace properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<NamespaceProperties>,
}

/// A namespace as returned by the service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceResource {
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
    pub location: String,
    /// Resource tags.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    /// SKU of the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    /// Namespace properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<NamespaceProperties>,
}

/// Parameters supplied to the patch namespace operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceUpdateParameter {
    /// Resource tags.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    /// The SKU of the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
}

/// Properties of an event hub.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHubProperties {
    /// The time the event hub was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Number of days to retain the events for this event hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_retention_in_days: Option<i64>,
    /// Number of partitions created for the event hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_count: Option<i64>,
    /// Current number of shards on the event hub.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partition_ids: Vec<String>,
    /// Enumerates the possible values for the status of the event hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
    /// The exact time the message was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Parameters supplied to the create or update event hub operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHubCreateOrUpdateParameters {
    /// Location of the resource.
    pub location: String,
    /// Name of the event hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Event hub properties.
    #[serde(default)]
    pub properties: EventHubProperties,
}

/// An event hub as returned by the service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHubResource {
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
    /// Event hub properties.
    #[serde(default)]
    pub properties: EventHubProperties,
}

/// Properties of a consumer group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerGroupProperties {
    /// The time the consumer group was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// The path of the event hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_hub_path: Option<String>,
    /// The time the consumer group was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// User metadata stored with the consumer group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<String>,
}

/// Parameters supplied to the create or update consumer group operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerGroupCreateOrUpdateParameters {
    /// Location of the resource.
    pub location: String,
    /// Name of the consumer group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Consumer group properties.
    #[serde(default)]
    pub properties: ConsumerGroupProperties,
}

/// A consumer group as returned by the service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerGroupResource {
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
    /// Consumer group properties.
    #[serde(default)]
    pub properties: ConsumerGroupProperties,
}

/// Properties of a shared access authorization rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedAccessAuthorizationRuleProperties {
    /// The rights associated with the rule.
    #[serde(default)]
    pub rights: Vec<AccessRights>,
}

/// Parameters supplied to the create or update authorization rule operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedAccessAuthorizationRuleCreateOrUpdateParameters {
    /// Data center location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Name of the authorization rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Authorization rule properties.
    #[serde(default)]
    pub properties: SharedAccessAuthorizationRuleProperties,
}

/// An authorization rule as returned by the service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedAccessAuthorizationRuleResource {
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
    /// Authorization rule properties.
    #[serde(default)]
    pub properties: SharedAccessAuthorizationRuleProperties,
}

/// The connection strings and keys of an authorization rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceListKeys {
    /// Primary connection string of the created namespace authorization rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_connection_string: Option<String>,
    /// Secondary connection string of the created namespace authorization rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_connection_string: Option<String>,
    /// The primary key of the authorization rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,
    /// The secondary key of the authorization rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_key: Option<String>,
    /// A string that describes the authorization rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
}

/// Parameters supplied to the regenerate keys operation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RegenerateKeysParameters {
    /// The key to regenerate.
    pub policykey: Policykey,
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
    /// Whether the name is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_available: Option<bool>,
    /// The reason the name is unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UnavailableReason>,
    /// The detailed info regarding the reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
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
    "2015-08-01";
    CheckNameAvailabilityParameter,
    CheckNameAvailabilityResult,
    ConsumerGroupCreateOrUpdateParameters,
    ConsumerGroupResource,
    EventHubCreateOrUpdateParameters,
    EventHubResource,
    NamespaceCreateOrUpdateParameters,
    NamespaceResource,
    NamespaceUpdateParameter,
    Operation,
    RegenerateKeysParameters,
    ResourceListKeys,
    SharedAccessAuthorizationRuleCreateOrUpdateParameters,
    SharedAccessAuthorizationRuleResource,
}
