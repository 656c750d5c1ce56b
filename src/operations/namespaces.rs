//! Namespace operations: CRUD, authorization rules and keys, name
//! availability, and (in the preview) network rules.

use super::{NAMESPACES, OperationDef, OperationTable};

/// Namespaces at `2015-08-01`.
pub static V2015_08_01: OperationTable = OperationTable {
    group: NAMESPACES,
    api_version: "2015-08-01",
    operations: &[
        OperationDef::post(
            "check_name_availability",
            subscription_path!("/CheckNameAvailability"),
        )
        .body("CheckNameAvailabilityParameter")
        .returns("CheckNameAvailabilityResult"),
        OperationDef::get("list", subscription_path!("/namespaces")).paged("NamespaceResource"),
        OperationDef::get("list_by_resource_group", resource_group_path!("/namespaces"))
            .paged("NamespaceResource"),
        OperationDef::put("create_or_update", namespace_path!(""))
            .body("NamespaceCreateOrUpdateParameters")
            .returns("NamespaceResource"),
        OperationDef::delete("delete", namespace_path!("")),
        OperationDef::get("get", namespace_path!("")).returns("NamespaceResource"),
        OperationDef::patch("update", namespace_path!(""))
            .body("NamespaceUpdateParameter")
            .returns("NamespaceResource"),
        OperationDef::get(
            "list_authorization_rules",
            namespace_path!("/AuthorizationRules"),
        )
        .paged("SharedAccessAuthorizationRuleResource"),
        OperationDef::put(
            "create_or_update_authorization_rule",
            namespace_path!("/AuthorizationRules/{authorizationRuleName}"),
        )
        .body("SharedAccessAuthorizationRuleCreateOrUpdateParameters")
        .returns("SharedAccessAuthorizationRuleResource"),
        OperationDef::delete(
            "delete_authorization_rule",
            namespace_path!("/AuthorizationRules/{authorizationRuleName}"),
        ),
        OperationDef::get(
            "get_authorization_rule",
            namespace_path!("/AuthorizationRules/{authorizationRuleName}"),
        )
        .returns("SharedAccessAuthorizationRuleResource"),
        OperationDef::post(
            "list_keys",
            namespace_path!("/AuthorizationRules/{authorizationRuleName}/listKeys"),
        )
        .returns("ResourceListKeys"),
        OperationDef::post(
            "regenerate_keys",
            namespace_path!("/AuthorizationRules/{authorizationRuleName}/regenerateKeys"),
        )
        .body("RegenerateKeysParameters")
        .returns("ResourceListKeys"),
    ],
};

/// Namespaces at `2017-04-01`.
pub static V2017_04_01: OperationTable = OperationTable {
    group: NAMESPACES,
    api_version: "2017-04-01",
    operations: &[
        OperationDef::post(
            "check_name_availability",
            subscription_path!("/checkNameAvailability"),
        )
        .body("CheckNameAvailabilityParameter")
        .returns("CheckNameAvailabilityResult"),
        OperationDef::get("list", subscription_path!("/namespaces")).paged("EHNamespace"),
        OperationDef::get("list_by_resource_group", resource_group_path!("/namespaces"))
            .paged("EHNamespace"),
        OperationDef::put("create_or_update", namespace_path!(""))
            .body("EHNamespace")
            .returns("EHNamespace"),
        OperationDef::delete("delete", namespace_path!("")),
        OperationDef::get("get", namespace_path!("")).returns("EHNamespace"),
        OperationDef::patch("update", namespace_path!(""))
            .body("EHNamespace")
            .returns("EHNamespace"),
        OperationDef::get(
            "list_authorization_rules",
            namespace_path!("/authorizationRules"),
        )
        .paged("AuthorizationRule"),
        OperationDef::put(
            "create_or_update_authorization_rule",
            namespace_path!("/authorizationRules/{authorizationRuleName}"),
        )
        .body("AuthorizationRule")
        .returns("AuthorizationRule"),
        OperationDef::delete(
            "delete_authorization_rule",
            namespace_path!("/authorizationRules/{authorizationRuleName}"),
        ),
        OperationDef::get(
            "get_authorization_rule",
            namespace_path!("/authorizationRules/{authorizationRuleName}"),
        )
        .returns("AuthorizationRule"),
        OperationDef::post(
            "list_keys",
            namespace_path!("/authorizationRules/{authorizationRuleName}/listKeys"),
        )
        .returns("AccessKeys"),
        OperationDef::post(
            "regenerate_keys",
            namespace_path!("/authorizationRules/{authorizationRuleName}/regenerateKeys"),
        )
        .body("RegenerateAccessKeyParameters")
        .returns("AccessKeys"),
    ],
};

/// Namespaces at `2018-01-01-preview`.
pub static V2018_01_01_PREVIEW: OperationTable = OperationTable {
    group: NAMESPACES,
    api_version: "2018-01-01-preview",
    operations: &[
        OperationDef::post(
            "check_name_availability",
            subscription_path!("/checkNameAvailability"),
        )
        .body("CheckNameAvailabilityParameter")
        .returns("CheckNameAvailabilityResult"),
        OperationDef::get("list", subscription_path!("/namespaces")).paged("EHNamespace"),
        OperationDef::get("list_by_resource_group", resource_group_path!("/namespaces"))
            .paged("EHNamespace"),
        OperationDef::put("create_or_update", namespace_path!(""))
            .body("EHNamespace")
            .returns("EHNamespace"),
        OperationDef::delete("delete", namespace_path!("")),
        OperationDef::get("get", namespace_path!("")).returns("EHNamespace"),
        OperationDef::patch("update", namespace_path!(""))
            .body("EHNamespace")
            .returns("EHNamespace"),
        OperationDef::get(
            "list_authorization_rules",
            namespace_path!("/authorizationRules"),
        )
        .paged("AuthorizationRule"),
        OperationDef::put(
            "create_or_update_authorization_rule",
            namespace_path!("/authorizationRules/{authorizationRuleName}"),
        )
        .body("AuthorizationRule")
        .returns("AuthorizationRule"),
        OperationDef::delete(
            "delete_authorization_rule",
            namespace_path!("/authorizationRules/{authorizationRuleName}"),
        ),
        OperationDef::get(
            "get_authorization_rule",
            namespace_path!("/authorizationRules/{authorizationRuleName}"),
        )
        .returns("AuthorizationRule"),
        OperationDef::post(
            "list_keys",
            namespace_path!("/authorizationRules/{authorizationRuleName}/listKeys"),
        )
        .returns("AccessKeys"),
        OperationDef::post(
            "regenerate_keys",
            namespace_path!("/authorizationRules/{authorizationRuleName}/regenerateKeys"),
        )
        .body("RegenerateAccessKeyParameters")
        .returns("AccessKeys"),
        OperationDef::get("list_ip_filter_rules", namespace_path!("/ipfilterrules"))
            .paged("IpFilterRule"),
        OperationDef::put(
            "create_or_update_ip_filter_rule",
            namespace_path!("/ipfilterrules/{ipFilterRuleName}"),
        )
        .body("IpFilterRule")
        .returns("IpFilterRule"),
        OperationDef::delete(
            "delete_ip_filter_rule",
            namespace_path!("/ipfilterrules/{ipFilterRuleName}"),
        ),
        OperationDef::get(
            "get_ip_filter_rule",
            namespace_path!("/ipfilterrules/{ipFilterRuleName}"),
        )
        .returns("IpFilterRule"),
        OperationDef::get(
            "list_virtual_network_rules",
            namespace_path!("/virtualnetworkrules"),
        )
        .paged("VirtualNetworkRule"),
        OperationDef::put(
            "create_or_update_virtual_network_rule",
            namespace_path!("/virtualnetworkrules/{virtualNetworkRuleName}"),
        )
        .body("VirtualNetworkRule")
        .returns("VirtualNetworkRule"),
        OperationDef::delete(
            "delete_virtual_network_rule",
            namespace_path!("/virtualnetworkrules/{virtualNetworkRuleName}"),
        ),
        OperationDef::get(
            "get_virtual_network_rule",
            namespace_path!("/virtualnetworkrules/{virtualNetworkRuleName}"),
        )
        .returns("VirtualNetworkRule"),
        OperationDef::put(
            "create_or_update_network_rule_set",
            namespace_path!("/networkRuleSets/default"),
        )
        .body("NetworkRuleSet")
        .returns("NetworkRuleSet"),
        OperationDef::get(
            "get_network_rule_set",
            namespace_path!("/networkRuleSets/default"),
        )
        .returns("NetworkRuleSet"),
    ],
};
