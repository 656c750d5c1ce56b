//! Regions where a SKU is available.

use super::{OperationDef, OperationTable, REGIONS};

const LIST_BY_SKU: &[OperationDef] =
    &[OperationDef::get("list_by_sku", subscription_path!("/sku/{sku}/regions"))
        .paged("MessagingRegions")];

/// Regions at `2017-04-01`.
pub static V2017_04_01: OperationTable = OperationTable {
    group: REGIONS,
    api_version: "2017-04-01",
    operations: LIST_BY_SKU,
};

/// Regions at `2018-01-01-preview`.
pub static V2018_01_01_PREVIEW: OperationTable = OperationTable {
    group: REGIONS,
    api_version: "2018-01-01-preview",
    operations: LIST_BY_SKU,
};
