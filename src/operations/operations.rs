//! The operations the resource provider exposes.

use super::{OPERATIONS, OperationDef, OperationTable};

const LIST: &[OperationDef] =
    &[OperationDef::get("list", "/providers/Microsoft.EventHub/operations").paged("Operation")];

/// Available REST operations at `2015-08-01`.
pub static V2015_08_01: OperationTable = OperationTable {
    group: OPERATIONS,
    api_version: "2015-08-01",
    operations: LIST,
};

/// Available REST operations at `2017-04-01`.
pub static V2017_04_01: OperationTable = OperationTable {
    group: OPERATIONS,
    api_version: "2017-04-01",
    operations: LIST,
};

/// Available REST operations at `2018-01-01-preview`.
pub static V2018_01_01_PREVIEW: OperationTable = OperationTable {
    group: OPERATIONS,
    api_version: "2018-01-01-preview",
    operations: LIST,
};
