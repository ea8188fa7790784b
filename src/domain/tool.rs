use serde::{Deserialize, Serialize};

use crate::domain::types::{ReferenceName, ToolId};

/// Tool registered in the warehouse and available for issuance.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    pub id: ToolId,
    /// Inventory number stamped on the tool.
    pub inventory_number: String,
    pub name: ReferenceName,
    /// Name of the supplier the tool was purchased from.
    #[serde(default)]
    pub supplier: Option<String>,
    /// Units currently in stock.
    #[serde(default)]
    pub quantity: u32,
}
