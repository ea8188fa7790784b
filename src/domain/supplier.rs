use serde::{Deserialize, Serialize};

use crate::domain::types::{ReferenceName, SupplierId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: ReferenceName,
    #[serde(default)]
    pub contact: Option<String>,
}
