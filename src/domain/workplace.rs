use serde::{Deserialize, Serialize};

use crate::domain::types::{ReferenceName, WorkplaceId};

/// Numbered workplace tools are issued to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Workplace {
    pub id: WorkplaceId,
    pub number: String,
    pub name: ReferenceName,
    #[serde(default)]
    pub department: Option<String>,
}
