use serde::{Deserialize, Serialize};

use crate::domain::types::{DefectTypeId, ReferenceName};

/// Category used when a returned tool is written off or sent to repair.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DefectType {
    pub id: DefectTypeId,
    pub code: String,
    pub name: ReferenceName,
}
