//! Reference entities shown in the administration area.

pub mod defect_type;
pub mod list_page;
pub mod supplier;
pub mod tool;
pub mod types;
pub mod workplace;
