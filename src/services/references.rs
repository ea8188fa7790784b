//! Services loading the reference listings of the administration area.
//!
//! Each function builds exactly one query object and dispatches it through the
//! provided transport. The result is returned untouched so the route can bind
//! it to its view.

use crate::client::{QueryTransport, dispatch};
use crate::domain::defect_type::DefectType;
use crate::domain::list_page::ListPage;
use crate::domain::supplier::Supplier;
use crate::domain::tool::Tool;
use crate::domain::types::PageNumber;
use crate::domain::workplace::Workplace;
use crate::queries::{
    ListDefectTypesQuery, ListSuppliersQuery, ListToolsQuery, ListWorkplacesQuery,
};
use crate::services::ServiceResult;

/// Loads one page of the tools listing.
pub fn list_tools<T>(transport: &T, page: PageNumber) -> ServiceResult<ListPage<Tool>>
where
    T: QueryTransport + ?Sized,
{
    let tools = dispatch(transport, &ListToolsQuery::new(page)).map_err(|err| {
        log::error!("Failed to load tools page {page}: {err}");
        err
    })?;

    Ok(tools)
}

/// Loads every supplier.
pub fn list_suppliers<T>(transport: &T) -> ServiceResult<Vec<Supplier>>
where
    T: QueryTransport + ?Sized,
{
    let suppliers = dispatch(transport, &ListSuppliersQuery::default()).map_err(|err| {
        log::error!("Failed to load suppliers: {err}");
        err
    })?;

    Ok(suppliers)
}

/// Loads every defect type.
pub fn list_defect_types<T>(transport: &T) -> ServiceResult<Vec<DefectType>>
where
    T: QueryTransport + ?Sized,
{
    let defect_types = dispatch(transport, &ListDefectTypesQuery::default()).map_err(|err| {
        log::error!("Failed to load defect types: {err}");
        err
    })?;

    Ok(defect_types)
}

/// Loads one page of the workplaces listing.
pub fn list_workplaces<T>(transport: &T, page: PageNumber) -> ServiceResult<ListPage<Workplace>>
where
    T: QueryTransport + ?Sized,
{
    let workplaces = dispatch(transport, &ListWorkplacesQuery::new(page)).map_err(|err| {
        log::error!("Failed to load workplaces page {page}: {err}");
        err
    })?;

    Ok(workplaces)
}
