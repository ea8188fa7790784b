//! Query objects describing the data a page wants from the query service.
//!
//! Every query carries a stable wire name and the type of its result. The
//! parameters are serialized as the `params` object of the request envelope.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::defect_type::DefectType;
use crate::domain::list_page::ListPage;
use crate::domain::supplier::Supplier;
use crate::domain::tool::Tool;
use crate::domain::types::PageNumber;
use crate::domain::workplace::Workplace;

/// A typed request understood by the query service.
pub trait Query: Serialize {
    /// Name used to route the query on the service side.
    const NAME: &'static str;

    /// Result produced by the service for this query.
    type Output: DeserializeOwned + Serialize;
}

/// Paged list of tools.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ListToolsQuery {
    pub page: PageNumber,
}

impl ListToolsQuery {
    pub fn new(page: PageNumber) -> Self {
        Self { page }
    }
}

impl Query for ListToolsQuery {
    const NAME: &'static str = "tools.list";
    type Output = ListPage<Tool>;
}

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ListSuppliersQuery {}

impl Query for ListSuppliersQuery {
    const NAME: &'static str = "suppliers.list";
    type Output = Vec<Supplier>;
}

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ListDefectTypesQuery {}

impl Query for ListDefectTypesQuery {
    const NAME: &'static str = "defect_types.list";
    type Output = Vec<DefectType>;
}

/// Paged list of workplaces.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ListWorkplacesQuery {
    pub page: PageNumber,
}

impl ListWorkplacesQuery {
    pub fn new(page: PageNumber) -> Self {
        Self { page }
    }
}

impl Query for ListWorkplacesQuery {
    const NAME: &'static str = "workplaces.list";
    type Output = ListPage<Workplace>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn paged_queries_serialize_page_number() {
        let params = serde_json::to_value(ListToolsQuery::new(PageNumber::new(3))).unwrap();
        assert_eq!(params, json!({ "page": 3 }));

        let params = serde_json::to_value(ListWorkplacesQuery::new(PageNumber::FIRST)).unwrap();
        assert_eq!(params, json!({ "page": 1 }));
    }

    #[test]
    fn parameterless_queries_serialize_to_empty_object() {
        assert_eq!(
            serde_json::to_value(ListSuppliersQuery::default()).unwrap(),
            json!({})
        );
        assert_eq!(
            serde_json::to_value(ListDefectTypesQuery::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn tool_page_decodes_from_service_payload() {
        let payload = json!({
            "items": [
                {"id": 1, "inventory_number": "INV-001", "name": "Drill", "supplier": "Bosch", "quantity": 4},
                {"id": 2, "inventory_number": "INV-002", "name": "Caliper"}
            ],
            "page": 2,
            "total_pages": 5
        });

        let page: <ListToolsQuery as Query>::Output = serde_json::from_value(payload).unwrap();

        assert_eq!(page.page.get(), 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].supplier, None);
        assert_eq!(page.items[1].quantity, 0);
    }
}
