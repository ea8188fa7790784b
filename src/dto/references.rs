use serde::{Deserialize, Deserializer, Serialize, de};

use crate::domain::types::PageNumber;

/// Query string accepted by paged listings.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// Page number requested by the user interface.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<usize>,
}

/// Treats an empty `?page=` the same as an omitted one.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

impl PageParams {
    /// Requested page, the first one when the parameter is omitted.
    pub fn page(&self) -> PageNumber {
        PageNumber::from_param(self.page)
    }
}

/// A view identifier paired with the model it is rendered with.
#[derive(Debug)]
pub struct ViewBinding<M> {
    /// Template name of the view.
    pub view: &'static str,
    pub model: Option<M>,
}

impl<M: Serialize> ViewBinding<M> {
    pub fn new(view: &'static str, model: M) -> Self {
        Self {
            view,
            model: Some(model),
        }
    }
}

impl ViewBinding<()> {
    /// A view rendered without any data.
    pub fn empty(view: &'static str) -> Self {
        Self { view, model: None }
    }
}
