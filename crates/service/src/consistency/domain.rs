use models::{link, menu_item, page};
use serde::{Deserialize, Serialize};

/// A navigable feature: a page plus the link and menu item pointing at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub menu_item: menu_item::Model,
    pub link: link::Model,
    pub page: page::Model,
}

/// What `delete_feature` took down, including content removed by cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovedFeature {
    pub page: page::Model,
    pub menu_item: Option<menu_item::Model>,
    pub link: Option<link::Model>,
    pub texts: u64,
    pub images: u64,
}

/// Partial page edit; `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageChanges {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl PageChanges {
    pub fn is_empty(&self) -> bool { self.name.is_none() && self.url.is_none() }
}

/// Rows resolved for one feature before a write.
pub(crate) struct Triad {
    pub page: page::Model,
    pub menu_items: Vec<menu_item::Model>,
    pub links: Vec<link::Model>,
}
