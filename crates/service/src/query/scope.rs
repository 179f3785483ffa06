use sea_orm::{ColumnTrait, Condition};
use serde::{Deserialize, Serialize};

/// Page/section placement of a text or image row.
///
/// Both fields are matched exactly: `None` selects rows where the column is
/// NULL, it is not a wildcard. Page body content (`page_id` set, no section)
/// and shared slot content (section set, no page) are therefore disjoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentScope {
    pub page_id: Option<i32>,
    pub section_id: Option<i32>,
}

impl ContentScope {
    /// Body copy of a page, outside any named slot.
    pub fn page_body(page_id: i32) -> Self { Self { page_id: Some(page_id), section_id: None } }

    /// Slot content shared by every page, e.g. the header.
    pub fn shared(section_id: i32) -> Self { Self { page_id: None, section_id: Some(section_id) } }

    pub fn page_section(page_id: i32, section_id: i32) -> Self {
        Self { page_id: Some(page_id), section_id: Some(section_id) }
    }

    pub(crate) fn condition<C: ColumnTrait>(&self, page_col: C, section_col: C) -> Condition {
        Condition::all()
            .add(match self.page_id {
                Some(id) => page_col.eq(id),
                None => page_col.is_null(),
            })
            .add(match self.section_id {
                Some(id) => section_col.eq(id),
                None => section_col.is_null(),
            })
    }
}
