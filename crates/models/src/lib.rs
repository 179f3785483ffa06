//! Entities of the content schema and their storage primitives.
//!
//! Referential rules are declared twice and must agree: as foreign-key
//! actions in the `migration` crate (enforced by the engine) and as
//! `on_delete` on each child's `RelationDef`.
//!
//! | child.column        | parent  | on delete |
//! |---------------------|---------|-----------|
//! | menu_item.menu_id   | menu    | cascade   |
//! | link.menu_id        | menu    | cascade   |
//! | menu_item.page_id   | page    | cascade   |
//! | link.page_id        | page    | cascade   |
//! | text.page_id        | page    | cascade   |
//! | image.page_id       | page    | cascade   |
//! | text.section_id     | section | set null  |
//! | image.section_id    | section | set null  |

pub mod errors;
pub mod db;
pub mod slug;
pub mod prelude;
mod timestamps;

pub mod page;
pub mod menu;
pub mod menu_item;
pub mod link;
pub mod section;
pub mod text;
pub mod image;

#[cfg(test)]
mod tests;
