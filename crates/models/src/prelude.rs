pub use super::image::Entity as Image;
pub use super::link::Entity as Link;
pub use super::menu::Entity as Menu;
pub use super::menu_item::Entity as MenuItem;
pub use super::page::Entity as Page;
pub use super::section::Entity as Section;
pub use super::text::Entity as Text;
