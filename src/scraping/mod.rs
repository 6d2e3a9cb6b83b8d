pub mod catalog;
pub mod text;
pub mod wiki;

pub use catalog::{CatalogSource, SkillsApiClient};
pub use text::main_text;
pub use wiki::{skill_page_url, PageSource, WikiPageClient};
