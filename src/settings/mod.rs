//! Income, savings goal and fixed costs, and the page for editing them.

mod domain;
mod page;
mod store;

pub use domain::{FixedCost, Settings};
pub use page::{get_settings_page, update_settings_endpoint};
pub use store::{InMemorySettingsStore, JsonSettingsStore, SettingsStore};
