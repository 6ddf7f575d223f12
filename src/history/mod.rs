//! Pages for looking back at earlier months.

mod index_page;
mod month_page;

pub use index_page::get_history_page;
pub use month_page::get_history_month_page;
