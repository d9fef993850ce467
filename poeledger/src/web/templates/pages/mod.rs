pub(crate) mod error_page;
pub(crate) mod history_page;
pub(crate) mod price_page;
