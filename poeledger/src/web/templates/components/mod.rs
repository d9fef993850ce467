pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod price_chart;
pub(crate) mod search;

pub(crate) use search::SearchBox;
