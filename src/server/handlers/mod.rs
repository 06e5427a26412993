pub mod categories;
pub mod quotes;
pub mod tariffs;
