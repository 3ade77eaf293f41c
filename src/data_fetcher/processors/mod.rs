pub mod html_table;
pub mod normalize;

pub use html_table::extract_first_table;
pub use normalize::normalize;
