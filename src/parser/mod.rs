mod attributes;
mod rows;
mod tags;

// Re-export public API
pub use attributes::attributes_to_map;
pub use rows::RowIterator;
pub use tags::parse_tags;
