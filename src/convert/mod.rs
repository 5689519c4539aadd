mod collection;
mod csv;
mod json;
mod stream;

// Re-export public API
pub use self::collection::{xml_to_collection, DocumentSink, MongoSink};
pub use self::csv::xml_to_csv;
pub use self::json::xml_to_json;
pub use self::stream::StreamArray;
