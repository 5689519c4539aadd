//! sedump library
//!
//! Streaming conversion of XML data dumps (the kind Q&A and forum sites
//! publish as one root element wrapping millions of attribute-carrying
//! `<row/>` siblings) into JSON, CSV and MongoDB outputs. Keep the crate
//! root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle different aspects of
//! the conversion pipeline:
//!
//! - [`parser`] - Streams records out of dump files ([`parser::RowIterator`]),
//!   extracts attributes from isolated fragments, and parses compound tag strings
//! - [`convert`] - Format sinks that drive the row stream into JSON, CSV,
//!   or a document collection
//! - [`chunk`] - Fixed-size batching used for bulk database writes
//! - [`models`] - The flat string-to-string [`models::Record`] every
//!   component exchanges
//! - [`errors`] - Error types used throughout the library
//!
//! ## Example Usage
//!
//! File-to-file conversions are plain synchronous calls; all parameters are
//! direct arguments:
//!
//! ```no_run
//! use sedump::convert::{xml_to_csv, xml_to_json};
//! use std::path::Path;
//!
//! # fn example() -> sedump::errors::AppResult<()> {
//! xml_to_json(Path::new("Posts.xml"), Path::new("Posts.json"))?;
//! xml_to_csv(
//!     Path::new("Users.xml"),
//!     Path::new("Users.csv"),
//!     &["Id", "DisplayName", "Reputation"],
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! Bulk-loading into MongoDB batches records into chunks and defers index
//! creation until after the load:
//!
//! ```no_run
//! use sedump::convert::{xml_to_collection, MongoSink};
//! use std::path::Path;
//!
//! # async fn load(db: &mongodb::Database) -> sedump::errors::AppResult<()> {
//! let sink = MongoSink::new(db, "posts");
//! xml_to_collection(Path::new("Posts.xml"), &sink, 1000, Some("Id")).await?;
//! # Ok(())
//! # }
//! ```

pub mod chunk;
pub mod convert;
pub mod errors;
pub mod models;
pub mod parser;
