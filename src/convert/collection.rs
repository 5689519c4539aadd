use crate::chunk::chunks;
use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::parser::RowIterator;
use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use mongodb::options::IndexOptions;
use mongodb::{Database, IndexModel};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Destination for batched record writes.
///
/// Conversions operate on an explicitly passed sink instead of an ambient
/// connection, so the handle's lifecycle stays scoped to the caller.
#[async_trait]
pub trait DocumentSink {
    /// Inserts a batch of records in a single call.
    async fn insert_many(&self, records: Vec<Record>) -> AppResult<()>;

    /// Creates a unique ascending index on `field`.
    async fn create_unique_index(&self, field: &str) -> AppResult<()>;
}

/// [`DocumentSink`] backed by a MongoDB collection.
pub struct MongoSink {
    collection: mongodb::Collection<Document>,
}

impl MongoSink {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }
}

#[async_trait]
impl DocumentSink for MongoSink {
    async fn insert_many(&self, records: Vec<Record>) -> AppResult<()> {
        let documents: Vec<Document> = records.into_iter().map(record_to_document).collect();
        self.collection.insert_many(documents).await?;
        Ok(())
    }

    async fn create_unique_index(&self, field: &str) -> AppResult<()> {
        let mut keys = Document::new();
        keys.insert(field, 1);
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }
}

/// Field values stay strings, mirroring the record shape.
fn record_to_document(record: Record) -> Document {
    let mut document = Document::new();
    for (key, value) in record {
        document.insert(key, Bson::String(value));
    }
    document
}

/// Bulk-loads an XML dump file into a document collection.
///
/// # Workflow
///
/// 1. Streams records out of `xml_path` one element at a time
/// 2. Groups them into chunks of at most `chunk_size` records
/// 3. Issues one bulk insert per chunk against `sink`
/// 4. Optionally creates a unique ascending index on `unique_index`
///
/// The index is created only after the full load; duplicate values in the
/// indexed field surface as an error at that point, with all inserted
/// documents retained. A failed insert aborts the remaining chunks without
/// rolling back the chunks already written.
///
/// # Errors
///
/// Returns `InvalidInput` for a zero `chunk_size`; otherwise propagates
/// parse, IO and database errors unchanged.
pub async fn xml_to_collection<S: DocumentSink>(
    xml_path: &Path,
    sink: &S,
    chunk_size: usize,
    unique_index: Option<&str>,
) -> AppResult<()> {
    if chunk_size == 0 {
        return Err(AppError::InvalidInput(
            "Chunk size must be greater than 0".into(),
        ));
    }

    let start = Instant::now();
    let rows = RowIterator::open(xml_path)?;

    let mut inserted = 0usize;
    for chunk in chunks(rows, chunk_size) {
        let records: Vec<Record> = chunk.into_iter().collect::<AppResult<_>>()?;
        debug!(size = records.len(), "Inserting chunk");
        inserted += records.len();
        sink.insert_many(records).await?;
    }

    if let Some(field) = unique_index {
        sink.create_unique_index(field).await?;
    }

    info!(
        xml_file = %xml_path.display(),
        documents = inserted,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Bulk load completed"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::record_to_document;
    use crate::models::Record;
    use mongodb::bson::Bson;

    #[test]
    fn record_fields_become_string_bson_values() {
        let mut record = Record::new();
        record.insert("Id".to_string(), "42".to_string());
        record.insert("Title".to_string(), "hello".to_string());

        let document = record_to_document(record);
        assert_eq!(document.get("Id"), Some(&Bson::String("42".to_string())));
        assert_eq!(
            document.get("Title"),
            Some(&Bson::String("hello".to_string()))
        );
    }

    #[test]
    fn empty_record_becomes_empty_document() {
        assert!(record_to_document(Record::new()).is_empty());
    }
}
