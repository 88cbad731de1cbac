use crate::library::logger::interface::Logger;
use crate::record::interface::{NewRecord, Record, RecordStore};
use std::sync::{Arc, Mutex};

struct Inner {
    next_id: u64,
    records: Vec<Record>,
}

pub struct RecordStoreMemory {
    inner: Mutex<Inner>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl RecordStoreMemory {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                records: Vec::new(),
            }),
            logger: logger.with_namespace("record_store").with_namespace("memory"),
        }
    }
}

impl RecordStore for RecordStoreMemory {
    fn save(&self, record: NewRecord) -> Result<Record, Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.lock().map_err(|e| e.to_string())?;

        let saved = Record {
            id: inner.next_id,
            captured_at: record.captured_at,
            photo_png: record.photo_png,
            result_text: record.result_text,
            total: record.total,
        };
        inner.next_id += 1;

        let position = inner
            .records
            .partition_point(|r| r.captured_at <= saved.captured_at);
        inner.records.insert(position, saved.clone());

        self.logger.info(&format!(
            "saved record {} ({}円)",
            saved.id, saved.total
        ))?;
        Ok(saved)
    }

    fn list(&self) -> Result<Vec<Record>, Box<dyn std::error::Error + Send + Sync>> {
        let inner = self.inner.lock().map_err(|e| e.to_string())?;
        Ok(inner.records.clone())
    }

    fn delete(&self, id: u64) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.lock().map_err(|e| e.to_string())?;
        let before = inner.records.len();
        inner.records.retain(|r| r.id != id);
        Ok(inner.records.len() != before)
    }
}
