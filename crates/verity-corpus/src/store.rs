//! Immutable in-memory corpus store.

use std::collections::{BTreeMap, HashMap};

use tracing::info;
use verity_core::errors::CorpusError;
use verity_core::traits::ICorpusSource;
use verity_core::{Record, RecordId};

/// All corpus records, in source order, with lookups by id and by position
/// inside a collection.
///
/// Built once at startup and never mutated; share it behind an `Arc`.
#[derive(Debug)]
pub struct CorpusStore {
    records: Vec<Record>,
    by_id: HashMap<RecordId, usize>,
    /// collection -> sequence -> position in `records`.
    collections: BTreeMap<u32, BTreeMap<u32, usize>>,
    fingerprint: String,
}

impl CorpusStore {
    /// Load every record from `source`.
    pub fn load(source: &dyn ICorpusSource) -> Result<Self, CorpusError> {
        let store = Self::from_records(source.load()?)?;
        info!(
            source = %source.describe(),
            records = store.len(),
            collections = store.collection_count(),
            "corpus loaded"
        );
        Ok(store)
    }

    /// Build a store from records in their canonical order.
    ///
    /// Rejects empty input, duplicate ids, and records with no text at all.
    pub fn from_records(records: Vec<Record>) -> Result<Self, CorpusError> {
        if records.is_empty() {
            return Err(CorpusError::Empty);
        }

        let mut by_id = HashMap::with_capacity(records.len());
        let mut collections: BTreeMap<u32, BTreeMap<u32, usize>> = BTreeMap::new();

        for (pos, record) in records.iter().enumerate() {
            if record.original_text.trim().is_empty() && record.translation_text.trim().is_empty()
            {
                return Err(CorpusError::InvalidRecord {
                    reason: format!("record {} has no text", record.id),
                });
            }
            if by_id.insert(record.id, pos).is_some() {
                return Err(CorpusError::DuplicateRecord {
                    record_id: record.id.to_string(),
                });
            }
            collections
                .entry(record.id.collection)
                .or_default()
                .insert(record.id.sequence, pos);
        }

        let fingerprint = fingerprint_records(&records);
        Ok(Self {
            records,
            by_id,
            collections,
            fingerprint,
        })
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.by_id.get(&id).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Records in canonical (build) order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    /// Records of `collection` whose sequence falls in `[from, to]`, ascending.
    pub fn range_in_collection(&self, collection: u32, from: u32, to: u32) -> Vec<&Record> {
        match self.collections.get(&collection) {
            Some(seqs) if from <= to => seqs
                .range(from..=to)
                .map(|(_, &pos)| &self.records[pos])
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Hex blake3 digest over ids and texts in canonical order.
    ///
    /// Any reordering, insertion, removal or text edit changes it.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn fingerprint_records(records: &[Record]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(records.len() as u64).to_le_bytes());
    for record in records {
        hasher.update(&record.id.collection.to_le_bytes());
        hasher.update(&record.id.sequence.to_le_bytes());
        for field in [
            &record.collection_name,
            &record.original_text,
            &record.translation_text,
        ] {
            hasher.update(&(field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
    }
    hasher.finalize().to_hex().to_string()
}
