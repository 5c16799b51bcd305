use verity_core::Record;

/// Text embedded for a record at index-build time.
///
/// Carries the reference and both texts so that queries naming a collection
/// or quoting the original still land on the record.
pub fn searchable_text(record: &Record) -> String {
    format!(
        "{} {}, {}: {} | {}",
        record.collection_name,
        record.id.collection,
        record.id.sequence,
        record.translation_text,
        record.original_text
    )
}

#[cfg(test)]
mod tests {
    use verity_core::RecordId;

    use super::*;

    #[test]
    fn composes_reference_translation_and_original() {
        let record = Record::new(RecordId::new(2, 183), "Al-Baqarah", "orig", "trans");
        assert_eq!(searchable_text(&record), "Al-Baqarah 2, 183: trans | orig");
    }
}
