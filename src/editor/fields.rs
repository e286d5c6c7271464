use tracing::warn;

use crate::editor::record::{ButtonRecord, Kind};

/// Record separator of the three flat-text fields. A field value containing
/// the sequence itself corrupts the flattened encoding; see
/// [`FieldSet::from_records`].
pub const DELIMITER: &str = "|||";

/// The three delimiter-joined fields the surrounding form submits: one
/// column per record field, flattening the button table into three parallel
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    pub texts: String,
    pub targets: String,
    pub kinds: String,
}

fn split(field: &str) -> Vec<&str> {
    if field.is_empty() {
        Vec::new()
    } else {
        field.split(DELIMITER).collect()
    }
}

impl FieldSet {
    pub fn new(
        texts: impl Into<String>,
        targets: impl Into<String>,
        kinds: impl Into<String>,
    ) -> Self {
        Self {
            texts: texts.into(),
            targets: targets.into(),
            kinds: kinds.into(),
        }
    }

    /// Reassemble records from the three columns. The columns may disagree
    /// on length; missing text/target slots become empty strings and
    /// missing or unknown kinds fall back to the default. Positions where
    /// all three slots are empty are dropped entirely.
    pub fn records(&self) -> Vec<ButtonRecord> {
        let texts = split(&self.texts);
        let targets = split(&self.targets);
        let kinds = split(&self.kinds);

        let max = texts.len().max(targets.len()).max(kinds.len());

        (0..max)
            .filter_map(|index| {
                let text = texts.get(index).copied().unwrap_or_default();
                let target = targets.get(index).copied().unwrap_or_default();
                let kind = kinds.get(index).copied().unwrap_or_default();

                (!text.is_empty() || !target.is_empty() || !kind.is_empty())
                    .then(|| ButtonRecord::new(text, target, Kind::parse_or_default(kind)))
            })
            .collect()
    }

    /// Flatten records into the three columns, in record order. Incomplete
    /// records are omitted from all three. The delimiter is not escaped; a
    /// collision is logged and written through as-is.
    pub fn from_records<'records>(
        records: impl IntoIterator<Item = &'records ButtonRecord>,
    ) -> Self {
        let mut texts = Vec::new();
        let mut targets = Vec::new();
        let mut kinds = Vec::new();

        for record in records {
            if !record.is_complete() {
                continue;
            }

            if record.text().contains(DELIMITER) || record.target().contains(DELIMITER) {
                warn!(
                    text = record.text(),
                    target = record.target(),
                    "button field contains the record delimiter, encoding will not round-trip",
                );
            }

            texts.push(record.text());
            targets.push(record.target());
            kinds.push(record.kind().as_str());
        }

        Self {
            texts: texts.join(DELIMITER),
            targets: targets.join(DELIMITER),
            kinds: kinds.join(DELIMITER),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{FieldSet, DELIMITER};
    use crate::editor::record::{ButtonRecord, Kind};

    fn column_len(column: &str) -> usize {
        super::split(column).len()
    }

    #[test]
    fn empty_fields_yield_no_records() {
        assert!(FieldSet::default().records().is_empty());
    }

    #[test]
    fn parses_parallel_columns_in_order() {
        let fields = FieldSet::new("A|||B", "u1|||u2", "url|||callback");
        let records = fields.records();

        assert_eq!(
            records,
            vec![
                ButtonRecord::new("A", "u1", Kind::Url),
                ButtonRecord::new("B", "u2", Kind::Callback),
            ],
        );
    }

    #[test]
    fn short_columns_default_missing_slots() {
        let fields = FieldSet::new("A|||B", "u1", "");
        let records = fields.records();

        assert_eq!(
            records,
            vec![
                ButtonRecord::new("A", "u1", Kind::Url),
                ButtonRecord::new("B", "", Kind::Url),
            ],
        );
    }

    #[test]
    fn all_empty_positions_are_dropped() {
        let fields = FieldSet::new("A||||||B", "|||", "");
        let records = fields.records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text(), "A");
        assert_eq!(records[1].text(), "B");
    }

    #[test]
    fn incomplete_records_are_omitted_from_every_column() {
        let records = vec![
            ButtonRecord::new("A", "u1", Kind::Url),
            ButtonRecord::new("phantom", "", Kind::Callback),
            ButtonRecord::new("B", "u2", Kind::Callback),
        ];

        let fields = FieldSet::from_records(&records);

        assert_eq!(fields, FieldSet::new("A|||B", "u1|||u2", "url|||callback"));
    }

    #[test]
    fn columns_stay_parallel() {
        let records = vec![
            ButtonRecord::new("A", "u1", Kind::Url),
            ButtonRecord::new("", "u2", Kind::Url),
            ButtonRecord::new("C", "u3", Kind::Callback),
        ];

        let fields = FieldSet::from_records(&records);

        assert_eq!(column_len(&fields.texts), column_len(&fields.targets));
        assert_eq!(column_len(&fields.targets), column_len(&fields.kinds));
    }

    #[test]
    fn no_records_serialize_to_empty_strings() {
        assert_eq!(
            FieldSet::from_records(std::iter::empty::<&ButtonRecord>()),
            FieldSet::default(),
        );
    }

    #[test]
    fn round_trips_complete_triples() {
        let fields = FieldSet::new(
            "Docs|||Vote",
            "https://example.com|||vote:42",
            "url|||callback",
        );

        assert_eq!(FieldSet::from_records(&fields.records()), fields);
    }

    #[test]
    fn delimiter_collision_is_written_through() {
        let record = ButtonRecord::new(format!("A{DELIMITER}B"), "u1", Kind::Url);
        let fields = FieldSet::from_records([&record]);

        // not escaped, the reassembled columns disagree with the source
        assert_eq!(fields.texts, "A|||B");
        assert_eq!(fields.records().len(), 2);
    }
}
