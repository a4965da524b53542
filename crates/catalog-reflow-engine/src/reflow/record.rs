use serde::{Deserialize, Serialize};
use uuid::{Uuid, uuid};

/// Namespace for content-addressed record identifiers:
/// `uuid5(DNS, "catalog-reflow")`.
///
/// Re-processing identical input must yield identical identifiers across
/// runs and platforms, so records can be de-duplicated between runs.
pub const RECORD_NAMESPACE: Uuid = uuid!("3ba2226e-233d-5412-9965-4dfade99c96d");

/// Pass-through metadata threaded with the machine.
///
/// The machine copies it into each record at flush time and never mutates it;
/// page and number sequencing are driver concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    pub entry_type: String,
    pub volume: u32,
    /// Part designations are not always numeric ("1A", "1B", ...), so this
    /// stays a string.
    pub part: String,
    pub number: u32,
    pub page: u32,
}

impl Default for EntryMeta {
    fn default() -> Self {
        Self {
            entry_type: "ENTRY".to_string(),
            volume: 1,
            part: "1".to_string(),
            number: 1,
            page: 1,
        }
    }
}

/// Content-addressed identifier: UUIDv5 over the entry type and the fully
/// assembled entry text.
pub fn record_id(entry_type: &str, text: &str) -> Uuid {
    let name = format!("{entry_type}\t{text}");
    Uuid::new_v5(&RECORD_NAMESPACE, name.as_bytes())
}

/// One reflowed catalog entry, ready for the output sink.
///
/// Write-once: built at flush time and consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: Uuid,
    pub meta: EntryMeta,
    /// The assembled entry text, physical lines joined with single spaces.
    pub text: String,
}

impl Record {
    pub fn new(meta: &EntryMeta, text: String) -> Self {
        let id = record_id(&meta.entry_type, &text);
        Self {
            id,
            meta: meta.clone(),
            text,
        }
    }

    /// Renders the record as one tab-separated line: identifier, the four
    /// metadata fields in `order`, then the assembled text, newline
    /// terminated.
    pub fn to_tsv(&self, order: &FieldOrder) -> String {
        let mut fields = Vec::with_capacity(order.0.len() + 2);
        fields.push(self.id.to_string());
        for field in &order.0 {
            fields.push(match field {
                MetaField::Volume => self.meta.volume.to_string(),
                MetaField::Part => self.meta.part.clone(),
                MetaField::Number => self.meta.number.to_string(),
                MetaField::Page => self.meta.page.to_string(),
            });
        }
        fields.push(self.text.clone());

        let mut line = fields.join("\t");
        line.push('\n');
        line
    }
}

/// One of the four pass-through metadata columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaField {
    Volume,
    Part,
    Number,
    Page,
}

/// Column order for the metadata fields in emitted records.
///
/// The reference fixtures cannot distinguish an order (every sample value is
/// equal), so the order is a configuration point rather than a constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldOrder(pub Vec<MetaField>);

impl Default for FieldOrder {
    fn default() -> Self {
        Self(vec![
            MetaField::Volume,
            MetaField::Part,
            MetaField::Number,
            MetaField::Page,
        ])
    }
}
