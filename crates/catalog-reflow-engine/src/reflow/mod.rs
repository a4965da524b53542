//! # Catalog Reflow
//!
//! Two-phase reflow of indentation-structured catalog text into flat,
//! tab-separated records.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    [`LineClass`] containing local facts (blank status, indent depth,
//!    trimmed text)
//!
//! 2. **Entry Accumulation** (`machine`): an [`EntryMachine`] applies the
//!    transition table to each classified line and emits a [`Record`] when a
//!    blank-line run or a fresh unindented line confirms an entry boundary
//!
//! ## Modules
//!
//! - **`classify`**: `CatalogLineClassifier` produces `LineClass` per line
//! - **`transitions`**: the state x classification table, kept as data so the
//!   blank-run and indent heuristics are auditable in one place
//! - **`machine`**: `EntryMachine` state machine with `push`/`finish`
//! - **`record`**: content-addressed identifiers and TSV rendering
//!
//! ## Key Invariants
//!
//! - The transition table is total: no line can fault the machine
//! - The buffer is cleared and indent reset on every flush; the next content
//!   line starts a fresh accumulation
//! - A single blank line holds the entry open; two consecutive blanks (or a
//!   following unindented line) confirm the boundary
//! - Identifiers are content-addressed: identical entry type and text yield
//!   the identical identifier on every run

pub mod classify;
pub mod machine;
pub mod record;
pub mod transitions;

pub use classify::{CatalogLineClassifier, LineClass};
pub use machine::{EntryMachine, State};
pub use record::{EntryMeta, FieldOrder, MetaField, RECORD_NAMESPACE, Record, record_id};

/// Driver-level options covering the obligations the core machine leaves to
/// its caller.
#[derive(Debug, Clone, Copy)]
pub struct ReflowOptions {
    /// Advance `number` by one after each emitted record.
    pub auto_number: bool,
    /// Treat leading form feeds (as emitted between pages by `pdftotext`)
    /// as page breaks and advance `page`.
    pub track_page_breaks: bool,
}

impl Default for ReflowOptions {
    fn default() -> Self {
        Self {
            auto_number: true,
            track_page_breaks: true,
        }
    }
}

/// Streaming driver around [`EntryMachine`].
///
/// Owns the caller-side contract the machine itself stays out of: metadata
/// seeding, page bookkeeping, number sequencing, and the final flush at end
/// of input.
pub struct Reflower {
    classifier: CatalogLineClassifier,
    machine: EntryMachine,
    options: ReflowOptions,
}

impl Reflower {
    pub fn new(seed: EntryMeta, options: ReflowOptions) -> Self {
        Self {
            classifier: CatalogLineClassifier,
            machine: EntryMachine::new(seed),
            options,
        }
    }

    pub fn meta(&self) -> &EntryMeta {
        self.machine.meta()
    }

    pub fn meta_mut(&mut self) -> &mut EntryMeta {
        self.machine.meta_mut()
    }

    /// Feeds one input line, returning the record it completed, if any.
    pub fn feed(&mut self, line: &str) -> Option<Record> {
        let line = if self.options.track_page_breaks {
            self.consume_page_breaks(line)
        } else {
            line
        };

        let lc = self.classifier.classify(line);
        let record = self.machine.push(&lc);

        if record.is_some() && self.options.auto_number {
            self.machine.meta_mut().number += 1;
        }
        record
    }

    /// End-of-input flush.
    ///
    /// Streams that do not end with the double-blank terminator would
    /// otherwise drop their trailing entry.
    pub fn finish(self) -> Option<Record> {
        self.machine.finish()
    }

    fn consume_page_breaks<'a>(&mut self, line: &'a str) -> &'a str {
        let feeds = line.chars().take_while(|&c| c == '\x0C').count();
        if feeds > 0 {
            self.machine.meta_mut().page += feeds as u32;
        }
        // Form feeds are single-byte, so the char count is a byte offset.
        &line[feeds..]
    }
}

/// Reflows a full sequence of lines in one call.
pub fn reflow_lines<'a, I>(lines: I, seed: EntryMeta, options: ReflowOptions) -> Vec<Record>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut reflower = Reflower::new(seed, options);
    let mut records = Vec::new();
    for line in lines {
        records.extend(reflower.feed(line));
    }
    records.extend(reflower.finish());
    records
}
