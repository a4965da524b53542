use super::classify::LineClass;
use super::record::{EntryMeta, Record};
use super::transitions::{Action, Class, next};

/// Machine states.
///
/// `Start` doubles as the initial state and the "ready" state reached after
/// every flush. `Blank` means exactly one blank line has been seen since the
/// last content line; the entry is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    Entry,
    Continuing,
    Blank,
}

/// Accumulates classified lines into entries and emits a [`Record`] per
/// confirmed boundary.
///
/// One machine lives for the whole input stream. Metadata is passed through
/// into each record at flush time and is never mutated here; sequencing
/// concerns like page or number advancement belong to the driver.
///
/// # Invariants
///
/// - The buffer is `Some` and non-empty exactly while `state` is `Entry` or
///   `Continuing`, or while a single blank holds it open in `Blank`
/// - The buffer is cleared and `indent` reset to 0 on every flush
/// - `indent` reflects the most recently processed content line; blank lines
///   never alter it
pub struct EntryMachine {
    state: State,
    indent: usize,
    entry: Option<String>,
    meta: EntryMeta,
}

impl EntryMachine {
    pub fn new(meta: EntryMeta) -> Self {
        Self {
            state: State::Start,
            indent: 0,
            entry: None,
            meta,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    /// The in-progress entry text, if one is open.
    pub fn entry(&self) -> Option<&str> {
        self.entry.as_deref()
    }

    pub fn meta(&self) -> &EntryMeta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut EntryMeta {
        &mut self.meta
    }

    /// Advances the machine by one classified line.
    ///
    /// Returns the finished record when this line confirms an entry boundary:
    /// either the second consecutive blank, or a flat content line closing
    /// the previous entry as it opens the next.
    pub fn push(&mut self, lc: &LineClass) -> Option<Record> {
        let (action, successor) = next(self.state, Class::of(lc));

        let emitted = match action {
            Action::Ignore | Action::Hold => None,
            Action::Open => {
                self.open(lc);
                None
            }
            Action::Append => {
                self.append(lc);
                None
            }
            Action::Flush => self.flush(),
            Action::FlushOpen => {
                let record = self.flush();
                self.open(lc);
                record
            }
        };

        self.state = successor;
        emitted
    }

    /// End-of-input flush.
    ///
    /// Streams that do not end with the double-blank terminator would
    /// otherwise drop their trailing entry; drivers must call this once the
    /// input is exhausted.
    pub fn finish(mut self) -> Option<Record> {
        self.flush()
    }

    fn open(&mut self, lc: &LineClass) {
        self.entry = Some(lc.text.clone());
        self.indent = lc.indent;
    }

    fn append(&mut self, lc: &LineClass) {
        match self.entry.as_mut() {
            Some(buffer) => {
                buffer.push(' ');
                buffer.push_str(&lc.text);
            }
            // No entry open: treat as an opener at whatever indent we see.
            None => self.entry = Some(lc.text.clone()),
        }
        self.indent = lc.indent;
    }

    fn flush(&mut self) -> Option<Record> {
        let text = self.entry.take()?;
        self.indent = 0;
        Some(Record::new(&self.meta, text))
    }
}
