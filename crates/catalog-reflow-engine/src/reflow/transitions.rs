use super::classify::LineClass;
use super::machine::State;

/// Coarse line label driving the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// Content line at indent 0.
    Flat,
    /// Content line at indent > 0.
    Indented,
    /// Empty after trimming.
    Blank,
}

impl Class {
    pub fn of(lc: &LineClass) -> Self {
        if lc.is_blank {
            Class::Blank
        } else if lc.indent == 0 {
            Class::Flat
        } else {
            Class::Indented
        }
    }
}

/// What the machine does with the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Drop the line without touching the buffer.
    Ignore,
    /// Seed a fresh accumulator with the line's text.
    Open,
    /// Append the line's text to the open accumulator.
    Append,
    /// Keep the entry open across a single blank.
    Hold,
    /// Emit the buffered entry.
    Flush,
    /// Emit the buffered entry, then open a new one from this line.
    FlushOpen,
}

/// The whole machine in one place: (state, class) -> (action, next state).
///
/// Total over State x Class. A single blank holds the entry open (OCR noise);
/// the second consecutive blank confirms the boundary. A flat content line
/// always starts a new entry, flushing any open one first - under the
/// indentation convention a flat line can never be a continuation.
pub const TRANSITIONS: &[(State, Class, Action, State)] = &[
    (State::Start, Class::Flat, Action::Open, State::Entry),
    (State::Start, Class::Indented, Action::Open, State::Entry),
    (State::Start, Class::Blank, Action::Ignore, State::Start),
    (State::Entry, Class::Flat, Action::FlushOpen, State::Entry),
    (State::Entry, Class::Indented, Action::Append, State::Continuing),
    (State::Entry, Class::Blank, Action::Hold, State::Blank),
    (State::Continuing, Class::Flat, Action::FlushOpen, State::Entry),
    (State::Continuing, Class::Indented, Action::Append, State::Continuing),
    (State::Continuing, Class::Blank, Action::Hold, State::Blank),
    (State::Blank, Class::Flat, Action::FlushOpen, State::Entry),
    (State::Blank, Class::Indented, Action::Append, State::Continuing),
    (State::Blank, Class::Blank, Action::Flush, State::Start),
];

/// Looks up the action and successor state for one line.
pub fn next(state: State, class: Class) -> (Action, State) {
    TRANSITIONS
        .iter()
        .find(|(s, c, _, _)| *s == state && *c == class)
        .map(|(_, _, action, successor)| (*action, *successor))
        .expect("transition table is total over State x Class")
}
