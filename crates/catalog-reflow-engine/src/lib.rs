pub mod io;
pub mod reflow;

// Re-export key types for easier usage
pub use reflow::{
    CatalogLineClassifier, EntryMachine, EntryMeta, FieldOrder, LineClass, MetaField,
    RECORD_NAMESPACE, Record, ReflowOptions, Reflower, State, record_id, reflow_lines,
};
