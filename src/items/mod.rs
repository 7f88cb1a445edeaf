//! Recurring cash-flow items and input loading

mod data;
pub mod loader;

pub use data::{validate_items, FlowKind, Frequency, RecurringItem};
pub use loader::{load_items, load_items_from_csv_reader, load_items_from_json_reader};
