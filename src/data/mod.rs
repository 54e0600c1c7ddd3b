//! Loading and exporting tabular data

mod loader;
mod table;

pub use loader::{DataLoader, NA_VALUES};
pub use table::{Cell, Table};
