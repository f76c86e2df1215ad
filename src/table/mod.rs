pub mod frame;
pub mod quantities;

pub use frame::{DataFrame, FIXED_COLUMNS};
pub use quantities::{
    discover_quantity_columns, quantities_for_set, split_quantity, total_count, SplitBy, COUNT,
};
