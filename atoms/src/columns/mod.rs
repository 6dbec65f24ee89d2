pub mod model;

pub use model::{default_columns, Column, DONE_COLUMN_ID};
