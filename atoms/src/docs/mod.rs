pub mod model;

pub use model::{DocFile, ProjectDoc};
