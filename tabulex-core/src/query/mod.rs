pub mod filtering;
pub mod pagination;
pub mod sorting;
pub mod types;

pub use sorting::*;
pub use types::*;
