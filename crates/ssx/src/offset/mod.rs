mod index;
mod provision;
mod store;
mod tables;

pub use index::*;
pub use provision::*;
pub use store::*;
pub use tables::*;
