pub mod node;

pub use node::{Table, TableLayoutOutput, TableStyle};
