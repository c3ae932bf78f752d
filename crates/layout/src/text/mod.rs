pub mod wrapper;

pub use wrapper::{LineLayout, break_lines};
