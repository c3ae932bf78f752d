pub mod border;
pub mod color;
pub mod dimension;
pub mod geometry;

pub use border::{Border, BorderStyle};
pub use color::Color;
pub use dimension::{EdgeInsets, Margins, PageSize};
pub use geometry::{Point, Rect, Size};
