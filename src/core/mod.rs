//! Core module - table state, styles and rendering

pub mod render;
pub mod style;
pub mod table;

pub use render::render_table;
pub use style::{BorderStyle, TableStyle};
pub use table::{Row, TableState};
