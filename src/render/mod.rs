//! Host-independent render tree. Builders in [`builder`] only talk to the
//! [`Surface`] trait; [`text`] and `serde_json` consume the finished tree.

pub mod builder;
pub mod number;
pub mod surface;
pub mod text;
pub mod tree;

pub use surface::Surface;
pub use tree::{
    Axis, Cell, Element, Font, FontWeight, Image, ImageSource, Padding, Rendered, Size, Stack,
    Table, TableRow, Text, Widget,
};
