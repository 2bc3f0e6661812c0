mod color;
mod enums;
mod style;

pub use color::{lerp_color, Color, Rgb};
pub use enums::{Display, TextStyle};
pub use style::Style;
