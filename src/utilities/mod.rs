pub mod color;

pub use color::{lerp_color, parse_hex_color};
