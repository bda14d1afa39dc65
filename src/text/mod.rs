//! Width-correct text primitives shared by every theme.
//!
//! All layout math goes through [`visible_width`], which ignores color
//! sequences and weights each character by [`char_width`]. Padding is built on
//! top of it, so a colored CJK label pads exactly like a plain ASCII one.

mod align;
mod measure;
mod width;

pub use align::{pad_center, pad_left, pad_right};
pub use measure::{strip_sgr, visible_width, CSI};
pub use width::char_width;
