//! umbra-core: theme classification and background locations.

pub mod background;
pub mod theme;
