pub mod ecef;
pub mod geodesy;
pub mod local;
pub mod matrix;
pub mod offset;
pub mod precision;
pub mod vec;

pub use ecef::*;
pub use geodesy::*;
pub use local::*;
pub use matrix::*;
pub use offset::*;
pub use precision::*;
pub use vec::*;
