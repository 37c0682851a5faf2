pub mod graphic;
pub mod registry;
pub mod route;

pub use graphic::*;
pub use registry::*;
pub use route::*;
