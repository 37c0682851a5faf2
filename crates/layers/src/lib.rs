pub mod covers;
pub mod layer;
pub mod map_session;
pub mod points;
pub mod routes;
pub mod sensors;

pub use covers::*;
pub use layer::*;
pub use map_session::*;
pub use points::*;
pub use routes::*;
pub use sensors::*;
