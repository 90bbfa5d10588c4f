pub mod config;
pub mod constants;
pub mod driver;
pub mod entrance;
pub mod geometry;
pub mod input;
pub mod physics;
pub mod projector;

pub use config::*;
pub use driver::*;
pub use entrance::*;
pub use geometry::*;
pub use input::*;
pub use physics::*;
pub use projector::*;
