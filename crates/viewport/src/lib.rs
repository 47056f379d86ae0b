pub mod camera;
pub mod picking;

pub use camera::*;
pub use picking::*;
