mod capture;
mod core;
mod descriptor;
pub mod value;

pub use self::core::*;
pub use capture::*;
pub use descriptor::*;
