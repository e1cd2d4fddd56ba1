pub mod enums;

mod pregnancy;

pub use pregnancy::*;
