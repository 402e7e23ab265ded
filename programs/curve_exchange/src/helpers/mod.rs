pub mod blend;
pub mod curve;
pub mod fees;
pub mod matching;
pub mod math;
pub mod vault;

pub use blend::*;
pub use curve::*;
pub use fees::*;
pub use matching::*;
pub use math::*;
pub use vault::*;
