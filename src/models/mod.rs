pub mod ephemeris;
pub mod hours;
pub mod ruler;

pub use ephemeris::*;
pub use hours::*;
pub use ruler::*;
