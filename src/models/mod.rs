pub mod outcome;
pub mod summary;
pub mod warning;

pub use outcome::*;
pub use summary::*;
pub use warning::*;
