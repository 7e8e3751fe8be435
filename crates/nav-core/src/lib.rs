pub mod catalog;
pub mod constants;
pub mod session;
pub mod starfield;
pub mod typewriter;

pub use catalog::*;
pub use session::*;
pub use starfield::*;
pub use typewriter::*;
