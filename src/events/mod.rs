pub mod nav;
pub mod scroll;

pub use nav::*;
pub use scroll::*;
