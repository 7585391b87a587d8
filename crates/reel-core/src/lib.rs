//! Platform-free state machines behind reel's scroll-linked effects.
//!
//! Nothing here touches the DOM or a clock. Time arrives as `Duration` since
//! the stage was created, geometry arrives as plain numbers, and output leaves
//! through [`RenderSink`].

pub mod constants;
pub mod driver;
pub mod easing;
pub mod error;
pub mod noise;
pub mod period;
pub mod scroll_mode;
pub mod sink;
pub mod stage;
pub mod timer;
pub mod ui;

pub use constants::*;
pub use driver::*;
pub use easing::*;
pub use error::ReelError;
pub use noise::*;
pub use period::*;
pub use scroll_mode::*;
pub use sink::*;
pub use stage::*;
pub use timer::*;
pub use ui::*;
