//! Production and test implementations of the platform ports.

pub mod assets;
pub mod clock;
pub mod permissions;

pub use assets::{DirectoryAssets, MemoryAssets};
pub use clock::{FixedClock, SystemClock};
pub use permissions::GrantTable;
