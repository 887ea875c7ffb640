//! Platform service ports for funchelper.
//!
//! Every helper that needs something from the host platform (the wall clock,
//! bundled assets, permission grants) receives it through one of these traits
//! instead of reaching for a global. Production adapters live in the
//! `funchelper` crate; mocks are generated with `mockall` when the `testing`
//! feature is enabled.

pub mod asset_port;
pub mod clock_port;
pub mod permission_port;

pub use asset_port::AssetPort;
pub use clock_port::ClockPort;
pub use permission_port::{PermissionPort, PermissionStatus};

#[cfg(any(test, feature = "testing"))]
pub use asset_port::MockAssetPort;
#[cfg(any(test, feature = "testing"))]
pub use clock_port::MockClockPort;
#[cfg(any(test, feature = "testing"))]
pub use permission_port::MockPermissionPort;
