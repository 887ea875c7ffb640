//! Bundled asset access port
//!
//! Assets are read-only files packaged with the application and addressed
//! by name. The port only opens them; reading, decoding and error
//! suppression are the helpers' job.

use std::io::{self, Read};

/// Read-only access to the application's bundled assets.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AssetPort: Send + Sync {
    /// Open the asset called `name` for reading.
    ///
    /// The returned stream is owned by the caller and released when dropped.
    /// A missing asset is reported as `io::ErrorKind::NotFound`.
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + Send>>;
}
