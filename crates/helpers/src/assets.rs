//! Reading bundled assets as text or JSON.
//!
//! The stream opened through [`AssetPort`] lives only inside the helper call
//! and is dropped on every exit path before the helper returns.

use std::io::{BufReader, Read};

use funchelper_ports::AssetPort;
use serde::de::DeserializeOwned;

use crate::error::HelperError;
use crate::safe::{safe_operation_with, FaultReporter, LogFault};

/// Read the asset called `name` as UTF-8 text.
pub fn read_asset_text(assets: &dyn AssetPort, name: &str) -> Option<String> {
    read_asset_text_with(assets, name, LogFault)
}

/// Like [`read_asset_text`], routing the fault to `reporter`.
pub fn read_asset_text_with<R: FaultReporter>(
    assets: &dyn AssetPort,
    name: &str,
    reporter: R,
) -> Option<String> {
    safe_operation_with("read_asset_text", reporter, || {
        let mut text = String::new();
        assets.open(name)?.read_to_string(&mut text)?;
        Ok::<_, HelperError>(text)
    })
}

/// Read the asset called `name` and deserialize it as JSON into `T`.
pub fn read_json_asset<T: DeserializeOwned>(assets: &dyn AssetPort, name: &str) -> Option<T> {
    read_json_asset_with(assets, name, LogFault)
}

/// Like [`read_json_asset`], routing the fault to `reporter`.
pub fn read_json_asset_with<T, R>(assets: &dyn AssetPort, name: &str, reporter: R) -> Option<T>
where
    T: DeserializeOwned,
    R: FaultReporter,
{
    safe_operation_with("read_json_asset", reporter, || {
        let reader = BufReader::new(assets.open(name)?);
        Ok::<_, HelperError>(serde_json::from_reader(reader)?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryAssets;
    use crate::error::Fault;
    use funchelper_ports::MockAssetPort;
    use serde::Deserialize;
    use std::io::{self, Cursor};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Config {
        name: String,
    }

    fn bundle() -> MemoryAssets {
        MemoryAssets::new()
            .with_asset("config.json", br#"{"name":"x"}"#.to_vec())
            .with_asset("readme.txt", b"bundled text".to_vec())
            .with_asset("broken.json", b"{\"name\":".to_vec())
            .with_asset("binary.bin", vec![0xff, 0xfe, 0x00])
    }

    #[test]
    fn reads_text_asset() {
        assert_eq!(
            read_asset_text(&bundle(), "readme.txt").as_deref(),
            Some("bundled text")
        );
    }

    #[test]
    fn reads_json_asset_into_shape() {
        let config: Config = read_json_asset(&bundle(), "config.json").unwrap();
        assert_eq!(config.name, "x");
    }

    #[test]
    fn missing_asset_is_absent() {
        assert_eq!(read_asset_text(&bundle(), "nope.txt"), None);
        assert_eq!(read_json_asset::<Config>(&bundle(), "nope.json"), None);
    }

    #[test]
    fn malformed_json_is_absent() {
        assert_eq!(read_json_asset::<Config>(&bundle(), "broken.json"), None);
        assert_eq!(read_json_asset::<Config>(&bundle(), "readme.txt"), None);
    }

    #[test]
    fn non_utf8_text_is_absent() {
        assert_eq!(read_asset_text(&bundle(), "binary.bin"), None);
    }

    #[test]
    fn reporter_receives_missing_asset_fault() {
        let mut captured: Option<Fault> = None;
        let text = read_asset_text_with(&bundle(), "nope.txt", |f: Fault| captured = Some(f));
        assert_eq!(text, None);

        let fault = captured.unwrap();
        assert_eq!(fault.operation(), "read_asset_text");
        assert!(
            matches!(fault.error(), HelperError::Io(e) if e.kind() == io::ErrorKind::NotFound)
        );
    }

    #[test]
    fn reporter_receives_json_fault() {
        let mut captured: Option<Fault> = None;
        let config =
            read_json_asset_with::<Config, _>(&bundle(), "broken.json", |f: Fault| {
                captured = Some(f)
            });
        assert_eq!(config, None);
        assert!(matches!(captured.unwrap().error(), HelperError::Json(_)));
    }

    /// Reader that records when it is dropped.
    struct TrackedReader {
        inner: Cursor<Vec<u8>>,
        dropped: Arc<AtomicBool>,
    }

    impl Read for TrackedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl Drop for TrackedReader {
        fn drop(&mut self) {
            self.dropped.store(true, Ordering::SeqCst);
        }
    }

    fn tracked_port(body: &'static [u8], dropped: Arc<AtomicBool>) -> MockAssetPort {
        let mut assets = MockAssetPort::new();
        assets.expect_open().times(1).returning(move |_| {
            Ok(Box::new(TrackedReader {
                inner: Cursor::new(body.to_vec()),
                dropped: dropped.clone(),
            }) as Box<dyn Read + Send>)
        });
        assets
    }

    #[test]
    fn stream_released_on_success() {
        let dropped = Arc::new(AtomicBool::new(false));
        let assets = tracked_port(br#"{"name":"x"}"#, dropped.clone());

        let config: Option<Config> = read_json_asset(&assets, "config.json");
        assert!(config.is_some());
        assert!(dropped.load(Ordering::SeqCst));
    }

    #[test]
    fn stream_released_on_failure() {
        let dropped = Arc::new(AtomicBool::new(false));
        let assets = tracked_port(b"{ not json", dropped.clone());

        let config: Option<Config> = read_json_asset(&assets, "config.json");
        assert!(config.is_none());
        assert!(dropped.load(Ordering::SeqCst));
    }
}
