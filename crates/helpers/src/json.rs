//! JSON (de)serialization through serde_json with fault suppression.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::safe::{safe_operation_with, FaultReporter, LogFault};

/// Deserialize `text` into `T`, or `None` if it is malformed or does not
/// match the shape of `T`.
pub fn from_json_str<T: DeserializeOwned>(text: &str) -> Option<T> {
    from_json_str_with(text, LogFault)
}

/// Like [`from_json_str`], routing the fault to `reporter`.
pub fn from_json_str_with<T, R>(text: &str, reporter: R) -> Option<T>
where
    T: DeserializeOwned,
    R: FaultReporter,
{
    safe_operation_with("from_json_str", reporter, || serde_json::from_str(text))
}

/// Serialize `value` to a compact JSON string.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    to_json_string_with(value, LogFault)
}

/// Like [`to_json_string`], routing the fault to `reporter`.
pub fn to_json_string_with<T, R>(value: &T, reporter: R) -> Option<String>
where
    T: Serialize + ?Sized,
    R: FaultReporter,
{
    safe_operation_with("to_json_string", reporter, || serde_json::to_string(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Fault, HelperError};
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Profile {
        name: String,
        display_name: Option<String>,
    }

    #[test]
    fn parses_matching_shape() {
        let profile: Profile = from_json_str(r#"{"name":"x","displayName":"X"}"#).unwrap();
        assert_eq!(
            profile,
            Profile {
                name: "x".into(),
                display_name: Some("X".into()),
            }
        );
    }

    #[test]
    fn shape_mismatch_is_absent() {
        assert_eq!(from_json_str::<Profile>(r#"{"title":"x"}"#), None);
        assert_eq!(from_json_str::<Profile>("not json"), None);
    }

    #[test]
    fn reporter_sees_json_error() {
        let mut fault: Option<Fault> = None;
        let parsed = from_json_str_with::<Profile, _>("{", |f: Fault| fault = Some(f));
        assert!(parsed.is_none());
        let fault = fault.unwrap();
        assert_eq!(fault.operation(), "from_json_str");
        assert!(matches!(fault.error(), HelperError::Json(_)));
    }

    #[test]
    fn serializes_values() {
        let profile = Profile {
            name: "x".into(),
            display_name: None,
        };
        assert_eq!(
            to_json_string(&profile).as_deref(),
            Some(r#"{"name":"x","displayName":null}"#)
        );
    }

    #[test]
    fn non_string_map_keys_fail_to_serialize() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "value");
        assert_eq!(to_json_string(&map), None);

        let mut fault: Option<Fault> = None;
        assert_eq!(to_json_string_with(&map, |f: Fault| fault = Some(f)), None);
        let fault = fault.unwrap();
        assert_eq!(fault.operation(), "to_json_string");
        assert!(matches!(fault.error(), HelperError::Json(_)));
    }
}
