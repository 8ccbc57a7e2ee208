use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A field the service always sends as `null`.
///
/// Serializes to `null`. Deserializing requires the key to be present with a
/// `null` value: a missing key or any other value is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Null;

impl Serialize for Null {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_unit()
    }
}

struct NullVisitor;

impl<'de> de::Visitor<'de> for NullVisitor {
    type Value = Null;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("null")
    }

    fn visit_unit<E>(self) -> Result<Null, E>
    where
        E: de::Error,
    {
        Ok(Null)
    }
}

impl<'de> Deserialize<'de> for Null {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `deserialize_option` would let a missing key through as `None`
        deserializer.deserialize_unit(NullVisitor)
    }
}

/// `deserialize_with` helper for keys that must be present but may be `null`.
pub mod required_nullable {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug)]
    struct Holder {
        video: Null,
        #[serde(deserialize_with = "required_nullable::deserialize")]
        note: Option<String>,
    }

    #[test]
    fn null_is_written_explicitly() {
        let json = serde_json::to_string(&Holder {
            video: Null,
            note: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"video":null,"note":null}"#);
    }

    #[test]
    fn null_must_be_present() {
        assert!(serde_json::from_str::<Holder>(r#"{"video":null,"note":null}"#).is_ok());
        assert!(serde_json::from_str::<Holder>(r#"{"note":null}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"video":"x.mp4","note":null}"#).is_err());
    }

    #[test]
    fn nullable_must_be_present() {
        let holder: Holder = serde_json::from_str(r#"{"video":null,"note":"2019"}"#).unwrap();
        assert_eq!(holder.note.as_deref(), Some("2019"));
        assert!(serde_json::from_str::<Holder>(r#"{"video":null}"#).is_err());
    }
}
