use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::KindError;
use crate::kind::identifier::KindIdentifier;

/// A symbol's kind together with its human-readable name.
///
/// Decodes from either a bare identifier (`"swift.func"`) or an object
/// (`{"identifier": "swift.func", "displayName": "Function"}`). Always encodes as
/// the object form with the canonical identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Kind {
    /// The resolved kind.
    pub identifier: KindIdentifier,
    /// Display name as written in the source document; empty when absent.
    pub display_name: String,
}

impl Kind {
    pub fn new(identifier: KindIdentifier, display_name: impl Into<String>) -> Self {
        Self {
            identifier,
            display_name: display_name.into(),
        }
    }
}

/// Dispatches on the shape of the input: a string is a bare identifier, a map is a
/// full record. Any other shape is rejected with an `invalid type` error.
struct KindVisitor;

impl<'de> Visitor<'de> for KindVisitor {
    type Value = Kind;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an identifier string or an object with an `identifier` field")
    }

    fn visit_str<E>(self, v: &str) -> Result<Kind, E>
    where
        E: de::Error,
    {
        Ok(Kind::new(KindIdentifier::parse(v), ""))
    }

    fn visit_string<E>(self, v: String) -> Result<Kind, E>
    where
        E: de::Error,
    {
        Ok(Kind::new(KindIdentifier::from(v), ""))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Kind, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut identifier: Option<String> = None;
        let mut display_name: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "identifier" => {
                    if identifier.is_some() {
                        return Err(de::Error::duplicate_field("identifier"));
                    }
                    identifier = Some(map.next_value()?);
                }
                "displayName" => display_name = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let identifier = identifier.ok_or_else(|| de::Error::missing_field("identifier"))?;
        Ok(Kind::new(
            KindIdentifier::from(identifier),
            display_name.unwrap_or_default(),
        ))
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(KindVisitor)
    }
}

impl Serialize for Kind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Kind", 2)?;
        state.serialize_field("identifier", self.identifier.identifier())?;
        state.serialize_field("displayName", &self.display_name)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for KindIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Kind::deserialize(deserializer).map(|kind| kind.identifier)
    }
}

impl Serialize for KindIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.identifier())
    }
}

/// Decode a single kind record from JSON text.
///
/// Unrecognized identifiers decode successfully as [`KindIdentifier::Unknown`]; only
/// input of the wrong shape fails.
pub fn decode_kind_record(json: &str) -> Result<Kind, KindError> {
    serde_json::from_str(json).map_err(KindError::MalformedRecord)
}

/// Decode either one kind record or a JSON array of them.
///
/// A top-level array decodes element by element, so the first bad element's error
/// (with its line and column) is the one reported.
pub fn decode_kind_records(json: &str) -> Result<Vec<Kind>, KindError> {
    if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<Kind>>(json).map_err(KindError::MalformedRecord)
    } else {
        decode_kind_record(json).map(|kind| vec![kind])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let kind =
            decode_kind_record(r#"{"identifier": "swift.func", "displayName": "Function"}"#)
                .unwrap();
        assert_eq!(kind.identifier, KindIdentifier::Func);
        assert_eq!(kind.display_name, "Function");
    }

    #[test]
    fn test_decode_bare_identifier() {
        let identifier: KindIdentifier = serde_json::from_str(r#""func""#).unwrap();
        assert_eq!(identifier, KindIdentifier::Func);

        let kind = decode_kind_record(r#""func""#).unwrap();
        assert_eq!(kind.identifier, KindIdentifier::Func);
        assert_eq!(kind.display_name, "");
    }

    #[test]
    fn test_various_language_prefixes() {
        for identifier in ["func", "swift.func", "objc.func"] {
            assert_eq!(KindIdentifier::parse(identifier), KindIdentifier::Func);

            let json = format!(r#"{{"identifier": "{identifier}", "displayName": "Function"}}"#);
            let kind = decode_kind_record(&json).unwrap();
            assert_eq!(kind.identifier, KindIdentifier::Func);
            assert_eq!(kind.display_name, "Function");

            let bare: KindIdentifier = serde_json::from_str(&format!("\"{identifier}\"")).unwrap();
            assert_eq!(bare, KindIdentifier::Func);
        }
    }

    #[test]
    fn test_missing_identifier_is_malformed() {
        let err = decode_kind_record(r#"{"displayName": "Function"}"#).unwrap_err();
        assert!(matches!(err, KindError::MalformedRecord(_)));
        assert!(err.to_string().contains("`identifier`"), "got: {err}");
    }

    #[test]
    fn test_malformed_error_reports_position() {
        let KindError::MalformedRecord(source) =
            decode_kind_record(r#"{"displayName": "Function"}"#).unwrap_err();
        assert_eq!(source.line(), 1, "got: {source}");
        assert!(source.column() > 0, "got: {source}");

        let KindError::MalformedRecord(source) = decode_kind_record("42").unwrap_err();
        assert!(source.to_string().contains("an identifier string"), "got: {source}");
        assert!(source.column() > 0, "got: {source}");
    }

    #[test]
    fn test_bad_array_element_keeps_specific_error() {
        let json = "[\n  \"func\",\n  {\"displayName\": \"Function\"}\n]";
        let err = decode_kind_records(json).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("`identifier`"), "got: {message}");
        assert!(!message.contains("untagged"), "got: {message}");

        let KindError::MalformedRecord(source) = err;
        assert_eq!(source.line(), 3, "got: {source}");
    }

    #[test]
    fn test_unknown_fields_and_duplicates() {
        let kind = decode_kind_record(
            r#"{"identifier": "swift.var", "displayName": "Variable", "extra": [1, 2]}"#,
        )
        .unwrap();
        assert_eq!(kind, Kind::new(KindIdentifier::Var, "Variable"));

        let err = decode_kind_record(r#"{"identifier": "func", "identifier": "var"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate field"), "got: {err}");
    }

    #[test]
    fn test_wrong_shapes_are_malformed() {
        for json in ["42", "null", "true", "[]", r#"{"identifier": 7}"#, "{"] {
            let err = decode_kind_record(json).unwrap_err();
            assert!(matches!(err, KindError::MalformedRecord(_)), "{json}");
        }
    }

    #[test]
    fn test_missing_or_null_display_name_is_tolerated() {
        let kind = decode_kind_record(r#"{"identifier": "swift.class"}"#).unwrap();
        assert_eq!(kind.identifier, KindIdentifier::Class);
        assert_eq!(kind.display_name, "");

        let kind =
            decode_kind_record(r#"{"identifier": "class", "displayName": null}"#).unwrap();
        assert_eq!(kind.display_name, "");
    }

    #[test]
    fn test_unknown_identifier_decodes() {
        let kind =
            decode_kind_record(r#"{"identifier": "swift.madeupapi", "displayName": "Made Up"}"#)
                .unwrap();
        assert_eq!(
            kind.identifier,
            KindIdentifier::Unknown("swift.madeupapi".into())
        );
        assert_eq!(kind.display_name, "Made Up");
    }

    #[test]
    fn test_encode_uses_canonical_identifier() {
        let kind =
            decode_kind_record(r#"{"identifier": "objc.type.method", "displayName": "Type Method"}"#)
                .unwrap();
        let value = serde_json::to_value(&kind).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"identifier": "type.method", "displayName": "Type Method"})
        );
        assert_eq!(
            serde_json::to_string(&KindIdentifier::Operator).unwrap(),
            r#""func.op""#
        );
    }

    #[test]
    fn test_encode_unknown_keeps_raw_text() {
        let kind = Kind::new(KindIdentifier::parse("swift.madeupapi"), "");
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, r#"{"identifier":"swift.madeupapi","displayName":""}"#);
        assert_eq!(decode_kind_record(&json).unwrap(), kind);
    }

    #[test]
    fn test_identifier_field_accepts_object_form() {
        let identifier: KindIdentifier =
            serde_json::from_str(r#"{"identifier": "swift.protocol", "displayName": "Protocol"}"#)
                .unwrap();
        assert_eq!(identifier, KindIdentifier::Protocol);
    }

    #[test]
    fn test_document_with_unknown_kinds_still_decodes() {
        #[derive(Deserialize)]
        struct Symbol {
            kind: Kind,
            #[serde(rename = "pathComponents")]
            path_components: Vec<String>,
        }

        let symbols: Vec<Symbol> = serde_json::from_str(
            r#"[
                {"kind": {"identifier": "swift.struct", "displayName": "Structure"}, "pathComponents": ["Point"]},
                {"kind": {"identifier": "swift.futurekind", "displayName": "Future"}, "pathComponents": ["Later"]},
                {"kind": "var", "pathComponents": ["origin"]}
            ]"#,
        )
        .unwrap();

        assert_eq!(symbols.len(), 3);
        assert_eq!(symbols[0].kind.identifier, KindIdentifier::Struct);
        assert!(symbols[1].kind.identifier.is_unknown());
        assert_eq!(symbols[1].path_components, vec!["Later".to_string()]);
        assert_eq!(symbols[2].kind.identifier, KindIdentifier::Var);
    }

    #[test]
    fn test_decode_many_records() {
        let kinds = decode_kind_records(
            r#"["func", {"identifier": "objc.class", "displayName": "Class"}]"#,
        )
        .unwrap();
        assert_eq!(
            kinds,
            vec![
                Kind::new(KindIdentifier::Func, ""),
                Kind::new(KindIdentifier::Class, "Class"),
            ]
        );

        let single = decode_kind_records(r#""swift.enum.case""#).unwrap();
        assert_eq!(single, vec![Kind::new(KindIdentifier::Case, "")]);

        let object = decode_kind_records(r#"  {"identifier": "objc.ivar"}"#).unwrap();
        assert_eq!(object, vec![Kind::new(KindIdentifier::Ivar, "")]);

        assert_eq!(decode_kind_records("[]").unwrap(), Vec::<Kind>::new());

        assert!(decode_kind_records("[1]").is_err());
    }
}
