use crate::{
    error::InternalError,
    record::Record,
    serialize::{EntitySerializer, SerializeOpts, require, require_one},
    view::View,
};
use serde_json::{Value as JsonValue, json};
use std::sync::LazyLock;

static VIEW: LazyLock<View> = LazyLock::new(|| {
    crate::view!({ fields: ["id", "code", "name", "right_to_left"] })
});

///
/// LanguageSerializer
///

pub struct LanguageSerializer;

impl EntitySerializer for LanguageSerializer {
    fn view() -> &'static View {
        &VIEW
    }

    fn serialize(record: &Record, opts: &SerializeOpts) -> Result<JsonValue, InternalError> {
        Ok(json!({
            "id": require(record, "id", opts)?,
            "code": require(record, "code", opts)?,
            "name": require(record, "name", opts)?,
            "rightToLeft": require(record, "right_to_left", opts)?,
        }))
    }
}

/// Presentation rule shared by the family: a related language renders as its
/// bare code (`"de"`), not a nested object.
pub(crate) fn language_code(
    parent: &Record,
    opts: &SerializeOpts,
) -> Result<JsonValue, InternalError> {
    match require_one(parent, "language", opts)? {
        Some(language) => require(language, "code", opts),
        None => Ok(JsonValue::Null),
    }
}

///
/// TESTS
///
