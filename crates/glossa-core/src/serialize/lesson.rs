use crate::{
    error::InternalError,
    record::Record,
    serialize::{EntitySerializer, SerializeOpts, require},
    view::View,
};
use serde_json::{Value as JsonValue, json};
use std::sync::LazyLock;

static VIEW: LazyLock<View> =
    LazyLock::new(|| crate::view!({ fields: ["id", "title", "position"] }));

///
/// LessonSummarySerializer
///
/// The shape nested inside course detail; also served standalone for lesson
/// listings.
///

pub struct LessonSummarySerializer;

impl EntitySerializer for LessonSummarySerializer {
    fn view() -> &'static View {
        &VIEW
    }

    fn serialize(record: &Record, opts: &SerializeOpts) -> Result<JsonValue, InternalError> {
        Ok(json!({
            "id": require(record, "id", opts)?,
            "title": require(record, "title", opts)?,
            "position": require(record, "position", opts)?,
        }))
    }
}

///
/// TESTS
///
