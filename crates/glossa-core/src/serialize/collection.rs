use crate::{
    error::InternalError,
    record::Record,
    serialize::{EntitySerializer, SerializeOpts, require},
    view::View,
};
use serde_json::{Value as JsonValue, json};
use std::sync::LazyLock;

static LIST_VIEW: LazyLock<View> = LazyLock::new(|| {
    crate::view!({ fields: ["id", "title", "text_count", "is_bookmarked"] })
});

///
/// CollectionListSerializer
///
/// Collection listings as seen by a signed-in learner; `isBookmarked` is
/// annotated per viewer, so this shape is never served anonymously.
///

pub struct CollectionListSerializer;

impl EntitySerializer for CollectionListSerializer {
    fn view() -> &'static View {
        &LIST_VIEW
    }

    fn serialize(record: &Record, opts: &SerializeOpts) -> Result<JsonValue, InternalError> {
        Ok(json!({
            "id": require(record, "id", opts)?,
            "title": require(record, "title", opts)?,
            "textCount": require(record, "text_count", opts)?,
            "isBookmarked": require(record, "is_bookmarked", opts)?,
        }))
    }
}

///
/// TESTS
///
