use crate::{
    error::InternalError,
    record::Record,
    serialize::{
        EntitySerializer, SerializeOpts, language::language_code, require, require_many,
    },
    view::View,
};
use serde_json::{Value as JsonValue, json};
use std::sync::LazyLock;

static DETAIL_VIEW: LazyLock<View> = LazyLock::new(|| {
    crate::view!({
        fields: ["id", "lemma", "romanization"],
        relations: {
            language: { fields: ["code"] },
            meanings: { fields: ["id", "gloss"] },
        },
    })
});

///
/// TermDetailSerializer
///
/// A vocabulary term with the viewer's own meanings. The `meanings` relation
/// carries a learner scope, so fetching this view anonymously fails at plan
/// time.
///

pub struct TermDetailSerializer;

impl EntitySerializer for TermDetailSerializer {
    fn view() -> &'static View {
        &DETAIL_VIEW
    }

    fn serialize(record: &Record, opts: &SerializeOpts) -> Result<JsonValue, InternalError> {
        let meanings = require_many(record, "meanings", opts)?
            .iter()
            .map(|meaning| {
                Ok(json!({
                    "id": require(meaning, "id", opts)?,
                    "gloss": require(meaning, "gloss", opts)?,
                }))
            })
            .collect::<Result<Vec<_>, InternalError>>()?;

        Ok(json!({
            "id": require(record, "id", opts)?,
            "lemma": require(record, "lemma", opts)?,
            "romanization": require(record, "romanization", opts)?,
            "language": language_code(record, opts)?,
            "meanings": meanings,
        }))
    }
}

///
/// TESTS
///
