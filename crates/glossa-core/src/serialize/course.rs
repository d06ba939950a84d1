use crate::{
    error::InternalError,
    record::Record,
    serialize::{
        EntitySerializer, SerializeOpts, language::language_code,
        lesson::LessonSummarySerializer, require, require_many, require_one,
    },
    view::View,
};
use serde_json::{Value as JsonValue, json};
use std::sync::LazyLock;

static SUMMARY_VIEW: LazyLock<View> = LazyLock::new(|| {
    crate::view!({
        fields: ["id", "title", "lesson_count"],
        relations: {
            language: { fields: ["code"] },
            added_by: {
                fields: [],
                relations: {
                    user: { fields: ["username"] },
                },
            },
        },
    })
});

static DETAIL_VIEW: LazyLock<View> = LazyLock::new(|| {
    crate::view!({
        fields: ["id", "title", "description", "lesson_count", "term_count", "mastery_tally"],
        relations: {
            language: { fields: ["code"] },
            added_by: {
                fields: [],
                relations: {
                    user: { fields: ["username"] },
                },
            },
            lessons: { fields: ["id", "title", "position"] },
        },
    })
});

/// A related profile renders as `{ id, username }` — the id of the profile,
/// the username of its account.
pub(crate) fn profile_brief(
    parent: &Record,
    field: &str,
    opts: &SerializeOpts,
) -> Result<JsonValue, InternalError> {
    let Some(profile) = require_one(parent, field, opts)? else {
        return Ok(JsonValue::Null);
    };
    let username = match require_one(profile, "user", opts)? {
        Some(user) => require(user, "username", opts)?,
        None => JsonValue::Null,
    };

    Ok(json!({
        "id": require(profile, "id", opts)?,
        "username": username,
    }))
}

///
/// CourseSummarySerializer
///
/// The public listing shape: no description, no lessons, no viewer data.
///

pub struct CourseSummarySerializer;

impl EntitySerializer for CourseSummarySerializer {
    fn view() -> &'static View {
        &SUMMARY_VIEW
    }

    fn serialize(record: &Record, opts: &SerializeOpts) -> Result<JsonValue, InternalError> {
        Ok(json!({
            "id": require(record, "id", opts)?,
            "title": require(record, "title", opts)?,
            "lessonCount": require(record, "lesson_count", opts)?,
            "language": language_code(record, opts)?,
            "addedBy": profile_brief(record, "added_by", opts)?,
        }))
    }
}

///
/// CourseDetailSerializer
///
/// The shape an enrolled learner sees: summary plus description, lessons,
/// and the viewer's mastery tally. Requires an authenticated viewer (the
/// tally is viewer-scoped), which the plan builder enforces.
///

pub struct CourseDetailSerializer;

impl EntitySerializer for CourseDetailSerializer {
    fn view() -> &'static View {
        &DETAIL_VIEW
    }

    fn serialize(record: &Record, opts: &SerializeOpts) -> Result<JsonValue, InternalError> {
        let lessons = require_many(record, "lessons", opts)?;

        Ok(json!({
            "id": require(record, "id", opts)?,
            "title": require(record, "title", opts)?,
            "description": require(record, "description", opts)?,
            "lessonCount": require(record, "lesson_count", opts)?,
            "termCount": require(record, "term_count", opts)?,
            "masteryTally": require(record, "mastery_tally", opts)?,
            "language": language_code(record, opts)?,
            "addedBy": profile_brief(record, "added_by", opts)?,
            "lessons": LessonSummarySerializer::serialize_list(lessons, opts)?,
        }))
    }
}

///
/// TESTS
///
