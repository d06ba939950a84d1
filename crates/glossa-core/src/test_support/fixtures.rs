use crate::{
    context::Context,
    id::Id,
    test_support::loader::{MemLoader, Row},
    value::Value,
};
use chrono::{TimeZone, Utc};

/// Deterministic fixture id.
pub(crate) fn fixed_id(n: u128) -> Id {
    Id::from_parts(0, n)
}

fn row<const N: usize>(pairs: [(&str, Value); N]) -> Row {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

fn ts(day: u32) -> Value {
    Value::Timestamp(Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap())
}

///
/// Fixture
///
/// The shared dataset: two languages, two learners, three courses with
/// lessons and texts, a shared vocabulary term with per-learner meanings,
/// three collections (one bookmarked by the viewer), and the viewer's
/// progress rows. `viewer_ctx` acts as annika.
///

pub(crate) struct Fixture {
    pub(crate) loader: MemLoader,

    pub(crate) language_de: Id,
    pub(crate) user_annika: Id,
    pub(crate) profile_annika: Id,
    pub(crate) profile_mateo: Id,
    pub(crate) course_prinz: Id,
    pub(crate) collection_fables: Id,
    pub(crate) collection_news: Id,
    pub(crate) term_hund: Id,
    pub(crate) meaning_dog: Id,
}

impl Fixture {
    pub(crate) fn viewer_ctx(&self) -> Context<'_> {
        Context::authenticated(self.profile_annika, self.user_annika, &self.loader)
    }

    pub(crate) fn anonymous_ctx(&self) -> Context<'_> {
        Context::anonymous(&self.loader)
    }
}

pub(crate) fn language_platform() -> Fixture {
    let mut loader = MemLoader::new();

    // ids
    let language_de = fixed_id(1);
    let language_fr = fixed_id(2);
    let user_annika = fixed_id(10);
    let user_mateo = fixed_id(11);
    let profile_annika = fixed_id(20);
    let profile_mateo = fixed_id(21);
    let course_prinz = fixed_id(30);
    let course_momo = fixed_id(31);
    let course_nicolas = fixed_id(32);
    let collection_fables = fixed_id(80);
    let collection_news = fixed_id(81);
    let collection_poems = fixed_id(82);
    let term_hund = fixed_id(60);
    let meaning_dog = fixed_id(70);

    // relation wiring
    loader.wire_local("profile", "user", "user");
    loader.wire_local("profile", "language", "language");
    loader.wire_local("course", "language", "language");
    loader.wire_local("course", "added_by", "profile");
    loader.wire_foreign("course", "lessons", "lesson", "course");
    loader.wire_local("lesson", "course", "course");
    loader.wire_foreign("lesson", "texts", "text", "lesson");
    loader.wire_local("text", "lesson", "lesson");
    loader.wire_local("term", "language", "language");
    loader.wire_foreign("term", "meanings", "meaning", "term");
    loader.wire_local("meaning", "term", "term");
    loader.wire_local("meaning", "learner", "profile");
    loader.wire_local("collection", "added_by", "profile");
    loader.wire_foreign("language", "courses", "course", "language");

    // languages
    loader.insert(
        "language",
        row([
            ("id", Value::Id(language_de)),
            ("code", Value::from("de")),
            ("name", Value::from("German")),
            ("right_to_left", Value::Bool(false)),
        ]),
    );
    loader.insert(
        "language",
        row([
            ("id", Value::Id(language_fr)),
            ("code", Value::from("fr")),
            ("name", Value::from("French")),
            ("right_to_left", Value::Bool(false)),
        ]),
    );

    // users and profiles
    loader.insert(
        "user",
        row([
            ("id", Value::Id(user_annika)),
            ("username", Value::from("annika")),
            ("email", Value::from("annika@example.net")),
            ("joined_at", ts(1)),
        ]),
    );
    loader.insert(
        "user",
        row([
            ("id", Value::Id(user_mateo)),
            ("username", Value::from("mateo")),
            ("email", Value::from("mateo@example.net")),
            ("joined_at", ts(2)),
        ]),
    );
    loader.insert(
        "profile",
        row([
            ("id", Value::Id(profile_annika)),
            ("display_name", Value::from("Annika")),
            ("user", Value::Id(user_annika)),
            ("language", Value::Id(language_de)),
        ]),
    );
    loader.insert(
        "profile",
        row([
            ("id", Value::Id(profile_mateo)),
            ("display_name", Value::from("Mateo")),
            ("user", Value::Id(user_mateo)),
            ("language", Value::Id(language_fr)),
        ]),
    );

    // courses (formula values precomputed, as the store would per row)
    loader.insert(
        "course",
        row([
            ("id", Value::Id(course_prinz)),
            ("title", Value::from("Der Kleine Prinz")),
            ("description", Value::from("The Little Prince, in German.")),
            ("is_public", Value::Bool(true)),
            ("created_at", ts(3)),
            ("lesson_count", Value::Uint(3)),
            ("term_count", Value::Uint(1)),
            ("language", Value::Id(language_de)),
            ("added_by", Value::Id(profile_mateo)),
        ]),
    );
    loader.insert(
        "course",
        row([
            ("id", Value::Id(course_momo)),
            ("title", Value::from("Momo")),
            ("description", Value::from("Michael Ende's Momo.")),
            ("is_public", Value::Bool(true)),
            ("created_at", ts(4)),
            ("lesson_count", Value::Uint(1)),
            ("term_count", Value::Uint(0)),
            ("language", Value::Id(language_de)),
            ("added_by", Value::Id(profile_annika)),
        ]),
    );
    loader.insert(
        "course",
        row([
            ("id", Value::Id(course_nicolas)),
            ("title", Value::from("Le Petit Nicolas")),
            ("description", Value::from("Short stories for beginners.")),
            ("is_public", Value::Bool(false)),
            ("created_at", ts(5)),
            ("lesson_count", Value::Uint(0)),
            ("term_count", Value::Uint(0)),
            ("language", Value::Id(language_fr)),
            ("added_by", Value::Id(profile_annika)),
        ]),
    );

    // lessons
    for (n, (course, title, position)) in [
        (course_prinz, "Kapitel 1", 1u64),
        (course_prinz, "Kapitel 2", 2),
        (course_prinz, "Kapitel 3", 3),
        (course_momo, "Die graue Herren", 1),
    ]
    .into_iter()
    .enumerate()
    {
        loader.insert(
            "lesson",
            row([
                ("id", Value::Id(fixed_id(40 + n as u128))),
                ("title", Value::from(title)),
                ("position", Value::Uint(position)),
                ("created_at", ts(6)),
                ("course", Value::Id(course)),
            ]),
        );
    }

    // one fully-populated text under the first lesson
    loader.insert(
        "text",
        row([
            ("id", Value::Id(fixed_id(50))),
            ("title", Value::from("Kapitel 1 — Der Hut")),
            ("slug", Value::from("kapitel-1-der-hut")),
            ("body", Value::from("Als ich sechs Jahre alt war…")),
            ("audio_url", Value::Null),
            ("position", Value::Uint(1)),
            ("published", Value::Bool(true)),
            ("archived", Value::Bool(false)),
            ("created_at", ts(6)),
            ("updated_at", ts(7)),
            ("word_count", Value::Uint(412)),
            ("lesson", Value::Id(fixed_id(40))),
        ]),
    );

    // shared vocabulary with per-learner meanings
    loader.insert(
        "term",
        row([
            ("id", Value::Id(term_hund)),
            ("lemma", Value::from("Hund")),
            ("language", Value::Id(language_de)),
        ]),
    );
    loader.insert(
        "meaning",
        row([
            ("id", Value::Id(meaning_dog)),
            ("gloss", Value::from("dog")),
            ("created_at", ts(8)),
            ("term", Value::Id(term_hund)),
            ("learner", Value::Id(profile_annika)),
        ]),
    );
    loader.insert(
        "meaning",
        row([
            ("id", Value::Id(fixed_id(71))),
            ("gloss", Value::from("perro")),
            ("created_at", ts(8)),
            ("term", Value::Id(term_hund)),
            ("learner", Value::Id(profile_mateo)),
        ]),
    );

    // collections; annika bookmarked only the fables
    for (id, title, text_count) in [
        (collection_fables, "Aesop's Fables", 4u64),
        (collection_news, "Slow German News", 2),
        (collection_poems, "Poems", 0),
    ] {
        loader.insert(
            "collection",
            row([
                ("id", Value::Id(id)),
                ("title", Value::from(title)),
                ("description", Value::Null),
                ("created_at", ts(9)),
                ("text_count", Value::Uint(text_count)),
                ("added_by", Value::Id(profile_mateo)),
            ]),
        );
    }
    loader.insert(
        "bookmark",
        row([
            ("id", Value::Id(fixed_id(90))),
            ("created_at", ts(10)),
            ("collection", Value::Id(collection_fables)),
            ("profile", Value::Id(profile_annika)),
        ]),
    );

    // annika's progress in the prinz course: levels 1, 1, 2, 5
    for (n, level) in [1u64, 1, 2, 5].into_iter().enumerate() {
        loader.insert(
            "term_progress",
            row([
                ("id", Value::Id(fixed_id(100 + n as u128))),
                ("level", Value::Uint(level)),
                ("updated_at", ts(11)),
                ("term", Value::Id(term_hund)),
                ("course", Value::Id(course_prinz)),
                ("learner", Value::Id(profile_annika)),
            ]),
        );
    }
    // another learner's progress must never leak into annika's tally
    loader.insert(
        "term_progress",
        row([
            ("id", Value::Id(fixed_id(104))),
            ("level", Value::Uint(3)),
            ("updated_at", ts(11)),
            ("term", Value::Id(term_hund)),
            ("course", Value::Id(course_prinz)),
            ("learner", Value::Id(profile_mateo)),
        ]),
    );

    Fixture {
        loader,
        language_de,
        user_annika,
        profile_annika,
        profile_mateo,
        course_prinz,
        collection_fables,
        collection_news,
        term_hund,
        meaning_dog,
    }
}
