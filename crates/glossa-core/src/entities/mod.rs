//! Fetch specifications for the platform's entities.
//!
//! Each module declares one static [`EntitySpec`](crate::spec::EntitySpec)
//! plus any scope/annotation callbacks its fields carry. Relation targets
//! are thunks (`module::spec`), so the mutually recursive graph —
//! Language ↔ Course ↔ Lesson and friends — constructs without cycles.
//!
//! The entity *structs* (write models, validation) live with the HTTP layer;
//! this crate only needs to know what is fetchable and how.

pub mod bookmark;
pub mod collection;
pub mod course;
pub mod language;
pub mod lesson;
pub mod meaning;
pub mod profile;
pub mod term;
pub mod term_progress;
pub mod text;
pub mod user;
