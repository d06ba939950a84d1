//! Core runtime for Glossa: fetch specifications, view descriptions, the
//! fetch plan builder, the post-load annotator, and the serializer family,
//! plus the ergonomics exported via the `prelude`.
//!
//! The pipeline for one read request is strictly linear:
//! view → [plan] → fetch plan → [load] → record graph → [annotate] →
//! annotated record graph → [serialize] → JSON. Each stage either completes
//! or raises; there is no retry state.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod annotate;
pub mod context;
pub mod criteria;
pub mod entities;
pub mod error;
pub mod id;
pub mod load;
pub mod plan;
pub mod record;
pub mod resolve;
pub mod serialize;
pub mod spec;
pub mod value;
pub mod view;
pub mod viewer;

mod macros;


///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors, the registry, and serializer internals are not re-exported here.
///

pub mod prelude {
    pub use crate::{
        context::Context,
        criteria::{Criteria, Criterion},
        id::Id,
        load::Loader,
        plan::{FetchPlan, FieldPath, build_fetch_plan},
        record::{Record, Related},
        resolve::{fetch_one, fetch_view},
        value::Value,
        view::View,
        viewer::Viewer,
    };
}
