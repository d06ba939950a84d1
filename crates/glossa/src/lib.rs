//! Glossa: view-driven fetch and serialization for the learning platform.
//!
//! ## Crate layout
//! - `core`: fetch specifications, view descriptions, the plan builder,
//!   the annotator, and the serializer family.
//!
//! The `prelude` module mirrors the runtime surface used inside handler
//! code; everything else is reachable through `glossa::core`.

pub use glossa_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use glossa_core::{error::InternalError, view};

///
/// Handler Prelude
///

pub mod prelude {
    pub use crate::core::{
        context::Context,
        criteria::{Criteria, Criterion},
        id::Id,
        load::Loader,
        plan::{FetchPlan, FieldPath, build_fetch_plan},
        record::{Record, Related},
        resolve::{fetch_one, fetch_view},
        serialize::{EntitySerializer, SerializeOpts},
        value::Value,
        view::View,
        viewer::Viewer,
    };
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{Value as JsonValue, json};
}
