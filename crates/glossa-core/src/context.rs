use crate::{id::Id, load::Loader, viewer::Viewer};

///
/// Context
///
/// Per-request resolution context: the requesting viewer plus the loader the
/// annotations batch through. Always passed explicitly; nothing in the
/// resolver reads ambient state.
///

#[derive(Clone, Copy)]
pub struct Context<'a> {
    viewer: Viewer,
    loader: &'a dyn Loader,
}

impl<'a> Context<'a> {
    #[must_use]
    pub const fn new(viewer: Viewer, loader: &'a dyn Loader) -> Self {
        Self { viewer, loader }
    }

    /// Context for an unauthenticated request.
    #[must_use]
    pub const fn anonymous(loader: &'a dyn Loader) -> Self {
        Self::new(Viewer::Anonymous, loader)
    }

    /// Context for an authenticated request acting as `profile` of `user`.
    #[must_use]
    pub const fn authenticated(profile: Id, user: Id, loader: &'a dyn Loader) -> Self {
        Self::new(Viewer::authenticated(profile, user), loader)
    }

    #[must_use]
    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    #[must_use]
    pub const fn loader(&self) -> &'a dyn Loader {
        self.loader
    }
}
