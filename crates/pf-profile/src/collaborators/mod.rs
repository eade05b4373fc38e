//! Host-side services the profile screen drives but does not own.
//!
//! The screen never talks to a router, a toast surface, local storage or
//! an image decoder directly; the host injects implementations of these
//! traits through [`ProfileDeps`](crate::ProfileDeps).

mod error;

pub use error::{CollaboratorError, Result as CollaboratorResult};

use pf_core::{Route, SelectedFile};

use async_trait::async_trait;

/// Client-side routing.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// User-visible notifications (toasts).
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Local session artifacts (tokens, cached credentials).
pub trait SessionStore: Send + Sync {
    /// Removes every local session artifact. Clearing an empty store succeeds.
    fn clear(&self) -> CollaboratorResult<()>;
}

/// Fetches and decodes an image before it is displayed.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn preload(&self, url: &str) -> CollaboratorResult<()>;
}

/// Lets the user choose an image file. `Ok(None)` means the user cancelled.
#[async_trait]
pub trait FilePicker: Send + Sync {
    async fn pick(&self) -> CollaboratorResult<Option<SelectedFile>>;
}
