//! Profile screen orchestration.
//!
//! [`ProfileScreen`] owns the view state and the cached identity of the
//! signed-in user and runs the three workflows that mutate them: the
//! initial load, the avatar upload pipeline and the account deletion
//! workflow. Everything the screen needs from the outside world comes in
//! through [`RemoteGateway`](pf_gateway::RemoteGateway) and the traits in
//! [`collaborators`].

pub mod collaborators;
pub mod error;
pub mod menu;
pub mod messages;
pub mod screen;
pub mod settings;
pub mod view_state;
pub mod workflows;

#[cfg(test)]
mod tests;

pub use collaborators::{
    CollaboratorError, CollaboratorResult, FilePicker, ImageLoader, Navigator, Notifier,
    SessionStore,
};
pub use error::{ProfileError, Result as ProfileResult};
pub use menu::{MenuAction, MenuItem, menu_items, setting_items};
pub use screen::{Activation, DeletionPrompt, ProfileDeps, ProfileScreen};
pub use settings::ProfileSettings;
pub use view_state::{BusyGuard, BusyOp, ViewState, ViewStateMachine};
pub use workflows::account_deletion::{AccountDeletionWorkflow, DeletionReport};
pub use workflows::avatar_upload::{AvatarUploadPipeline, CacheBuster};
pub use workflows::profile_loader::{LoadReport, ProfileLoader};
