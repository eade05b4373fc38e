use crate::{
    AccountDeletionWorkflow, AvatarUploadPipeline, BusyOp, CacheBuster, DeletionReport,
    FilePicker, ImageLoader, LoadReport, MenuAction, Navigator, Notifier, ProfileError,
    ProfileLoader, ProfileResult, ProfileSettings, SessionStore, ViewState, ViewStateMachine,
    messages,
};

use pf_core::{ProfileSnapshot, Route, SelectedFile, UploadResult, UserId, UserIdentity};
use pf_gateway::RemoteGateway;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use tokio::sync::watch;

/// Everything the screen needs from its host.
#[derive(Clone)]
pub struct ProfileDeps {
    pub gateway: Arc<dyn RemoteGateway>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
    pub session: Arc<dyn SessionStore>,
    pub image_loader: Arc<dyn ImageLoader>,
    pub file_picker: Arc<dyn FilePicker>,
}

/// The profile screen: view state, the cached identity and the workflows
/// that change them.
///
/// Cached state is only replaced when a workflow completes; no lock is held
/// across an await.
pub struct ProfileScreen {
    deps: ProfileDeps,
    settings: ProfileSettings,
    view: ViewStateMachine,
    snapshot: Mutex<ProfileSnapshot>,
    user_id: Mutex<Option<UserId>>,
    cache_buster: CacheBuster,
    delete_modal_open: AtomicBool,
}

/// Result of activating a menu entry.
#[derive(Debug)]
pub enum Activation<'a> {
    Navigated(Route),
    LoggedOut,
    /// The deletion modal is open; the caller decides.
    ConfirmDeletion(DeletionPrompt<'a>),
    /// The entry has no destination yet.
    Unavailable(MenuAction),
}

impl ProfileScreen {
    pub fn new(deps: ProfileDeps, settings: ProfileSettings) -> Self {
        Self {
            deps,
            settings,
            view: ViewStateMachine::new(),
            snapshot: Mutex::new(ProfileSnapshot::default()),
            user_id: Mutex::new(None),
            cache_buster: CacheBuster::new(),
            delete_modal_open: AtomicBool::new(false),
        }
    }

    /// Runs the initial load and leaves Loading. Only valid once.
    pub async fn mount(&self) -> ProfileResult<LoadReport> {
        let state = self.view.state();
        if state != ViewState::Loading {
            return Err(ProfileError::invalid_transition(state, ViewState::Ready));
        }

        let report = ProfileLoader::new(self.deps.gateway.as_ref(), &self.settings)
            .load()
            .await;

        *lock(&self.snapshot) = report.snapshot.clone();
        *lock(&self.user_id) = report.identity.clone();

        self.view.finish_loading()?;

        Ok(report)
    }

    pub fn state(&self) -> ViewState {
        self.view.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view.subscribe()
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        lock(&self.snapshot).clone()
    }

    /// Cached identity of the signed-in user, `None` before mount or when
    /// signed out.
    pub fn identity(&self) -> Option<UserIdentity> {
        let id = lock(&self.user_id).clone()?;
        let snapshot = self.snapshot();
        Some(UserIdentity {
            id,
            username: snapshot.username,
            avatar_url: snapshot.avatar_url,
        })
    }

    /// Avatar click: asks the picker for a file and uploads it.
    /// `Ok(None)` when the user cancelled the picker.
    pub async fn select_file(&self) -> ProfileResult<Option<UploadResult>> {
        match self.view.state() {
            ViewState::Busy(op) => {
                warn!("Avatar picker ignored while {op}");
                return Err(ProfileError::busy(op));
            }
            state if !state.is_interactive() => {
                warn!("Avatar picker ignored while {state}");
                return Err(ProfileError::invalid_transition(
                    state,
                    ViewState::Busy(BusyOp::Uploading),
                ));
            }
            _ => {}
        }

        let file = match self.deps.file_picker.pick().await {
            Ok(Some(file)) => file,
            Ok(None) => {
                debug!("Avatar picker cancelled");
                return Ok(None);
            }
            Err(e) => {
                let err = ProfileError::file_selection(e);
                warn!("{err}");
                self.deps.notifier.error(messages::AVATAR_UPLOAD_FAILED);
                return Err(err);
            }
        };

        self.handle_file_change(file).await.map(Some)
    }

    /// Runs the avatar upload pipeline for `file`.
    pub async fn handle_file_change(&self, file: SelectedFile) -> ProfileResult<UploadResult> {
        let guard = self.begin(BusyOp::Uploading)?;

        let pipeline = AvatarUploadPipeline::new(
            self.deps.gateway.as_ref(),
            self.deps.image_loader.as_ref(),
            &self.settings,
            &self.cache_buster,
        );

        match pipeline.run(file).await {
            Ok(result) => {
                lock(&self.snapshot).avatar_url = Some(result.display_url());
                self.deps.notifier.success(messages::AVATAR_UPDATED);
                guard.succeed();
                Ok(result)
            }
            Err(err) => {
                warn!("Avatar upload failed: {err}");
                let message = match err {
                    ProfileError::Decode { .. } => messages::AVATAR_LOAD_FAILED,
                    _ => messages::AVATAR_UPLOAD_FAILED,
                };
                self.deps.notifier.error(message);
                guard.fail(&err);
                Err(err)
            }
        }
    }

    /// Opens the deletion confirmation. Nothing is deleted until
    /// [`DeletionPrompt::confirm`].
    pub fn request_account_deletion(&self) -> DeletionPrompt<'_> {
        self.delete_modal_open.store(true, Ordering::Release);
        DeletionPrompt { screen: self }
    }

    pub fn is_delete_modal_open(&self) -> bool {
        self.delete_modal_open.load(Ordering::Acquire)
    }

    /// Clears the local session and returns to the landing page.
    pub fn logout(&self) {
        self.clear_session();
        self.deps.navigator.navigate(Route::Root);
        self.deps.notifier.success(messages::LOGGED_OUT);
        info!("Logged out");
    }

    pub fn activate(&self, action: MenuAction) -> Activation<'_> {
        match action {
            MenuAction::MyProfile => self.navigate(Route::ProfileView),
            MenuAction::InterestSettings => self.navigate(Route::Interest),
            MenuAction::Logout => {
                self.logout();
                Activation::LoggedOut
            }
            MenuAction::DeleteAccount => {
                Activation::ConfirmDeletion(self.request_account_deletion())
            }
            MenuAction::SavedPosts
            | MenuAction::MyParty
            | MenuAction::ThemeToggle
            | MenuAction::Notices
            | MenuAction::ServiceInfo => {
                info!("Menu entry {action} has no destination");
                Activation::Unavailable(action)
            }
        }
    }

    fn navigate(&self, route: Route) -> Activation<'_> {
        self.deps.navigator.navigate(route);
        Activation::Navigated(route)
    }

    #[track_caller]
    fn begin(&self, op: BusyOp) -> ProfileResult<crate::BusyGuard<'_>> {
        self.view.try_begin(op).inspect_err(|e| warn!("{op} rejected: {e}"))
    }

    async fn delete_account(&self) -> ProfileResult<DeletionReport> {
        let guard = self.begin(BusyOp::Deleting)?;

        let cached_avatar = lock(&self.snapshot).avatar_url.clone();
        let workflow = AccountDeletionWorkflow::new(self.deps.gateway.as_ref(), &self.settings);

        match workflow.run(cached_avatar.as_deref()).await {
            Ok(report) => {
                *lock(&self.snapshot) = ProfileSnapshot::default();
                *lock(&self.user_id) = None;
                self.clear_session();
                self.deps.navigator.navigate(Route::Root);
                self.deps.notifier.success(messages::ACCOUNT_DELETED);
                guard.succeed();
                Ok(report)
            }
            Err(err) => {
                warn!("Account deletion failed: {err}");
                self.deps.notifier.error(messages::ACCOUNT_DELETE_FAILED);
                guard.fail(&err);
                Err(err)
            }
        }
    }

    fn clear_session(&self) {
        if let Err(e) = self.deps.session.clear() {
            warn!("Local session not cleared: {e}");
        }
    }
}

/// Open deletion confirmation modal.
///
/// Consuming it is the only way forward: [`confirm`](Self::confirm) runs
/// the deletion, [`cancel`](Self::cancel) does nothing. The modal closes
/// when the prompt is dropped, whatever the outcome.
#[derive(Debug)]
#[must_use = "dropping the prompt closes the modal"]
pub struct DeletionPrompt<'a> {
    screen: &'a ProfileScreen,
}

impl DeletionPrompt<'_> {
    pub fn title(&self) -> &'static str {
        messages::DELETE_MODAL_TITLE
    }

    pub fn description(&self) -> &'static str {
        messages::DELETE_MODAL_DESCRIPTION
    }

    pub fn confirm_label(&self) -> &'static str {
        messages::DELETE_MODAL_CONFIRM
    }

    pub fn cancel_label(&self) -> &'static str {
        messages::DELETE_MODAL_CANCEL
    }

    pub async fn confirm(self) -> ProfileResult<DeletionReport> {
        self.screen.delete_account().await
    }

    pub fn cancel(self) {
        debug!("Account deletion cancelled");
    }
}

impl Drop for DeletionPrompt<'_> {
    fn drop(&mut self) {
        self.screen.delete_modal_open.store(false, Ordering::Release);
    }
}

impl std::fmt::Debug for ProfileScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileScreen")
            .field("state", &self.view.state())
            .field("snapshot", &self.snapshot())
            .finish_non_exhaustive()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
