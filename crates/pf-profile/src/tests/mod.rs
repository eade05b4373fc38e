
use crate::{
    CollaboratorError, CollaboratorResult, FilePicker, ImageLoader, Navigator, Notifier,
    ProfileDeps, ProfileScreen, ProfileSettings, SessionStore,
};

use pf_core::{Route, SelectedFile, UserField, UserId};
use pf_gateway::{AuthUser, GatewayError, GatewayResult, RemoteGateway, UploadOptions};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::{Barrier, Notify};

pub(crate) const USER: &str = "u123";
pub(crate) const PUBLIC_BASE: &str = "https://cdn.test/storage/v1/object/public";

pub(crate) fn user_id() -> UserId {
    UserId::new(USER).unwrap()
}

pub(crate) fn png(name: &str) -> SelectedFile {
    SelectedFile::new(name, Bytes::from_static(b"\x89PNG\r\n\x1a\n"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    CurrentUser,
    ReadField(UserField),
    UpdateField(UserField, String),
    DeleteRows(String),
    CountRows(String),
    Upload {
        path: String,
        options: UploadOptions,
    },
    RemoveBlobs(Vec<String>),
    DeleteIdentity,
}

/// In-memory gateway recording every call. Failures are opted into per
/// operation.
#[derive(Default)]
pub(crate) struct StubGateway {
    pub signed_in: bool,
    pub username: Option<String>,
    pub avatar_url: Mutex<Option<String>>,
    pub post_count: u64,
    pub fail_reads: Vec<UserField>,
    pub fail_count: bool,
    pub fail_upload: bool,
    pub fail_persist: bool,
    pub fail_tables: Vec<&'static str>,
    pub fail_remove: bool,
    pub fail_identity: bool,
    /// When set, `delete_identity` waits for a notification first.
    pub identity_gate: Option<Arc<Notify>>,
    /// When set, field reads, counts and row deletes wait until this many
    /// of them are in flight together.
    pub rendezvous: Option<Arc<Barrier>>,
    pub calls: Mutex<Vec<Call>>,
}

impl StubGateway {
    pub fn signed_in() -> Self {
        Self {
            signed_in: true,
            username: Some("alice".to_string()),
            avatar_url: Mutex::new(Some(format!("{PUBLIC_BASE}/profile_img/{USER}/{USER}.jpg"))),
            post_count: 4,
            ..Self::default()
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn persisted_avatar(&self) -> Option<String> {
        self.avatar_url.lock().unwrap().clone()
    }

    /// Requires `parties` concurrent reads or deletes before any finishes.
    pub fn with_rendezvous(self, parties: usize) -> Self {
        Self {
            rendezvous: Some(Arc::new(Barrier::new(parties))),
            ..self
        }
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn meet(&self) {
        if let Some(barrier) = &self.rendezvous {
            barrier.wait().await;
        }
    }

    fn failure(&self, what: &str) -> GatewayError {
        GatewayError::api(500, "stub", format!("{what} failed"))
    }
}

#[async_trait]
impl RemoteGateway for StubGateway {
    async fn current_user(&self) -> GatewayResult<Option<AuthUser>> {
        self.record(Call::CurrentUser);
        Ok(self.signed_in.then(|| AuthUser {
            id: user_id(),
            email: Some("alice@example.com".to_string()),
        }))
    }

    async fn read_user_field(
        &self,
        _user_id: &UserId,
        field: UserField,
    ) -> GatewayResult<Option<String>> {
        self.record(Call::ReadField(field));
        self.meet().await;
        if self.fail_reads.contains(&field) {
            return Err(self.failure(field.as_column()));
        }
        Ok(match field {
            UserField::Username => self.username.clone(),
            UserField::ProfileImage => self.persisted_avatar(),
        })
    }

    async fn update_user_field(
        &self,
        _user_id: &UserId,
        field: UserField,
        value: &str,
    ) -> GatewayResult<()> {
        self.record(Call::UpdateField(field, value.to_string()));
        if self.fail_persist {
            return Err(self.failure("update"));
        }
        if field == UserField::ProfileImage {
            *self.avatar_url.lock().unwrap() = Some(value.to_string());
        }
        Ok(())
    }

    async fn delete_rows(
        &self,
        table: &str,
        _column: &str,
        _user_id: &UserId,
    ) -> GatewayResult<()> {
        self.record(Call::DeleteRows(table.to_string()));
        self.meet().await;
        if self.fail_tables.iter().any(|failing| *failing == table) {
            return Err(self.failure(table));
        }
        Ok(())
    }

    async fn count_rows(
        &self,
        table: &str,
        _column: &str,
        _user_id: &UserId,
    ) -> GatewayResult<u64> {
        self.record(Call::CountRows(table.to_string()));
        self.meet().await;
        if self.fail_count {
            return Err(self.failure("count"));
        }
        Ok(self.post_count)
    }

    async fn upload_blob(
        &self,
        _bucket: &str,
        path: &str,
        _bytes: Bytes,
        options: &UploadOptions,
    ) -> GatewayResult<()> {
        self.record(Call::Upload {
            path: path.to_string(),
            options: options.clone(),
        });
        if self.fail_upload {
            return Err(self.failure("upload"));
        }
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{PUBLIC_BASE}/{bucket}/{path}")
    }

    async fn remove_blobs(&self, _bucket: &str, paths: &[String]) -> GatewayResult<()> {
        self.record(Call::RemoveBlobs(paths.to_vec()));
        if self.fail_remove {
            return Err(self.failure("remove"));
        }
        Ok(())
    }

    async fn delete_identity(&self, _user_id: &UserId) -> GatewayResult<()> {
        self.record(Call::DeleteIdentity);
        if let Some(gate) = &self.identity_gate {
            gate.notified().await;
        }
        if self.fail_identity {
            return Err(self.failure("identity"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Notice {
    Success(String),
    Error(String),
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Error(message.to_string()));
    }
}

#[derive(Default)]
pub(crate) struct StubSession {
    pub fail: bool,
    pub clears: Mutex<usize>,
}

impl SessionStore for StubSession {
    fn clear(&self) -> CollaboratorResult<()> {
        *self.clears.lock().unwrap() += 1;
        if self.fail {
            return Err(CollaboratorError::session("disk full"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct StubImageLoader {
    pub fail: bool,
    pub loaded: Mutex<Vec<String>>,
}

#[async_trait]
impl ImageLoader for StubImageLoader {
    async fn preload(&self, url: &str) -> CollaboratorResult<()> {
        if self.fail {
            return Err(CollaboratorError::image("not an image"));
        }
        self.loaded.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Hands out one queued outcome per pick; cancels when the queue is empty.
#[derive(Default)]
pub(crate) struct StubFilePicker {
    pub next: Mutex<Option<CollaboratorResult<Option<SelectedFile>>>>,
    pub picks: Mutex<usize>,
}

impl StubFilePicker {
    pub fn returning(file: SelectedFile) -> Self {
        Self {
            next: Mutex::new(Some(Ok(Some(file)))),
            picks: Mutex::new(0),
        }
    }
}

#[async_trait]
impl FilePicker for StubFilePicker {
    async fn pick(&self) -> CollaboratorResult<Option<SelectedFile>> {
        *self.picks.lock().unwrap() += 1;
        self.next.lock().unwrap().take().unwrap_or(Ok(None))
    }
}

/// A screen wired to stubs, with handles kept for assertions.
pub(crate) struct Harness {
    pub gateway: Arc<StubGateway>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
    pub session: Arc<StubSession>,
    pub file_picker: Arc<StubFilePicker>,
    pub screen: ProfileScreen,
}

impl Harness {
    pub fn new(gateway: StubGateway) -> Self {
        Self::with(
            gateway,
            StubSession::default(),
            StubImageLoader::default(),
            StubFilePicker::default(),
        )
    }

    pub fn with(
        gateway: StubGateway,
        session: StubSession,
        image_loader: StubImageLoader,
        file_picker: StubFilePicker,
    ) -> Self {
        let gateway = Arc::new(gateway);
        let navigator = Arc::new(RecordingNavigator::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let session = Arc::new(session);
        let file_picker = Arc::new(file_picker);

        let deps = ProfileDeps {
            gateway: gateway.clone(),
            navigator: navigator.clone(),
            notifier: notifier.clone(),
            session: session.clone(),
            image_loader: Arc::new(image_loader),
            file_picker: file_picker.clone(),
        };

        Self {
            screen: ProfileScreen::new(deps, ProfileSettings::default()),
            gateway,
            navigator,
            notifier,
            session,
            file_picker,
        }
    }

    /// Harness whose screen has already finished loading.
    pub async fn mounted(gateway: StubGateway) -> Self {
        let harness = Self::new(gateway);
        harness.screen.mount().await.unwrap();
        harness
    }

    pub fn routes(&self) -> Vec<Route> {
        self.navigator.routes.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notifier.notices.lock().unwrap().clone()
    }

    pub fn session_clears(&self) -> usize {
        *self.session.clears.lock().unwrap()
    }

    pub fn picks(&self) -> usize {
        *self.file_picker.picks.lock().unwrap()
    }
}
