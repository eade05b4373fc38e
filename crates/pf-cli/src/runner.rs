use crate::commands::Commands;
use crate::host::{HttpImageLoader, PathFilePicker, RecordingNavigator, TerminalNotifier};
use crate::session::{FileSessionStore, SessionError, StoredSession};
use crate::{CliError, CliResult};

use pf_config::Config;
use pf_gateway::{HttpGateway, RemoteGateway};
use pf_profile::{
    Activation, DeletionPrompt, MenuAction, MenuItem, ProfileDeps, ProfileScreen,
    ProfileSettings, menu_items, setting_items,
};

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use reqwest::Client as ReqwestClient;
use serde_json::{Value, json};

/// Executes one `pf` command against a freshly built profile screen.
pub struct Runner {
    config: Config,
    session: Arc<FileSessionStore>,
    notifier: Arc<TerminalNotifier>,
}

/// Screen plus the host handles the command reports from.
struct Wired {
    screen: ProfileScreen,
    navigator: Arc<RecordingNavigator>,
}

impl Runner {
    pub fn new(config: Config) -> CliResult<Self> {
        let session_path = config.session_path()?;
        Ok(Self::with_session_path(config, session_path))
    }

    pub fn with_session_path(config: Config, session_path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            session: Arc::new(FileSessionStore::new(session_path)),
            notifier: Arc::new(TerminalNotifier::default()),
        }
    }

    /// Keeps notifications out of stderr.
    pub fn quiet(mut self) -> Self {
        self.notifier = Arc::new(TerminalNotifier::quiet());
        self
    }

    pub async fn run(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Show => self.show().await,
            Commands::Avatar { path } => self.avatar(path).await,
            Commands::DeleteAccount { yes } => self.delete_account(yes).await,
            Commands::Logout => self.logout(),
            Commands::Login { access_token } => self.login(&access_token).await,
            Commands::Open { entry } => self.open(&entry).await,
            Commands::Menu => Ok(json!({
                "menu": menu_items().iter().map(menu_item_json).collect::<Vec<_>>(),
                "settings": setting_items().iter().map(menu_item_json).collect::<Vec<_>>(),
            })),
        }
    }

    async fn show(&self) -> CliResult<Value> {
        let wired = self.wire(PathFilePicker::none())?;
        let report = wired.screen.mount().await?;
        let snapshot = wired.screen.snapshot();

        Ok(json!({
            "state": wired.screen.state().to_string(),
            "user_id": report.identity,
            "username": snapshot.username,
            "avatar_url": snapshot.avatar_url,
            "post_count": snapshot.post_count,
            "errors": report.errors.iter().map(|e| e.summary()).collect::<Vec<_>>(),
        }))
    }

    async fn avatar(&self, path: PathBuf) -> CliResult<Value> {
        let wired = self.wire(PathFilePicker::new(path))?;
        wired.screen.mount().await?;

        match wired.screen.select_file().await? {
            Some(result) => Ok(json!({
                "published_url": result.published_url,
                "version": result.version,
                "display_url": result.display_url(),
                "notifications": self.notifier.sent(),
            })),
            None => Ok(json!({ "cancelled": true })),
        }
    }

    async fn delete_account(&self, assume_yes: bool) -> CliResult<Value> {
        let wired = self.wire(PathFilePicker::none())?;
        wired.screen.mount().await?;

        let prompt = wired.screen.request_account_deletion();
        if !assume_yes && !confirm_on_terminal(&prompt) {
            prompt.cancel();
            return Ok(json!({ "cancelled": true }));
        }

        let report = prompt.confirm().await?;

        Ok(json!({
            "user_id": report.user_id,
            "attempted_tables": report.attempted_tables,
            "failed_tables": report.failed_tables,
            "media_removed": report.media_removed,
            "warnings": report.errors.iter().map(|e| e.summary()).collect::<Vec<_>>(),
            "routes": route_paths(&wired.navigator),
        }))
    }

    fn logout(&self) -> CliResult<Value> {
        let wired = self.wire(PathFilePicker::none())?;
        wired.screen.logout();

        Ok(json!({
            "logged_out": true,
            "routes": route_paths(&wired.navigator),
        }))
    }

    async fn login(&self, access_token: &str) -> CliResult<Value> {
        let gateway =
            HttpGateway::from_config(&self.config.gateway)?.with_access_token(access_token);

        let user = gateway
            .current_user()
            .await?
            .ok_or_else(|| CliError::invalid_argument("access token was rejected"))?;

        self.session
            .save(&StoredSession::new(access_token, Some(user.id.clone())))?;
        info!("Signed in as {}", user.id);

        Ok(json!({
            "user_id": user.id,
            "email": user.email,
        }))
    }

    async fn open(&self, entry: &str) -> CliResult<Value> {
        let action = MenuAction::from_name(entry).ok_or_else(|| {
            let names: Vec<_> = MenuAction::ALL.iter().map(|a| a.name()).collect();
            CliError::invalid_argument(format!(
                "unknown menu entry '{entry}', expected one of: {}",
                names.join(", ")
            ))
        })?;

        let wired = self.wire(PathFilePicker::none())?;
        wired.screen.mount().await?;

        let outcome = match wired.screen.activate(action) {
            Activation::Navigated(route) => json!({ "navigated": route.path() }),
            Activation::LoggedOut => json!({ "logged_out": true }),
            Activation::ConfirmDeletion(prompt) => {
                prompt.cancel();
                json!({ "confirmation_required": "pf delete-account" })
            }
            Activation::Unavailable(action) => json!({ "unavailable": action.name() }),
        };

        Ok(json!({ "action": action.name(), "outcome": outcome }))
    }

    fn wire(&self, file_picker: PathFilePicker) -> CliResult<Wired> {
        let mut gateway = HttpGateway::from_config(&self.config.gateway)?;
        match self.session.load() {
            Ok(Some(stored)) => gateway = gateway.with_access_token(stored.access_token),
            Ok(None) => {}
            Err(e @ SessionError::Corrupted { .. }) => {
                warn!("Ignoring unreadable session: {e}");
            }
            Err(e) => return Err(e.into()),
        }

        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(self.config.gateway.timeout_secs))
            .build()
            .map_err(pf_gateway::GatewayError::from_reqwest)?;

        let navigator = Arc::new(RecordingNavigator::default());

        let deps = ProfileDeps {
            gateway: Arc::new(gateway),
            navigator: navigator.clone(),
            notifier: self.notifier.clone(),
            session: self.session.clone(),
            image_loader: Arc::new(HttpImageLoader::new(client)),
            file_picker: Arc::new(file_picker),
        };

        Ok(Wired {
            screen: ProfileScreen::new(deps, ProfileSettings::from(&self.config.storage)),
            navigator,
        })
    }
}

fn confirm_on_terminal(prompt: &DeletionPrompt<'_>) -> bool {
    eprintln!("{}", prompt.title());
    eprintln!("{}", prompt.description());
    eprint!(
        "{} [y] / {} [N]: ",
        prompt.confirm_label(),
        prompt.cancel_label()
    );
    let _ = std::io::stderr().flush();

    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

fn route_paths(navigator: &RecordingNavigator) -> Vec<&'static str> {
    navigator.routes().iter().map(|route| route.path()).collect()
}

fn menu_item_json(item: &MenuItem) -> Value {
    json!({
        "label": item.label,
        "icon": item.icon,
        "entry": item.action.name(),
    })
}
