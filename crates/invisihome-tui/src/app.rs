//! Application state management for Invisihome.
//!
//! This module contains the core `App` struct that owns the session manager,
//! the landing-page form, the dashboard's page-local state and the channel
//! used by background analysis tasks.

use std::path::PathBuf;

use chrono::Local;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use invisihome_core::analysis::{
    process_file, write_export, AnalysisResults, UploadedFile, Ward, WARDS,
};
use invisihome_core::{AuthError, Config, SessionManager};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// Only one analysis runs per upload, so a handful is plenty.
const CHANNEL_BUFFER_SIZE: usize = 8;

/// Maximum length for name and email input.
const MAX_FIELD_LENGTH: usize = 64;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
const MAX_PASSWORD_LENGTH: usize = 128;

/// Maximum length for the upload path input.
const MAX_PATH_LENGTH: usize = 512;

/// Shown for any failed login, whatever the cause.
pub const LOGIN_FAILED_MESSAGE: &str =
    "Invalid email or password. Please check your credentials or create an account.";

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all fields.";

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

// ============================================================================
// UI State Types
// ============================================================================

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Dashboard,
    About,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Landing => "Welcome",
            View::Dashboard => "Dashboard",
            View::About => "About",
        }
    }

    /// Dashboard and About require a signed-in user
    pub fn is_protected(&self) -> bool {
        !matches!(self, View::Landing)
    }

    /// Get the next tab among the signed-in pages (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            View::Dashboard => View::About,
            View::About | View::Landing => View::Dashboard,
        }
    }
}

/// Decide which page is actually shown for a requested one.
///
/// Protected pages fall back to the landing page without a session, and the
/// landing page forwards to the dashboard once signed in.
pub fn resolve_view(requested: View, authenticated: bool) -> View {
    match (requested, authenticated) {
        (View::Landing, true) => View::Dashboard,
        (view, false) if view.is_protected() => View::Landing,
        (view, _) => view,
    }
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    EnteringPath,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

/// Which form the landing page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Landing form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    Email,
    Password,
    Submit,
    Toggle,
}

impl FormFocus {
    /// Next field in tab order; the name field only exists when signing up
    pub fn next(&self, mode: AuthMode) -> Self {
        match self {
            FormFocus::Name => FormFocus::Email,
            FormFocus::Email => FormFocus::Password,
            FormFocus::Password => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Toggle,
            FormFocus::Toggle => match mode {
                AuthMode::Login => FormFocus::Email,
                AuthMode::Signup => FormFocus::Name,
            },
        }
    }

    pub fn prev(&self, mode: AuthMode) -> Self {
        match (self, mode) {
            (FormFocus::Name, _) => FormFocus::Toggle,
            (FormFocus::Email, AuthMode::Login) => FormFocus::Toggle,
            (FormFocus::Email, AuthMode::Signup) => FormFocus::Name,
            (FormFocus::Password, _) => FormFocus::Email,
            (FormFocus::Submit, _) => FormFocus::Password,
            (FormFocus::Toggle, _) => FormFocus::Submit,
        }
    }
}

/// The landing page's login/signup form
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub focus: FormFocus,
    pub error: Option<String>,
    /// Set when the user submits; the main loop draws once, then runs it
    pub pending: bool,
}

impl AuthForm {
    /// Local checks run before any request: required fields are filled and
    /// the email has the shape `local@domain`
    fn check_fields(&self) -> Result<(), &'static str> {
        let name_missing = self.mode == AuthMode::Signup && self.name.is_empty();
        if name_missing || self.email.is_empty() || self.password.is_empty() {
            return Err(MISSING_FIELDS_MESSAGE);
        }
        match self.email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(INVALID_EMAIL_MESSAGE),
        }
    }

    fn new(email: Option<String>) -> Self {
        let email = email.unwrap_or_default();
        let focus = if email.is_empty() {
            FormFocus::Email
        } else {
            FormFocus::Password
        };
        Self {
            mode: AuthMode::Login,
            name: String::new(),
            email,
            password: String::new(),
            focus,
            error: None,
            pending: false,
        }
    }

    /// Switch between login and signup, keeping typed values
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        if self.mode == AuthMode::Login && self.focus == FormFocus::Name {
            self.focus = FormFocus::Email;
        }
    }

    /// The text field under focus, if any
    pub fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormFocus::Name => Some(&mut self.name),
            FormFocus::Email => Some(&mut self.email),
            FormFocus::Password => Some(&mut self.password),
            FormFocus::Submit | FormFocus::Toggle => None,
        }
    }

    /// Type a character into the focused field. Any edit clears the error.
    pub fn push_char(&mut self, c: char) {
        let is_password = self.focus == FormFocus::Password;
        if let Some(field) = self.focused_field_mut() {
            let accepted = if is_password {
                can_add_password_char(field.chars().count(), c)
            } else {
                can_add_field_char(field.chars().count(), c)
            };
            if accepted {
                field.push(c);
                self.error = None;
            }
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            if field.pop().is_some() {
                self.error = None;
            }
        }
    }
}

/// Page-local dashboard state. Dropped on logout.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub ward_index: usize,
    pub path_input: String,
    pub uploaded_file: Option<UploadedFile>,
    pub processing: bool,
    pub results: Option<AnalysisResults>,
    /// Bumped on every upload so results for a replaced file are ignored
    upload_generation: u64,
}

impl DashboardState {
    pub fn selected_ward(&self) -> &'static Ward {
        &WARDS[self.ward_index % WARDS.len()]
    }

    pub fn next_ward(&mut self) {
        self.ward_index = (self.ward_index + 1) % WARDS.len();
    }

    pub fn prev_ward(&mut self) {
        self.ward_index = (self.ward_index + WARDS.len() - 1) % WARDS.len();
    }
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Sent from a spawned analysis task back to the main loop.
struct AnalysisMessage {
    generation: u64,
    results: AnalysisResults,
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    pub config: Config,
    /// Where `last_email` is saved after a sign-in; nothing is saved when unset
    config_path: Option<PathBuf>,
    pub session: SessionManager,

    pub state: AppState,
    requested_view: View,

    pub form: AuthForm,
    pub dashboard: DashboardState,

    analysis_rx: mpsc::Receiver<AnalysisMessage>,
    analysis_tx: mpsc::Sender<AnalysisMessage>,

    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let session = SessionManager::with_latency(config.auth_delay());
        let form = AuthForm::new(config.last_email.clone());
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        debug!(
            auth_delay_ms = config.auth_delay_ms,
            processing_delay_ms = config.processing_delay_ms,
            "App created"
        );

        Self {
            config,
            config_path: None,
            session,
            state: AppState::Normal,
            requested_view: View::Landing,
            form,
            dashboard: DashboardState::default(),
            analysis_rx: rx,
            analysis_tx: tx,
            status_message: None,
        }
    }

    /// Save the signed-in email to the config file at `path`
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// The page actually on screen
    pub fn view(&self) -> View {
        resolve_view(self.requested_view, self.session.is_authenticated())
    }

    pub fn navigate(&mut self, view: View) {
        self.requested_view = view;
        debug!(requested = ?view, shown = ?self.view(), "Navigate");
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Queue the form for submission. Ignored while a request is in flight.
    /// Empty fields or a malformed email are reported without a request.
    pub fn submit_form(&mut self) {
        if self.form.pending {
            return;
        }
        if let Err(message) = self.form.check_fields() {
            debug!(mode = ?self.form.mode, "Form incomplete, not submitted");
            self.form.error = Some(message.to_string());
            return;
        }
        self.form.error = None;
        self.form.pending = true;
    }

    fn remember_email(&mut self, email: &str) {
        self.config.last_email = Some(email.to_string());
        if let Some(path) = &self.config_path {
            if let Err(e) = Config::remember_email(path, email) {
                warn!(error = %e, "Failed to save config");
            }
        }
    }

    /// Run a queued login/signup, if any
    pub async fn run_pending_auth(&mut self) {
        if !self.form.pending {
            return;
        }

        let result = match self.form.mode {
            AuthMode::Login => self
                .session
                .login(&self.form.email, &self.form.password)
                .await
                .map_err(|_| LOGIN_FAILED_MESSAGE.to_string()),
            AuthMode::Signup => self
                .session
                .signup(&self.form.name, &self.form.email, &self.form.password)
                .await
                .map_err(|e: AuthError| e.to_string()),
        };
        self.form.pending = false;

        match result {
            Ok(session) => {
                info!(mode = ?self.form.mode, "Authenticated");
                self.status_message = Some(format!("Welcome, {}", session.name));
                self.remember_email(&session.email);
                self.form = AuthForm::new(Some(session.email));
                self.navigate(View::Dashboard);
            }
            Err(message) => {
                self.form.error = Some(message);
            }
        }
    }

    pub fn logout(&mut self) {
        self.session.logout();
        // Keep the generation moving so a run started before logout is ignored
        self.dashboard = DashboardState {
            upload_generation: self.dashboard.upload_generation + 1,
            ..DashboardState::default()
        };
        self.state = AppState::Normal;
        self.status_message = Some("Signed out".to_string());
        self.navigate(View::Landing);
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    pub fn start_path_entry(&mut self) {
        self.state = AppState::EnteringPath;
    }

    /// Select the file named in the path input. Clears previous results.
    pub fn upload_from_input(&mut self) {
        self.state = AppState::Normal;
        let path = PathBuf::from(self.dashboard.path_input.trim());

        match UploadedFile::from_path(&path) {
            Ok(file) => {
                info!(file = %file.name, size = file.size_bytes, "File selected");
                self.status_message = Some(format!("Selected {}", file.name));
                self.dashboard.uploaded_file = Some(file);
                self.dashboard.results = None;
                self.dashboard.processing = false;
                self.dashboard.upload_generation += 1;
            }
            Err(e) => {
                warn!(error = %e, "Upload rejected");
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Start the mock model run in the background
    pub fn start_processing(&mut self) {
        if self.dashboard.processing {
            return;
        }
        let Some(file) = self.dashboard.uploaded_file.clone() else {
            self.status_message = Some("Select a data file first".to_string());
            return;
        };

        self.dashboard.processing = true;
        self.status_message = Some("AI/ML model is processing your data...".to_string());

        let tx = self.analysis_tx.clone();
        let delay = self.config.processing_delay();
        let generation = self.dashboard.upload_generation;

        tokio::spawn(async move {
            let results = process_file(&file, delay).await;
            if tx.send(AnalysisMessage { generation, results }).await.is_err() {
                debug!("App gone before analysis finished");
            }
        });
    }

    /// Check for completed background tasks and process results
    pub fn check_background_tasks(&mut self) {
        while let Ok(message) = self.analysis_rx.try_recv() {
            if message.generation != self.dashboard.upload_generation
                || !self.session.is_authenticated()
            {
                debug!(generation = message.generation, "Dropping stale analysis result");
                continue;
            }
            self.dashboard.processing = false;
            self.status_message = Some(format!(
                "Analysis complete: {} areas classified",
                message.results.total_areas
            ));
            self.dashboard.results = Some(message.results);
        }
    }

    pub fn export_results(&mut self) {
        let dir = self.config.export_dir();
        let today = Local::now().date_naive();
        match write_export(self.dashboard.results.as_ref(), &dir, today) {
            Ok(path) => {
                self.status_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                warn!(error = %e, "Export failed");
                self.status_message = Some(e.to_string());
            }
        }
    }
}

// ============================================================================
// Input validation helpers (exported for use in input.rs)
// ============================================================================

/// Check if a character is valid for input (no control characters)
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if a name/email character should be accepted
pub fn can_add_field_char(current_len: usize, c: char) -> bool {
    current_len < MAX_FIELD_LENGTH && is_valid_input_char(c)
}

/// Check if a password character should be accepted
pub fn can_add_password_char(current_len: usize, c: char) -> bool {
    current_len < MAX_PASSWORD_LENGTH && is_valid_input_char(c)
}

/// Check if an upload path character should be accepted
pub fn can_add_path_char(current_len: usize, c: char) -> bool {
    current_len < MAX_PATH_LENGTH && is_valid_input_char(c)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config() -> Config {
        Config {
            auth_delay_ms: 0,
            processing_delay_ms: 0,
            ..Config::default()
        }
    }

    fn fill_signup(app: &mut App, name: &str, email: &str, password: &str) {
        app.form.mode = AuthMode::Signup;
        app.form.name = name.to_string();
        app.form.email = email.to_string();
        app.form.password = password.to_string();
    }

    async fn signed_in_app() -> App {
        let mut app = App::new(test_config());
        fill_signup(&mut app, "Ada", "a@x.com", "Abcdef1!");
        app.submit_form();
        app.run_pending_auth().await;
        assert_eq!(app.view(), View::Dashboard);
        app
    }

    /// Poll the channel until the spawned analysis task reports back
    async fn wait_for_results(app: &mut App) {
        for _ in 0..100 {
            app.check_background_tasks();
            if app.dashboard.results.is_some() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("analysis never completed");
    }

    // -------------------------------------------------------------------------
    // Navigation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_resolve_view() {
        assert_eq!(resolve_view(View::Dashboard, false), View::Landing);
        assert_eq!(resolve_view(View::About, false), View::Landing);
        assert_eq!(resolve_view(View::Landing, false), View::Landing);
        assert_eq!(resolve_view(View::Landing, true), View::Dashboard);
        assert_eq!(resolve_view(View::About, true), View::About);
    }

    #[test]
    fn test_view_next() {
        assert_eq!(View::Dashboard.next(), View::About);
        assert_eq!(View::About.next(), View::Dashboard);
    }

    #[test]
    fn test_anonymous_cannot_reach_dashboard() {
        let mut app = App::new(test_config());
        app.navigate(View::Dashboard);
        assert_eq!(app.view(), View::Landing);
    }

    // -------------------------------------------------------------------------
    // Form Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_form_focus_skips_name_when_logging_in() {
        assert_eq!(FormFocus::Toggle.next(AuthMode::Login), FormFocus::Email);
        assert_eq!(FormFocus::Toggle.next(AuthMode::Signup), FormFocus::Name);
        assert_eq!(FormFocus::Email.prev(AuthMode::Login), FormFocus::Toggle);
        assert_eq!(FormFocus::Email.prev(AuthMode::Signup), FormFocus::Name);
    }

    #[test]
    fn test_prefilled_email_focuses_password() {
        let form = AuthForm::new(Some("a@x.com".to_string()));
        assert_eq!(form.focus, FormFocus::Password);
        let form = AuthForm::new(None);
        assert_eq!(form.focus, FormFocus::Email);
    }

    #[test]
    fn test_typing_clears_error() {
        let mut form = AuthForm::new(None);
        form.error = Some("bad".to_string());
        form.push_char('a');
        assert_eq!(form.email, "a");
        assert!(form.error.is_none());
    }

    #[test]
    fn test_toggle_mode_moves_focus_off_name() {
        let mut form = AuthForm::new(None);
        form.toggle_mode();
        form.focus = FormFocus::Name;
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Login);
        assert_eq!(form.focus, FormFocus::Email);
    }

    // -------------------------------------------------------------------------
    // Auth Flow Tests
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_signup_navigates_to_dashboard() {
        let app = signed_in_app().await;
        assert!(app.session.is_authenticated());
        assert!(app.form.password.is_empty());
        assert!(!app.form.pending);
    }

    #[tokio::test]
    async fn test_weak_password_shows_rule() {
        let mut app = App::new(test_config());
        fill_signup(&mut app, "Ada", "a@x.com", "abcdefgh");
        app.submit_form();
        app.run_pending_auth().await;

        assert_eq!(app.view(), View::Landing);
        assert_eq!(
            app.form.error.as_deref(),
            Some("Password must contain at least one uppercase letter")
        );
        assert_eq!(app.session.account_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_login_shows_generic_message() {
        let mut app = App::new(test_config());
        app.form.email = "a@x.com".to_string();
        app.form.password = "Abcdef1!".to_string();
        app.submit_form();
        app.run_pending_auth().await;

        assert_eq!(app.form.error.as_deref(), Some(LOGIN_FAILED_MESSAGE));
        assert_eq!(app.view(), View::Landing);
    }

    #[tokio::test]
    async fn test_logout_denies_protected_views() {
        let mut app = signed_in_app().await;
        app.dashboard.next_ward();
        app.logout();

        assert_eq!(app.view(), View::Landing);
        app.navigate(View::About);
        assert_eq!(app.view(), View::Landing);
        assert_eq!(app.dashboard.ward_index, 0);

        // Same credentials still work afterwards
        app.form.email = "a@x.com".to_string();
        app.form.password = "Abcdef1!".to_string();
        app.submit_form();
        app.run_pending_auth().await;
        assert_eq!(app.view(), View::Dashboard);
    }

    #[test]
    fn test_incomplete_form_is_not_submitted() {
        let mut app = App::new(test_config());
        app.submit_form();
        assert!(!app.form.pending);
        assert_eq!(app.form.error.as_deref(), Some(MISSING_FIELDS_MESSAGE));

        app.form.email = "a@x.com".to_string();
        app.form.password = "Abcdef1!".to_string();
        app.form.toggle_mode();
        app.submit_form();
        assert!(!app.form.pending);
        assert_eq!(app.form.error.as_deref(), Some(MISSING_FIELDS_MESSAGE));

        app.form.toggle_mode();
        app.submit_form();
        assert!(app.form.pending);
        assert!(app.form.error.is_none());
    }

    #[test]
    fn test_malformed_email_is_not_submitted() {
        for email in ["ada", "@x.com", "ada@", "a@b@c"] {
            let mut app = App::new(test_config());
            app.form.email = email.to_string();
            app.form.password = "Abcdef1!".to_string();
            app.submit_form();
            assert!(!app.form.pending, "{}", email);
            assert_eq!(app.form.error.as_deref(), Some(INVALID_EMAIL_MESSAGE), "{}", email);
        }
    }

    #[tokio::test]
    async fn test_sign_in_saves_last_email() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        let mut app = App::new(test_config()).with_config_path(path.clone());
        fill_signup(&mut app, "Ada", "a@x.com", "Abcdef1!");
        app.submit_form();
        app.run_pending_auth().await;

        assert_eq!(app.config.last_email.as_deref(), Some("a@x.com"));
        let saved = Config::load_from(&path).expect("load");
        assert_eq!(saved.last_email.as_deref(), Some("a@x.com"));
        // Delays overridden in memory are not written back
        assert_eq!(saved.auth_delay_ms, Config::default().auth_delay_ms);
    }

    #[tokio::test]
    async fn test_failed_sign_in_saves_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        let mut app = App::new(test_config()).with_config_path(path.clone());
        app.form.email = "a@x.com".to_string();
        app.form.password = "Abcdef1!".to_string();
        app.submit_form();
        app.run_pending_auth().await;

        assert!(!path.exists());
        assert!(app.config.last_email.is_none());
    }

    #[tokio::test]
    async fn test_run_pending_auth_without_submit_is_noop() {
        let mut app = App::new(test_config());
        app.run_pending_auth().await;
        assert!(app.form.error.is_none());
        assert!(!app.session.is_authenticated());
    }

    // -------------------------------------------------------------------------
    // Dashboard Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_ward_cycling_wraps() {
        let mut dashboard = DashboardState::default();
        assert_eq!(dashboard.selected_ward().name, "Ward 1");
        dashboard.prev_ward();
        assert_eq!(dashboard.selected_ward().name, "Ward 4");
        dashboard.next_ward();
        dashboard.next_ward();
        assert_eq!(dashboard.selected_ward().name, "Ward 2");
    }

    #[tokio::test]
    async fn test_process_without_file() {
        let mut app = signed_in_app().await;
        app.start_processing();
        assert!(!app.dashboard.processing);
        assert_eq!(app.status_message.as_deref(), Some("Select a data file first"));
    }

    #[tokio::test]
    async fn test_upload_process_export() {
        let dir = tempfile::tempdir().expect("tempdir");
        let data = dir.path().join("wards.json");
        std::fs::write(&data, b"{}").expect("write");

        let mut app = signed_in_app().await;
        app.config.export_dir = Some(dir.path().to_path_buf());

        // Export before processing is refused
        app.export_results();
        assert!(app.status_message.as_deref().unwrap_or("").contains("No results"));

        app.dashboard.path_input = data.display().to_string();
        app.upload_from_input();
        assert_eq!(app.dashboard.uploaded_file.as_ref().map(|f| f.name.as_str()), Some("wards.json"));

        app.start_processing();
        assert!(app.dashboard.processing);
        wait_for_results(&mut app).await;
        assert!(!app.dashboard.processing);
        assert_eq!(app.dashboard.results.as_ref().map(|r| r.file_name.as_str()), Some("wards.json"));

        app.export_results();
        let exported: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read dir")
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with("invisihome_results_"))
            .collect();
        assert_eq!(exported.len(), 1);
    }

    #[tokio::test]
    async fn test_new_upload_clears_results() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = dir.path().join("a.csv");
        let second = dir.path().join("b.csv");
        std::fs::write(&first, b"1").expect("write");
        std::fs::write(&second, b"2").expect("write");

        let mut app = signed_in_app().await;
        app.dashboard.path_input = first.display().to_string();
        app.upload_from_input();
        app.start_processing();
        wait_for_results(&mut app).await;

        app.dashboard.path_input = second.display().to_string();
        app.upload_from_input();
        assert!(app.dashboard.results.is_none());
        assert_eq!(app.dashboard.uploaded_file.as_ref().map(|f| f.name.as_str()), Some("b.csv"));
    }

    #[tokio::test]
    async fn test_bad_upload_keeps_previous_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good = dir.path().join("a.csv");
        std::fs::write(&good, b"1").expect("write");

        let mut app = signed_in_app().await;
        app.dashboard.path_input = good.display().to_string();
        app.upload_from_input();

        app.dashboard.path_input = dir.path().join("notes.txt").display().to_string();
        app.upload_from_input();
        assert_eq!(app.dashboard.uploaded_file.as_ref().map(|f| f.name.as_str()), Some("a.csv"));
        assert!(app.status_message.as_deref().unwrap_or("").contains("Unsupported"));
    }

    // -------------------------------------------------------------------------
    // Input Validation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_can_add_field_char() {
        assert!(can_add_field_char(0, 'a'));
        assert!(can_add_field_char(63, '@'));
        assert!(!can_add_field_char(64, 'a'));
        assert!(!can_add_field_char(0, '\x00'));
        assert!(!can_add_field_char(0, '\n'));
    }

    #[test]
    fn test_can_add_password_char() {
        assert!(can_add_password_char(0, 'a'));
        assert!(can_add_password_char(127, '!'));
        assert!(!can_add_password_char(128, 'a'));
        assert!(!can_add_password_char(0, '\r'));
    }

    #[test]
    fn test_can_add_path_char() {
        assert!(can_add_path_char(0, '/'));
        assert!(!can_add_path_char(512, 'a'));
        assert!(!can_add_path_char(0, '\t'));
    }
}
