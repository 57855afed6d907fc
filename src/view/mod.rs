//! TUI rendering and terminal management (impure shell)

pub mod collection_pane;
pub mod footer;
mod layout;
pub mod new_request_modal;
pub mod notification;
pub mod request_pane;
pub mod styles;
pub mod tabs;
pub mod text_input;

pub use footer::{footer_hints, footer_text, HintContext};
pub use layout::render_layout;
pub use new_request_modal::render_new_request_modal;
pub use styles::{ColorConfig, Styles};

use crate::collection::ParentNode;
use crate::config::KeyBindings;
use crate::integration;
use crate::model::{NewRequestData, Notifications};
use crate::state::{
    handle_new_request_modal_key, route_key, AppState, KeyOutcome, NewRequestModal,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Poll interval of the event loop; also bounds notification expiry lag.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Ctrl+C quits regardless of bindings.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

// ===== TuiApp =====

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    notification_timeout: Duration,
    styles: Styles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        key_bindings: KeyBindings,
        notification_timeout: Duration,
    ) -> Result<Self, TuiError> {
        let terminal = enter_terminal()?;
        Ok(Self::with_terminal(
            terminal,
            app_state,
            key_bindings,
            notification_timeout,
        ))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an already prepared terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        notification_timeout: Duration,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            notification_timeout,
            styles: Styles::default(),
        }
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        return Ok(());
                    }
                }
                self.draw()?;
            } else if self.tick(Instant::now()) {
                self.draw()?;
            }
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_interrupt(&key) {
            return true;
        }

        match route_key(&mut self.app_state, key, &self.key_bindings) {
            KeyOutcome::Quit => true,
            KeyOutcome::Continue => false,
            KeyOutcome::RequestConfirmed(data) => {
                integration::create_request(&mut self.app_state, &data);
                false
            }
        }
    }

    /// Expire old notifications. Returns true if a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.app_state
            .notifications
            .prune(now, self.notification_timeout)
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let bindings = &self.key_bindings;
        let styles = self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, state, bindings, styles);
        })?;
        Ok(())
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// The terminal, for inspecting a test backend.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

// ===== Standalone dialog =====

/// Initial values for the standalone new-request dialog.
#[derive(Debug, Clone, Default)]
pub struct DialogOptions {
    /// Collection root used for the duplicate-name check.
    pub collection: PathBuf,
    /// Directory field value; `.` when absent.
    pub directory: Option<String>,
    /// Title field value.
    pub title: Option<String>,
    /// Description field value.
    pub description: Option<String>,
}

impl DialogOptions {
    fn into_modal(self) -> NewRequestModal {
        let directory = self.directory.unwrap_or_else(|| ".".to_string());
        let parent = ParentNode::WithPath(self.collection.join(&directory));
        NewRequestModal::new(
            directory,
            self.title.unwrap_or_default(),
            self.description.unwrap_or_default(),
            parent,
        )
    }
}

/// The new-request dialog running on its own, without the collection view.
pub struct DialogApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    modal: NewRequestModal,
    notifications: Notifications,
    key_bindings: KeyBindings,
    notification_timeout: Duration,
    styles: Styles,
}

impl<B> DialogApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the dialog around an already prepared terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        options: DialogOptions,
        key_bindings: KeyBindings,
        notification_timeout: Duration,
    ) -> Self {
        Self {
            terminal,
            modal: options.into_modal(),
            notifications: Notifications::new(),
            key_bindings,
            notification_timeout,
            styles: Styles::default(),
        }
    }

    /// Run until the dialog closes.
    ///
    /// Returns the confirmed request, or `None` on cancel.
    pub fn run(mut self) -> Result<Option<NewRequestData>, TuiError> {
        self.draw()?;

        while self.modal.is_open() {
            if event::poll(TICK_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
                self.draw()?;
            } else if self.notifications.prune(Instant::now(), self.notification_timeout) {
                self.draw()?;
            }
        }

        Ok(self.into_result())
    }

    /// Feed one key to the dialog. Ctrl+C cancels.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if is_interrupt(&key) {
            self.modal.cancel();
            return;
        }
        if let Some(notification) =
            handle_new_request_modal_key(&mut self.modal, key, &self.key_bindings)
        {
            self.notifications.push(notification);
        }
    }

    /// Render the dialog, its notifications and the footer.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let modal = &self.modal;
        let notifications = &self.notifications;
        let bindings = &self.key_bindings;
        let styles = self.styles;
        self.terminal.draw(|frame| {
            let (_, footer_area) = layout::split_footer(frame.area());
            render_new_request_modal(frame, modal, styles);
            notification::render_notifications(frame, notifications, styles);
            footer::render_footer(frame, footer_area, bindings, HintContext::Modal, styles);
        })?;
        Ok(())
    }

    /// The dialog state.
    pub fn modal(&self) -> &NewRequestModal {
        &self.modal
    }

    /// Notifications raised by rejected creates.
    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// The dialog's result; `None` while open or after cancel.
    pub fn into_result(self) -> Option<NewRequestData> {
        self.modal.into_result().flatten()
    }
}

// ===== Entry points =====

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_app(
    app_state: AppState,
    key_bindings: KeyBindings,
    notification_timeout: Duration,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, key_bindings, notification_timeout)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;
    info!("Application exited");
    result
}

/// Show only the new-request dialog and return what the user entered.
pub fn run_new_request_dialog(
    options: DialogOptions,
    key_bindings: KeyBindings,
    notification_timeout: Duration,
) -> Result<Option<NewRequestData>, TuiError> {
    let terminal = enter_terminal()?;
    let app = DialogApp::with_terminal(terminal, options, key_bindings, notification_timeout);

    let result = app.run();

    restore_terminal()?;
    debug!(confirmed = matches!(result, Ok(Some(_))), "Dialog finished");
    result
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
