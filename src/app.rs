//! Application state for the TUI
//!
//! [`App`] ties the directory [`Runtime`] to the configured keybindings and
//! the on-screen [`FeedbackCenter`].

use crate::api::UserService;
use crate::config::{Action, Config};
use crate::directory::{DirectoryState, Msg};
use crate::feedback::FeedbackCenter;
use crate::runtime::Runtime;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Reducer and request runner
    pub runtime: Runtime<FeedbackCenter>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create the application and issue the first listing query
    #[must_use]
    pub fn new(config: Config, service: Arc<dyn UserService>) -> Self {
        let feedback = FeedbackCenter::new(Duration::from_millis(config.toast_duration_ms));
        let mut runtime = Runtime::new(service, feedback);
        runtime.start();
        Self {
            config,
            runtime,
            should_quit: false,
        }
    }

    /// Current directory view state
    #[must_use]
    pub const fn state(&self) -> &DirectoryState {
        self.runtime.state()
    }

    /// Toasts and the pending alert
    #[must_use]
    pub const fn feedback(&self) -> &FeedbackCenter {
        self.runtime.notifier()
    }

    /// Forward a message to the directory reducer
    pub fn dispatch(&mut self, msg: Msg) {
        self.runtime.dispatch(msg);
    }

    /// Close the success dialog
    pub fn dismiss_alert(&mut self) {
        self.runtime.notifier_mut().dismiss_alert();
    }

    /// Run the action bound to a key in the main view
    pub fn handle_action(&mut self, action: Action) {
        let msg = match action {
            Action::AddUser => Msg::OpenCreate,
            Action::UpdateUser => Msg::OpenUpdate,
            Action::DeleteUser => Msg::RequestDelete,
            Action::Refresh => Msg::Refresh,
            Action::NextUser => Msg::SelectNext,
            Action::PrevUser => Msg::SelectPrevious,
            Action::Quit => {
                self.should_quit = true;
                return;
            }
        };
        self.dispatch(msg);
    }

    /// Apply finished requests and expire old toasts
    pub fn tick(&mut self, now: Instant) {
        self.runtime.pump();
        self.runtime.notifier_mut().expire(now);
    }
}
