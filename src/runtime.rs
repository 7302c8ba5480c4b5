//! Effect runner for the user directory
//!
//! [`Runtime`] owns the current [`DirectoryState`], feeds messages through the
//! reducer, and carries out the resulting effects. Each request runs on its
//! own worker thread and reports back over a channel; completions are only
//! applied when the owner calls [`Runtime::pump`] or [`Runtime::settle`], so
//! state is never touched from more than one thread.

use crate::api::UserService;
use crate::directory::{self, DirectoryState, Effect, Msg, Request};
use crate::feedback::Notifier;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

impl Request {
    /// Run the request against `service`, producing its completion message
    #[must_use]
    pub fn perform(self, service: &dyn UserService) -> Msg {
        match self {
            Self::ListUsers { generation } => Msg::UsersLoaded {
                generation,
                result: service.list_users().map_err(|e| e.to_string()),
            },
            Self::CreateUser { session, user } => Msg::CreateFinished {
                session,
                result: service.create_user(&user).map_err(|e| e.to_string()),
            },
            Self::UpdateUser {
                session,
                target,
                user,
            } => Msg::UpdateFinished {
                session,
                result: service
                    .update_user(&target, &user)
                    .map_err(|e| e.to_string()),
            },
            Self::DeleteUser { user } => {
                let result = service.delete_user(&user.email).map_err(|e| e.to_string());
                Msg::DeleteFinished { user, result }
            }
        }
    }

    /// The completion message for a request that could not be issued
    #[must_use]
    pub fn fail(self, message: String) -> Msg {
        match self {
            Self::ListUsers { generation } => Msg::UsersLoaded {
                generation,
                result: Err(message),
            },
            Self::CreateUser { session, .. } => Msg::CreateFinished {
                session,
                result: Err(message),
            },
            Self::UpdateUser { session, .. } => Msg::UpdateFinished {
                session,
                result: Err(message),
            },
            Self::DeleteUser { user } => Msg::DeleteFinished {
                user,
                result: Err(message),
            },
        }
    }
}

/// Drives the directory reducer against a service and a notifier
pub struct Runtime<N> {
    state: DirectoryState,
    service: Arc<dyn UserService>,
    notifier: N,
    completions_tx: Sender<Msg>,
    completions_rx: Receiver<Msg>,
    in_flight: usize,
}

impl<N: std::fmt::Debug> std::fmt::Debug for Runtime<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("state", &self.state)
            .field("notifier", &self.notifier)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl<N: Notifier> Runtime<N> {
    /// Create a runtime; nothing is fetched until [`Runtime::start`]
    #[must_use]
    pub fn new(service: Arc<dyn UserService>, notifier: N) -> Self {
        let (completions_tx, completions_rx) = mpsc::channel();
        Self {
            state: DirectoryState::default(),
            service,
            notifier,
            completions_tx,
            completions_rx,
            in_flight: 0,
        }
    }

    /// Mount the view: issue the first listing query
    pub fn start(&mut self) {
        self.dispatch(Msg::Refresh);
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &DirectoryState {
        &self.state
    }

    /// The injected notifier
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mutable access to the injected notifier
    pub const fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Requests issued whose completion has not been applied yet
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Apply one message and run the effects it produces
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = directory::update(state, msg);
        self.state = next;
        for effect in effects {
            self.run(effect);
        }
    }

    /// Apply every completion that has already arrived; returns how many
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.completions_rx.try_recv() {
            self.complete(msg);
            applied += 1;
        }
        applied
    }

    /// Block until no request is in flight, applying completions as they
    /// arrive. Returns `false` if `timeout` elapses first.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.completions_rx.recv_timeout(remaining) {
                Ok(msg) => self.complete(msg),
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return false,
            }
        }
        true
    }

    fn complete(&mut self, msg: Msg) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch(msg);
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::Notify(notification) => self.notifier.notify(notification),
            Effect::Request(request) => self.spawn(request),
        }
    }

    fn spawn(&mut self, request: Request) {
        debug!(?request, "Dispatching request");
        let service = Arc::clone(&self.service);
        let tx = self.completions_tx.clone();
        let worker_request = request.clone();
        self.in_flight += 1;

        let spawned = thread::Builder::new()
            .name("userdesk-request".to_string())
            .spawn(move || {
                let msg = worker_request.perform(service.as_ref());
                // The receiver only disappears when the runtime is dropped.
                let _ = tx.send(msg);
            });

        if let Err(err) = spawned {
            warn!(error = %err, "Failed to spawn request worker");
            let _ = self
                .completions_tx
                .send(request.fail(format!("Failed to start request: {err}")));
        }
    }
}
