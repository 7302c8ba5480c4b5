//! User directory view state and its reducer
//!
//! [`update`] is the only way state changes: it consumes the current
//! [`DirectoryState`] and a [`Msg`], and returns the next state plus the
//! [`Effect`]s to run. Network requests and notifications are effects, so the
//! reducer itself never performs I/O.
//!
//! The listing is re-fetched only after a mutation's success has been
//! observed. Late completions are matched by generation (listing) and panel
//! session (mutations), see [`Msg`].

mod panel;


pub use panel::{Panel, PanelKind};

use crate::api::MutationOutcome;
use crate::feedback::Notification;
use crate::user::User;
use tracing::debug;

/// Toast shown after a successful create
pub const CREATED_MESSAGE: &str = "User created successfully!";
/// Toast shown after a successful update
pub const UPDATED_MESSAGE: &str = "Updated successfully!";
/// Title of the delete confirmation
pub const DELETE_CONFIRM_TITLE: &str = "Are you sure?";
/// Body of the delete confirmation
pub const DELETE_CONFIRM_TEXT: &str = "You won't be able to revert this!";
/// Confirm affordance of the delete confirmation
pub const DELETE_CONFIRM_LABEL: &str = "Yes, delete it!";
/// Title of the dialog shown after a successful delete
pub const DELETED_TITLE: &str = "Deleted!";

/// The listing query as last observed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Listing {
    /// A fetch is in flight
    #[default]
    Loading,
    /// The query failed; the whole view shows this message
    Failed(String),
    /// Users in server order
    Loaded(Vec<User>),
}

impl Listing {
    /// Loaded users, or nothing while loading or failed
    #[must_use]
    pub fn users(&self) -> &[User] {
        match self {
            Self::Loaded(users) => users,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    /// Whether a fetch is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Snapshot of everything the user directory view shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryState {
    /// Listing query state
    pub listing: Listing,
    /// Index of the selected row
    pub selected: usize,
    /// Open create/update panel
    pub panel: Option<Panel>,
    /// User awaiting delete confirmation
    pub confirm: Option<User>,
    generation: u64,
    sessions: u64,
}

impl DirectoryState {
    /// The selected user, if the listing is loaded and non-empty
    #[must_use]
    pub fn selected_user(&self) -> Option<&User> {
        self.listing.users().get(self.selected)
    }

    /// Generation of the newest listing fetch
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether input goes to a modal (panel or confirmation)
    #[must_use]
    pub const fn is_modal(&self) -> bool {
        self.panel.is_some() || self.confirm.is_some()
    }

    fn next_session(&mut self) -> u64 {
        self.sessions += 1;
        self.sessions
    }

    fn clamp_selection(&mut self) {
        let len = self.listing.users().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// A network request the view wants made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Run the listing query
    ListUsers {
        /// Generation the result belongs to
        generation: u64,
    },
    /// `POST /users`
    CreateUser {
        /// Panel session that submitted
        session: u64,
        /// Validated user
        user: User,
    },
    /// `PUT /update/{target}`
    UpdateUser {
        /// Panel session that submitted
        session: u64,
        /// Email fixed when the panel opened
        target: String,
        /// Validated user
        user: User,
    },
    /// `DELETE /delete/{email}`
    DeleteUser {
        /// User being deleted
        user: User,
    },
}

/// Work requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a network request; its completion comes back as a [`Msg`]
    Request(Request),
    /// Tell the operator something
    Notify(Notification),
}

/// Everything that can happen to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// (Re-)issue the listing query; also sent on mount
    Refresh,
    /// Listing query completed
    UsersLoaded {
        /// Generation of the fetch that completed
        generation: u64,
        /// Users, or the error message
        result: Result<Vec<User>, String>,
    },
    /// Move selection down
    SelectNext,
    /// Move selection up
    SelectPrevious,
    /// Open the create panel
    OpenCreate,
    /// Open the update panel for the selected user
    OpenUpdate,
    /// Close the open panel
    ClosePanel,
    /// Move panel focus to the other field
    FocusNextField,
    /// Type into the focused field
    InsertChar(char),
    /// Delete the last character of the focused field
    DeleteChar,
    /// Submit the open panel
    Submit,
    /// Create request completed
    CreateFinished {
        /// Panel session that submitted
        session: u64,
        /// Outcome, or the transport error message
        result: Result<MutationOutcome, String>,
    },
    /// Update request completed
    UpdateFinished {
        /// Panel session that submitted
        session: u64,
        /// Outcome, or the transport error message
        result: Result<MutationOutcome, String>,
    },
    /// Ask to delete the selected user
    RequestDelete,
    /// Operator answered the delete confirmation
    AnswerDelete(bool),
    /// Delete request completed
    DeleteFinished {
        /// User that was targeted
        user: User,
        /// Outcome, or the transport error message
        result: Result<MutationOutcome, String>,
    },
}

/// Apply `msg` to `state`, returning the next state and the effects to run
#[must_use]
pub fn update(state: DirectoryState, msg: Msg) -> (DirectoryState, Vec<Effect>) {
    let mut next = state;
    let mut effects = Vec::new();

    match msg {
        Msg::Refresh => refresh(&mut next, &mut effects),
        Msg::UsersLoaded { generation, result } => {
            if generation != next.generation {
                debug!(generation, latest = next.generation, "Discarding stale listing");
            } else {
                next.listing = match result {
                    Ok(users) => Listing::Loaded(users),
                    Err(message) => {
                        // The error view has nothing to edit or confirm against.
                        next.panel = None;
                        next.confirm = None;
                        Listing::Failed(message)
                    }
                };
                next.clamp_selection();
            }
        }
        Msg::SelectNext => {
            if !next.is_modal() && next.selected + 1 < next.listing.users().len() {
                next.selected += 1;
            }
        }
        Msg::SelectPrevious => {
            if !next.is_modal() {
                next.selected = next.selected.saturating_sub(1);
            }
        }
        Msg::OpenCreate => {
            if !next.is_modal() && !matches!(next.listing, Listing::Failed(_)) {
                let session = next.next_session();
                next.panel = Some(Panel::create(session));
            }
        }
        Msg::OpenUpdate => {
            if !next.is_modal()
                && let Some(user) = next.selected_user().cloned()
            {
                let session = next.next_session();
                next.panel = Some(Panel::update(session, &user));
            }
        }
        Msg::ClosePanel => next.panel = None,
        Msg::FocusNextField => {
            if let Some(panel) = next.panel.as_mut() {
                panel.focus_next();
            }
        }
        Msg::InsertChar(c) => {
            if let Some(panel) = next.panel.as_mut() {
                panel.insert_char(c);
            }
        }
        Msg::DeleteChar => {
            if let Some(panel) = next.panel.as_mut() {
                panel.backspace();
            }
        }
        Msg::Submit => submit(&mut next, &mut effects),
        Msg::CreateFinished { session, result } => {
            finish_panel_mutation(&mut next, &mut effects, session, result, "create", CREATED_MESSAGE);
        }
        Msg::UpdateFinished { session, result } => {
            finish_panel_mutation(&mut next, &mut effects, session, result, "update", UPDATED_MESSAGE);
        }
        Msg::RequestDelete => {
            if !next.is_modal() {
                next.confirm = next.selected_user().cloned();
            }
        }
        Msg::AnswerDelete(confirmed) => {
            if let Some(user) = next.confirm.take()
                && confirmed
            {
                effects.push(Effect::Request(Request::DeleteUser { user }));
            }
        }
        Msg::DeleteFinished { user, result } => match result {
            Ok(MutationOutcome::Applied) => {
                refresh(&mut next, &mut effects);
                effects.push(Effect::Notify(Notification::Alert {
                    title: DELETED_TITLE.to_string(),
                    text: format!("{} has been deleted.", user.name),
                }));
            }
            Ok(MutationOutcome::Rejected(reason)) => {
                effects.push(Effect::Notify(Notification::Error(format!(
                    "Could not delete {}: {reason}",
                    user.name
                ))));
            }
            Err(message) => effects.push(Effect::Notify(Notification::Error(message))),
        },
    }

    (next, effects)
}

fn refresh(state: &mut DirectoryState, effects: &mut Vec<Effect>) {
    state.generation += 1;
    state.listing = Listing::Loading;
    effects.push(Effect::Request(Request::ListUsers {
        generation: state.generation,
    }));
}

fn submit(state: &mut DirectoryState, effects: &mut Vec<Effect>) {
    let Some(panel) = state.panel.as_mut() else {
        return;
    };
    if panel.is_pending() {
        debug!(session = panel.session(), "Submit ignored while pending");
        return;
    }
    let Some(user) = panel.validate() else {
        return;
    };

    let session = panel.session();
    let request = match panel.kind() {
        PanelKind::Create => Request::CreateUser { session, user },
        PanelKind::Update { target } => Request::UpdateUser {
            session,
            target: target.clone(),
            user,
        },
    };
    panel.set_pending(true);
    effects.push(Effect::Request(request));
}

/// Shared completion handling for create and update
///
/// Success always refreshes and notifies, since the server changed; the panel
/// closes only if the session that submitted is still the one open.
fn finish_panel_mutation(
    state: &mut DirectoryState,
    effects: &mut Vec<Effect>,
    session: u64,
    result: Result<MutationOutcome, String>,
    action: &str,
    success_message: &str,
) {
    let same_panel = state
        .panel
        .as_ref()
        .is_some_and(|panel| panel.session() == session);
    if same_panel && let Some(panel) = state.panel.as_mut() {
        panel.set_pending(false);
    }

    match result {
        Ok(MutationOutcome::Applied) => {
            refresh(state, effects);
            effects.push(Effect::Notify(Notification::Success(
                success_message.to_string(),
            )));
            if same_panel {
                state.panel = None;
            }
        }
        Ok(MutationOutcome::Rejected(reason)) => {
            effects.push(Effect::Notify(Notification::Error(format!(
                "Could not {action} user: {reason}"
            ))));
        }
        Err(message) => effects.push(Effect::Notify(Notification::Error(message))),
    }
}
