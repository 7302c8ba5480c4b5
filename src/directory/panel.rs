//! Create/update form panel state

use crate::user::{Field, User, UserDraft};
use crate::validate::{self, ValidationError};

/// Which form a panel holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelKind {
    /// "Create a new user"
    Create,
    /// "Update the user"; `target` is the email fixed when the panel opened
    Update {
        /// Email addressed by the update request
        target: String,
    },
}

/// An open form panel
///
/// Holds the draft, the field with focus, and the error from the last submit
/// attempt. Only one error exists at a time: checks short-circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    kind: PanelKind,
    /// Fields as typed
    pub draft: UserDraft,
    /// Field receiving keystrokes
    pub focus: Field,
    error: Option<ValidationError>,
    session: u64,
    pending: bool,
}

impl Panel {
    /// An empty create form
    #[must_use]
    pub fn create(session: u64) -> Self {
        Self {
            kind: PanelKind::Create,
            draft: UserDraft::default(),
            focus: Field::Name,
            error: None,
            session,
            pending: false,
        }
    }

    /// An update form seeded from `user`, targeting its current email
    #[must_use]
    pub fn update(session: u64, user: &User) -> Self {
        Self {
            kind: PanelKind::Update {
                target: user.email.clone(),
            },
            draft: UserDraft::from_user(user),
            focus: Field::Name,
            error: None,
            session,
            pending: false,
        }
    }

    /// Which form this is
    #[must_use]
    pub const fn kind(&self) -> &PanelKind {
        &self.kind
    }

    /// Heading shown on the panel
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.kind {
            PanelKind::Create => "Create a new user",
            PanelKind::Update { .. } => "Update the user",
        }
    }

    /// Label of the submit affordance
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        match self.kind {
            PanelKind::Create => "Submit",
            PanelKind::Update { .. } => "Update",
        }
    }

    /// Email the update request addresses (update panels only)
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            PanelKind::Create => None,
            PanelKind::Update { target } => Some(target),
        }
    }

    /// Opening sequence number, used to match late completions
    #[must_use]
    pub const fn session(&self) -> u64 {
        self.session
    }

    /// Whether a submit is awaiting its response
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    pub(super) const fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    /// Error from the last submit attempt
    #[must_use]
    pub const fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Error to show under `field`, if the last submit failed on it
    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<ValidationError> {
        self.error.filter(|e| e.field() == field)
    }

    /// Run this form's checks, recording the first failure
    ///
    /// Clears any previous error before checking.
    pub(super) fn validate(&mut self) -> Option<User> {
        self.error = None;
        let result = match self.kind {
            PanelKind::Create => validate::validate_create(&self.draft),
            PanelKind::Update { .. } => validate::validate_update(&self.draft),
        };
        match result {
            Ok(user) => Some(user),
            Err(error) => {
                self.error = Some(error);
                None
            }
        }
    }

    /// Type a character into the focused field
    pub fn insert_char(&mut self, c: char) {
        self.draft.get_mut(self.focus).push(c);
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        self.draft.get_mut(self.focus).pop();
    }

    /// Move focus to the other field
    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }
}
