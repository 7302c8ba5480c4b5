//! Userdesk - terminal admin panel for a user directory
//!
//! Userdesk lists users fetched through a GraphQL listing query and lets an
//! operator create, update, or delete them through a REST API, with toast and
//! modal feedback in a TUI.

pub mod api;
pub mod app;
pub mod config;
pub mod directory;
pub mod feedback;
pub mod runtime;
pub mod tui;
pub mod user;
pub mod validate;

pub use api::{ApiClient, ApiError, MutationOutcome, UserService};
pub use app::App;
pub use config::Config;
pub use directory::{DirectoryState, Listing, Msg};
pub use runtime::Runtime;
pub use user::{Field, User, UserDraft};
