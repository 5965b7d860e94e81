//! User profiles
//!
//! Per-user settings, currently just the Slack webhook URL. Identities
//! themselves are minted by the external auth system; this module only
//! stores what the user edits in the app.

mod model;
mod store;

pub use model::Profile;
pub use store::FileProfileStore;
