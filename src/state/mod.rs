//! Screen state
//!
//! Explicit state for the two screens of the client: the nearby feed and
//! the event authoring form.

pub mod draft;
pub mod feed;
pub mod form;

pub use draft::EventDraft;
pub use feed::{FeedView, FetchMode, FetchTicket, NearbyFeed, fetch_nearby};
pub use form::EventForm;
