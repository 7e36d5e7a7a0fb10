//! Domain layer: the static musician catalog and feedback submissions.
//!
//! Nothing here touches the network or the database. The catalog is
//! immutable data compiled into the binary; feedback types carry the
//! required-field invariant that the persistence layer relies on.

pub mod catalog;
pub mod feedback;
pub mod musician;

pub use catalog::Catalog;
pub use feedback::{FeedbackSubmission, NewFeedback};
pub use musician::{MusicianFilter, MusicianProfile};
