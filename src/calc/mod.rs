pub mod markers;
pub mod selection;

pub use markers::{project, Marker, MarkerStyle};
pub use selection::{update, Action, JournalState, ValidationError};
