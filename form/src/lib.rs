//! Destination side of the handoff: choosing which form field receives the
//! handed-off text and writing it into the live input map.

mod merge;
mod resolve;
mod store;

pub use merge::merge_input;
pub use resolve::FieldMatch;
pub use resolve::rank_field;
pub use resolve::resolve_target_field;
pub use store::InputStore;
pub use store::WatchInputStore;
