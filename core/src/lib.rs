//! Root of the `pickfill-core` library: the two user-facing flows.
//!
//! - [`pick::pick_option`] runs in the chat: it folds the picked option into
//!   the prior text and hands it to the destination form by navigating there.
//! - [`autofill::apply_autofill`] runs when the destination form loads: it
//!   decodes the handoff and writes it into the resolved field.

// Library code reports through `Notifier` and tracing only.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod autofill;
mod collaborators;
pub mod options;
pub mod pick;

pub use autofill::AutoFillOutcome;
pub use autofill::apply_autofill;
pub use collaborators::Navigator;
pub use collaborators::Notifier;
pub use options::message_options;
pub use pick::Destination;
pub use pick::PickOutcome;
pub use pick::pick_option;

#[cfg(test)]
mod test_support;
