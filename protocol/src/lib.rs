pub mod choice;
pub mod form;
pub mod handoff;
pub mod message;
pub mod notice;

pub use choice::ChoiceOption;
pub use form::FieldDescriptor;
pub use form::FieldKind;
pub use form::InputState;
pub use form::InputValue;
pub use form::UploadedFile;
pub use handoff::HandoffPayload;
pub use handoff::PRIOR_TEXT_KEY;
pub use handoff::HandoffSource;
pub use handoff::PayloadVersion;
pub use message::AgentThought;
pub use message::MessageItem;
pub use notice::Notice;
pub use notice::NoticeSeverity;
