use pickfill_protocol::ChoiceOption;
use pickfill_protocol::HandoffPayload;
use pickfill_protocol::HandoffSource;
use pickfill_protocol::Notice;
use pickfill_transport::build_handoff_address;
use pickfill_transport::compose_handoff_text;
use pickfill_transport::fallback_address;

use crate::Navigator;
use crate::Notifier;

pub const NAVIGATING_MESSAGE: &str = "redirecting and auto-filling the form...";
pub const HANDOFF_FAILED_MESSAGE: &str = "failed to set up auto-fill";
pub const MISSING_CONTEXT_MESSAGE: &str = "unable to read form data";

/// Where picked options are handed off to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// `scheme://host[:port]` of the current page.
    pub origin: String,
    /// Configured path of the destination form; may be empty.
    pub path_template: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Navigation was triggered with the payload attached.
    Navigated { address: String },
    /// The handoff address could not be built; navigation went to the bare
    /// destination instead.
    NavigatedWithoutPayload { address: String },
    /// There was no chat context to read prior text from; nothing happened.
    MissingContext,
}

/// Hands `option` to the destination form.
///
/// The prior text must be read before navigating: the transition tears down
/// the current page, so anything not folded into the payload is lost.
pub fn pick_option<N, T>(
    source: Option<&HandoffSource>,
    option: &ChoiceOption,
    destination: &Destination,
    navigator: &mut N,
    notifier: &T,
) -> PickOutcome
where
    N: Navigator + ?Sized,
    T: Notifier + ?Sized,
{
    tracing::info!(number = %option.index, text = %option.text, "option picked");
    let Some(source) = source else {
        tracing::warn!("no chat context available; not handing off");
        notifier.notify(Notice::error(MISSING_CONTEXT_MESSAGE));
        return PickOutcome::MissingContext;
    };

    let payload = HandoffPayload::new(compose_handoff_text(source.prior_text(), &option.text));
    match build_handoff_address(&destination.origin, &destination.path_template, &payload) {
        Ok(address) => {
            notifier.notify(Notice::info(NAVIGATING_MESSAGE));
            tracing::info!(%address, "navigating to destination form");
            navigator.navigate(&address);
            PickOutcome::Navigated { address }
        }
        Err(err) => {
            tracing::error!("failed to build handoff address: {err}");
            notifier.notify(Notice::error(HANDOFF_FAILED_MESSAGE));
            let address = fallback_address(&destination.origin, &destination.path_template);
            navigator.navigate(&address);
            PickOutcome::NavigatedWithoutPayload { address }
        }
    }
}
