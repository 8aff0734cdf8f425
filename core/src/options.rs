use pickfill_protocol::ChoiceOption;
use pickfill_protocol::MessageItem;
use pickfill_utils_option_parser::OptionParser;

/// Choices offered for a chat message, read from the text the message shows.
pub fn message_options(item: &MessageItem, parser: &OptionParser) -> Vec<ChoiceOption> {
    parser.extract(&item.display_content())
}
