//! The reveal: what the user gave away during the chat.

use super::category::Label;
use super::fields::ExtractedFields;
use super::question::DEFAULT_ADDRESSEE;

/// Lines of the reveal, in display order.
const REVEAL_LINES: [(Label, &str); 7] = [
    (Label::Person, "Name"),
    (Label::Age, "Age"),
    (Label::Job, "Job"),
    (Label::Email, "Email"),
    (Label::Phone, "Phone"),
    (Label::ContactInfo, "Contact"),
    (Label::Location, "Location"),
];

/// Builds the final message from whatever was extracted.
///
/// Absent fields are left out; the greeting falls back to "friend".
pub fn build_reveal(fields: &ExtractedFields) -> String {
    let name = fields.get(Label::Person).unwrap_or(DEFAULT_ADDRESSEE);

    let items: Vec<String> = REVEAL_LINES
        .iter()
        .filter_map(|(label, caption)| fields.get(*label).map(|value| format!("• {caption}: {value}")))
        .collect();

    let mut message = format!("Thanks for chatting, {name}! Here's what you just told a stranger:\n");
    if items.is_empty() {
        message.push_str("• Nothing this time. Keep it that way!\n");
    } else {
        for item in &items {
            message.push_str(item);
            message.push('\n');
        }
    }
    message.push_str(
        "This was a social engineering simulation. A few friendly questions are enough \
         to build a profile that can be stored, sold or used to impersonate you.",
    );
    message
}
