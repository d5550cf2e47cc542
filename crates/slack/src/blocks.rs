//! Conversion from semantic message blocks to Slack Block Kit JSON.

use serde_json::{Value, json};

use gitrelay_events::{Field, LinkButton, MessageBlock};

/// Render blocks as Block Kit values, preserving order.
#[must_use]
pub fn to_block_kit(blocks: &[MessageBlock]) -> Vec<Value> {
    blocks.iter().map(block_to_value).collect()
}

fn block_to_value(block: &MessageBlock) -> Value {
    match block {
        MessageBlock::Header { text } => json!({
            "type": "header",
            "text": { "type": "plain_text", "text": text }
        }),
        MessageBlock::Fields(fields) => json!({
            "type": "section",
            "fields": fields.iter().map(field_to_value).collect::<Vec<_>>()
        }),
        MessageBlock::Text { text } => json!({
            "type": "section",
            "text": { "type": "mrkdwn", "text": text }
        }),
        MessageBlock::Actions(buttons) => json!({
            "type": "actions",
            "elements": buttons.iter().map(button_to_value).collect::<Vec<_>>()
        }),
    }
}

fn field_to_value(field: &Field) -> Value {
    json!({
        "type": "mrkdwn",
        "text": format!("*{}:*\n{}", field.label, field.value)
    })
}

fn button_to_value(button: &LinkButton) -> Value {
    json!({
        "type": "button",
        "text": { "type": "plain_text", "text": button.label },
        "url": button.url
    })
}
