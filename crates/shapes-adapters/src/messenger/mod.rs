//! Messenger adapters: one fixed template per [`MessageFormat`].

mod html;
mod json;
mod text;

pub use html::HtmlMessage;
pub use json::JsonMessage;
pub use text::TextMessage;

use shapes_core::{application::ports::Messenger, domain::MessageFormat};

/// Pick the adapter for `format`.
pub fn messenger_for(format: MessageFormat) -> Box<dyn Messenger> {
    match format {
        MessageFormat::Text => Box::new(TextMessage),
        MessageFormat::Json => Box::new(JsonMessage),
        MessageFormat::Html => Box::new(HtmlMessage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messenger_for_matches_requested_format() {
        for format in MessageFormat::ALL {
            assert_eq!(messenger_for(format).format(), format);
        }
    }

    #[test]
    fn templates_for_one_hundred() {
        assert_eq!(TextMessage.render(100.0), "Total Area: 100");
        assert_eq!(JsonMessage.render(100.0), r#"{ "Total Area" : 100 }"#);
        assert_eq!(
            HtmlMessage.render(100.0),
            "<span><strong>Total Area: </strong></span><span>100</span>"
        );
    }

    #[test]
    fn fractional_totals_keep_full_precision() {
        assert_eq!(
            TextMessage.render(62_184.108_652_896_68),
            "Total Area: 62184.10865289668"
        );
    }
}
