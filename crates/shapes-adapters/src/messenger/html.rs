use shapes_core::{application::ports::Messenger, domain::MessageFormat};

/// `<span><strong>Total Area: </strong></span><span>{total}</span>`
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMessage;

impl Messenger for HtmlMessage {
    fn format(&self) -> MessageFormat {
        MessageFormat::Html
    }

    fn render(&self, total: f64) -> String {
        format!("<span><strong>Total Area: </strong></span><span>{total}</span>")
    }
}
