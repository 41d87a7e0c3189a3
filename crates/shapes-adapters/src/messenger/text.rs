use shapes_core::{application::ports::Messenger, domain::MessageFormat};

/// `Total Area: {total}`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMessage;

impl Messenger for TextMessage {
    fn format(&self) -> MessageFormat {
        MessageFormat::Text
    }

    fn render(&self, total: f64) -> String {
        format!("Total Area: {total}")
    }
}
