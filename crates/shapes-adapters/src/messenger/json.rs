use shapes_core::{application::ports::Messenger, domain::MessageFormat};

/// `{ "Total Area" : {total} }`
///
/// Spacing is fixed, and whole totals print without a decimal point.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMessage;

impl Messenger for JsonMessage {
    fn format(&self) -> MessageFormat {
        MessageFormat::Json
    }

    fn render(&self, total: f64) -> String {
        format!("{{ \"Total Area\" : {total} }}")
    }
}
