//! Report Service - renders totals through a [`Messenger`].
//!
//! The service never knows which format it is producing; the messenger is
//! injected by the caller.

use tracing::{instrument, trace};

use crate::{
    application::{ApplicationError, ports::Messenger, services::total_area},
    domain::{Area, MessageFormat},
    error::ShapesResult,
};

/// Renders total areas with an injected messenger.
pub struct ReportService {
    messenger: Box<dyn Messenger>,
}

impl ReportService {
    pub fn new(messenger: Box<dyn Messenger>) -> Self {
        Self { messenger }
    }

    pub fn format(&self) -> MessageFormat {
        self.messenger.format()
    }

    /// Render an already computed total.
    #[instrument(skip(self), fields(format = %self.messenger.format()))]
    pub fn render(&self, total: f64) -> ShapesResult<String> {
        if !total.is_finite() {
            return Err(ApplicationError::RenderingFailed {
                reason: format!("total area {total} is not a finite number"),
            }
            .into());
        }
        let message = self.messenger.render(total);
        trace!(%message, "Rendered total");
        Ok(message)
    }

    /// Aggregate `shapes` and render the total.
    pub fn report<I>(&self, shapes: I) -> ShapesResult<String>
    where
        I: IntoIterator,
        I::Item: Area,
    {
        self.render(total_area(shapes))
    }
}
