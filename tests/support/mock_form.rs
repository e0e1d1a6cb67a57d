use submit_jp::traits::SubmitTarget;
use submit_jp::types::{SubmitEvent, SubmitSource};
use submit_jp::Controller;

/// Form stand-in that records every submission request.
///
/// Like a browser's `requestSubmit()`, each request queues a submit event
/// that the host later delivers to the controller.
#[derive(Default, Debug)]
pub struct MockForm {
    pub requests: Vec<SubmitSource>,
    pending: Vec<SubmitEvent>,
    reject: Option<String>,
}

impl MockForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form whose submission primitive always fails with `reason`.
    pub fn rejecting(reason: &str) -> Self {
        Self {
            reject: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// Deliver queued submit events to the controller, returning them after
    /// the submit callback has seen them.
    pub fn dispatch(&mut self, controller: &mut Controller) -> Vec<SubmitEvent> {
        let mut delivered = Vec::new();
        for mut event in self.pending.drain(..) {
            controller.on_submit(&mut event);
            delivered.push(event);
        }
        delivered
    }
}

impl SubmitTarget for MockForm {
    type Error = String;

    fn request_submit(&mut self, source: SubmitSource) -> Result<(), Self::Error> {
        if let Some(reason) = &self.reject {
            return Err(reason.clone());
        }
        self.requests.push(source);
        self.pending.push(SubmitEvent::new(source));
        Ok(())
    }
}
