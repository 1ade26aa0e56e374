use serde::Serialize;

use crate::Route;

/// Request body for the out-of-process route explanation service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationRequest {
    pub prompt: String,
}

impl Route {
    /// Builds the explanation prompt from the route's stops and cost.
    /// The route itself does not depend on the explanation in any way.
    pub fn explanation_request(&self) -> ExplanationRequest {
        ExplanationRequest {
            prompt: format!(
                "Explain this route on campus with {} stops and total distance {:.2} meters. \
                 The stops are node IDs: {}.",
                self.stops(),
                self.cost,
                self.path.nodes().join(", ")
            ),
        }
    }
}
