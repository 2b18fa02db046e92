//! Calculator view state.

use bos_model::{Method, RenderPlan};

/// All state of the calculator page.
///
/// Result fragments live in one optional [`RenderPlan`] that is replaced
/// wholesale: either a full set of fragments from one response is shown, or
/// nothing is. Clearing sets it to `None`, which hides every result region
/// at once.
#[derive(Debug, Default)]
pub struct CalculatorState {
    /// Expression text as typed.
    pub expression: String,
    /// Selected simplification method.
    pub method: Method,

    /// Inline error shown under the input, dismissed on the next input.
    pub error: Option<String>,
    /// Whether a request is currently in flight.
    pub is_loading: bool,

    /// Fragments of the last committed response.
    pub plan: Option<RenderPlan>,
    /// Whether the trace detail region is expanded. Reset on every commit.
    pub detail_expanded: bool,

    /// Generation of the newest dispatched request. A completion carrying an
    /// older generation is stale and discarded.
    pub request_seq: u64,

    /// One-line outcome of the last export attempt.
    pub export_notice: Option<String>,
}

impl CalculatorState {
    /// Reset input and results to the initial empty state.
    ///
    /// Idempotent: clearing an already-clear calculator changes nothing.
    pub fn clear(&mut self) {
        self.expression.clear();
        self.error = None;
        self.plan = None;
        self.detail_expanded = false;
        self.export_notice = None;
    }

    /// Commit a new render plan, resetting per-render view state.
    pub fn commit(&mut self, plan: RenderPlan) {
        self.plan = Some(plan);
        self.detail_expanded = false;
        self.export_notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::CalculatorState;
    use bos_model::{Method, OptimizationResponse, RenderPlan};

    #[test]
    fn clear_is_idempotent() {
        let mut state = CalculatorState {
            expression: "A & B".to_string(),
            error: Some("nope".to_string()),
            detail_expanded: true,
            request_seq: 3,
            ..Default::default()
        };
        state.clear();
        let snapshot = format!("{state:?}");
        state.clear();
        assert_eq!(format!("{state:?}"), snapshot);
        assert!(state.expression.is_empty());
        assert!(state.error.is_none());
        assert!(state.plan.is_none());
        // Clearing never touches the request generation.
        assert_eq!(state.request_seq, 3);
    }

    #[test]
    fn commit_collapses_the_detail_region() {
        let mut state = CalculatorState {
            detail_expanded: true,
            ..Default::default()
        };
        let plan = RenderPlan::project(Method::Simplify, &OptimizationResponse::default());
        state.commit(plan);
        assert!(!state.detail_expanded);
        assert!(state.plan.is_some());
    }
}
