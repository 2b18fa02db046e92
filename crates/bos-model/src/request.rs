//! Request body for the optimization endpoint.

use serde::Serialize;

use crate::method::Method;

/// JSON body posted to the optimization service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationRequest {
    /// Raw Boolean expression as typed by the user.
    pub expression: String,
    /// Selected simplification method.
    pub method: Method,
}

impl OptimizationRequest {
    /// Build a request, trimming surrounding whitespace from the expression.
    pub fn new(expression: impl Into<String>, method: Method) -> Self {
        Self {
            expression: expression.into().trim().to_string(),
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OptimizationRequest;
    use crate::method::Method;

    #[test]
    fn serializes_expression_and_method() {
        let request = OptimizationRequest::new("A & B", Method::Kmap);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"expression": "A & B", "method": "kmap"})
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let request = OptimizationRequest::new("  A | B \n", Method::Simplify);
        assert_eq!(request.expression, "A | B");
    }
}
