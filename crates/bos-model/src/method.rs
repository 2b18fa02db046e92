//! Simplification method selection.

use serde::{Deserialize, Serialize};

/// Which simplification algorithm the service should run.
///
/// The method also determines how many distinct variables an expression may
/// contain before the request is rejected client-side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Plain algebraic simplification (no variable limit).
    #[default]
    Simplify,

    /// Karnaugh map grouping, practical up to 4 variables.
    Kmap,

    /// Quine–McCluskey tabulation, practical up to 8 variables.
    Qm,
}

impl Method {
    /// All methods in picker display order.
    pub const ALL: [Method; 3] = [Method::Simplify, Method::Kmap, Method::Qm];

    /// Maximum distinct-variable count, `None` for unlimited.
    pub fn variable_limit(self) -> Option<usize> {
        match self {
            Self::Simplify => None,
            Self::Kmap => Some(4),
            Self::Qm => Some(8),
        }
    }

    /// Human-readable method name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Simplify => "Algebraic simplification",
            Self::Kmap => "Karnaugh map",
            Self::Qm => "Quine–McCluskey",
        }
    }

    /// Whether this method produces minterm output worth showing.
    pub fn shows_minterms(self) -> bool {
        matches!(self, Self::Kmap | Self::Qm)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Method;

    #[test]
    fn limits_match_methods() {
        assert_eq!(Method::Simplify.variable_limit(), None);
        assert_eq!(Method::Kmap.variable_limit(), Some(4));
        assert_eq!(Method::Qm.variable_limit(), Some(8));
    }

    #[test]
    fn serializes_to_wire_names() {
        assert_eq!(serde_json::to_string(&Method::Simplify).unwrap(), "\"simplify\"");
        assert_eq!(serde_json::to_string(&Method::Kmap).unwrap(), "\"kmap\"");
        assert_eq!(serde_json::to_string(&Method::Qm).unwrap(), "\"qm\"");
    }
}
