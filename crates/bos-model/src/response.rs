//! Response model for the optimization endpoint.
//!
//! The service replies with one JSON object whose shape varies by method and
//! whose sections are all effectively optional. Every field here defaults on
//! absence, and fields the backend is known to emit with the "wrong" type in
//! its empty form (`kmap: {}`, `minterm: []`, `mainJoin: ""`) degrade to
//! their absent representation instead of failing the whole parse. Rendering
//! decides per section whether enough is present to show anything.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A truth value that tolerates JSON booleans as well as 0/1 numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bit(pub bool);

impl Bit {
    /// The `"1"` / `"0"` cell text used across all tabular views.
    pub fn glyph(self) -> &'static str {
        if self.0 { "1" } else { "0" }
    }
}

impl<'de> Deserialize<'de> for Bit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bool(bool),
            Int(i64),
            Float(f64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Bool(b) => Bit(b),
            Repr::Int(i) => Bit(i != 0),
            Repr::Float(f) => Bit(f != 0.0),
        })
    }
}

/// One truth-table row: the input assignment and the output bit.
///
/// On the wire this is a two-element array `[{"A": true, ...}, false]`.
#[derive(Debug, Clone, Deserialize)]
pub struct TableRow(pub BTreeMap<String, Bit>, pub Bit);

impl TableRow {
    /// Input value for a variable, treating missing entries as `0`.
    pub fn input(&self, variable: &str) -> Bit {
        self.0.get(variable).copied().unwrap_or(Bit(false))
    }

    /// The row's output bit.
    pub fn output(&self) -> Bit {
        self.1
    }
}

/// Karnaugh map payload.
///
/// The backend sends `{}` when no map applies, so every field defaults and
/// [`KmapData::is_renderable`] gates actual display.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KmapData {
    #[serde(default)]
    pub corner_label_row: String,
    #[serde(default)]
    pub corner_label_col: String,
    #[serde(default)]
    pub cols: Vec<String>,
    #[serde(default)]
    pub rows: Vec<String>,
    #[serde(default)]
    pub grid: Vec<Vec<Value>>,
}

impl KmapData {
    /// True when the map has labels and a grid consistent with them.
    pub fn is_renderable(&self) -> bool {
        !self.cols.is_empty()
            && !self.rows.is_empty()
            && self.grid.len() == self.rows.len()
            && self.grid.iter().all(|row| row.len() == self.cols.len())
    }
}

/// One named thread of the algebraic trace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThreadTrace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// One grouping step of the algebraic trace.
///
/// `threads` is an ordered mapping of thread name to the term it carries;
/// the wire order is meaningful and preserved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Grouping {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub threads: serde_json::Map<String, Value>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub result: Option<String>,
}

/// One row of a Quine–McCluskey stage table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PiRow {
    #[serde(default)]
    pub group: Option<Value>,
    #[serde(default)]
    pub decimal: Option<Vec<Value>>,
    #[serde(default)]
    pub binary: Option<String>,
    #[serde(default)]
    pub cost: Option<Value>,
}

/// One prime-implicant expression pairing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PiExpression {
    #[serde(default)]
    pub binary: Option<String>,
    #[serde(default)]
    pub expression: Option<String>,
}

/// One row of the prime-implicant chart (or the finding-unique table).
///
/// Beyond the fixed columns, rows carry one key per covered minterm index
/// whose value is the coverage mark. Those keys are not known in advance and
/// are collected in order of appearance. The backend names the covered-list
/// field `covered`; the historical reader called it `minterms`, so both
/// spellings are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartRow {
    #[serde(rename = "PI", default)]
    pub pi: Option<String>,
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default, alias = "covered")]
    pub minterms: Option<Vec<Value>>,
    #[serde(default)]
    pub cost: Option<Value>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub essential: Option<String>,
    #[serde(flatten)]
    pub marks: serde_json::Map<String, Value>,
}

/// Full response of the optimization service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptimizationResponse {
    #[serde(default)]
    pub simplified: String,
    #[serde(default)]
    pub explanation: String,
    /// Server-side computation time in milliseconds.
    #[serde(default)]
    pub duration: Option<f64>,

    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(default)]
    pub table: Vec<TableRow>,

    #[serde(default)]
    pub kmap: Option<KmapData>,

    #[serde(default, deserialize_with = "string_or_none")]
    pub minterm: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub minterm_values: Option<String>,

    #[serde(default)]
    pub threads: Vec<ThreadTrace>,
    #[serde(default)]
    pub groupings: Vec<Grouping>,
    #[serde(rename = "mainJoin", default, deserialize_with = "string_or_none")]
    pub main_join: Option<String>,

    #[serde(default)]
    pub prime_implicant_table_1: Vec<PiRow>,
    #[serde(default)]
    pub prime_implicant_table_2: Vec<Vec<PiRow>>,
    #[serde(default)]
    pub prime_implicant_expression: Vec<PiExpression>,
    #[serde(default)]
    pub prime_implicant_chart: Vec<ChartRow>,
    #[serde(default)]
    pub finding_unique: Vec<ChartRow>,
    #[serde(default)]
    pub essential_implicants: Vec<String>,
}

impl OptimizationResponse {
    /// A response is valid when it carries a non-empty variable list and
    /// truth table. Table-dependent views and export require this.
    pub fn is_valid(&self) -> bool {
        !self.variables.is_empty() && !self.table.is_empty()
    }

    /// Whether any Quine–McCluskey artifact array is non-empty.
    pub fn has_qm_artifacts(&self) -> bool {
        !self.prime_implicant_table_1.is_empty()
            || !self.prime_implicant_table_2.is_empty()
            || !self.prime_implicant_expression.is_empty()
            || !self.prime_implicant_chart.is_empty()
            || !self.finding_unique.is_empty()
            || !self.essential_implicants.is_empty()
    }
}

/// Accept a string, treating `null`, the empty string, and any non-string
/// value (the backend's `[]` empty form) as absent.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Bit, OptimizationResponse};

    #[test]
    fn parses_simplify_response() {
        let response: OptimizationResponse = serde_json::from_value(json!({
            "simplified": "A ∨ B",
            "explanation": "Disjunctive normal form.",
            "duration": 1.42,
            "variables": ["A", "B"],
            "table": [
                [{"A": false, "B": false}, false],
                [{"A": false, "B": true}, true],
                [{"A": true, "B": false}, true],
                [{"A": true, "B": true}, true]
            ]
        }))
        .unwrap();

        assert!(response.is_valid());
        assert_eq!(response.table.len(), 4);
        assert_eq!(response.table[1].input("B"), Bit(true));
        assert_eq!(response.table[0].output(), Bit(false));
        assert!(response.kmap.is_none());
        assert!(!response.has_qm_artifacts());
    }

    #[test]
    fn tolerates_backend_empty_forms() {
        // The backend's "empty input" reply uses type-mismatched placeholders.
        let response: OptimizationResponse = serde_json::from_value(json!({
            "simplified": "–",
            "explanation": "–",
            "variables": [],
            "table": [],
            "kmap": {},
            "minterm": [],
            "minterm_values": [],
            "threads": [],
            "groupings": [],
            "mainJoin": "",
            "duration": 0
        }))
        .unwrap();

        assert!(!response.is_valid());
        assert!(!response.kmap.unwrap().is_renderable());
        assert_eq!(response.minterm, None);
        assert_eq!(response.main_join, None);
    }

    #[test]
    fn accepts_numeric_table_bits() {
        let response: OptimizationResponse = serde_json::from_value(json!({
            "variables": ["A"],
            "table": [[{"A": 0}, 0], [{"A": 1}, 1]]
        }))
        .unwrap();

        assert_eq!(response.table[1].input("A"), Bit(true));
        assert_eq!(response.table[1].output(), Bit(true));
    }

    #[test]
    fn chart_rows_accept_covered_alias_and_keep_mark_order() {
        let response: OptimizationResponse = serde_json::from_value(json!({
            "variables": ["A", "B"],
            "table": [[{"A": true, "B": true}, true]],
            "prime_implicant_chart": [{
                "PI": "1-",
                "expression": "A",
                "covered": [2, 3],
                "cost": 2,
                "3": "X",
                "2": "X"
            }]
        }))
        .unwrap();

        let row = &response.prime_implicant_chart[0];
        assert_eq!(row.pi.as_deref(), Some("1-"));
        assert_eq!(row.minterms.as_ref().unwrap().len(), 2);
        let keys: Vec<&str> = row.marks.keys().map(String::as_str).collect();
        assert_eq!(keys, ["3", "2"]);
    }

    #[test]
    fn grouping_thread_order_is_preserved() {
        let response: OptimizationResponse = serde_json::from_value(json!({
            "variables": ["A"],
            "table": [[{"A": true}, true]],
            "groupings": [{
                "group": "Group 1",
                "threads": {"Thread 2": "B", "Thread 1": "A"},
                "steps": ["join"],
                "result": "(A) ∨ (B)"
            }]
        }))
        .unwrap();

        let keys: Vec<&str> = response.groupings[0]
            .threads
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["Thread 2", "Thread 1"]);
    }
}
