//! Projection of an [`OptimizationResponse`] into view fragments.
//!
//! Rendering is split in two: this module turns one response into a
//! [`RenderPlan`] — an immutable value holding up to five independent,
//! individually-optional fragments — and the GUI commits a whole plan at
//! once. Replacing the previous plan wholesale is what makes rendering
//! idempotent: there is no way to leave a stale fragment behind, because
//! fragments never outlive the plan that carries them.
//!
//! Each fragment has its own presence predicate, so a response that only
//! fills some sections degrades those views to absent instead of failing.

use serde_json::Value;

use crate::method::Method;
use crate::response::{ChartRow, OptimizationResponse, PiRow};

/// Placeholder shown for absent display text.
pub const PLACEHOLDER: &str = "–";

/// Maximum dynamic minterm columns per physical chart table.
const MAX_CHART_COLUMNS: usize = 5;

/// Column headers of a Quine–McCluskey stage table.
pub const PI_STAGE_HEADERS: [&str; 4] = ["Group", "Decimal", "Binary", "Cost"];

/// Fixed (non-minterm) chart columns.
const CHART_FIXED_HEADERS: [&str; 4] = ["PI", "Expression", "Minterms", "Cost"];

// =============================================================================
// FRAGMENTS
// =============================================================================

/// Headline result texts shown above every fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub simplified: String,
    pub explanation: String,
    /// Pre-formatted duration ("1.42 ms"), placeholder when unavailable.
    pub duration: String,
}

/// The truth table, fully stringified.
#[derive(Debug, Clone, PartialEq)]
pub struct TruthTableView {
    /// Variable names plus a trailing "Result" column.
    pub headers: Vec<String>,
    /// One row per table entry; every cell is `"0"` or `"1"`.
    pub rows: Vec<Vec<String>>,
}

/// The Karnaugh map grid.
#[derive(Debug, Clone, PartialEq)]
pub struct KmapView {
    pub corner_row: String,
    pub corner_col: String,
    pub cols: Vec<String>,
    pub row_labels: Vec<String>,
    pub grid: Vec<Vec<String>>,
}

/// Minterm badges plus the raw binary assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct MintermView {
    /// One `m(<index>)` badge per minterm.
    pub badges: Vec<String>,
    pub values: String,
}

/// One named thread of the algebraic trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceThread {
    pub name: String,
    pub steps: Vec<String>,
}

/// One grouping step of the algebraic trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceGroup {
    pub name: String,
    /// Thread-name → term associations, in wire order.
    pub bindings: Vec<(String, String)>,
    pub steps: Vec<String>,
    pub result: String,
}

/// The thread/grouping trace, rendered behind the detail toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceView {
    pub simplified: String,
    pub threads: Vec<TraceThread>,
    /// May be empty; the view shows an explicit empty state then.
    pub groupings: Vec<TraceGroup>,
    pub main_join: String,
}

/// One Quine–McCluskey stage table (table 1 or one reduction step).
#[derive(Debug, Clone, PartialEq)]
pub struct PiStageTable {
    pub title: String,
    /// Group / Decimal / Binary / Cost per row.
    pub rows: Vec<[String; 4]>,
}

/// One physical table of a column-chunked chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartChunk {
    /// Fixed headers followed by this chunk's minterm columns.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A chart rendered as one or more chunked tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTableView {
    pub title: String,
    pub chunks: Vec<ChartChunk>,
}

/// The full Quine–McCluskey derivation, blocks in fixed order.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimeImplicantView {
    pub stage_tables: Vec<PiStageTable>,
    /// `binary → expression` lines.
    pub expressions: Vec<String>,
    pub chart: Option<ChartTableView>,
    pub finding_unique: Option<ChartTableView>,
    /// May be empty; the view shows "None" then.
    pub essential: Vec<String>,
    pub final_expression: String,
}

// =============================================================================
// RENDER PLAN
// =============================================================================

/// Everything one response renders to, committed atomically by the GUI.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub summary: ResultSummary,
    pub truth_table: Option<TruthTableView>,
    /// True when the response was invalid and the table notice should show.
    pub table_unavailable: bool,
    /// Export is offered exactly when a truth table rendered.
    pub export_enabled: bool,
    pub kmap: Option<KmapView>,
    pub minterms: Option<MintermView>,
    pub trace: Option<TraceView>,
    pub prime_implicants: Option<PrimeImplicantView>,
}

impl RenderPlan {
    /// Project a response into its view fragments.
    pub fn project(method: Method, response: &OptimizationResponse) -> Self {
        let valid = response.is_valid();
        let truth_table = valid.then(|| project_truth_table(response));

        Self {
            summary: project_summary(response, valid),
            export_enabled: truth_table.is_some(),
            table_unavailable: !valid,
            kmap: valid
                .then(|| project_kmap(response))
                .flatten(),
            minterms: (valid && method.shows_minterms())
                .then(|| project_minterms(response))
                .flatten(),
            trace: valid.then(|| project_trace(response)).flatten(),
            prime_implicants: (valid && method == Method::Qm)
                .then(|| project_prime_implicants(response))
                .flatten(),
            truth_table,
        }
    }
}

// =============================================================================
// PER-FRAGMENT PROJECTIONS
// =============================================================================

fn project_summary(response: &OptimizationResponse, valid: bool) -> ResultSummary {
    let duration = match response.duration {
        Some(ms) if valid => format!("{ms} ms"),
        _ => PLACEHOLDER.to_string(),
    };
    ResultSummary {
        simplified: text_or_placeholder(&response.simplified),
        explanation: text_or_placeholder(&response.explanation),
        duration,
    }
}

fn project_truth_table(response: &OptimizationResponse) -> TruthTableView {
    let mut headers: Vec<String> = response.variables.clone();
    headers.push("Result".to_string());

    let rows = response
        .table
        .iter()
        .map(|row| {
            let mut cells: Vec<String> = response
                .variables
                .iter()
                .map(|v| row.input(v).glyph().to_string())
                .collect();
            cells.push(row.output().glyph().to_string());
            cells
        })
        .collect();

    TruthTableView { headers, rows }
}

fn project_kmap(response: &OptimizationResponse) -> Option<KmapView> {
    let kmap = response.kmap.as_ref().filter(|k| k.is_renderable())?;
    Some(KmapView {
        corner_row: kmap.corner_label_row.clone(),
        corner_col: kmap.corner_label_col.clone(),
        cols: kmap.cols.clone(),
        row_labels: kmap.rows.clone(),
        grid: kmap
            .grid
            .iter()
            .map(|row| row.iter().map(value_text).collect())
            .collect(),
    })
}

fn project_minterms(response: &OptimizationResponse) -> Option<MintermView> {
    let minterm = response.minterm.as_deref()?;
    let values = response.minterm_values.as_deref()?;

    let badges = minterm
        .replace("m(", "")
        .replace(')', "")
        .split(',')
        .map(|item| format!("m({})", item.trim()))
        .collect();

    Some(MintermView {
        badges,
        values: values.to_string(),
    })
}

fn project_trace(response: &OptimizationResponse) -> Option<TraceView> {
    if response.threads.is_empty() {
        return None;
    }
    let main_join = response.main_join.as_deref()?;

    let threads = response
        .threads
        .iter()
        .map(|t| TraceThread {
            name: if t.name.is_empty() {
                "Thread".to_string()
            } else {
                t.name.clone()
            },
            steps: t.steps.clone(),
        })
        .collect();

    let groupings = response
        .groupings
        .iter()
        .map(|g| TraceGroup {
            name: if g.group.is_empty() {
                "Group".to_string()
            } else {
                g.group.clone()
            },
            bindings: g
                .threads
                .iter()
                .map(|(k, v)| (k.clone(), value_text(v)))
                .collect(),
            steps: g.steps.clone(),
            result: g
                .result
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        })
        .collect();

    Some(TraceView {
        simplified: text_or_placeholder(&response.simplified),
        threads,
        groupings,
        main_join: main_join.to_string(),
    })
}

fn project_prime_implicants(response: &OptimizationResponse) -> Option<PrimeImplicantView> {
    if !response.has_qm_artifacts() {
        return None;
    }

    let mut stage_tables = Vec::new();
    if !response.prime_implicant_table_1.is_empty() {
        stage_tables.push(stage_table(
            "Prime Implicant Table 1",
            &response.prime_implicant_table_1,
        ));
    }
    for (step, rows) in response.prime_implicant_table_2.iter().enumerate() {
        stage_tables.push(stage_table(
            &format!("Prime Implicant Table {}", step + 2),
            rows,
        ));
    }

    let expressions = response
        .prime_implicant_expression
        .iter()
        .map(|e| {
            format!(
                "{} → {}",
                e.binary.as_deref().unwrap_or("-"),
                e.expression.as_deref().unwrap_or("-")
            )
        })
        .collect();

    Some(PrimeImplicantView {
        stage_tables,
        expressions,
        chart: chart_view(
            "Prime Implicant Chart",
            &response.prime_implicant_chart,
            false,
        ),
        finding_unique: chart_view("Finding Unique Minterm", &response.finding_unique, true),
        essential: response.essential_implicants.clone(),
        final_expression: text_or_placeholder(&response.simplified),
    })
}

fn stage_table(title: &str, rows: &[PiRow]) -> PiStageTable {
    let rows = rows
        .iter()
        .map(|row| {
            [
                opt_value_text(row.group.as_ref()),
                row.decimal
                    .as_ref()
                    .map(|d| join_values(d))
                    .unwrap_or_else(|| "-".to_string()),
                row.binary.clone().unwrap_or_else(|| "-".to_string()),
                opt_value_text(row.cost.as_ref()),
            ]
        })
        .collect();
    PiStageTable {
        title: title.to_string(),
        rows,
    }
}

/// Build a chunked chart view, or `None` when there are no rows.
///
/// Dynamic columns are the union of per-row mark keys in order of first
/// appearance, sliced into groups of at most [`MAX_CHART_COLUMNS`]. Every
/// chunk repeats the fixed columns and the full row set.
fn chart_view(title: &str, rows: &[ChartRow], with_essential: bool) -> Option<ChartTableView> {
    if rows.is_empty() {
        return None;
    }

    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for key in row.marks.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let chunks = columns
        .chunks(MAX_CHART_COLUMNS)
        .map(|chunk| {
            let mut headers: Vec<String> =
                CHART_FIXED_HEADERS.iter().map(ToString::to_string).collect();
            if with_essential {
                headers.push("Essential".to_string());
            }
            headers.extend(chunk.iter().cloned());

            let rows = rows
                .iter()
                .map(|row| {
                    let mut cells = vec![
                        row.pi.clone().unwrap_or_else(|| "-".to_string()),
                        row.expression.clone().unwrap_or_else(|| "-".to_string()),
                        row.minterms
                            .as_ref()
                            .map(|m| join_values(m))
                            .unwrap_or_else(|| "-".to_string()),
                        opt_value_text(row.cost.as_ref()),
                    ];
                    if with_essential {
                        cells.push(row.essential.clone().unwrap_or_default());
                    }
                    for key in chunk {
                        cells.push(
                            row.marks.get(key).map(value_text).unwrap_or_default(),
                        );
                    }
                    cells
                })
                .collect();

            ChartChunk { headers, rows }
        })
        .collect();

    Some(ChartTableView {
        title: title.to_string(),
        chunks,
    })
}

// =============================================================================
// TEXT HELPERS
// =============================================================================

fn text_or_placeholder(s: &str) -> String {
    if s.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        s.to_string()
    }
}

/// Stringify a loosely-typed cell value. Booleans render as map bits.
fn value_text(value: &Value) -> String {
    match value {
        Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn opt_value_text(value: Option<&Value>) -> String {
    value.map(value_text).filter(|s| !s.is_empty()).unwrap_or_else(|| "-".to_string())
}

fn join_values(values: &[Value]) -> String {
    values.iter().map(value_text).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{PLACEHOLDER, RenderPlan};
    use crate::method::Method;
    use crate::response::OptimizationResponse;

    fn parse(value: serde_json::Value) -> OptimizationResponse {
        serde_json::from_value(value).unwrap()
    }

    fn simplify_response() -> OptimizationResponse {
        parse(json!({
            "simplified": "A+B",
            "explanation": "Already minimal.",
            "duration": 2.5,
            "variables": ["A", "B"],
            "table": [
                [{"A": false, "B": false}, false],
                [{"A": false, "B": true}, true],
                [{"A": true, "B": false}, true],
                [{"A": true, "B": true}, true]
            ]
        }))
    }

    #[test]
    fn simplify_scenario_renders_only_truth_table() {
        let plan = RenderPlan::project(Method::Simplify, &simplify_response());

        let table = plan.truth_table.expect("truth table present");
        assert_eq!(table.headers, ["A", "B", "Result"]);
        assert_eq!(table.rows.len(), 4);
        for row in &table.rows {
            assert_eq!(row.len(), 3);
            assert!(row.iter().all(|c| c == "0" || c == "1"));
        }
        assert_eq!(table.rows[0], ["0", "0", "0"]);
        assert_eq!(table.rows[2], ["1", "0", "1"]);

        assert!(plan.export_enabled);
        assert!(!plan.table_unavailable);
        assert!(plan.kmap.is_none());
        assert!(plan.minterms.is_none());
        assert!(plan.trace.is_none());
        assert!(plan.prime_implicants.is_none());
        assert_eq!(plan.summary.duration, "2.5 ms");
    }

    #[test]
    fn invalid_response_suppresses_table_and_export() {
        let plan = RenderPlan::project(
            Method::Simplify,
            &parse(json!({"simplified": "–", "explanation": "Invalid.", "duration": 1.0})),
        );
        assert!(plan.truth_table.is_none());
        assert!(plan.table_unavailable);
        assert!(!plan.export_enabled);
        // Duration only shows for valid responses.
        assert_eq!(plan.summary.duration, PLACEHOLDER);
    }

    #[test]
    fn kmap_scenario_renders_grid() {
        let response = parse(json!({
            "simplified": "B ∨ (A∧¬C)",
            "explanation": "Grouped on the map.",
            "variables": ["A", "B", "C"],
            "table": [[{"A": false, "B": false, "C": false}, false]],
            "kmap": {
                "corner_label_row": "A",
                "corner_label_col": "BC",
                "cols": ["00", "01", "11", "10"],
                "rows": ["0", "1"],
                "grid": [[0, 1, 1, 0], [0, 1, 1, 1]]
            }
        }));
        let plan = RenderPlan::project(Method::Kmap, &response);

        let kmap = plan.kmap.expect("kmap present");
        assert_eq!(kmap.cols.len(), 4);
        assert_eq!(kmap.row_labels.len(), 2);
        assert_eq!(kmap.grid[1], ["0", "1", "1", "1"]);
        assert_eq!(kmap.corner_row, "A");
        assert_eq!(kmap.corner_col, "BC");
    }

    #[test]
    fn absent_kmap_clears_fragment() {
        let plan = RenderPlan::project(Method::Kmap, &simplify_response());
        assert!(plan.kmap.is_none());
    }

    #[test]
    fn minterms_require_map_or_tabulation_method() {
        let mut response = simplify_response();
        response.minterm = Some("m(1,2, 3)".to_string());
        response.minterm_values = Some("01, 10, 11".to_string());

        let simplify = RenderPlan::project(Method::Simplify, &response);
        assert!(simplify.minterms.is_none());

        let kmap = RenderPlan::project(Method::Kmap, &response);
        let minterms = kmap.minterms.expect("minterm badges present");
        assert_eq!(minterms.badges, ["m(1)", "m(2)", "m(3)"]);
        assert_eq!(minterms.values, "01, 10, 11");
    }

    #[test]
    fn trace_requires_threads_and_main_join() {
        let mut response = simplify_response();
        response.threads = serde_json::from_value(json!([
            {"name": "A", "steps": ["start", "evaluate A"]}
        ]))
        .unwrap();
        assert!(RenderPlan::project(Method::Simplify, &response).trace.is_none());

        response.main_join = Some("Join all groups: (A) ∨ (B) = A+B".to_string());
        let trace = RenderPlan::project(Method::Simplify, &response)
            .trace
            .expect("trace present");
        assert_eq!(trace.threads.len(), 1);
        assert_eq!(trace.threads[0].steps.len(), 2);
        assert!(trace.groupings.is_empty());
    }

    #[test]
    fn grouping_result_defaults_to_placeholder() {
        let mut response = simplify_response();
        response.threads =
            serde_json::from_value(json!([{"name": "A", "steps": []}])).unwrap();
        response.main_join = Some("join".to_string());
        response.groupings = serde_json::from_value(json!([
            {"group": "Group 1", "threads": {"Thread 1": "A"}, "steps": ["take"]}
        ]))
        .unwrap();

        let trace = RenderPlan::project(Method::Simplify, &response).trace.unwrap();
        assert_eq!(trace.groupings[0].result, PLACEHOLDER);
        assert_eq!(
            trace.groupings[0].bindings,
            [("Thread 1".to_string(), "A".to_string())]
        );
    }

    fn qm_chart_row(pi: &str, marks: &[(&str, &str)]) -> serde_json::Value {
        let mut row = serde_json::Map::new();
        row.insert("PI".into(), json!(pi));
        row.insert("expression".into(), json!("A∧B"));
        row.insert("covered".into(), json!([0, 1]));
        row.insert("cost".into(), json!(2));
        for (k, v) in marks {
            row.insert((*k).to_string(), json!(v));
        }
        serde_json::Value::Object(row)
    }

    #[test]
    fn chart_with_seven_columns_chunks_into_five_plus_two() {
        let marks: Vec<(&str, &str)> = vec![
            ("0", "X"),
            ("1", "X"),
            ("3", ""),
            ("5", "X"),
            ("7", ""),
            ("12", "X"),
            ("15", "X"),
        ];
        let response = parse(json!({
            "simplified": "A∧B",
            "explanation": "QM.",
            "variables": ["A", "B", "C", "D"],
            "table": [[{"A": true, "B": true, "C": true, "D": true}, true]],
            "prime_implicant_chart": [qm_chart_row("11--", &marks)]
        }));

        let plan = RenderPlan::project(Method::Qm, &response);
        let chart = plan.prime_implicants.unwrap().chart.unwrap();
        assert_eq!(chart.chunks.len(), 2);
        // 4 fixed + 5 dynamic, then 4 fixed + 2 dynamic.
        assert_eq!(chart.chunks[0].headers.len(), 9);
        assert_eq!(chart.chunks[1].headers.len(), 6);
        assert_eq!(chart.chunks[0].headers[4..], ["0", "1", "3", "5", "7"]);
        assert_eq!(chart.chunks[1].headers[4..], ["12", "15"]);
        // Every chunk repeats the full row set.
        assert_eq!(chart.chunks[0].rows.len(), 1);
        assert_eq!(chart.chunks[1].rows.len(), 1);
        assert_eq!(chart.chunks[1].rows[0], ["11--", "A∧B", "0, 1", "2", "X", "X"]);
    }

    #[test]
    fn finding_unique_adds_essential_column() {
        let mut row = qm_chart_row("1-", &[("2", "X"), ("3", "X")]);
        row.as_object_mut()
            .unwrap()
            .insert("essential".into(), json!("Yes"));
        let response = parse(json!({
            "simplified": "A",
            "explanation": "QM.",
            "variables": ["A", "B"],
            "table": [[{"A": true, "B": false}, true]],
            "finding_unique": [row]
        }));

        let plan = RenderPlan::project(Method::Qm, &response);
        let unique = plan.prime_implicants.unwrap().finding_unique.unwrap();
        assert_eq!(
            unique.chunks[0].headers,
            ["PI", "Expression", "Minterms", "Cost", "Essential", "2", "3"]
        );
        assert_eq!(unique.chunks[0].rows[0][4], "Yes");
    }

    #[test]
    fn qm_blocks_only_for_qm_method() {
        let response = parse(json!({
            "simplified": "A",
            "explanation": "QM.",
            "variables": ["A"],
            "table": [[{"A": true}, true]],
            "prime_implicant_table_1": [
                {"group": 1, "decimal": [1], "binary": "1", "cost": 1}
            ]
        }));
        assert!(RenderPlan::project(Method::Simplify, &response)
            .prime_implicants
            .is_none());

        let qm = RenderPlan::project(Method::Qm, &response)
            .prime_implicants
            .expect("qm blocks present");
        assert_eq!(qm.stage_tables.len(), 1);
        assert_eq!(qm.stage_tables[0].title, "Prime Implicant Table 1");
        assert_eq!(qm.stage_tables[0].rows[0], ["1", "1", "1", "1"]);
        assert!(qm.essential.is_empty());
        assert_eq!(qm.final_expression, "A");
    }

    #[test]
    fn stage_two_tables_are_numbered_from_two() {
        let response = parse(json!({
            "simplified": "A",
            "explanation": "QM.",
            "variables": ["A", "B"],
            "table": [[{"A": true, "B": true}, true]],
            "prime_implicant_table_2": [
                [{"group": 0, "decimal": [0, 1], "binary": "0-", "cost": 0}],
                [{"group": 0, "decimal": [0, 1, 2, 3], "binary": "--", "cost": 0}]
            ]
        }));
        let qm = RenderPlan::project(Method::Qm, &response)
            .prime_implicants
            .unwrap();
        assert_eq!(qm.stage_tables[0].title, "Prime Implicant Table 2");
        assert_eq!(qm.stage_tables[1].title, "Prime Implicant Table 3");
        assert_eq!(qm.stage_tables[0].rows[0][1], "0, 1");
    }
}
