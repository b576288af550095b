//! DOT graph export of a builder topology.
//!
//! One edge per registered trigger. An edge whose source equals its target
//! stands for custom logic rather than a real transition and is labelled.

use crate::core::Key;
use serde::{Deserialize, Serialize};

/// Rendering options for [`FsmBuilder::to_dot_graph_with`](crate::builder::FsmBuilder::to_dot_graph_with).
///
/// Every field has a default, so a partial JSON or TOML table is enough:
///
/// ```rust
/// use statecraft::dot::DotOptions;
///
/// let options: DotOptions = serde_json::from_str(r#"{ "rank_dir": "LR" }"#).unwrap();
/// assert_eq!(options.graph_name, "fsm");
/// assert_eq!(options.rank_dir.as_deref(), Some("LR"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotOptions {
    /// Graph identifier after `digraph`, always emitted quoted
    pub graph_name: String,

    /// Optional `rankdir` attribute (`LR`, `TB`, ...), emitted quoted
    pub rank_dir: Option<String>,

    /// Label attached to custom-logic edges
    pub custom_label: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            graph_name: "fsm".to_string(),
            rank_dir: None,
            custom_label: "custom".to_string(),
        }
    }
}

/// Render `(source, target)` edges into a complete DOT document.
/// Edge lines are sorted so the output does not depend on hash order.
pub(crate) fn render<'a, S, I>(options: &DotOptions, edges: I) -> String
where
    S: Key,
    I: IntoIterator<Item = (&'a S, &'a S)>,
{
    let mut lines: Vec<String> = edges
        .into_iter()
        .map(|(source, target)| {
            let edge = format!("{} -> {}", quote(&source.label()), quote(&target.label()));
            if source == target {
                format!("{edge} [label={}];", quote(&options.custom_label))
            } else {
                format!("{edge};")
            }
        })
        .collect();
    lines.sort();

    let mut dot = format!("digraph {} {{\n", quote(&options.graph_name));
    if let Some(rank_dir) = &options.rank_dir {
        dot.push_str(&format!("    rankdir={};\n", quote(rank_dir)));
    }
    for line in lines {
        dot.push_str("    ");
        dot.push_str(&line);
        dot.push('\n');
    }
    dot.push_str("}\n");
    dot
}

fn quote(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
