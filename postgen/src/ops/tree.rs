//! Tree operation - normalize a collection without generating anything.

use eyre::{Context, Result};
use postgen_codegen::pipeline::{Pipeline, TracePlugin};
use postgen_collection::Collection;
use postgen_ir::{Folder, Node};

use crate::reports::TreeReport;

/// Normalize the collection and describe the resulting operation tree.
///
/// With `json` set the tree is rendered as pretty-printed JSON instead of an
/// indented outline.
pub fn tree(collection: Collection, json: bool) -> Result<TreeReport> {
    let collection_name = collection.name().map(str::to_string);
    let ctx = Pipeline::new()
        .plugin(TracePlugin)
        .normalize(collection)
        .wrap_err("Pipeline failed")?;

    let tree = ctx.tree()?;
    let rendered = if json {
        serde_json::to_string_pretty(tree.root()).wrap_err("Failed to serialize tree")?
    } else {
        let mut out = String::new();
        outline(tree.root(), 0, &mut out);
        out.trim_end().to_string()
    };

    Ok(TreeReport {
        collection_name,
        operation_count: tree.operation_count(),
        tree: rendered,
        diagnostics: ctx.diagnostics.iter().map(ToString::to_string).collect(),
    })
}

fn outline(folder: &Folder, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for (key, node) in folder.iter() {
        match node {
            Node::Folder(children) => {
                out.push_str(&format!("{indent}{key}/\n"));
                outline(children, depth + 1, out);
            }
            Node::Operation(op) => {
                let params: Vec<String> = op
                    .inputs
                    .params()
                    .iter()
                    .map(|p| {
                        if p.required {
                            p.key.clone()
                        } else {
                            format!("[{}]", p.key)
                        }
                    })
                    .collect();
                out.push_str(&format!(
                    "{indent}{key}  {} {}",
                    op.method.to_uppercase(),
                    op.endpoint
                ));
                if !params.is_empty() {
                    out.push_str(&format!(" ({})", params.join(", ")));
                }
                out.push('\n');
            }
        }
    }
}
