//! Assembly of the final DOT description.
//!
//! All visual styling travels in per-node and per-edge HTML-like labels and
//! class lists; the graph-wide defaults only pick a font, a transparent
//! background and the `plain` node shape.

use crate::color::obfuscate_type_hash;
use crate::edges::{compute_edges, EdgeData};
use crate::error::RenderError;
use crate::escape::{encode_name, escape_html};
use crate::node_data::{compute_node_data, NodeData};
use crate::visibility::VisibilityPolicy;
use crate::writer::{DotSource, DotWriter};
use partial_dot_semantics::{Node, NodeKind, Relation, RelationDetail, SemanticModel, TruthValue};

const GRAPH_HEADER: [&str; 4] = [
    "digraph {",
    "graph [bgcolor=transparent];",
    r#"node [fontsize=12, shape=plain, fontname="OpenSans"];"#,
    r#"edge [fontsize=10.5, color=black, fontname="OpenSans"];"#,
];

const GRAPH_FOOTER: &str = "}";

/// Render the current snapshot, or nothing if no snapshot is available yet.
pub fn render_graph(model: Option<&SemanticModel>, policy: &VisibilityPolicy) -> Option<DotSource> {
    model.map(|model| render(model, policy))
}

/// Render a snapshot as a DOT digraph.
///
/// The output depends only on the snapshot and the policy, so rendering an
/// unchanged snapshot again yields byte-identical text.
pub fn render(model: &SemanticModel, policy: &VisibilityPolicy) -> DotSource {
    let node_data = compute_node_data(model, policy);
    let edges = compute_edges(model, &node_data, policy);

    let mut writer = DotWriter::new();
    for line in GRAPH_HEADER {
        writer.line(line);
    }

    let mut rendered_nodes = 0;
    for (index, (node, data)) in model.nodes().iter().zip(&node_data).enumerate() {
        if data.is_rendered(policy) {
            write_node(&mut writer, model, policy, index, node, data);
            rendered_nodes += 1;
        }
    }
    for edge in &edges {
        write_edge(&mut writer, model, policy, edge);
    }

    writer.line(GRAPH_FOOTER);
    let source = writer.finish();
    tracing::debug!(
        nodes = rendered_nodes,
        edges = edges.len(),
        lines = source.line_count(),
        "rendered graph"
    );
    source
}

/// Ingest a JSON snapshot and an optional JSON policy, then render.
pub fn render_json(snapshot: &str, policy: Option<&str>) -> Result<DotSource, RenderError> {
    let model = SemanticModel::from_json(snapshot)?;
    let policy = match policy {
        Some(json) => VisibilityPolicy::from_json(json).map_err(RenderError::Policy)?,
        None => VisibilityPolicy::default(),
    };
    Ok(render(&model, &policy))
}

// ============================================================================
// Nodes
// ============================================================================

fn node_label(policy: &VisibilityPolicy, node: &Node) -> String {
    let name = escape_html(policy.display_name(node));
    match node.kind {
        NodeKind::Individual => format!("<b>{name}</b>"),
        NodeKind::Implicit | NodeKind::New => name,
    }
}

fn node_classes(node: &Node, data: &NodeData) -> String {
    let mut classes = vec![
        format!("node-{}", node.kind.as_str()),
        format!("node-exists-{}", data.exists),
        format!("node-equalsSelf-{}", data.equals_self),
    ];
    if data.unary_predicates.is_empty() {
        classes.push("node-empty".to_string());
    }
    if let Some(type_hash) = &node.type_hash {
        classes.push(format!("node-typeHash-{}", obfuscate_type_hash(type_hash)));
    }
    classes.join(" ")
}

fn relation_label(policy: &VisibilityPolicy, relation: &Relation) -> String {
    let name = escape_html(policy.display_name(relation));
    match relation.detail {
        RelationDetail::Class {
            abstract_class: true,
        } => format!("<i>{name}</i>"),
        RelationDetail::Reference { containment: true } => format!("<b>{name}</b>"),
        RelationDetail::Class {
            abstract_class: false,
        }
        | RelationDetail::Reference { containment: false }
        | RelationDetail::Opposite { .. }
        | RelationDetail::Predicate { .. }
        | RelationDetail::Builtin => name,
    }
}

fn write_node(
    writer: &mut DotWriter,
    model: &SemanticModel,
    policy: &VisibilityPolicy,
    index: usize,
    node: &Node,
    data: &NodeData,
) {
    let id = encode_name(&node.name);
    let border = match node.kind {
        NodeKind::Individual => 2,
        NodeKind::Implicit | NodeKind::New => 1,
    };
    let count = if policy.scopes {
        format!(" {}", escape_html(&data.count))
    } else {
        String::new()
    };

    writer.line(format!(
        r#"n{index} [id="{id}", class="{}", label=<"#,
        node_classes(node, data)
    ));
    writer.line(format!(
        r#"<table border="{border}" cellborder="0" cellspacing="0" style="rounded" bgcolor="white">"#
    ));
    writer.line(format!(
        r#"<tr><td cellpadding="4.5" width="32" bgcolor="green">{}{count}</td></tr>"#,
        node_label(policy, node)
    ));

    if !data.unary_predicates.is_empty() {
        writer.line(
            r#"<hr/><tr><td cellpadding="4.5"><table fixedsize="TRUE" align="left" border="0" cellborder="0" cellspacing="0" cellpadding="1.5">"#,
        );
        for (name, value) in &data.unary_predicates {
            let Some(relation) = model.relation(name) else {
                continue;
            };
            writer.line(format!(
                r##"<tr><td><img src="#{value}"/></td><td width="1.5"></td><td align="left" href="#{value}" id="{id},{},label">{}</td></tr>"##,
                encode_name(name),
                relation_label(policy, relation)
            ));
        }
        writer.line("</table></td></tr>");
    }

    writer.line("</table>>]");
}

// ============================================================================
// Edges
// ============================================================================

fn edge_label(name: &str, containment: bool, value: TruthValue) -> String {
    let text = if containment {
        format!("<b>{name}</b>")
    } else {
        name.to_string()
    };
    match value {
        TruthValue::Error => format!(
            r##"<<table fixedsize="TRUE" align="left" border="0" cellborder="0" cellspacing="0" cellpadding="0"><tr><td><img src="#ERROR"/></td><td width="3.9375"></td><td align="left">{text}</td></tr></table>>"##
        ),
        TruthValue::True | TruthValue::False | TruthValue::Unknown if containment => {
            format!("<{text}>")
        }
        TruthValue::True | TruthValue::False | TruthValue::Unknown => format!("\"{text}\""),
    }
}

fn write_edge(writer: &mut DotWriter, model: &SemanticModel, policy: &VisibilityPolicy, edge: &EdgeData<'_>) {
    // Endpoints were resolved while computing the edge.
    let (Some(from), Some(to)) = (model.node(edge.from), model.node(edge.to)) else {
        return;
    };
    let id = format!(
        "{},{},{}",
        encode_name(&from.name),
        encode_name(&to.name),
        encode_name(&edge.relation.name)
    );
    let name = escape_html(policy.display_name(edge.relation));

    writer.line(format!(
        r#"n{} -> n{} [id="{id}", dir="{}", constraint={}, weight={}, xlabel={}, penwidth={}, arrowsize={}, style="{}", class="edge-{}"]"#,
        edge.from,
        edge.to,
        edge.dir.as_str(),
        edge.constraint,
        edge.weight,
        edge_label(&name, edge.containment, edge.value),
        edge.penwidth,
        edge.arrowsize(),
        edge.style(),
        edge.value,
    ));
}
