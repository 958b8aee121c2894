//! Rendering scenarios on realistic snapshots, driven through the facade
//! crate and the JSON ingestion path.

use partial_dot::{render, render_json, SemanticModel, Visibility, VisibilityPolicy};
use pretty_assertions::assert_eq;

const FAMILY: &str = include_str!("fixtures/snapshots/family.json");
const FILESYSTEM: &str = include_str!("fixtures/snapshots/filesystem.json");
const MUST_ONLY: &str = include_str!("fixtures/policies/must_only.json");

fn edge_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| line.contains(" -> ")).collect()
}

#[test]
fn test_family_edges() {
    let source = render_json(FAMILY, None).unwrap();

    assert_eq!(
        edge_lines(source.text()),
        vec![
            r#"n0 -> n1 [id="family::alice,family::bob,family::friend", dir="both", constraint=true, weight=1, xlabel="friend", penwidth=1, arrowsize=1, style="solid", class="edge-TRUE"]"#,
            r#"n1 -> n2 [id="family::bob,family::charlie,family::friend", dir="forward", constraint=true, weight=1, xlabel="friend", penwidth=1, arrowsize=1, style="dashed", class="edge-UNKNOWN"]"#,
            r#"n2 -> n1 [id="family::charlie,family::bob,family::friend", dir="forward", constraint=false, weight=0, xlabel="friend", penwidth=1, arrowsize=1, style="solid", class="edge-TRUE"]"#,
            r#"n3 -> n3 [id="family::Person::new,family::Person::new,family::friend", dir="forward", constraint=true, weight=1, xlabel="friend", penwidth=1, arrowsize=1, style="dashed", class="edge-UNKNOWN"]"#,
            r#"n0 -> n2 [id="family::alice,family::charlie,family::parent", dir="forward", constraint=true, weight=1, xlabel="parent", penwidth=1, arrowsize=1, style="solid", class="edge-TRUE"]"#,
            r#"n3 -> n0 [id="family::Person::new,family::alice,family::parent", dir="forward", constraint=true, weight=0.5, xlabel="parent", penwidth=1, arrowsize=1, style="dashed", class="edge-UNKNOWN"]"#,
            r#"n0 -> n3 [id="family::alice,family::Person::new,family::children", dir="forward", constraint=false, weight=0, xlabel="children", penwidth=1, arrowsize=1, style="dashed", class="edge-UNKNOWN"]"#,
            r#"n2 -> n0 [id="family::charlie,family::alice,family::children", dir="forward", constraint=false, weight=0, xlabel="children", penwidth=1, arrowsize=1, style="solid", class="edge-TRUE"]"#,
        ]
    );
}

#[test]
fn test_family_with_must_policy() {
    let source = render_json(FAMILY, Some(MUST_ONLY)).unwrap();

    // The unknown `bob -> charlie` edge is hidden, so `charlie -> bob` drives
    // the layout on its own.
    assert_eq!(
        edge_lines(source.text()),
        vec![
            r#"n0 -> n1 [id="family::alice,family::bob,family::friend", dir="both", constraint=true, weight=1, xlabel="friend", penwidth=1, arrowsize=1, style="solid", class="edge-TRUE"]"#,
            r#"n2 -> n1 [id="family::charlie,family::bob,family::friend", dir="forward", constraint=true, weight=1, xlabel="friend", penwidth=1, arrowsize=1, style="solid", class="edge-TRUE"]"#,
            r#"n0 -> n2 [id="family::alice,family::charlie,family::parent", dir="forward", constraint=true, weight=1, xlabel="parent", penwidth=1, arrowsize=1, style="solid", class="edge-TRUE"]"#,
            r#"n2 -> n0 [id="family::charlie,family::alice,family::children", dir="forward", constraint=false, weight=0, xlabel="children", penwidth=1, arrowsize=1, style="solid", class="edge-TRUE"]"#,
        ]
    );
    // `Person::new` is still drawn through its class membership.
    assert!(source.text().contains(r#"n3 [id="family::Person::new", class="node-NEW node-exists-UNKNOWN node-equalsSelf-FALSE node-typeHash-"#));
}

#[test]
fn test_filesystem_containment() {
    let source = render_json(FILESYSTEM, None).unwrap();
    let edges = edge_lines(source.text());

    assert_eq!(edges.len(), 7);
    assert_eq!(
        edges[0],
        r#"n0 -> n1 [id="filesystem::fs,filesystem::root,filesystem::FileSystem::root", dir="forward", constraint=true, weight=5, xlabel=<<b>root</b>>, penwidth=2, arrowsize=0.875, style="solid", class="edge-TRUE"]"#
    );
    assert_eq!(
        edges[1],
        r#"n1 -> n2 [id="filesystem::root,filesystem::File::new,filesystem::Dir::entries", dir="forward", constraint=true, weight=2.5, xlabel=<<b>entries</b>>, penwidth=2, arrowsize=0.875, style="dashed", class="edge-UNKNOWN"]"#
    );
    // The container side yields to the visible containment.
    assert_eq!(
        edges[4],
        r#"n2 -> n1 [id="filesystem::File::new,filesystem::root,filesystem::Entry::parent", dir="forward", constraint=false, weight=0, xlabel="parent", penwidth=1, arrowsize=1, style="dashed", class="edge-UNKNOWN"]"#
    );
}

#[test]
fn test_filesystem_node_rows() {
    let source = render_json(FILESYSTEM, None).unwrap();
    let text = source.text();

    let start = text
        .find(r#"n2 [id="filesystem::File::new""#)
        .expect("File::new is rendered");
    let end = start + text[start..].find("</table>>]").unwrap();
    let rows: Vec<&str> = text[start..end]
        .lines()
        .filter(|line| line.starts_with("<tr><td><img"))
        .collect();

    assert_eq!(
        rows,
        vec![
            r##"<tr><td><img src="#FALSE"/></td><td width="1.5"></td><td align="left" href="#FALSE" id="filesystem::File::new,filesystem::FileSystem,label">FileSystem</td></tr>"##,
            r##"<tr><td><img src="#TRUE"/></td><td width="1.5"></td><td align="left" href="#TRUE" id="filesystem::File::new,filesystem::Entry,label"><i>Entry</i></td></tr>"##,
            r##"<tr><td><img src="#FALSE"/></td><td width="1.5"></td><td align="left" href="#FALSE" id="filesystem::File::new,filesystem::Dir,label">Dir</td></tr>"##,
            r##"<tr><td><img src="#TRUE"/></td><td width="1.5"></td><td align="left" href="#TRUE" id="filesystem::File::new,filesystem::File,label">File</td></tr>"##,
            r##"<tr><td><img src="#ERROR"/></td><td width="1.5"></td><td align="left" href="#ERROR" id="filesystem::File::new,filesystem::orphan,label">orphan</td></tr>"##,
        ]
    );
    assert!(text[start..end].contains(r#"bgcolor="green">File::new</td>"#));
}

#[test]
fn test_scopes_show_counts() {
    let model = SemanticModel::from_json(FILESYSTEM).unwrap();
    let policy = VisibilityPolicy::default().with_scopes(true);
    let text = render(&model, &policy).into_parts().0;

    assert!(text.contains(r#"bgcolor="green"><b>fs</b> [0]</td>"#));
    assert!(text.contains(r#"bgcolor="green">Dir::new [0..*]</td>"#));
}

#[test]
fn test_visibility_management() {
    let model = SemanticModel::from_json(FILESYSTEM).unwrap();
    let mut policy = VisibilityPolicy::default();

    // Error predicates can be hidden or shown definitely, never with unknowns.
    assert_eq!(policy.visibility(&model, "filesystem::orphan"), Visibility::Must);
    assert!(!policy.set_visibility(&model, "filesystem::orphan", Visibility::All));
    policy.cycle_visibility(&model, "filesystem::orphan");
    assert_eq!(policy.visibility(&model, "filesystem::orphan"), Visibility::None);

    policy.hide_all(&model);
    let hidden = render(&model, &policy);
    assert!(edge_lines(hidden.text()).is_empty());
    assert_eq!(hidden.line_count(), 5);

    policy.reset_filter();
    assert!(!policy.has_overrides());
    assert_eq!(render(&model, &policy), render_json(FILESYSTEM, None).unwrap());
}

#[test]
fn test_output_serializes_for_hosts() {
    let source = render_json(FAMILY, None).unwrap();
    let value = serde_json::to_value(&source).unwrap();

    assert_eq!(value["source"], source.text());
    assert_eq!(value["lineCount"], source.line_count());
}
