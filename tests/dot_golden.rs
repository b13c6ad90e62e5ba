// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dotgen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dotgen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use rstest::rstest;

use dotgen::model::{
    ArrowType, AttrError, AttrValue, Attributed, Body, EdgeDir, EdgeOp, EdgeOpMismatch, Graph,
    Rank, RankDir, Shape, Style,
};

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

#[test]
fn single_edge_digraph() {
    let graph = Graph::digraph().build(|g| {
        g.edge("a", "b");
    });
    assert_eq!(graph.to_dot(), "digraph {\n  a -> b\n}\n");
}

#[test]
fn node_with_color_attribute() {
    let graph = Graph::digraph()
        .try_build(|g| {
            g.node("a").set("color", "blue")?;
            Ok::<(), AttrError>(())
        })
        .expect("build");
    assert_eq!(graph.to_dot(), "digraph {\n  a[color=\"blue\"]\n}\n");
}

#[test]
fn same_rank_subgraph_in_undirected_graph() {
    let graph = Graph::undirected()
        .try_build(|g| {
            g.try_subgraph(None, |sg| {
                sg.set("rank", Rank::Same)?;
                sg.node("A1");
                sg.node("A2");
                sg.node("A3");
                Ok::<(), AttrError>(())
            })?;
            Ok::<(), AttrError>(())
        })
        .expect("build");

    let expected = concat!(
        "graph {\n",
        "  subgraph {\n",
        "  rank=same\n",
        "    A1\n",
        "    A2\n",
        "    A3\n",
        "  }\n",
        "}\n",
    );
    assert_eq!(graph.to_dot(), expected);
}

#[test]
fn empty_node_defaults_block() {
    let graph = Graph::digraph().build(|g| {
        g.node_defaults();
    });
    assert_eq!(graph.to_dot(), "digraph {\n  node[]\n}\n");
}

#[test]
fn floating_subgraph_is_emitted_once_per_edge() {
    let graph = Graph::digraph().build(|g| {
        let sinks = g.floating_subgraph(None, |sg| {
            sg.node("x");
            sg.node("y");
        });
        g.edge("a", &sinks);
        g.edge("b", &sinks);
    });

    let expected = concat!(
        "digraph {\n",
        "  a -> subgraph {\n",
        "    x\n",
        "    y\n",
        "  }\n",
        "  b -> subgraph {\n",
        "    x\n",
        "    y\n",
        "  }\n",
        "}\n",
    );
    assert_eq!(graph.to_dot(), expected);
}

#[test]
fn appended_subgraph_also_prints_at_each_edge() {
    let graph = Graph::undirected().build(|g| {
        let group = g.subgraph(Some("group"), |sg| {
            sg.node("x");
        });
        g.edge(&group, "z");
    });

    let expected = concat!(
        "graph {\n",
        "  subgraph group {\n",
        "    x\n",
        "  }\n",
        "  subgraph group {\n",
        "    x\n",
        "  } -- z\n",
        "}\n",
    );
    assert_eq!(graph.to_dot(), expected);
}

#[test]
fn subgraph_to_subgraph_edge() {
    let graph = Graph::digraph().build(|g| {
        let left = g.floating_subgraph(None, |sg| {
            sg.node("a");
        });
        let right = g.floating_subgraph(None, |sg| {
            sg.node("b");
        });
        g.edge(left, right);
    });
    assert_eq!(
        graph.to_dot(),
        "digraph {\n  subgraph {\n    a\n  } -> subgraph {\n    b\n  }\n}\n"
    );
}

#[test]
fn unused_floating_subgraph_is_dropped() {
    let graph = Graph::digraph().build(|g| {
        let _unused = g.floating_subgraph(Some("ghost"), |sg| {
            sg.node("never");
        });
        g.node("a");
    });
    assert_eq!(graph.to_dot(), "digraph {\n  a\n}\n");
}

fn sample() -> Graph {
    Graph::digraph()
        .with_name("pipeline")
        .try_build(|g| {
            g.set("rankdir", RankDir::LeftRight)?;
            g.node_defaults().set("shape", Shape::Box)?.set("style", Style::Filled)?;
            g.edge_defaults().set("arrowhead", ArrowType::Vee)?;
            g.try_cluster("ingest", |c| {
                c.set("label", "Ingest")?;
                c.edge("read", "parse");
                Ok::<(), AttrError>(())
            })?;
            g.edge("parse", "store").set("dir", EdgeDir::Both)?;
            Ok::<(), AttrError>(())
        })
        .expect("sample graph")
}

#[test]
fn realistic_graph_golden() {
    let expected = concat!(
        "digraph pipeline {\n",
        "rankdir=LR\n",
        "\n",
        "  node[shape=box,style=filled]\n",
        "  edge[arrowhead=vee]\n",
        "  subgraph cluster_ingest {\n",
        "  label=\"Ingest\"\n",
        "    read -> parse\n",
        "  }\n",
        "  parse -> store[dir=both]\n",
        "}\n",
    );
    assert_eq!(sample().to_dot(), expected);
}

#[test]
fn serialization_is_deterministic() {
    let graph = sample();
    assert_eq!(graph.to_dot(), graph.to_dot());

    let mut streamed = String::new();
    graph.write_dot(&mut streamed).expect("write to string");
    assert_eq!(streamed, graph.to_dot());
}

fn nest(body: &mut Body, depth: usize) {
    if depth == 0 {
        body.edge("leaf_a", "leaf_b");
        return;
    }
    body.edge(format!("n{depth}"), format!("m{depth}"));
    let name = format!("level{depth}");
    body.subgraph(Some(name.as_str()), |sg| nest(sg, depth - 1));
}

#[rstest]
#[case(true, "->", "--")]
#[case(false, "--", "->")]
fn operator_is_consistent_at_every_depth(
    #[case] directed: bool,
    #[case] op: &str,
    #[case] other: &str,
) {
    let dot = Graph::new(directed).build(|g| nest(g, 4)).to_dot();
    let edges: Vec<&str> = dot.lines().filter(|line| line.contains(op)).collect();
    assert_eq!(edges.len(), 5);
    assert!(!dot.contains(other));
}

#[test]
fn indentation_grows_one_level_per_subgraph() {
    let dot = Graph::digraph().build(|g| nest(g, 3)).to_dot();
    let lines: Vec<&str> = dot.lines().collect();

    for (index, line) in lines.iter().enumerate() {
        if line.trim_start().starts_with("subgraph ") {
            let header = leading_spaces(line);
            let first_child = lines[index + 1];
            assert_eq!(leading_spaces(first_child), header + 2, "line: {first_child:?}");
        }
    }
    let leaf = lines.iter().find(|line| line.contains("leaf_a")).expect("leaf edge");
    assert_eq!(leading_spaces(leaf), 8);
}

#[test]
fn statement_order_is_preserved() {
    let names: Vec<String> = (0..20).map(|i| format!("n{}", (i * 7) % 20)).collect();
    let graph = Graph::undirected().build(|g| {
        for name in &names {
            g.node(name.as_str());
        }
    });
    let dot = graph.to_dot();
    let rendered: Vec<&str> = dot.lines().skip(1).take(names.len()).map(str::trim).collect();
    assert_eq!(rendered, names);
}

#[test]
fn strings_are_quoted_once_and_other_values_never() {
    let graph = Graph::digraph()
        .try_build(|g| {
            g.node("a")
                .set("label", "A node")?
                .set("width", 1.25)?
                .set("peripheries", 2)?
                .set("fixedsize", true)?
                .set("shape", Shape::Circle)?;
            Ok::<(), AttrError>(())
        })
        .expect("build");
    assert_eq!(
        graph.to_dot(),
        "digraph {\n  a[label=\"A node\",width=1.25,peripheries=2,fixedsize=true,shape=circle]\n}\n"
    );
}

#[test]
fn statements_without_attributes_have_no_brackets() {
    let graph = Graph::digraph().build(|g| {
        g.node("a");
        g.edge("a", "b");
    });
    assert!(!graph.to_dot().contains('['));
}

#[test]
fn ids_ending_in_a_backslash_stay_terminated() {
    let graph = Graph::digraph().build(|g| {
        g.edge("b\\", "C:\\dir");
    });
    assert_eq!(graph.to_dot(), "digraph {\n  \"b\\\\\" -> \"C:\\dir\"\n}\n");
}

#[test]
fn values_that_would_leave_a_string_open_are_rejected() {
    let mut graph = Graph::digraph();
    let node = graph.body_mut().node("a");
    assert_eq!(
        node.set("label", "C:\\dir\\").map(|_| ()),
        Err(AttrError::TrailingBackslash {
            name: "label".to_owned(),
        })
    );
    assert_eq!(
        node.set("label", AttrValue::html("a>b")).map(|_| ()),
        Err(AttrError::UnbalancedHtml {
            name: "label".to_owned(),
        })
    );
    node.set("label", "C:\\dir\\\\").expect("escaped backslash");
    assert_eq!(graph.to_dot(), "digraph {\n  a[label=\"C:\\dir\\\\\"]\n}\n");
}

#[test]
fn endpoint_subgraphs_must_share_the_graph_operator() {
    let directed = Graph::digraph().build(|g| {
        g.edge("x", "y");
    });
    let foreign = directed.body().floating_subgraph(None, |sg| {
        sg.edge("x", "y");
    });

    let mut graph = Graph::undirected();
    let err = graph
        .body_mut()
        .try_edge("a", &foreign)
        .map(|_| ())
        .expect_err("operator mismatch");
    assert_eq!(
        err,
        EdgeOpMismatch {
            expected: EdgeOp::Undirected,
            found: EdgeOp::Directed,
        }
    );
    assert_eq!(err.to_string(), "edge endpoint subgraph uses `->` but this graph uses `--`");
    assert!(graph.body().is_empty());
}

#[test]
#[should_panic(expected = "edge endpoint subgraph uses `->`")]
fn edge_panics_on_a_foreign_operator() {
    let foreign = Graph::digraph().body().floating_subgraph(None, |sg| {
        sg.node("x");
    });
    Graph::undirected().build(|g| {
        g.edge(&foreign, "a");
    });
}

#[test]
fn unknown_attributes_go_through_set_raw() {
    let graph = Graph::undirected()
        .try_build(|g| {
            g.set_raw("overlap", false)?;
            g.node("a").set_raw("pos", "1,2!")?;
            g.edge("a", "b").set_raw("arrowhead", AttrValue::Token("onormal".into()))?;
            Ok::<(), AttrError>(())
        })
        .expect("build");
    assert_eq!(
        graph.to_dot(),
        "graph {\noverlap=false\n\n  a[pos=\"1,2!\"]\n  a -- b[arrowhead=onormal]\n}\n"
    );
}

// Collects lines as they stream in.
#[derive(Default)]
struct Lines {
    done: Vec<String>,
    open: String,
}

impl fmt::Write for Lines {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if ch == '\n' {
                self.done.push(std::mem::take(&mut self.open));
            } else {
                self.open.push(ch);
            }
        }
        Ok(())
    }
}

#[test]
fn write_dot_streams_into_any_writer() {
    let mut lines = Lines::default();
    sample().write_dot(&mut lines).expect("stream");
    assert!(lines.open.is_empty());
    assert_eq!(lines.done.first().map(String::as_str), Some("digraph pipeline {"));
    assert_eq!(lines.done.len(), sample().to_dot().lines().count());
    assert_eq!(lines.done.join("\n") + "\n", sample().to_dot());
}
