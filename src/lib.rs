#![allow(non_snake_case)]

//! Classifies undirected simple graphs against a small taxonomy of textbook families:
//! empty, complete, cycle, bipartite, complete bipartite and star. A graph is tested
//! against every family, so all families it belongs to are reported together.
//!
//! ```rust
//! use graphkinds::graph::*;
//! use graphkinds::simplegraph::SimpleGraph;
//! use graphkinds::classify::classify;
//!
//! let mut graph = SimpleGraph::new(4).unwrap();
//! graph.add_edge(&0, &1).unwrap();
//! graph.add_edge(&1, &2).unwrap();
//! graph.add_edge(&2, &3).unwrap();
//! graph.add_edge(&3, &0).unwrap();
//!
//! let res = classify(&graph);
//! assert_eq!(res.labels(), vec!["cycle C4", "bipartite", "complete bipartite K2,2"]);
//! ```
//!
//! All traversals are breadth-first searches with an explicit queue and run in
//! $O(n+m)$ time. Graphs can be read from text files with [io::LoadFromFile] and
//! results rendered with [report::format_report].

pub mod graph;
pub mod simplegraph;
pub mod iterators;
pub mod algorithms;
pub mod predicates;
pub mod classify;
pub mod io;
pub mod report;
