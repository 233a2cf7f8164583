//! Plain text reports for classified graphs.
use std::fmt::Display;

use itertools::Itertools;

use crate::classify::Classification;
use crate::graph::*;

fn list<T: Display>(items:&[T]) -> String {
    format!("[{}]", items.iter().join(", "))
}

/// Renders the classification of the graph read from `name`.
pub fn format_report<G>(name:&str, graph:&G, res:&Classification) -> String where G: Graph {
    let mut lines = vec![
        format!("File: {name}"),
        format!("Vertices: n = {}", graph.num_vertices()),
        format!("Edges:   m = {}", graph.num_edges()),
        format!("Degrees: {}", list(&graph.degrees())),
        String::new(),
        "Graph kinds (several may apply):".to_string(),
    ];

    lines.extend(res.kinds.iter().map(|kind| format!("  • {kind}")));

    if let Some(sizes) = &res.details.complete_bipartite {
        lines.push(format!("    (m = {}, n = {})", sizes.m, sizes.n));
    }
    if let Some(bip) = &res.details.bipartition {
        lines.push(format!("  Bipartition: A={}, B={}", list(&bip.a), list(&bip.b)));
    }

    lines.join("\n") + "\n"
}

/// Renders a report for an input that could not be processed.
pub fn format_error(name:&str, err:&dyn Display) -> String {
    format!("File: {name}\nError: {err}\n")
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
