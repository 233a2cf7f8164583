//! Runs every recogniser from [crate::predicates] over a graph and collects all families
//! the graph belongs to.
//!
//! ```rust
//! use graphkinds::classify::classify;
//! use graphkinds::predicates::GraphKind;
//! use graphkinds::simplegraph::SimpleGraph;
//!
//! let graph = SimpleGraph::star(3).unwrap();
//! let res = classify(&graph);
//! assert_eq!(res.labels(), vec!["bipartite", "complete bipartite K1,3", "star S3"]);
//! assert!(res.contains(&GraphKind::Star(3)));
//! assert_eq!(res.details.keys(), vec!["bipartition", "complete_bipartite"]);
//! ```
use crate::algorithms::GraphAlgorithms;
use crate::graph::*;
use crate::predicates::{self, Bipartition, GraphKind, PartSizes};

/// Structured parameters of the families that carry any. An entry is present only
/// if the corresponding family matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details {
    pub bipartition: Option<Bipartition>,
    pub complete_bipartite: Option<PartSizes>,
}

impl Details {
    /// Names of the entries that are present.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut res = Vec::new();
        if self.bipartition.is_some() {
            res.push("bipartition");
        }
        if self.complete_bipartite.is_some() {
            res.push("complete_bipartite");
        }
        res
    }

    pub fn is_empty(&self) -> bool {
        self.bipartition.is_none() && self.complete_bipartite.is_none()
    }
}

/// Outcome of [classify].
///
/// `kinds` lists the matched families in a fixed order: empty, complete, cycle,
/// bipartite, complete bipartite, star. If nothing matched it consists of
/// [GraphKind::Unclassified] alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kinds: Vec<GraphKind>,
    pub details: Details,
}

impl Classification {
    pub fn labels(&self) -> Vec<String> {
        self.kinds.iter().map(|kind| kind.to_string()).collect()
    }

    pub fn contains(&self, kind:&GraphKind) -> bool {
        self.kinds.contains(kind)
    }

    pub fn is_unclassified(&self) -> bool {
        self.kinds == [GraphKind::Unclassified]
    }
}

/// Classifies `graph` against all known families. The graph is only read, and the
/// result depends on nothing but its vertex count and the order of its neighbourhoods.
pub fn classify<G>(graph:&G) -> Classification where G: Graph {
    let mut kinds = Vec::new();
    let mut details = Details::default();

    kinds.extend(predicates::empty(graph));
    kinds.extend(predicates::complete(graph));
    kinds.extend(predicates::cycle(graph));

    // The colouring is shared by both bipartite recognisers
    let colouring = graph.two_color();
    if let Some((kind, bipartition)) = predicates::bipartite(colouring.as_ref()) {
        kinds.push(kind);
        if let Some((kind, sizes)) = predicates::complete_bipartite(graph, &bipartition) {
            kinds.push(kind);
            details.complete_bipartite = Some(sizes);
        }
        details.bipartition = Some(bipartition);
    }

    kinds.extend(predicates::star(graph));

    if kinds.is_empty() {
        kinds.push(GraphKind::Unclassified);
    }

    tracing::debug!(n = graph.num_vertices(), m = graph.num_edges(), ?kinds, "classified graph");
    Classification { kinds, details }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
