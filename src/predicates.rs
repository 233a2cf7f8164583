//! Recognisers for the graph families this crate knows about. Each function only reads
//! the graph and decides a single family independently of all others, so a graph can
//! match several families at once.
//!
//! ```rust
//! use graphkinds::predicates::*;
//! use graphkinds::simplegraph::SimpleGraph;
//!
//! let graph = SimpleGraph::cycle(4).unwrap();
//! assert_eq!(cycle(&graph), Some(GraphKind::Cycle(4)));
//! assert_eq!(complete(&graph), None);
//! ```
use std::fmt;

use crate::algorithms::{Colour, GraphAlgorithms, TwoColouring};
use crate::graph::*;

/// A graph family together with its parameters. The [Display](fmt::Display)
/// implementation produces the human-readable label, e.g. `cycle C5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// Edgeless graph on $n$ vertices.
    Empty(usize),
    /// Complete graph $K_n$.
    Complete(usize),
    /// Cycle $C_n$.
    Cycle(usize),
    Bipartite,
    /// Complete bipartite graph $K_{m,n}$ with the part sizes in bipartition order.
    CompleteBipartite(usize, usize),
    /// Star $S_k$ with $k$ leaves.
    Star(usize),
    /// Placeholder used when no family matches.
    Unclassified,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Empty(n) => write!(f, "empty K{n}"),
            GraphKind::Complete(n) => write!(f, "complete K{n}"),
            GraphKind::Cycle(n) => write!(f, "cycle C{n}"),
            GraphKind::Bipartite => write!(f, "bipartite"),
            GraphKind::CompleteBipartite(m, n) => write!(f, "complete bipartite K{m},{n}"),
            GraphKind::Star(k) => write!(f, "star S{k}"),
            GraphKind::Unclassified => write!(f, "none of the listed"),
        }
    }
}

/// The two colour classes of a proper 2-colouring, each sorted increasingly.
/// Side `a` holds the vertices of [Colour::Zero] and thus always contains vertex $0$.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartition {
    pub a: Vec<Vertex>,
    pub b: Vec<Vertex>,
}

impl From<&TwoColouring> for Bipartition {
    fn from(colouring: &TwoColouring) -> Self {
        Bipartition {
            a: colouring.class(Colour::Zero),
            b: colouring.class(Colour::One),
        }
    }
}

/// Part sizes of a complete bipartite graph: `m` is the size of side `a`
/// of the underlying [Bipartition], `n` the size of side `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSizes {
    pub m: usize,
    pub n: usize,
}

pub fn empty<G>(graph:&G) -> Option<GraphKind> where G: Graph {
    (graph.num_edges() == 0).then(|| GraphKind::Empty(graph.num_vertices()))
}

pub fn complete<G>(graph:&G) -> Option<GraphKind> where G: Graph {
    let n = graph.num_vertices();
    let d = n.saturating_sub(1);
    if graph.num_edges() != n * d / 2 {
        return None;
    }
    graph.vertices()
        .all(|v| graph.degree(&v) as usize == d)
        .then(|| GraphKind::Complete(n))
}

/// Recognises $C_n$: at least three vertices, all of degree two, connected.
pub fn cycle<G>(graph:&G) -> Option<GraphKind> where G: Graph {
    let n = graph.num_vertices();
    if n < 3 || graph.num_edges() != n {
        return None;
    }
    if !graph.vertices().all(|v| graph.degree(&v) == 2) {
        return None;
    }
    graph.is_connected().then(|| GraphKind::Cycle(n))
}

/// Turns the result of [GraphAlgorithms::two_color] into a verdict.
pub fn bipartite(colouring:Option<&TwoColouring>) -> Option<(GraphKind, Bipartition)> {
    colouring.map(|col| (GraphKind::Bipartite, Bipartition::from(col)))
}

/// Checks whether every vertex of one side is adjacent to every vertex of the other.
///
/// Sides may be empty: a graph whose bipartition has an empty side is accepted
/// as the degenerate $K_{m,0}$.
pub fn complete_bipartite<G>(graph:&G, bipartition:&Bipartition) -> Option<(GraphKind, PartSizes)>
    where G: Graph
{
    let m = bipartition.a.len();
    let n = bipartition.b.len();
    if graph.num_edges() != m * n {
        return None;
    }
    let full = bipartition.a.iter().all(|v| graph.degree(v) as usize == n)
            && bipartition.b.iter().all(|v| graph.degree(v) as usize == m);

    full.then(|| (GraphKind::CompleteBipartite(m, n), PartSizes { m, n }))
}

/// Recognises the star $S_k$, $k = n-1$: one center adjacent to everything, all
/// other vertices leaves. The single vertex is $S_0$ and a single edge is $S_1$.
pub fn star<G>(graph:&G) -> Option<GraphKind> where G: Graph {
    let n = graph.num_vertices();
    if n == 0 || graph.num_edges() != n - 1 {
        return None;
    }
    let k = n - 1;
    let center = graph.vertices().find(|v| graph.degree(v) as usize == k)?;
    graph.vertices()
        .filter(|v| *v != center)
        .all(|v| graph.degree(&v) == 1)
        .then(|| GraphKind::Star(k))
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
