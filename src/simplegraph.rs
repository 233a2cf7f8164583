//!
//! The graph store used throughout this crate. A [SimpleGraph] has a fixed vertex set
//! $\{0,\ldots,n-1\}$ chosen at construction and only ever grows by edge insertion.
//! Insertion rejects everything that would make the graph non-simple:
//!
//! ```rust
//! use graphkinds::graph::*;
//! use graphkinds::simplegraph::SimpleGraph;
//!
//! let mut graph = SimpleGraph::new(3).unwrap();
//! graph.add_edge(&0, &1).unwrap();
//! assert_eq!(graph.add_edge(&1, &0), Err(GraphError::DuplicateEdge(1, 0)));
//! assert!(graph.add_edge(&2, &2).is_err());
//! assert!(graph.add_edge(&0, &3).is_err());
//! assert_eq!(graph.num_edges(), 1);
//! ```
//!
//! Neighbourhoods are kept in insertion order, so every traversal over a [SimpleGraph]
//! is deterministic. The struct also offers constructors for named graphs:
//!
//! ```rust
//! use graphkinds::graph::*;
//! use graphkinds::simplegraph::SimpleGraph;
//!
//! let graph = SimpleGraph::cycle(5).unwrap();
//! assert_eq!(graph.num_edges(), 5);
//!
//! let graph = SimpleGraph::biclique(2, 3).unwrap();
//! assert_eq!(graph.degrees(), vec![3, 3, 2, 2, 2]);
//! ```
use fxhash::FxHashSet;

use crate::graph::*;

#[derive(Debug, Clone)]
pub struct SimpleGraph {
    adj: Vec<Vec<Vertex>>,
    edges: EdgeSet,
}

impl PartialEq for SimpleGraph {
    fn eq(&self, other: &Self) -> bool {
        self.num_vertices() == other.num_vertices() && self.edges == other.edges
    }
}
impl Eq for SimpleGraph {}

impl Graph for SimpleGraph {
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn adjacent(&self, u:&Vertex, v:&Vertex) -> bool {
        self.edges.contains(&normalize(u, v))
    }

    fn degree(&self, u:&Vertex) -> u32 {
        self.adj.get(*u as usize).map_or(0, |N| N.len() as u32)
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=&Vertex> + 'a> {
        match self.adj.get(*u as usize) {
            Some(N) => Box::new(N.iter()),
            None => panic!("Vertex {u} not contained in SimpleGraph")
        }
    }
}

fn normalize(u:&Vertex, v:&Vertex) -> Edge {
    if u < v { (*u, *v) } else { (*v, *u) }
}

impl SimpleGraph {
    /// Creates an edgeless graph on the vertices $0,\ldots,n-1$. Fails if `n` is zero.
    pub fn new(n:u32) -> Result<SimpleGraph, GraphError> {
        if n == 0 {
            return Err(GraphError::InvalidArgument("vertex count must be positive".to_string()));
        }
        Ok(SimpleGraph {
            adj: vec![Vec::new(); n as usize],
            edges: FxHashSet::default(),
        })
    }

    /// Creates a graph on `n` vertices and inserts `edges` in the given order,
    /// stopping at the first invalid edge.
    pub fn from_edges<I>(n:u32, edges:I) -> Result<SimpleGraph, GraphError>
        where I: IntoIterator<Item=Edge>
    {
        let mut res = SimpleGraph::new(n)?;
        for (u, v) in edges {
            res.add_edge(&u, &v)?;
        }
        Ok(res)
    }

    /// Inserts the edge $uv$.
    ///
    /// Returns [GraphError::InvalidArgument] for self-loops and for endpoints outside
    /// the vertex range, and [GraphError::DuplicateEdge] if $uv$ is already present
    /// in either orientation. The graph is unchanged on error.
    pub fn add_edge(&mut self, u:&Vertex, v:&Vertex) -> Result<(), GraphError> {
        if u == v {
            return Err(GraphError::InvalidArgument(format!("self-loop at vertex {u}")));
        }
        for x in [u, v] {
            if !self.contains(x) {
                return Err(GraphError::InvalidArgument(
                    format!("vertex {x} outside of range [0,{})", self.num_vertices())));
            }
        }
        if !self.edges.insert(normalize(u, v)) {
            return Err(GraphError::DuplicateEdge(*u, *v));
        }
        self.adj[*u as usize].push(*v);
        self.adj[*v as usize].push(*u);
        tracing::trace!(u, v, "inserted edge");
        Ok(())
    }

    /// Generates the edgeless graph on `n` vertices.
    pub fn empty(n:u32) -> Result<SimpleGraph, GraphError> {
        SimpleGraph::new(n)
    }

    /// Generates a path on `n` vertices.
    pub fn path(n:u32) -> Result<SimpleGraph, GraphError> {
        SimpleGraph::from_edges(n, (1..n).map(|v| (v-1, v)))
    }

    /// Generates a cycle on `n` vertices. Requires $n \geq 3$.
    pub fn cycle(n:u32) -> Result<SimpleGraph, GraphError> {
        if n < 3 {
            return Err(GraphError::InvalidArgument(format!("a cycle needs at least 3 vertices, got {n}")));
        }
        SimpleGraph::from_edges(n, (0..n).map(|u| (u, (u+1) % n)))
    }

    /// Generates a star with `k` leaves, so `k+1` vertices total. Vertex $0$ is the center.
    pub fn star(k:u32) -> Result<SimpleGraph, GraphError> {
        SimpleGraph::biclique(1, k)
    }

    /// Generates a complete graph (clique) on `n` vertices.
    pub fn clique(n:u32) -> Result<SimpleGraph, GraphError> {
        let mut res = SimpleGraph::new(n)?;
        for u in 0..n {
            for v in (u+1)..n {
                res.add_edge(&u, &v)?;
            }
        }
        Ok(res)
    }

    /// Generates a complete bipartite graph (biclique) on `s`+`t` vertices. The first
    /// `s` vertices form one side.
    pub fn biclique(s:u32, t:u32) -> Result<SimpleGraph, GraphError> {
        let mut res = SimpleGraph::new(s+t)?;
        for u in 0..s {
            for v in s..(s+t) {
                res.add_edge(&u, &v)?;
            }
        }
        Ok(res)
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
