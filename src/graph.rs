//! Basic vocabulary shared by all modules: vertex and edge types, the read-only
//! [Graph] trait and the errors raised while a graph is being built.
use fxhash::FxHashSet;
use thiserror::Error;

pub type Vertex = u32;
pub type Edge = (Vertex, Vertex);
pub type VertexSet = FxHashSet<Vertex>;
pub type EdgeSet = FxHashSet<Edge>;

/// Errors raised while constructing or mutating a graph. Both signal malformed
/// input; they are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("duplicate edge {{{0},{1}}}")]
    DuplicateEdge(Vertex, Vertex),
}

/// Read access to an undirected simple graph whose vertices are exactly $0,\ldots,n-1$.
///
/// Implementors must report neighbours in a fixed order (the traversal primitives
/// rely on it for deterministic output).
pub trait Graph {
    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;

    fn contains(&self, u:&Vertex) -> bool {
        (*u as usize) < self.num_vertices()
    }

    fn adjacent(&self, u:&Vertex, v:&Vertex) -> bool;
    fn degree(&self, u:&Vertex) -> u32;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=Vertex> + 'a> {
        Box::new(0..self.num_vertices() as Vertex)
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=&Vertex> + 'a>;

    /// Degree sequence indexed by vertex.
    fn degrees(&self) -> Vec<u32> {
        self.vertices().map(|v| self.degree(&v)).collect()
    }
}
