//! Traversal primitives. Every traversal here is a breadth-first search driven by an
//! explicit FIFO queue; nothing recurses, so arbitrarily long paths are fine.
//!
//! Traversals are deterministic: new search roots are picked in increasing vertex
//! order and neighbours are visited in the order the graph reports them.
use std::collections::VecDeque;

use crate::graph::*;

/// One of the two colours of a [TwoColouring].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Zero,
    One,
}

impl Colour {
    pub fn other(self) -> Colour {
        match self {
            Colour::Zero => Colour::One,
            Colour::One => Colour::Zero,
        }
    }
}

/// A proper 2-colouring, stored as one colour per vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoColouring {
    colours: Vec<Colour>,
}

impl TwoColouring {
    pub fn colour(&self, u:&Vertex) -> Colour {
        self.colours[*u as usize]
    }

    /// Returns all vertices of colour `c` in increasing order.
    pub fn class(&self, c:Colour) -> Vec<Vertex> {
        self.colours.iter()
            .enumerate()
            .filter(|(_, x)| **x == c)
            .map(|(v, _)| v as Vertex)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

pub trait GraphAlgorithms {
    /// Returns the vertices reachable from `root` in the order a breadth-first
    /// search discovers them.
    fn bfs(&self, root:&Vertex) -> Vec<Vertex>;

    /// Returns `true` iff a search from vertex $0$ reaches every vertex.
    /// Graphs without vertices count as connected.
    fn is_connected(&self) -> bool;

    /// Returns the connected components in the order they are discovered,
    /// each listing its vertices in search order.
    fn components(&self) -> Vec<Vec<Vertex>>;

    /// Attempts to properly colour the graph with two colours. Each component is
    /// seeded at its smallest vertex with [Colour::Zero].
    ///
    /// Returns `None` as soon as an edge with equally coloured endpoints is found.
    fn two_color(&self) -> Option<TwoColouring>;
}

impl<G> GraphAlgorithms for G where G: Graph {
    fn bfs(&self, root:&Vertex) -> Vec<Vertex> {
        let mut seen = vec![false; self.num_vertices()];
        bfs_from(self, root, &mut seen)
    }

    fn is_connected(&self) -> bool {
        let n = self.num_vertices();
        if n == 0 {
            return true;
        }
        self.bfs(&0).len() == n
    }

    fn components(&self) -> Vec<Vec<Vertex>> {
        let mut seen = vec![false; self.num_vertices()];
        let mut res = Vec::new();
        for v in self.vertices() {
            if !seen[v as usize] {
                res.push(bfs_from(self, &v, &mut seen));
            }
        }
        res
    }

    fn two_color(&self) -> Option<TwoColouring> {
        let mut colours:Vec<Option<Colour>> = vec![None; self.num_vertices()];
        let mut queue = VecDeque::new();

        for s in self.vertices() {
            if colours[s as usize].is_some() {
                continue;
            }
            colours[s as usize] = Some(Colour::Zero);
            queue.push_back((s, Colour::Zero));

            while let Some((u, c)) = queue.pop_front() {
                for v in self.neighbours(&u) {
                    match colours[*v as usize] {
                        None => {
                            colours[*v as usize] = Some(c.other());
                            queue.push_back((*v, c.other()));
                        }
                        Some(cv) if cv == c => {
                            tracing::trace!(u, v, "colour conflict");
                            return None;
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        // Every vertex was a root or got reached from one.
        let colours = colours.into_iter().collect::<Option<Vec<_>>>()?;
        Some(TwoColouring { colours })
    }
}

/// Breadth-first search from `root` that skips and marks vertices in `seen`.
fn bfs_from<G>(graph:&G, root:&Vertex, seen:&mut [bool]) -> Vec<Vertex> where G: Graph {
    let mut order = Vec::new();
    let mut queue = VecDeque::new();
    seen[*root as usize] = true;
    queue.push_back(*root);

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for v in graph.neighbours(&u) {
            if !seen[*v as usize] {
                seen[*v as usize] = true;
                queue.push_back(*v);
            }
        }
    }
    order
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use crate::iterators::EdgeIterable;
    use crate::simplegraph::SimpleGraph;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    #[test]
    fn bfs_order() {
        let G = SimpleGraph::from_edges(6, vec![(0,2), (0,1), (1,3), (2,4), (4,5)]).unwrap();
        assert_eq!(G.bfs(&0), vec![0, 2, 1, 4, 3, 5]);
        assert_eq!(G.bfs(&5), vec![5, 4, 2, 0, 1, 3]);
    }

    #[test]
    fn connectivity() {
        assert!(SimpleGraph::new(1).unwrap().is_connected());
        assert!(SimpleGraph::path(10).unwrap().is_connected());
        assert!(SimpleGraph::cycle(7).unwrap().is_connected());
        assert!(!SimpleGraph::empty(2).unwrap().is_connected());

        // Two triangles
        let G = SimpleGraph::from_edges(6, vec![(0,1), (1,2), (2,0), (3,4), (4,5), (5,3)]).unwrap();
        assert!(!G.is_connected());
    }

    #[test]
    fn long_path() {
        // Deep enough to overflow the stack of a recursive search
        let G = SimpleGraph::path(200_000).unwrap();
        assert!(G.is_connected());
        assert!(G.two_color().is_some());
    }

    #[test]
    fn components() {
        let G = SimpleGraph::from_edges(7, vec![(5,6), (0,3), (3,1)]).unwrap();
        assert_eq!(G.components(), vec![vec![0, 3, 1], vec![2], vec![4], vec![5, 6]]);

        let G = SimpleGraph::clique(5).unwrap();
        assert_eq!(G.components().len(), 1);
    }

    #[test]
    fn two_colour_even_cycle() {
        let G = SimpleGraph::cycle(6).unwrap();
        let col = G.two_color().unwrap();
        assert_eq!(col.class(Colour::Zero), vec![0, 2, 4]);
        assert_eq!(col.class(Colour::One), vec![1, 3, 5]);
    }

    #[test]
    fn two_colour_odd_cycle() {
        assert!(SimpleGraph::cycle(5).unwrap().two_color().is_none());
        assert!(SimpleGraph::clique(3).unwrap().two_color().is_none());
    }

    #[test]
    fn two_colour_disconnected() {
        // Isolated vertex, an edge and a path; every component is seeded with colour zero.
        let G = SimpleGraph::from_edges(6, vec![(1,2), (3,4), (4,5)]).unwrap();
        let col = G.two_color().unwrap();
        assert_eq!(col.len(), 6);
        assert_eq!(col.class(Colour::Zero), vec![0, 1, 3, 5]);
        assert_eq!(col.class(Colour::One), vec![2, 4]);

        // A conflict in a later component is still detected
        let G = SimpleGraph::from_edges(5, vec![(0,1), (2,3), (3,4), (4,2)]).unwrap();
        assert!(G.two_color().is_none());
    }

    #[test]
    fn two_colour_random_bipartite() {
        let mut rng = ChaChaRng::seed_from_u64(42);
        for _ in 0..50 {
            let n:u32 = rng.gen_range(1..40);
            let split = rng.gen_range(0..=n);
            let mut G = SimpleGraph::new(n).unwrap();
            for u in 0..split {
                for v in split..n {
                    if rng.gen_bool(0.2) {
                        G.add_edge(&u, &v).unwrap();
                    }
                }
            }

            let col = G.two_color().expect("Graph with fixed split must be bipartite");
            for (u, v) in G.edges() {
                assert_ne!(col.colour(&u), col.colour(&v));
            }
        }
    }

    #[test]
    fn two_colour_random_graphs() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        for _ in 0..50 {
            let n:u32 = rng.gen_range(1..30);
            let mut G = SimpleGraph::new(n).unwrap();
            for u in 0..n {
                for v in (u+1)..n {
                    if rng.gen_bool(0.1) {
                        G.add_edge(&u, &v).unwrap();
                    }
                }
            }

            if let Some(col) = G.two_color() {
                let zero = col.class(Colour::Zero);
                let one = col.class(Colour::One);
                assert_eq!(zero.len() + one.len(), n as usize);
                for (u, v) in G.edges() {
                    assert_ne!(col.colour(&u), col.colour(&v));
                }
            }
        }
    }
}
