use crate::graph::*;

/// Neighbourhood iterator for graphs. At each step, the iterator
/// returns a pair $(v,N(v))$, vertices in increasing order.
pub struct NeighIterator<'a, G> where G: Graph {
    graph: &'a G,
    v_it: Box<dyn Iterator<Item=Vertex> + 'a>,
}

impl<'a, G> NeighIterator<'a, G> where G: Graph {
    pub fn new(graph: &'a G) -> NeighIterator<'a, G> {
        NeighIterator { graph, v_it: graph.vertices() }
    }
}

impl<'a, G> Iterator for NeighIterator<'a, G> where G: Graph {
    type Item = (Vertex, Box<dyn Iterator<Item=&'a Vertex> + 'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.v_it.next()?;
        let graph = self.graph;
        let N = graph.neighbours(&v);

        Some((v, N))
    }
}

/// Allows construction of a [NeighIterator].
pub trait NeighIterable<G> where G: Graph {
    fn neighbourhoods(&self) -> NeighIterator<G>;
}

impl<G> NeighIterable<G> for G where G: Graph {
    fn neighbourhoods(&self) -> NeighIterator<G> {
        NeighIterator::new(self)
    }
}

/// Edge iterator for graphs. Every edge $uv$ is returned exactly once as
/// the pair $(u,v)$ with $u < v$, ordered by $u$ and then by the neighbourhood
/// order of $u$.
pub struct EdgeIterator<'a, G> where G: Graph {
    N_it: NeighIterator<'a, G>,
    curr: Option<(Vertex, Box<dyn Iterator<Item=&'a Vertex> + 'a>)>,
}

impl<'a, G> EdgeIterator<'a, G> where G: Graph {
    pub fn new(graph: &'a G) -> EdgeIterator<'a, G> {
        let mut N_it = NeighIterator::new(graph);
        let curr = N_it.next();
        EdgeIterator { N_it, curr }
    }
}

impl<'a, G> Iterator for EdgeIterator<'a, G> where G: Graph {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (v, it) = self.curr.as_mut()?;
            if let Some(u) = it.next() {
                // Tie-breaking so we only return every edge once
                if *v < *u {
                    return Some((*v, *u));
                }
            } else {
                self.curr = self.N_it.next();
            }
        }
    }
}

/// Allows construction of an [EdgeIterator].
pub trait EdgeIterable<G> where G: Graph {
    fn edges(&self) -> EdgeIterator<G>;
}

impl<G> EdgeIterable<G> for G where G: Graph {
    fn edges(&self) -> EdgeIterator<G> {
        EdgeIterator::new(self)
    }
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
    use crate::simplegraph::SimpleGraph;

    #[test]
    fn edge_iteration() {
        let G = SimpleGraph::from_edges(4, vec![(2,3), (1,0), (0,3)]).unwrap();
        let edges:Vec<Edge> = G.edges().collect();
        assert_eq!(edges, vec![(0,1), (0,3), (2,3)]);

        let G = SimpleGraph::clique(6).unwrap();
        assert_eq!(G.edges().count(), 15);
        assert_eq!(G.edges().collect::<EdgeSet>().len(), 15);

        let G = SimpleGraph::empty(3).unwrap();
        assert_eq!(G.edges().count(), 0);
    }

    #[test]
    fn N_iteration() {
        let G = SimpleGraph::star(5).unwrap();

        for (v, N) in G.neighbourhoods() {
            if v == 0 {
                assert_eq!(N.cloned().collect::<VertexSet>(), [1,2,3,4,5].iter().cloned().collect());
            } else {
                assert_eq!(N.cloned().collect::<Vec<_>>(), vec![0]);
            }
        }
        assert_eq!(G.neighbourhoods().count(), 6);
    }
}
