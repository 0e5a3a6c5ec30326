
use {
  rand::{rngs::StdRng, seq::SliceRandom},
  crate::{
    EntityType, Value,
    errors::GraphError as Error,
    rdf::vocab::Vocabulary,
    sampler::{Sampler, subgraph::{Subgraph, SubgraphNode}},
  },
};

type Result<T> = std::result::Result<T, Error>;

/* One hop of a walk: the source vertex, the predicate taken, and the
   object landed on (uri or literal, verbatim). Consecutive steps
   chain: each step starts where the previous one ended. */
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WalkStep {
  pub source: String,
  pub edge: String,
  pub target: Value,
}

impl<'a> Sampler<'a> {
  /* Random walk of up to `hops` triples. The first hop starts from a
     freshly sampled root subgraph; every later hop re-expands the
     previous target straight out of the store. Edges on non-final
     hops are restricted to predicates that lead somewhere
     expandable. When that leaves nothing, the first hop falls back
     to the whole edge set, so a populated root always yields at
     least one triple; later hops stop and hand back what was
     collected, as does a dead-end target. The final hop never
     filters. */
  pub fn sample_triples(&mut self, entity: EntityType, hops: usize) -> Result<Vec<WalkStep>> {
    let mut walk: Vec<WalkStep> = Vec::new();
    if hops == 0 {
      return Ok(walk)
    }
    let subgraph = self.sample_one(entity)?;
    let graph = self.graph;
    let vocab = self.vocab;
    let rng = &mut self.rng;

    /* First hop, off the sampled subgraph */
    let edges: Vec<&String> = subgraph.edges.keys().collect();
    let candidates = if hops == 1 {
      edges.clone()
    }
    else {
      filter_edges(vocab, &edges)
    };
    if candidates.is_empty() {
      // Leaf-only root: any edge keeps the walk non-empty, but there
      // is nothing left to extend
      if let Some(step) = subgraph_step(rng, &subgraph, &edges) {
        walk.push(step);
      }
      return Ok(walk)
    }
    match subgraph_step(rng, &subgraph, &candidates) {
      Some(step) => walk.push(step),
      None => return Ok(walk),
    }

    /* Later hops, off the store */
    for hop in 1..hops {
      let source = walk[walk.len() - 1].target.as_str().to_string();
      let neighbors = match graph.get(entity, &source) {
        Some(neighbors) => neighbors,
        None => return Ok(walk), // Dead ends are expected near the leaves
      };
      let edges: Vec<&String> = neighbors.keys().collect();
      let candidates = if hop == hops - 1 {
        edges
      }
      else {
        filter_edges(vocab, &edges)
      };
      let edge = match candidates.choose(rng) {
        Some(edge) => (*edge).clone(),
        None => return Ok(walk),
      };
      let target = match neighbors.get(&edge).and_then(|objects| objects.choose(rng)) {
        Some(object) => object.clone(),
        None => return Ok(walk),
      };
      walk.push(WalkStep {
        source,
        edge,
        target,
      });
    }
    Ok(walk)
  }
}

/* Utils */

fn filter_edges<'e>(vocab: &Vocabulary, edges: &[&'e String]) -> Vec<&'e String> {
  edges
    .iter()
    .filter(|edge| vocab.nonleaf_predicates.contains(edge.as_str()))
    .cloned()
    .collect()
}

fn subgraph_step(rng: &mut StdRng, subgraph: &Subgraph, candidates: &[&String]) -> Option<WalkStep> {
  let edge = candidates.choose(rng)?;
  let node = subgraph.edges.get(edge.as_str())?.choose(rng)?;
  let target = match node {
    SubgraphNode::Leaf(value) => value.clone(),
    SubgraphNode::Vertex { value, .. } => value.clone(),
  };
  Some(WalkStep {
    source: subgraph.root.clone(),
    edge: (*edge).clone(),
    target,
  })
}
