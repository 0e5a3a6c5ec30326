/* Exports */

pub mod subgraph;
pub mod walk;

use {
  rand::{SeedableRng, rngs::StdRng},
  crate::{Graph, rdf::vocab::Vocabulary},
};

/* Draws subgraphs and walks from an immutable, fully loaded Graph.
   Every random decision (root vertices, edges, objects) flows through
   the one seeded rng, so a fixed seed over identical graph contents
   replays the exact same sample sequence across runs. */
pub struct Sampler<'a> {
  graph: &'a Graph,
  vocab: &'a Vocabulary,
  rng: StdRng,
}

impl<'a> Sampler<'a> {
  pub fn new(graph: &'a Graph, vocab: &'a Vocabulary, seed: u64) -> Self {
    Sampler {
      graph,
      vocab,
      rng: StdRng::seed_from_u64(seed),
    }
  }
}
