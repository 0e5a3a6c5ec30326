
use {
  std::collections::BTreeMap,
  rand::seq::index,
  serde_json::Value as Json,
  crate::{
    EntityType, Graph, Value,
    datastore::graph::Edges,
    errors::GraphError as Error,
    sampler::Sampler,
  },
};

type Result<T> = std::result::Result<T, Error>;

/* A one-hop neighborhood: the root's predicate map with every object
   that is itself an indexed vertex swapped for that vertex plus its
   own (unexpanded) edges. Everything is cloned out of the store and
   expansion stops after one level, so cycles in the underlying graph
   cannot run away and the store itself is never touched. */
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Subgraph {
  pub root: String,
  pub edges: BTreeMap<String, Vec<SubgraphNode>>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SubgraphNode {
  Leaf(Value),
  Vertex { value: Value, edges: Edges },
}

impl Subgraph {
  /* One-hop expansion of a single root. None when the root is not
     indexed under either entity type. */
  pub fn expand(graph: &Graph, entity: EntityType, root: &str) -> Option<Self> {
    let edges = graph.get(entity, root)?;
    let expanded = edges.iter().map(|(edge, objects)| {
      let nodes = objects.iter().map(|object| {
        match graph.get(entity, object.as_str()) {
          Some(neighbors) => SubgraphNode::Vertex {
            value: object.clone(),
            edges: neighbors.clone(),
          },
          None => SubgraphNode::Leaf(object.clone()),
        }
      }).collect();
      (edge.clone(), nodes)
    }).collect();
    Some(Subgraph {
      root: root.to_string(),
      edges: expanded,
    })
  }

  /* The nested-map rendering handed to the template filler:
     { root: { predicate: [ object | { vertex: { predicate: [objects] } } ] } } */
  pub fn to_json(&self) -> Json {
    let mut edges = serde_json::Map::new();
    for (edge, nodes) in &self.edges {
      let objects = nodes.iter().map(|node| match node {
        SubgraphNode::Leaf(value) => Json::String(value.as_str().to_string()),
        SubgraphNode::Vertex { value, edges } => {
          let mut neighbors = serde_json::Map::new();
          for (predicate, objects) in edges {
            neighbors.insert(
              predicate.clone(),
              Json::Array(objects.iter().map(|o| Json::String(o.as_str().to_string())).collect()),
            );
          }
          let mut vertex = serde_json::Map::new();
          vertex.insert(value.as_str().to_string(), Json::Object(neighbors));
          Json::Object(vertex)
        },
      }).collect();
      edges.insert(edge.clone(), Json::Array(objects));
    }
    let mut root = serde_json::Map::new();
    root.insert(self.root.clone(), Json::Object(edges));
    Json::Object(root)
  }
}

impl<'a> Sampler<'a> {
  /* `count` distinct roots drawn uniformly without replacement, each
     expanded one hop. Asking for more roots than the index holds is
     a hard error, not a truncation. */
  pub fn sample_vertex(&mut self, entity: EntityType, count: usize) -> Result<Vec<Subgraph>> {
    let graph = self.graph;
    let rng = &mut self.rng;
    let available = graph.vertex_count(entity);
    if available == 0 {
      return Err(Error::EmptyPopulation(entity))
    }
    if count > available {
      return Err(Error::NotEnoughVertices(count, available, entity))
    }
    let roots: Vec<&String> = graph.vertices(entity).collect();
    let subgraphs = index::sample(rng, available, count)
      .into_iter()
      .filter_map(|i| Subgraph::expand(graph, entity, roots[i]))
      .collect();
    Ok(subgraphs)
  }
  pub fn sample_one(&mut self, entity: EntityType) -> Result<Subgraph> {
    self
      .sample_vertex(entity, 1)?
      .pop()
      .ok_or(Error::EmptyPopulation(entity))
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;
  use crate::Vocabulary;

  fn scenario_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_triple(EntityType::Publication, "P1".into(), "authoredBy".into(), Value::from("C1"));
    graph.add_triple(EntityType::Publication, "P1".into(), "title".into(), Value::from("\"Paper X\""));
    graph.add_triple(EntityType::Creator, "C1".into(), "primaryFullCreatorName".into(), Value::from("Alice"));
    graph
  }

  #[test]
  fn one_hop_expansion_nests_known_vertices() {
    let graph = scenario_graph();
    let vocab = Vocabulary::default();
    let mut sampler = Sampler::new(&graph, &vocab, 7);
    let subgraph = sampler.sample_one(EntityType::Publication).unwrap();
    assert_eq!(subgraph.root, "P1");
    let mut c1_edges = Edges::new();
    c1_edges.insert("primaryFullCreatorName".into(), vec![Value::from("Alice")]);
    assert_eq!(
      subgraph.edges["authoredBy"],
      vec![SubgraphNode::Vertex {
        value: Value::from("C1"),
        edges: c1_edges,
      }]
    );
    assert_eq!(
      subgraph.edges["title"],
      vec![SubgraphNode::Leaf(Value::from("\"Paper X\""))]
    );
  }
  #[test]
  fn json_rendering_matches_the_nested_map_shape() {
    let graph = scenario_graph();
    let vocab = Vocabulary::default();
    let mut sampler = Sampler::new(&graph, &vocab, 7);
    let subgraph = sampler.sample_one(EntityType::Publication).unwrap();
    assert_eq!(
      subgraph.to_json(),
      serde_json::json!({
        "P1": {
          "authoredBy": [{"C1": {"primaryFullCreatorName": ["Alice"]}}],
          "title": ["\"Paper X\""]
        }
      })
    );
  }
  #[test]
  fn expansion_stays_single_hop_under_cycles() {
    let mut graph = Graph::new();
    graph.add_triple(EntityType::Publication, "P1".into(), "authoredBy".into(), Value::from("C1"));
    graph.add_triple(EntityType::Creator, "C1".into(), "authorOf".into(), Value::from("P1"));
    let subgraph = Subgraph::expand(&graph, EntityType::Publication, "P1").unwrap();
    // The nested creator keeps its raw edges; P1 is not re-expanded
    match &subgraph.edges["authoredBy"][0] {
      SubgraphNode::Vertex { value, edges } => {
        assert_eq!(value, &Value::from("C1"));
        assert_eq!(edges["authorOf"], vec![Value::from("P1")]);
      },
      other => panic!("expected a nested vertex, got {:?}", other),
    }
  }
  #[test]
  fn sampling_without_replacement_is_distinct() {
    let mut graph = Graph::new();
    for i in 0..5 {
      graph.add_triple(
        EntityType::Publication,
        format!("P{}", i),
        "title".into(),
        Value::from(format!("\"Paper {}\"", i)),
      );
    }
    let vocab = Vocabulary::default();
    let mut sampler = Sampler::new(&graph, &vocab, 11);
    let subgraphs = sampler.sample_vertex(EntityType::Publication, 5).unwrap();
    let mut roots: Vec<&str> = subgraphs.iter().map(|s| s.root.as_str()).collect();
    roots.sort();
    assert_eq!(roots, vec!["P0", "P1", "P2", "P3", "P4"]);
  }
  #[test]
  fn oversampling_is_a_hard_error() {
    let graph = scenario_graph();
    let vocab = Vocabulary::default();
    let mut sampler = Sampler::new(&graph, &vocab, 11);
    match sampler.sample_vertex(EntityType::Publication, 2) {
      Err(Error::NotEnoughVertices(requested, available, entity)) => {
        assert_eq!((requested, available, entity), (2, 1, EntityType::Publication));
      },
      other => panic!("expected NotEnoughVertices, got {:?}", other),
    }
  }
  #[test]
  fn sampling_an_empty_population_is_a_hard_error() {
    let graph = Graph::new();
    let vocab = Vocabulary::default();
    let mut sampler = Sampler::new(&graph, &vocab, 11);
    match sampler.sample_one(EntityType::Creator) {
      Err(Error::EmptyPopulation(entity)) => assert_eq!(entity, EntityType::Creator),
      other => panic!("expected EmptyPopulation, got {:?}", other),
    }
  }
  #[test]
  fn seeded_vertex_samples_replay() {
    let mut graph = Graph::new();
    for i in 0..50 {
      graph.add_triple(
        EntityType::Publication,
        format!("P{}", i),
        "title".into(),
        Value::from(format!("\"Paper {}\"", i)),
      );
    }
    let vocab = Vocabulary::default();
    let mut first = Sampler::new(&graph, &vocab, 2358);
    let mut second = Sampler::new(&graph, &vocab, 2358);
    for _ in 0..5 {
      assert_eq!(
        first.sample_vertex(EntityType::Publication, 3).unwrap(),
        second.sample_vertex(EntityType::Publication, 3).unwrap()
      );
    }
  }
}
