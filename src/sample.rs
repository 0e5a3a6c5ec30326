
use {
  crate::{
    EntityType,
    datastore::graph::Edges,
    errors::GraphError,
    rdf::vocab::dblp_schema,
    sampler::{Sampler, subgraph::{Subgraph, SubgraphNode}},
  },
};

type Result<T> = std::result::Result<T, GraphError>;

/* One author record pulled out of a publication's authoredBy edge */
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Author {
  pub uri: String,
  pub name: String,
  pub affiliation: String,
}

/* Read-only projection of a sampled publication into the fields the
   question templates slot in. Extraction never fails: missing pieces
   come back empty and is_valid decides whether the caller keeps the
   sample or draws again. */
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sample {
  pub uri: String,
  pub title: String,
  pub bibtex_type: String,
  pub authors: Vec<Author>,
  pub year: String,
  pub venue: String,
}

impl Sample {
  pub fn from_subgraph(subgraph: &Subgraph) -> Self {
    Sample {
      uri: subgraph.root.clone(),
      title: first_value(subgraph, "title").replace('"', "").replace('.', ""),
      bibtex_type: first_value(subgraph, "bibtexType").replace('"', ""),
      authors: authors(subgraph),
      year: first_value(subgraph, "yearOfPublication").replace('"', ""),
      venue: first_value(subgraph, "publishedIn").replace('"', ""),
    }
  }

  /* Valid iff every templated field came back non-empty */
  pub fn is_valid(&self) -> bool {
    !self.title.is_empty()
      && !self.bibtex_type.is_empty()
      && !self.authors.is_empty()
      && !self.year.is_empty()
      && !self.venue.is_empty()
  }

  /* Draw until a complete publication turns up. Unbounded: a graph
     that cannot produce one is misconfigured. */
  pub fn first_valid(sampler: &mut Sampler, entity: EntityType) -> Result<Self> {
    loop {
      let subgraph = sampler.sample_one(entity)?;
      let sample = Sample::from_subgraph(&subgraph);
      if sample.is_valid() {
        return Ok(sample)
      }
    }
  }
}

/* Utils */

fn first_value(subgraph: &Subgraph, predicate: &str) -> String {
  match subgraph.edges.get(&dblp_schema(predicate)).and_then(|nodes| nodes.first()) {
    Some(SubgraphNode::Leaf(value)) => value.as_str().to_string(),
    Some(SubgraphNode::Vertex { value, .. }) => value.as_str().to_string(),
    None => String::new(),
  }
}

fn authors(subgraph: &Subgraph) -> Vec<Author> {
  let nodes = match subgraph.edges.get(&dblp_schema("authoredBy")) {
    Some(nodes) => nodes,
    None => return Vec::new(),
  };
  nodes.iter().map(|node| match node {
    SubgraphNode::Vertex { value, edges } => Author {
      uri: value.as_str().to_string(),
      name: first_edge_value(edges, "primaryFullCreatorName"),
      affiliation: first_edge_value(edges, "primaryAffiliation"),
    },
    SubgraphNode::Leaf(value) => Author {
      uri: value.as_str().to_string(),
      name: String::new(),
      affiliation: String::new(),
    },
  }).collect()
}

fn first_edge_value(edges: &Edges, predicate: &str) -> String {
  edges
    .get(&dblp_schema(predicate))
    .and_then(|values| values.first())
    .map_or(String::new(), |value| value.as_str().replace('"', ""))
}
