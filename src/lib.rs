/* Exports */

pub mod datastore;
pub mod rdf;
pub mod sampler;
pub mod sample;
pub mod errors;

pub use datastore::graph::Graph;
pub use rdf::vocab::Vocabulary;
pub use sampler::Sampler;
pub use sampler::subgraph::{Subgraph, SubgraphNode};
pub use sampler::walk::WalkStep;
pub use sample::{Author, Sample};

/* Common Definitions */

/* The two sampleable families of subject in the index. Everything
   else in the dump is dropped at load time. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum EntityType {
  Publication,
  Creator,
}
impl EntityType {
  /* The opposite index. Lookups retry under it because edges cross
     the type boundary: a publication's authors are Creators. */
  pub fn other(self) -> Self {
    match self {
      EntityType::Publication => EntityType::Creator,
      EntityType::Creator => EntityType::Publication,
    }
  }
}
impl std::fmt::Display for EntityType {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      EntityType::Publication => write!(f, "Publication"),
      EntityType::Creator => write!(f, "Creator"),
    }
  }
}

/* An object position in a triple: either a bracketed URI or a quoted
   literal, both held verbatim as they appeared in the dump. */
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum Value {
  Uri(String),
  Literal(String),
}
impl Value {
  pub fn as_str(&self) -> &str {
    match self {
      Value::Uri(s) => s,
      Value::Literal(s) => s,
    }
  }
}
impl std::convert::From<&str> for Value {
  fn from(s: &str) -> Self {
    if s.starts_with('<') {
      Value::Uri(s.to_string())
    }
    else {
      Value::Literal(s.to_string())
    }
  }
}
impl std::convert::From<String> for Value {
  fn from(s: String) -> Self {
    if s.starts_with('<') {
      Value::Uri(s)
    }
    else {
      Value::Literal(s)
    }
  }
}
