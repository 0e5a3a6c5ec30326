/*
  Scans the line-oriented DBLP dump into typed triples for the
  datastore to index. Parsing is deliberately token-level rather than
  a conformant RDF parse: the object is the verbatim join of every
  token between the predicate and the trailing ".", so literal quoting
  reaches the index exactly as dumped and downstream consumers strip
  it themselves.
*/

use crate::{
  EntityType, Value,
  rdf::vocab::{Vocabulary, TYPE_PREDICATE},
};

pub struct ScannedTriple {
  pub entity: EntityType,
  pub vertex1: String,
  pub edge: String,
  pub vertex2: Value,
}

/* Carries the running entity classification across lines: the dump
   groups triples by subject and announces rdf:type up front, so the
   last recognized type decides where following triples are indexed.
   Triples arriving before any classification are dropped. */
pub struct TripleScanner<'a> {
  vocab: &'a Vocabulary,
  current: Option<EntityType>,
}

impl<'a> TripleScanner<'a> {
  pub fn new(vocab: &'a Vocabulary) -> Self {
    TripleScanner {
      vocab,
      current: None,
    }
  }

  pub fn scan(&mut self, line: &str) -> Option<ScannedTriple> {
    let (vertex1, edge, vertex2) = split_line(line)?;
    if vertex1.starts_with('_') { // Ignore IDs and lists
      return None
    }
    if edge == TYPE_PREDICATE {
      match classify_type(self.vocab, &vertex2) {
        Some(EntityType::Creator) => {
          // Creator sub-classes only classify, they are never stored
          self.current = Some(EntityType::Creator);
          return None
        },
        Some(EntityType::Publication) => {
          self.current = Some(EntityType::Publication);
        },
        // Unrecognized type objects keep whatever classification stuck
        None => {},
      }
    }
    if !self.vocab.predicates.contains(edge) {
      return None
    }
    let entity = self.current?;
    Some(ScannedTriple {
      entity,
      vertex1: vertex1.to_string(),
      edge: edge.to_string(),
      vertex2: Value::from(vertex2),
    })
  }
}

/* Utils */

/* Whitespace-token split: subject, predicate, then everything up to
   the trailing "." re-joined as the object. Lines without at least a
   subject and predicate are malformed and skipped. */
fn split_line(line: &str) -> Option<(&str, &str, String)> {
  let tokens: Vec<&str> = line.split(' ').collect();
  if tokens.len() < 2 {
    return None
  }
  let vertex2 = if tokens.len() > 2 {
    tokens[2..tokens.len() - 1].join(" ")
  }
  else {
    String::new()
  };
  Some((tokens[0], tokens[1], vertex2))
}

/* Local name of a type object (after the last '#', '>' removed),
   checked against the publication then creator white lists */
fn classify_type(vocab: &Vocabulary, object: &str) -> Option<EntityType> {
  let local = object.rsplitn(2, '#').next().unwrap_or(object).replace('>', "");
  if vocab.publications.contains(&local) {
    return Some(EntityType::Publication)
  }
  if vocab.creators.contains(&local) {
    return Some(EntityType::Creator)
  }
  None
}
