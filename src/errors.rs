
use crate::EntityType;

type Source<E> = Box<E>;

#[derive(Debug)]
pub enum GraphError {
  Io(Source<std::io::Error>),
  MissingSource(std::path::PathBuf, Source<std::io::Error>),
  BadSnapshot(std::path::PathBuf, Source<bincode::Error>),
  Snapshot(Source<bincode::Error>),
  EmptyPopulation(EntityType),
  NotEnoughVertices(usize, usize, EntityType),
}
impl std::error::Error for GraphError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use GraphError::*;
    match self {
      Io(e) => Some(&*e),
      MissingSource(_, e) => Some(&*e),
      BadSnapshot(_, e) => Some(&*e),
      Snapshot(e) => Some(&*e),
      _ => None,
    }
  }
}
impl std::fmt::Display for GraphError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    use GraphError::*;
    match self {
      Io(e) => write!(f, "{}", *e),
      MissingSource(path, e) => write!(f, "Could not open {}: {}", path.display(), *e),
      BadSnapshot(path, e) => write!(f, "Snapshot at {} could not be decoded, it was most likely written by a different build: {}", path.display(), *e),
      Snapshot(e) => write!(f, "{}", *e),
      EmptyPopulation(entity) => write!(f, "Attempted to sample from the {} index but it holds no vertices. Was the graph loaded?", entity),
      NotEnoughVertices(requested, available, entity) => write!(f, "Attempted to sample {} distinct {} vertices without replacement but only {} exist", requested, entity, available),
    }
  }
}
impl From<std::io::Error> for GraphError {
  fn from(err: std::io::Error) -> GraphError {
    GraphError::Io(Box::new(err))
  }
}
impl From<bincode::Error> for GraphError {
  fn from(err: bincode::Error) -> GraphError {
    GraphError::Snapshot(Box::new(err))
  }
}
