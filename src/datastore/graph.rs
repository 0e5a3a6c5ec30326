
use {
  std::{
    collections::BTreeMap,
    io::{BufRead, BufReader, BufWriter},
    path::Path,
  },
  tracing::info,
  crate::{
    EntityType, Value,
    errors::GraphError as Error,
    rdf::{parser::TripleScanner, vocab::Vocabulary},
  },
};

type Result<T> = std::result::Result<T, Error>;

/* Objects of one vertex, keyed by predicate. The lists keep arrival
   order and duplicates: samplers index into them by position. */
pub type Edges = BTreeMap<String, Vec<Value>>;
pub type Vertices = BTreeMap<String, Edges>;

/* Subjects are indexed per entity type, then by vertex, then by
   predicate. A vertex lives under exactly one type; lookups try the
   requested type first and retry under the other one because edges
   routinely cross the type boundary. BTreeMaps keep iteration order
   deterministic, which seeded sampling depends on.

   Built once, from the raw dump or from a snapshot, then read-only
   for the rest of the process. */
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Graph {
  label: Option<String>,
  data: BTreeMap<EntityType, Vertices>,
}

/* Public */
impl Graph {
  /* Constructors */
  pub fn new() -> Self {
    Graph {
      label: None,
      data: BTreeMap::new(),
    }
  }
  pub fn with_label(label: &str) -> Self {
    Graph {
      label: Some(label.to_string()),
      data: BTreeMap::new(),
    }
  }
  /* Stream a raw dump into a fresh index. Line oriented and
     best-effort: lines the scanner cannot place are skipped, only
     whitelisted predicates are kept. Runs once per dump; snapshots
     cover every run after that. */
  pub fn from_ntriple<P: AsRef<Path>>(path: P, vocab: &Vocabulary) -> Result<Self> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
      .map_err(|e| Error::MissingSource(path.to_path_buf(), Box::new(e)))?;
    let mut graph = Graph::new();
    let mut scanner = TripleScanner::new(vocab);
    let mut lines: u64 = 0;
    let mut kept: u64 = 0;
    for line in BufReader::new(file).lines() {
      let line = line?;
      lines += 1;
      if let Some(triple) = scanner.scan(&line) {
        graph.add_triple(triple.entity, triple.vertex1, triple.edge, triple.vertex2);
        kept += 1;
      }
      if lines % 5_000_000 == 0 {
        info!(lines, kept, "loading {}", path.display());
      }
    }
    info!(lines, kept, "loaded {}", path.display());
    Ok(graph)
  }
  /* Rebuild from a snapshot written by save_snapshot. Strictly a
     cache: the same build reads what it wrote, nothing more. */
  pub fn from_snapshot<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
      .map_err(|e| Error::MissingSource(path.to_path_buf(), Box::new(e)))?;
    let data = bincode::deserialize_from(BufReader::new(file))
      .map_err(|e| Error::BadSnapshot(path.to_path_buf(), Box::new(e)))?;
    info!("graph loaded from {}", path.display());
    Ok(Graph {
      label: None,
      data,
    })
  }

  pub fn label(&self) -> Option<&str> {
    self.label.as_deref()
  }

  /* Append vertex2 under [entity][vertex1][edge], creating the
     intermediate maps on first sight. No deduplication. */
  pub fn add_triple(&mut self, entity: EntityType, vertex1: String, edge: String, vertex2: Value) {
    self.data
      .entry(entity)
      .or_insert_with(BTreeMap::new)
      .entry(vertex1)
      .or_insert_with(BTreeMap::new)
      .entry(edge)
      .or_insert_with(Vec::new)
      .push(vertex2);
  }

  /* Edges and objects for a vertex, retrying under the other entity
     index on a miss. None means "no further expansion here"; callers
     treat it as a leaf, never as a failure. */
  pub fn get(&self, entity: EntityType, vertex: &str) -> Option<&Edges> {
    self.lookup(entity, vertex).or_else(|| self.lookup(entity.other(), vertex))
  }

  pub fn vertices(&self, entity: EntityType) -> impl Iterator<Item = &String> {
    self.data.get(&entity).into_iter().flat_map(|vertices| vertices.keys())
  }
  pub fn vertex_count(&self, entity: EntityType) -> usize {
    self.data.get(&entity).map_or(0, |vertices| vertices.len())
  }

  /* Serialize the full index to a binary snapshot. A pure cache
     layer to spare re-parsing the multi-gigabyte dump; carries no
     cross-version guarantee. */
  pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    bincode::serialize_into(BufWriter::new(file), &self.data)?;
    info!("graph saved to {}", path.display());
    Ok(())
  }
}

/* Private */
impl Graph {
  fn lookup(&self, entity: EntityType, vertex: &str) -> Option<&Edges> {
    self.data.get(&entity).and_then(|vertices| vertices.get(vertex))
  }
}
