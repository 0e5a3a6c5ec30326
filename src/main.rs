
use {
  std::path::PathBuf,
  clap::{Parser, Subcommand, ValueEnum},
  dblp_graph::{EntityType, Graph, Sampler, Vocabulary},
};

#[derive(Parser)]
#[command(name = "dblp_graph", about = "Index and sample the DBLP triple dump")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Parse a raw dump once and cache it as a binary snapshot
  Index {
    /// Path to the line-oriented triple dump
    #[arg(long)]
    input: PathBuf,
    /// Where to write the snapshot
    #[arg(long)]
    output: PathBuf,
  },
  /// Sample one-hop subgraphs from a snapshot and print them as JSON
  Sample {
    #[arg(long)]
    snapshot: PathBuf,
    #[arg(long, value_enum, default_value = "publication")]
    entity: Entity,
    #[arg(long, default_value_t = 1)]
    count: usize,
    #[arg(long, default_value_t = 2358)]
    seed: u64,
  },
  /// Sample bounded-hop random walks and print them as JSON triples
  Walk {
    #[arg(long)]
    snapshot: PathBuf,
    #[arg(long, value_enum, default_value = "publication")]
    entity: Entity,
    #[arg(long, default_value_t = 2)]
    hops: usize,
    #[arg(long, default_value_t = 1)]
    count: usize,
    #[arg(long, default_value_t = 2358)]
    seed: u64,
  },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Entity {
  Publication,
  Creator,
}
impl From<Entity> for EntityType {
  fn from(entity: Entity) -> Self {
    match entity {
      Entity::Publication => EntityType::Publication,
      Entity::Creator => EntityType::Creator,
    }
  }
}

fn main() {
  tracing_subscriber::fmt().with_target(false).init();
  if let Err(e) = run(Cli::parse()) {
    eprintln!("{}", e);
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
  let vocab = Vocabulary::default();
  match cli.command {
    Command::Index { input, output } => {
      let graph = Graph::from_ntriple(&input, &vocab)?;
      graph.save_snapshot(&output)?;
    },
    Command::Sample { snapshot, entity, count, seed } => {
      let graph = Graph::from_snapshot(&snapshot)?;
      let mut sampler = Sampler::new(&graph, &vocab, seed);
      for subgraph in sampler.sample_vertex(entity.into(), count)? {
        println!("{}", subgraph.to_json());
      }
    },
    Command::Walk { snapshot, entity, hops, count, seed } => {
      let graph = Graph::from_snapshot(&snapshot)?;
      let mut sampler = Sampler::new(&graph, &vocab, seed);
      for _ in 0..count {
        let walk = sampler.sample_triples(entity.into(), hops)?;
        let triples: Vec<[&str; 3]> = walk
          .iter()
          .map(|step| [step.source.as_str(), step.edge.as_str(), step.target.as_str()])
          .collect();
        println!("{}", serde_json::to_string(&triples)?);
      }
    },
  }
  Ok(())
}
