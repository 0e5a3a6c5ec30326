use criterion::*;
use dblp_graph::{EntityType, Graph, Sampler, Value, Vocabulary};
use dblp_graph::rdf::vocab::dblp_schema;

fn synthetic_graph(publications: usize, authors_per: usize) -> Graph {
  let mut graph = Graph::new();
  for p in 0..publications {
    let publication = format!("<https://dblp.org/rec/conf/demo/{}>", p);
    graph.add_triple(
      EntityType::Publication,
      publication.clone(),
      dblp_schema("title"),
      Value::from(format!("\"Paper number {}\"", p)),
    );
    graph.add_triple(
      EntityType::Publication,
      publication.clone(),
      dblp_schema("yearOfPublication"),
      Value::from("\"2020\"".to_string()),
    );
    graph.add_triple(
      EntityType::Publication,
      publication.clone(),
      dblp_schema("publishedIn"),
      Value::from("\"CoRR\"".to_string()),
    );
    for a in 0..authors_per {
      let creator = format!("<https://dblp.org/pid/{}-{}>", p % 50, a);
      graph.add_triple(
        EntityType::Publication,
        publication.clone(),
        dblp_schema("authoredBy"),
        Value::from(creator.clone()),
      );
      graph.add_triple(
        EntityType::Creator,
        creator.clone(),
        dblp_schema("primaryFullCreatorName"),
        Value::from(format!("\"Creator {}\"", a)),
      );
      graph.add_triple(
        EntityType::Creator,
        creator,
        dblp_schema("authorOf"),
        Value::from(publication.clone()),
      );
    }
  }
  graph
}

pub fn sampling(c: &mut Criterion) {
  let vocab = Vocabulary::default();
  let graph = synthetic_graph(5_000, 3);
  let mut group = c.benchmark_group("graph_sampler");
  group.sample_size(10);
  group.bench_function("Sampler::sample_vertex() over 5k publications",
    |b| {
      let mut sampler = Sampler::new(&graph, &vocab, 2358);
      b.iter(|| sampler.sample_vertex(black_box(EntityType::Publication), 1))
    }
  );
  group.bench_function("Sampler::sample_triples() with 2 hops",
    |b| {
      let mut sampler = Sampler::new(&graph, &vocab, 2358);
      b.iter(|| sampler.sample_triples(black_box(EntityType::Publication), 2))
    }
  );
  group.bench_function("Graph built from 1k synthetic publications",
    |b| b.iter(|| synthetic_graph(black_box(1_000), 3))
  );
  group.finish();
}

criterion_group!(benches, sampling);
criterion_main!(benches);
