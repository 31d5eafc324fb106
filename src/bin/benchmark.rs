use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use heap_dijkstra::algorithm::{ShortestPathAlgorithm, dijkstra::Dijkstra};
use heap_dijkstra::graph::generators::{random_geometric, random_graph};
use heap_dijkstra::graph::{Graph, UndirectedGraph};

// Function to benchmark the engine on a graph
fn benchmark_run(name: &str, graph: &UndirectedGraph<f64>, source: usize) -> heap_dijkstra::Result<Duration> {
    println!("Running Dijkstra on {} graph with {} vertices...", name, graph.vertex_count());

    let dijkstra = Dijkstra::new();
    let start = Instant::now();
    let result = dijkstra.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    // Count reachable vertices
    let reachable = result.distances.iter().filter(|d| d.is_finite()).count();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 2;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: Dijkstra with an indexable binary heap");
    println!("Edge factor: {} edges per vertex", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating graphs with {} vertices...", size);
        let uniform = random_graph(size, size * edge_factor, &mut rng);
        let (geometric, _) = random_geometric(size, size * edge_factor, &mut rng);

        let uniform_time = benchmark_run("uniform", &uniform, 0)?;
        let geometric_time = benchmark_run("geometric", &geometric, 0)?;
        results.push((size, uniform_time, geometric_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15}", "Vertices", "Uniform (ms)", "Geometric (ms)");
    println!("-----------------------------------------------------");

    for (size, uniform_time, geometric_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15}",
            size,
            uniform_time.as_millis(),
            geometric_time.as_millis()
        );
    }

    Ok(())
}
