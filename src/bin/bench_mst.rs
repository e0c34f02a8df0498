//! Benchmark MST algorithms on random graphs.
//!
//! Run with: cargo run --release --bin bench_mst
//!
//! Usage:
//!   bench_mst                                  1M-edge random graph, filterkruskal
//!   bench_mst -n 30k -m 10m -s kruskal,superkruskal
//!   bench_mst -g geomgraph --validate          Cross-check against plain Kruskal
//!   bench_mst --sweep 14 -n 16385 -s prim,filterkruskalskewed
//!                                              Density sweep, one CSV per graph kind
//!   bench_mst --input g.txt / --write g.bin    Edge-list files (text or .bin)
//!
//! For per-phase timing, build with: cargo run --release --features timing --bin bench_mst

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use filter_kruskal::config::DEFAULT_SKEW_FACTOR;
use filter_kruskal::graph::{self, io as edge_io, GraphKind};
use filter_kruskal::validation::validate;
use filter_kruskal::{
    solve_with, Algorithm, BucketConfig, Edge, FilterKruskalConfig, FilterPolicy, MstConfig,
    MstError, MstOutput, PartitionScheme, PivotRule, Quantile, Recursion,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if s.ends_with('m') {
        (&s[..s.len() - 1], 1_000_000)
    } else if s.ends_with('k') {
        (&s[..s.len() - 1], 1_000)
    } else {
        (s.as_str(), 1)
    };

    num_str
        .parse::<f64>()
        .map(|n| (n * multiplier as f64) as usize)
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
}

#[derive(Parser)]
#[command(name = "bench_mst")]
#[command(about = "Benchmark Filter-Kruskal and friends on random graphs")]
struct Args {
    /// Number of vertices (e.g., 30000, 30k, 1m)
    #[arg(short = 'n', long, default_value = "30000", value_parser = parse_count)]
    vertices: usize,

    /// Number of edges requested from the generator
    #[arg(short = 'm', long, default_value = "1m", value_parser = parse_count)]
    edges: usize,

    /// Algorithms to run, comma separated
    #[arg(short = 's', long = "algorithms", default_value = "filterkruskal", value_delimiter = ',')]
    algorithms: Vec<Algorithm>,

    /// Graph generator: randgraph, hardgraph, geomgraph, dupgraph
    #[arg(short = 'g', long, default_value = "randgraph")]
    graph: GraphKind,

    /// Random seed for generation and for the solvers
    #[arg(long, default_value_t = 31)]
    seed: u64,

    /// Runs per algorithm (per instance in sweep mode)
    #[arg(short = 't', long, default_value_t = 10)]
    repeat: usize,

    /// Factor in the skewed pivot quantile min(0.5, skew * n * log2(n) / m)
    #[arg(long, default_value_t = DEFAULT_SKEW_FACTOR)]
    skew: f64,

    /// Override the pivot rule of Filter-Kruskal variants (e.g. median3, rootk:0.1)
    #[arg(long)]
    pivot: Option<PivotRule>,

    /// Override the partition scheme: twoway or threeway
    #[arg(long)]
    partition: Option<PartitionScheme>,

    /// Override the refilter policy: adaptive, eager or off
    #[arg(long)]
    filter: Option<FilterPolicy>,

    /// Override the driver: recursive or iterative
    #[arg(long)]
    recursion: Option<Recursion>,

    /// Override the base-case threshold
    #[arg(long)]
    threshold: Option<usize>,

    /// Seed every Kruskal-style run with each vertex's lightest edge
    #[arg(long)]
    partial_mst: bool,

    /// Read the edge list from a file instead of generating one
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the instance to a file (`.bin` for binary)
    #[arg(long)]
    write: Option<PathBuf>,

    /// Check every result against plain Kruskal
    #[arg(long)]
    validate: bool,

    /// Density sweep with this many steps: m = n * 2^i, one CSV per graph kind
    #[arg(long, value_name = "STEPS")]
    sweep: Option<usize>,

    /// Directory for sweep CSV files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Log solver events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn format_rate(count: usize, ms: f64) -> String {
    if ms <= 0.0 {
        return "N/A".to_string();
    }
    let per_sec = count as f64 / (ms / 1000.0);
    if per_sec >= 1_000_000.0 {
        format!("{:.2}M/s", per_sec / 1_000_000.0)
    } else if per_sec >= 1_000.0 {
        format!("{:.1}k/s", per_sec / 1000.0)
    } else {
        format!("{:.0}/s", per_sec)
    }
}

fn format_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{}k", n / 1_000)
    } else {
        format!("{}", n)
    }
}

/// Apply `--skew` and the Filter-Kruskal overrides from the command line.
fn tune(algorithm: Algorithm, args: &Args) -> Algorithm {
    let apply = |mut cfg: FilterKruskalConfig| {
        if let PivotRule::RootK(Quantile::Skewed { .. }) = cfg.pivot {
            cfg.pivot = PivotRule::RootK(Quantile::Skewed { factor: args.skew });
        }
        if let Some(pivot) = args.pivot {
            cfg.pivot = pivot;
        }
        if let Some(partition) = args.partition {
            cfg.partition = partition;
        }
        if let Some(filter) = args.filter {
            cfg.filter = filter;
        }
        if let Some(recursion) = args.recursion {
            cfg.recursion = recursion;
        }
        if let Some(threshold) = args.threshold {
            cfg.threshold = threshold;
        }
        cfg
    };
    match algorithm {
        Algorithm::FilterKruskal(cfg) => Algorithm::FilterKruskal(apply(cfg)),
        Algorithm::BucketKruskal(cfg) => Algorithm::BucketKruskal(BucketConfig {
            inner: apply(cfg.inner),
            ..cfg
        }),
        other => other,
    }
}

/// Largest number of edges sharing one weight.
fn max_weight_multiplicity(edges: &[Edge]) -> usize {
    let mut counts: FxHashMap<u32, usize> = FxHashMap::default();
    let mut best = 0;
    for e in edges {
        let c = counts.entry(e.w.to_bits()).or_insert(0);
        *c += 1;
        best = best.max(*c);
    }
    best
}

/// Solve a fresh copy of `edges`; the copy is not timed.
fn timed_solve(edges: &[Edge], n: usize, config: &MstConfig) -> Result<(f64, MstOutput), MstError> {
    let mut work = edges.to_vec();
    let t0 = Instant::now();
    let output = solve_with(&mut work, n, config)?;
    Ok((t0.elapsed().as_secs_f64() * 1000.0, output))
}

struct BenchResult {
    algorithm: Algorithm,
    min_ms: f64,
    avg_ms: f64,
    cost: f64,
    num_edges: usize,
    filtered: usize,
    valid: Option<bool>,
}

fn bench_algorithm(
    edges: &[Edge],
    n: usize,
    algorithm: Algorithm,
    args: &Args,
) -> Result<BenchResult, MstError> {
    let mut config = MstConfig::new(algorithm)
        .with_seed(args.seed)
        .with_partial_mst(args.partial_mst);
    if !args.validate {
        config = config.cost_only();
    }

    let repeat = args.repeat.max(1);
    let mut times = Vec::with_capacity(repeat);
    let (ms, mut output) = timed_solve(edges, n, &config)?;
    times.push(ms);
    for iter in 1..repeat {
        let (ms, next) = timed_solve(edges, n, &config)?;
        println!("  {} iteration {}/{}: {:.1}ms", algorithm, iter + 1, repeat, ms);
        times.push(ms);
        output = next;
    }

    let valid = if args.validate {
        let report = validate(edges, n, &output);
        if !report.is_valid() {
            eprintln!("WARNING: validation failed for {}: {}", algorithm, report);
        }
        Some(report.is_valid())
    } else {
        None
    };

    let min_ms = times.iter().cloned().fold(f64::INFINITY, f64::min);
    let avg_ms = times.iter().sum::<f64>() / times.len() as f64;
    Ok(BenchResult {
        algorithm,
        min_ms,
        avg_ms,
        cost: output.cost,
        num_edges: output.num_edges,
        filtered: output.stats.filtered_edges,
        valid,
    })
}

/// Density sweep: fixed `n`, `m = n * 2^i`, averaged over `repeat` fresh
/// instances per step, algorithms run in shuffled order on each instance.
fn run_sweep(args: &Args, algorithms: &[Algorithm], steps: usize) -> Result<(), Box<dyn Error>> {
    let n = args.vertices;
    let max_m = n.saturating_mul(n.saturating_sub(1)) / 2;
    let repeat = args.repeat.max(1);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut order: Vec<usize> = (0..algorithms.len()).collect();

    let total_tasks = GraphKind::ALL.len() * steps * repeat * algorithms.len();
    let mut task_count = 0usize;

    for kind in GraphKind::ALL {
        let path = args.out_dir.join(format!("{}.csv", kind));
        let mut out = BufWriter::new(File::create(&path)?);
        write!(out, "N,M")?;
        for a in algorithms {
            write!(out, ",{}", a)?;
        }
        writeln!(out)?;

        for step in 0..steps {
            let m = n.saturating_mul(1usize << step.min(48)).min(max_m);
            let mut total_ms = vec![0.0; algorithms.len()];
            let mut total_m = 0usize;

            for _ in 0..repeat {
                let edges = graph::generate(kind, n, m, &mut rng);
                total_m += edges.len();
                order.shuffle(&mut rng);
                for &j in &order {
                    let config = MstConfig::new(algorithms[j])
                        .with_seed(args.seed)
                        .with_partial_mst(args.partial_mst)
                        .cost_only();
                    let (ms, _) = timed_solve(&edges, n, &config)?;
                    total_ms[j] += ms;
                    task_count += 1;
                }
            }

            let avg_m = total_m / repeat;
            write!(out, "{},{}", n, avg_m)?;
            for t in &total_ms {
                write!(out, ",{:.3}", t / repeat as f64)?;
            }
            writeln!(out)?;
            println!(
                "{} m={:>8}  progress {:>3}%",
                kind,
                format_num(avg_m),
                100 * task_count / total_tasks.max(1)
            );
        }
        out.flush()?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let algorithms: Vec<Algorithm> = args
        .algorithms
        .iter()
        .map(|&a| tune(a, &args))
        .collect();

    println!("MST Benchmark");
    println!("=============\n");

    if let Some(steps) = args.sweep {
        println!("Density sweep: n = {}, {} steps", format_num(args.vertices), steps);
        return run_sweep(&args, &algorithms, steps);
    }

    let t_gen = Instant::now();
    let (edges, n) = match &args.input {
        Some(path) => {
            let edges = edge_io::load(path)?;
            let n = graph::vertex_count(&edges).max(args.vertices);
            (edges, n)
        }
        None => {
            let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
            let edges = graph::generate(args.graph, args.vertices, args.edges, &mut rng);
            (edges, args.vertices)
        }
    };
    let gen_time = t_gen.elapsed().as_secs_f64() * 1000.0;

    if let Some(path) = &args.write {
        edge_io::save(path, &edges)?;
        println!("Wrote {} edges to {}", edges.len(), path.display());
    }

    println!("Configuration:");
    println!("  seed = {}", args.seed);
    match &args.input {
        Some(path) => println!("  input = {}", path.display()),
        None => println!("  graph = {}", args.graph),
    }
    println!("  n = {}, m = {}", format_num(n), format_num(edges.len()));
    println!("  max weight multiplicity = {}", max_weight_multiplicity(&edges));
    println!(
        "  algorithms = {:?}",
        algorithms.iter().map(|a| a.name()).collect::<Vec<_>>()
    );
    println!("  graph time = {:.1}ms", gen_time);
    if args.repeat > 1 {
        println!("  repeat = {}", args.repeat);
    }
    if args.partial_mst {
        println!("  partial mst seeding = on");
    }

    #[cfg(feature = "timing")]
    println!("  timing = enabled (per-phase timing will be printed)");

    let mut results = Vec::with_capacity(algorithms.len());
    for &algorithm in &algorithms {
        print!("\nRunning {}... ", algorithm);
        io::stdout().flush()?;
        let result = bench_algorithm(&edges, n, algorithm, &args)?;
        println!("{:.1}ms", result.avg_ms);
        results.push(result);
    }

    println!("\n{}", "=".repeat(78));
    println!("SUMMARY");
    println!("{}", "=".repeat(78));
    println!(
        "{:>20} | {:>10} | {:>10} | {:>12} | {:>14} | {:>5}",
        "algorithm", "min", "avg", "throughput", "cost", "valid"
    );
    println!(
        "{:-<20}-+-{:-<10}-+-{:-<10}-+-{:-<12}-+-{:-<14}-+-{:-<5}",
        "", "", "", "", "", ""
    );
    for r in &results {
        println!(
            "{:>20} | {:>8.1}ms | {:>8.1}ms | {:>12} | {:>14.4} | {:>5}",
            r.algorithm.name(),
            r.min_ms,
            r.avg_ms,
            format_rate(edges.len(), r.avg_ms),
            r.cost,
            match r.valid {
                Some(true) => "ok",
                Some(false) => "FAIL",
                None => "-",
            }
        );
    }
    if let Some(r) = results.first() {
        println!(
            "\n{} tree edges, {} components, {} edges filtered by {}",
            format_num(r.num_edges),
            n - r.num_edges,
            format_num(r.filtered),
            r.algorithm
        );
    }

    println!("\nBenchmark complete.");
    Ok(())
}
