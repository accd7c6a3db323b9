use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "optr workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark `optr` against hand-written std equivalents
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Also sweep the workload suite across every global allocator
        #[arg(long, default_value_t = false)]
        allocators: bool,

        /// Only run benchmarks whose id contains this string
        #[arg(long)]
        filter: Option<String>,

        /// Where to write the markdown report
        #[arg(long, default_value = "benchmark_results/report.md")]
        output: PathBuf,
    },
}

/// Primary benchmark target, run under the system allocator.
const PRIMARY_BENCH: &str = "ptr_benchmark";

/// Workload suite used for the allocator sweep.
const SWEEP_BENCH: &str = "suite";

const ALLOCATORS: &[&str] = &[
    "alloc-system",
    "alloc-mimalloc",
    "alloc-snmalloc",
    "alloc-jemalloc",
];

/// Relevant slice of criterion's `estimates.json`.
#[derive(Debug, Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Relevant slice of criterion's `benchmark.json`.
#[derive(Debug, Deserialize)]
struct BenchmarkInfo {
    #[serde(default)]
    throughput: Option<Throughput>,
}

#[derive(Debug, Deserialize)]
enum Throughput {
    Elements(f64),
    Bytes(f64),
    BytesDecimal(f64),
}

/// workload -> allocator -> ops/s
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            allocators,
            filter,
            output,
        } => {
            let columns = if allocators { ALLOCATORS } else { &ALLOCATORS[..1] };
            if !report_only {
                run_benchmarks(quick, filter.as_deref(), allocators)?;
            }
            generate_report(&output, columns)?;
        }
    }

    Ok(())
}

fn allocator_name(feature: &str) -> &str {
    feature.trim_start_matches("alloc-")
}

fn bench_command(bench: &str, feature: &str, quick: bool, filter: Option<&str>) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .env("RUSTFLAGS", "-C opt-level=3 -C codegen-units=1");

    cmd.arg("bench")
        .arg("--bench")
        .arg(bench)
        .arg("--features")
        .arg(feature)
        .arg("--no-default-features");

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if let Some(filter) = filter {
        cmd.arg(filter);
    }
    cmd.arg("--save-baseline").arg(allocator_name(feature));

    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }
    cmd
}

fn run_benchmarks(quick: bool, filter: Option<&str>, sweep: bool) -> Result<()> {
    println!("Running benchmarks...");

    let targets: &[&str] = if sweep {
        &[PRIMARY_BENCH, SWEEP_BENCH]
    } else {
        &[PRIMARY_BENCH]
    };

    // Build first to avoid measuring build time
    println!("Compiling benchmarks...");
    for target in targets {
        let status = Command::new("cargo")
            .args(["build", "--bench", *target, "--release"])
            .status()
            .context("failed to spawn cargo")?;
        if !status.success() {
            anyhow::bail!("Failed to compile benchmark {}", target);
        }
    }

    println!("\n>>> {} (system allocator)", PRIMARY_BENCH);
    let start = Instant::now();
    let status = bench_command(PRIMARY_BENCH, ALLOCATORS[0], quick, filter)
        .status()
        .with_context(|| format!("Failed to run {}", PRIMARY_BENCH))?;
    if !status.success() {
        anyhow::bail!("{} failed", PRIMARY_BENCH);
    }
    println!("Finished {} in {:.2?}", PRIMARY_BENCH, start.elapsed());

    if !sweep {
        return Ok(());
    }

    for alloc in ALLOCATORS {
        println!("\n>>> {} with feature: {}", SWEEP_BENCH, alloc);
        let start = Instant::now();

        let status = bench_command(SWEEP_BENCH, alloc, quick, filter)
            .status()
            .with_context(|| format!("Failed to run bench for {}", alloc))?;

        if status.success() {
            println!("Finished {} in {:.2?}", alloc, start.elapsed());
        } else {
            eprintln!("Warning: Benchmark failed for {}", alloc);
        }
    }

    Ok(())
}

fn generate_report(report_path: &Path, columns: &[&str]) -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut file = fs::File::create(report_path)
        .with_context(|| format!("creating {}", report_path.display()))?;
    write_report(&mut file, &results, columns)?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn write_report(out: &mut impl Write, results: &Results, columns: &[&str]) -> Result<()> {
    writeln!(out, "# Benchmark Report")?;
    writeln!(out)?;

    // Header
    write!(out, "| Workload |")?;
    for alloc in columns {
        write!(out, " {} (Ops/s) | vs System |", allocator_name(alloc))?;
    }
    writeln!(out)?;

    // Separator
    write!(out, "|---|")?;
    for _ in columns {
        write!(out, "---|---|")?;
    }
    writeln!(out)?;

    // Rows (BTreeMap keeps workloads sorted)
    for (workload, by_alloc) in results {
        write!(out, "| {} |", workload)?;

        let system_ops = by_alloc.get("system").copied().unwrap_or(0.0);

        for alloc in columns {
            match by_alloc.get(allocator_name(alloc)) {
                Some(ops) => {
                    let rel = if system_ops > 0.0 { ops / system_ops } else { 0.0 };
                    write!(out, " {} | **{:.2}x** |", format_ops(*ops), rel)?;
                }
                None => write!(out, " N/A | - |")?,
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{:.0}", ops)
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_owned)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

// Layout: target/criterion/<group>/<function>/<baseline>/estimates.json
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Ok(()),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if file_name(&path).as_deref() != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(workload_dir) = baseline_dir.parent() else {
            continue;
        };
        let (Some(baseline), Some(function)) = (file_name(baseline_dir), file_name(workload_dir))
        else {
            continue;
        };
        let workload = match workload_dir.parent().and_then(file_name) {
            Some(group) if group != "criterion" => format!("{}/{}", group, function),
            _ => function,
        };

        // Only baselines saved under an allocator name count
        if !ALLOCATORS.iter().any(|a| allocator_name(a) == baseline) {
            continue;
        }

        let elements = read_json::<BenchmarkInfo>(&baseline_dir.join("benchmark.json"))
            .ok()
            .and_then(|info| info.throughput)
            .map_or(1.0, |t| match t {
                Throughput::Elements(n) | Throughput::Bytes(n) | Throughput::BytesDecimal(n) => n,
            });

        let estimates: Estimates = read_json(&path)?;
        let time_ns = estimates.mean.point_estimate;
        if time_ns > 0.0 {
            results
                .entry(workload)
                .or_default()
                .insert(baseline, (elements * 1e9) / time_ns);
        }
    }

    Ok(())
}
