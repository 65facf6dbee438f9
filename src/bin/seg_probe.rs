use std::env;
use std::time::Instant;

use protseg::gen::{random_marker_set, random_sequence};
use protseg::harness::{builtin_cases, verify_cases};
use protseg::solver::all_solvers;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("seg_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(78));
    eprintln!("Protein Parsing Probe: Solver Verification and Benchmark");
    eprintln!("{}", "=".repeat(78));
    eprintln!();
    eprintln!("Phase 1 verifies all four solvers against the fixed case suite.");
    eprintln!("Phase 2 times each solver over random (sequence, marker set) pairs");
    eprintln!("of growing length, with skip policies for the solvers whose");
    eprintln!("asymptotic class makes them infeasible at scale:");
    eprintln!("  - brute_force above N = {}", options.brute_limit);
    eprintln!("  - top_down_dp above N = {} (recursion depth)", options.top_down_limit);
    eprintln!();

    eprintln!("[1/2] Verification suite");
    let cases = builtin_cases();
    match verify_cases(&cases) {
        Ok(reports) => {
            for report in &reports {
                eprintln!("      PASS {:<36} -> {}", report.name, report.result);
            }
            eprintln!("      {} cases, all solvers agree", reports.len());
        }
        Err(err) => {
            eprintln!("      FAIL {err}");
            std::process::exit(1);
        }
    }
    eprintln!();

    if options.verify_only {
        return;
    }

    eprintln!("[2/2] Benchmark matrix (seed {})", options.seed);
    let mut sys = System::new();
    let measurements = run_benchmarks(&options, &mut sys);
    print_improvement_summary(&measurements);

    options.format.write(&measurements);
}

struct Options {
    format: OutputFormat,
    seed: u64,
    verify_only: bool,
    /// Largest N at which the exponential solver is still run.
    brute_limit: usize,
    /// Largest N at which the recursive memoized solver is still run.
    top_down_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut seed = 42u64;
        let mut verify_only = false;
        let mut brute_limit = 24usize;
        let mut top_down_limit = 2500usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if arg == "--verify-only" {
                verify_only = true;
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = parse_number(value, "seed")?;
            } else if arg == "--seed" {
                let value = next_value(&mut args, "--seed")?;
                seed = parse_number(&value, "seed")?;
            } else if let Some(value) = arg.strip_prefix("--brute-limit=") {
                brute_limit = parse_number(value, "brute limit")?;
            } else if arg == "--brute-limit" {
                let value = next_value(&mut args, "--brute-limit")?;
                brute_limit = parse_number(&value, "brute limit")?;
            } else if let Some(value) = arg.strip_prefix("--top-down-limit=") {
                top_down_limit = parse_number(value, "top-down limit")?;
            } else if arg == "--top-down-limit" {
                let value = next_value(&mut args, "--top-down-limit")?;
                top_down_limit = parse_number(&value, "top-down limit")?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            seed,
            verify_only,
            brute_limit,
            top_down_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin seg_probe [-- <options>]

Options:
  --format <csv|table|json>  Output format for benchmark rows (default: csv)
  --seed <N>                 RNG seed for the random data matrix (default: 42)
  --brute-limit <N>          Run brute_force only up to this sequence length (default: 24)
  --top-down-limit <N>       Run top_down_dp only up to this sequence length (default: 2500)
  --verify-only              Run the verification suite and stop
  -h, --help                 Print this help message

Examples:
  cargo run --bin seg_probe
  cargo run --bin seg_probe -- --format table --top-down-limit 1000
"
        );
    }
}

fn parse_number<N: std::str::FromStr>(value: &str, what: &str) -> Result<N, String> {
    value
        .parse::<N>()
        .map_err(|_| format!("{what} must be a non-negative integer"))
}

fn next_value<I, T>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    args.next()
        .map(Into::into)
        .ok_or_else(|| format!("missing value after {flag}"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    solver: &'static str,
    n: usize,
    wall_s: Option<f64>,
    rss_delta_kib: u64,
    result: String,
}

/// Random-data parameters matching the reference calibration: a thousand
/// markers of up to fifty symbols.
const MARKER_COUNT: usize = 1000;
const MAX_MARKER_LEN: usize = 50;
const SEQUENCE_LENGTHS: &[usize] = &[100, 500, 1000, 2000, 5000, 10_000, 20_000, 50_000];

fn run_benchmarks(options: &Options, sys: &mut System) -> Vec<Measurement> {
    let solvers = all_solvers();
    let mut measurements = Vec::new();

    for (idx, &n) in SEQUENCE_LENGTHS.iter().enumerate() {
        eprintln!(
            "      [{}/{}] N = {n}, |P| = {MARKER_COUNT}, k = {MAX_MARKER_LEN}",
            idx + 1,
            SEQUENCE_LENGTHS.len()
        );
        // One RNG stream per size keeps rows reproducible in isolation.
        let mut rng = StdRng::seed_from_u64(options.seed.wrapping_add(n as u64));
        let seq = random_sequence(&mut rng, n);
        let markers = random_marker_set(&mut rng, MARKER_COUNT, MAX_MARKER_LEN);

        for solver in &solvers {
            let limit = match solver.name() {
                "brute_force" => options.brute_limit,
                "top_down_dp" => options.top_down_limit,
                _ => usize::MAX,
            };
            if n > limit {
                eprintln!("            {:<14} skipped (N > {limit})", solver.name());
                measurements.push(Measurement {
                    solver: solver.name(),
                    n,
                    wall_s: None,
                    rss_delta_kib: 0,
                    result: "skipped".to_string(),
                });
                continue;
            }

            let before = rss_kib(sys);
            let start = Instant::now();
            let outcome = solver.solve(&seq, &markers);
            let wall = start.elapsed().as_secs_f64();
            let after = rss_kib(sys);

            eprintln!(
                "            {:<14} {:>9.4}s  result = {outcome}",
                solver.name(),
                wall
            );
            measurements.push(Measurement {
                solver: solver.name(),
                n,
                wall_s: Some(wall),
                rss_delta_kib: after.saturating_sub(before),
                result: outcome.to_string(),
            });
        }
    }
    measurements
}

/// The headline comparison: time shed by the trie walk relative to the
/// pull-scan tabulation, per sequence length.
fn print_improvement_summary(measurements: &[Measurement]) {
    eprintln!();
    eprintln!("      Bottom-up -> trie improvement:");
    for &n in SEQUENCE_LENGTHS {
        let time_of = |name: &str| {
            measurements
                .iter()
                .find(|m| m.n == n && m.solver == name)
                .and_then(|m| m.wall_s)
        };
        match (time_of("bottom_up_dp"), time_of("trie_dp")) {
            (Some(bu), Some(trie)) if bu > 0.0 => {
                eprintln!("        N = {n:<7} {:>6.1}%", (bu - trie) / bu * 100.0);
            }
            _ => eprintln!("        N = {n:<7}    n/a"),
        }
    }
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) {
    println!("solver,n,wall_s,rss_delta_kib,result");
    for m in measurements {
        let wall = m
            .wall_s
            .map(|w| format!("{w:.4}"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{}",
            m.solver, m.n, wall, m.rss_delta_kib, m.result
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    println!(
        "{:<14}  {:>8}  {:>10}  {:>14}  {}",
        "solver", "n", "wall_s", "rss_delta_kib", "result"
    );
    println!("{:-<14}  {:-<8}  {:-<10}  {:-<14}  {:-<14}", "", "", "", "", "");
    for m in measurements {
        let wall = m
            .wall_s
            .map(|w| format!("{w:.4}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14}  {:>8}  {:>10}  {:>14}  {}",
            m.solver, m.n, wall, m.rss_delta_kib, m.result
        );
    }
}

fn write_json(measurements: &[Measurement]) {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let wall = m
            .wall_s
            .map(|w| format!("{w:.4}"))
            .unwrap_or_else(|| "null".to_string());
        println!(
            "  {{\"solver\":\"{}\",\"n\":{},\"wall_s\":{},\"rss_delta_kib\":{},\"result\":\"{}\"}}{}",
            m.solver,
            m.n,
            wall,
            m.rss_delta_kib,
            m.result,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
