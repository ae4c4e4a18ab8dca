use clap::{Parser, Subcommand};
use kata_common::geom::Rect;
use kata_common::util::config::{Config, PairsConfig};
use kata_common::util::console::{Console, Stdout};
use kata_common::util::profiler::ScopedTimer;
use kata_common::util::{generator, logger, parse};
use kata_pairsum::report::describe_first;
use kata_pairsum::{PairReport, find_all_pairs, find_first_pair};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Intersect two axis-aligned rectangles
    Rect {
        #[arg(long, value_name = "X1,Y1,X2,Y2", allow_hyphen_values = true)]
        rect1: Option<String>,
        #[arg(long, value_name = "X1,Y1,X2,Y2", allow_hyphen_values = true)]
        rect2: Option<String>,
    },
    /// Find pairs of values that add up to a target
    Pairs {
        #[arg(long, allow_hyphen_values = true)]
        target: Option<i64>,
        #[arg(long, value_name = "LIST", allow_hyphen_values = true, conflicts_with = "random")]
        values: Option<String>,
        #[arg(long, conflicts_with = "first")]
        all: bool,
        #[arg(long)]
        first: bool,
        #[arg(long)]
        random: bool,
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Print a random array
    Generate {
        #[command(flatten)]
        range: RangeArgs,
    },
}

#[derive(clap::Args)]
struct RangeArgs {
    #[arg(long)]
    len: Option<usize>,
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i64>,
    #[arg(long)]
    seed: Option<u64>,
}

impl RangeArgs {
    fn apply(&self, pairs: &mut PairsConfig) {
        if let Some(len) = self.len {
            pairs.search_area = len;
        }
        if let Some(min) = self.min {
            pairs.min = min;
        }
        if let Some(max) = self.max {
            pairs.max = max;
        }
        if self.seed.is_some() {
            pairs.seed = self.seed;
        }
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let config = load_config(&args.config)?;
    let mut console = Stdout;

    match args.command {
        Some(Commands::Rect { rect1, rect2 }) => {
            let (default1, default2) = config
                .rectangles
                .rects()
                .map_err(|e| anyhow::anyhow!("Invalid rectangle in config: {}", e))?;
            let rect1 = rect_arg("--rect1", rect1.as_deref())?.unwrap_or(default1);
            let rect2 = rect_arg("--rect2", rect2.as_deref())?.unwrap_or(default2);
            run_rectangles(&rect1, &rect2, &mut console)?;
        }
        Some(Commands::Pairs {
            target,
            values,
            all,
            first,
            random,
            range,
        }) => {
            let mut pairs = config.pairs.clone();
            if let Some(target) = target {
                pairs.target = target;
            }
            if let Some(list) = values {
                pairs.values = parse::parse_values(&list)
                    .map_err(|e| anyhow::anyhow!("Invalid --values '{}': {}", list, e))?;
                pairs.use_random = false;
            }
            if random {
                pairs.use_random = true;
            }
            if all {
                pairs.find_all = true;
            }
            if first {
                pairs.find_all = false;
            }
            range.apply(&mut pairs);
            run_pairs(&pairs, &mut console)?;
        }
        Some(Commands::Generate { range }) => {
            let mut pairs = config.pairs.clone();
            range.apply(&mut pairs);
            let values = generate_values(&pairs)?;
            console.line(&join_values(&values));
        }
        None => {
            let (rect1, rect2) = config
                .rectangles
                .rects()
                .map_err(|e| anyhow::anyhow!("Invalid rectangle in config: {}", e))?;
            run_rectangles(&rect1, &rect2, &mut console)?;
            run_pairs(&config.pairs, &mut console)?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        log::warn!(
            "Configuration file {:?} not found. Using internal defaults.",
            path
        );
        return Ok(Config::default());
    }

    log::info!("Loading configuration from {:?}", path);
    let config_str = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;
    toml::from_str(&config_str).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
}

fn rect_arg(flag: &str, value: Option<&str>) -> anyhow::Result<Option<Rect>> {
    value
        .map(|s| {
            parse::parse_rect(s).map_err(|e| anyhow::anyhow!("Invalid {} '{}': {}", flag, s, e))
        })
        .transpose()
}

fn run_rectangles(rect1: &Rect, rect2: &Rect, console: &mut dyn Console) -> anyhow::Result<()> {
    log::info!("Intersecting {} with {}", rect1, rect2);

    let intersection = {
        let _timer = ScopedTimer::new("rectangle_intersection");
        kata_overlap::rectangle_intersection(rect1, rect2)
    };
    kata_overlap::check::verify_intersection(rect1, rect2, intersection.as_ref())
        .map_err(|e| anyhow::anyhow!("Verification Failed: {}", e))?;

    match intersection {
        Some(r) => {
            console.line(&format!("Upper Left: {}", r.upper_left()));
            console.line(&format!("Lower Right: {}", r.lower_right()));
        }
        None => console.line("No intersection"),
    }
    Ok(())
}

fn generate_values(pairs: &PairsConfig) -> anyhow::Result<Vec<i64>> {
    log::info!(
        "Generating {} random values in [{}, {}]",
        pairs.search_area,
        pairs.min,
        pairs.max
    );
    let mut rng = generator::seeded_rng(pairs.seed);
    generator::random_values(&mut rng, pairs.search_area, pairs.min, pairs.max)
        .map_err(|e| anyhow::anyhow!("Cannot generate values: {}", e))
}

fn run_pairs(pairs: &PairsConfig, console: &mut dyn Console) -> anyhow::Result<()> {
    let values = if pairs.use_random {
        generate_values(pairs)?
    } else {
        pairs.values.clone()
    };
    log::info!(
        "Searching {} values for pairs that add up to {}",
        values.len(),
        pairs.target
    );

    if pairs.find_all {
        let matches = {
            let _timer = ScopedTimer::new("find_all_pairs");
            find_all_pairs(&values, pairs.target)
        };
        kata_pairsum::check::verify_pairs(&values, pairs.target, &matches)
            .map_err(|e| anyhow::anyhow!("Verification Failed: {}", e))?;
        PairReport::new(&values, pairs.target, matches).emit(console, pairs.report_limit);
    } else {
        let found = {
            let _timer = ScopedTimer::new("find_first_pair");
            find_first_pair(&values, pairs.target)
        };
        match found {
            Some(m) => {
                kata_pairsum::check::verify_pairs(&values, pairs.target, &[m])
                    .map_err(|e| anyhow::anyhow!("Verification Failed: {}", e))?;
                console.line(&describe_first(&m, pairs.target));
            }
            None => console.line(&format!("No pair adds up to {}", pairs.target)),
        }
    }
    Ok(())
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(values: Vec<i64>, target: i64, find_all: bool) -> PairsConfig {
        PairsConfig {
            target,
            values,
            find_all,
            use_random: false,
            ..PairsConfig::default()
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn parses_pair_flags() {
        let args = Args::try_parse_from([
            "kata", "pairs", "--target", "-3", "--values", "1,-4", "--first",
        ])
        .unwrap();
        match args.command {
            Some(Commands::Pairs {
                target,
                values,
                first,
                all,
                random,
                ..
            }) => {
                assert_eq!(target, Some(-3));
                assert_eq!(values.as_deref(), Some("1,-4"));
                assert!(first && !all && !random);
            }
            _ => panic!("expected pairs subcommand"),
        }
    }

    #[test]
    fn sample_rectangles() {
        let mut out: Vec<String> = Vec::new();
        let r1 = Rect::from_coords(0.0, 0.0, 4.0, 4.0).unwrap();
        let r2 = Rect::from_coords(2.0, 2.0, 6.0, 6.0).unwrap();
        run_rectangles(&r1, &r2, &mut out).unwrap();
        assert_eq!(out, vec!["Upper Left: 2, 2", "Lower Right: 4, 4"]);

        let mut out: Vec<String> = Vec::new();
        let r3 = Rect::from_coords(4.0, 4.0, 6.0, 6.0).unwrap();
        run_rectangles(&r1, &r3, &mut out).unwrap();
        assert_eq!(out, vec!["No intersection"]);
    }

    #[test]
    fn first_pair_output() {
        let mut out: Vec<String> = Vec::new();
        run_pairs(&fixed((1..=10).collect(), 10, false), &mut out).unwrap();
        assert_eq!(out, vec!["Found 1 + 9 = 10 at [0, 8]"]);

        let mut out: Vec<String> = Vec::new();
        run_pairs(&fixed(vec![], 10, false), &mut out).unwrap();
        assert_eq!(out, vec!["No pair adds up to 10"]);
    }

    #[test]
    fn all_pairs_output() {
        let mut out: Vec<String> = Vec::new();
        run_pairs(&fixed((1..=10).collect(), 10, true), &mut out).unwrap();
        assert_eq!(out.len(), 9);
        assert_eq!(out[0], "Found 8 unique pairs that add up to 10.");
    }

    #[test]
    fn random_run_is_reproducible() {
        let pairs = PairsConfig {
            use_random: true,
            seed: Some(3),
            ..PairsConfig::default()
        };
        let mut first: Vec<String> = Vec::new();
        let mut second: Vec<String> = Vec::new();
        run_pairs(&pairs, &mut first).unwrap();
        run_pairs(&pairs, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_range_fails() {
        let pairs = PairsConfig {
            use_random: true,
            min: 9,
            max: 1,
            ..PairsConfig::default()
        };
        let mut out: Vec<String> = Vec::new();
        assert!(run_pairs(&pairs, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let config = load_config(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config.pairs.target, 10);
    }

    #[test]
    fn join() {
        assert_eq!(join_values(&[1, -2, 3]), "1, -2, 3");
        assert_eq!(join_values(&[]), "");
    }
}
