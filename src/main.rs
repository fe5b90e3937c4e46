use anyhow::{Context, Result};
use clap::Parser;
use q15gen::fixture::{generate, FixtureParams};
use q15gen::io::{write_fixture, GOLDEN_FILE, VECTORS_FILE, WEIGHTS_FILE};
use q15gen::quant::RoundingMode;
use q15gen::rng::Generator;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "q15gen", version, about = "Generate Q1.15 dot-product test vectors and golden outputs")]
struct Args {
    /// Input vector length
    #[arg(long, default_value_t = 8)]
    n: usize,

    /// Neuron count (weight rows)
    #[arg(long, default_value_t = 4)]
    m: usize,

    /// Deterministic random seed (negative values seed like their magnitude)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    seed: i64,

    /// Quantizer tie-break
    #[arg(long, value_enum, default_value_t = RoundingMode::HalfEven)]
    rounding: RoundingMode,

    /// Random source; mt19937 matches the Python reference generator
    #[arg(long, value_enum, default_value_t = Generator::Mt19937)]
    generator: Generator,

    /// Directory receiving the three JSON files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = FixtureParams {
        n: a.n,
        m: a.m,
        seed: a.seed,
        rounding: a.rounding,
        generator: a.generator,
    };
    let fixture = generate(&params).context("generate fixture")?;
    write_fixture(&fixture, &a.out_dir).with_context(|| format!("write fixture to {}", a.out_dir.display()))?;
    println!("{}", confirmation());
    Ok(())
}

fn confirmation() -> String {
    format!("Wrote {}, {}, {}", VECTORS_FILE, WEIGHTS_FILE, GOLDEN_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let a = Args::parse_from(["q15gen"]);
        assert_eq!((a.n, a.m, a.seed), (8, 4, 0));
        assert_eq!(a.rounding, RoundingMode::HalfEven);
        assert_eq!(a.generator, Generator::Mt19937);
        assert_eq!(a.out_dir, PathBuf::from("."));
    }

    #[test]
    fn explicit_flags() {
        let a = Args::parse_from(["q15gen", "--n", "2", "--m", "1", "--seed", "42"]);
        assert_eq!((a.n, a.m, a.seed), (2, 1, 42));

        let a = Args::parse_from([
            "q15gen",
            "--rounding",
            "half-away-from-zero",
            "--generator",
            "small",
            "--out-dir",
            "target/cli",
        ]);
        assert_eq!(a.rounding, RoundingMode::HalfAwayFromZero);
        assert_eq!(a.generator, Generator::Small);
        assert_eq!(a.out_dir, PathBuf::from("target/cli"));
    }

    #[test]
    fn negative_seed_parses() {
        let a = Args::parse_from(["q15gen", "--seed", "-42", "--n", "2", "--m", "1"]);
        assert_eq!(a.seed, -42);
        assert_eq!(Args::parse_from(["q15gen", "--seed=-42"]).seed, -42);
    }

    #[test]
    fn rejects_negative_length() {
        assert!(Args::try_parse_from(["q15gen", "--n", "-1"]).is_err());
        assert!(Args::try_parse_from(["q15gen", "--seed", "abc"]).is_err());
    }

    #[test]
    fn confirmation_names_the_three_files() {
        assert_eq!(confirmation(), "Wrote vectors.json, weights.json, golden.json");
    }
}
