use anyhow::Context;
use clap::Parser;
use q15gen::io::read_fixture;
use std::path::PathBuf;

// Re-reads vectors.json / weights.json / golden.json and recomputes every
// golden value. Exits 1 on any shape or value mismatch.

#[derive(Parser, Debug)]
#[command(name = "check_fixture", about = "Verify a generated Q1.15 fixture against the reference dot product")]
struct Args {
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let fx = read_fixture(&a.dir).with_context(|| format!("read fixture from {}", a.dir.display()))?;
    if let Err(e) = fx.verify() {
        eprintln!("fixture in {} is inconsistent: {}", a.dir.display(), e);
        std::process::exit(1);
    }
    println!("ok: n={} m={} golden={:?}", fx.n(), fx.m(), fx.golden);
    Ok(())
}
