//! JSON artifacts: `vectors.json`, `weights.json` and `golden.json`.
//!
//! Each file holds one object with a single field. Output is pretty-printed
//! with two-space indentation, one array element per line and no trailing
//! newline, which is byte-for-byte what Python's `json.dump(obj, f, indent=2)`
//! emits for integer arrays.

use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use crate::error::Result;
use crate::fixture::Fixture;

pub const VECTORS_FILE: &str = "vectors.json";
pub const WEIGHTS_FILE: &str = "weights.json";
pub const GOLDEN_FILE: &str = "golden.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    #[serde(rename = "in")]
    pub input: Vec<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WeightRecord {
    pub weights: Vec<Vec<i64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GoldenRecord {
    pub golden: Vec<i64>,
}

fn write_record<T: Serialize>(path: &Path, rec: &T) -> Result<()> {
    // File::create truncates whatever was there
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, rec)?;
    w.flush()?;
    debug!("wrote {}", path.display());
    Ok(())
}

fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let r = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(r)?)
}

/// Write the three artifacts into `out_dir` and return their paths.
pub fn write_fixture<P: AsRef<Path>>(fixture: &Fixture, out_dir: P) -> Result<Vec<PathBuf>> {
    let dir = out_dir.as_ref();
    create_dir_all(dir)?;
    let paths = vec![dir.join(VECTORS_FILE), dir.join(WEIGHTS_FILE), dir.join(GOLDEN_FILE)];
    write_record(&paths[0], &InputRecord { input: fixture.input.clone() })?;
    write_record(&paths[1], &WeightRecord { weights: fixture.weights.clone() })?;
    write_record(&paths[2], &GoldenRecord { golden: fixture.golden.clone() })?;
    Ok(paths)
}

/// Load the three artifacts back. Shapes are not checked here; see `Fixture::verify`.
pub fn read_fixture<P: AsRef<Path>>(dir: P) -> Result<Fixture> {
    let dir = dir.as_ref();
    let input: InputRecord = read_record(&dir.join(VECTORS_FILE))?;
    let weights: WeightRecord = read_record(&dir.join(WEIGHTS_FILE))?;
    let golden: GoldenRecord = read_record(&dir.join(GOLDEN_FILE))?;
    Ok(Fixture { input: input.input, weights: weights.weights, golden: golden.golden })
}
