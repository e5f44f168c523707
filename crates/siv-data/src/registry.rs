//! The in-memory dataset registry.
//!
//! Built once at process start; afterwards every lookup returns a shared
//! reference to the same immutable frame. Shaping code that needs coerced
//! types works on copies, never on the registered frame.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use siv_core::{SivError, SivResult};
use tracing::info;

/// Named, immutable tabular datasets.
#[derive(Debug)]
pub struct DatasetRegistry {
    frames: BTreeMap<String, DataFrame>,
}

impl DatasetRegistry {
    /// Load `<dir>/<name>.csv` for every requested name.
    ///
    /// Any unreadable or unparsable file is fatal: the dashboard must not
    /// start with a partial registry.
    pub fn load_dir(dir: &Path, names: &[&str]) -> SivResult<Self> {
        let mut frames = BTreeMap::new();
        for name in names {
            let path = dir.join(format!("{name}.csv"));
            let frame = read_csv(&path)?;
            info!(dataset = *name, rows = frame.height(), "loaded dataset");
            frames.insert((*name).to_string(), frame);
        }
        Ok(DatasetRegistry { frames })
    }

    /// Build a registry from frames already in memory.
    pub fn from_frames(frames: impl IntoIterator<Item = (String, DataFrame)>) -> Self {
        DatasetRegistry {
            frames: frames.into_iter().collect(),
        }
    }

    /// Look a dataset up by name.
    pub fn get(&self, name: &str) -> SivResult<&DataFrame> {
        self.frames
            .get(name)
            .ok_or_else(|| SivError::MissingDataset(name.to_string()))
    }

    /// Registered dataset names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.frames.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

fn read_csv(path: &Path) -> SivResult<DataFrame> {
    let mut file = File::open(path)
        .map_err(|e| SivError::Other(format!("opening dataset '{}': {e}", path.display())))?;
    let frame = CsvReader::new(&mut file)
        .has_header(true)
        .finish()
        .map_err(|e| SivError::Other(format!("reading dataset '{}': {e}", path.display())))?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_dir_reads_each_named_csv() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("gini.csv"),
            "País,Años,valor,Área geográfica\nUruguay,2002,0.45,Nacional\n",
        )
        .unwrap();
        let registry = DatasetRegistry::load_dir(dir.path(), &["gini"]).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("gini").unwrap().height(), 1);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let err = DatasetRegistry::load_dir(dir.path(), &["gini"]).unwrap_err();
        assert!(err.to_string().contains("gini"));
    }

    #[test]
    fn test_unknown_name_lookup() {
        let registry = DatasetRegistry::from_frames([]);
        assert!(matches!(
            registry.get("gini"),
            Err(SivError::MissingDataset(_))
        ));
    }

    #[test]
    fn test_from_frames_keeps_names() {
        let frame = df!["País" => &["Chile"]].unwrap();
        let registry = DatasetRegistry::from_frames([("gini".to_string(), frame)]);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["gini"]);
    }
}
