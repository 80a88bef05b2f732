use std::error::Error;
use std::path::{Path, PathBuf};

use esolid_lattice::RunConfig;

pub mod frames;
pub mod run;

/// Loads the run configuration, applying CLI overrides for seed and output
/// directory on top of the YAML document (or the defaults when no file is
/// given).
pub fn load_config(
    path: Option<&Path>,
    seed: Option<u64>,
    out: Option<&PathBuf>,
) -> Result<RunConfig, Box<dyn Error>> {
    let mut config = match path {
        Some(path) => {
            let document = std::fs::read_to_string(path)?;
            RunConfig::from_yaml(&document)?
        }
        None => RunConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(out) = out {
        config.output.run_directory = Some(out.clone());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let config = load_config(None, None, None).unwrap();
        assert_eq!(config.cells, 400);
        assert!(config.output.run_directory.is_none());
    }

    #[test]
    fn cli_overrides_win_over_the_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cells: 25\nseed: 1").unwrap();

        let out = PathBuf::from("artefacts");
        let config = load_config(Some(file.path()), Some(9), Some(&out)).unwrap();
        assert_eq!(config.cells, 25);
        assert_eq!(config.seed, 9);
        assert_eq!(config.output.run_directory.as_deref(), Some(out.as_path()));
    }

    #[test]
    fn invalid_documents_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cells: 0").unwrap();
        assert!(load_config(Some(file.path()), None, None).is_err());
    }
}
