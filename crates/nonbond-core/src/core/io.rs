use crate::core::models::ParticleProps;
use nalgebra::Vector3;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PairTableError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// One candidate pair as read from a CSV pair table.
///
/// Columns: `q_i, q_j, sigma_i, sigma_j, dx, dy, dz, special`. The
/// displacement is assumed already boundary-corrected; sigma columns may be
/// zero for models that do not read them.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PairRecord {
    pub q_i: f64,
    pub q_j: f64,
    #[serde(default)]
    pub sigma_i: f64,
    #[serde(default)]
    pub sigma_j: f64,
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    #[serde(default)]
    pub special: bool,
}

impl PairRecord {
    pub fn displacement(&self) -> Vector3<f64> {
        Vector3::new(self.dx, self.dy, self.dz)
    }

    pub fn props_i(&self) -> ParticleProps {
        ParticleProps::new(self.q_i, self.sigma_i)
    }

    pub fn props_j(&self) -> ParticleProps {
        ParticleProps::new(self.q_j, self.sigma_j)
    }
}

/// Reads a pair table from a headered CSV file.
pub fn load_pairs(path: &Path) -> Result<Vec<PairRecord>, PairTableError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| PairTableError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    let mut pairs = Vec::new();
    for result in reader.deserialize::<PairRecord>() {
        let record = result.map_err(|e| PairTableError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        pairs.push(record);
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_pairs_reads_headered_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        fs::write(
            &path,
            "q_i,q_j,sigma_i,sigma_j,dx,dy,dz,special\n\
             1.0,-1.0,0.3,0.3,0.3,0.0,0.0,false\n\
             0.5,0.5,0.0,0.0,0.0,0.4,0.0,true\n",
        )
        .unwrap();

        let pairs = load_pairs(&path).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].displacement(), Vector3::new(0.3, 0.0, 0.0));
        assert_eq!(pairs[0].props_j().charge, -1.0);
        assert!(!pairs[0].special);
        assert!(pairs[1].special);
    }

    #[test]
    fn load_pairs_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_pairs(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(PairTableError::Csv { .. })));
    }

    #[test]
    fn load_pairs_fails_for_short_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "q_i,q_j,sigma_i,sigma_j,dx,dy,dz,special\n1.0\n").unwrap();
        let result = load_pairs(&path);
        assert!(matches!(result, Err(PairTableError::Csv { .. })));
    }
}
