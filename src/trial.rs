//! Defines [`TrialRef`], the handle of a recorded trial.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::{Path, PathBuf};


/// An opaque reference to one recorded trial,
/// typically the directory holding its sensor files and `label.csv`.
/// The fusion layer never looks inside; sub-classifiers and label sources do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
pub struct TrialRef(PathBuf);


impl TrialRef {
    /// Construct a new trial reference.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self(path.into())
    }


    /// Returns the underlying path.
    pub fn as_path(&self) -> &Path {
        &self.0
    }


    /// Returns `<self>/<file>`.
    pub fn join<P: AsRef<Path>>(&self, file: P) -> PathBuf {
        self.0.join(file)
    }
}


impl From<&str> for TrialRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}


impl From<String> for TrialRef {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}


impl From<PathBuf> for TrialRef {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}


impl From<&Path> for TrialRef {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}


impl AsRef<Path> for TrialRef {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}


impl fmt::Display for TrialRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
