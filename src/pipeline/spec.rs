//! Analysis run configuration.
//!
//! An [`AnalysisSpec`] tells the loader where the lexicon lives and sets
//! runtime limits for the batch runner. These types are the input to the
//! [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "lexicon": {
//!     "stopwords_dir": "StopWords",
//!     "dictionary_dir": "MasterDictionary"
//!   },
//!   "runtime": { "max_chars": 5000000, "min_parallel_docs": 16 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Batches smaller than this run sequentially unless overridden.
pub const DEFAULT_MIN_PARALLEL_DOCS: usize = 16;

/// Top-level analysis specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Where the lexicon files live.
    #[serde(default)]
    pub lexicon: LexiconSpec,

    /// Runtime execution limits.
    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for AnalysisSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            lexicon: LexiconSpec::default(),
            runtime: RuntimeSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl AnalysisSpec {
    /// Parse a spec from a JSON string
    pub fn from_json(json: &str) -> AnalysisResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a spec file
    pub fn from_path(path: impl AsRef<Path>) -> AnalysisResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| AnalysisError::io(path, e))?;
        Self::from_json(&json)
    }
}

/// Lexicon locations on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconSpec {
    /// Directory whose files are all stop-word lists.
    #[serde(default = "default_stopwords_dir")]
    pub stopwords_dir: PathBuf,

    /// Directory holding the two sentiment word lists.
    #[serde(default = "default_dictionary_dir")]
    pub dictionary_dir: PathBuf,

    /// Positive word list, relative to `dictionary_dir`.
    #[serde(default = "default_positive_file")]
    pub positive_file: String,

    /// Negative word list, relative to `dictionary_dir`.
    #[serde(default = "default_negative_file")]
    pub negative_file: String,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl LexiconSpec {
    pub fn positive_path(&self) -> PathBuf {
        self.dictionary_dir.join(&self.positive_file)
    }

    pub fn negative_path(&self) -> PathBuf {
        self.dictionary_dir.join(&self.negative_file)
    }
}

impl Default for LexiconSpec {
    fn default() -> Self {
        Self {
            stopwords_dir: default_stopwords_dir(),
            dictionary_dir: default_dictionary_dir(),
            positive_file: default_positive_file(),
            negative_file: default_negative_file(),
            unknown_fields: HashMap::new(),
        }
    }
}

fn default_stopwords_dir() -> PathBuf {
    PathBuf::from("StopWords")
}

fn default_dictionary_dir() -> PathBuf {
    PathBuf::from("MasterDictionary")
}

fn default_positive_file() -> String {
    "positive-words.txt".to_string()
}

fn default_negative_file() -> String {
    "negative-words.txt".to_string()
}

/// Runtime execution limits (fail-soft guards).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Documents longer than this many characters are not analyzed.
    #[serde(default)]
    pub max_chars: Option<usize>,

    /// Minimum batch size before documents are scored in parallel.
    #[serde(default)]
    pub min_parallel_docs: Option<usize>,

    /// Worker threads for a dedicated pool (rayon's default when unset).
    #[serde(default)]
    pub threads: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl RuntimeSpec {
    pub fn parallel_threshold(&self) -> usize {
        self.min_parallel_docs.unwrap_or(DEFAULT_MIN_PARALLEL_DOCS)
    }
}
