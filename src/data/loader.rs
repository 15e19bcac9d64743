use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{debug, info};

use crate::QuizError;
use crate::models::Poem;

pub const DEFAULT_POEMS_PATH: &str = "./hyakunin_isshu.json";

/// Failure to produce a usable corpus from a data file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} must contain at least one poem", path.display())]
    Empty { path: PathBuf },
}

/// In-memory, read-only poem corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoemStore {
    poems: Vec<Poem>,
}

impl PoemStore {
    pub fn new(poems: Vec<Poem>) -> Self {
        Self { poems }
    }

    /// Load the corpus from a JSON array of poem objects.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();

        let json_content = fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let poems: Vec<Poem> =
            serde_json::from_str(&json_content).map_err(|source| DataError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if poems.is_empty() {
            return Err(DataError::Empty {
                path: path.to_path_buf(),
            });
        }

        info!(path = %path.display(), count = poems.len(), "loaded poem corpus");
        Ok(Self::new(poems))
    }

    pub fn len(&self) -> usize {
        self.poems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }

    pub fn poems(&self) -> &[Poem] {
        &self.poems
    }

    pub fn get(&self, id: u32) -> Option<&Poem> {
        self.poems.iter().find(|poem| poem.id == id)
    }

    /// Pick one poem uniformly at random.
    pub fn pick_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Poem, QuizError> {
        self.poems.choose(rng).ok_or(QuizError::EmptyCorpus)
    }

    /// Draw up to `count` distinct poems uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<&Poem>, QuizError> {
        if self.poems.is_empty() {
            return Err(QuizError::EmptyCorpus);
        }

        let sample: Vec<&Poem> = self.poems.choose_multiple(rng, count).collect();
        debug!(requested = count, drawn = sample.len(), "sampled poems");
        Ok(sample)
    }
}
