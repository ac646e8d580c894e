//! Chart container: a song's set of named difficulties.

use arrayvec::ArrayString;
use tracing::debug;

use crate::difficulty::Difficulty;
use crate::error::EditError;

/// A chart for one song, holding any number of named difficulties.
#[derive(Clone, Debug, Default)]
pub struct Chart {
    /// Song title
    pub title: ArrayString<32>,
    difficulties: Vec<Difficulty>,
}

impl Chart {
    /// Create a new empty chart.
    pub fn new(title: &str) -> Self {
        let mut chart = Self::default();
        let _ = chart.title.try_push_str(title);
        chart
    }

    /// Add an empty difficulty and return it for further editing.
    ///
    /// Difficulty names are unique within a chart; reusing one returns
    /// [`EditError::DifficultyAlreadyExists`].
    pub fn create_difficulty(&mut self, name: &str) -> Result<&mut Difficulty, EditError> {
        if self.difficulty(name).is_some() {
            return Err(EditError::DifficultyAlreadyExists(name.into()));
        }

        debug!("created difficulty {:?}", name);
        self.difficulties.push(Difficulty::new(name));
        let last = self.difficulties.len() - 1;
        Ok(&mut self.difficulties[last])
    }

    /// Look a difficulty up by name.
    pub fn difficulty(&self, name: &str) -> Option<&Difficulty> {
        self.difficulties.iter().find(|diff| diff.name.as_str() == name)
    }

    /// Look a difficulty up by name, mutably.
    pub fn difficulty_mut(&mut self, name: &str) -> Option<&mut Difficulty> {
        self.difficulties
            .iter_mut()
            .find(|diff| diff.name.as_str() == name)
    }

    /// Delete a difficulty by name. Does nothing when absent.
    pub fn delete_difficulty(&mut self, name: &str) {
        let before = self.difficulties.len();
        self.difficulties.retain(|diff| diff.name.as_str() != name);
        if self.difficulties.len() != before {
            debug!("deleted difficulty {:?}", name);
        }
    }

    /// All difficulties, in creation order.
    pub fn difficulties(&self) -> &[Difficulty] {
        &self.difficulties
    }
}
