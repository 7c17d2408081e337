use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::error::Result;
use crate::loss::loss_type::GanObjective;

/// Serializable choice of adversarial objective.
///
/// Kept apart from any model so a run can record which losses it trained
/// with. A file without an `objective` key loads as `minimax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LossConfig {
    #[serde(default)]
    pub objective: GanObjective,
}

impl LossConfig {
    pub fn new(objective: GanObjective) -> Self {
        LossConfig { objective }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        debug!(path, objective = ?self.objective, "saved loss config");
        Ok(())
    }

    /// Deserializes a `LossConfig` from a JSON file written by `save_json`.
    pub fn load_json(path: &str) -> Result<LossConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: LossConfig = serde_json::from_reader(reader)?;
        debug!(path, objective = ?config.objective, "loaded loss config");
        Ok(config)
    }
}
