//! Participants and group restrictions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{DrawError, Result};

/// Someone taking part in the draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub nombre: String,
    /// Group used by [`Restrictions`]. Participants without one are never restricted.
    #[serde(default)]
    pub grupo: Option<String>,
}

impl Participant {
    pub fn new(nombre: impl Into<String>, grupo: Option<&str>) -> Self {
        Self {
            nombre: nombre.into(),
            grupo: grupo.map(str::to_string),
        }
    }
}

/// Giver group -> receiver groups it may not give to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Restrictions(HashMap<String, Vec<String>>);

impl Restrictions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbid members of `giver` from giving to members of `receiver`.
    pub fn forbid(mut self, giver: impl Into<String>, receiver: impl Into<String>) -> Self {
        self.0.entry(giver.into()).or_default().push(receiver.into());
        self
    }

    pub fn is_forbidden(&self, giver: &str, receiver: &str) -> bool {
        self.0
            .get(giver)
            .map(|forbidden| forbidden.iter().any(|g| g == receiver))
            .unwrap_or(false)
    }
}

/// Input file of the draw tool.
///
/// ```json
/// {
///   "participantes": [{"nombre": "Emilio", "grupo": "A"}],
///   "restricciones": {"C": ["E"]}
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantsFile {
    pub participantes: Vec<Participant>,
    #[serde(default)]
    pub restricciones: Restrictions,
}

impl ParticipantsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| DrawError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| DrawError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
