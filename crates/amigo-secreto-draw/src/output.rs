//! Datastore files produced by a draw.
//!
//! The private file holds each giver's secret friend and is what the lookup
//! handler reads. The public file only lists names and codes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::codes::CodeGenerator;
use crate::draw::Pair;
use crate::error::{DrawError, Result};

/// Private datastore record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub nombre_participante: String,
    pub codigo_acceso: String,
    pub nombre_amigo_secreto: String,
}

/// Public listing record: no secret friend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicEntry {
    pub nombre_participante: String,
    pub codigo_acceso: String,
}

impl From<&Entry> for PublicEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            nombre_participante: entry.nombre_participante.clone(),
            codigo_acceso: entry.codigo_acceso.clone(),
        }
    }
}

/// Give every giver a fresh access code.
pub fn build_entries(
    pairs: &[Pair<'_>],
    codes: &mut CodeGenerator,
    rng: &mut fastrand::Rng,
) -> Result<Vec<Entry>> {
    pairs
        .iter()
        .map(|pair| -> Result<Entry> {
            Ok(Entry {
                nombre_participante: pair.giver.nombre.clone(),
                codigo_acceso: codes.generate(rng)?,
                nombre_amigo_secreto: pair.receiver.nombre.clone(),
            })
        })
        .collect()
}

pub fn public_entries(entries: &[Entry]) -> Vec<PublicEntry> {
    entries.iter().map(PublicEntry::from).collect()
}

/// Write `value` as indented UTF-8 JSON, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| DrawError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| DrawError::Write {
        path: path.to_path_buf(),
        source,
    })
}
