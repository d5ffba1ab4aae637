//! Amigo Secreto draw generator.
//!
//! Pairs participants into a single gift cycle that respects group
//! restrictions, hands each giver a unique access code, and writes the
//! datastore the lookup handler reads.

pub mod codes;
pub mod draw;
pub mod error;
pub mod output;
pub mod participant;

pub use codes::CodeGenerator;
pub use draw::{run, Pair};
pub use error::{DrawError, Result};
pub use output::{Entry, PublicEntry};
pub use participant::{Participant, ParticipantsFile, Restrictions};
