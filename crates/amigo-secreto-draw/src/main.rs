//! # Amigo Secreto draw
//!
//! Draws the gift cycle and writes the datastore read by the lookup handler.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use amigo_secreto_draw::codes::{CodeGenerator, DEFAULT_CODE_LENGTH};
use amigo_secreto_draw::draw::{self, DEFAULT_MAX_ATTEMPTS};
use amigo_secreto_draw::output::{self, write_json};
use amigo_secreto_draw::ParticipantsFile;

#[derive(Parser)]
#[command(name = "amigo-secreto-draw")]
#[command(version)]
#[command(about = "Draw Amigo Secreto assignments and write the lookup datastore", long_about = None)]
struct Cli {
    /// Participants file (JSON with `participantes` and optional `restricciones`)
    #[arg(short, long)]
    input: PathBuf,

    /// Private datastore read by the lookup handler
    #[arg(short, long, default_value = "db_amigo_secreto.json")]
    output: PathBuf,

    /// Public listing without secret friends
    #[arg(long, default_value = "db_participantes.json")]
    public_output: PathBuf,

    /// Give up after this many rejected draws
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Length of each access code
    #[arg(long, default_value_t = DEFAULT_CODE_LENGTH)]
    code_length: usize,

    /// Seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let input = ParticipantsFile::load(&cli.input)?;
    tracing::info!(
        participants = input.participantes.len(),
        path = %cli.input.display(),
        "Participants loaded"
    );
    for participant in &input.participantes {
        tracing::debug!(
            nombre = %participant.nombre,
            grupo = participant.grupo.as_deref().unwrap_or("-"),
            "Participant"
        );
    }

    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let (pairs, attempts) = draw::run(&input.participantes, &input.restricciones, cli.max_attempts, &mut rng)?;
    tracing::info!(attempts, "Valid assignment found");

    let mut codes = CodeGenerator::new(cli.code_length)?;
    let entries = output::build_entries(&pairs, &mut codes, &mut rng)?;

    println!("Participant | Access code");
    for entry in &entries {
        println!("{} | {}", entry.nombre_participante, entry.codigo_acceso);
    }

    write_json(&cli.output, &entries)?;
    tracing::info!(path = %cli.output.display(), "Datastore written");

    write_json(&cli.public_output, &output::public_entries(&entries))?;
    tracing::info!(path = %cli.public_output.display(), "Public listing written");

    Ok(())
}
