//! Thin CLI wrapper over `kryptos-core` / `kryptos-verify`.
//!
//! Each subcommand is a direct call into one core/verify function; no
//! scoring, reporting, or sweeping logic lives here (spec.md §6, "no CLI
//! surface is part of the core").

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kryptos_core::alphabet::{parse_letters, letter_to_ascii};
use kryptos_core::anchors::{Anchor, canonical_anchors};
use kryptos_core::schedule::ScheduleShape;
use kryptos_proof::ProofDigest;
use kryptos_verify::{Feasibility, rederive};

/// Constraint solver and verifier for a periodic polyalphabetic key schedule.
#[derive(Debug, Parser)]
#[command(name = "kryptos")]
#[command(about = "Solve or verify a fixed-length classical-cipher key schedule")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Force the canonical anchors (plus any extra anchors/tail given) into
    /// a schedule shape and report the feasibility verdict.
    Solve {
        /// Path to a 97-letter ciphertext file.
        #[arg(long)]
        ciphertext: PathBuf,
        /// Path to a JSON `ScheduleShape` (six wheels in class order).
        #[arg(long)]
        shape: PathBuf,
        /// Extra anchor in `start:TEXT` form, repeatable. The three
        /// canonical anchors (EAST/NORTHEAST/BERLINCLOCK) are always
        /// included.
        #[arg(long = "anchor", value_parser = parse_anchor_arg)]
        anchors: Vec<Anchor>,
        /// Emit the proof digest JSON on success.
        #[arg(long)]
        emit_digest: bool,
    },
    /// Rederive the schedule from ciphertext + candidate plaintext and check
    /// the round trip.
    Verify {
        /// Path to a 97-letter ciphertext file.
        #[arg(long)]
        ciphertext: PathBuf,
        /// Path to a 97-letter candidate plaintext file.
        #[arg(long)]
        plaintext: PathBuf,
        /// Path to a JSON `ScheduleShape` (six wheels in class order).
        #[arg(long)]
        shape: PathBuf,
        /// Expected plaintext SHA-256 to check the rederived digest against.
        #[arg(long)]
        expect_sha256: Option<String>,
    },
}

fn parse_anchor_arg(raw: &str) -> Result<Anchor, String> {
    let (start, text) = raw.split_once(':').ok_or_else(|| {
        format!("expected `start:TEXT`, got `{raw}`")
    })?;
    let start: usize = start.parse().map_err(|e| format!("invalid start index: {e}"))?;
    Anchor::from_str(start, text).map_err(|e| e.to_string())
}

fn read_letters(path: &PathBuf) -> Result<Vec<u8>, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| format!("reading {path:?}: {e}"))?;
    parse_letters(raw.trim().to_ascii_uppercase().trim())
        .map_err(|offset| format!("{path:?} byte {offset} is not an uppercase ASCII letter"))
}

fn read_shape(path: &PathBuf) -> Result<ScheduleShape, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| format!("reading {path:?}: {e}"))?;
    serde_json::from_str(&raw).map_err(|e| format!("parsing shape {path:?}: {e}"))
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve { ciphertext, shape, anchors, emit_digest } => {
            let ciphertext = read_letters(&ciphertext)?;
            let shape = read_shape(&shape)?;
            let mut all_anchors = canonical_anchors();
            all_anchors.extend(anchors);

            tracing::debug!(anchor_count = all_anchors.len(), "running feasibility oracle");
            match kryptos_verify::feasible(&ciphertext, &all_anchors, &shape) {
                Feasibility::Feasible(schedule) => {
                    println!("feasible");
                    if emit_digest {
                        let digest = ProofDigest::from_schedule(&schedule, false);
                        println!("{}", digest.to_json().map_err(|e| e.to_string())?);
                    }
                    Ok(())
                }
                verdict => Err(format!("{verdict:?}")),
            }
        }
        Command::Verify { ciphertext, plaintext, shape, expect_sha256 } => {
            let ciphertext = read_letters(&ciphertext)?;
            let plaintext = read_letters(&plaintext)?;
            let shape = read_shape(&shape)?;

            tracing::debug!("running rederivation verifier");
            let outcome = match expect_sha256 {
                Some(expected) => kryptos_verify::rederive::rederive_and_check_sha(
                    &ciphertext, &plaintext, &shape, &expected,
                ),
                None => rederive(&ciphertext, &plaintext, &shape),
            }
            .map_err(|e| e.to_string())?;

            let ascii: String = plaintext.iter().map(|&l| letter_to_ascii(l) as char).collect();
            println!("verified");
            println!("plaintext: {ascii}");
            println!("plaintext_sha256: {}", outcome.plaintext_sha256);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
