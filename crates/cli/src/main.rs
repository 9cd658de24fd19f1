use std::fs;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use license_glyph::canonicalize_or_current;

use glyph_core::convert::{convert_to_glyph, ConvertError};
use glyph_core::glyph::{Glyph, GLYPH_FILE_NAME};
use glyph_core::registry::{build_registry, load_registry, StoreLayout};
use glyph_core::resolver::{Resolution, Resolver, VerifyOutcome};

/// Content-addressed license registry and glyph resolver CLI.
///
/// This CLI is a thin wrapper around `glyph-core` (exposed in code as
/// `glyph_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "license-glyph",
    version,
    about = "Resolve and verify LICENSE.glyph references against a content-addressed registry",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rebuild the license registry from the store's canonical texts.
    ///
    /// Scans `<store>/licenses/*.txt`, derives a content identifier for each
    /// file, and rewrites `<store>/LICENSE_REGISTRY.json` in full.
    Build {
        /// License store root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        store: String,
    },

    /// Verify a project's LICENSE.glyph against the registry.
    ///
    /// Exits non-zero when the glyph file is missing or its identifier does
    /// not match any registered license.
    Verify {
        /// Project root directory containing LICENSE.glyph. Defaults to the
        /// current working directory.
        #[arg(default_value = ".")]
        path: String,

        /// License store root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        store: String,
    },

    /// Resolve a glyph file and print the canonical license text.
    Resolve {
        /// Glyph file to resolve. Defaults to LICENSE.glyph.
        #[arg(default_value = GLYPH_FILE_NAME)]
        file: String,

        /// License store root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        store: String,
    },

    /// Convert a traditional license file into a LICENSE.glyph document.
    ///
    /// Detects the license family from the text, looks it up in the registry,
    /// and writes a reference document pointing at its content identifier.
    Convert {
        /// License file to convert. Defaults to LICENSE.
        #[arg(default_value = "LICENSE")]
        license: String,

        /// Output path for the glyph document.
        #[arg(long, default_value = GLYPH_FILE_NAME)]
        output: String,

        /// License store root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        store: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { store } => build_command(&store)?,
        Command::Verify { path, store } => verify_command(&path, &store)?,
        Command::Resolve { file, store } => resolve_command(&file, &store)?,
        Command::Convert { license, output, store } => {
            convert_command(&license, &output, &store)?
        }
    }

    Ok(())
}

/// Compute the store layout for a `--store` argument.
fn store_layout(store: &str) -> Result<StoreLayout> {
    let root = canonicalize_or_current(store)?;
    Ok(StoreLayout::new(root))
}

/// Rebuild the registry from the store's licenses directory.
fn build_command(store: &str) -> Result<()> {
    let layout = store_layout(store)?;
    let registry = build_registry(&layout)?;

    println!("Registered licenses ({}):", registry.len());
    for (name, record) in &registry {
        println!("  - {}: {}", name, record.cid);
    }
    println!("Registry written to {}", layout.registry_path.display());

    Ok(())
}

/// Verify a project's LICENSE.glyph; exit non-zero on failure.
fn verify_command(path: &str, store: &str) -> Result<()> {
    let layout = store_layout(store)?;
    let resolver = Resolver::open(layout)?;

    let project_root = canonicalize_or_current(path)?;
    match resolver.verify(&project_root)? {
        VerifyOutcome::MissingGlyph { path } => {
            println!("No {} found at {}", GLYPH_FILE_NAME, path.display());
            process::exit(1);
        }
        VerifyOutcome::Resolved { glyph, resolution } => match resolution {
            Resolution::Verified { name, cid, .. } => {
                println!("Licensed under {name} (CID: {cid})");
                println!("Protocol: {}", glyph.protocol().unwrap_or("-"));
            }
            Resolution::Unverified { error, cid } => {
                println!("Verification failed: {error} (CID: {cid})");
                process::exit(1);
            }
        },
    }

    Ok(())
}

/// Resolve a glyph file and print the canonical text; exit non-zero on failure.
fn resolve_command(file: &str, store: &str) -> Result<()> {
    let layout = store_layout(store)?;
    let resolver = Resolver::open(layout)?;

    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read glyph file {file}"))?;
    let glyph = Glyph::parse(&text);

    match resolver.resolve(&glyph)? {
        Resolution::Verified { text, .. } => {
            print!("{text}");
        }
        Resolution::Unverified { error, cid } => {
            println!("Resolution failed: {error} (CID: {cid})");
            process::exit(1);
        }
    }

    Ok(())
}

/// Convert a traditional license file into a glyph document; exit non-zero
/// when the license cannot be classified or is not registered.
fn convert_command(license: &str, output: &str, store: &str) -> Result<()> {
    let layout = store_layout(store)?;
    let registry = load_registry(&layout.registry_path)?;

    let text = fs::read_to_string(license)
        .with_context(|| format!("Failed to read license file {license}"))?;

    let converted = match convert_to_glyph(&text, &registry) {
        Ok(converted) => converted,
        Err(err @ (ConvertError::UnknownLicenseType | ConvertError::Unregistered(_))) => {
            println!("{err}");
            process::exit(1);
        }
    };

    fs::write(output, &converted.document)
        .with_context(|| format!("Failed to write glyph document {output}"))?;

    println!("Created {output}");
    println!("License: {}", converted.name);
    println!("CID: {}", converted.cid);

    Ok(())
}
