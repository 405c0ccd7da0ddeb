//! Loads resume input: a JSON description plus an optional sidecar photo.

use anyhow::{Context, Result};
use image::ImageFormat;
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::resume::ResumeData;

/// On-disk shape of the resume file: the resume fields plus an optional path
/// to a PNG/JPEG photo, resolved relative to the JSON file.
#[derive(Debug, Deserialize)]
struct ResumeFile {
    #[serde(flatten)]
    resume: ResumeData,
    photo_path: Option<PathBuf>,
}

/// Reads and validates a resume JSON file.
///
/// A missing or undecodable photo is a warning, never an error: the resume
/// still lays out, just without the photo section.
pub fn read_resume(path: &str) -> Result<ResumeData> {
    debug!("Opening resume file: {}", path);
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read resume file: {}", path))?;

    let file: ResumeFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse resume file: {}", path))?;

    let mut resume = file.resume;
    if resume.full_name.trim().is_empty() {
        anyhow::bail!("resume is missing a name: {}", path);
    }
    if resume.email.trim().is_empty() {
        anyhow::bail!("resume is missing an email address: {}", path);
    }

    if let Some(photo_path) = file.photo_path {
        let resolved = resolve_photo_path(path, &photo_path);
        resume.photo = load_photo(&resolved);
    }

    info!(
        "Loaded resume for {} ({} skills, {} languages, {} educations, {} experiences)",
        resume.full_name,
        resume.technical_skills.len(),
        resume.languages.len(),
        resume.educations.len(),
        resume.experiences.len()
    );
    Ok(resume)
}

fn resolve_photo_path(resume_path: &str, photo_path: &Path) -> PathBuf {
    if photo_path.is_absolute() {
        photo_path.to_path_buf()
    } else {
        Path::new(resume_path)
            .parent()
            .map(|dir| dir.join(photo_path))
            .unwrap_or_else(|| photo_path.to_path_buf())
    }
}

/// Loads the photo bytes, checking the format up front so the renderer does
/// not reserve space for an image it cannot embed.
fn load_photo(path: &Path) -> Option<Vec<u8>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Could not read photo {}: {}", path.display(), e);
            return None;
        }
    };

    match image::guess_format(&bytes) {
        Ok(ImageFormat::Png) | Ok(ImageFormat::Jpeg) => {
            info!("Photo loaded: {} ({} bytes)", path.display(), bytes.len());
            Some(bytes)
        }
        Ok(other) => {
            warn!(
                "Unsupported photo format {:?} in {}, continuing without photo",
                other,
                path.display()
            );
            None
        }
        Err(e) => {
            warn!(
                "Could not identify photo format in {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}
