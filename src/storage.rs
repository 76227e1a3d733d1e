//! The output directory of generated decks.
//!
//! Every file is named `presentation_<32 hex chars>.pptx`, so concurrent
//! requests never contend for the same path.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::presentation::PresentationData;
use crate::pptx::{self, RenderError};

pub const FILE_EXTENSION: &str = ".pptx";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub filename: String,
    pub size: u64,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub download_url: String,
}

#[derive(Debug, Clone)]
pub struct PresentationStore {
    root: PathBuf,
}

impl PresentationStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        PresentationStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.root)
    }

    /// Render `doc` into a freshly named file and return the filename.
    /// A half-written file is removed before the error is returned.
    pub fn save(&self, doc: &PresentationData) -> Result<String, RenderError> {
        log::info!("Generating PPT for presentation: {}", doc.title);

        let filename = new_filename();
        let path = self.root.join(&filename);
        let plan = pptx::plan_deck(doc);

        if let Err(e) = pptx::write_pptx(&plan, &path) {
            let _ = fs::remove_file(&path);
            return Err(e);
        }

        log::info!("PPT generated successfully: {filename}");
        Ok(filename)
    }

    /// `save` on the blocking pool, for use from request handlers.
    pub async fn save_off_thread(&self, doc: PresentationData) -> Result<String, RenderError> {
        let store = self.clone();
        actix_web::web::block(move || store.save(&doc))
            .await
            .map_err(|e| RenderError::Io(std::io::Error::other(e.to_string())))?
    }

    /// Map a client-supplied filename to a path inside the output directory.
    /// `None` when the name is not a bare `*.pptx` file name.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        is_valid_filename(filename).then(|| self.root.join(filename))
    }

    pub fn info(&self, filename: &str) -> std::io::Result<FileInfo> {
        let path = self.root.join(filename);
        let meta = fs::metadata(&path)?;
        if !meta.is_file() {
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "not a file"));
        }
        let modified: DateTime<Utc> = meta.modified().map(DateTime::<Utc>::from).unwrap_or_else(|_| Utc::now());
        let created: DateTime<Utc> = meta.created().map(DateTime::<Utc>::from).unwrap_or(modified);
        Ok(FileInfo {
            filename: filename.to_string(),
            size: meta.len(),
            created,
            modified,
            download_url: download_url(filename),
        })
    }

    /// Every `.pptx` in the output directory, newest first.
    pub fn list(&self) -> std::io::Result<Vec<FileInfo>> {
        let mut items = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.ends_with(FILE_EXTENSION) {
                continue;
            }
            match self.info(name) {
                Ok(info) => items.push(info),
                Err(e) => log::warn!("Skipping {name}: {e}"),
            }
        }
        items.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(items)
    }

    /// Remove a generated file. Failures are logged, never returned.
    pub fn delete(&self, filename: &str) {
        let path = self.root.join(filename);
        match fs::remove_file(&path) {
            Ok(()) => log::info!("PPT file deleted: {filename}"),
            Err(e) => log::error!("Error deleting PPT file {filename}: {e}"),
        }
    }
}

pub fn download_url(filename: &str) -> String {
    format!("/api/ppt/download/{filename}")
}

/// A bare `*.pptx` name: no separators, no parent references.
pub fn is_valid_filename(filename: &str) -> bool {
    filename.ends_with(FILE_EXTENSION)
        && filename.len() > FILE_EXTENSION.len()
        && !filename.contains(['/', '\\'])
        && !filename.contains("..")
}

fn new_filename() -> String {
    let bytes: [u8; 16] = rand::random();
    format!("presentation_{}{FILE_EXTENSION}", hex::encode(bytes))
}
