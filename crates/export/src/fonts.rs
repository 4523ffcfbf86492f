//! Font readiness
//!
//! The font database is built once, off the async runtime, and shared by
//! every capture after that. Awaiting [`FontAssets::ready`] is the export
//! pipeline's "fonts loaded" gate.

use crate::{CaptureOptions, ExportError, Result};
use resvg::usvg::fontdb::Database;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub struct FontAssets {
    dirs: Vec<PathBuf>,
    load_system_fonts: bool,
    db: OnceCell<Arc<Database>>,
}

impl FontAssets {
    pub fn new(options: &CaptureOptions) -> Self {
        Self {
            dirs: options.font_dirs.clone(),
            load_system_fonts: options.load_system_fonts,
            db: OnceCell::new(),
        }
    }

    /// Whether the database has been loaded
    pub fn is_ready(&self) -> bool {
        self.db.initialized()
    }

    /// Wait until fonts are loaded and return the database
    pub async fn ready(&self) -> Result<Arc<Database>> {
        let db = self
            .db
            .get_or_try_init(|| async {
                let dirs = self.dirs.clone();
                let load_system_fonts = self.load_system_fonts;
                tokio::task::spawn_blocking(move || load_fonts(&dirs, load_system_fonts))
                    .await
                    .map(Arc::new)
                    .map_err(|e| ExportError::Capture(format!("font loading task failed: {e}")))
            })
            .await?;
        Ok(Arc::clone(db))
    }
}

impl std::fmt::Debug for FontAssets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontAssets")
            .field("dirs", &self.dirs)
            .field("load_system_fonts", &self.load_system_fonts)
            .field("ready", &self.is_ready())
            .finish()
    }
}

fn load_fonts(dirs: &[PathBuf], load_system_fonts: bool) -> Database {
    let mut db = Database::new();
    if load_system_fonts {
        db.load_system_fonts();
    }
    for dir in dirs {
        if dir.is_dir() {
            db.load_fonts_dir(dir);
        } else {
            tracing::warn!(dir = %dir.display(), "font directory not found, skipping");
        }
    }
    db.set_serif_family("Times New Roman");
    db.set_sans_serif_family("Arial");
    tracing::debug!(faces = db.len(), "font database loaded");
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fonts_load_once() {
        let assets = FontAssets::new(&CaptureOptions::default().with_system_fonts(false));
        assert!(!assets.is_ready());
        let first = assets.ready().await.unwrap();
        let second = assets.ready().await.unwrap();
        assert!(assets.is_ready());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_missing_font_dir_is_not_fatal() {
        let options = CaptureOptions::default()
            .with_system_fonts(false)
            .with_font_dir("/nonexistent/font/dir");
        let assets = FontAssets::new(&options);
        let db = assets.ready().await.unwrap();
        assert_eq!(db.len(), 0);
    }
}
