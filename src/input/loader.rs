//! Document loader routing files to the right extractor, with a cache

use crate::error::{Result, ResumeTailorError};
use crate::input::detector::FileType;
use crate::input::extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct DocumentLoader {
    cache: HashMap<String, String>,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let key = path.to_string_lossy().to_string();

        if let Some(cached) = self.cache.get(&key) {
            info!("using cached text for: {}", path.display());
            return Ok(cached.clone());
        }

        if !path.exists() {
            return Err(ResumeTailorError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeTailorError::InvalidInput(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        let text = match FileType::from_extension(extension) {
            FileType::Pdf => {
                info!("extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => PlainTextExtractor.extract(path).await?,
            FileType::Markdown => MarkdownExtractor.extract(path).await?,
            FileType::Unknown => {
                return Err(ResumeTailorError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        self.cache.insert(key, text.clone());
        Ok(text)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}
