// src/extractors/section.rs

// --- Imports ---
use crate::utils::error::ExtractError;
use regex::Regex;
use once_cell::sync::Lazy;
use std::path::Path;

// --- Constants ---
/// Printed whenever a real section cannot be produced.
pub const FALLBACK_NOTES: &str = "See CHANGELOG.md for details.";

// --- Regex Patterns (Lazy Static) ---
// A version section runs until the next line starting with `## [`
static NEXT_VERSION_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n## \[").expect("Failed to compile NEXT_VERSION_HEADING_RE")
});

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSection {
    pub version: String,  // e.g., "1.2.3", already stripped of any leading 'v'
    pub content: String,  // Trimmed text starting at the `## [<version>]` heading
}

/// Strips leading `v` characters, so `v1.2.3` and `1.2.3` are the same version.
pub fn normalize_version(raw: &str) -> &str {
    raw.trim_start_matches('v')
}

/// Returns the section for `version` in `document`, or the fallback notes.
///
/// `document` is `None` when the changelog could not be read.
pub fn extract(version: &str, document: Option<&str>) -> String {
    let Some(document) = document else {
        return FALLBACK_NOTES.to_string();
    };
    match SectionExtractor::new().extract_section(document, normalize_version(version)) {
        Ok(section) => {
            tracing::info!("Extracted notes for {} ({} bytes)", section.version, section.content.len());
            section.content
        }
        Err(e) => {
            tracing::warn!("{}; printing fallback notes", e);
            FALLBACK_NOTES.to_string()
        }
    }
}

// --- Main Extractor Structure ---
#[derive(Debug, Default)]
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self { Self {} }

    /// Reads the whole changelog with line endings normalized to `\n`.
    /// Any failure, including invalid UTF-8, is reported as `ChangelogUnavailable`.
    pub fn load_changelog(&self, path: &Path) -> Result<String, ExtractError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ExtractError::ChangelogUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Read changelog {} ({} bytes)", path.display(), raw.len());

        if raw.contains('\r') {
            return Ok(raw.replace("\r\n", "\n").replace('\r', "\n"));
        }
        Ok(raw)
    }

    /// Finds the first `## [<version>]` heading and slices up to the next version heading.
    /// `version` must already be normalized.
    pub fn extract_section(&self, document: &str, version: &str) -> Result<ExtractedSection, ExtractError> {
        if version.is_empty() {
            return Err(ExtractError::EmptyVersion);
        }

        let heading_re = Regex::new(&format!(r"## \[{}\]", regex::escape(version)))
            .map_err(|e| ExtractError::RegexError(e.to_string()))?;

        let heading = heading_re
            .find(document)
            .ok_or_else(|| ExtractError::SectionNotFound(version.to_string()))?;
        tracing::debug!("Found heading for {} at byte {}", version, heading.start());

        let end = NEXT_VERSION_HEADING_RE
            .find_at(document, heading.end())
            .map_or(document.len(), |next| next.start());

        Ok(ExtractedSection {
            version: version.to_string(),
            content: document[heading.start()..end].trim().to_string(),
        })
    }

    /// Reads the changelog at `path` and returns the notes for `raw_version`.
    /// Never fails: an unreadable changelog is logged and yields the fallback notes.
    pub fn release_notes(&self, path: &Path, raw_version: &str) -> String {
        let document = self
            .load_changelog(path)
            .map_err(|e| tracing::warn!("{}; printing fallback notes", e))
            .ok();
        extract(raw_version, document.as_deref())
    }
}
