use crate::denomination::normalize_label;
use crate::library::logger::interface::Logger;
use std::path::Path;

pub const DEFAULT_LABELS: [&str; 7] = [
    "1 yen", "5 yen", "10 yen", "50 yen", "100 yen", "500 yen", "other",
];

/// Where the catalog entries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Configured,
    Default,
}

/// Ordered denomination labels. Position `i` matches output channel `i` of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCatalog {
    labels: Vec<String>,
    source: CatalogSource,
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self {
            labels: default_labels(),
            source: CatalogSource::Default,
        }
    }
}

impl LabelCatalog {
    /// Parses label text, falling back to [`DEFAULT_LABELS`] when the text is
    /// absent or has no non-blank line.
    pub fn load(source: Option<&str>) -> Self {
        match source.map(parse_labels) {
            Some(labels) if !labels.is_empty() => Self {
                labels,
                source: CatalogSource::Configured,
            },
            _ => Self::default(),
        }
    }

    /// Reads the labels file, degrading to the default catalog if it is
    /// missing, unreadable, not UTF-8, or empty.
    pub fn load_path(path: Option<&Path>, logger: &(dyn Logger + Send + Sync)) -> Self {
        let Some(path) = path else {
            let _ = logger.warn("no labels file configured, using default catalog");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(text) => {
                let catalog = Self::load(Some(&text));
                if catalog.source == CatalogSource::Default {
                    let _ = logger.warn(&format!(
                        "labels file {} has no labels, using default catalog",
                        path.display()
                    ));
                } else {
                    let _ = logger.info(&format!(
                        "loaded {} labels from {}",
                        catalog.len(),
                        path.display()
                    ));
                }
                catalog
            }
            Err(e) => {
                let _ = logger.warn(&format!(
                    "could not read labels file {}: {}, using default catalog",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Maps an engine identifier to the catalog's spelling.
    ///
    /// A numeric identifier is treated as a channel index, anything else is
    /// matched on its normalized form. Unknown identifiers come back
    /// unchanged, so the displayed label may not be a catalog entry.
    pub fn resolve(&self, identifier: &str) -> String {
        if let Some(label) = identifier
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|index| self.get(index))
        {
            return label.to_string();
        }

        let wanted = normalize_label(identifier);
        self.labels
            .iter()
            .find(|label| normalize_label(label) == wanted)
            .cloned()
            .unwrap_or_else(|| identifier.to_string())
    }
}

/// Trimmed, non-blank lines in their original order.
pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load(source: Option<&str>) -> Vec<String> {
    LabelCatalog::load(source).labels
}

pub fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(|label| label.to_string()).collect()
}
