/// Position in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CatalogLocation {
    /// Path to the catalog file (e.g., "translations/en.toml").
    pub file_path: String,
    /// Line number (1-indexed). 0 when the issue concerns the whole file.
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub col: usize,
}

impl CatalogLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self::new(file_path, line, 1)
    }

    /// Location that points at a file, not at a line in it.
    pub fn file(file_path: impl Into<String>) -> Self {
        Self::new(file_path, 0, 0)
    }

    pub fn has_line(&self) -> bool {
        self.line > 0
    }
}

/// A location together with the text of the line it points into.
///
/// The reporter prints `source_line` with a caret under `location.col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogContext {
    pub location: CatalogLocation,
    pub source_line: Option<String>,
}

impl CatalogContext {
    pub fn new(location: CatalogLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: Some(source_line.into()),
        }
    }

    pub fn without_source(location: CatalogLocation) -> Self {
        Self {
            location,
            source_line: None,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}
