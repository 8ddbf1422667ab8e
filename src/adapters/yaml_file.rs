// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML format backend and YAML file adapter.
//!
//! This module provides a backend that converts between YAML text and node trees, and an
//! adapter that loads and saves a root object from a YAML file on disk.

use crate::domain::{
    deserialize_tree, serialize_object, serialize_tree, GenericValue, Node, NodeError,
    ObjectNode, Result,
};
use crate::ports::FormatBackend;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML documents (10MB)
/// This prevents denial of service attacks via extremely large files
pub const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "yaml-file";

/// YAML backend implementation.
///
/// Parsing requires the document root to be a mapping. Scalars import the way
/// [`deserialize_tree`] imports them: strings stay strings, every number becomes a 64-bit
/// integer, and booleans or nulls are rejected. Rendering uses block style with keys in
/// lexicographic order.
///
/// # Examples
///
/// ```rust
/// use confmaster::adapters::YamlBackend;
/// use confmaster::ports::FormatBackend;
///
/// let backend = YamlBackend::new();
/// let root = backend.parse("a: 1\nb: 2\nc:\n  - aaa\n  - bbb").unwrap();
///
/// assert_eq!(root.get_i32("a").unwrap(), 1);
/// assert_eq!(root.get_list("c").unwrap().get_string(0).unwrap(), "aaa");
/// ```
#[derive(Debug, Clone)]
pub struct YamlBackend;

impl YamlBackend {
    /// Creates a new YAML backend.
    pub fn new() -> Self {
        YamlBackend
    }

    /// Parses YAML text into a node of any kind.
    pub fn parse_node(&self, content: &str) -> Result<Node> {
        let generic: GenericValue =
            serde_yaml::from_str(content).map_err(|e| NodeError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;
        deserialize_tree(generic)
    }
}

impl Default for YamlBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatBackend for YamlBackend {
    fn parse(&self, content: &str) -> Result<ObjectNode> {
        let root = self.parse_node(content)?.into_object()?;
        tracing::debug!("Parsed YAML document with {} top-level keys", root.len());
        Ok(root)
    }

    fn render(&self, root: &Node) -> Result<String> {
        to_yaml(&serialize_tree(root))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// A root object loaded from a YAML file.
///
/// The file can be reloaded after it changes on disk, and the (possibly modified) root
/// can be written back.
///
/// # Examples
///
/// ```rust,no_run
/// use confmaster::adapters::YamlFile;
///
/// // Load from a specific file
/// let file = YamlFile::from_file("/path/to/config.yaml").unwrap();
/// let port = file.root().resolve_i32("server.port").unwrap();
///
/// // Load from default OS location
/// let file = YamlFile::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFile {
    /// Path to the YAML file
    file_path: PathBuf,
    /// Parsed root object
    root: ObjectNode,
    /// YAML backend
    backend: YamlBackend,
}

impl YamlFile {
    /// Loads a YAML file from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let backend = YamlBackend::new();

        // Canonicalize path to prevent directory traversal attacks
        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| NodeError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: format!("Invalid or inaccessible path: {}", display_name(&file_path)),
                source: Some(Box::new(e)),
            })?;

        let content = read_document(&canonical_path)?;
        let root = backend.parse(&content)?;

        Ok(Self {
            file_path: canonical_path,
            root,
            backend,
        })
    }

    /// Loads `config.yaml` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.yaml")
    }

    /// Loads a custom file name from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier
    /// * `filename` - The configuration file name (e.g., "settings.yaml")
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        Self::from_file(default_location(app_name, qualifier)?.join(filename))
    }

    /// Returns the path to the file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the root object.
    pub fn root(&self) -> &ObjectNode {
        &self.root
    }

    /// Returns the root object mutably.
    pub fn root_mut(&mut self) -> &mut ObjectNode {
        &mut self.root
    }

    /// Consumes the adapter, returning the root object.
    pub fn into_root(self) -> ObjectNode {
        self.root
    }

    /// Re-reads the file, replacing the root object.
    ///
    /// The current root is kept if the file can no longer be read or parsed.
    pub fn reload(&mut self) -> Result<()> {
        let content = read_document(&self.file_path)?;
        self.root = self.backend.parse(&content)?;
        Ok(())
    }

    /// Writes the root object back to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        write_document(&self.file_path, &self.root)
    }

    /// Writes `root` to `path` as YAML, creating or truncating the file.
    pub fn write<P: AsRef<Path>>(path: P, root: &ObjectNode) -> Result<()> {
        write_document(path.as_ref(), root)
    }
}

/// Returns the OS-appropriate configuration directory for an application.
pub fn default_location(app_name: &str, qualifier: &str) -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| NodeError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: "Failed to determine project directories".to_string(),
            source: None,
        })?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn read_document(path: &Path) -> Result<String> {
    // Check file size before reading to prevent DoS via large files
    let metadata = fs::metadata(path).map_err(|e| NodeError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to read file metadata: {}", display_name(path)),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_YAML_FILE_SIZE {
        return Err(NodeError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_YAML_FILE_SIZE
            ),
            source: None,
        });
    }

    let content = fs::read_to_string(path).map_err(|e| NodeError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to read configuration file: {}", display_name(path)),
        source: Some(Box::new(e)),
    })?;

    tracing::debug!(
        "Read YAML document {} ({} bytes)",
        path.display(),
        metadata.len()
    );
    Ok(content)
}

fn to_yaml(generic: &GenericValue) -> Result<String> {
    serde_yaml::to_string(generic).map_err(|e| NodeError::ParseError {
        message: format!("Failed to render YAML: {}", e),
        source: Some(Box::new(e)),
    })
}

fn write_document(path: &Path, root: &ObjectNode) -> Result<()> {
    let text = to_yaml(&serialize_object(root))?;
    fs::write(path, &text)?;
    tracing::debug!("Wrote YAML document {} ({} bytes)", path.display(), text.len());
    Ok(())
}
