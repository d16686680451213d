use serde::Deserialize;
use tracing::trace;

use crate::config::{CV_MANIFEST, ROOT_SEGMENT, SEPARATOR};
use crate::error::ManifestError;
use crate::path::VirtualPath;

// =============================================================================
// Manifest Types
// =============================================================================

/// Root manifest structure (see `assets/cv.toml`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Manifest {
    /// File entries, in listing order
    #[serde(default)]
    pub files: Vec<FileEntry>,
    /// Directories that must exist even without files
    #[serde(default)]
    pub directories: Vec<DirectoryEntry>,
}

/// File entry from the manifest
#[derive(Clone, Debug, Deserialize)]
pub struct FileEntry {
    /// File path relative to the root, e.g. `education/phd.txt`
    pub path: String,
    /// Text shown by `cat`
    pub content: String,
}

/// Directory entry from the manifest
#[derive(Clone, Debug, Deserialize)]
pub struct DirectoryEntry {
    /// Directory path relative to the root
    pub path: String,
}

// =============================================================================
// Tree
// =============================================================================

/// Entry in the virtual filesystem.
///
/// Directory children keep the order in which the manifest introduced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Directory { children: Vec<(String, Node)> },
    File { content: String },
}

impl Node {
    fn empty_dir() -> Self {
        Node::Directory {
            children: Vec::new(),
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Immediate child by name (directories only).
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Directory { children } => children
                .iter()
                .find(|(child, _)| child == name)
                .map(|(_, node)| node),
            Node::File { .. } => None,
        }
    }

    /// Children in listing order, `None` for files.
    pub fn children(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    /// File text, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory { .. } => None,
        }
    }
}

// =============================================================================
// VirtualFs
// =============================================================================

/// Read-only tree browsed by the terminal.
///
/// # Path Convention
///
/// - Root: `~` (or `/`), the home directory
/// - Absolute: `~/education`, `/education`
/// - Relative to the working directory: `education`, `phd.txt`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualFs {
    root: Node,
}

impl VirtualFs {
    /// Filesystem built from the manifest compiled into the crate.
    pub fn embedded() -> Result<Self, ManifestError> {
        Self::parse(CV_MANIFEST)
    }

    /// Parse a TOML manifest and build the tree.
    pub fn parse(source: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = toml::from_str(source)?;
        Self::from_manifest(&manifest)
    }

    /// Create the tree from a manifest.
    ///
    /// Parent directories are created on demand, so a directory is listed
    /// where its first file or `[[directories]]` entry appears.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, ManifestError> {
        let mut root = Vec::new();

        for file in &manifest.files {
            Self::insert_file(&mut root, &file.path, &file.content)?;
        }
        for dir in &manifest.directories {
            Self::ensure_directory(&mut root, &dir.path)?;
        }

        Ok(Self {
            root: Node::Directory { children: root },
        })
    }

    /// Filesystem with an empty root (fallback when the manifest fails).
    pub fn empty() -> Self {
        Self {
            root: Node::empty_dir(),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Node at a session path.
    pub fn get(&self, path: &VirtualPath) -> Option<&Node> {
        path.segments()
            .iter()
            .try_fold(&self.root, |node, segment| node.child(segment))
    }

    /// Resolve a path string against the working directory.
    ///
    /// Paths starting with `/` or `~` walk from the root, anything else from
    /// `cwd`. Empty and `~` segments are skipped. Every intermediate segment
    /// must name a directory; the last one may name a file. `.` and `..` are
    /// not understood here.
    pub fn resolve(&self, cwd: &VirtualPath, path: &str) -> Option<&Node> {
        let absolute = path.starts_with(SEPARATOR)
            || path.split(SEPARATOR).next() == Some(ROOT_SEGMENT);
        let start = if absolute { &self.root } else { self.get(cwd)? };

        let resolved = path
            .split(SEPARATOR)
            .filter(|part| !part.is_empty() && *part != ROOT_SEGMENT)
            .try_fold(start, |node, part| node.child(part));

        trace!(path, cwd = %cwd, found = resolved.is_some(), "resolve");
        resolved
    }

    // -------------------------------------------------------------------------
    // Construction helpers
    // -------------------------------------------------------------------------

    fn split_path(path: &str) -> Result<Vec<&str>, ManifestError> {
        let parts: Vec<&str> = path.split(SEPARATOR).collect();
        if parts.iter().any(|part| part.is_empty() || *part == ROOT_SEGMENT) {
            return Err(ManifestError::InvalidPath {
                path: path.to_string(),
            });
        }
        Ok(parts)
    }

    fn insert_file(
        root: &mut Vec<(String, Node)>,
        path: &str,
        content: &str,
    ) -> Result<(), ManifestError> {
        let parts = Self::split_path(path)?;
        let Some((name, parents)) = parts.split_last() else {
            return Err(ManifestError::InvalidPath {
                path: path.to_string(),
            });
        };

        let mut current = root;
        for part in parents {
            current = Self::child_dir_mut(current, part).ok_or_else(|| {
                ManifestError::Conflict {
                    path: path.to_string(),
                }
            })?;
        }

        match current.iter().find(|(existing, _)| existing == name) {
            Some((_, Node::File { .. })) => Err(ManifestError::Duplicate {
                path: path.to_string(),
            }),
            Some((_, Node::Directory { .. })) => Err(ManifestError::Conflict {
                path: path.to_string(),
            }),
            None => {
                current.push((
                    name.to_string(),
                    Node::File {
                        content: content.to_string(),
                    },
                ));
                Ok(())
            }
        }
    }

    fn ensure_directory(root: &mut Vec<(String, Node)>, path: &str) -> Result<(), ManifestError> {
        let mut current = root;
        for part in Self::split_path(path)? {
            current = Self::child_dir_mut(current, part).ok_or_else(|| {
                ManifestError::Conflict {
                    path: path.to_string(),
                }
            })?;
        }
        Ok(())
    }

    /// Children of the directory `name`, created if missing.
    ///
    /// Returns `None` when `name` is a file.
    fn child_dir_mut<'a>(
        children: &'a mut Vec<(String, Node)>,
        name: &str,
    ) -> Option<&'a mut Vec<(String, Node)>> {
        let index = match children.iter().position(|(existing, _)| existing == name) {
            Some(index) => index,
            None => {
                children.push((name.to_string(), Node::empty_dir()));
                children.len() - 1
            }
        };

        match &mut children[index].1 {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::empty()
    }
}
