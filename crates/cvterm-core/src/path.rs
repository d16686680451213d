//! Location inside the virtual filesystem.

use std::fmt;

use crate::config::{ROOT_SEGMENT, SEPARATOR};

/// Ordered segments from the root to a directory.
///
/// The root sentinel `~` is implicit: an empty path is the root itself.
/// Every prefix of a path held by a [`crate::Session`] names a directory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VirtualPath {
    segments: Vec<String>,
}

impl VirtualPath {
    /// The root (home) directory.
    pub fn home() -> Self {
        Self::default()
    }

    /// Build a path from segments below the root.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_home(&self) -> bool {
        self.segments.is_empty()
    }

    /// Path of the child `name`.
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// Parent directory; the root is its own parent.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Prompt form: `~` or `~/education`.
    pub fn display(&self) -> String {
        let mut out = String::from(ROOT_SEGMENT);
        for segment in &self.segments {
            out.push(SEPARATOR);
            out.push_str(segment);
        }
        out
    }

    /// `pwd` form: the display form behind the absolute marker, `/~/education`.
    pub fn absolute(&self) -> String {
        format!("{}{}", SEPARATOR, self.display())
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
