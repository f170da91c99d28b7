// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loading and saving a scheme as an element tree.

use std::path::{Path, PathBuf};

use tracing::debug;
use xmltree::{Element, EmitterConfig};

use crate::error::SchemeError;

/// Xcode indents scheme files with three spaces.
const INDENT: &str = "   ";

/// A scheme file parsed into memory, remembering where it came from.
#[derive(Debug, Clone)]
pub struct SchemeDocument {
    path: PathBuf,
    root: Element,
}

impl SchemeDocument {
    /// Reads and parses the scheme at `path`.
    ///
    /// # Errors
    ///
    /// Returns `SchemeError::Io` if the file cannot be read and
    /// `SchemeError::Parse` if it is not well-formed XML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemeError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| SchemeError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(path, &bytes)
    }

    /// Parses scheme content that will later be saved to `path`.
    ///
    /// # Errors
    ///
    /// Returns `SchemeError::Parse` if `content` is not well-formed XML.
    pub fn parse(path: impl Into<PathBuf>, content: &[u8]) -> Result<Self, SchemeError> {
        let path = path.into();
        let root = Element::parse(content).map_err(|e| SchemeError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), root = %root.name, "parsed scheme");
        Ok(Self { path, root })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document element (`<Scheme>` for a well-formed scheme).
    #[must_use]
    pub const fn root(&self) -> &Element {
        &self.root
    }

    pub const fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Serializes the tree with an XML declaration and Xcode-style indentation.
    ///
    /// # Errors
    ///
    /// Returns `SchemeError::Io` if the emitter rejects the tree.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SchemeError> {
        let config = EmitterConfig::new()
            .perform_indent(true)
            .indent_string(INDENT);

        let mut out = Vec::new();
        self.root
            .write_with_config(&mut out, config)
            .map_err(|e| SchemeError::Io {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        out.push(b'\n');
        Ok(out)
    }

    /// Overwrites the file the document was loaded from.
    ///
    /// The tree is fully serialized before the file is opened, so an emitter
    /// failure leaves the old content in place. There is no atomic rename.
    ///
    /// # Errors
    ///
    /// Returns `SchemeError::Io` if serializing or writing fails.
    pub fn save(&self) -> Result<(), SchemeError> {
        let bytes = self.to_bytes()?;
        std::fs::write(&self.path, &bytes).map_err(|e| SchemeError::Io {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "wrote scheme");
        Ok(())
    }
}
