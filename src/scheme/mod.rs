// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Xcode scheme files.
//!
//! ```text
//! SchemeLocation { root, scheme }
//!   --> <root>.xcodeproj/xcshareddata/xcschemes/<scheme>.xcscheme
//!
//! SchemeDocument::load(path) --> SchemePatcher::apply(&mut doc, &RequiredEnv)
//!   --> SchemeDocument::save()
//!
//! <Scheme>
//!   <LaunchAction ...>
//!     <EnvironmentVariables>          (created as first child if absent)
//!       <EnvironmentVariable key=".." value=".." isEnabled="YES"/>
//!       ...
//! ```

mod document;
mod patch;

pub use document::SchemeDocument;
pub use patch::{PatchReport, SchemePatcher};

use std::path::{Path, PathBuf};

use crate::error::SchemeError;

/// Element holding the run configuration.
pub const LAUNCH_ACTION: &str = "LaunchAction";
/// Container for the launched process's environment.
pub const ENVIRONMENT_VARIABLES: &str = "EnvironmentVariables";
/// One environment entry.
pub const ENVIRONMENT_VARIABLE: &str = "EnvironmentVariable";

pub const KEY_ATTR: &str = "key";
pub const VALUE_ATTR: &str = "value";
pub const ENABLED_ATTR: &str = "isEnabled";

/// Marker Xcode writes for an enabled entry.
pub const ENABLED: &str = "YES";

/// Where a shared scheme lives inside a generated Xcode project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeLocation {
    project_root: String,
    scheme_name: String,
}

impl SchemeLocation {
    #[must_use]
    pub fn new(project_root: impl Into<String>, scheme_name: impl Into<String>) -> Self {
        Self {
            project_root: project_root.into(),
            scheme_name: scheme_name.into(),
        }
    }

    /// `<root>.xcodeproj/xcshareddata/xcschemes/<scheme>.xcscheme`
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.xcodeproj", self.project_root))
            .join("xcshareddata")
            .join("xcschemes")
            .join(format!("{}.xcscheme", self.scheme_name))
    }

    #[must_use]
    pub fn path_in(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    /// Returns the scheme path under `base` if the file exists.
    ///
    /// # Errors
    ///
    /// Returns `SchemeError::NotFound` with the expected path otherwise.
    pub fn locate(&self, base: &Path) -> Result<PathBuf, SchemeError> {
        let path = self.path_in(base);
        if path.is_file() {
            Ok(path)
        } else {
            Err(SchemeError::NotFound { path })
        }
    }
}
