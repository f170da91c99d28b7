// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launch environment injection.

use std::path::PathBuf;

use tracing::{debug, trace};
use xmltree::{Element, XMLNode};

use super::{
    ENABLED, ENABLED_ATTR, ENVIRONMENT_VARIABLE, ENVIRONMENT_VARIABLES, KEY_ATTR, LAUNCH_ACTION,
    SchemeDocument, VALUE_ATTR,
};
use crate::config::types::SchemeConfig;
use crate::core::env::required::RequiredEnv;
use crate::error::SchemeError;

/// What a patch changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    /// The `EnvironmentVariables` container had to be created.
    pub created_container: bool,
    /// Keys inserted, in insertion order (the reverse of document order).
    pub inserted: Vec<String>,
    /// Entries dropped because their key was about to be re-inserted.
    pub removed: usize,
}

/// Injects environment entries into a scheme's launch action.
///
/// Each entry goes in as the first child of the container, so after a patch
/// the entries appear in reverse of the order they were resolved in. By
/// default nothing is removed and reruns accumulate duplicates.
#[derive(Debug, Clone)]
pub struct SchemePatcher {
    enabled_marker: String,
    replace_existing: bool,
}

impl Default for SchemePatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemePatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled_marker: ENABLED.to_string(),
            replace_existing: false,
        }
    }

    #[must_use]
    pub fn from_config(config: &SchemeConfig) -> Self {
        Self {
            enabled_marker: config.enabled_marker.clone(),
            replace_existing: config.replace_existing,
        }
    }

    #[must_use]
    pub fn enabled_marker(mut self, marker: impl Into<String>) -> Self {
        self.enabled_marker = marker.into();
        self
    }

    /// Remove existing entries whose key is about to be inserted.
    #[must_use]
    pub const fn replace_existing(mut self, replace: bool) -> Self {
        self.replace_existing = replace;
        self
    }

    /// Patches `doc` in memory. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `SchemeError::MissingElement` if the root has no `LaunchAction` child.
    pub fn apply(
        &self,
        doc: &mut SchemeDocument,
        vars: &RequiredEnv,
    ) -> Result<PatchReport, SchemeError> {
        let path = doc.path().to_path_buf();
        let missing = |element: &str| SchemeError::MissingElement {
            path: path.clone(),
            element: element.to_string(),
        };

        let root = doc.root_mut();
        let launch_index =
            child_position(root, LAUNCH_ACTION).ok_or_else(|| missing(LAUNCH_ACTION))?;
        let XMLNode::Element(launch) = &mut root.children[launch_index] else {
            return Err(missing(LAUNCH_ACTION));
        };

        let (index, created_container) = match child_position(launch, ENVIRONMENT_VARIABLES) {
            Some(index) => (index, false),
            None => {
                debug!("creating {ENVIRONMENT_VARIABLES} container");
                launch
                    .children
                    .insert(0, XMLNode::Element(Element::new(ENVIRONMENT_VARIABLES)));
                (0, true)
            }
        };
        let XMLNode::Element(container) = &mut launch.children[index] else {
            return Err(missing(ENVIRONMENT_VARIABLES));
        };

        let removed = if self.replace_existing {
            let before = container.children.len();
            container
                .children
                .retain(|node| !matches!(node, XMLNode::Element(e) if is_entry_for(e, vars)));
            before - container.children.len()
        } else {
            0
        };

        let mut inserted = Vec::with_capacity(vars.len());
        for (name, value) in vars.iter() {
            trace!(name, value, "inserting environment entry");
            container
                .children
                .insert(0, XMLNode::Element(self.entry(name, value)));
            inserted.push(name.to_string());
        }

        Ok(PatchReport {
            path,
            created_container,
            inserted,
            removed,
        })
    }

    /// Builds `<EnvironmentVariable key=".." value=".." isEnabled=".."/>`.
    fn entry(&self, name: &str, value: &str) -> Element {
        let mut entry = Element::new(ENVIRONMENT_VARIABLE);
        entry
            .attributes
            .insert(KEY_ATTR.to_string(), name.to_string());
        entry
            .attributes
            .insert(VALUE_ATTR.to_string(), value.to_string());
        entry
            .attributes
            .insert(ENABLED_ATTR.to_string(), self.enabled_marker.clone());
        entry
    }
}

fn child_position(parent: &Element, name: &str) -> Option<usize> {
    parent
        .children
        .iter()
        .position(|node| matches!(node, XMLNode::Element(e) if e.name == name))
}

fn is_entry_for(element: &Element, vars: &RequiredEnv) -> bool {
    element.name == ENVIRONMENT_VARIABLE
        && element
            .attributes
            .get(KEY_ATTR)
            .is_some_and(|key| vars.get(key).is_some())
}
