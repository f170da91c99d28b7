// vkscheme: Xcode scheme patcher for Vulkan loader paths
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Required variable resolution.

use tracing::debug;

use super::container::Env;
use crate::error::EnvError;

/// Resolved values for a fixed set of required variables.
///
/// Entries keep the order the names were declared in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredEnv {
    entries: Vec<(String, String)>,
}

impl RequiredEnv {
    /// Looks up every name in `env`.
    ///
    /// A variable set to the empty string counts as present.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::MissingVariable` for the first name that is absent.
    pub fn resolve<I, S>(env: &Env, names: I) -> Result<Self, EnvError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        for name in names {
            let name = name.as_ref();
            let Some(value) = env.get(name) else {
                return Err(EnvError::MissingVariable {
                    name: name.to_string(),
                });
            };
            debug!(name, value, "resolved required variable");
            entries.push((name.to_string(), value.to_string()));
        }
        Ok(Self { entries })
    }

    /// Iterates `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
