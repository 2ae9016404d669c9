//! Named icon assets and their display ordering.
//!
//! Icons come from an explicit registration list ([`IconSet`]), either built
//! in code or discovered by scanning an asset directory. The
//! [`IconOrderer`] then puts a fixed set of names first and shuffles the
//! rest on every call.

mod order;

use std::path::{Path, PathBuf};

pub use order::{order_icons, order_icons_with, IconOrderer};

use crate::error::BunpeekError;

/// A visual asset identified by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon<A> {
    /// Unique display name, e.g. `"Typescript"`.
    pub name: String,
    /// Opaque handle owned by the rendering layer.
    pub asset: A,
}

impl<A> Icon<A> {
    /// Icon with the given name and asset handle.
    pub fn new(name: impl Into<String>, asset: A) -> Self {
        Self {
            name: name.into(),
            asset,
        }
    }
}

/// Registration list of icons with unique names, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet<A> {
    icons: Vec<Icon<A>>,
}

impl<A> IconSet<A> {
    /// Empty set.
    pub fn new() -> Self {
        Self { icons: Vec::new() }
    }

    /// Build a set from `(name, asset)` pairs, rejecting repeated names.
    pub fn from_pairs<N: Into<String>>(
        pairs: impl IntoIterator<Item = (N, A)>,
    ) -> Result<Self, BunpeekError> {
        let mut set = Self::new();
        for (name, asset) in pairs {
            set.register(name, asset)?;
        }
        Ok(set)
    }

    /// Add an icon. Fails if the name is already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        asset: A,
    ) -> Result<(), BunpeekError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(BunpeekError::DuplicateIcon(name));
        }
        self.icons.push(Icon { name, asset });
        Ok(())
    }

    /// Look up an icon by name.
    pub fn get(&self, name: &str) -> Option<&Icon<A>> {
        self.icons.iter().find(|icon| icon.name == name)
    }

    /// Icon names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.iter().map(|icon| icon.name.as_str())
    }

    /// Icons in registration order.
    pub fn as_slice(&self) -> &[Icon<A>] {
        &self.icons
    }

    /// Number of icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether no icons are registered.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl IconSet<PathBuf> {
    /// Scan `dir` for files with the given extension. Each file becomes an
    /// icon named after its stem, with its path as the asset handle. Icons
    /// are sorted by name so discovery order does not depend on the file
    /// system.
    pub fn from_dir(dir: &Path, extension: &str) -> Result<Self, BunpeekError> {
        let mut found = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().is_none_or(|ext| ext != extension)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                found.push((stem.to_owned(), path.clone()));
            }
        }
        found.sort_by(|a, b| a.0.cmp(&b.0));

        let set = Self::from_pairs(found)?;
        log::info!(
            "loaded {} {extension} icons from {}",
            set.len(),
            dir.display()
        );
        Ok(set)
    }
}

impl<A> Default for IconSet<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, A> IntoIterator for &'a IconSet<A> {
    type Item = &'a Icon<A>;
    type IntoIter = std::slice::Iter<'a, Icon<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}
