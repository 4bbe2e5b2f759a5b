// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest discovery and loading.
//!
//! Paths given on the command line are either manifest files, which are
//! always loaded, or directories, which are walked (respecting .gitignore)
//! and filtered with include/exclude globs relative to the directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::error::LoadError;
use crate::manifest::{ManifestFile, ManifestSet};
use crate::runner::Entry;

/// Which files under a directory are manifests.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Resolve `paths` to manifest files, in a stable order. A file reached
/// through more than one argument is kept once, at its first position.
pub fn discover(paths: &[PathBuf], config: &LoaderConfig) -> Result<Vec<PathBuf>, LoadError> {
    let include = build_globset(&config.include)?;
    let exclude = build_globset(&config.exclude)?;

    let mut found = Vec::new();
    for path in paths {
        if path.is_file() {
            found.push(path.clone());
        } else if path.is_dir() {
            let mut files = walk(path, &include, &exclude)?;
            files.sort();
            found.extend(files);
        } else {
            return Err(LoadError::Missing(path.clone()));
        }
    }

    // Overlapping arguments (a file and its directory) name the same manifest.
    let mut seen = HashSet::new();
    found.retain(|file| seen.insert(std::fs::canonicalize(file).unwrap_or_else(|_| file.clone())));
    Ok(found)
}

/// Parse every manifest and build the declared components.
pub fn load(files: &[PathBuf]) -> Result<Vec<Entry>, LoadError> {
    let mut set = ManifestSet::new();
    for file in files {
        let content = std::fs::read_to_string(file)
            .map_err(|source| LoadError::Io { path: file.clone(), source })?;
        let manifest: ManifestFile = toml::from_str(&content)
            .map_err(|source| LoadError::Parse { path: file.clone(), source: Box::new(source) })?;
        if manifest.component.is_empty() {
            tracing::debug!("{} declares no components", file.display());
        }
        let label = file.strip_prefix(".").unwrap_or(file);
        set.add(&label.display().to_string(), manifest);
    }
    Ok(set.build()?)
}

fn walk(root: &Path, include: &GlobSet, exclude: &GlobSet) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).require_git(false).build() {
        let entry =
            entry.map_err(|source| LoadError::Walk { path: root.to_path_buf(), source })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if include.is_match(relative) && !exclude.is_match(relative) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, LoadError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|source| LoadError::Pattern { pattern: pattern.clone(), source })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| LoadError::Pattern { pattern: patterns.join(", "), source })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
