// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory-backed store
//!
//! Layout: `<root>/<container>/<entry_id>.json`. Compound writes hold an
//! exclusive lock on `<root>/<container>/.lock` and publish the new entry
//! by writing a temp file and renaming it over the old one, so readers
//! never see a partial entry.

use crate::store::{BackingStore, ContainerHandle, StoreError};
use fs2::FileExt;
use replog_core::{decode_bounds, encode_bounds, CheckpointBounds, WriteOp};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const LOCK_FILE: &str = ".lock";
const ENTRY_EXT: &str = "json";

/// Backing store persisted under a root directory
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn container_dir(&self, name: &str) -> Result<PathBuf, StoreError> {
        validate_name("container", name)?;
        Ok(self.root.join(name))
    }

    fn entry_path(&self, container: &ContainerHandle, entry_id: &str) -> Result<PathBuf, StoreError> {
        validate_name("entry", entry_id)?;
        Ok(self
            .container_dir(container.name())?
            .join(format!("{}.{}", entry_id, ENTRY_EXT)))
    }

    /// Take the container's write lock; released when the file drops
    fn lock_container(&self, container: &ContainerHandle) -> Result<File, StoreError> {
        let dir = self.container_dir(container.name())?;
        if !dir.is_dir() {
            return Err(StoreError::ContainerNotFound(container.name().to_string()));
        }
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(dir.join(LOCK_FILE))?;
        lock.lock_exclusive()?;
        Ok(lock)
    }

    fn load(&self, path: &Path) -> Result<Option<CheckpointBounds>, StoreError> {
        match fs::read_to_string(path) {
            Ok(json) => Ok(Some(decode_bounds(&json)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, path: &Path, bounds: &CheckpointBounds) -> Result<(), StoreError> {
        let tmp = path.with_extension("json.tmp");
        let json = encode_bounds(bounds)?;
        {
            let mut file = File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Names become path components, so they must stay inside the container
fn validate_name(kind: &str, name: &str) -> Result<(), StoreError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name == LOCK_FILE
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if bad {
        return Err(StoreError::Backend(format!("invalid {} name: {:?}", kind, name)));
    }
    Ok(())
}

impl BackingStore for DirStore {
    fn open_container(&self, name: &str) -> Result<ContainerHandle, StoreError> {
        let dir = self.container_dir(name)?;
        if dir.is_dir() {
            Ok(ContainerHandle::new(name))
        } else {
            Err(StoreError::ContainerNotFound(name.to_string()))
        }
    }

    fn create_container(&self, name: &str) -> Result<(), StoreError> {
        let dir = self.container_dir(name)?;
        match fs::create_dir(&dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(StoreError::ContainerExists(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_entry(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
        exclusive: bool,
    ) -> Result<(), StoreError> {
        let path = self.entry_path(container, entry_id)?;
        let _lock = self.lock_container(container)?;

        if path.exists() {
            if exclusive {
                return Err(StoreError::EntryExists {
                    container: container.name().to_string(),
                    entry: entry_id.to_string(),
                });
            }
            return Ok(());
        }
        self.persist(&path, &CheckpointBounds::default())
    }

    fn submit(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
        op: &WriteOp,
    ) -> Result<(), StoreError> {
        let path = self.entry_path(container, entry_id)?;
        let _lock = self.lock_container(container)?;

        let current = self.load(&path)?;
        let next = op
            .apply(current.as_ref())
            .map_err(|e| StoreError::from_apply(e, container, entry_id))?;

        match next {
            Some(bounds) => self.persist(&path, &bounds),
            None if current.is_some() => Ok(fs::remove_file(&path)?),
            None => Ok(()),
        }
    }

    fn read_entry(
        &self,
        container: &ContainerHandle,
        entry_id: &str,
    ) -> Result<CheckpointBounds, StoreError> {
        let path = self.entry_path(container, entry_id)?;
        if !self.container_dir(container.name())?.is_dir() {
            return Err(StoreError::ContainerNotFound(container.name().to_string()));
        }
        self.load(&path)?
            .ok_or_else(|| StoreError::entry_not_found(container, entry_id))
    }
}

#[cfg(test)]
#[path = "dir_tests.rs"]
mod tests;
