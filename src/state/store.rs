//! Named project storage behind an async interface.
//!
//! Callers must not assume a store answers immediately: the desktop app runs
//! these futures on a worker thread and the web build on the browser's event
//! loop.

use super::persistence::{ProjectFile, ProjectMeta};
use futures::future::{self, BoxFuture, FutureExt};
use parking_lot::Mutex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no saved project named `{0}`")]
    NotFound(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("project index is unreadable: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type StoreFuture<'a, T> = BoxFuture<'a, StoreResult<T>>;

/// Keeps saved projects, keyed by id or name.
pub trait ProjectStore: Send + Sync {
    /// Summaries of every saved project, in save order.
    fn list(&self) -> StoreFuture<'_, Vec<ProjectMeta>>;

    /// Saves `project`, replacing any entry with the same id or name.
    fn save(&self, project: ProjectFile) -> StoreFuture<'_, ()>;

    fn load<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ProjectFile>;

    /// Removes every entry matching `key`. Deleting a missing project succeeds.
    fn delete<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ()>;
}

fn upsert(projects: &mut Vec<ProjectFile>, project: ProjectFile) {
    match projects
        .iter_mut()
        .find(|p| p.id == project.id || p.name == project.name)
    {
        Some(existing) => *existing = project,
        None => projects.push(project),
    }
}

fn find(projects: &[ProjectFile], key: &str) -> StoreResult<ProjectFile> {
    projects
        .iter()
        .find(|p| p.matches(key))
        .cloned()
        .ok_or_else(|| StoreError::NotFound(key.to_owned()))
}

/// Process-lifetime store. Used by tests and as a fallback when nothing
/// persistent is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: Mutex<Vec<ProjectFile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectStore for MemoryStore {
    fn list(&self) -> StoreFuture<'_, Vec<ProjectMeta>> {
        let metas = self.projects.lock().iter().map(ProjectFile::meta).collect();
        future::ready(Ok(metas)).boxed()
    }

    fn save(&self, project: ProjectFile) -> StoreFuture<'_, ()> {
        upsert(&mut self.projects.lock(), project);
        future::ready(Ok(())).boxed()
    }

    fn load<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ProjectFile> {
        let result = find(&self.projects.lock(), key);
        future::ready(result).boxed()
    }

    fn delete<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ()> {
        self.projects.lock().retain(|p| !p.matches(key));
        future::ready(Ok(())).boxed()
    }
}

/// Stores every project in one JSON index file inside a directory.
#[derive(Debug)]
pub struct DirStore {
    dir: PathBuf,
    /// Serializes read-modify-write cycles on the index
    lock: Mutex<()>,
}

impl DirStore {
    pub const INDEX_FILE: &'static str = "projects.json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn index_path(&self) -> PathBuf {
        self.dir.join(Self::INDEX_FILE)
    }

    fn read_all(&self) -> StoreResult<Vec<ProjectFile>> {
        match fs::read_to_string(self.index_path()) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, projects: &[ProjectFile]) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(projects)?;
        // Write then rename so a crash never leaves a truncated index.
        let tmp = self.dir.join(format!("{}.tmp", Self::INDEX_FILE));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, self.index_path())?;
        Ok(())
    }
}

impl ProjectStore for DirStore {
    fn list(&self) -> StoreFuture<'_, Vec<ProjectMeta>> {
        async move {
            let _guard = self.lock.lock();
            Ok(self.read_all()?.iter().map(ProjectFile::meta).collect())
        }
        .boxed()
    }

    fn save(&self, project: ProjectFile) -> StoreFuture<'_, ()> {
        async move {
            let _guard = self.lock.lock();
            let mut projects = self.read_all()?;
            log::info!("saving project `{}` to {}", project.name, self.dir.display());
            upsert(&mut projects, project);
            self.write_all(&projects)
        }
        .boxed()
    }

    fn load<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ProjectFile> {
        async move {
            let _guard = self.lock.lock();
            find(&self.read_all()?, key)
        }
        .boxed()
    }

    fn delete<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ()> {
        async move {
            let _guard = self.lock.lock();
            let mut projects = self.read_all()?;
            let before = projects.len();
            projects.retain(|p| !p.matches(key));
            if projects.len() != before {
                self.write_all(&projects)?;
            }
            Ok(())
        }
        .boxed()
    }
}
