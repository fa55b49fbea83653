// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::format::{decode_graph, encode_graph, GraphCodecError};
use crate::model::{Graph, NodeId};

#[derive(Debug)]
pub enum StoreError {
    NotFound {
        path: PathBuf,
    },
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    DuplicateId {
        path: PathBuf,
        id: NodeId,
    },
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::Malformed { path, .. }
            | Self::DuplicateId { path, .. } => path,
        }
    }

    fn from_codec(path: &Path, err: GraphCodecError) -> Self {
        match err {
            GraphCodecError::Json(source) => Self::Malformed {
                path: path.to_path_buf(),
                source,
            },
            GraphCodecError::DuplicateId(source) => Self::DuplicateId {
                path: path.to_path_buf(),
                id: source.into_id(),
            },
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "graph file not found: {path:?}"),
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Malformed { path, source } => {
                write!(f, "malformed graph document {path:?}: {source}")
            }
            Self::DuplicateId { path, id } => {
                write!(f, "graph document {path:?} repeats node id {:?}", id.as_str())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::NotFound { .. } | Self::DuplicateId { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Writes a temp file and renames it over the destination.
    #[default]
    BestEffort,

    /// Like `BestEffort`, and additionally syncs the file and (on unix) its directory.
    Durable,
}

/// A graph document on disk: the load source and save destination of an editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphFile {
    path: PathBuf,
    durability: WriteDurability,
}

impl GraphFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the whole document.
    pub fn load(&self) -> Result<Graph, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let graph = decode_graph(&text).map_err(|err| StoreError::from_codec(&self.path, err))?;
        tracing::info!(path = %self.path.display(), nodes = graph.len(), "graph loaded");
        Ok(graph)
    }

    /// Encodes `graph` and replaces the destination file. The destination directory must exist.
    pub fn save(&self, graph: &Graph) -> Result<(), StoreError> {
        let text = encode_graph(graph).map_err(|err| StoreError::from_codec(&self.path, err))?;
        write_atomic(&self.path, text.as_bytes(), self.durability)?;
        tracing::info!(path = %self.path.display(), nodes = graph.len(), "graph saved");
        Ok(())
    }
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".graphedit.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    if let Err(source) = file.write_all(contents) {
        drop(file);
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: tmp_path,
            source,
        });
    }

    if durability == WriteDurability::Durable {
        if let Err(source) = file.sync_all() {
            drop(file);
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::Io {
                path: tmp_path,
                source,
            });
        }
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            dir.sync_all().map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}
