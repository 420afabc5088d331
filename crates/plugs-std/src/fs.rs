use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

use anyhow::{anyhow, Context};
use camino::{Utf8Path, Utf8PathBuf};

use crate::PlugsStdError;

/// Interact with a file system
#[derive(Default, Copy, Clone)]
pub struct Fs {}

impl Fs {
    /// reads a file from disk
    pub fn read_file<P>(path: P) -> Result<String, PlugsStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(metadata) => {
                if metadata.is_file() {
                    tracing::info!("reading {} from disk", &path);
                    let contents = fs::read_to_string(path)
                        .with_context(|| format!("could not read {}", &path))?;
                    if contents.is_empty() {
                        Err(PlugsStdError::EmptyFile {
                            empty_file: path.to_string(),
                        })
                    } else {
                        Ok(contents)
                    }
                } else {
                    Err(anyhow!("'{}' is not a file", path).into())
                }
            }
            Err(e) => Err(anyhow!("could not find '{}'", path).context(e).into()),
        }
    }

    /// reads a file from disk if it is there, treating a missing or empty file as `None`
    pub fn read_existing_file<P>(path: P) -> Result<Option<String>, PlugsStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("{} does not exist yet", path);
            return Ok(None);
        }
        match Self::read_file(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(PlugsStdError::EmptyFile { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// writes a file to disk
    pub fn write_file<P, C>(path: P, contents: C) -> Result<(), PlugsStdError>
    where
        P: AsRef<Utf8Path>,
        C: AsRef<[u8]>,
    {
        let path = path.as_ref();
        tracing::info!("checking existence of parent path in '{}'", path);

        if path.is_dir() {
            return Err(PlugsStdError::PathIsDirectory {
                path: path.to_path_buf(),
            });
        }

        // The last element is the file name; without one there is nothing to write to.
        let file_name = path.file_name().ok_or(anyhow!(
            "cannot write to a path without a final element {path}"
        ))?;

        // Only the parent can be canonicalized since the file itself may not exist yet.
        let mut canonical_final_path = path
            .parent()
            .map(Self::upsert_path_exists)
            .ok_or(anyhow!("cannot write file to root or prefix {path}"))??;

        canonical_final_path.push(file_name);

        tracing::debug!("final canonical path is {}", canonical_final_path);
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| {
                format!(
                    "tried to open {} but was unable to do so",
                    &canonical_final_path
                )
            })?;
        tracing::info!("writing {} to disk", &canonical_final_path);
        file.write_all(contents.as_ref())
            .with_context(|| format!("could not write {}", &canonical_final_path))?;
        Ok(())
    }

    /// Given a path, where some elements may not exist, it will return the canonical
    /// representation of the path, AND create any missing interim directories.
    fn upsert_path_exists(path: &Utf8Path) -> Result<Utf8PathBuf, anyhow::Error> {
        // `Path::parent` of a bare file name is the empty path
        let path = if path.as_str().is_empty() {
            Utf8Path::new(".")
        } else {
            path
        };
        tracing::debug!("attempting to canonicalize parent path '{path}'");
        if let Err(e) = path.canonicalize_utf8() {
            match e.kind() {
                ErrorKind::NotFound => {
                    tracing::debug!(
                        "could not canonicalize parent path '{}', attempting to create interim paths",
                        path
                    );
                    Self::create_dir_all(path).with_context(|| {
                        format!("{} does not exist and it could not be created", &path)
                    })?;
                    tracing::debug!("interim paths created for {}", path);
                }
                ErrorKind::PermissionDenied => {
                    return Err(anyhow!(
                        "cannot write file to path {} as user does not have permissions to do so",
                        path
                    ))
                }
                _ => {}
            }
        }
        path.canonicalize_utf8().map_err(|e| anyhow!(e))
    }

    /// creates a directory
    pub fn create_dir_all<P>(path: P) -> Result<(), PlugsStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        tracing::info!("creating {} directory", &path);
        fs::create_dir_all(path)
            .with_context(|| format!("could not create {} directory", &path))?;
        Ok(())
    }
}
