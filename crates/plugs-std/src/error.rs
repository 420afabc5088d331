use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlugsStdError {
    /// AdhocError comes from the anyhow crate
    #[error(transparent)]
    AdhocError(#[from] anyhow::Error),

    /// This error is thrown when there is an empty file
    #[error("\"{empty_file}\" is an empty file.")]
    EmptyFile {
        /// The empty file path
        empty_file: String,
    },

    /// This error is thrown when a file we expected to write is actually a directory
    #[error("cannot write to \"{path}\" because it is a directory.")]
    PathIsDirectory { path: Utf8PathBuf },
}
