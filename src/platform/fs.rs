// DataStream - platform/fs.rs
//
// Whole-file text reads for document loading.
// The file handle lives only inside `read_text_file` and is closed on every
// return path, including read failures.

use crate::util::error::LoadError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a regular file fully and decode it as strict UTF-8.
pub fn read_text_file(path: &Path) -> Result<String, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let not_a_file = || LoadError::NotAFile {
        path: path.to_path_buf(),
    };

    // Checked before opening: opening a FIFO blocks until a writer appears.
    if !std::fs::metadata(path).map_err(io_err)?.is_file() {
        return Err(not_a_file());
    }

    let mut file = File::open(path).map_err(io_err)?;
    // The path may have been swapped between the check and the open.
    let metadata = file.metadata().map_err(io_err)?;
    if !metadata.is_file() {
        return Err(not_a_file());
    }

    let mut bytes = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or(0));
    file.read_to_end(&mut bytes).map_err(io_err)?;

    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        "Read file"
    );

    String::from_utf8(bytes).map_err(|source| LoadError::InvalidEncoding {
        path: path.to_path_buf(),
        source,
    })
}
