//! Integrity and export utilities for the event file.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use sha2::{Digest, Sha256};

use crate::error::{EvRegError, EvRegResult};

const DIGEST_CHUNK_SIZE: usize = 4096;

/// SHA-256 digest of the file, hex-encoded.
///
/// The file is streamed in fixed-size chunks; the result depends only on
/// the file contents, never on the chunking.
pub fn digest(path: &Path) -> EvRegResult<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; DIGEST_CHUNK_SIZE];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Compress the file into a single-entry gzipped tar next to it.
///
/// The entry is stored under the file's base name and the archive lands at
/// the source path with its extension replaced by `tar.gz`. Any previous
/// archive at that path is overwritten.
pub fn archive(path: &Path) -> EvRegResult<PathBuf> {
    let entry_name = path
        .file_name()
        .ok_or_else(|| EvRegError::Internal(format!("no file name in {}", path.display())))?;
    let archive_path = path.with_extension("tar.gz");

    let encoder = GzEncoder::new(File::create(&archive_path)?, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.append_path_with_name(path, entry_name)?;
    builder.into_inner()?.finish()?;

    Ok(archive_path)
}
