use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use time::OffsetDateTime;

use crate::defaults::Defaults;
use crate::error::{Error, Result};

/// "bitcoin_paper_wallet_2024-01-31_13-05-09.pdf"
pub fn document_filename(at: OffsetDateTime) -> Result<String> {
    let stamp =
        at.format(Defaults::TIMESTAMP_FORMAT).map_err(|e| Error::Timestamp(e.to_string()))?;
    Ok(format!("{}{}.{}", Defaults::DOCUMENT_PREFIX, stamp, Defaults::DOCUMENT_EXT))
}

/// Local wall-clock time, falling back to UTC when the offset is unknown.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Write `bytes` to a temp file next to `path` and move it into place.
/// An existing file at `path` is replaced whole.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let tmp = staged(path, bytes)?;
    tmp.persist(path).map_err(|e| write_err(path, e.error))?;
    Ok(path.to_path_buf())
}

/// Like [`write_atomic`] but never overwrites. Picks "name (1).ext",
/// "name (2).ext", ... when `path` is taken. Returns the path written.
pub fn write_unique(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let mut tmp = staged(path, bytes)?;

    let dir = parent_dir(path);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("file");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    for i in 0..10_000 {
        let candidate_name = if i == 0 {
            if ext.is_empty() {
                stem.to_string()
            } else {
                format!("{stem}.{ext}")
            }
        } else if ext.is_empty() {
            format!("{stem} ({i})")
        } else {
            format!("{stem} ({i}).{ext}")
        };
        let candidate_path = dir.join(&candidate_name);

        match tmp.persist_noclobber(&candidate_path) {
            Ok(_) => return Ok(candidate_path),
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => tmp = e.file,
            Err(e) => return Err(write_err(&candidate_path, e.error)),
        }
    }

    Err(write_err(
        path,
        io::Error::new(
            ErrorKind::AlreadyExists,
            "failed to create a unique filename after many attempts",
        ),
    ))
}

fn staged(path: &Path, bytes: &[u8]) -> Result<NamedTempFile> {
    let dir = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| write_err(path, e))?;
    tmp.write_all(bytes).map_err(|e| write_err(path, e))?;
    tmp.as_file().sync_all().map_err(|e| write_err(path, e))?;
    Ok(tmp)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

fn write_err(path: &Path, source: io::Error) -> Error {
    Error::Write { path: path.to_path_buf(), source }
}
