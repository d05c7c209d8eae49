//! Generic snapshot persistence for any container that can serialize its own
//! state.
//!
//! Features:
//! - Format versioning for safe evolution
//! - CRC32 checksum validation for data integrity
//! - Atomic writes (write to a temp file, `fsync`, rename) to avoid
//!   corrupting an existing snapshot on a crash mid-write
//!
//! Containers define their own snapshot struct (e.g. `BitList` serializes its
//! word buffer plus `size`; `HashCore` serializes its key/value arrays and
//! distinguished-key flags) and hand it to [`write_with_integrity`] /
//! [`read_with_validation`]; this module only owns the header, checksum, and
//! atomic-write mechanics, not the container's own layout.

use crate::error::PersistError;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Current format version - increment when the header layout changes.
const FORMAT_VERSION: u32 = 1;

/// Magic number identifying a `packed-collections` snapshot file.
const MAGIC: &[u8; 8] = b"PKDCOLS1";

/// File format header, written ahead of the serialized body.
#[derive(Debug, Serialize, Deserialize)]
struct FileHeader {
    magic: [u8; 8],
    version: u32,
    checksum: u32,
    body_len: u64,
}

impl FileHeader {
    fn new(checksum: u32, body_len: u64) -> Self {
        Self {
            magic: *MAGIC,
            version: FORMAT_VERSION,
            checksum,
            body_len,
        }
    }

    fn validate(&self) -> Result<(), PersistError> {
        if &self.magic != MAGIC {
            return Err(PersistError::BadMagic {
                expected: *MAGIC,
                got: self.magic,
            });
        }
        if self.version != FORMAT_VERSION {
            return Err(PersistError::BadVersion {
                expected: FORMAT_VERSION,
                got: self.version,
            });
        }
        Ok(())
    }
}

/// Writer that stages data in a temp file and only replaces the destination
/// on an explicit [`AtomicWriter::commit`].
pub struct AtomicWriter {
    temp_path: PathBuf,
    final_path: PathBuf,
    writer: BufWriter<File>,
    committed: bool,
}

impl AtomicWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PersistError> {
        let final_path = path.as_ref().to_path_buf();
        let temp_path = final_path.with_extension("tmp");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;

        Ok(Self {
            temp_path,
            final_path,
            writer: BufWriter::new(file),
            committed: false,
        })
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), PersistError> {
        self.writer.write_all(data)?;
        Ok(())
    }

    pub fn commit(mut self) -> Result<(), PersistError> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()?;
        std::fs::rename(&self.temp_path, &self.final_path)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for AtomicWriter {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.temp_path);
        }
    }
}

/// CRC32 checksum of a byte slice.
pub fn checksum(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Serialize `body` with `bincode`, wrap it in a checksummed header, and
/// write it atomically to `path`.
pub fn write_with_integrity<T, P>(path: P, body: &T) -> Result<(), PersistError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let body_bytes = bincode::serialize(body)?;
    let header = FileHeader::new(checksum(&body_bytes), body_bytes.len() as u64);
    let header_bytes = bincode::serialize(&header)?;

    log::debug!(
        "writing snapshot to {:?} ({} header bytes + {} body bytes)",
        path.as_ref(),
        header_bytes.len(),
        body_bytes.len()
    );

    let mut writer = AtomicWriter::new(path)?;
    writer.write_all(&header_bytes)?;
    writer.write_all(&body_bytes)?;
    writer.commit()
}

/// Read and validate a snapshot written by [`write_with_integrity`].
pub fn read_with_validation<T, P>(path: P) -> Result<T, PersistError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let header: FileHeader = bincode::deserialize_from(&mut reader)?;
    header.validate()?;

    let mut body_bytes = Vec::new();
    reader.read_to_end(&mut body_bytes)?;

    let actual = checksum(&body_bytes);
    if actual != header.checksum {
        return Err(PersistError::ChecksumMismatch {
            expected: header.checksum,
            got: actual,
        });
    }

    if body_bytes.len() as u64 != header.body_len {
        return Err(PersistError::BadVersion {
            expected: header.body_len as u32,
            got: body_bytes.len() as u32,
        });
    }

    Ok(bincode::deserialize(&body_bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        words: Vec<u64>,
        size: usize,
    }

    #[test]
    fn checksum_is_deterministic_and_sensitive() {
        let a = b"hello world";
        let b = b"hello world";
        let c = b"hello world!";
        assert_eq!(checksum(a), checksum(b));
        assert_ne!(checksum(a), checksum(c));
    }

    #[test]
    fn atomic_write_without_commit_leaves_no_file() {
        let path = std::env::temp_dir().join("packed_collections_test_rollback.bin");
        let _ = fs::remove_file(&path);
        {
            let mut w = AtomicWriter::new(&path).unwrap();
            w.write_all(b"partial").unwrap();
        }
        assert!(!path.exists());
    }

    #[test]
    fn write_read_roundtrip() {
        let path = std::env::temp_dir().join("packed_collections_test_roundtrip.bin");
        let _ = fs::remove_file(&path);

        let original = Sample {
            words: vec![1, 2, 3, u64::MAX],
            size: 4,
        };
        write_with_integrity(&path, &original).unwrap();
        let loaded: Sample = read_with_validation(&path).unwrap();
        assert_eq!(loaded, original);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn corruption_is_detected() {
        let path = std::env::temp_dir().join("packed_collections_test_corruption.bin");
        let _ = fs::remove_file(&path);

        let original = Sample {
            words: vec![7, 8, 9],
            size: 3,
        };
        write_with_integrity(&path, &original).unwrap();

        let mut bytes = fs::read(&path).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        fs::write(&path, bytes).unwrap();

        let result: Result<Sample, _> = read_with_validation(&path);
        assert!(result.is_err());

        fs::remove_file(&path).unwrap();
    }
}
