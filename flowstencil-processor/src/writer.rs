//! Output file writer — unique allocation, durable writes, advisory cleanup.
//!
//! ## Allocation
//!
//! File names are `<prefix><unique-token><suffix>`. The token comes from the
//! platform temp-file primitive's atomic create-if-not-exists allocation
//! (`tempfile`), never from wall-clock naming, so concurrent calls cannot
//! collide on a path.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::WriteError;

/// Writes rendered text to uniquely named files in one output directory.
///
/// Every created path is remembered and removed best-effort when the writer
/// is dropped at session end. Downstream consumers own the files until then;
/// nothing else deletes them.
#[derive(Debug)]
pub struct OutputWriter {
    dir: PathBuf,
    created: std::sync::Mutex<Vec<PathBuf>>,
}

impl OutputWriter {
    /// Writer over the process-wide temporary directory.
    pub fn new() -> Self {
        Self::in_dir(std::env::temp_dir())
    }

    /// Writer over an explicit directory; used in tests to scope output
    /// files to a private location.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        OutputWriter {
            dir: dir.into(),
            created: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Allocate `<prefix><unique-token><suffix>`, write `content`, flush and
    /// sync to durable state, and return the absolute path.
    ///
    /// On any failure nothing is handed back and the allocation, if it got
    /// that far, is discarded. A returned path always names a fully written
    /// file.
    pub fn create_and_write(
        &self,
        prefix: &str,
        suffix: &str,
        content: &str,
    ) -> Result<PathBuf, WriteError> {
        let mut file = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(suffix)
            .tempfile_in(&self.dir)
            .map_err(|e| WriteError::Create {
                dir: self.dir.clone(),
                source: e,
            })?;

        if let Err(e) = write_and_sync(&mut file, content) {
            return Err(WriteError::Io {
                path: file.path().to_path_buf(),
                source: e,
            });
        }

        let path = file.into_temp_path().keep().map_err(|e| WriteError::Persist {
            path: e.path.to_path_buf(),
            source: e.error,
        })?;
        let path = if path.is_absolute() {
            path
        } else {
            std::env::current_dir()
                .map_err(|e| WriteError::Io {
                    path: path.clone(),
                    source: e,
                })?
                .join(path)
        };

        if let Ok(mut created) = self.created.lock() {
            created.push(path.clone());
        }
        tracing::debug!("wrote output file: {}", path.display());
        Ok(path)
    }
}

/// Write `content` fully and sync it to durable state.
fn write_and_sync(file: &mut tempfile::NamedTempFile, content: &str) -> std::io::Result<()> {
    file.write_all(content.as_bytes())?;
    file.flush()?;
    file.as_file().sync_all()
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        if let Ok(created) = self.created.get_mut() {
            for path in created.drain(..) {
                if fs::remove_file(&path).is_ok() {
                    tracing::debug!("removed output file: {}", path.display());
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn written_file_holds_exact_content() {
        let dir = TempDir::new().expect("tempdir");
        let writer = OutputWriter::in_dir(dir.path());
        let path = writer
            .create_and_write("rendered", ".out", "hello")
            .expect("write");
        assert!(path.is_absolute());
        assert_eq!(fs::read_to_string(&path).expect("read"), "hello");
    }

    #[test]
    fn file_name_is_prefix_token_suffix() {
        let dir = TempDir::new().expect("tempdir");
        let writer = OutputWriter::in_dir(dir.path());
        let path = writer
            .create_and_write("prefix", ".suffix", "x")
            .expect("write");
        let name = path.file_name().expect("file name").to_string_lossy();
        assert!(name.starts_with("prefix"));
        assert!(name.ends_with(".suffix"));
        assert!(name.len() > "prefix.suffix".len(), "unique token missing: {name}");
    }

    #[test]
    fn sequential_writes_never_collide() {
        let dir = TempDir::new().expect("tempdir");
        let writer = OutputWriter::in_dir(dir.path());
        let mut paths = HashSet::new();
        for _ in 0..64 {
            let path = writer.create_and_write("p", ".s", "c").expect("write");
            assert!(paths.insert(path), "duplicate path allocated");
        }
    }

    #[test]
    fn concurrent_writes_never_collide() {
        let dir = TempDir::new().expect("tempdir");
        let writer = OutputWriter::in_dir(dir.path());

        let paths: Vec<PathBuf> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        (0..16)
                            .map(|_| {
                                writer
                                    .create_and_write("rendered", ".out", "c")
                                    .expect("write")
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().expect("thread"))
                .collect()
        });

        let unique: HashSet<&PathBuf> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len(), "concurrent writes collided");
    }

    #[test]
    fn missing_directory_is_a_create_error() {
        let dir = TempDir::new().expect("tempdir");
        let gone = dir.path().join("does-not-exist");
        let writer = OutputWriter::in_dir(&gone);
        let err = writer
            .create_and_write("p", ".s", "c")
            .expect_err("create error");
        assert!(matches!(err, WriteError::Create { .. }));
    }

    #[test]
    fn drop_removes_created_files() {
        let dir = TempDir::new().expect("tempdir");
        let writer = OutputWriter::in_dir(dir.path());
        let path = writer.create_and_write("p", ".s", "c").expect("write");
        assert!(path.exists());
        drop(writer);
        assert!(!path.exists(), "drop should remove created files");
    }
}
