//! Best-effort repair of malformed configuration files.
//!
//! Repair never silently corrupts data: the original file is copied to a
//! `.backup` sibling before any overwrite, a failed write restores from the
//! backup, and a file that still fails to parse after the fix pass is left
//! untouched.

pub mod decode;
pub mod fixes;

pub use decode::{decode_bytes, SourceEncoding};
pub use fixes::{apply_fixes, FixLog};

use crate::error::{AnfError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a repair attempt.
#[derive(Debug)]
pub struct RepairOutcome {
    /// Whether the file parses as YAML after any applied fixes.
    pub valid: bool,
    /// Encoding the file was read with.
    pub encoding: SourceEncoding,
    /// Fixes that were applied (empty when the file was already clean).
    pub fixes: FixLog,
    /// Whether the file on disk was rewritten.
    pub rewritten: bool,
}

/// Sibling backup path for a repaired file.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}

/// Attempt to repair the file in place.
///
/// Returns the outcome on success; `valid` is false when the content still
/// fails to parse after fixes (in which case nothing is written).
///
/// # Errors
///
/// `EncodingError` when no supported encoding decodes the file; `Io` for
/// filesystem failures. A failed overwrite restores the original from the
/// backup before the error is returned.
pub fn repair(path: &Path) -> Result<RepairOutcome> {
    let bytes = fs::read(path)?;
    let (text, encoding) =
        decode_bytes(&bytes).ok_or_else(|| AnfError::EncodingError {
            path: path.to_path_buf(),
        })?;
    tracing::debug!("decoded {} as {}", path.display(), encoding.label());

    let (fixed, fix_log) = apply_fixes(&text);

    if serde_yaml::from_str::<serde_yaml::Value>(&fixed).is_err() {
        return Ok(RepairOutcome {
            valid: false,
            encoding,
            fixes: fix_log,
            rewritten: false,
        });
    }

    // Already valid, nothing changed, and the on-disk bytes are already the
    // UTF-8 we would write: leave the file alone.
    if fix_log.is_empty() && fixed.as_bytes() == bytes.as_slice() {
        return Ok(RepairOutcome {
            valid: true,
            encoding,
            fixes: fix_log,
            rewritten: false,
        });
    }

    let backup = backup_path(path);
    fs::copy(path, &backup)?;

    if let Err(write_err) = fs::write(path, fixed.as_bytes()) {
        // Put the original back so a failed write cannot lose data.
        let _ = fs::copy(&backup, path);
        return Err(AnfError::Io(write_err));
    }

    Ok(RepairOutcome {
        valid: true,
        encoding,
        fixes: fix_log,
        rewritten: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn valid_file_is_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "variables:\n  key: value\n").unwrap();

        let outcome = repair(&path).unwrap();
        assert!(outcome.valid);
        assert!(outcome.fixes.is_empty());
        assert!(!outcome.rewritten);
        assert!(!backup_path(&path).exists());
    }

    #[test]
    fn repair_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "variables:\r\n\tkey:value\r\n").unwrap();

        let first = repair(&path).unwrap();
        assert!(first.valid);
        assert!(first.rewritten);
        let after_first = fs::read(&path).unwrap();

        let second = repair(&path).unwrap();
        assert!(second.valid);
        assert!(second.fixes.is_empty());
        assert!(!second.rewritten);
        assert_eq!(fs::read(&path).unwrap(), after_first);
    }

    #[test]
    fn crlf_and_tabs_are_fixed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "variables:\r\n\tkey:value\r\n").unwrap();

        let outcome = repair(&path).unwrap();
        assert!(outcome.valid);

        let repaired = fs::read_to_string(&path).unwrap();
        assert_eq!(repaired, "variables:\n  key: value\n");
    }

    #[test]
    fn backup_preserves_original_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        let original = "variables:\r\n  key: value\r\n";
        fs::write(&path, original).unwrap();

        repair(&path).unwrap();

        let backed_up = fs::read_to_string(backup_path(&path)).unwrap();
        assert_eq!(backed_up, original);
    }

    #[test]
    fn unparseable_after_fixes_leaves_file_alone() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        let broken = "variables:\n  key: [unclosed\n";
        fs::write(&path, broken).unwrap();

        let outcome = repair(&path).unwrap();
        assert!(!outcome.valid);
        assert!(!outcome.rewritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), broken);
        assert!(!backup_path(&path).exists());
    }

    #[test]
    fn bom_is_stripped_and_logged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"variables: {}\n");
        fs::write(&path, &bytes).unwrap();

        let outcome = repair(&path).unwrap();
        assert!(outcome.valid);
        assert!(outcome
            .fixes
            .iter()
            .any(|f| f.contains("BOM")));
        assert_eq!(fs::read_to_string(&path).unwrap(), "variables: {}\n");
    }

    #[test]
    fn latin1_file_is_rewritten_as_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        // "café" with Latin-1 e-acute; invalid as UTF-8.
        fs::write(&path, b"variables:\n  name: caf\xe9\n").unwrap();

        let outcome = repair(&path).unwrap();
        assert!(outcome.valid);
        assert_eq!(outcome.encoding, SourceEncoding::Latin1);
        assert!(outcome.rewritten);

        let repaired = fs::read_to_string(&path).unwrap();
        assert!(repaired.contains("café"));
    }
}
