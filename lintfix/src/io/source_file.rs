//! Whole-file read and in-place write-back for source files.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Read a file fully into memory. Non-UTF-8 content is an error.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Overwrite `path` in place with `contents`.
///
/// The existing file is truncated and rewritten, so hard links and symlink
/// targets see the new text. The original content is not kept. A read-only
/// file is an error, even for a privileged user.
pub fn write_source(path: &Path, contents: &str) -> Result<()> {
    let metadata = fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
    if metadata.permissions().readonly() {
        bail!("write {}: file is read-only", path.display());
    }
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("open {} for writing", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    file.flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_replaces_content_and_leaves_no_extra_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("a.ts");
        fs::write(&path, "old content that is longer").expect("seed");

        write_source(&path, "new").expect("write");

        assert_eq!(read_source(&path).expect("read"), "new");
        let names: Vec<_> = fs::read_dir(temp.path())
            .expect("read_dir")
            .map(|entry| entry.expect("entry").file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a.ts")]);
    }

    #[test]
    fn write_to_read_only_file_fails_and_keeps_content() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("locked.ts");
        fs::write(&path, "old").expect("seed");
        let mut perms = fs::metadata(&path).expect("stat").permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).expect("chmod");

        let err = write_source(&path, "new").expect_err("should fail");

        assert!(err.to_string().contains("locked.ts"));
        assert!(err.to_string().contains("read-only"));
        assert_eq!(read_source(&path).expect("read"), "old");
    }

    #[cfg(unix)]
    #[test]
    fn write_updates_every_hard_link() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("a.ts");
        let alias = temp.path().join("alias.ts");
        fs::write(&path, "old").expect("seed");
        fs::hard_link(&path, &alias).expect("link");

        write_source(&path, "new").expect("write");

        assert_eq!(read_source(&alias).expect("read alias"), "new");
    }

    #[cfg(unix)]
    #[test]
    fn write_through_symlink_updates_target() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("real.ts");
        let link = temp.path().join("link.ts");
        fs::write(&target, "old").expect("seed");
        std::os::unix::fs::symlink(&target, &link).expect("symlink");

        write_source(&link, "new").expect("write");

        assert_eq!(read_source(&target).expect("read target"), "new");
        assert!(fs::symlink_metadata(&link).expect("lstat").file_type().is_symlink());
    }

    #[test]
    fn read_missing_file_names_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("gone.ts");
        let err = read_source(&path).expect_err("should fail");
        assert!(err.to_string().contains("gone.ts"));
    }

    #[test]
    fn read_rejects_non_utf8() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("bin.ts");
        fs::write(&path, b"\xff\xfe\x00").expect("seed");
        assert!(read_source(&path).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn write_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("script.ts");
        fs::write(&path, "old").expect("seed");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o754)).expect("chmod");

        write_source(&path, "new").expect("write");

        let mode = fs::metadata(&path).expect("stat").permissions().mode();
        assert_eq!(mode & 0o777, 0o754);
    }
}
