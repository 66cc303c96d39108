//! Filesystem side of the emitter: create-or-skip writes for controllers,
//! unconditional writes for views, and the guarded patch of the shared
//! routes file.

use fs2::FileExt;
use laragen_core::LaragenError;
use std::fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Which of the two route-file lines this run actually added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePatch {
    pub import_added: bool,
    pub route_added: bool,
}

pub struct CodeWriter;

impl CodeWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write `content` to `path` unless the file already exists. Returns
    /// whether anything was written.
    pub fn write_new(&self, path: &Path, content: &str) -> Result<bool, LaragenError> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(true)
    }

    /// Write `content` to `path`, creating parent directories and replacing
    /// any existing file.
    pub fn write(&self, path: &Path, content: &str) -> Result<(), LaragenError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Patch the shared routes file: insert `import_line` right after the
    /// leading `<?php` marker and append `route_line` at end-of-file, each
    /// only when the exact line is not already present. The whole
    /// read-modify-write runs under an exclusive lock so concurrent runs
    /// cannot interleave their patches.
    pub fn patch_routes(
        &self,
        path: &Path,
        import_line: &str,
        route_line: &str,
    ) -> Result<RoutePatch, LaragenError> {
        let mut file = fs::OpenOptions::new().read(true).write(true).open(path)?;
        file.lock_exclusive()?;
        // On the error path the lock is released when `file` drops.
        let patch = Self::apply_patch(&mut file, import_line, route_line)?;
        file.unlock()?;
        Ok(patch)
    }

    fn apply_patch(
        file: &mut fs::File,
        import_line: &str,
        route_line: &str,
    ) -> Result<RoutePatch, LaragenError> {
        let mut content = String::new();
        file.read_to_string(&mut content)?;

        let import_added = !content.contains(import_line);
        if import_added {
            content = match content.strip_prefix("<?php") {
                Some(rest) => format!("<?php\n\n{}{}", import_line, rest),
                None => format!("{}\n{}", import_line, content),
            };
        }

        let route_added = !content.contains(route_line);
        if route_added {
            if !content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(route_line);
            content.push('\n');
        }

        if import_added || route_added {
            file.seek(SeekFrom::Start(0))?;
            file.set_len(0)?;
            file.write_all(content.as_bytes())?;
        }

        Ok(RoutePatch {
            import_added,
            route_added,
        })
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMPORT: &str = "use App\\Http\\Controllers\\PostController;";
    const ROUTE: &str = "Route::resource('posts', PostController::class);";

    #[test]
    fn test_write_new_skips_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PostController.php");
        let writer = CodeWriter::new();

        assert!(writer.write_new(&path, "first").unwrap());
        assert!(!writer.write_new(&path, "second").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn test_write_creates_parent_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Pages/Post/Index.vue");
        let writer = CodeWriter::new();

        writer.write(&path, "v1").unwrap();
        writer.write(&path, "v2").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }

    #[test]
    fn test_patch_routes_inserts_import_after_php_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("web.php");
        fs::write(&path, "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n").unwrap();

        let patch = CodeWriter::new().patch_routes(&path, IMPORT, ROUTE).unwrap();
        assert!(patch.import_added);
        assert!(patch.route_added);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&format!("<?php\n\n{}\n", IMPORT)));
        assert!(content.ends_with(&format!("{}\n", ROUTE)));
    }

    #[test]
    fn test_patch_routes_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("web.php");
        fs::write(&path, "<?php\n").unwrap();
        let writer = CodeWriter::new();

        writer.patch_routes(&path, IMPORT, ROUTE).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        let patch = writer.patch_routes(&path, IMPORT, ROUTE).unwrap();
        assert!(!patch.import_added);
        assert!(!patch.route_added);
        assert_eq!(fs::read_to_string(&path).unwrap(), first);

        assert_eq!(first.matches(IMPORT).count(), 1);
        assert_eq!(first.matches(ROUTE).count(), 1);
    }

    #[test]
    fn test_patch_routes_without_php_marker_prepends_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("web.php");
        fs::write(&path, "// routes\n").unwrap();

        CodeWriter::new().patch_routes(&path, IMPORT, ROUTE).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(IMPORT));
    }

    #[test]
    fn test_patch_routes_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CodeWriter::new()
            .patch_routes(&dir.path().join("web.php"), IMPORT, ROUTE)
            .unwrap_err();
        assert!(matches!(err, LaragenError::Io(_)));
    }
}
