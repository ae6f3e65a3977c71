use std::borrow::Cow;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use crate::core::error::{Error, Result};
use crate::core::types::Page;

const DOCUMENT_OPEN: &str = "<html><body>\n";
const DOCUMENT_CLOSE: &str = "</body></html>";
const COLUMN_OPEN: &str = "<div style=\"float:left; width:50%;\">\n";
const COLUMN_CLOSE: &str = "</div>\n";

/// Serializes pages into the HTML artifact that `ArtifactReader` re-reads.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactWriter {
    pub atomic: bool,
}

impl Default for ArtifactWriter {
    fn default() -> Self {
        ArtifactWriter { atomic: true }
    }
}

impl ArtifactWriter {
    pub fn new(atomic: bool) -> Self {
        ArtifactWriter { atomic }
    }

    /// Render the full document into `out`.
    pub fn render<W: Write>(pages: &[Page], out: &mut W) -> io::Result<()> {
        out.write_all(DOCUMENT_OPEN.as_bytes())?;

        for page in pages {
            out.write_all(COLUMN_OPEN.as_bytes())?;
            writeln!(out, "<h2>Column {}</h2>", page.number)?;
            for entry in &page.entries {
                writeln!(out, "<p>{}. {}</p>", entry.serial, escape_html(&entry.word))?;
            }
            out.write_all(COLUMN_CLOSE.as_bytes())?;
        }

        out.write_all(DOCUMENT_CLOSE.as_bytes())
    }

    pub fn render_to_string(pages: &[Page]) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = Self::render(pages, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Write the artifact to `path`, replacing any previous one.
    ///
    /// An existing read-only artifact is refused in both modes; a symlinked
    /// artifact is written through to the file it points at.
    pub fn write(&self, pages: &[Page], path: &Path) -> Result<()> {
        ensure_writable(path)?;
        if self.atomic {
            self.write_atomic(pages, &resolve_target(path))
        } else {
            self.write_in_place(pages, path)
        }
    }

    // A crash mid-write leaves a truncated artifact behind
    fn write_in_place(&self, pages: &[Page], path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| Error::output_unwritable(path, e))?;
        let mut writer = BufWriter::new(file);
        Self::render(pages, &mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| Error::output_unwritable(path, e))?;

        debug!(path = %path.display(), pages = pages.len(), "artifact written in place");
        Ok(())
    }

    fn write_atomic(&self, pages: &[Page], path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::output_unwritable(path, e))?;
        {
            let mut writer = BufWriter::new(&mut tmp);
            Self::render(pages, &mut writer)
                .and_then(|_| writer.flush())
                .map_err(|e| Error::output_unwritable(path, e))?;
        }

        carry_permissions(&tmp, path)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| Error::output_unwritable(path, e))?;

        let tmp_path = tmp.path().to_path_buf();
        tmp.persist(path).map_err(|e| Error::output_unwritable(path, e.error))?;

        debug!(
            path = %path.display(),
            staged = %tmp_path.display(),
            pages = pages.len(),
            "artifact replaced atomically"
        );
        Ok(())
    }
}

/// A rename only needs the directory to be writable, so the target's own
/// mode is checked before anything is staged.
fn ensure_writable(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.permissions().readonly() => Err(Error::output_unwritable(
            path,
            io::Error::new(io::ErrorKind::PermissionDenied, "artifact is read-only"),
        )),
        Ok(_) => OpenOptions::new()
            .write(true)
            .open(path)
            .map(|_| ())
            .map_err(|e| Error::output_unwritable(path, e)),
        Err(_) => Ok(()),
    }
}

/// The file a symlinked artifact points at; any other path is used as given.
fn resolve_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// Temp files are created owner-only; the artifact keeps the old file's mode.
fn carry_permissions(tmp: &NamedTempFile, path: &Path) -> io::Result<()> {
    match fs::metadata(path) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions()),
        Err(_) => set_default_mode(tmp.as_file()),
    }
}

#[cfg(unix)]
fn set_default_mode(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_mode(_file: &File) -> io::Result<()> {
    Ok(())
}

fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Entry;

    fn page(number: usize, entries: &[(usize, &str)]) -> Page {
        Page {
            number,
            entries: entries
                .iter()
                .map(|(serial, word)| Entry { serial: *serial, word: word.to_string() })
                .collect(),
        }
    }

    #[test]
    fn renders_exact_layout() {
        let pages = vec![page(1, &[(1, "ant"), (2, "bee")]), page(2, &[(3, "cat")])];
        let expected = "<html><body>\n\
            <div style=\"float:left; width:50%;\">\n\
            <h2>Column 1</h2>\n\
            <p>1. ant</p>\n\
            <p>2. bee</p>\n\
            </div>\n\
            <div style=\"float:left; width:50%;\">\n\
            <h2>Column 2</h2>\n\
            <p>3. cat</p>\n\
            </div>\n\
            </body></html>";
        assert_eq!(ArtifactWriter::render_to_string(&pages), expected);
    }

    #[test]
    fn no_pages_renders_empty_body() {
        assert_eq!(ArtifactWriter::render_to_string(&[]), "<html><body>\n</body></html>");
    }

    #[test]
    fn escapes_html_sensitive_text() {
        let pages = vec![page(1, &[(1, "a<b>&c")])];
        let html = ArtifactWriter::render_to_string(&pages);
        assert!(html.contains("<p>1. a&lt;b&gt;&amp;c</p>\n"));
    }

    #[test]
    fn atomic_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.html");
        fs::write(&path, "stale").unwrap();

        ArtifactWriter::new(true).write(&[page(1, &[(1, "ant")])], &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<html><body>\n"));
        assert!(written.contains("<p>1. ant</p>"));
        // only the artifact itself remains, no staged temp files
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn in_place_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.html");
        ArtifactWriter::new(false).write(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html><body>\n</body></html>");
    }

    #[test]
    fn missing_directory_is_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("words.html");
        for atomic in [true, false] {
            let err = ArtifactWriter::new(atomic).write(&[], &path).unwrap_err();
            assert_eq!(err.kind, crate::core::error::ErrorKind::OutputUnwritable);
            assert!(err.context.contains("words.html"));
        }
    }

    #[test]
    fn read_only_artifact_is_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.html");
        fs::write(&path, "<p>1. keep</p>\n").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();

        for atomic in [true, false] {
            let err = ArtifactWriter::new(atomic).write(&[page(1, &[(1, "ant")])], &path).unwrap_err();
            assert_eq!(err.kind, crate::core::error::ErrorKind::OutputUnwritable);
            assert!(err.context.contains("words.html"));
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>1. keep</p>\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_artifact_is_written_through() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.html");
        let link = dir.path().join("words.html");
        fs::write(&real, "stale").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        ArtifactWriter::new(true).write(&[page(1, &[(1, "ant")])], &link).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert!(fs::read_to_string(&real).unwrap().contains("<p>1. ant</p>"));
    }
}
