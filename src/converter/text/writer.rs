//! Plaintext file emission.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::Result;

/// Extension of every written file.
pub const FILE_EXTENSION: &str = "txt";

/// Output filename for an entry: lower-cased name plus extension.
pub(crate) fn filename(entry_name: &str) -> String {
    format!("{}.{}", entry_name.to_lowercase(), FILE_EXTENSION)
}

/// Build the file body: one decorated CIDR per line, newline terminated.
pub(crate) fn render_lines(cidrs: &[String], prefix: &str, suffix: &str) -> String {
    let mut buf = String::with_capacity(cidrs.len() * (prefix.len() + suffix.len() + 20));
    for cidr in cidrs {
        if !prefix.is_empty() {
            buf.push_str(prefix);
        }
        buf.push_str(cidr);
        if !suffix.is_empty() {
            buf.push_str(suffix);
        }
        buf.push('\n');
    }
    buf
}

/// Write `content` to `dir/filename`, creating `dir` if needed.
///
/// The content goes to a uniquely named temporary file in the same
/// directory first and is then renamed over the target, so readers never
/// see a partial file and no other file in `dir` is touched. The temporary
/// file is removed if anything fails.
pub(crate) fn write_file(dir: &Path, filename: &str, content: &[u8]) -> Result<()> {
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    // Atomic rename
    temp.persist(dir.join(filename)).map_err(|e| e.error)?;

    Ok(())
}
