//! Source file path resolution.
//!
//! Include directives and command-line inputs name files relative to the
//! compiler's working directory. The front end needs the directory of each
//! file (to resolve further includes) and its base name (for diagnostics and
//! debug info), so [`split_path`] resolves and splits in one step.

use thiserror::Error;

/// Separator and root marker for source paths.
pub const PATH_SEPARATOR: char = '/';

/// A resolved path split into directory and base file name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SplitPath {
    /// Everything up to and including the final separator.
    pub directory: String,
    /// Everything after the final separator. Never empty.
    pub file_name: String,
}

/// Malformed input to [`split_path`].
///
/// These indicate an inconsistent file model inside the compiler rather than
/// a user mistake; drivers treat them as fatal.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum PathError {
    #[error("empty file name")]
    EmptyName,
    #[error("no path separator in `{0}`")]
    NoSeparator(String),
    #[error("path `{0}` ends in a separator")]
    EmptyFileName(String),
}

/// Resolve `relative_name` against `current_directory` and split the result.
///
/// Names starting with [`PATH_SEPARATOR`] are already absolute and ignore
/// `current_directory`. Otherwise the two are joined, adding a separator
/// when `current_directory` lacks a trailing one.
///
/// ```
/// use ispc_span::split_path;
///
/// let split = split_path("/home/u", "a.ispc").unwrap();
/// assert_eq!(split.directory, "/home/u/");
/// assert_eq!(split.file_name, "a.ispc");
/// ```
pub fn split_path(current_directory: &str, relative_name: &str) -> Result<SplitPath, PathError> {
    if relative_name.is_empty() {
        return Err(PathError::EmptyName);
    }

    let full_path = if relative_name.starts_with(PATH_SEPARATOR) {
        relative_name.to_owned()
    } else {
        let mut full = String::with_capacity(current_directory.len() + 1 + relative_name.len());
        full.push_str(current_directory);
        if !full.is_empty() && !full.ends_with(PATH_SEPARATOR) {
            full.push(PATH_SEPARATOR);
        }
        full.push_str(relative_name);
        full
    };

    let Some(separator) = full_path.rfind(PATH_SEPARATOR) else {
        return Err(PathError::NoSeparator(full_path));
    };
    let name_start = separator + PATH_SEPARATOR.len_utf8();
    if name_start == full_path.len() {
        return Err(PathError::EmptyFileName(full_path));
    }

    let file_name = full_path[name_start..].to_owned();
    let mut directory = full_path;
    directory.truncate(name_start);

    Ok(SplitPath {
        directory,
        file_name,
    })
}
