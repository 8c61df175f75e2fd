use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The only substitution marker recognized in the build output.
pub const PLACEHOLDER: &str = "{{API_KEY}}";

#[derive(Debug, Error)]
pub enum InjectError {
    #[error("target file not found at {}", .0.display())]
    TargetMissing(PathBuf),
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectOutcome {
    /// Occurrences replaced. Zero usually means an earlier run already
    /// processed the file.
    pub occurrences: usize,
}

/// Replace every occurrence of the placeholder with `key`.
///
/// Plain substring matching on both sides: values like `$1` or `\n` land in
/// the output verbatim.
pub fn replace_placeholder(contents: &str, key: &str) -> (String, usize) {
    let occurrences = contents.matches(PLACEHOLDER).count();
    if occurrences == 0 {
        return (contents.to_owned(), 0);
    }
    (contents.replace(PLACEHOLDER, key), occurrences)
}

/// Substitute the placeholder in the file at `path`, overwriting it in place.
/// The existence check runs before any read or write, so a missing target
/// mutates nothing.
pub fn inject_file(path: &Path, key: &str) -> Result<InjectOutcome, InjectError> {
    if !path.exists() {
        return Err(InjectError::TargetMissing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| InjectError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (updated, occurrences) = replace_placeholder(&contents, key);

    fs::write(path, updated).map_err(|source| InjectError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(InjectOutcome { occurrences })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let doc = "<head>{{API_KEY}}</head><body>{{API_KEY}}</body>";
        let (out, replaced) = replace_placeholder(doc, "abc123");
        assert_eq!(replaced, 2);
        assert_eq!(out, "<head>abc123</head><body>abc123</body>");
    }

    #[test]
    fn empty_key_erases_placeholder() {
        let (out, replaced) = replace_placeholder("<head>{{API_KEY}}</head>", "");
        assert_eq!(replaced, 1);
        assert_eq!(out, "<head></head>");
    }

    #[test]
    fn leaves_other_content_untouched() {
        let doc = "<html><body>no markers here</body></html>";
        let (out, replaced) = replace_placeholder(doc, "abc123");
        assert_eq!(replaced, 0);
        assert_eq!(out, doc);
    }

    #[test]
    fn replacement_value_is_not_reinterpreted() {
        let (out, replaced) = replace_placeholder("const k=\"{{API_KEY}}\";", "$1\\n${HOME}");
        assert_eq!(replaced, 1);
        assert_eq!(out, "const k=\"$1\\n${HOME}\";");
    }

    #[test]
    fn replacement_value_may_contain_newlines() {
        let (out, _) = replace_placeholder("a{{API_KEY}}b", "x\ny");
        assert_eq!(out, "ax\nyb");
    }
}
