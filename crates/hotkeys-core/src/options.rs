//! Flat key-value options store backed by a `key=value` text file.

use crate::error::{HotkeyError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Generic string options store the hotkey persistence writes through.
///
/// Keys are matched without regard to ASCII case.
pub trait OptionsStore {
    fn get(&self, key: &str) -> Option<&str>;

    /// Set `key` to `value`, or delete it when `value` is `None`.
    fn set(&mut self, key: &str, value: Option<&str>) -> Result<()>;

    /// Every stored pair, in stored order.
    fn pairs(&self) -> Vec<(&str, &str)>;
}

/// Insertion-ordered options. When loaded from a file, every `set` writes
/// the whole file back before returning.
#[derive(Clone, Debug, Default)]
pub struct Options {
    entries: Vec<(String, String)>,
    path: Option<PathBuf>,
}

impl Options {
    /// Options that are never written anywhere.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load options from `path`. A missing file yields an empty store that
    /// will be created on the first `set`. Lines that are not `key=value`
    /// are skipped and returned as warnings.
    pub fn load(path: &Path) -> Result<(Self, Vec<String>)> {
        let (entries, warnings) = if path.exists() {
            let content = fs::read_to_string(path)?;
            parse_options_content(&content)
        } else {
            (Vec::new(), Vec::new())
        };
        let options = Self {
            entries,
            path: Some(path.to_path_buf()),
        };
        Ok((options, warnings))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the store to its file, if it has one.
    pub fn save(&self) -> Result<()> {
        self.write_entries(&self.entries)
    }

    fn write_entries(&self, entries: &[(String, String)]) -> Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, write_options_content(entries))?;
        }
        Ok(())
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))
    }
}

impl OptionsStore for Options {
    fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.entries[i].1.as_str())
    }

    fn set(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        validate(key, value)?;
        let mut entries = self.entries.clone();
        match (self.position(key), value) {
            (Some(i), Some(value)) => entries[i].1 = value.to_string(),
            (Some(i), None) => {
                entries.remove(i);
            }
            (None, Some(value)) => entries.push((key.to_string(), value.to_string())),
            (None, None) => return Ok(()),
        }
        // Only commit once the file agrees.
        self.write_entries(&entries)?;
        self.entries = entries;
        Ok(())
    }

    fn pairs(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

fn validate(key: &str, value: Option<&str>) -> Result<()> {
    let malformed = |reason: &str| HotkeyError::MalformedEntry {
        key: key.to_string(),
        reason: reason.to_string(),
    };
    if key.trim().is_empty() || key.trim() != key {
        return Err(malformed("key must be non-empty without surrounding whitespace"));
    }
    if key.contains(['=', '\n', '\r']) {
        return Err(malformed("key cannot contain '=' or line breaks"));
    }
    if value.is_some_and(|v| v.contains(['\n', '\r'])) {
        return Err(malformed("value cannot contain line breaks"));
    }
    Ok(())
}

/// Parse `key=value` lines. Blank lines and `#` comments are ignored.
pub fn parse_options_content(content: &str) -> (Vec<(String, String)>, Vec<String>) {
    let mut entries: Vec<(String, String)> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            warnings.push(
                HotkeyError::Parse {
                    line: line_num + 1,
                    message: "Expected 'key=value' format".to_string(),
                }
                .to_string(),
            );
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            warnings.push(
                HotkeyError::Parse {
                    line: line_num + 1,
                    message: "Empty key".to_string(),
                }
                .to_string(),
            );
            continue;
        }

        let value = value.trim().to_string();
        match entries.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
            Some(existing) => existing.1 = value,
            None => entries.push((key.to_string(), value)),
        }
    }

    (entries, warnings)
}

pub fn write_options_content(entries: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_and_delete() {
        let mut options = Options::in_memory();
        options.set("name", Some("value")).expect("set");
        assert_eq!(options.get("name"), Some("value"));
        options.set("name", Some("other")).expect("set");
        assert_eq!(options.get("name"), Some("other"));
        assert_eq!(options.len(), 1);
        options.set("name", None).expect("delete");
        assert_eq!(options.get("name"), None);
        assert!(options.is_empty());
    }

    #[test]
    fn keys_ignore_case_but_keep_stored_spelling() {
        let mut options = Options::in_memory();
        options.set("Hotkey-B&1", Some("False&hi")).expect("set");
        assert_eq!(options.get("hotkey-b&1"), Some("False&hi"));
        options.set("HOTKEY-B&1", Some("True&hi")).expect("set");
        assert_eq!(options.pairs(), vec![("Hotkey-B&1", "True&hi")]);
    }

    #[test]
    fn deleting_missing_key_is_noop() {
        let mut options = Options::in_memory();
        options.set("missing", None).expect("delete");
        assert!(options.is_empty());
    }

    #[test]
    fn rejects_line_breaks() {
        let mut options = Options::in_memory();
        assert!(options.set("k", Some("a\nb")).is_err());
        assert!(options.set("a=b", Some("v")).is_err());
        assert!(options.set("", Some("v")).is_err());
        assert!(options.is_empty());
    }

    #[test]
    fn parse_skips_comments_and_reports_bad_lines() {
        let content = "# options\n\nusername = bob\nnot a pair\nhotkey-B&1=False&a=b\n=orphan\n";
        let (entries, warnings) = parse_options_content(content);
        assert_eq!(
            entries,
            vec![
                ("username".to_string(), "bob".to_string()),
                ("hotkey-B&1".to_string(), "False&a=b".to_string()),
            ]
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("line 4"));
        assert!(warnings[1].contains("line 6"));
    }

    #[test]
    fn parse_later_duplicate_wins() {
        let (entries, _) = parse_options_content("a=1\nA=2\n");
        assert_eq!(entries, vec![("a".to_string(), "2".to_string())]);
    }

    #[test]
    fn file_backed_set_writes_through() {
        let temp_path = std::env::temp_dir().join("hotkeys_options_write_through.txt");
        let _ = std::fs::remove_file(&temp_path);

        let (mut options, warnings) = Options::load(&temp_path).expect("load");
        assert!(warnings.is_empty());
        assert!(options.is_empty());
        options.set("hotkey-F&2", Some("True&hi")).expect("set");

        let content = std::fs::read_to_string(&temp_path).expect("read");
        assert_eq!(content, "hotkey-F&2=True&hi\n");

        let (reloaded, _) = Options::load(&temp_path).expect("reload");
        assert_eq!(reloaded.get("hotkey-f&2"), Some("True&hi"));

        options.set("hotkey-F&2", None).expect("delete");
        let content = std::fs::read_to_string(&temp_path).expect("read");
        assert_eq!(content, "");

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn failed_write_leaves_entries_unchanged() {
        // A regular file where the parent directory should be.
        let blocker = std::env::temp_dir().join("hotkeys_options_blocker");
        std::fs::write(&blocker, "").expect("write blocker");

        let (mut options, _) = Options::load(&blocker.join("options.txt")).expect("load");
        assert!(options.set("hotkey-B&1", Some("False&hi")).is_err());
        assert_eq!(options.get("hotkey-B&1"), None);
        assert!(options.is_empty());

        let _ = std::fs::remove_file(&blocker);
    }
}
