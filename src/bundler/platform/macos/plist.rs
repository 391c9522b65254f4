//! Info.plist rewriting for branded darwin bundles.
//!
//! The property list is parsed (XML or binary), substitutions are applied to
//! every string value, and the result is written back as XML. Dictionary keys
//! are never touched, so `CFBundleExecutable` stays a key while its value
//! changes.

use crate::bundler::error::{Error, ErrorExt, Result};
use plist::Value;
use regex::{NoExpand, Regex};
use std::{io::Cursor, path::Path};

/// A single text replacement applied to property list string values.
#[derive(Clone, Debug)]
pub struct Substitution {
    pattern: Regex,
    replacement: String,
}

impl Substitution {
    /// Replaces `word` only where it stands as a whole word.
    ///
    /// `Electron` matches in `Electron` and `Electron Helper`, not in
    /// `ElectronHelper` or `com.github.electron`.
    pub fn whole_word(word: &str, replacement: impl Into<String>) -> Result<Self> {
        Self::new(&format!(r"\b{}\b", regex::escape(word)), replacement)
    }

    /// Replaces every occurrence of `text` verbatim.
    pub fn literal(text: &str, replacement: impl Into<String>) -> Result<Self> {
        Self::new(&regex::escape(text), replacement)
    }

    fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| Error::GenericError(format!("invalid substitution pattern: {e}")))?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    fn apply(&self, text: &str) -> Option<String> {
        if !self.pattern.is_match(text) {
            return None;
        }
        Some(
            self.pattern
                .replace_all(text, NoExpand(&self.replacement))
                .into_owned(),
        )
    }
}

/// Applies `substitutions` in order to every string value in the property
/// list at `path` and writes it back as XML.
///
/// Returns the number of string values that changed. The file is rewritten
/// only when something changed.
pub async fn rewrite_info_plist(path: &Path, substitutions: &[Substitution]) -> Result<usize> {
    let bytes = tokio::fs::read(path)
        .await
        .fs_context("reading property list", path)?;

    let mut value = Value::from_reader(Cursor::new(bytes)).map_err(|error| Error::Plist {
        path: path.to_path_buf(),
        error,
    })?;

    let changed = rewrite_value(&mut value, substitutions);
    if changed == 0 {
        log::debug!("No substitutions matched in {}", path.display());
        return Ok(0);
    }

    let mut out = Vec::new();
    value.to_writer_xml(&mut out).map_err(|error| Error::Plist {
        path: path.to_path_buf(),
        error,
    })?;
    tokio::fs::write(path, out)
        .await
        .fs_context("writing property list", path)?;

    log::debug!("Rewrote {} value(s) in {}", changed, path.display());
    Ok(changed)
}

fn rewrite_value(value: &mut Value, substitutions: &[Substitution]) -> usize {
    match value {
        Value::String(text) => {
            let mut changed = false;
            for substitution in substitutions {
                if let Some(replaced) = substitution.apply(text) {
                    *text = replaced;
                    changed = true;
                }
            }
            usize::from(changed)
        }
        Value::Array(items) => items
            .iter_mut()
            .map(|item| rewrite_value(item, substitutions))
            .sum(),
        Value::Dictionary(dict) => dict
            .values_mut()
            .map(|item| rewrite_value(item, substitutions))
            .sum(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const STOCK_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
  <key>CFBundleDisplayName</key>
  <string>Electron</string>
  <key>CFBundleExecutable</key>
  <string>Electron</string>
  <key>CFBundleIconFile</key>
  <string>atom.icns</string>
  <key>CFBundleIdentifier</key>
  <string>com.github.electron</string>
  <key>ElectronHelperName</key>
  <string>ElectronHelper</string>
  <key>CFBundleURLTypes</key>
  <array>
    <dict>
      <key>CFBundleURLName</key>
      <string>Electron Launcher</string>
    </dict>
  </array>
</dict>
</plist>
"#;

    fn dict(value: &Value) -> &plist::Dictionary {
        value.as_dictionary().unwrap()
    }

    fn string<'a>(dict: &'a plist::Dictionary, key: &str) -> Option<&'a str> {
        dict.get(key).and_then(Value::as_string)
    }

    #[tokio::test]
    async fn rewrites_whole_words_and_literals_in_values_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Info.plist");
        std::fs::write(&path, STOCK_PLIST).unwrap();

        let changed = rewrite_info_plist(
            &path,
            &[
                Substitution::whole_word("Electron", "MyApp").unwrap(),
                Substitution::literal("com.github.electron", "com.example.myapp").unwrap(),
            ],
        )
        .await
        .unwrap();
        assert_eq!(changed, 4);

        let value = Value::from_file(&path).unwrap();
        let root = dict(&value);
        assert_eq!(string(root, "CFBundleDisplayName"), Some("MyApp"));
        assert_eq!(string(root, "CFBundleExecutable"), Some("MyApp"));
        assert_eq!(string(root, "CFBundleIdentifier"), Some("com.example.myapp"));
        assert_eq!(string(root, "CFBundleIconFile"), Some("atom.icns"));
        assert_eq!(string(root, "ElectronHelperName"), Some("ElectronHelper"));

        let url_types = root.get("CFBundleURLTypes").and_then(Value::as_array).unwrap();
        assert_eq!(
            string(dict(&url_types[0]), "CFBundleURLName"),
            Some("MyApp Launcher")
        );
    }

    #[tokio::test]
    async fn replacement_is_not_expanded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Info.plist");
        std::fs::write(&path, STOCK_PLIST).unwrap();

        rewrite_info_plist(&path, &[Substitution::literal("atom.icns", "$1.icns").unwrap()])
            .await
            .unwrap();

        let value = Value::from_file(&path).unwrap();
        assert_eq!(string(dict(&value), "CFBundleIconFile"), Some("$1.icns"));
    }

    #[tokio::test]
    async fn unparsable_metadata_is_a_plist_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Info.plist");
        std::fs::write(&path, "<plist><dict><key>broken").unwrap();

        let err = rewrite_info_plist(&path, &[Substitution::literal("a", "b").unwrap()])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Plist { .. }));
    }
}
