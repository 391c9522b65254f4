//! Fake runtime distributions and source trees for staging tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const DARWIN_INFO_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
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
  <key>CFBundleName</key>
  <string>Electron</string>
  <key>CFBundlePackageType</key>
  <string>APPL</string>
</dict>
</plist>
"#;

fn write(path: &Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Lays out `<root>/binaries/<platform>` like a stock runtime download.
pub fn runtime(root: &Path, platform: &str) -> PathBuf {
    let dir = root.join("binaries").join(platform);
    match platform {
        "darwin" => {
            let contents = dir.join("Electron.app/Contents");
            write(&contents.join("Info.plist"), DARWIN_INFO_PLIST.as_bytes());
            write(&contents.join("MacOS/Electron"), b"darwin-runtime");
            write(&contents.join("Resources/atom.icns"), b"stock-icon");
            write(
                &contents.join("Resources/default_app/main.js"),
                b"default app",
            );
            let framework = contents.join("Frameworks/Electron Framework.framework");
            write(&framework.join("Versions/A/Electron Framework"), b"framework");
            #[cfg(unix)]
            std::os::unix::fs::symlink("A", framework.join("Versions/Current")).unwrap();
        }
        "linux" => {
            write(&dir.join("electron"), b"linux-runtime");
            write(&dir.join("libffmpeg.so"), b"ffmpeg");
            write(&dir.join("resources/default_app/main.js"), b"default app");
        }
        "win32" => {
            write(&dir.join("electron.exe"), b"win32-runtime");
            write(&dir.join("resources/default_app/main.js"), b"default app");
        }
        other => panic!("no fixture for {other}"),
    }
    dir
}

/// Writes an application source tree at `<root>/dev`.
pub fn sources(root: &Path) -> PathBuf {
    let dir = root.join("dev");
    write(&dir.join("package.json"), br#"{"name":"my-app","main":"main.js"}"#);
    write(&dir.join("main.js"), b"require('./lib/window')");
    write(&dir.join("lib/window.js"), b"module.exports = {}");
    dir
}

/// Sorted relative paths of every entry under `root`.
pub fn tree(root: &Path) -> Vec<String> {
    let mut entries: Vec<String> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| {
            e.unwrap()
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    entries.sort();
    entries
}
