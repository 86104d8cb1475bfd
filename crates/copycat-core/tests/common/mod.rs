//! Shared fixtures for copycat-core integration tests

#![allow(dead_code)]

use copycat_core::copycat_scanner::Extension;
use copycat_core::{FolderOpener, Interaction, Prompt, ValidationError};
use sha2::{Digest, Sha256};
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Compute SHA256 hash of a file
pub fn hash_file(path: &Path) -> String {
    let content = fs::read(path).expect("Failed to read file");
    let mut hasher = Sha256::new();
    hasher.update(&content);
    hex::encode(hasher.finalize())
}

/// Relative path -> hash for every file under `path` (directories map to "")
pub fn snapshot_directory(path: &Path) -> BTreeMap<String, String> {
    let mut snapshot = BTreeMap::new();

    for entry in WalkDir::new(path).min_depth(1).into_iter().filter_map(Result::ok) {
        let relative_path = entry
            .path()
            .strip_prefix(path)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        let hash = if entry.file_type().is_file() {
            hash_file(entry.path())
        } else {
            String::new()
        };
        snapshot.insert(relative_path, hash);
    }

    snapshot
}

/// Build an installed-extension fixture at `root/folder`
pub fn install_extension(root: &Path, folder: &str) -> Extension {
    let dir = root.join(folder);
    fs::create_dir_all(dir.join("out")).expect("Failed to create extension dir");
    fs::create_dir_all(dir.join("media").join("icons")).expect("Failed to create media dir");
    fs::write(
        dir.join("package.json"),
        r#"{"publisher": "acme", "name": "rocket", "displayName": "Rocket", "version": "1.0.0"}"#,
    )
    .expect("Failed to write package.json");
    fs::write(dir.join("out").join("extension.js"), "exports.activate = () => {};")
        .expect("Failed to write extension.js");
    fs::write(
        dir.join("media").join("icons").join("logo.png"),
        [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a],
    )
    .expect("Failed to write logo.png");

    Extension::from_dir(&dir).expect("Fixture extension should parse")
}

/// One scripted answer
#[derive(Debug, Clone)]
pub enum Reply {
    Pick(usize),
    Text(&'static str),
    Folder(PathBuf),
    Confirm(bool),
    Cancel,
}

/// Plays back a fixed list of replies and records what was shown
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    replies: VecDeque<Reply>,
    pub prompts: Vec<String>,
    pub rejections: Vec<ValidationError>,
    pub notices: Vec<String>,
}

impl ScriptedInteraction {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: replies.into(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    fn next(&mut self, what: &str) -> Reply {
        self.prompts.push(what.to_string());
        self.replies.pop_front().unwrap_or(Reply::Cancel)
    }
}

impl Interaction for ScriptedInteraction {
    fn pick_extension(&mut self, _extensions: &[Extension]) -> Option<usize> {
        match self.next("extension") {
            Reply::Pick(i) => Some(i),
            Reply::Cancel => None,
            other => panic!("expected an extension pick, got {other:?}"),
        }
    }

    fn ask(&mut self, prompt: &Prompt) -> Option<String> {
        match self.next(&prompt.title) {
            Reply::Text(text) => Some(text.to_string()),
            Reply::Cancel => None,
            other => panic!("expected text for '{}', got {other:?}", prompt.title),
        }
    }

    fn reject(&mut self, _prompt: &Prompt, error: &ValidationError) {
        self.rejections.push(error.clone());
    }

    fn pick_folder(&mut self, _title: &str) -> Option<PathBuf> {
        match self.next("folder") {
            Reply::Folder(path) => Some(path),
            Reply::Cancel => None,
            other => panic!("expected a folder, got {other:?}"),
        }
    }

    fn confirm(&mut self, _title: &str) -> Option<bool> {
        match self.next("confirm") {
            Reply::Confirm(yes) => Some(yes),
            Reply::Cancel => None,
            other => panic!("expected a confirmation, got {other:?}"),
        }
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Records opened folders instead of launching an editor
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<PathBuf>>,
    pub fail: bool,
}

impl FolderOpener for RecordingOpener {
    fn open(&self, folder: &Path) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "editor not installed"));
        }
        self.opened.borrow_mut().push(folder.to_path_buf());
        Ok(())
    }
}
