//! JSON file store for question sets.
//! Each set is a `<name>.json` file whose root is an array of questions.

use crate::errors::{FileError, StoreError};
use crate::models::{Question, QuestionSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const DEFAULT_SETS_DIR: &str = "question_sets";
const EXTENSION: &str = "json";

/// Directory of question set files. The directory is created on demand.
#[derive(Clone, Debug)]
pub struct QuestionSetStore {
    root: PathBuf,
}

/// Parses a question set document.
fn read_questions(path: &Path) -> Result<Vec<Question>, FileError> {
    let contents = fs::read_to_string(path)?;
    let questions: Vec<Question> = serde_json::from_str(&contents)?;
    Ok(questions)
}

/// Sibling file that a write goes through before replacing `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", file_name))
}

/// Writes questions as pretty-printed JSON, replacing any existing file.
/// The old file stays intact if the write fails.
fn write_questions(path: &Path, questions: &[Question]) -> Result<(), FileError> {
    let json_string = serde_json::to_string_pretty(questions)?;
    let temp_path = temp_path_for(path);
    let written = fs::write(&temp_path, json_string).and_then(|_| fs::rename(&temp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    Ok(())
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(EXTENSION))
}

/// Drops a trailing `.json` (any case) that a user typed into a set name.
fn strip_json_extension(name: &str) -> &str {
    let suffix_len = EXTENSION.len() + 1;
    if name.len() > suffix_len
        && name.is_char_boundary(name.len() - suffix_len)
        && has_json_extension(Path::new(name))
    {
        &name[..name.len() - suffix_len]
    } else {
        name
    }
}

fn is_valid_set_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains(std::path::MAIN_SEPARATOR)
}

impl QuestionSetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Directory {
            path: self.root.clone(),
            source,
        })
    }

    /// File names of all stored sets, sorted by name.
    pub fn list_sets(&self) -> Result<Vec<String>, StoreError> {
        self.ensure_dir()?;

        let directory_error = |source: io::Error| StoreError::Directory {
            path: self.root.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(directory_error)? {
            let entry = entry.map_err(directory_error)?;
            let path = entry.path();
            if !path.is_file() || !has_json_extension(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Loads a set by file name. The set's name is the file stem.
    pub fn load_set(&self, file_name: &str) -> Result<QuestionSet, StoreError> {
        let path = self.path_for(file_name);
        let questions = read_questions(&path).map_err(|source| {
            log::error!("Failed to load '{}': {}", path.display(), source);
            StoreError::Load {
                file: file_name.to_string(),
                source,
            }
        })?;

        for question in &questions {
            if !question.options.contains(&question.correct_answer) {
                log::warn!(
                    "Question '{}' in '{}' has a correct answer that is not one of its options",
                    question.text,
                    file_name
                );
            }
        }

        let name = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name)
            .to_string();

        let set = QuestionSet::new(name, questions);
        if set.is_empty() {
            log::warn!("'{}' contains no questions", file_name);
        }
        log::info!("Loaded '{}' with {} questions", file_name, set.len());
        Ok(set)
    }

    /// Saves `questions` as `<name>.json`, overwriting an existing set of that name.
    /// A name already ending in `.json` is not given a second extension.
    pub fn save_set(&self, name: &str, questions: &[Question]) -> Result<PathBuf, StoreError> {
        let name = strip_json_extension(name.trim());
        if !is_valid_set_name(name) {
            return Err(StoreError::InvalidName(name.to_string()));
        }

        self.ensure_dir()?;
        let path = self.path_for(&format!("{}.{}", name, EXTENSION));
        write_questions(&path, questions).map_err(|source| {
            log::error!("Failed to save '{}': {}", path.display(), source);
            StoreError::Save {
                name: name.to_string(),
                source,
            }
        })?;

        log::info!("Saved question set '{}' to '{}'", name, path.display());
        Ok(path)
    }

    /// Copies an external question set file into the store as `<stem>.json`,
    /// keeping the source's file stem. The source must parse as a question set.
    pub fn import_set(&self, source_path: &Path) -> Result<String, StoreError> {
        let import_error = |source: FileError| StoreError::Import {
            path: source_path.to_path_buf(),
            source,
        };

        let stem = source_path
            .file_stem()
            .and_then(|n| n.to_str())
            .filter(|stem| is_valid_set_name(stem))
            .ok_or_else(|| {
                import_error(FileError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "path has no usable file name",
                )))
            })?;
        let file_name = format!("{}.{}", stem, EXTENSION);

        let questions = read_questions(source_path).map_err(import_error)?;

        self.ensure_dir()?;
        write_questions(&self.path_for(&file_name), &questions).map_err(import_error)?;

        log::info!(
            "Imported {} questions from '{}' as '{}'",
            questions.len(),
            source_path.display(),
            file_name
        );
        Ok(file_name)
    }

    pub fn last_modified(&self, file_name: &str) -> Option<SystemTime> {
        fs::metadata(self.path_for(file_name))
            .and_then(|meta| meta.modified())
            .ok()
    }

    /// Writes a starter set when the store has none, so the first run is playable.
    /// Returns whether anything was written.
    pub fn seed_sample_set(&self) -> Result<bool, StoreError> {
        if !self.list_sets()?.is_empty() {
            return Ok(false);
        }
        self.save_set("General Knowledge", &sample_questions())?;
        Ok(true)
    }
}

fn sample_question(text: &str, options: [&str; 4], correct_answer: &str) -> Question {
    Question {
        text: text.to_string(),
        options: options.map(str::to_string),
        correct_answer: correct_answer.to_string(),
    }
}

pub fn sample_questions() -> Vec<Question> {
    vec![
        sample_question("2+2=?", ["3", "4", "5", "6"], "4"),
        sample_question(
            "What is the capital of France?",
            ["Berlin", "Madrid", "Paris", "Rome"],
            "Paris",
        ),
        sample_question(
            "Which planet is known as the Red Planet?",
            ["Venus", "Mars", "Jupiter", "Saturn"],
            "Mars",
        ),
        sample_question(
            "What is the chemical symbol for water?",
            ["H2O", "CO2", "O2", "NaCl"],
            "H2O",
        ),
    ]
}
