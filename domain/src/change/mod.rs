//! File change notifications
//!
//! The host reports file tree changes in batches grouping created, deleted,
//! modified and moved entries. The entry shapes differ per group: created
//! and moved entries carry a metadata `result`, deleted entries carry only
//! the deleted location and modified entries are bare locations.
//! [`FileChangeBatch::events`] flattens a batch into uniform [`FileEvent`]s.

use crate::project::{ProjectFile, short_name};
use serde::{Deserialize, Serialize};

/// Metadata the store reports for a file or folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMetadata {
    /// Fully qualified location; folders end with `/`.
    pub location: String,
    /// Short name of the file or folder.
    pub name: String,
    /// True for folders.
    pub directory: bool,
    /// Ancestor folder locations, nearest first.
    pub parents: Vec<String>,
}

impl FileMetadata {
    pub fn file(location: impl Into<String>) -> Self {
        let location = location.into();
        Self {
            name: short_name(&location).to_string(),
            location,
            directory: false,
            parents: Vec::new(),
        }
    }

    pub fn folder(location: impl Into<String>) -> Self {
        Self {
            directory: true,
            ..Self::file(location)
        }
    }

    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parents = parents.into_iter().map(Into::into).collect();
        self
    }
}

/// The editor switched to a different input file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputChanged {
    /// The new active file; `None` when the editor has no input.
    pub file: Option<FileMetadata>,
}

impl InputChanged {
    pub fn new(file: FileMetadata) -> Self {
        Self { file: Some(file) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEntry {
    pub result: Option<FileMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedEntry {
    pub delete_location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovedEntry {
    pub source: String,
    pub result: Option<FileMetadata>,
}

/// A batch of file tree changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChangeBatch {
    pub created: Vec<CreatedEntry>,
    pub deleted: Vec<DeletedEntry>,
    pub modified: Vec<String>,
    pub moved: Vec<MovedEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Created,
    Deleted,
    Modified,
    Moved,
}

/// One changed file, normalized across the entry shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEvent {
    pub kind: ChangeKind,
    /// Location of the affected file (the source for moves).
    pub qualified_path: String,
    /// Short name of the affected file (the source for moves).
    pub short_name: String,
    /// Destination location of a move.
    pub to_qualified: Option<String>,
    /// Destination short name of a move.
    pub to_short_name: Option<String>,
    /// Whether the created or moved-to entry is a folder.
    pub directory: bool,
}

impl FileEvent {
    fn located(kind: ChangeKind, location: &str) -> Self {
        Self {
            kind,
            qualified_path: location.to_string(),
            short_name: short_name(location).to_string(),
            to_qualified: None,
            to_short_name: None,
            directory: false,
        }
    }

    /// How this event changes the "project has node_modules" flag.
    ///
    /// `Some(true)` when a `node_modules` folder appears, `Some(false)` when
    /// one is deleted or moved away, `None` when the flag is unaffected.
    pub fn dependency_folder_effect(&self) -> Option<bool> {
        let folder = ProjectFile::NodeModules.file_name();
        match self.kind {
            ChangeKind::Created => (self.short_name == folder && self.directory).then_some(true),
            ChangeKind::Deleted => (self.short_name == folder).then_some(false),
            ChangeKind::Modified => None,
            ChangeKind::Moved => {
                if self.directory && self.to_short_name.as_deref() == Some(folder) {
                    Some(true)
                } else if self.short_name == folder {
                    Some(false)
                } else {
                    None
                }
            }
        }
    }
}

impl FileChangeBatch {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
            && self.deleted.is_empty()
            && self.modified.is_empty()
            && self.moved.is_empty()
    }

    /// Flattens the batch into events.
    ///
    /// Groups are emitted as modified, deleted, created, moved. Created
    /// entries without metadata carry no location and are skipped.
    pub fn events(&self) -> Vec<FileEvent> {
        let mut events = Vec::new();

        for location in &self.modified {
            events.push(FileEvent::located(ChangeKind::Modified, location));
        }

        for entry in &self.deleted {
            events.push(FileEvent::located(
                ChangeKind::Deleted,
                &entry.delete_location,
            ));
        }

        for entry in &self.created {
            let Some(result) = &entry.result else {
                tracing::debug!("Skipping created entry without metadata");
                continue;
            };
            events.push(FileEvent {
                kind: ChangeKind::Created,
                qualified_path: result.location.clone(),
                short_name: result.name.clone(),
                to_qualified: None,
                to_short_name: None,
                directory: result.directory,
            });
        }

        for entry in &self.moved {
            let mut event = FileEvent::located(ChangeKind::Moved, &entry.source);
            if let Some(result) = &entry.result {
                event.to_qualified = Some(result.location.clone());
                event.to_short_name = Some(result.name.clone());
                event.directory = result.directory;
            }
            events.push(event);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_json() -> &'static str {
        r#"{
            "modified": ["/p/.eslintrc"],
            "deleted": [{"delete_location": "/p/node_modules/"}],
            "created": [
                {"result": {"location": "/p/package.json", "name": "package.json"}},
                {"result": null}
            ],
            "moved": [{"source": "/p/a.js", "result": {"location": "/p/b.js", "name": "b.js"}}]
        }"#
    }

    #[test]
    fn test_events_follow_group_order() {
        let batch: FileChangeBatch = serde_json::from_str(batch_json()).unwrap();
        let kinds: Vec<_> = batch.events().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChangeKind::Modified,
                ChangeKind::Deleted,
                ChangeKind::Created,
                ChangeKind::Moved
            ]
        );
    }

    #[test]
    fn test_event_names() {
        let batch: FileChangeBatch = serde_json::from_str(batch_json()).unwrap();
        let events = batch.events();
        assert_eq!(events[0].short_name, ".eslintrc");
        assert_eq!(events[1].short_name, "node_modules");
        assert_eq!(events[2].qualified_path, "/p/package.json");
        assert_eq!(events[3].short_name, "a.js");
        assert_eq!(events[3].to_qualified.as_deref(), Some("/p/b.js"));
        assert_eq!(events[3].to_short_name.as_deref(), Some("b.js"));
    }

    #[test]
    fn test_missing_groups_default_to_empty() {
        let batch: FileChangeBatch = serde_json::from_str(r#"{"modified": []}"#).unwrap();
        assert!(batch.is_empty());
        assert!(batch.events().is_empty());
    }

    #[test]
    fn test_node_modules_created_folder_sets_flag() {
        let batch = FileChangeBatch {
            created: vec![CreatedEntry {
                result: Some(FileMetadata::folder("/p/node_modules/")),
            }],
            ..Default::default()
        };
        assert_eq!(batch.events()[0].dependency_folder_effect(), Some(true));
    }

    #[test]
    fn test_node_modules_created_file_is_ignored() {
        let batch = FileChangeBatch {
            created: vec![CreatedEntry {
                result: Some(FileMetadata::file("/p/node_modules")),
            }],
            ..Default::default()
        };
        assert_eq!(batch.events()[0].dependency_folder_effect(), None);
    }

    #[test]
    fn test_node_modules_moved_away_clears_flag() {
        let batch = FileChangeBatch {
            moved: vec![MovedEntry {
                source: "/p/node_modules/".to_string(),
                result: Some(FileMetadata::folder("/p/old_modules/")),
            }],
            ..Default::default()
        };
        assert_eq!(batch.events()[0].dependency_folder_effect(), Some(false));
    }

    #[test]
    fn test_node_modules_moved_in_sets_flag() {
        let batch = FileChangeBatch {
            moved: vec![MovedEntry {
                source: "/p/old_modules/".to_string(),
                result: Some(FileMetadata::folder("/p/node_modules/")),
            }],
            ..Default::default()
        };
        assert_eq!(batch.events()[0].dependency_folder_effect(), Some(true));
    }

    #[test]
    fn test_modified_never_touches_flag() {
        let batch = FileChangeBatch {
            modified: vec!["/p/node_modules/".to_string()],
            ..Default::default()
        };
        assert_eq!(batch.events()[0].dependency_folder_effect(), None);
    }

    #[test]
    fn test_metadata_helpers() {
        let meta = FileMetadata::file("/p/src/a.js").with_parents(["/p/src/", "/p/"]);
        assert_eq!(meta.name, "a.js");
        assert!(!meta.directory);
        assert_eq!(meta.parents, vec!["/p/src/", "/p/"]);
        assert!(FileMetadata::folder("/p/src/").directory);
    }
}
