use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use super::list::TaskList;
use super::task::Task;

pub const TASKS_KEY: &str = "todo-tasks";

/// Durable string storage addressed by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
        info!(dir = %dir.display(), "opened file store");
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).wrap_err_with(|| format!("failed to read {}", path.display())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let mut tmp = NamedTempFile::new_in(&self.dir)
            .wrap_err_with(|| format!("failed to create temp file in {}", self.dir.display()))?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&path)
            .wrap_err_with(|| format!("failed to replace {}", path.display()))?;
        debug!(path = %path.display(), bytes = value.len(), "wrote key");
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub entries: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Whole-list snapshots of the task sequence under [`TASKS_KEY`].
pub struct TaskStore {
    backend: Box<dyn KeyValueStore>,
}

impl TaskStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn persist(&mut self, tasks: &TaskList) -> Result<()> {
        let json = serde_json::to_string(tasks.as_slice()).wrap_err("failed to serialize tasks")?;
        self.backend.set(TASKS_KEY, &json)
    }

    /// Reads the stored snapshot. Anything unreadable yields an empty list.
    pub fn load_persisted(&self) -> TaskList {
        let mut list = TaskList::new();

        let raw = match self.backend.get(TASKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return list,
            Err(err) => {
                warn!(error = %err, "could not read stored tasks; starting empty");
                return list;
            }
        };

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(other) => {
                warn!(kind = value_kind(&other), "stored tasks are not a list; ignoring");
                return list;
            }
            Err(err) => {
                warn!(error = %err, "stored tasks are not valid JSON; ignoring");
                return list;
            }
        };

        for item in items {
            list.push_restored(Task::from_stored(item));
        }

        info!(count = list.len(), "restored tasks");
        list
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_with(raw: &str) -> TaskStore {
        let mut backend = MemoryStore::default();
        backend.entries.insert(TASKS_KEY.to_string(), raw.to_string());
        TaskStore::new(Box::new(backend))
    }

    #[test]
    fn absent_key_loads_empty() {
        let store = TaskStore::new(Box::new(MemoryStore::default()));
        assert!(store.load_persisted().is_empty());
    }

    #[test]
    fn corrupted_content_loads_empty() {
        assert!(store_with("{not json").load_persisted().is_empty());
        assert!(store_with(r#"{"text":"x","done":false}"#).load_persisted().is_empty());
        assert!(store_with("42").load_persisted().is_empty());
    }

    #[test]
    fn elements_are_appended_as_stored() {
        let raw = r#"[{"text":"a","done":false},"junk",{"text":"b","done":null},{"text":"c","done":1},{}]"#;
        let mut store = store_with(raw);
        let list = store.load_persisted();
        assert_eq!(list.len(), 5);

        let labels: Vec<_> = list.rows().into_iter().map(|row| row.label).collect();
        assert_eq!(labels, vec!["1. a ", "2. junk ", "3. b ", "4. c (done)", "5.  "]);

        store.persist(&list).expect("persist");
        let reloaded = store.load_persisted();
        assert_eq!(reloaded, list);

        let written: Value = serde_json::from_str(
            &store.backend.get(TASKS_KEY).expect("get").expect("stored"),
        )
        .unwrap();
        let original: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(written, original);
    }

    #[test]
    fn file_store_round_trip_preserves_order_and_fields() {
        let dir = tempdir().expect("tempdir");
        let mut list = TaskList::new();
        list.add("buy milk");
        list.add("call mom");
        list.mark(1);

        let mut store = TaskStore::new(Box::new(FileStore::open(dir.path()).expect("open")));
        store.persist(&list).expect("persist");
        assert!(dir.path().join("todo-tasks.json").exists());

        let reopened = TaskStore::new(Box::new(FileStore::open(dir.path()).expect("reopen")));
        assert_eq!(reopened.load_persisted(), list);
    }

    #[test]
    fn file_store_missing_key_is_none() {
        let dir = tempdir().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("open");
        assert!(store.get("nothing").expect("get").is_none());
    }
}
