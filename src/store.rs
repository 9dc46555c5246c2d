use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{KeysplitError, Result};
use crate::share::Share;

/// How a caller names a stored share: a positive share number or a direct path.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ShareId {
    Index(u64),
    Path(PathBuf),
}

impl ShareId {
    pub fn index(i: i64) -> Result<Self> {
        if i <= 0 {
            return Err(KeysplitError::InvalidShareId(i.to_string()));
        }
        Ok(ShareId::Index(i as u64))
    }

    /// Interprets command arguments: share numbers when every argument is all
    /// digits, paths otherwise.
    pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<ShareId>> {
        let all_digits = args.iter().all(|a| {
            let a = a.as_ref();
            !a.is_empty() && a.bytes().all(|b| b.is_ascii_digit())
        });

        if !all_digits {
            return Ok(args
                .iter()
                .map(|a| ShareId::Path(PathBuf::from(a.as_ref())))
                .collect());
        }

        args.iter()
            .map(|a| {
                let a = a.as_ref();
                match a.parse::<u64>() {
                    Ok(i) if i > 0 => Ok(ShareId::Index(i)),
                    _ => Err(KeysplitError::InvalidShareId(a.to_string())),
                }
            })
            .collect()
    }

    pub fn file_name(index: u64) -> String {
        format!("share_{}.txt", index)
    }
}

impl fmt::Display for ShareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareId::Index(i) => write!(f, "share {}", i),
            ShareId::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

pub trait ShareStore {
    /// Persists `share` under its own index, replacing any previous record.
    fn put(&mut self, share: &Share) -> Result<()>;

    fn get(&self, id: &ShareId) -> Result<Share>;

    /// Human-readable location, used in status messages.
    fn location(&self) -> String;
}

/// Shares as `share_<x>.txt` files in one directory.
#[derive(Clone, Debug)]
pub struct FsShareStore {
    dir: PathBuf,
}

impl FsShareStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsShareStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, id: &ShareId) -> PathBuf {
        match id {
            ShareId::Index(i) => self.dir.join(ShareId::file_name(*i)),
            ShareId::Path(p) => p.clone(),
        }
    }
}

impl ShareStore for FsShareStore {
    fn put(&mut self, share: &Share) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("share_{}.txt", share.x));
        fs::write(path, share.to_record())?;
        Ok(())
    }

    fn get(&self, id: &ShareId) -> Result<Share> {
        let path = self.path_of(id);
        let name = path.display().to_string();
        let record = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => KeysplitError::MissingShare(name.clone()),
            _ => KeysplitError::Io(e),
        })?;
        Share::from_record(&record, &name)
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}

/// Keeps raw records in memory, keyed like the file store would name them.
#[derive(Clone, Debug, Default)]
pub struct MemoryShareStore {
    records: BTreeMap<String, String>,
}

impl MemoryShareStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_record(&mut self, key: impl Into<String>, record: impl Into<String>) {
        self.records.insert(key.into(), record.into());
    }

    pub fn remove(&mut self, id: &ShareId) -> Option<String> {
        self.records.remove(&Self::key(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn key(id: &ShareId) -> String {
        match id {
            ShareId::Index(i) => ShareId::file_name(*i),
            ShareId::Path(p) => p.display().to_string(),
        }
    }
}

impl ShareStore for MemoryShareStore {
    fn put(&mut self, share: &Share) -> Result<()> {
        let key = format!("share_{}.txt", share.x);
        self.records.insert(key, share.to_record());
        Ok(())
    }

    fn get(&self, id: &ShareId) -> Result<Share> {
        let key = Self::key(id);
        let record = self
            .records
            .get(&key)
            .ok_or_else(|| KeysplitError::MissingShare(key.clone()))?;
        Share::from_record(record, &key)
    }

    fn location(&self) -> String {
        String::from("memory")
    }
}
