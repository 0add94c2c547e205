use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use read_chunker_core::persistence::TextStore;

const FILE_PREFIX: &str = "text-";
const FILE_SUFFIX: &str = ".txt";

/// Stores every saved text as its own numbered file under one directory.
#[derive(Debug)]
pub(super) struct FileTextStore {
    dir: PathBuf,
    next_index: u32,
}

impl FileTextStore {
    pub(super) fn open(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;

        let mut next_index = 0u32;
        for entry in fs::read_dir(dir)? {
            let name = entry?.file_name();
            if let Some(index) = name.to_str().and_then(parse_index) {
                next_index = next_index.max(index.saturating_add(1));
            }
        }

        debug!(
            "store: opened dir={} next_index={}",
            dir.display(),
            next_index
        );
        Ok(Self {
            dir: dir.to_path_buf(),
            next_index,
        })
    }

    fn path_for(&self, index: u32) -> PathBuf {
        self.dir.join(format!("{FILE_PREFIX}{index:05}{FILE_SUFFIX}"))
    }
}

impl TextStore for FileTextStore {
    type Error = io::Error;

    async fn save(&mut self, text: &str) -> Result<(), Self::Error> {
        let path = self.path_for(self.next_index);
        fs::write(&path, text)?;
        debug!("store: wrote {}", path.display());
        self.next_index = self.next_index.saturating_add(1);
        Ok(())
    }
}

fn parse_index(name: &str) -> Option<u32> {
    name.strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_SUFFIX)?
        .parse()
        .ok()
}
