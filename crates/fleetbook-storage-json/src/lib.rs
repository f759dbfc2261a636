//! Filesystem JSON persistence for the three fleetbook collections.
//!
//! Each logical collection lives in its own file under a data directory:
//! `clients.json`, `orders.json`, `expenses.json`. Writes go through a
//! temp file plus rename so a failed save leaves the previous file intact.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use fleetbook_core::{Collection, CollectionStore, CoreError, CoreResult};
use fleetbook_domain::{client::Client, expense::Expense, order::Order};

const FILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Directory-backed [`CollectionStore`] persisting each collection as JSON.
#[derive(Debug, Clone)]
pub struct JsonCollectionStore {
    data_dir: PathBuf,
}

impl JsonCollectionStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> CoreResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Returns the file backing a logical collection.
    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", collection.name(), FILE_EXTENSION))
    }

    fn load<T: DeserializeOwned>(&self, collection: Collection) -> CoreResult<Option<Vec<T>>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        let records =
            serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
        Ok(Some(records))
    }

    fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> CoreResult<()> {
        let path = self.collection_path(collection);
        let data = serde_json::to_string_pretty(records)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &data)?;
        fs::rename(&tmp, &path)?;
        debug!(collection = collection.name(), path = %path.display(), "collection saved");
        Ok(())
    }
}

impl CollectionStore for JsonCollectionStore {
    fn load_clients(&self) -> CoreResult<Option<Vec<Client>>> {
        self.load(Collection::Clients)
    }

    fn load_orders(&self) -> CoreResult<Option<Vec<Order>>> {
        self.load(Collection::Orders)
    }

    fn load_expenses(&self) -> CoreResult<Option<Vec<Expense>>> {
        self.load(Collection::Expenses)
    }

    fn save_clients(&self, clients: &[Client]) -> CoreResult<()> {
        self.save(Collection::Clients, clients)
    }

    fn save_orders(&self, orders: &[Order]) -> CoreResult<()> {
        self.save(Collection::Orders, orders)
    }

    fn save_expenses(&self, expenses: &[Expense]) -> CoreResult<()> {
        self.save(Collection::Expenses, expenses)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
