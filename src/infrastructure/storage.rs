use anyhow::{Context, Result, anyhow, bail};
use serde_json::Value;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serialization picked from the output filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    Json,
    Csv,
}

impl StorageFormat {
    pub fn from_filename(filename: &str) -> Self {
        match Path::new(filename).extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StorageFormat::Json,
            _ => StorageFormat::Csv,
        }
    }
}

/// Writes response data to files under a storage root
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Saves `data` as `filename` under the storage root, creating the root
    /// if needed, and returns the full path written.
    pub fn save(&self, filename: &str, data: &Value) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create storage directory {}", self.root.display()))?;

        let path = self.root.join(filename);
        let format = StorageFormat::from_filename(filename);
        debug!(path = %path.display(), ?format, "saving response");

        let written = match format {
            StorageFormat::Json => Self::write_json(&path, data),
            StorageFormat::Csv => Self::write_csv(&path, data),
        };
        written.with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(path)
    }

    fn write_json(path: &Path, data: &Value) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), data)?;
        Ok(())
    }

    /// One row per record, values only, no header row
    fn write_csv(path: &Path, data: &Value) -> Result<()> {
        let Value::Array(records) = data else {
            bail!("CSV output requires an array of objects");
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        for (index, record) in records.iter().enumerate() {
            let fields = record
                .as_object()
                .ok_or_else(|| anyhow!("CSV row {} is not an object", index))?;
            writer.write_record(fields.values().map(Self::cell))?;
        }
        writer.flush()?;
        Ok(())
    }

    fn cell(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}
