use anyhow::Context;
use chrono::{DateTime, Utc};
use gkcore::{
    publish::Action,
    serial::SerialRecord,
};
use gkpolicy::{
    GatekeeperConfig,
    error::Error,
};
use std::{
    fs::File,
    io::{
        BufReader,
        BufWriter,
        Write,
    },
    path::Path,
};

/// Loads a JSON array of records.
pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Vec<SerialRecord>> {
    let path = path.as_ref();
    let reader = BufReader::new(
        File::open(path)
            .with_context(|| format!("failed to open records file {}", path.display()))?
    );
    let records: Vec<SerialRecord> = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse records file {}", path.display()))?;
    log::debug!("loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

pub fn save(path: impl AsRef<Path>, records: &[SerialRecord]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(
        File::create(path)
            .with_context(|| format!("failed to create records file {}", path.display()))?
    );
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    log::debug!("saved {} record(s) to {}", records.len(), path.display());
    Ok(())
}

pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<GatekeeperConfig> {
    let path = path.as_ref();
    let reader = BufReader::new(
        File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?
    );
    Ok(serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse config file {}", path.display()))?)
}

/// Applies the action to the record with the given id.
pub fn apply(
    records: &mut [SerialRecord],
    id: i64,
    action: Action,
    now: DateTime<Utc>,
) -> Result<&SerialRecord, Error> {
    let record = records.iter_mut()
        .find(|record| record.id == id)
        .ok_or(Error::NotFound(id))?;
    record.apply(action, now);
    log::info!("applied {action} to record {id}");
    Ok(&*record)
}
