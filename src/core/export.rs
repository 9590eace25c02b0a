//! Export the event history to CSV or JSON.

use clap::ValueEnum;
use csv::Writer;
use serde::Serialize;
use std::io;
use std::path::Path;

use crate::core::registry::BoxRegistry;
use crate::core::store::EventStore;
use crate::db::journal::jlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::litter_box::LitterBox;
use crate::ui::messages::{success, warning};

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat row shape shared by both output formats.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub box_id: u32,
    pub box_name: String,
    pub activity: String,
    pub timestamp: String,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export one box's (or every box's) events, sorted chronologically.
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        box_filter: Option<u32>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        if let Some(id) = box_filter
            && !LitterBox::is_known(id)
        {
            return Err(AppError::UnknownBox(id));
        }

        let rows = collect_rows(pool, box_filter)?;

        if rows.is_empty() {
            warning("No events found to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        jlog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} event(s) as {}", rows.len(), format.as_str()),
        )?;

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        Ok(())
    }
}

/// Refuse to overwrite an existing file unless --force was given.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "File already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    Ok(())
}

fn collect_rows(pool: &DbPool, box_filter: Option<u32>) -> AppResult<Vec<EventExport>> {
    let boxes = BoxRegistry::load_all(pool)?;

    let mut rows = Vec::new();
    for litter_box in boxes {
        if let Some(id) = box_filter
            && litter_box.id != id
        {
            continue;
        }

        let mut events = EventStore::load(pool, litter_box.id);
        events.sort_by_key(|ev| ev.timestamp);

        for ev in events {
            rows.push(EventExport {
                box_id: litter_box.id,
                box_name: litter_box.name.clone(),
                activity: ev.activity.as_wire_str().to_string(),
                timestamp: ev.timestamp.to_rfc3339(),
            });
        }
    }

    Ok(rows)
}

fn write_csv(path: &Path, rows: &[EventExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["box_id", "box_name", "activity", "timestamp"])?;

    for row in rows {
        wtr.write_record(&[
            row.box_id.to_string(),
            row.box_name.clone(),
            row.activity.clone(),
            row.timestamp.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_json(path: &Path, rows: &[EventExport]) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
