/*! JSON writer.

Writes the whole output document at once, gzip-compressed.
!*/
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use flate2::{write::GzEncoder, Compression};
use log::{info, warn};
use serde::Serialize;

use crate::error::Error;

/// Serialize `items` as a single JSON array into a gzipped file at `dst`.
///
/// Any existing file is overwritten and missing parent folders are created.
pub fn write_json_gz<T: Serialize>(dst: &Path, items: &[T]) -> Result<(), Error> {
    if let Some(parent) = dst.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            warn!("Destination folder {:?} does not exist. Creating", parent);
            std::fs::create_dir_all(parent)?;
        }
    }

    info!("writing {} records to {:?}", items.len(), dst);
    let dest_file = File::create(dst)?;
    let mut enc = GzEncoder::new(BufWriter::new(dest_file), Compression::default());
    serde_json::to_writer(&mut enc, items)?;

    // finish explicitly so that errors on the gzip trailer aren't lost in drop
    let mut inner = enc.finish()?;
    inner.flush()?;

    Ok(())
}
