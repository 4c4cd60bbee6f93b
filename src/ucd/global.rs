//! The process-wide default dataset.
//!
//! Applications usually load one snapshot at startup and query it from everywhere.
//! This module keeps that dataset in a `OnceCell`: it is set at most once and lives
//! until the process exits.

use log::{debug, info};
use once_cell::sync::OnceCell;

use super::reader::UnicodeData;
use super::types::error::{Result, UcdError};

static DEFAULT_DATA: OnceCell<UnicodeData> = OnceCell::new();

/// Installs `data` as the default dataset.
///
/// # Errors
/// Returns `AlreadyInitialized` if a default dataset is already installed; the
/// existing one is kept.
pub fn install_default(data: UnicodeData) -> Result<&'static UnicodeData> {
    let installed = DEFAULT_DATA
        .try_insert(data)
        .map_err(|_| UcdError::AlreadyInitialized)?;
    info!("Default Unicode dataset installed (Unicode {})", installed.unicode_version());
    Ok(installed)
}

/// The default dataset, if one has been installed.
pub fn default_data() -> Option<&'static UnicodeData> {
    DEFAULT_DATA.get()
}

/// Returns the default dataset, loading it with `init` on first use.
///
/// `init` runs at most once at a time: concurrent callers block until it finishes
/// and then share its result. A failed `init` leaves the default unset, so a later
/// call can retry.
pub fn default_or_try_init<F>(init: F) -> Result<&'static UnicodeData>
where
    F: FnOnce() -> Result<UnicodeData>,
{
    DEFAULT_DATA.get_or_try_init(|| {
        debug!("Initializing default Unicode dataset");
        let data = init()?;
        info!("Default Unicode dataset loaded (Unicode {})", data.unicode_version());
        Ok(data)
    })
}
