use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::media::crop;

/// Slot holding the last upload exactly as received.
pub const ORIGINAL_SLOT: &str = "original_image";
/// Slot holding the centered crop of the last upload, PNG encoded.
pub const CROPPED_SLOT: &str = "cropped_image.png";

/// The two fixed-name image slots in the upload directory.
///
/// Every file lands through a temp file in the same directory followed by a rename, so
/// readers never observe a half-written slot. Whole uploads are serialized by `lock`;
/// the guard travels into the blocking task and is released only when the pipeline ends,
/// even if the request future is dropped first.
#[derive(Debug, Clone)]
pub struct ImageSlots {
    dir: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl ImageSlots {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn original_path(&self) -> PathBuf {
        self.dir.join(ORIGINAL_SLOT)
    }

    pub fn cropped_path(&self) -> PathBuf {
        self.dir.join(CROPPED_SLOT)
    }

    /// Creates the upload directory if it does not exist yet.
    pub fn ensure_dir(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }

    /// Replaces both slots with `bytes` and its centered crop.
    ///
    /// Order: clear both slots, publish the original, decode, crop, publish the crop.
    /// A decode or crop failure leaves the cropped slot empty.
    pub async fn replace(&self, bytes: impl Into<Bytes>) -> Result<PathBuf, AppError> {
        let bytes: Bytes = bytes.into();
        let guard = Arc::clone(&self.lock).lock_owned().await;
        let slots = self.clone();

        let join = tokio::task::spawn_blocking(move || {
            let _guard = guard;
            slots.replace_blocking(&bytes)
        })
        .await;

        match join {
            Ok(result) => result,
            Err(e) => {
                let e_str = e.to_string();
                if let Ok(panic) = e.try_into_panic() {
                    std::panic::resume_unwind(panic);
                }
                Err(anyhow::anyhow!("image pipeline cancelled: {e_str}").into())
            }
        }
    }

    fn replace_blocking(&self, bytes: &[u8]) -> Result<PathBuf, AppError> {
        self.ensure_dir()?;
        self.clear()?;

        let original = self.publish(ORIGINAL_SLOT, bytes)?;
        debug!(path = %original.display(), size = bytes.len(), "Original image stored");

        let png = crop::crop_to_png(bytes)?;
        let cropped = self.publish(CROPPED_SLOT, &png)?;
        info!(path = %cropped.display(), size = png.len(), "Cropped image published");

        Ok(cropped)
    }

    /// Removes both slots. Slots that are already empty are fine.
    fn clear(&self) -> io::Result<()> {
        for path in [self.original_path(), self.cropped_path()] {
            match std::fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "Slot cleared"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn publish(&self, slot: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let target = self.dir.join(slot);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| e.error)?;
        Ok(target)
    }
}
