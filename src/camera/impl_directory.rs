use crate::camera::interface::{Camera, CameraResult};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Streams the images of a directory in file-name order.
pub struct CameraDirectory {
    directory: PathBuf,
    pending: VecDeque<PathBuf>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl CameraDirectory {
    pub fn new(directory: impl AsRef<Path>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            pending: VecDeque::new(),
            logger: logger.with_namespace("camera").with_namespace("directory"),
        }
    }
}

impl Camera for CameraDirectory {
    fn start(&mut self) -> CameraResult<()> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        self.logger.info(&format!(
            "Streaming {} files from {}",
            paths.len(),
            self.directory.display()
        ))?;
        self.pending = paths.into();
        Ok(())
    }

    fn stop(&mut self) -> CameraResult<()> {
        self.pending.clear();
        self.logger.info("Stream stopped")?;
        Ok(())
    }

    fn capture_frame(&mut self) -> CameraResult<Option<DynamicImage>> {
        while let Some(path) = self.pending.pop_front() {
            match image::open(&path) {
                Ok(image) => return Ok(Some(image)),
                Err(e) => {
                    self.logger
                        .warn(&format!("Skipping {}: {}", path.display(), e))?;
                }
            }
        }
        Ok(None)
    }
}
