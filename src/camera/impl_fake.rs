use crate::camera::interface::{Camera, CameraResult};
use image::DynamicImage;
use std::collections::VecDeque;

pub struct CameraFake {
    frames: VecDeque<DynamicImage>,
    pub started: bool,
    pub stopped: bool,
}

impl CameraFake {
    pub fn new(frames: Vec<DynamicImage>) -> Self {
        Self {
            frames: frames.into(),
            started: false,
            stopped: false,
        }
    }
}

impl Camera for CameraFake {
    fn start(&mut self) -> CameraResult<()> {
        self.started = true;
        Ok(())
    }

    fn stop(&mut self) -> CameraResult<()> {
        self.stopped = true;
        Ok(())
    }

    fn capture_frame(&mut self) -> CameraResult<Option<DynamicImage>> {
        if !self.started {
            return Err("camera not started".into());
        }
        Ok(self.frames.pop_front())
    }
}
