use image::DynamicImage;

pub type CameraResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub trait Camera {
    fn start(&mut self) -> CameraResult<()>;
    fn stop(&mut self) -> CameraResult<()>;
    /// Next frame, or `None` once the stream has ended.
    fn capture_frame(&mut self) -> CameraResult<Option<DynamicImage>>;
}
