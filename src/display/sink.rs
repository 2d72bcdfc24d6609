//! Display sinks.
//!
//! The pipeline hands every image it wants shown to a [`DisplaySink`]. The
//! command line writes them to disk; tests capture them in memory.

use std::path::{Path, PathBuf};

use image::GrayImage;

use crate::error::Result;

use super::png::write_png;

/// Receiver for images the pipeline presents.
///
/// `show` may block (an interactive viewer would wait for a key press here);
/// the pipeline does not continue until it returns.
pub trait DisplaySink {
    fn show(&mut self, title: &str, image: &GrayImage) -> Result<()>;
}

/// Writes each shown image to `<dir>/<NN>-<title>.png`.
#[derive(Debug)]
pub struct PngSink {
    dir: PathBuf,
    scale: u32,
    written: Vec<PathBuf>,
}

impl PngSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            scale: 1,
            written: Vec::new(),
        }
    }

    /// Set the integer upscale applied to written images.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in display order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn file_name(&self, title: &str) -> String {
        let slug: String = title
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        format!("{:02}-{}.png", self.written.len(), slug)
    }
}

impl DisplaySink for PngSink {
    fn show(&mut self, title: &str, image: &GrayImage) -> Result<()> {
        let path = self.dir.join(self.file_name(title));
        write_png(image, &path, self.scale)?;
        self.written.push(path);
        Ok(())
    }
}

/// Keeps every shown image in memory.
#[derive(Debug, Default)]
pub struct CaptureSink {
    pub frames: Vec<(String, GrayImage)>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.frames.iter().map(|(t, _)| t.as_str()).collect()
    }
}

impl DisplaySink for CaptureSink {
    fn show(&mut self, title: &str, image: &GrayImage) -> Result<()> {
        self.frames.push((title.to_string(), image.clone()));
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn show(&mut self, _title: &str, _image: &GrayImage) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_png_sink_numbers_files() {
        let dir = tempdir().unwrap();
        let mut sink = PngSink::new(dir.path());

        sink.show("obstacle", &GrayImage::new(2, 2)).unwrap();
        sink.show("Fill Preview", &GrayImage::new(2, 2)).unwrap();

        assert_eq!(
            sink.written(),
            &[
                dir.path().join("00-obstacle.png"),
                dir.path().join("01-fill-preview.png"),
            ]
        );
        assert!(sink.written().iter().all(|p| p.exists()));
    }

    #[test]
    fn test_png_sink_scale() {
        let dir = tempdir().unwrap();
        let mut sink = PngSink::new(dir.path()).with_scale(3);

        sink.show("map", &GrayImage::new(2, 1)).unwrap();

        let back = image::open(&sink.written()[0]).unwrap();
        assert_eq!((back.width(), back.height()), (6, 3));
    }

    #[test]
    fn test_capture_sink() {
        let mut sink = CaptureSink::new();
        sink.show("a", &GrayImage::new(1, 1)).unwrap();
        sink.show("b", &GrayImage::new(1, 1)).unwrap();
        assert_eq!(sink.titles(), vec!["a", "b"]);
    }
}
