//! Persistent raster surface repainted from the stroke model.

use super::color::Color;
use super::model::StrokeModel;
use super::render::{clear_surface, fill_background, render_model};
use cairo::{Context, Format, ImageSurface};
use log::debug;
use thiserror::Error;

/// Errors raised while allocating, drawing to or reading back a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixels unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),
}

/// Owned copy of rendered ARGB32 pixels.
///
/// Snapshots are independent of the surface they came from, so they can be
/// handed to the export worker on another thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSnapshot {
    pub width: i32,
    pub height: i32,
    /// Bytes per row (may exceed `width * 4`)
    pub stride: i32,
    /// Premultiplied native-endian ARGB32 pixels, `stride * height` bytes
    pub data: Vec<u8>,
}

impl RasterSnapshot {
    fn from_surface(surface: &ImageSurface) -> Result<Self, SurfaceError> {
        surface.flush();
        let mut data = Vec::new();
        surface.with_data(|bytes| data.extend_from_slice(bytes))?;
        Ok(Self {
            width: surface.width(),
            height: surface.height(),
            stride: surface.stride(),
            data,
        })
    }

    /// Encodes the pixels as a PNG file image.
    pub fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        let surface = ImageSurface::create_for_data(
            self.data.clone(),
            Format::ARgb32,
            self.width,
            self.height,
            self.stride,
        )?;
        let mut buffer = Vec::new();
        surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }

    /// Returns true if any pixel has a non-zero channel.
    pub fn has_ink(&self) -> bool {
        self.data.iter().any(|byte| *byte != 0)
    }
}

/// Raster buffer sized to the viewport.
///
/// The surface only ever reflects the model passed to the last
/// [`RedrawSurface::render`] call; it keeps no drawing history of its own.
pub struct RedrawSurface {
    surface: ImageSurface,
}

impl RedrawSurface {
    /// Allocates a transparent surface of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: allocate(width, height)?,
        })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Reallocates the buffer for a new viewport size.
    ///
    /// Prior pixels are dropped; callers re-render from the model. Returns
    /// `false` when the size is unchanged and nothing was reallocated.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<bool, SurfaceError> {
        if width == self.width() && height == self.height() {
            return Ok(false);
        }
        debug!(
            "Resizing surface {}x{} -> {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        self.surface = allocate(width, height)?;
        Ok(true)
    }

    /// Repaints the surface from scratch to match `model`.
    pub fn render(&mut self, model: &StrokeModel) -> Result<(), SurfaceError> {
        let ctx = Context::new(&self.surface)?;
        clear_surface(&ctx);
        render_model(&ctx, model);
        Ok(())
    }

    /// Copies the visible pixels as they are right now.
    pub fn snapshot(&self) -> Result<RasterSnapshot, SurfaceError> {
        RasterSnapshot::from_surface(&self.surface)
    }

    /// Renders `model` over a solid `background` into a fresh buffer of the
    /// same size, leaving the visible surface untouched.
    pub fn render_to_image(
        &self,
        model: &StrokeModel,
        background: Color,
    ) -> Result<RasterSnapshot, SurfaceError> {
        let image = allocate(self.width(), self.height())?;
        {
            let ctx = Context::new(&image)?;
            fill_background(&ctx, background);
            render_model(&ctx, model);
        }
        RasterSnapshot::from_surface(&image)
    }
}

fn allocate(width: i32, height: i32) -> Result<ImageSurface, SurfaceError> {
    if width <= 0 || height <= 0 {
        return Err(SurfaceError::InvalidSize { width, height });
    }
    Ok(ImageSurface::create(Format::ARgb32, width, height)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, WHITE};

    fn model_with_line() -> StrokeModel {
        let mut model = StrokeModel::new();
        model.begin((10.0, 10.0), RED, 6.0);
        model.extend((50.0, 50.0));
        model.commit();
        model
    }

    fn pixel(snapshot: &RasterSnapshot, x: i32, y: i32) -> u32 {
        let offset = (y * snapshot.stride + x * 4) as usize;
        let bytes = &snapshot.data[offset..offset + 4];
        u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[test]
    fn rejects_empty_sizes() {
        assert!(matches!(
            RedrawSurface::new(0, 10),
            Err(SurfaceError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn render_draws_committed_strokes() {
        let mut surface = RedrawSurface::new(64, 64).unwrap();
        assert!(!surface.snapshot().unwrap().has_ink());

        surface.render(&model_with_line()).unwrap();
        let snapshot = surface.snapshot().unwrap();
        assert_eq!(pixel(&snapshot, 30, 30), 0xFFFF0000);
        assert_eq!(pixel(&snapshot, 60, 2), 0);
    }

    #[test]
    fn render_is_idempotent() {
        let mut surface = RedrawSurface::new(64, 64).unwrap();
        let model = model_with_line();
        surface.render(&model).unwrap();
        let first = surface.snapshot().unwrap();
        surface.render(&model).unwrap();
        assert_eq!(first, surface.snapshot().unwrap());
    }

    #[test]
    fn render_reflects_undo() {
        let mut surface = RedrawSurface::new(64, 64).unwrap();
        let mut model = model_with_line();
        surface.render(&model).unwrap();
        model.undo();
        surface.render(&model).unwrap();
        assert!(!surface.snapshot().unwrap().has_ink());
    }

    #[test]
    fn resize_drops_pixels_until_rerender() {
        let mut surface = RedrawSurface::new(64, 64).unwrap();
        let model = model_with_line();
        surface.render(&model).unwrap();

        assert!(!surface.resize(64, 64).unwrap());
        assert!(surface.snapshot().unwrap().has_ink());

        assert!(surface.resize(80, 40).unwrap());
        assert_eq!((surface.width(), surface.height()), (80, 40));
        assert!(!surface.snapshot().unwrap().has_ink());

        surface.render(&model).unwrap();
        assert!(surface.snapshot().unwrap().has_ink());
    }

    #[test]
    fn render_to_image_fills_background() {
        let surface = RedrawSurface::new(32, 32).unwrap();
        let image = surface.render_to_image(&StrokeModel::new(), WHITE).unwrap();
        assert_eq!(pixel(&image, 0, 0), 0xFFFFFFFF);
        assert!(!surface.snapshot().unwrap().has_ink());
    }

    #[test]
    fn encode_png_writes_signature() {
        let surface = RedrawSurface::new(16, 16).unwrap();
        let image = surface.render_to_image(&model_with_line(), WHITE).unwrap();
        let png = image.encode_png().unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }
}
