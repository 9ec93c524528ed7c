// File: crates/chart-core/src/surface.rs
// Summary: Device-pixel-ratio aware Skia CPU raster surface with RGBA/PNG read-back.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::geometry::{physical_size, sanitize_dpr, LogicalSize, PhysicalSize};

/// Raster target sized in logical units. The backing buffer holds
/// `logical × dpr` pixels; every frame starts with the canvas scaled by `dpr`
/// so renderers only ever see logical coordinates.
pub struct RasterSurface {
    surface: skia::Surface,
    logical: LogicalSize,
    dpr: f32,
}

impl RasterSurface {
    pub fn new(logical: LogicalSize, dpr: f32) -> Result<Self> {
        let dpr = sanitize_dpr(dpr);
        let px = physical_size(logical, dpr);
        // Skia refuses empty surfaces; keep one pixel so an unsized host still has a target.
        let (w, h) = (px.width.max(1), px.height.max(1));
        let surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface { width: w, height: h })?;
        log::trace!("raster surface {}x{} px (logical {:?}, dpr {})", w, h, logical, dpr);
        Ok(Self { surface, logical, dpr })
    }

    pub fn logical_size(&self) -> LogicalSize {
        self.logical
    }

    pub fn physical_size(&self) -> PhysicalSize {
        PhysicalSize { width: self.surface.width(), height: self.surface.height() }
    }

    pub fn dpr(&self) -> f32 {
        self.dpr
    }

    /// Reallocate the backing buffer when the logical size changed.
    /// Returns whether a new buffer was created.
    pub fn resize(&mut self, logical: LogicalSize) -> Result<bool> {
        if logical == self.logical {
            return Ok(false);
        }
        *self = Self::new(logical, self.dpr)?;
        Ok(true)
    }

    /// Clear the whole buffer and hand out a canvas in logical units.
    pub fn begin_frame(&mut self) -> &skia::Canvas {
        let dpr = self.dpr;
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.clear(skia::Color::TRANSPARENT);
        canvas.scale((dpr, dpr));
        canvas
    }

    /// Read back the buffer as unpremultiplied RGBA8.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let PhysicalSize { width, height } = self.physical_size();
        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut px = vec![0u8; stride * height as usize];
        if !self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((px, width, height, stride))
    }

    /// RGBA of one physical pixel, `None` when outside the buffer.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        let PhysicalSize { width, height } = self.physical_size();
        if x < 0 || y < 0 || x >= width || y >= height {
            return None;
        }
        let info = skia::ImageInfo::new((1, 1), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let mut px = [0u8; 4];
        if self.surface.read_pixels(&info, &mut px, 4, (x, y)) { Some(px) } else { None }
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.to_rgba8()?;
        let img = image::RgbaImage::from_raw(w as u32, h as u32, px).ok_or(ChartError::ReadPixels)?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
