//! Core renderer.
//!
//! Walks every pixel once, traces its camera ray at depth 0 and packs the
//! color into an RGBA byte buffer.

use std::time::Instant;

use glint_core::Scene;
use glint_math::ZERO;
use image::{Rgba, RgbaImage};

use crate::{Color, RenderError, RenderResult, ShadeConfig, Shader, Viewport};

/// Where pixel (x, y) of the view lands in the byte buffer.
///
/// y = 0 is the bottom edge of the view in both layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PixelLayout {
    /// Offset `x*4 + y*width*4`: bottom view row stored first, so the
    /// buffer reads upside down as a conventional top-down image. Kept as
    /// the default for byte-for-byte compatibility with existing renders.
    #[default]
    Legacy,
    /// Bottom view row stored last, an upright top-down image.
    TopDown,
}

impl PixelLayout {
    /// Byte offset of pixel (x, y) in a `width` x `height` buffer.
    #[inline]
    pub fn offset(self, x: u32, y: u32, width: u32, height: u32) -> usize {
        let row = match self {
            PixelLayout::Legacy => y,
            PixelLayout::TopDown => height - 1 - y,
        };
        (x as usize) * 4 + (row as usize) * (width as usize) * 4
    }
}

/// Render configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderConfig {
    /// Buffer addressing
    pub layout: PixelLayout,
    /// Shading tunables
    pub shade: ShadeConfig,
}

/// Clamp a channel to [0, 255] and round half to even. NaN becomes 0.
#[inline]
fn channel_to_byte(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    value.clamp(0.0, 255.0).round_ties_even() as u8
}

/// Convert a color to 8-bit RGBA with full alpha.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    [
        channel_to_byte(color.x),
        channel_to_byte(color.y),
        channel_to_byte(color.z),
        255,
    ]
}

/// RGBA8 output of a render, `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create a new buffer filled with zero bytes.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Get the RGBA bytes stored at column x, row y of the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = PixelLayout::Legacy.offset(x, y, self.width, self.height);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.data[offset..offset + 4]);
        rgba
    }

    /// Write RGBA bytes at a byte offset.
    fn put(&mut self, offset: usize, rgba: [u8; 4]) {
        self.data[offset..offset + 4].copy_from_slice(&rgba);
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Copy into an `image` buffer, row 0 at the top.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| Rgba(self.pixel(x, y)))
    }
}

/// Renders scenes with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the scene into a fresh frame buffer.
    ///
    /// Everything that can fail is checked before the first pixel; once
    /// tracing starts the render always completes.
    pub fn render(&self, scene: &Scene, width: u32, height: u32) -> RenderResult<FrameBuffer> {
        if width < 2 || height < 2 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        scene.validate()?;

        log::debug!(
            "Rendering {}x{} ({} objects, {} lights, {:?} layout)",
            width,
            height,
            scene.object_count(),
            scene.light_count(),
            self.config.layout
        );
        let start = Instant::now();

        let viewport = Viewport::new(&scene.camera, width, height);
        let shader = Shader::new(scene, self.config.shade);
        let mut buffer = FrameBuffer::new(width, height);

        for x in 0..width {
            for y in 0..height {
                let color = render_pixel(&shader, &viewport, x, y);
                let offset = self.config.layout.offset(x, y, width, height);
                buffer.put(offset, color_to_rgba(color));
            }
        }

        log::debug!("Rendered {}x{} in {:?}", width, height, start.elapsed());

        Ok(buffer)
    }
}

/// Trace the camera ray of a single pixel.
///
/// Depth 0 never hits the recursion cutoff, the black fallback is only
/// there to keep the signature total.
pub fn render_pixel(shader: &Shader<'_>, viewport: &Viewport, x: u32, y: u32) -> Color {
    shader.trace(&viewport.ray(x, y), 0).unwrap_or(ZERO)
}

/// Render the scene with the default configuration.
pub fn render(scene: &Scene, width: u32, height: u32) -> RenderResult<FrameBuffer> {
    Renderer::default().render(scene, width, height)
}
