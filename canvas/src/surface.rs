//! Raster surface: the pixel buffer a client paints into and displays.
//!
//! Resize must not discard drawn content, but reallocating the buffer clears
//! it as a side effect of the dimension change. The original flow photographs
//! the canvas, resizes, and redraws the photograph when its decode callback
//! fires — so the restore lands *after* an arbitrary window of other drawing.
//! Here that window is explicit: [`Surface::resize`] returns the [`Snapshot`]
//! and the host calls [`Surface::restore`] later. Segments rasterized in
//! between may be overdrawn by the restore; that race is accepted behavior.

use crate::color::Rgb;

/// A photograph of the surface at some instant, for restore after resize.
#[derive(Debug, Clone)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Snapshot {
    /// Width of the photographed buffer in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the photographed buffer in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// The raster drawing buffer. Pixels are packed `0xRRGGBB`.
#[derive(Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    background: Rgb,
    retired: bool,
}

impl Surface {
    /// Create a surface filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![background.packed(); (width as usize) * (height as usize)],
            background,
            retired: false,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// The full pixel buffer in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
        } else {
            None
        }
    }

    /// Write one pixel; writes outside the buffer are clipped.
    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, pixel: u32) {
        if x < self.width && y < self.height {
            self.pixels[(y as usize) * (self.width as usize) + (x as usize)] = pixel;
        }
    }

    /// Fill the entire buffer with the background color. Synchronous, local
    /// only — clearing is never a replicated operation.
    pub fn clear(&mut self) {
        self.pixels.fill(self.background.packed());
    }

    /// Photograph the current pixels.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { width: self.width, height: self.height, pixels: self.pixels.clone() }
    }

    /// Change dimensions, clearing the buffer to background, and return the
    /// snapshot taken just before. The caller owns scheduling the matching
    /// [`Surface::restore`]; drawing that happens in between is at risk of
    /// being overdrawn by it.
    #[must_use]
    pub fn resize(&mut self, width: u32, height: u32) -> Snapshot {
        let snapshot = self.snapshot();
        self.width = width;
        self.height = height;
        self.pixels = vec![self.background.packed(); (width as usize) * (height as usize)];
        snapshot
    }

    /// Blit a snapshot into the top-left origin, clipped to current bounds.
    ///
    /// No-op once the surface is retired: the restore callback always fires
    /// once scheduled, and must not resurrect a torn-down surface.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        if self.retired {
            return;
        }
        let copy_w = snapshot.width.min(self.width);
        let copy_h = snapshot.height.min(self.height);
        for y in 0..copy_h {
            for x in 0..copy_w {
                let src = (y as usize) * (snapshot.width as usize) + (x as usize);
                self.set_pixel(x, y, snapshot.pixels[src]);
            }
        }
    }

    /// Mark the surface dead. Pending restores become no-ops.
    pub fn retire(&mut self) {
        self.retired = true;
    }

    #[must_use]
    pub fn is_retired(&self) -> bool {
        self.retired
    }
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod tests;
