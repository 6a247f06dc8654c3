use crate::{Bitplane, Epd, PlatformIo};

/// Partial-update surface shared with the other panels of the Waveshare
/// driver family, so callers can swap panel models without changes.
///
/// This panel only supports full refresh: the window, cursor and LUT setters
/// are accepted and ignored.
pub trait EpdCompat {
    /// Shows `image` as the base for later partial updates.
    fn display_part_base_image(&mut self, image: &Bitplane);
    /// Shows `image` as a partial update.
    fn display_partial(&mut self, image: &Bitplane);
    fn turn_on_display_part(&mut self);
    fn set_window(&mut self, x_start: usize, y_start: usize, x_end: usize, y_end: usize);
    fn set_cursor(&mut self, x: usize, y: usize);
    fn lut(&mut self, lut: &[u8]);
    fn set_lut(&mut self, lut: &[u8]);
    /// Waveform used for partial refresh.
    fn lut_partial_update(&self) -> &[u8];
}

impl<P: PlatformIo> EpdCompat for Epd<P> {
    /// Full refresh with `image` as the black plane.
    fn display_part_base_image(&mut self, image: &Bitplane) {
        self.display(Some(image), None);
    }

    /// Full refresh with `image` as the *color* plane and a blank black
    /// plane.
    ///
    /// The panel's windowed refresh commands leave stripes on screen, so
    /// this stands in for them.
    fn display_partial(&mut self, image: &Bitplane) {
        self.display(None, Some(image));
    }

    fn turn_on_display_part(&mut self) {}
    fn set_window(&mut self, _x_start: usize, _y_start: usize, _x_end: usize, _y_end: usize) {}
    fn set_cursor(&mut self, _x: usize, _y: usize) {}
    fn lut(&mut self, _lut: &[u8]) {}
    fn set_lut(&mut self, _lut: &[u8]) {}

    fn lut_partial_update(&self) -> &[u8] {
        &[]
    }
}
