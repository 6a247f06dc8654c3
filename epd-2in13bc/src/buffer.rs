use image::Pixel;
use log::{debug, warn};

pub const EPD_WIDTH: usize = 104;
pub const EPD_HEIGHT: usize = 212;
pub const EPD_BUFFER_SIZE: usize = EPD_WIDTH.div_ceil(8) * EPD_HEIGHT;

/// One packed color channel: 1 bit per pixel, MSB first, row-major.
///
/// A cleared bit is an inked pixel, a set bit is background.
pub type Bitplane = [u8; EPD_BUFFER_SIZE];

pub(crate) const BLANK: Bitplane = [0xFF; EPD_BUFFER_SIZE];

type BwImage = image::GrayImage;

/// Packs a 1-bit image (0 is dark, anything else background) into a plane.
///
/// Accepts the panel's portrait size or its landscape transpose, which is
/// rotated by 90°. Any other size yields a blank plane.
pub fn pack_buffer(image: &BwImage) -> Bitplane {
    let mut buf = BLANK;
    let (width, height) = (image.width() as usize, image.height() as usize);
    if width == EPD_WIDTH && height == EPD_HEIGHT {
        debug!("Vertical");
        for (x, y, pixel) in image.enumerate_pixels() {
            if pixel.channels()[0] == 0 {
                set_pixel(&mut buf, x as usize, y as usize);
            }
        }
    } else if width == EPD_HEIGHT && height == EPD_WIDTH {
        debug!("Horizontal");
        for (x, y, pixel) in image.enumerate_pixels() {
            if pixel.channels()[0] == 0 {
                set_pixel(&mut buf, y as usize, EPD_HEIGHT - x as usize - 1);
            }
        }
    } else {
        warn!("Unsupported image size {:?}", image.dimensions());
    }
    buf
}

fn set_pixel(buf: &mut Bitplane, x: usize, y: usize) {
    buf[(x + y * EPD_WIDTH) / 8] &= !(0x80 >> (x % 8));
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn white(width: u32, height: u32) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([255]))
    }

    #[test]
    fn buffer_size() {
        assert_eq!(EPD_BUFFER_SIZE, 2756);
        assert_eq!(EPD_BUFFER_SIZE, EPD_WIDTH * EPD_HEIGHT / 8);
    }

    #[test]
    fn blank_image() {
        assert_eq!(pack_buffer(&white(104, 212)), BLANK);
        assert_eq!(pack_buffer(&white(212, 104)), BLANK);
    }

    #[test]
    fn vertical_origin() {
        let mut image = white(104, 212);
        image.put_pixel(0, 0, Luma([0]));
        let buf = pack_buffer(&image);
        assert_eq!(buf[0], 0x7F);
        assert!(buf[1..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn vertical_last_pixel() {
        let mut image = white(104, 212);
        image.put_pixel(103, 211, Luma([0]));
        let buf = pack_buffer(&image);
        assert_eq!(buf[EPD_BUFFER_SIZE - 1], 0xFE);
        assert_eq!(buf.iter().filter(|&&b| b != 0xFF).count(), 1);
    }

    #[test]
    fn vertical_mid_row() {
        let mut image = white(104, 212);
        image.put_pixel(10, 3, Luma([0]));
        let buf = pack_buffer(&image);
        // (10 + 3 * 104) / 8 = 40, bit 10 % 8 = 2
        assert_eq!(buf[40], !0x20);
        assert_eq!(buf.iter().filter(|&&b| b != 0xFF).count(), 1);
    }

    #[test]
    fn horizontal_origin() {
        let mut image = white(212, 104);
        image.put_pixel(0, 0, Luma([0]));
        let buf = pack_buffer(&image);
        let index = (103 * 104) / 8;
        assert_eq!(buf[index], 0x7F);
        assert_eq!(buf.iter().filter(|&&b| b != 0xFF).count(), 1);
    }

    #[test]
    fn horizontal_rotates() {
        let mut image = white(212, 104);
        image.put_pixel(211, 9, Luma([0]));
        let buf = pack_buffer(&image);
        // newx = 9, newy = 212 - 211 - 1 = 0
        assert_eq!(buf[1], !0x40);
        assert_eq!(buf.iter().filter(|&&b| b != 0xFF).count(), 1);
    }

    #[test]
    fn only_zero_is_dark() {
        let mut image = white(104, 212);
        image.put_pixel(0, 0, Luma([1]));
        image.put_pixel(1, 0, Luma([127]));
        assert_eq!(pack_buffer(&image), BLANK);
    }

    #[test]
    fn unsupported_size() {
        let image = GrayImage::from_pixel(100, 100, Luma([0]));
        assert_eq!(pack_buffer(&image), BLANK);
        let image = GrayImage::from_pixel(104, 211, Luma([0]));
        assert_eq!(pack_buffer(&image), BLANK);
    }
}
