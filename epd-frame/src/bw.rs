use image::{DynamicImage, GrayImage, Luma};

/// Converts to a two-level image: pixels darker than `threshold` become 0,
/// the rest 255.
pub fn to_bw(image: &DynamicImage, threshold: u8) -> GrayImage {
    let mut gray = image.to_luma8();
    for Luma([p]) in gray.pixels_mut() {
        *p = if *p < threshold { 0 } else { 255 };
    }
    gray
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn threshold() {
        let image = GrayImage::from_fn(4, 1, |x, _| Luma([[0, 127, 128, 255][x as usize]]));
        let bw = to_bw(&DynamicImage::ImageLuma8(image), 128);
        assert_eq!(bw.into_raw(), [0, 0, 255, 255]);
    }

    #[test]
    fn from_rgb() {
        let mut image = RgbImage::from_pixel(2, 1, Rgb([255, 255, 255]));
        image.put_pixel(1, 0, Rgb([10, 10, 10]));
        let bw = to_bw(&DynamicImage::ImageRgb8(image), 128);
        assert_eq!(bw.dimensions(), (2, 1));
        assert_eq!(bw.into_raw(), [255, 0]);
    }
}
