use image::{GenericImage, ImageError, RgbaImage};

#[derive(Debug, thiserror::Error)]
pub enum ConcatError {
    #[error("nothing to concatenate")]
    Empty,

    #[error("image {index} is {found} px high, expected {expected}")]
    HeightMismatch { index: usize, expected: u32, found: u32 },

    #[error("image {index} is {found} px wide, expected {expected}")]
    WidthMismatch { index: usize, expected: u32, found: u32 },

    #[error("result would exceed {} px on a side", u32::MAX)]
    TooLarge,

    #[error("pixel copy failed: {0}")]
    Copy(#[from] ImageError),
}

/// Places `images` side by side, left to right.
///
/// Every image must share the height of the first one.
pub fn hconcat(images: &[RgbaImage]) -> Result<RgbaImage, ConcatError> {
    let first = images.first().ok_or(ConcatError::Empty)?;
    let height = first.height();

    let mut width: u32 = 0;
    for (index, image) in images.iter().enumerate() {
        if image.height() != height {
            return Err(ConcatError::HeightMismatch {
                index,
                expected: height,
                found: image.height(),
            });
        }
        width = width.checked_add(image.width()).ok_or(ConcatError::TooLarge)?;
    }

    let mut out = RgbaImage::new(width, height);
    let mut x = 0;
    for image in images {
        out.copy_from(image, x, 0)?;
        x += image.width();
    }
    Ok(out)
}

/// Stacks `images` top to bottom, in slice order.
///
/// Every image must share the width of the first one.
pub fn vconcat(images: &[RgbaImage]) -> Result<RgbaImage, ConcatError> {
    let first = images.first().ok_or(ConcatError::Empty)?;
    let width = first.width();

    let mut height: u32 = 0;
    for (index, image) in images.iter().enumerate() {
        if image.width() != width {
            return Err(ConcatError::WidthMismatch {
                index,
                expected: width,
                found: image.width(),
            });
        }
        height = height.checked_add(image.height()).ok_or(ConcatError::TooLarge)?;
    }

    let mut out = RgbaImage::new(width, height);
    let mut y = 0;
    for image in images {
        out.copy_from(image, 0, y)?;
        y += image.height();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, value: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
    }

    #[test]
    fn hconcat_sums_widths_in_order() {
        let out = hconcat(&[solid(2, 3, 10), solid(1, 3, 20), solid(4, 3, 30)]).expect("hconcat");
        assert_eq!(out.dimensions(), (7, 3));
        assert_eq!(out.get_pixel(0, 0)[0], 10);
        assert_eq!(out.get_pixel(2, 2)[0], 20);
        assert_eq!(out.get_pixel(6, 1)[0], 30);
    }

    #[test]
    fn vconcat_sums_heights_in_order() {
        let out = vconcat(&[solid(2, 1, 10), solid(2, 2, 20)]).expect("vconcat");
        assert_eq!(out.dimensions(), (2, 3));
        assert_eq!(out.get_pixel(1, 0)[0], 10);
        assert_eq!(out.get_pixel(1, 2)[0], 20);
    }

    #[test]
    fn hconcat_rejects_height_mismatch() {
        let err = hconcat(&[solid(2, 2, 0), solid(2, 2, 0), solid(2, 3, 0)]).unwrap_err();
        assert!(matches!(
            err,
            ConcatError::HeightMismatch { index: 2, expected: 2, found: 3 }
        ));
    }

    #[test]
    fn vconcat_rejects_width_mismatch() {
        let err = vconcat(&[solid(4, 2, 0), solid(3, 2, 0)]).unwrap_err();
        assert!(matches!(
            err,
            ConcatError::WidthMismatch { index: 1, expected: 4, found: 3 }
        ));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(hconcat(&[]), Err(ConcatError::Empty)));
        assert!(matches!(vconcat(&[]), Err(ConcatError::Empty)));
    }

    #[test]
    fn single_image_is_returned_unchanged() {
        let image = solid(3, 2, 77);
        assert_eq!(hconcat(std::slice::from_ref(&image)).expect("hconcat"), image);
    }
}
