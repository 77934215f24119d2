use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use std::io::Cursor;
use thiserror::Error;

/// 超过该边长先缩小，避免大图拖慢 OCR 上传
const MAX_SIDE: u32 = 4000;

/// 对比度增强倍数
const CONTRAST_FACTOR: f32 = 2.0;

/// 3x3 锐化核 (中心 32，周围 -2，整体除以 16)
#[rustfmt::skip]
const SHARPEN_KERNEL: [f32; 9] = [
    -0.125, -0.125, -0.125,
    -0.125, 2.0, -0.125,
    -0.125, -0.125, -0.125,
];

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Failed to encode processed image: {0}")]
    Encode(String),
}

/// OCR 前的图像增强: 灰度 -> 锐化 -> 增强对比度 -> JPEG
pub fn enhance_for_ocr(data: &[u8]) -> Result<Vec<u8>, PreprocessError> {
    let img = image::load_from_memory(data)?;
    let (width, height) = (img.width(), img.height());

    let img = if width > MAX_SIDE || height > MAX_SIDE {
        img.resize(MAX_SIDE, MAX_SIDE, image::imageops::FilterType::Lanczos3)
    } else {
        img
    };

    let gray = DynamicImage::ImageLuma8(img.to_luma8());
    let sharpened = gray.filter3x3(&SHARPEN_KERNEL).to_luma8();
    let enhanced = boost_contrast(&sharpened, CONTRAST_FACTOR);

    tracing::debug!(
        "Preprocessed image {}x{} -> {}x{}",
        width,
        height,
        enhanced.width(),
        enhanced.height()
    );

    encode_as_jpeg(DynamicImage::ImageLuma8(enhanced))
}

/// 以平均亮度为中心拉伸: out = mean + factor * (p - mean)
fn boost_contrast(gray: &GrayImage, factor: f32) -> GrayImage {
    let count = u64::from(gray.width()) * u64::from(gray.height());
    if count == 0 {
        return gray.clone();
    }

    let sum: u64 = gray.pixels().map(|p| u64::from(p[0])).sum();
    let mean = (sum as f32 / count as f32).round();

    let mut out = gray.clone();
    for p in out.pixels_mut() {
        let v = mean + factor * (f32::from(p[0]) - mean);
        *p = Luma([v.round().clamp(0.0, 255.0) as u8]);
    }
    out
}

fn encode_as_jpeg(img: DynamicImage) -> Result<Vec<u8>, PreprocessError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)
        .map_err(|e| PreprocessError::Encode(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, RgbImage};

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png).unwrap();
        buf
    }

    #[test]
    fn output_is_grayscale_jpeg_with_same_size() {
        let rgb: RgbImage = ImageBuffer::from_fn(32, 16, |x, y| {
            Rgb([(x * 8) as u8, (y * 16) as u8, 128])
        });
        let out = enhance_for_ocr(&png_bytes(DynamicImage::ImageRgb8(rgb))).unwrap();

        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 16));
        assert!(matches!(decoded, DynamicImage::ImageLuma8(_)));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = enhance_for_ocr(b"not an image").unwrap_err();
        assert!(matches!(err, PreprocessError::Decode(_)));
    }

    #[test]
    fn contrast_spreads_around_mean() {
        let gray: GrayImage =
            ImageBuffer::from_fn(2, 1, |x, _| Luma([if x == 0 { 100 } else { 140 }]));
        let out = boost_contrast(&gray, 2.0);

        assert_eq!(out.get_pixel(0, 0)[0], 80);
        assert_eq!(out.get_pixel(1, 0)[0], 160);
    }

    #[test]
    fn contrast_clamps_and_keeps_uniform_images() {
        let gray: GrayImage =
            ImageBuffer::from_fn(2, 1, |x, _| Luma([if x == 0 { 0 } else { 255 }]));
        let out = boost_contrast(&gray, 2.0);
        assert_eq!(out.get_pixel(0, 0)[0], 0);
        assert_eq!(out.get_pixel(1, 0)[0], 255);

        let flat: GrayImage = ImageBuffer::from_fn(4, 4, |_, _| Luma([77]));
        assert_eq!(boost_contrast(&flat, 2.0), flat);
    }
}
