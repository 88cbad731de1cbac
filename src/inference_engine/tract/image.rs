use image::{imageops, DynamicImage, RgbImage};
use tract_onnx::prelude::*;

/// Fits the frame inside `width`x`height`, keeping its aspect ratio and
/// padding the rest with black.
pub fn letterbox_image(image: &DynamicImage, width: u32, height: u32) -> RgbImage {
    if image.width() * height == image.height() * width {
        return image
            .resize_exact(width, height, imageops::FilterType::Triangle)
            .to_rgb8();
    }

    let scaled = image
        .resize(width, height, imageops::FilterType::Triangle)
        .to_rgb8();

    let mut padded = RgbImage::new(width, height);
    let x_offset = (width - scaled.width()) / 2;
    let y_offset = (height - scaled.height()) / 2;
    imageops::overlay(&mut padded, &scaled, x_offset as i64, y_offset as i64);

    padded
}

/// NCHW float tensor with channels scaled to `[0, 1]`.
fn rgb_to_tensor(rgb: &RgbImage) -> Tensor {
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
    })
    .into_tensor()
}

pub fn frame_to_tensor(image: &DynamicImage, width: u32, height: u32) -> Tensor {
    rgb_to_tensor(&letterbox_image(image, width, height))
}
