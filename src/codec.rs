//! # 图像读写模块
//!
//! 在图像文件与 [`Raster`] 之间转换。解码结果总是 8 位整数采样，
//! 浮点或 16 位图像会先被转换为 8 位 RGB / RGBA。

use crate::raster::{Raster, Shape};
use anyhow::{Context, Result};
use colored::Colorize;
use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgb, Rgba};
use log::debug;
use std::path::Path;

/// 读取并解码图像文件。
///
/// # Errors
///
/// 文件无法打开、格式不受支持或内容损坏时返回错误。
pub fn load_raster(path: &Path) -> Result<Raster> {
    let image = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    let raster = to_raster(image)?;
    debug!("decoded {} as {}", path.display(), raster.shape());
    Ok(raster)
}

/// 把 [`Raster`] 编码并写入文件，格式由扩展名决定。
///
/// # Errors
///
/// 通道数无法映射到图像格式、尺寸超出 `u32` 或写入失败时返回错误。
pub fn save_raster(path: &Path, raster: &Raster) -> Result<()> {
    debug!("encoding {} into {}", raster.shape(), path.display());

    let image = to_dynamic(raster)?;
    image.save(path).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

fn to_raster(image: DynamicImage) -> Result<Raster> {
    let (width, height) = (image.width() as usize, image.height() as usize);

    let (channels, samples) = match image {
        DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
        other if other.color().has_alpha() => (4, other.to_rgba8().into_raw()),
        other => (3, other.to_rgb8().into_raw()),
    };

    Raster::new(Shape::new(height, width, channels), samples)
        .context("Decoded image does not match its own dimensions")
}

fn to_dynamic(raster: &Raster) -> Result<DynamicImage> {
    let shape = raster.shape();
    let width = u32::try_from(shape.cols).context("Image is too wide to encode")?;
    let height = u32::try_from(shape.rows).context("Image is too tall to encode")?;
    let samples = raster.samples().to_vec();

    let image = match shape.channels {
        1 => ImageBuffer::<Luma<u8>, _>::from_raw(width, height, samples)
            .map(DynamicImage::ImageLuma8),
        2 => ImageBuffer::<LumaA<u8>, _>::from_raw(width, height, samples)
            .map(DynamicImage::ImageLumaA8),
        3 => ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, samples)
            .map(DynamicImage::ImageRgb8),
        4 => ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, samples)
            .map(DynamicImage::ImageRgba8),
        channels => anyhow::bail!(
            "Cannot encode an image with {} channels per pixel",
            channels.to_string().red().bold()
        ),
    };

    image.context("Pixel buffer is smaller than the image dimensions")
}
