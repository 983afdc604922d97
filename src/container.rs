//! # 图像容器读写
//!
//! 隐写核心只处理内存中的 [`RgbImage`]。本模块负责把磁盘上的图像文件解码为 RGB8 像素缓冲区，
//! 以及把结果按无损格式写回磁盘。任何有损压缩都会破坏隐藏的数据，因此保存时只接受无损格式。

use anyhow::{Context, Result};
use colored::Colorize;
use image::{ImageBuffer, ImageFormat, Pixel, PixelWithColorType, RgbImage};
use std::path::Path;

/// 允许写出的无损格式。
const LOSSLESS_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Bmp,
    ImageFormat::Png,
    ImageFormat::Tiff,
    ImageFormat::WebP,
    ImageFormat::Qoi,
];

/// 读取图像并转换为 RGB8，Alpha 通道会被丢弃。
///
/// # Errors
///
/// 文件不存在、格式不受支持或数据损坏时返回错误。
pub fn open(path: &Path) -> Result<RgbImage> {
    let image = image::open(path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    log::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// 按扩展名推断格式并保存图像。
///
/// # Errors
///
/// * 扩展名无法识别，或对应的是有损格式。
/// * 编码器不支持该像素类型，或无法写入目标文件。
pub fn save<P>(image: &ImageBuffer<P, Vec<u8>>, path: &Path) -> Result<()>
where
    P: Pixel<Subpixel = u8> + PixelWithColorType,
{
    let format = lossless_format(path)?;

    image.save_with_format(path, format).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    log::debug!("Saved {} as {:?}", path.display(), format);
    Ok(())
}

fn lossless_format(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path).with_context(|| {
        format!(
            "Cannot determine the image format of: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        LOSSLESS_FORMATS.contains(&format),
        "Output format {:?} is not lossless and would destroy the hidden data: {}",
        format,
        path.to_string_lossy().red().bold()
    );

    Ok(format)
}
