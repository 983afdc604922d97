//! # 隐写核心
//!
//! 按固定顺序遍历像素 (从左到右、从上到下)，每个像素依次访问 R、G、B 三个通道，
//! 每个通道承载比特流中的一位。嵌入与提取使用完全相同的遍历顺序。

use crate::bitstream;
use crate::constants::CHANNELS_PER_PIXEL;
use crate::error::StegError;
use crate::strategy::BitPlane;
use image::RgbImage;

/// 图像可承载的最大位数：宽 × 高 × 3。
pub fn capacity(container: &RgbImage) -> usize {
    container.width() as usize * container.height() as usize * CHANNELS_PER_PIXEL
}

/// 将 `message` 嵌入 `container` 的指定位平面。
///
/// 比特流写完后立即停止，之后的像素 (包括最后一个像素中未用到的通道) 保持原值。
///
/// # Errors
///
/// * [`StegError::InvalidCharacter`] - 消息包含无法用单字节表示的字符。
/// * [`StegError::PayloadTooLarge`] - 比特流长度超过图像容量。
///
/// 出错时 `container` 不会被修改。
pub fn embed(container: &mut RgbImage, message: &str, plane: BitPlane) -> Result<(), StegError> {
    let bits = bitstream::encode(message)?;
    let capacity = capacity(container);

    if bits.len() > capacity {
        return Err(StegError::PayloadTooLarge {
            required: bits.len(),
            capacity,
        });
    }

    let channels = container
        .pixels_mut()
        .flat_map(|pixel| pixel.0.iter_mut());

    for (channel, bit) in channels.zip(bits) {
        *channel = plane.write_bit(*channel, bit);
    }

    Ok(())
}

/// 从 `container` 的指定位平面中提取隐藏的消息。
///
/// # Errors
///
/// * [`StegError::MarkerNotFound`] - 整幅图像中都没有结束标记。
/// * [`StegError::InvalidByteGrouping`] - 标记之前的数据不是整字节。
pub fn extract(container: &RgbImage, plane: BitPlane) -> Result<String, StegError> {
    let bits = container
        .pixels()
        .flat_map(|pixel| pixel.0)
        .map(|channel| plane.read_bit(channel));

    bitstream::decode(bits)
}

pub fn embed_lsb(container: &mut RgbImage, message: &str) -> Result<(), StegError> {
    embed(container, message, BitPlane::Lsb)
}

pub fn embed_msb(container: &mut RgbImage, message: &str) -> Result<(), StegError> {
    embed(container, message, BitPlane::Msb)
}

pub fn extract_lsb(container: &RgbImage) -> Result<String, StegError> {
    extract(container, BitPlane::Lsb)
}

pub fn extract_msb(container: &RgbImage) -> Result<String, StegError> {
    extract(container, BitPlane::Msb)
}
