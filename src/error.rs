//! # 错误类型
//!
//! 隐写核心 (编解码、嵌入、提取) 的所有失败都通过 [`StegError`] 同步返回。
//! 核心层不记录日志，也不重试；如何呈现给用户由调用方决定。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StegError {
    /// 比特流长度超过了图像容量。在修改任何像素之前返回。
    #[error(
        "Not enough space in the image to hide the text. Required: {required} bits, Available: {capacity} bits"
    )]
    PayloadTooLarge { required: usize, capacity: usize },

    /// 扫描完整个图像也没有找到结束标记。
    /// 通常说明图像中没有隐藏消息，或者使用了错误的位平面 (例如用 MSB 读取 LSB 嵌入的图像)。
    #[error("End-of-message marker not found. The image may not contain a hidden message.")]
    MarkerNotFound,

    /// 结束标记之前的位数不是 8 的倍数。
    #[error("Hidden data before the end marker is {bits} bits long, which is not a whole number of bytes")]
    InvalidByteGrouping { bits: usize },

    /// 载荷中含有码点大于 255 的字符。
    #[error("Character {character:?} at index {index} cannot be represented as a single byte")]
    InvalidCharacter { character: char, index: usize },
}
