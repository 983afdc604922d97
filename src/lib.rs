//! # bit_plane_hide 库
//!
//! 本库包含位平面 (LSB / MSB) 隐写工具的核心逻辑：
//! 比特流编解码、嵌入策略、嵌入与提取算法，以及颜色位平面拆分。

// 声明库包含的所有模块。

pub mod bitstream;
pub mod cli;
pub mod constants;
pub mod container;
pub mod error;
pub mod handler;
pub mod logging;
pub mod planes;
pub mod steganography;
pub mod strategy;

pub use error::StegError;
pub use planes::{ColorPlanes, split_planes};
pub use steganography::{embed_lsb, embed_msb, extract_lsb, extract_msb};
pub use strategy::BitPlane;
