//! # 嵌入策略
//!
//! 决定每个颜色通道中读写哪一位：LSB (第 0 位) 或 MSB (第 7 位)。

use clap::ValueEnum;
use std::fmt;

/// 承载隐藏数据的位平面。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum BitPlane {
    /// 最低有效位 (第 0 位)，对图像的视觉影响最小。
    #[default]
    Lsb,
    /// 最高有效位 (第 7 位)。
    Msb,
}

impl BitPlane {
    pub const fn position(self) -> u8 {
        match self {
            BitPlane::Lsb => 0,
            BitPlane::Msb => 7,
        }
    }

    pub const fn mask(self) -> u8 {
        1 << self.position()
    }

    /// 先清除目标位，再写入 `bit`；其余各位保持不变。
    pub const fn write_bit(self, value: u8, bit: bool) -> u8 {
        (value & !self.mask()) | ((bit as u8) << self.position())
    }

    pub const fn read_bit(self, value: u8) -> bool {
        value & self.mask() != 0
    }
}

impl fmt::Display for BitPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitPlane::Lsb => f.write_str("LSB"),
            BitPlane::Msb => f.write_str("MSB"),
        }
    }
}
