//! # 颜色平面拆分
//!
//! 把一幅 RGB 图像拆成三幅黑白图像，每幅对应一个通道：
//! 该通道的目标位为 1 时像素为白色，否则为黑色。可用于直观检查隐写痕迹。

use crate::strategy::BitPlane;
use image::{GrayImage, Luma, RgbImage};

const WHITE: Luma<u8> = Luma([255]);
const BLACK: Luma<u8> = Luma([0]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// 该通道在像素中的下标。
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// 用于输出文件名的短后缀。
    pub const fn suffix(self) -> &'static str {
        match self {
            Channel::Red => "r",
            Channel::Green => "g",
            Channel::Blue => "b",
        }
    }
}

/// 三幅与源图像同尺寸的黑白平面图像。
#[derive(Debug, Clone)]
pub struct ColorPlanes {
    pub red: GrayImage,
    pub green: GrayImage,
    pub blue: GrayImage,
}

impl ColorPlanes {
    pub fn get(&self, channel: Channel) -> &GrayImage {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &GrayImage)> {
        Channel::ALL.into_iter().map(move |channel| (channel, self.get(channel)))
    }
}

/// 按各通道的最低有效位拆分图像。
pub fn split_planes(container: &RgbImage) -> ColorPlanes {
    split_planes_with(container, BitPlane::Lsb)
}

/// 按指定位平面拆分图像。
pub fn split_planes_with(container: &RgbImage, plane: BitPlane) -> ColorPlanes {
    let render = |channel: Channel| {
        GrayImage::from_fn(container.width(), container.height(), |x, y| {
            let value = container.get_pixel(x, y).0[channel.index()];
            if plane.read_bit(value) { WHITE } else { BLACK }
        })
    };

    ColorPlanes {
        red: render(Channel::Red),
        green: render(Channel::Green),
        blue: render(Channel::Blue),
    }
}
