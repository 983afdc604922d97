/// 消息结束标记：15 个 1 后跟 1 个 0 (`1111111111111110`)。
/// 解码时以第一次出现的该位模式作为消息的结尾。
pub const TERMINATOR: u16 = 0xFFFE;

/// 结束标记所占的位数。
pub const TERMINATOR_BITS: usize = 16;

/// 每个字符按单字节 (`u8`) 处理，占用 8 位。
pub const BITS_PER_CHAR: usize = 8;

/// 每个像素可承载的位数：R、G、B 三个通道各 1 位。
pub const CHANNELS_PER_PIXEL: usize = 3;

/// 未指定输出路径时，隐写结果图像的文件名前缀。
pub const HIDDEN_IMAGE_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本的文件名前缀。
pub const RECOVERED_TEXT_PREFIX: &str = "recovered_";

/// 颜色平面图像的文件名中缀，例如 `photo_plane_r.bmp`。
pub const PLANE_IMAGE_INFIX: &str = "_plane_";

/// 颜色平面图像总是以 BMP 保存。
pub const PLANE_IMAGE_EXTENSION: &str = "bmp";
