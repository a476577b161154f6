/// 每个采样值的位数，也就是位平面分解产生的图像数量。
pub const BIT_PLANES: usize = 8;

/// 未指定 `-n` 时使用的位宽。
pub const DEFAULT_BIT_WIDTH: u8 = 1;

/// 未指定输出路径时使用的扩展名。
/// 有损格式 (如 JPEG) 会破坏低位，因此默认总是写出 PNG。
pub const DEFAULT_EXTENSION: &str = "png";

/// `hide` 默认输出文件名的前缀，基于载体图像的文件名。
pub const HIDDEN_PREFIX: &str = "doctored_";

/// `reveal` 默认输出文件名的前缀。
pub const REVEALED_PREFIX: &str = "revealed_";

/// `msb` 默认输出文件名的前缀。
pub const MSB_PREFIX: &str = "msb_";

/// `planes` 默认输出目录的后缀。
pub const PLANES_DIR_SUFFIX: &str = "_planes";

/// `channels` 默认输出目录的后缀。
pub const CHANNELS_DIR_SUFFIX: &str = "_channels";

/// 三通道与四通道图像中颜色通道的名称，用于 `channels` 的输出文件名。
pub const COLOR_CHANNEL_NAMES: [&str; 3] = ["red", "green", "blue"];
