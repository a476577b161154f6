//! # bitplane_hide 库
//!
//! 本库包含位平面图像隐写工具的核心逻辑：
//! 把一幅图像的高位嵌入另一幅同尺寸图像的低位，并能从低位中恢复出近似图像。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod handler;
pub mod raster;
pub mod steganography;
