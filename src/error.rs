//! # 错误类型模块
//!
//! 核心隐写算法可能报告的全部错误。文件读写错误不在此处，
//! 它们由 `codec` 与 `handler` 通过 `anyhow` 附带上下文后返回。

use crate::raster::Shape;
use thiserror::Error;

/// 核心操作的错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 载体图像 (stack) 与待隐藏图像 (needle) 的形状不一致。
    #[error("Shape mismatch: stack is {stack}, needle is {needle}")]
    ShapeMismatch { stack: Shape, needle: Shape },

    /// 位宽 `n` 不在 1..=8 之内。
    #[error("Invalid bit width {0}: must be between 1 and 8")]
    InvalidBitWidth(u8),

    /// 位索引 `i` 不在 0..=7 之内。
    #[error("Invalid bit index {0}: must be between 0 and 7")]
    InvalidBitIndex(u8),

    /// 原始像素缓冲区的长度与声明的形状不符。
    #[error("Sample buffer holds {actual} samples, but the shape requires {expected}")]
    SampleCount { expected: usize, actual: usize },

    /// 形状所需的采样值总数超出了 `usize` 的范围。
    #[error("Shape {0} holds more samples than can be addressed")]
    ShapeOverflow(Shape),

    /// 形状声明每个像素包含 0 个通道。
    #[error("A pixel must contain at least one channel")]
    EmptyPixel,
}
