//! # 像素缓冲区模块
//!
//! [`Raster`] 是核心算法处理的图像：按行优先顺序存放的扁平 `u8` 缓冲区，
//! 外加显式的 `(rows, cols, channels)` 形状。形状比较是 O(1) 的。

use crate::error::StegoError;
use std::fmt;

/// 图像的形状：行数、列数以及每个像素的通道数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
    pub channels: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize, channels: usize) -> Self {
        Self {
            rows,
            cols,
            channels,
        }
    }

    /// 该形状所需的采样值总数；乘积超出 `usize` 时返回 `None`。
    pub fn sample_count(&self) -> Option<usize> {
        self.rows
            .checked_mul(self.cols)
            .and_then(|pixels| pixels.checked_mul(self.channels))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.rows, self.cols, self.channels)
    }
}

/// 一幅 8 位图像。创建后不可变，核心操作总是返回新的 `Raster`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    shape: Shape,
    samples: Vec<u8>,
}

impl Raster {
    /// 用按行优先排列的采样值创建图像。
    ///
    /// # Errors
    ///
    /// * 通道数为 0 时返回 [`StegoError::EmptyPixel`]。
    /// * 采样值总数超出 `usize` 时返回 [`StegoError::ShapeOverflow`]。
    /// * `samples` 的长度与 `shape` 不符时返回 [`StegoError::SampleCount`]。
    pub fn new(shape: Shape, samples: Vec<u8>) -> Result<Self, StegoError> {
        if shape.channels == 0 {
            return Err(StegoError::EmptyPixel);
        }

        let expected = shape
            .sample_count()
            .ok_or(StegoError::ShapeOverflow(shape))?;
        if samples.len() != expected {
            return Err(StegoError::SampleCount {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self { shape, samples })
    }

    /// 由已经与形状一致的缓冲区构造，仅供本 crate 内部的变换使用。
    pub(crate) fn from_parts(shape: Shape, samples: Vec<u8>) -> Self {
        debug_assert_eq!(Some(samples.len()), shape.sample_count());
        Self { shape, samples }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_length() {
        let result = Raster::new(Shape::new(2, 2, 3), vec![0; 11]);
        assert_eq!(
            result,
            Err(StegoError::SampleCount {
                expected: 12,
                actual: 11
            })
        );
    }

    #[test]
    fn test_new_rejects_zero_channels() {
        assert_eq!(
            Raster::new(Shape::new(1, 1, 0), Vec::new()),
            Err(StegoError::EmptyPixel)
        );
    }

    #[test]
    fn test_new_rejects_overflowing_shape() {
        let shape = Shape::new(usize::MAX / 2 + 1, 2, 1);
        assert_eq!(shape.sample_count(), None);
        assert_eq!(
            Raster::new(shape, Vec::new()),
            Err(StegoError::ShapeOverflow(shape))
        );

        let wide = Shape::new(1, usize::MAX, 2);
        assert_eq!(
            Raster::new(wide, Vec::new()),
            Err(StegoError::ShapeOverflow(wide))
        );
    }

    #[test]
    fn test_empty_image_is_valid() {
        let raster = Raster::new(Shape::new(0, 5, 4), Vec::new()).unwrap();
        assert_eq!(raster.shape().to_string(), "0x5x4");
        assert!(raster.samples().is_empty());
    }
}
