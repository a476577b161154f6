//! # 核心隐写算法模块
//!
//! 在 [`Raster`] 上执行的纯变换：嵌入、提取、位平面分解、高位截断与通道拆分。
//! 每个操作都只读输入并返回新的图像；逐采样的计算通过 `rayon` 并行完成，
//! 带索引的并行迭代器保证结果按原位置排列。

use crate::bits::{
    BitIndex, BitWidth, isolate_bit_to_msb, keep_high_bits, promote_low_bits,
    transplant_high_bits,
};
use crate::constants::BIT_PLANES;
use crate::error::StegoError;
use crate::raster::Raster;
use log::debug;
use rayon::prelude::*;

/// 把 `needle` 每个采样的高 `n` 位写入 `stack` 对应采样的低 `n` 位。
///
/// # Errors
///
/// 两幅图像的行数、列数或通道数任一不同，都会在计算开始前返回
/// [`StegoError::ShapeMismatch`]，不会产生任何输出。
pub fn embed(stack: &Raster, needle: &Raster, n: BitWidth) -> Result<Raster, StegoError> {
    if stack.shape() != needle.shape() {
        return Err(StegoError::ShapeMismatch {
            stack: stack.shape(),
            needle: needle.shape(),
        });
    }

    debug!("embedding {} bit(s) per sample into {}", n, stack.shape());

    let samples = stack
        .samples()
        .par_iter()
        .zip(needle.samples().par_iter())
        .map(|(&dst, &src)| transplant_high_bits(dst, src, n))
        .collect();

    Ok(Raster::from_parts(stack.shape(), samples))
}

/// 取出每个采样的低 `n` 位并提升到高位，得到被隐藏图像的有损近似。
///
/// 结果中每个采样的低 `8 - n` 位恒为 0。
pub fn extract(source: &Raster, n: BitWidth) -> Raster {
    debug!("extracting {} bit(s) per sample from {}", n, source.shape());

    let samples = source
        .samples()
        .par_iter()
        .map(|&v| promote_low_bits(v, n))
        .collect();

    Raster::from_parts(source.shape(), samples)
}

/// 把图像分解为 8 个位平面，下标 `i` 的图像对应原图的第 `i` 位。
///
/// 位为 1 的采样显示为 255，为 0 的显示为 0。
pub fn decompose(source: &Raster) -> [Raster; BIT_PLANES] {
    BitIndex::all().map(|i| bit_plane(source, i))
}

/// 单个位平面。
pub fn bit_plane(source: &Raster, i: BitIndex) -> Raster {
    debug!("isolating bit {} of {}", i.get(), source.shape());

    let samples = source
        .samples()
        .par_iter()
        .map(|&v| isolate_bit_to_msb(v, i))
        .collect();

    Raster::from_parts(source.shape(), samples)
}

/// 只保留每个采样的高 `n` 位。
///
/// 结果恰好是用同一个 `n` 嵌入再提取后能恢复出来的图像，
/// 因此可以在没有载体图像的情况下预览隐藏效果。
pub fn truncate(source: &Raster, n: BitWidth) -> Raster {
    let samples = source
        .samples()
        .par_iter()
        .map(|&v| keep_high_bits(v, n))
        .collect();

    Raster::from_parts(source.shape(), samples)
}

/// 按颜色通道拆分图像。
///
/// 每个输出与原图形状相同：选中的颜色通道原样保留，其余颜色通道清零。
/// 带 alpha 的图像 (2 或 4 通道) 的最后一个通道在每个输出中都保留，不单独拆分。
/// 注意这与逐通道掩码不同：后者会把 alpha 一并清零，输出因此完全透明。
/// 单通道图像返回一份原图的拷贝。
pub fn split_channels(source: &Raster) -> Vec<Raster> {
    let channels = source.shape().channels;
    let alpha = alpha_channel(channels);
    let color_channels = if alpha.is_some() {
        channels - 1
    } else {
        channels
    };

    (0..color_channels)
        .map(|keep| {
            let samples = source
                .samples()
                .par_iter()
                .enumerate()
                .map(|(idx, &v)| {
                    let c = idx % channels;
                    if c == keep || Some(c) == alpha { v } else { 0 }
                })
                .collect();
            Raster::from_parts(source.shape(), samples)
        })
        .collect()
}

fn alpha_channel(channels: usize) -> Option<usize> {
    match channels {
        2 | 4 => Some(channels - 1),
        _ => None,
    }
}
