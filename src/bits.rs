//! # 位平面移位模块
//!
//! 对单个采样值 (`u8`) 进行的纯位运算，是嵌入、提取与位平面分解共同依赖的基础。
//! 所有函数只做整数运算，不分配内存，也不会失败：
//! 位宽与位索引的合法性由 [`BitWidth`] 和 [`BitIndex`] 在构造时保证。

use crate::constants::{BIT_PLANES, DEFAULT_BIT_WIDTH};
use crate::error::StegoError;
use std::fmt;

/// 参与转移或提取的位数 `n`，保证 `1 <= n <= 8`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitWidth(u8);

impl BitWidth {
    /// 校验并创建位宽。
    ///
    /// # Errors
    ///
    /// 当 `n` 不在 1..=8 之内时返回 [`StegoError::InvalidBitWidth`]。
    pub fn new(n: u8) -> Result<Self, StegoError> {
        if (1..=8).contains(&n) {
            Ok(Self(n))
        } else {
            Err(StegoError::InvalidBitWidth(n))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// `8 - n`，范围 0..=7，因此对 `u8` 移位永远不会溢出。
    fn rest(self) -> u32 {
        8 - u32::from(self.0)
    }

    /// 低 `n` 位的掩码。
    pub fn low_mask(self) -> u8 {
        0xFF >> self.rest()
    }

    /// 高 `n` 位的掩码。
    pub fn high_mask(self) -> u8 {
        self.low_mask() << self.rest()
    }
}

impl Default for BitWidth {
    fn default() -> Self {
        Self(DEFAULT_BIT_WIDTH)
    }
}

impl TryFrom<u8> for BitWidth {
    type Error = StegoError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 单个位的索引 `i`，0 为最低有效位，7 为最高有效位。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitIndex(u8);

impl BitIndex {
    /// # Errors
    ///
    /// 当 `i` 不在 0..=7 之内时返回 [`StegoError::InvalidBitIndex`]。
    pub fn new(i: u8) -> Result<Self, StegoError> {
        if usize::from(i) < BIT_PLANES {
            Ok(Self(i))
        } else {
            Err(StegoError::InvalidBitIndex(i))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// 按从低到高的顺序列出全部 8 个位索引。
    pub fn all() -> [BitIndex; BIT_PLANES] {
        std::array::from_fn(|i| BitIndex(i as u8))
    }
}

/// 取出 `v` 的低 `n` 位并左移到字节的高端。
///
/// `(v & (0xFF >> (8 - n))) << (8 - n)`，结果的低 `8 - n` 位恒为 0。
pub fn promote_low_bits(v: u8, n: BitWidth) -> u8 {
    (v & n.low_mask()) << n.rest()
}

/// 取出 `v` 的第 `i` 位，移到最高位后再向下扩展为满亮度。
///
/// 第 `i` 位为 1 时返回 `0xFF`，否则返回 `0`。
pub fn isolate_bit_to_msb(v: u8, i: BitIndex) -> u8 {
    let shift = u32::from(i.0);
    let msb = (v & (1 << shift)) << (7 - shift);
    // 算术右移把最高位复制到整个字节。
    ((msb as i8) >> 7) as u8
}

/// 把 `src` 的高 `n` 位移到低端，拼接进 `dst` 的低 `n` 位。
///
/// `dst` 的高 `8 - n` 位保持不变：`(dst & !(0xFF >> (8 - n))) | (src >> (8 - n))`。
pub fn transplant_high_bits(dst: u8, src: u8, n: BitWidth) -> u8 {
    (dst & !n.low_mask()) | (src >> n.rest())
}

/// 只保留 `v` 的高 `n` 位，低 `8 - n` 位清零。
pub fn keep_high_bits(v: u8, n: BitWidth) -> u8 {
    v & n.high_mask()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths() -> impl Iterator<Item = BitWidth> {
        (1..=8).map(|n| BitWidth::new(n).unwrap())
    }

    #[test]
    fn test_bit_width_bounds() {
        assert_eq!(BitWidth::new(0), Err(StegoError::InvalidBitWidth(0)));
        assert_eq!(BitWidth::new(9), Err(StegoError::InvalidBitWidth(9)));
        assert_eq!(BitWidth::new(8).map(BitWidth::get), Ok(8));
        assert_eq!(BitWidth::default().get(), 1);
        assert_eq!(BitWidth::try_from(3).map(BitWidth::get), Ok(3));
    }

    #[test]
    fn test_bit_index_bounds() {
        assert_eq!(BitIndex::new(8), Err(StegoError::InvalidBitIndex(8)));
        assert_eq!(BitIndex::new(7).map(BitIndex::get), Ok(7));
        assert_eq!(BitIndex::all().map(BitIndex::get), [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_documented_scenario() {
        let n = BitWidth::new(4).unwrap();
        let embedded = transplant_high_bits(0b1111_0000, 0b1010_1010, n);
        assert_eq!(embedded, 250);
        assert_eq!(promote_low_bits(embedded, n), 160);
    }

    #[test]
    fn test_isolate_bit_is_full_intensity() {
        for v in 0..=255u8 {
            for i in BitIndex::all() {
                let expected = if v & (1 << i.get()) != 0 { 255 } else { 0 };
                assert_eq!(isolate_bit_to_msb(v, i), expected, "v = {v}, i = {}", i.get());
            }
        }
    }

    #[test]
    fn test_transplant_preserves_high_bits_of_dst() {
        for n in widths() {
            let kept = !n.low_mask();
            for dst in 0..=255u8 {
                for src in [0u8, 1, 0x7F, 0x80, 0xAA, 0xFF] {
                    let out = transplant_high_bits(dst, src, n);
                    assert_eq!(out & kept, dst & kept);
                    assert_eq!(out & n.low_mask(), src >> (8 - n.get()));
                }
            }
        }
    }

    #[test]
    fn test_full_width_edges() {
        let eight = BitWidth::new(8).unwrap();
        let one = BitWidth::new(1).unwrap();
        for v in 0..=255u8 {
            assert_eq!(transplant_high_bits(0x5A, v, eight), v);
            assert_eq!(promote_low_bits(v, eight), v);
            assert_eq!(keep_high_bits(v, eight), v);
            assert_eq!(transplant_high_bits(v, 0x80, one), v | 1);
            assert_eq!(transplant_high_bits(v, 0x7F, one), v & 0xFE);
            assert_eq!(promote_low_bits(v, one), (v & 1) << 7);
        }
    }

    #[test]
    fn test_promote_after_transplant_keeps_needle_high_bits() {
        for n in widths() {
            for src in 0..=255u8 {
                let out = promote_low_bits(transplant_high_bits(0x3C, src, n), n);
                assert_eq!(out, keep_high_bits(src, n));
            }
        }
    }
}
