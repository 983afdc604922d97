//! # 比特流编解码
//!
//! 负责文本载荷与比特序列之间的相互转换，以及结束标记的追加与查找。
//! 每个字符编码为 8 位 (高位在前)，全部字符之后追加 16 位结束标记 [`TERMINATOR`]。

use crate::constants::{BITS_PER_CHAR, TERMINATOR, TERMINATOR_BITS};
use crate::error::StegError;

/// 流式结束标记匹配器。
///
/// 内部用一个 16 位移位寄存器保存最近推入的 16 位，
/// 每推入一位就能在 O(1) 时间内判断结束标记是否刚好出现。
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminatorScanner {
    window: u16,
    seen: usize,
}

impl TerminatorScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 推入一位。当最近的 16 位恰好等于结束标记时返回 `true`。
    pub fn push(&mut self, bit: bool) -> bool {
        self.window = (self.window << 1) | u16::from(bit);
        self.seen += 1;
        self.seen >= TERMINATOR_BITS && self.window == TERMINATOR
    }
}

/// 载荷编码后 (含结束标记) 的总位数。
pub fn encoded_len(payload: &str) -> usize {
    payload.chars().count() * BITS_PER_CHAR + TERMINATOR_BITS
}

/// 将文本载荷编码为比特序列，并追加结束标记。
///
/// # Errors
///
/// 任何码点大于 255 的字符都会导致 [`StegError::InvalidCharacter`]，不会被截断或回绕。
pub fn encode(payload: &str) -> Result<Vec<bool>, StegError> {
    let mut bits = Vec::with_capacity(encoded_len(payload));

    for (index, character) in payload.chars().enumerate() {
        let byte = u8::try_from(u32::from(character))
            .map_err(|_| StegError::InvalidCharacter { character, index })?;
        bits.extend((0..BITS_PER_CHAR).rev().map(|shift| (byte >> shift) & 1 == 1));
    }

    bits.extend(
        (0..TERMINATOR_BITS)
            .rev()
            .map(|shift| (TERMINATOR >> shift) & 1 == 1),
    );

    Ok(bits)
}

/// 从比特序列中解码出文本载荷。
///
/// 输入是惰性的：一旦遇到第一个结束标记就停止消费，之后的位不会被读取。
///
/// # Errors
///
/// * [`StegError::MarkerNotFound`] - 序列中没有结束标记。
/// * [`StegError::InvalidByteGrouping`] - 标记之前的位数不是 8 的倍数。
pub fn decode<I>(bits: I) -> Result<String, StegError>
where
    I: IntoIterator<Item = bool>,
{
    let mut scanner = TerminatorScanner::new();
    let mut buffered = Vec::new();

    for bit in bits {
        buffered.push(bit);
        if scanner.push(bit) {
            buffered.truncate(buffered.len() - TERMINATOR_BITS);
            return pack(&buffered);
        }
    }

    Err(StegError::MarkerNotFound)
}

fn pack(bits: &[bool]) -> Result<String, StegError> {
    if bits.len() % BITS_PER_CHAR != 0 {
        return Err(StegError::InvalidByteGrouping { bits: bits.len() });
    }

    Ok(bits
        .chunks_exact(BITS_PER_CHAR)
        .map(|group| {
            let byte = group
                .iter()
                .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
            char::from(byte)
        })
        .collect())
}
