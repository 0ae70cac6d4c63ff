//! Bit arithmetic for row-major, MSB-first packed 1bpp buffers.
//!
//! Nothing outside this module indexes packed bytes directly.

#[inline]
const fn locate(stride: usize, x: u32, y: u32) -> (usize, u32) {
    let index = y as usize * stride + (x / 8) as usize;
    let bit = 7 - x % 8;
    (index, bit)
}

#[inline]
pub(crate) fn get_bit(buffer: &[u8], stride: usize, x: u32, y: u32) -> bool {
    let (index, bit) = locate(stride, x, y);
    (buffer[index] >> bit) & 1 == 1
}

#[inline]
pub(crate) fn set_bit(buffer: &mut [u8], stride: usize, x: u32, y: u32, on: bool) {
    let (index, bit) = locate(stride, x, y);
    if on {
        buffer[index] |= 1 << bit;
    } else {
        buffer[index] &= !(1 << bit);
    }
}
