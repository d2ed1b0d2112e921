/// Maximum value of an 8-bit channel as a blend operand.
pub(crate) const MAX8: u32 = 255;

/// Truncating 8-bit fixed-point division used by the masked blend.
pub(crate) fn div255_trunc(x: u32) -> u32 {
    x / MAX8
}

/// Rounded `c * a / 255`, used when premultiplying straight-alpha input.
pub(crate) fn premul_u8(c: u8, a: u8) -> u8 {
    ((u16::from(c) * u16::from(a) + 127) / 255) as u8
}

/// Inverse of [`premul_u8`]; fully transparent pixels map to zero.
pub(crate) fn unpremul_u8(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
    v.min(255) as u8
}
