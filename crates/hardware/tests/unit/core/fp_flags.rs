//! Exception flag bit layout and formatting.

use pretty_assertions::assert_eq;
use xprobe_core::core::units::fpu::exception_flags::FpFlags;
use xprobe_core::core::units::fpu::is_snan_f32;

#[test]
fn flag_bits_match_fflags_layout() {
    assert_eq!(FpFlags::NV.bits(), 0b1_0000);
    assert_eq!(FpFlags::DZ.bits(), 0b0_1000);
    assert_eq!(FpFlags::OF.bits(), 0b0_0100);
    assert_eq!(FpFlags::UF.bits(), 0b0_0010);
    assert_eq!(FpFlags::NX.bits(), 0b0_0001);
}

#[test]
fn display_joins_set_flags() {
    assert_eq!(FpFlags::NONE.to_string(), "-");
    assert_eq!(FpFlags::OF.to_string(), "OF");
    assert_eq!((FpFlags::NX | FpFlags::NV).to_string(), "NV|NX");
}

#[test]
fn contains_requires_every_bit() {
    let set = FpFlags::NV | FpFlags::OF;
    assert!(set.contains(FpFlags::NV));
    assert!(set.contains(FpFlags::NONE));
    assert!(!set.contains(FpFlags::NV | FpFlags::DZ));
}

#[test]
fn signalling_nan_detection() {
    assert!(is_snan_f32(f32::from_bits(0x7F80_0001)));
    assert!(is_snan_f32(f32::from_bits(0xFFBF_FFFF)));
    assert!(!is_snan_f32(f32::NAN));
    assert!(!is_snan_f32(f32::INFINITY));
    assert!(!is_snan_f32(1.0));
}
