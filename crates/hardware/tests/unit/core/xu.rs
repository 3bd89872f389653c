//! Custom Execution Unit.
//!
//! Exercises MOD, NINST and FDIST.S both through the typed entry points and
//! through `Xu::apply`, covering sign rules, wrap-around, the zero-divisor
//! fault, IEEE special values and the raised exception flags.

use rstest::rstest;
use xprobe_core::common::{Operand, RegisterFile, Trap, Value, Vector3};
use xprobe_core::core::units::fpu::exception_flags::FpFlags;
use xprobe_core::core::units::xu::Xu;
use xprobe_core::core::units::xu::arithmetic::{modulo, ninst};
use xprobe_core::core::units::xu::distance::fdist;
use xprobe_core::isa::decode::encode;
use xprobe_core::isa::instruction::Decoded;
use xprobe_core::isa::xcustom::Opcode;

#[rstest]
#[case(11, 10, 1)]
#[case(55, 10, 5)]
#[case(-7, 3, -1)]
#[case(7, -3, 1)]
#[case(-7, -3, -1)]
#[case(0, 5, 0)]
#[case(9, 3, 0)]
#[case(i32::MIN, -1, 0)]
#[case(i32::MIN, i32::MAX, -1)]
#[case(i32::MAX, i32::MIN, i32::MAX)]
fn mod_is_truncating_remainder(#[case] a: i32, #[case] b: i32, #[case] r: i32) {
    assert_eq!(modulo(a, b), Ok(r));
}

#[rstest]
#[case(0)]
#[case(i32::MIN)]
#[case(-1)]
fn mod_by_zero_traps(#[case] a: i32) {
    for _ in 0..3 {
        assert_eq!(modulo(a, 0), Err(Trap::DivisionByZero));
    }
}

#[rstest]
#[case(5, 2, 3)]
#[case(5, 5, 0)]
#[case(2, 5, -3)]
#[case(i32::MIN, 1, i32::MAX)]
#[case(i32::MAX, -1, i32::MIN)]
#[case(0, i32::MIN, i32::MIN)]
fn ninst_wraps(#[case] a: i32, #[case] b: i32, #[case] r: i32) {
    assert_eq!(ninst(a, b), r);
}

#[test]
fn fdist_of_pythagorean_triple_is_exact() {
    let (r, flags) = fdist(Vector3::new(3.0, 4.0, 12.0), Vector3::default());
    assert_eq!(r, 13.0);
    assert!(flags.is_empty());
}

#[test]
fn fdist_is_symmetric() {
    let u = Vector3::new(3.3, 1.1, 2.2);
    let v = Vector3::new(1.1, 2.2, 3.3);
    assert_eq!(fdist(u, v).0.to_bits(), fdist(v, u).0.to_bits());
}

#[test]
fn fdist_of_equal_vectors_is_positive_zero() {
    let u = Vector3::new(-1.5, 0.25, 1e30);
    let (r, _) = fdist(u, u);
    assert_eq!(r.to_bits(), 0.0_f32.to_bits());
}

#[test]
fn fdist_suite_vectors_are_near_2_694() {
    let (r, flags) = fdist(Vector3::new(3.3, 1.1, 2.2), Vector3::new(1.1, 2.2, 3.3));
    assert!((r - 2.694_439).abs() < 1e-5);
    assert!(flags.is_empty());
}

#[test]
fn fdist_quiet_nan_propagates_without_flags() {
    let (r, flags) = fdist(Vector3::new(f32::NAN, 0.0, 0.0), Vector3::default());
    assert!(r.is_nan());
    assert!(flags.is_empty());
}

#[test]
fn fdist_signalling_nan_raises_invalid() {
    let snan = f32::from_bits(0x7F80_0001);
    let (r, flags) = fdist(Vector3::default(), Vector3::new(0.0, snan, 0.0));
    assert!(r.is_nan());
    assert_eq!(flags, FpFlags::NV);
}

#[test]
fn fdist_infinity_minus_infinity_is_invalid() {
    let u = Vector3::new(f32::INFINITY, 0.0, 0.0);
    let (r, flags) = fdist(u, u);
    assert!(r.is_nan());
    assert_eq!(flags, FpFlags::NV);
}

#[test]
fn fdist_single_infinite_lane_is_infinite_without_flags() {
    let (r, flags) = fdist(Vector3::new(f32::NEG_INFINITY, 1.0, 2.0), Vector3::default());
    assert_eq!(r, f32::INFINITY);
    assert!(flags.is_empty());
}

#[test]
fn fdist_overflow_from_finite_inputs() {
    let (r, flags) = fdist(
        Vector3::new(f32::MAX, 0.0, 0.0),
        Vector3::new(-f32::MAX, 0.0, 0.0),
    );
    assert_eq!(r, f32::INFINITY);
    assert_eq!(flags, FpFlags::OF);
}

#[test]
fn apply_dispatches_by_opcode() {
    assert_eq!(
        Xu::apply(Opcode::Mod, &[Operand::Int(33), Operand::Int(10)]),
        Ok(Value::Int(3))
    );
    assert_eq!(
        Xu::apply(Opcode::Ninst, &[Operand::Int(5), Operand::Int(2)]),
        Ok(Value::Int(3))
    );
    let lanes = [3.0, 4.0, 0.0, 0.0, 0.0, 0.0].map(Operand::Float);
    assert_eq!(Xu::apply(Opcode::Fdist, &lanes), Ok(Value::Float(5.0)));
}

#[rstest]
#[case::floats_to_mod(Opcode::Mod, vec![Operand::Float(1.0), Operand::Float(2.0)])]
#[case::ints_to_fdist(Opcode::Fdist, vec![Operand::Int(1); 6])]
#[case::short_fdist(Opcode::Fdist, vec![Operand::Float(1.0); 5])]
#[case::extra_int(Opcode::Ninst, vec![Operand::Int(1); 3])]
#[case::mixed(Opcode::Mod, vec![Operand::Int(1), Operand::Float(2.0)])]
fn apply_rejects_wrong_operand_class(#[case] op: Opcode, #[case] operands: Vec<Operand>) {
    assert_eq!(Xu::apply(op, &operands), Err(Trap::OperandClass));
}

#[rstest]
#[case::fdist_rs1_past_f29(Opcode::Fdist, 0, 31, 0)]
#[case::fdist_rs2_past_f29(Opcode::Fdist, 0, 0, 30)]
#[case::fdist_rd_past_f31(Opcode::Fdist, 32, 0, 3)]
#[case::mod_rs2_past_x31(Opcode::Mod, 1, 2, 32)]
#[case::ninst_rd_past_x31(Opcode::Ninst, 40, 2, 3)]
fn execute_rejects_out_of_range_fields(
    #[case] op: Opcode,
    #[case] rd: usize,
    #[case] rs1: usize,
    #[case] rs2: usize,
) {
    let raw = encode(op, rd, rs1, rs2);
    let inst = Decoded { raw, op, rd, rs1, rs2 };
    let mut regs = RegisterFile::new();
    regs.write_f32(0, 2.0);
    assert_eq!(
        Xu::execute(&inst, &mut regs),
        Err(Trap::IllegalInstruction(raw))
    );
    assert_eq!(regs.read_f32(0), 2.0);
    assert!(regs.fflags().is_empty());
}
