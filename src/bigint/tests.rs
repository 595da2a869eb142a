use super::BigInt;
use proptest::prelude::*;
use std::cmp::Ordering;

fn bi(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn parse_and_display_roundtrip() {
    let v = bi("0xdeadbeef00112233");
    assert_eq!(v.to_string(), "0xdeadbeef00112233");

    let zero = BigInt::zero();
    assert_eq!(zero.to_string(), "0x00");

    let neg = bi("-0x0102");
    assert!(neg.is_negative());
    assert_eq!(neg.to_string(), "-0x0102");

    assert_eq!(bi("255"), bi("0xff"));
    assert_eq!(bi("-255"), bi("-0xff"));
}

#[test]
fn parse_rejects_garbage() {
    assert!(BigInt::from_hex("0x").is_err());
    assert!(BigInt::from_hex("0xzz").is_err());
    assert!(BigInt::from_decimal("12a").is_err());
    assert!(BigInt::from_decimal("").is_err());
}

#[test]
fn zero_is_canonical() {
    // Many roads to zero, one representation
    let a = bi("0x1234").sub(&bi("0x1234"));
    assert!(a.is_zero());
    assert!(!a.is_negative());
    assert_eq!(a.to_bytes_be(), vec![0u8]);

    let b = bi("-5").add(&bi("5"));
    assert!(b.is_zero());
    assert!(!b.is_negative());
}

#[test]
fn byte_serialization() {
    let v = BigInt::from_bytes_be(&[0x01, 0x02, 0x03, 0x04, 0x05]);
    assert_eq!(v.to_bytes_be(), vec![0x01, 0x02, 0x03, 0x04, 0x05]);
    assert_eq!(
        v.to_bytes_be_padded(8),
        vec![0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05]
    );
    // Leading zeros in the input do not survive canonicalization
    let w = BigInt::from_bytes_be(&[0x00, 0x00, 0x7f]);
    assert_eq!(w.to_bytes_be(), vec![0x7f]);
    // Truncation keeps the least-significant bytes
    assert_eq!(v.to_bytes_be_padded(2), vec![0x04, 0x05]);
}

#[test]
fn signed_addition_and_subtraction() {
    assert_eq!(bi("100").add(&bi("-30")), bi("70"));
    assert_eq!(bi("30").add(&bi("-100")), bi("-70"));
    assert_eq!(bi("-30").sub(&bi("70")), bi("-100"));
    assert_eq!(bi("-30").sub(&bi("-100")), bi("70"));
}

#[test]
fn multiplication_signs() {
    assert_eq!(bi("-3").mul(&bi("-4")), bi("12"));
    assert_eq!(bi("-3").mul(&bi("4")), bi("-12"));
    assert_eq!(bi("3").mul(&BigInt::zero()), BigInt::zero());
    assert!(!bi("-3").mul(&BigInt::zero()).is_negative());
}

#[test]
fn multi_limb_carry_propagation() {
    // (2^96 - 1)^2 = 2^192 - 2^97 + 1
    let a = bi("0xffffffffffffffffffffffff");
    let sq = a.mul(&a);
    assert_eq!(
        sq,
        bi("0xfffffffffffffffffffffffe000000000000000000000001")
    );
}

#[test]
fn shifts() {
    let v = bi("0x1");
    assert_eq!(v.shl_bits(128), bi("0x0100000000000000000000000000000000"));
    assert_eq!(v.shl_bits(128).shr_bits(128), v);
    assert_eq!(bi("0xff00").shr_bits(8), bi("0xff"));
    assert_eq!(bi("0x3").shl_bits(33), bi("0x600000000"));
    assert!(bi("0x3").shr_bits(64).is_zero());
}

#[test]
fn division_basics() {
    let (q, r) = bi("1000").div_rem(&bi("33")).unwrap();
    assert_eq!(q, bi("30"));
    assert_eq!(r, bi("10"));

    let (q, r) = bi("7").div_rem(&bi("100")).unwrap();
    assert!(q.is_zero());
    assert_eq!(r, bi("7"));

    assert!(bi("7").div_rem(&BigInt::zero()).is_err());
}

#[test]
fn truncating_division_signs() {
    let (q, r) = bi("-7").div_rem(&bi("2")).unwrap();
    assert_eq!(q, bi("-3"));
    assert_eq!(r, bi("-1"));
    let (q, _) = bi("7").div_rem(&bi("-2")).unwrap();
    assert_eq!(q, bi("-3"));
}

#[test]
fn euclidean_reduction() {
    assert_eq!(bi("-1").rem_euclid(&bi("7")).unwrap(), bi("6"));
    assert_eq!(bi("-14").rem_euclid(&bi("7")).unwrap(), bi("0"));
    assert_eq!(bi("15").rem_euclid(&bi("7")).unwrap(), bi("1"));
    assert!(bi("15").rem_euclid(&bi("-7")).is_err());
    assert!(bi("15").rem_euclid(&BigInt::zero()).is_err());
}

#[test]
fn modular_inverse() {
    let m = bi("0xffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
    let a = bi("0x123456789abcdef123456789abcdef123456789abcdef");
    let inv = a.mod_inv(&m).unwrap();
    assert!(a.mod_mul(&inv, &m).unwrap().is_one());

    // gcd(6, 9) = 3: not invertible
    assert!(bi("6").mod_inv(&bi("9")).is_err());
    assert!(BigInt::zero().mod_inv(&bi("9")).is_err());
}

#[test]
fn ordering() {
    assert_eq!(bi("-5").cmp(&bi("3")), Ordering::Less);
    assert_eq!(bi("-5").cmp(&bi("-3")), Ordering::Less);
    assert_eq!(bi("5").cmp(&bi("3")), Ordering::Greater);
    assert_eq!(bi("5").cmp_mag(&bi("-7")), Ordering::Less);
}

#[test]
fn parity_queries() {
    assert!(BigInt::zero().is_even());
    assert!(bi("0x10").is_even());
    assert!(!bi("0x11").is_even());
    assert!(bi("1").is_one());
    assert!(!bi("-1").is_one());
}

prop_compose! {
    fn arb_bigint()(bytes in proptest::collection::vec(any::<u8>(), 0..40), neg in any::<bool>()) -> BigInt {
        let v = BigInt::from_bytes_be(&bytes);
        if neg { v.neg() } else { v }
    }
}

prop_compose! {
    fn arb_modulus()(bytes in proptest::collection::vec(any::<u8>(), 1..40)) -> BigInt {
        BigInt::from_bytes_be(&bytes).add(&BigInt::one())
    }
}

proptest! {
    #[test]
    fn add_sub_cancels(a in arb_bigint(), b in arb_bigint()) {
        prop_assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn addition_commutes(a in arb_bigint(), b in arb_bigint()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn multiplication_commutes(a in arb_bigint(), b in arb_bigint()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn mod_distributes_over_addition(a in arb_bigint(), b in arb_bigint(), m in arb_modulus()) {
        let lhs = a.add(&b).rem_euclid(&m).unwrap();
        let rhs = a.rem_euclid(&m).unwrap().add(&b.rem_euclid(&m).unwrap()).rem_euclid(&m).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn division_reconstructs(a in arb_bigint(), m in arb_modulus()) {
        let (q, r) = a.div_rem(&m).unwrap();
        prop_assert_eq!(q.mul(&m).add(&r), a.clone());
        prop_assert_eq!(r.cmp_mag(&m), Ordering::Less);
    }

    #[test]
    fn inverse_is_inverse(a in arb_bigint(), m in arb_modulus()) {
        if let Ok(inv) = a.mod_inv(&m) {
            prop_assert!(a.mod_mul(&inv, &m).unwrap().is_one());
        }
    }

    #[test]
    fn byte_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 1..60)) {
        let v = BigInt::from_bytes_be(&bytes);
        prop_assert_eq!(BigInt::from_bytes_be(&v.to_bytes_be()), v);
    }
}
