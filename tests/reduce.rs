use scalar25519::{L, NEG_ONE, ONE, Scalar, ZERO};

use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use sha2::{Digest, Sha512};

fn order() -> BigUint {
    let delta = BigUint::parse_bytes(b"27742317777372353535851937790883648493", 10).unwrap();
    (BigUint::from(1u8) << 252u32) + delta
}

fn to_scalar_bytes(value: &BigUint) -> [u8; 32] {
    let le = value.to_bytes_le();
    assert!(le.len() <= 32);

    let mut out = [0u8; 32];
    out[..le.len()].copy_from_slice(&le);
    out
}

fn expect_reduce_eq(wide: &[u8; 64]) {
    let expected = BigUint::from_bytes_le(wide) % order();
    let got = Scalar::reduce_wide(wide);

    assert_eq!(
        got.to_bytes(),
        to_scalar_bytes(&expected),
        "reduction mismatch for input {}",
        hex::encode(wide)
    );
    assert!(got.is_canonical());
}

#[test]
fn order_constant_matches_decimal_definition() {
    assert_eq!(L.to_bytes(), to_scalar_bytes(&order()));
    assert_eq!(NEG_ONE.to_bytes(), to_scalar_bytes(&(order() - 1u8)));
}

#[test]
fn reduce_wide_edge_values() {
    expect_reduce_eq(&[0u8; 64]);
    expect_reduce_eq(&[0xffu8; 64]);

    let mut l = [0u8; 64];
    l[..32].copy_from_slice(&L.to_bytes());
    expect_reduce_eq(&l);
    assert_eq!(Scalar::reduce_wide(&l), ZERO);

    let mut l_minus_one = [0u8; 64];
    l_minus_one[..32].copy_from_slice(&NEG_ONE.to_bytes());
    expect_reduce_eq(&l_minus_one);
    assert_eq!(Scalar::reduce_wide(&l_minus_one), NEG_ONE);

    let two_l = to_scalar_bytes(&(order() * 2u8));
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(&two_l);
    expect_reduce_eq(&wide);

    let mut top_bit = [0u8; 64];
    top_bit[63] = 0x80;
    expect_reduce_eq(&top_bit);

    for byte in 0..64 {
        let mut single = [0u8; 64];
        single[byte] = 1;
        expect_reduce_eq(&single);
    }
}

#[test]
fn reduce_wide_matches_big_integer_oracle() {
    let mut rng = StdRng::seed_from_u64(0x5ca1a);

    for _ in 0..256 {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        expect_reduce_eq(&wide);
    }
}

#[test]
fn reduce_wide_of_sha512_digests() {
    let messages: [&[u8]; 3] = [b"", b"abc", b"scalar reduction"];

    for msg in messages {
        let mut digest = [0u8; 64];
        digest.copy_from_slice(&Sha512::digest(msg));

        expect_reduce_eq(&digest);
        assert_eq!(Scalar::reduce_wide_slice(&digest), Scalar::reduce_wide(&digest));
    }
}

#[test]
#[should_panic]
fn reduce_wide_slice_rejects_wrong_width() {
    Scalar::reduce_wide_slice(&[0u8; 32]);
}

#[test]
fn from_bytes_mod_order_matches_oracle() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..64 {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);

        let expected = BigUint::from_bytes_le(&bytes) % order();
        assert_eq!(
            Scalar::from_bytes_mod_order(bytes).to_bytes(),
            to_scalar_bytes(&expected)
        );
    }
}

#[test]
fn mul_add_matches_big_integer_oracle() {
    let mut rng = StdRng::seed_from_u64(0xabc);
    let l = order();

    // Operands are full 256-bit values, most of them above the order.
    for _ in 0..128 {
        let mut raw = [[0u8; 32]; 3];
        for r in raw.iter_mut() {
            rng.fill_bytes(r);
        }

        let [a, b, c] = raw.map(|r| BigUint::from_bytes_le(&r));
        let expected = (a * b + c) % &l;

        let got = Scalar::mul_add(
            &Scalar::from_bytes(raw[0]),
            &Scalar::from_bytes(raw[1]),
            &Scalar::from_bytes(raw[2]),
        );

        assert_eq!(got.to_bytes(), to_scalar_bytes(&expected));
    }
}

#[test]
fn mul_add_extreme_operands() {
    let l = order();
    let max = BigUint::from_bytes_le(&[0xff; 32]);
    let expected = (&max * &max + &max) % &l;

    let big = Scalar::from_bytes([0xff; 32]);
    assert_eq!(
        Scalar::mul_add(&big, &big, &big).to_bytes(),
        to_scalar_bytes(&expected)
    );

    let expected = (&l - 1u8) * (&l - 1u8) % &l;
    assert_eq!(
        Scalar::mul_add(&NEG_ONE, &NEG_ONE, &ZERO).to_bytes(),
        to_scalar_bytes(&expected)
    );
    assert_eq!(Scalar::mul_add(&NEG_ONE, &ONE, &ONE), ZERO);
}
