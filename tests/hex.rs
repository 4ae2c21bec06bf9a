use scalar25519::{L, ONE, Scalar, ScalarError, ZERO};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

#[test]
fn to_hex_is_lowercase_little_endian() {
    assert_eq!(ZERO.to_hex(), "0".repeat(64));
    assert_eq!(ONE.to_hex(), format!("01{}", "0".repeat(62)));
    assert_eq!(
        L.to_hex(),
        "edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010"
    );
}

#[test]
fn formatting_traits_agree() {
    let s = Scalar::from_u64(0xdead_beef);

    assert_eq!(format!("{s}"), s.to_hex());
    assert_eq!(format!("{s:x}"), s.to_hex());
    assert_eq!(format!("{s:?}"), format!("Scalar({})", s.to_hex()));
}

#[test]
fn hex_round_trip() {
    let mut rng = StdRng::seed_from_u64(21);

    for _ in 0..32 {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);

        let s = Scalar::from_bytes(bytes);
        let parsed = Scalar::from_hex(&s.to_hex()).unwrap();
        assert_eq!(parsed.to_bytes(), bytes);

        let parsed: Scalar = s.to_hex().parse().unwrap();
        assert_eq!(parsed, s);
    }
}

#[test]
fn from_hex_accepts_uppercase() {
    let upper = L.to_hex().to_uppercase();
    assert_eq!(Scalar::from_hex(&upper).unwrap(), L);
}

#[test]
fn from_hex_rejects_bad_input() {
    assert!(matches!(
        Scalar::from_hex("00"),
        Err(ScalarError::InvalidHex(_))
    ));
    assert!(matches!(
        Scalar::from_hex(&"zz".repeat(32)),
        Err(ScalarError::InvalidHex(_))
    ));
    assert!(matches!(
        Scalar::from_hex(&"00".repeat(33)),
        Err(ScalarError::InvalidHex(_))
    ));
}

#[test]
fn length_error_reports_widths() {
    let err = Scalar::try_from(&[0u8; 16][..]).unwrap_err();

    assert!(matches!(
        err,
        ScalarError::InvalidLength {
            expected: 32,
            actual: 16
        }
    ));
    assert_eq!(
        err.to_string(),
        "scalar input has length 16, expected 32 bytes"
    );
}
