//! Range-quantified encoding laws.

use ledgerwire_wire::{Marshaller, TC_BLOCKDATA, TC_BLOCKDATA_LONG};
use num_bigint::BigInt;
use proptest::prelude::*;

fn payload(marshaller: Marshaller) -> Vec<u8> {
    let framed = marshaller.finish();
    let body_start = if framed[4] == TC_BLOCKDATA { 6 } else { 9 };
    framed[body_start..].to_vec()
}

proptest! {
    /// Every integer in 0..=251 costs exactly one biased byte.
    #[test]
    fn big_integer_small_values_cost_one_byte(v in 0u8..=251) {
        let mut m = Marshaller::new();
        m.write_big_integer(&BigInt::from(v));
        prop_assert_eq!(payload(m), vec![4 + v]);
    }

    /// Integers beyond 16 bits but within 32 cost tag + 4 bytes.
    #[test]
    fn big_integer_int_tier_costs_five_bytes(
        v in prop_oneof![
            (i16::MAX as i32 + 1)..=i32::MAX,
            i32::MIN..(i16::MIN as i32),
        ]
    ) {
        let mut m = Marshaller::new();
        m.write_big_integer(&BigInt::from(v));
        let bytes = payload(m);
        prop_assert_eq!(bytes.len(), 5);
        prop_assert_eq!(bytes[0], 0x01);
        prop_assert_eq!(&bytes[1..], v.to_be_bytes());
    }

    /// A repeated shared string costs two bytes, whatever its length.
    #[test]
    fn shared_string_repeat_costs_two_bytes(s in ".{0,64}") {
        let mut m = Marshaller::new();
        m.write_string_shared(&s).unwrap();
        let after_first = m.payload_len();
        m.write_string_shared(&s).unwrap();
        prop_assert_eq!(m.payload_len(), after_first + 2);
    }

    /// Framed length is stream header + block header + payload.
    #[test]
    fn framed_length_law(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let mut m = Marshaller::new();
        m.write_buffer(&bytes);
        let framed = m.finish();

        let header_size = if bytes.len() <= 255 { 2 } else { 5 };
        prop_assert_eq!(framed.len(), 4 + header_size + bytes.len());
        prop_assert_eq!(
            framed[4],
            if bytes.len() <= 255 { TC_BLOCKDATA } else { TC_BLOCKDATA_LONG }
        );
    }
}
