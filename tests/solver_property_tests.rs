//! Property tests for the decode pipeline invariants

use proptest::prelude::*;
use rust_ean::decoder::checksum::{check_digit, is_consistent};
use rust_ean::encoder::{RenderOptions, render_pixmap};
use rust_ean::signal::{Bit, threshold_row};
use rust_ean::decode_barcode;

proptest! {
    /// Encode then decode reproduces any 12-digit payload plus its check
    /// digit on a noiseless render.
    #[test]
    fn round_trip_any_payload(payload in prop::array::uniform12(0u8..10)) {
        let buf = render_pixmap(&payload, &RenderOptions::default());
        let digits = decode_barcode(&buf).unwrap();
        prop_assert_eq!(&digits[..12], &payload[..]);
        prop_assert_eq!(digits[12], check_digit(&payload));
    }

    /// Every solver success satisfies the weighted checksum, noise or not.
    #[test]
    fn decoded_digits_are_checksum_consistent(
        payload in prop::array::uniform12(0u8..10),
        seed in 1u64..64,
    ) {
        let opts = RenderOptions {
            luma_jitter: 10,
            edge_jitter: true,
            seed,
            ..Default::default()
        };
        let buf = render_pixmap(&payload, &opts);
        if let Ok(digits) = decode_barcode(&buf) {
            prop_assert!(is_consistent(&digits));
        }
    }

    /// Thresholding an already-binary row is idempotent.
    #[test]
    fn threshold_idempotent_on_binary_rows(pattern in prop::collection::vec(any::<bool>(), 0..256)) {
        let luma: Vec<u8> = pattern.iter().map(|&dark| if dark { 0 } else { 255 }).collect();
        let once = threshold_row(&luma);

        let back: Vec<u8> = once
            .iter()
            .map(|&b| if b == Bit::Zero { 0 } else { 255 })
            .collect();
        prop_assert_eq!(threshold_row(&back), once);
    }
}
