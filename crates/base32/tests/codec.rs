//! Tests for the `Base32` codec instance and its per-call overrides.

use b32_codec::{Base32, Base32Error, Base32Options, ALPHABET_HEX, BASE32, BASE32_HEX};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn statics_roundtrip() {
    for _ in 0..100 {
        let blob = generate_blob();
        assert_eq!(BASE32.decode(&BASE32.encode(&blob)).unwrap(), blob);
        assert_eq!(BASE32_HEX.decode(&BASE32_HEX.encode(&blob)).unwrap(), blob);
    }
}

#[test]
fn construction_validates_eagerly() {
    let options = Base32Options::new().with_alphabet("ABCDEFGHIJKLMNOPQRSTUVWXYZ23456");
    assert_eq!(
        Base32::new(&options).unwrap_err(),
        Base32Error::InvalidAlphabetLength {
            expected: 32,
            actual: 31
        }
    );

    let options = Base32Options::new().with_pad_char("M");
    assert_eq!(
        Base32::new(&options).unwrap_err(),
        Base32Error::AlphabetContainsPadChar('M')
    );
}

#[test]
fn per_call_override_roundtrips() {
    let codec = Base32::default();
    let hex = Base32Options::new().with_alphabet(ALPHABET_HEX);

    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = codec.encode_with(&blob, &hex).unwrap();
        assert_eq!(codec.decode_with(&encoded, &hex).unwrap(), blob);
    }
}

#[test]
fn override_is_independent_of_the_instance() {
    let codec = Base32::new(&Base32Options::new()).unwrap();
    let unpadded = Base32Options::new().with_pad_char("");

    assert_eq!(codec.encode_with(b"f", &unpadded).unwrap(), "MY");
    // The override applies to that call only.
    assert_eq!(codec.encode(b"f"), "MY======");
    assert_eq!(codec.decode("MY======").unwrap(), b"f");
}

#[test]
fn shared_between_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                for _ in 0..25 {
                    let blob = generate_blob();
                    assert_eq!(BASE32.decode(&BASE32.encode(&blob)).unwrap(), blob);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
