use core::hash::Hasher as _;

use fnvhash::{FastHash, Fnv64, mul::{Direct, ShiftAdd}, order::Fnv1a};
use proptest::prelude::*;

fn fnv_crate_ref(key: u64, data: &[u8]) -> u64 {
  let mut h = fnv::FnvHasher::with_key(key);
  h.write(data);
  h.finish()
}

#[test]
fn default_key_is_the_offset_basis() {
  assert_eq!(fnv_crate_ref(fnvhash::FNV64_OFFSET_BASIS, b""), fnv::FnvHasher::default().finish());
}

proptest! {
  #[test]
  fn fnv1a64_matches_fnv_crate(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let expected = fnv_crate_ref(fnvhash::FNV64_OFFSET_BASIS, &data);
    prop_assert_eq!(<Fnv64<Fnv1a, Direct>>::hash(&data), expected);
    prop_assert_eq!(<Fnv64<Fnv1a, ShiftAdd>>::hash(&data), expected);
  }

  #[test]
  fn fnv1a64_seeded_matches_fnv_crate(key in any::<u64>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(<Fnv64<Fnv1a, Direct>>::hash_with_seed(key, &data), fnv_crate_ref(key, &data));
  }
}
