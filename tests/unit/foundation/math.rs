use super::*;

#[test]
fn fnv_split_writes_match_single_write() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"promoreel");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"promo");
    b.write_bytes(b"reel");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_empty_input_is_offset_basis() {
    assert_eq!(Fnv1a64::new_default().finish(), 0xcbf2_9ce4_8422_2325);
}

#[test]
fn mix64_spreads_adjacent_inputs() {
    assert_ne!(mix64(1), mix64(2));
    assert_eq!(mix64(42), mix64(42));
    assert_eq!(mix64(0), 0);
}
