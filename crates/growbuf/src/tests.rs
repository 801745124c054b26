use super::{GrowBuf, ReserveError};

#[test]
fn test_new_buffer_is_empty_with_zero_capacity() {
    let buf: GrowBuf<u32> = GrowBuf::new();
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 0);
}

#[test]
fn test_capacity_doubles_from_one() {
    let mut buf = GrowBuf::new();
    let mut seen = Vec::new();

    for value in 0..9 {
        buf.try_push(value).unwrap();
        seen.push(buf.capacity());
    }

    // Capacity observed after each append: grows only when full.
    assert_eq!(seen, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(buf.len(), 9);
}

#[test]
fn test_appends_lose_nothing() {
    let mut buf = GrowBuf::new();
    for value in 0..1000 {
        buf.try_push(value).unwrap();
    }
    assert_eq!(buf.len(), 1000);
    let expected: Vec<i32> = (0..1000).collect();
    assert_eq!(buf.as_slice(), expected.as_slice());
}

#[test]
fn test_len_never_exceeds_capacity() {
    let mut buf = GrowBuf::new();
    for value in 0..100 {
        buf.try_push(value).unwrap();
        assert!(buf.len() <= buf.capacity());
    }
}

#[test]
fn test_failed_reservation_is_detectable() {
    // A reservation this large fails without allocating, standing in for a
    // real out-of-memory condition.
    let result = GrowBuf::<u64>::try_with_capacity(usize::MAX);
    assert!(matches!(result, Err(ReserveError::Alloc(_))));
}

#[test]
fn test_buffer_stays_usable_after_failed_sibling_reservation() {
    let mut buf = GrowBuf::new();
    buf.try_push("a").unwrap();
    buf.try_push("b").unwrap();

    assert!(GrowBuf::<u64>::try_with_capacity(usize::MAX).is_err());

    buf.try_push("c").unwrap();
    assert_eq!(buf.as_slice(), ["a", "b", "c"]);
    drop(buf);
}

#[test]
fn test_deref_exposes_slice_ops() {
    let mut buf = GrowBuf::new();
    for value in [3, 1, 2] {
        buf.try_push(value).unwrap();
    }
    buf.as_mut_slice().sort_unstable();
    assert_eq!(&buf[..], [1, 2, 3]);
    assert_eq!(buf.iter().sum::<i32>(), 6);
}

#[test]
fn test_into_vec_hands_over_contents() {
    let mut buf = GrowBuf::new();
    buf.try_push(String::from("x")).unwrap();
    buf.try_push(String::from("y")).unwrap();
    assert_eq!(buf.into_vec(), ["x", "y"]);
}

#[test]
fn test_error_display() {
    assert_eq!(
        ReserveError::CapacityOverflow.to_string(),
        "buffer capacity overflow"
    );
}
