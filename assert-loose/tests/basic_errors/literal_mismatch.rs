use assert_loose::assert_loose;

pub fn test_case() {
    assert_loose!(16_777_216, 33_554_432);
}
