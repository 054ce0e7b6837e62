use assert_loose::assert_loose;

pub fn test_case() {
    assert_loose!(2.5, 2);
}
