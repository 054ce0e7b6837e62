use assert_loose::assert_loose;

pub fn test_case() {
    let expected = 60;
    let timeout = 30;

    assert_loose!(expected, timeout);
}
