use assert_loose::assert_loose;

pub fn test_case() {
    let expect = 42;
    let actual = 41;

    assert_loose!(expect, actual);
}
