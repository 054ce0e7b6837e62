use assert_loose::assert_loose;
use assert_loose::smoke::fib;

pub fn test_case() {
    assert_loose!(16_777_216, fib(24));
}
