//! Runs the smoke gate; the process exit code is the pass/fail signal.

use assert_loose::assert_loose;
use assert_loose::smoke::fib;

fn main() {
    assert_loose!(16_777_216, fib(25));
}
