pub mod sqrt;
pub mod verdict;

use sqrt::isqrt;

/// Trial division by every integer in `2..=isqrt(n)`.
///
/// Total over `i64`: anything below 2 is not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n.unsigned_abs();
    let limit = isqrt(n);
    (2..=limit).all(|divisor| n % divisor != 0)
}
