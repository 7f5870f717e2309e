/// Largest `r` such that `r * r <= n`.
///
/// Starts from the floating-point estimate and corrects it with checked
/// integer arithmetic, so rounding in `f64::sqrt` can never shrink the bound.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .is_some_and(|square| square <= n)
    {
        root += 1;
    }
    root
}
