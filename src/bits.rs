//! Fixed-width 32-bit bitwise helpers.
//!
//! Pure functions, no state. These are exactly the primitives the SHA-1 compression
//! function is built from ([RFC 3174 §5](https://datatracker.ietf.org/doc/html/rfc3174#section-5)),
//! split out so they can be tested bit-for-bit on their own: a deviation here changes
//! the digest downstream with no other observable symptom.
//!
//! All arithmetic is modulo 2^32.

/// Circular left rotation of `x` by `n` bits.
///
/// Callers only ever rotate by amounts in `1..32`; `n = 0` and `n = 32` are identity
/// rotations and remain well-defined.
#[inline]
pub fn rotate_left(x: u32, n: u32) -> u32 {
    x.rotate_left(n)
}

/// Left-folded bitwise AND over one or more operands.
///
/// # Panics
/// Panics if `ops` is empty; a fold over zero operands has no identity the callers
/// would ever want.
#[inline]
pub fn and_all(ops: &[u32]) -> u32 {
    fold_ops(ops, |acc, x| acc & x)
}

/// Left-folded bitwise OR over one or more operands.
///
/// # Panics
/// Panics if `ops` is empty.
#[inline]
pub fn or_all(ops: &[u32]) -> u32 {
    fold_ops(ops, |acc, x| acc | x)
}

/// Left-folded bitwise XOR over one or more operands.
///
/// # Panics
/// Panics if `ops` is empty.
#[inline]
pub fn xor_all(ops: &[u32]) -> u32 {
    fold_ops(ops, |acc, x| acc ^ x)
}

/// Bitwise "if `a` then `b` else `c`", decided per bit.
///
/// This is the `Ch` round function of SHA-1 rounds 0-19, in the form
/// `c ^ (a & (b ^ c))` which saves one operation over the textbook
/// `(a & b) | (!a & c)`.
#[inline]
pub fn choose(a: u32, b: u32, c: u32) -> u32 {
    c ^ (a & (b ^ c))
}

/// Bitwise majority vote of three words, decided per bit.
///
/// This is the `Maj` round function of SHA-1 rounds 40-59:
/// `(a & (b | c)) | (b & c)`.
#[inline]
pub fn majority(a: u32, b: u32, c: u32) -> u32 {
    (a & (b | c)) | (b & c)
}

fn fold_ops(ops: &[u32], f: impl Fn(u32, u32) -> u32) -> u32 {
    let (first, rest) = ops.split_first().expect("at least one operand");
    rest.iter().fold(*first, |acc, &x| f(acc, x))
}
