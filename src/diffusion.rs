//! The multi-round diffusion transform over a digit buffer.
//!
//! One forward round is rotate-left, substitute, rotate-left,
//! cascade-forward, rotate-left. The cascade is a running modular sum, so a
//! change in any digit propagates to every digit after it within one round;
//! the rotations keep changing which digit is "leftmost", spreading the
//! effect across the whole buffer. The round count is `len + base`, tying
//! the amount of mixing to both the message length and the alphabet size.
//!
//! Every step is individually invertible, so [`backward`] undoes [`forward`]
//! exactly by applying the inverse steps in reverse order. Neither function
//! can fail: they operate on already-validated digits of an
//! already-validated alphabet size.

use crate::permutation::Permutation;

/// Scrambles a digit buffer in place.
pub fn forward(buf: &mut [u8], permutation: &Permutation, base: usize) {
    if buf.is_empty() {
        return;
    }
    for _ in 0..buf.len() + base {
        buf.rotate_left(1);
        for digit in buf.iter_mut() {
            *digit = permutation.forward(*digit);
        }
        buf.rotate_left(1);
        cascade_forward(buf, base);
        buf.rotate_left(1);
    }
}

/// Unscrambles a digit buffer in place, undoing [`forward`].
pub fn backward(buf: &mut [u8], permutation: &Permutation, base: usize) {
    if buf.is_empty() {
        return;
    }
    for _ in 0..buf.len() + base {
        buf.rotate_right(1);
        cascade_backward(buf, base);
        buf.rotate_right(1);
        for digit in buf.iter_mut() {
            *digit = permutation.backward(*digit);
        }
        buf.rotate_right(1);
    }
}

// Sums in u16: digit + carry can reach 2 * 255.
fn cascade_forward(buf: &mut [u8], base: usize) {
    let base = base as u16;
    let mut carry = 0u16;
    for digit in buf.iter_mut() {
        let mixed = (*digit as u16 + carry) % base;
        *digit = mixed as u8;
        carry = mixed;
    }
}

fn cascade_backward(buf: &mut [u8], base: usize) {
    let base = base as u16;
    let mut carry = 0u16;
    for digit in buf.iter_mut() {
        let mixed = *digit as u16;
        *digit = ((mixed + base - carry) % base) as u8;
        carry = mixed;
    }
}
