//! The single shift-in-place primitive every dynamic container builds on
//! (spec §4.6): open or close a gap of `delta` slots at `index` within a
//! buffer whose logical length is `size`, growing the backing storage
//! geometrically when a positive `delta` needs more room than is allocated.
//!
//! `delta < 0` never shrinks the buffer — it only moves the tail left and
//! leaves the vacated slots (now stale) past the new logical size, exactly
//! as spec.md's §9 "Open questions" resolves the two-signatures ambiguity
//! in the source.

/// Shifts `buf[index..size)` by `delta` positions in place.
///
/// - `delta > 0` opens a gap of `delta` slots at `index`: elements move from
///   `[index, size)` to `[index + delta, size + delta)`, growing `buf` first
///   if its current length can't hold the new size (growth target is
///   `max(1.5 * current_len, new_size)`).
/// - `delta < 0` closes a gap of `-delta` slots at `index`: elements move
///   from `[index - delta, size)` to `[index, size + delta)`; `buf`'s length
///   is left unchanged (no shrink).
/// - `delta == 0` is a no-op.
///
/// Returns the new logical size, `(size as isize + delta) as usize`.
///
/// # Panics
///
/// Panics if `index > size`, or if a negative `delta` would move more
/// elements than exist in `[index, size)`.
pub fn resize<T: Default>(buf: &mut Vec<T>, size: usize, index: usize, delta: isize) -> usize {
    assert!(index <= size, "resize: index {index} out of bounds for size {size}");

    match delta.cmp(&0) {
        std::cmp::Ordering::Equal => size,
        std::cmp::Ordering::Greater => {
            let delta = delta as usize;
            let new_size = size + delta;
            if buf.len() < new_size {
                let grown = (buf.len() + buf.len() / 2).max(new_size);
                log::trace!("resize: growing buffer from {} to {grown} words", buf.len());
                buf.resize_with(grown, T::default);
            }
            buf[index..new_size].rotate_right(delta);
            new_size
        }
        std::cmp::Ordering::Less => {
            let gap = (-delta) as usize;
            assert!(
                gap <= size - index,
                "resize: delta {delta} removes more than the {} elements available at index {index}",
                size - index
            );
            buf[index..size].rotate_left(gap);
            size - gap
        }
    }
}

/// Copies `len` elements starting at `src_index` from `src` into a freshly
/// allocated, exactly-sized buffer. Used by "view" operations (`sub_list`,
/// clone-of-a-range) that need an owned copy rather than an in-place shift
/// (spec §5: "the library does not expose aliasing views").
pub fn copy_into_new<T: Clone>(src: &[T], src_index: usize, len: usize) -> Vec<T> {
    src[src_index..src_index + len].to_vec()
}
