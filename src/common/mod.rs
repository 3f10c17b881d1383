pub mod ids;

/// Size in bytes of a virtual page, a physical frame and a disk block.
pub const PAGE_SIZE: usize = 4096;

/// `len` copies of `value`, or `None` when the allocator refuses.
pub fn try_filled<T: Clone>(len: usize, value: T) -> Option<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).ok()?;
    buf.resize(len, value);
    Some(buf)
}
