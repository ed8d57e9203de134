//! Fork-join thread team
//!
//! A team of exactly `size` workers. Each parallel region runs once on every
//! member; member `i` gets the `i`-th contiguous slice of the node range
//! (static schedule) and the region returns only after all members finish.

use std::ops::Range;

use rayon::{ThreadPool, ThreadPoolBuilder};

use super::error::{EngineError, EngineResult};

/// Fixed-size team used for the neighbor scans of one engine invocation.
#[derive(Debug)]
pub struct ThreadTeam {
    pool: ThreadPool,
    size: usize,
}

impl ThreadTeam {
    /// Start a team of `size` worker threads.
    pub fn new(size: usize) -> EngineResult<Self> {
        if size == 0 {
            return Err(EngineError::InvalidThreadCount);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(size)
            .thread_name(|i| format!("pargraph-team-{}", i))
            .build()?;
        Ok(Self { pool, size })
    }

    /// Number of members.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Run `region` once per member over its static slice of `0..len`, then
    /// join. Members whose slice is empty still run (with an empty range).
    pub fn for_each_slice<F>(
        &self,
        len: usize,
        region: F,
    ) where
        F: Fn(Range<usize>) + Sync,
    {
        self.pool.broadcast(|ctx| {
            region(static_slice(len, ctx.index(), ctx.num_threads()));
        });
    }
}

/// The slice of `0..len` owned by `member` out of `members`.
///
/// The first `len % members` members get one extra element, so slice sizes
/// differ by at most one and the slices tile `0..len` in member order.
pub fn static_slice(
    len: usize,
    member: usize,
    members: usize,
) -> Range<usize> {
    let base = len / members;
    let extra = len % members;
    let start = member * base + member.min(extra);
    let size = base + usize::from(member < extra);
    start..start + size
}
