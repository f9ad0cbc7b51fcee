//! Chunk planning: splitting `[0, n)` into contiguous per-worker ranges.

use crate::error::Error;

/// Half-open index range `[start, end)` into both input vectors,
/// assigned to exactly one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    /// Number of elements covered by this chunk.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Split `[0, n)` into `workers` contiguous chunks.
///
/// Every chunk except the last holds `n / workers` elements; the last
/// chunk ends exactly at `n`, absorbing the remainder when `n` is not a
/// multiple of `workers`. Fails with [`Error::InvalidLength`] when the
/// plan would hand any worker an empty chunk.
pub fn plan_chunks(n: usize, workers: usize) -> Result<Vec<Chunk>, Error> {
    if workers == 0 || n < workers {
        return Err(Error::InvalidLength { len: n, workers });
    }

    let base = n / workers;
    let chunks = (0..workers)
        .map(|i| Chunk {
            start: i * base,
            end: if i == workers - 1 { n } else { (i + 1) * base },
        })
        .collect();

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let chunks = plan_chunks(9, 3).unwrap();
        assert_eq!(
            chunks,
            vec![
                Chunk { start: 0, end: 3 },
                Chunk { start: 3, end: 6 },
                Chunk { start: 6, end: 9 },
            ]
        );
    }

    #[test]
    fn test_last_chunk_absorbs_remainder() {
        let chunks = plan_chunks(10, 3).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2], Chunk { start: 6, end: 10 });
        assert_eq!(chunks[2].len(), 4);
    }

    #[test]
    fn test_one_element_per_worker() {
        let chunks = plan_chunks(3, 3).unwrap();
        assert!(chunks.iter().all(|c| c.len() == 1));
        assert_eq!(chunks[2].end, 3);
    }

    #[test]
    fn test_rejects_short_vector() {
        assert_eq!(
            plan_chunks(2, 3),
            Err(Error::InvalidLength { len: 2, workers: 3 })
        );
    }

    #[test]
    fn test_rejects_zero_workers() {
        assert_eq!(
            plan_chunks(5, 0),
            Err(Error::InvalidLength { len: 5, workers: 0 })
        );
    }

    #[test]
    fn test_chunks_cover_range_without_gaps() {
        for n in 3..64 {
            let chunks = plan_chunks(n, 3).unwrap();
            assert_eq!(chunks[0].start, 0, "n = {}", n);
            for pair in chunks.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "n = {}", n);
            }
            assert_eq!(chunks.last().unwrap().end, n, "n = {}", n);
            assert!(chunks.iter().all(|c| !c.is_empty()), "n = {}", n);
        }
    }
}
