//! Property tests for the replacement policies.

use std::collections::VecDeque;

use pagesim::replacer::{ClockReplacer, FifoReplacer, LruReplacer, ReplacementPolicy};
use pagesim::{Error, FrameId, PageTableEntry};
use proptest::prelude::*;

fn table(frames: usize) -> Vec<PageTableEntry> {
    (0..frames).map(|i| PageTableEntry::new(FrameId::new(i))).collect()
}

#[derive(Debug, Clone)]
enum Op {
    Ref(usize),
    Evict,
}

/// Frame count plus a sequence of operations on frames below it.
fn ops_strategy() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (1usize..12).prop_flat_map(|frames| {
        let op = prop_oneof![
            3 => (0..frames).prop_map(Op::Ref),
            1 => Just(Op::Evict),
        ];
        (Just(frames), prop::collection::vec(op, 0..120))
    })
}

proptest! {
    /// The k-th eviction returns frame (k-1) mod M whatever is referenced.
    #[test]
    fn fifo_evicts_in_cyclic_order((frames, ops) in ops_strategy()) {
        let mut entries = table(frames);
        let mut fifo = FifoReplacer::new(frames);
        let mut evictions = 0usize;

        for op in ops {
            match op {
                Op::Ref(f) => fifo.record_access(&mut entries[f]),
                Op::Evict => {
                    let victim = fifo.evict(&mut entries).unwrap();
                    prop_assert_eq!(victim, FrameId::new(evictions % frames));
                    evictions += 1;
                }
            }
        }
    }

    /// One sweep clears exactly the bits it passes over and stops at the
    /// first clear bit.
    #[test]
    fn clock_clears_visited_bits(
        (frames, start, bits) in (1usize..12).prop_flat_map(|m| {
            (Just(m), 0..m, prop::collection::vec(any::<bool>(), m))
        })
    ) {
        let mut entries = table(frames);
        let mut clock = ClockReplacer::new(frames);

        // Walk the hand to `start` with every bit clear
        for _ in 0..start {
            clock.evict(&mut entries).unwrap();
        }
        prop_assert_eq!(clock.hand(), FrameId::new(start));

        for (f, &set) in bits.iter().enumerate() {
            if set {
                clock.record_access(&mut entries[f]);
            }
        }

        let expected = (0..frames)
            .map(|i| (start + i) % frames)
            .find(|&f| !bits[f])
            .unwrap_or(start);
        let victim = clock.evict(&mut entries).unwrap();

        prop_assert_eq!(victim, FrameId::new(expected));
        prop_assert_eq!(clock.hand(), victim.next(frames));

        if bits.iter().all(|&b| b) {
            prop_assert!(entries.iter().all(|e| !e.is_referenced()));
        } else {
            let visited: Vec<usize> = (0..frames)
                .map(|i| (start + i) % frames)
                .take_while(|&f| f != expected)
                .collect();
            for f in 0..frames {
                let want = bits[f] && !visited.contains(&f);
                prop_assert_eq!(entries[f].is_referenced(), want, "frame {}", f);
            }
        }
    }

    /// LRU agrees with a naive move-to-back queue.
    #[test]
    fn lru_matches_reference_model((frames, ops) in ops_strategy()) {
        let mut entries = table(frames);
        let mut lru = LruReplacer::new(frames).unwrap();
        let mut model: VecDeque<usize> = VecDeque::new();

        for op in ops {
            match op {
                Op::Ref(f) => {
                    lru.record_access(&mut entries[f]);
                    model.retain(|&x| x != f);
                    model.push_back(f);
                }
                Op::Evict => match model.pop_front() {
                    Some(expected) => {
                        prop_assert_eq!(lru.evict(&mut entries).unwrap(), FrameId::new(expected));
                    }
                    None => {
                        prop_assert!(matches!(lru.evict(&mut entries), Err(Error::NoTrackedFrames)));
                    }
                },
            }

            let order: Vec<usize> = lru.iter().map(|f| f.0).collect();
            prop_assert_eq!(order, model.iter().copied().collect::<Vec<_>>());
        }
    }

    /// Referencing the same frame twice in a row leaves the order as it was
    /// after the first reference.
    #[test]
    fn lru_rereference_is_idempotent(
        (frames, refs, last) in (1usize..12).prop_flat_map(|m| {
            (Just(m), prop::collection::vec(0..m, 0..40), 0..m)
        })
    ) {
        let mut entries = table(frames);
        let mut lru = LruReplacer::new(frames).unwrap();

        for f in refs {
            lru.record_access(&mut entries[f]);
        }

        lru.record_access(&mut entries[last]);
        let once: Vec<FrameId> = lru.iter().collect();
        lru.record_access(&mut entries[last]);
        let twice: Vec<FrameId> = lru.iter().collect();

        prop_assert_eq!(once, twice);
    }
}
