//! Replacement policy tests.
//!
//! Each policy is driven through the `ReplacementPolicy` trait object the
//! host uses, over a plain table where frame `i` is owned by entry `i`.

use pagesim::replacer::{PolicyKind, ReplacementPolicy};
use pagesim::{Error, FrameId, PageTableEntry};

const FRAMES: usize = 3;

fn setup(kind: PolicyKind, frames: usize) -> (Box<dyn ReplacementPolicy>, Vec<PageTableEntry>) {
    let policy = kind.build(frames).unwrap();
    let table = (0..frames).map(|i| PageTableEntry::new(FrameId::new(i))).collect();
    (policy, table)
}

fn evict(policy: &mut dyn ReplacementPolicy, table: &mut Vec<PageTableEntry>) -> usize {
    policy.evict(table).unwrap().0
}

// ============================================================================
// LRU
// ============================================================================

#[test]
fn test_lru_scenario() {
    let (mut lru, mut table) = setup(PolicyKind::Lru, FRAMES);

    lru.record_access(&mut table[0]);
    lru.record_access(&mut table[1]);
    lru.record_access(&mut table[2]);
    assert_eq!(evict(lru.as_mut(), &mut table), 0);

    lru.record_access(&mut table[1]);
    assert_eq!(evict(lru.as_mut(), &mut table), 2);
    assert_eq!(evict(lru.as_mut(), &mut table), 1);

    assert!(matches!(lru.evict(&mut table), Err(Error::NoTrackedFrames)));
}

#[test]
fn test_lru_evict_without_references_fails() {
    let (mut lru, mut table) = setup(PolicyKind::Lru, FRAMES);
    assert!(matches!(lru.evict(&mut table), Err(Error::NoTrackedFrames)));
}

#[test]
fn test_lru_repeated_references() {
    let (mut lru, mut table) = setup(PolicyKind::Lru, 4);

    for f in [0, 1, 2, 3, 1, 0, 1, 3] {
        lru.record_access(&mut table[f]);
    }

    // Last uses: 2 @2, 0 @5, 1 @6, 3 @7
    assert_eq!(evict(lru.as_mut(), &mut table), 2);
    assert_eq!(evict(lru.as_mut(), &mut table), 0);
    assert_eq!(evict(lru.as_mut(), &mut table), 1);
    assert_eq!(evict(lru.as_mut(), &mut table), 3);
}

#[test]
fn test_lru_reinit_after_use() {
    let (mut lru, mut table) = setup(PolicyKind::Lru, FRAMES);
    lru.record_access(&mut table[2]);

    lru.init(FRAMES).unwrap();
    assert!(lru.evict(&mut table).is_err());
}

// ============================================================================
// FIFO
// ============================================================================

#[test]
fn test_fifo_scenario() {
    let (mut fifo, mut table) = setup(PolicyKind::Fifo, FRAMES);

    assert_eq!(evict(fifo.as_mut(), &mut table), 0);
    assert_eq!(evict(fifo.as_mut(), &mut table), 1);
    assert_eq!(evict(fifo.as_mut(), &mut table), 2);
    assert_eq!(evict(fifo.as_mut(), &mut table), 0);
}

#[test]
fn test_fifo_ignores_references() {
    let (mut fifo, mut table) = setup(PolicyKind::Fifo, FRAMES);

    fifo.record_access(&mut table[0]);
    assert_eq!(evict(fifo.as_mut(), &mut table), 0);

    fifo.record_access(&mut table[2]);
    fifo.record_access(&mut table[1]);
    assert_eq!(evict(fifo.as_mut(), &mut table), 1);
    assert_eq!(evict(fifo.as_mut(), &mut table), 2);
}

// ============================================================================
// CLOCK
// ============================================================================

#[test]
fn test_clock_scenario() {
    let (mut clock, mut table) = setup(PolicyKind::Clock, FRAMES);

    assert_eq!(evict(clock.as_mut(), &mut table), 0);

    clock.record_access(&mut table[1]);
    assert!(table[1].is_referenced());

    assert_eq!(evict(clock.as_mut(), &mut table), 2);
    assert!(!table[1].is_referenced());

    // Hand wrapped to 0, which is unreferenced
    assert_eq!(evict(clock.as_mut(), &mut table), 0);
}

#[test]
fn test_clock_reference_is_idempotent() {
    let (mut clock, mut table) = setup(PolicyKind::Clock, FRAMES);

    clock.record_access(&mut table[0]);
    clock.record_access(&mut table[0]);
    assert!(table[0].is_referenced());

    // One clear is enough to lose the second chance
    assert_eq!(evict(clock.as_mut(), &mut table), 1);
    assert!(!table[0].is_referenced());
}

#[test]
fn test_clock_every_frame_referenced() {
    let (mut clock, mut table) = setup(PolicyKind::Clock, FRAMES);

    for entry in table.iter_mut() {
        clock.record_access(entry);
    }

    assert_eq!(evict(clock.as_mut(), &mut table), 0);
    assert!(table.iter().all(|e| !e.is_referenced()));
    assert_eq!(evict(clock.as_mut(), &mut table), 1);
}

// ============================================================================
// All policies
// ============================================================================

#[test]
fn test_victims_are_in_range() {
    for kind in PolicyKind::ALL {
        let (mut policy, mut table) = setup(kind, 5);

        for round in 0..20 {
            let f = (round * 7) % 5;
            policy.record_access(&mut table[f]);
            let victim = policy.evict(&mut table).unwrap();
            assert!(victim.0 < 5, "{} returned {}", kind, victim);
        }
    }
}

#[test]
fn test_single_frame() {
    for kind in PolicyKind::ALL {
        let (mut policy, mut table) = setup(kind, 1);

        for _ in 0..3 {
            policy.record_access(&mut table[0]);
            assert_eq!(evict(policy.as_mut(), &mut table), 0, "{}", kind);
        }
    }
}
