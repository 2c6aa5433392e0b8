//! Command history laws and persistence.

use fleetcmd_runtime::{
    CommandHistory, DEFAULT_HISTORY_KEY, Direction, FileStore, KeyValueStore, MemoryStore,
};
use proptest::prelude::*;

fn fresh(max: usize) -> CommandHistory<MemoryStore> {
    CommandHistory::new(MemoryStore::new(), DEFAULT_HISTORY_KEY, max)
}

// =============================================================================
// Laws
// =============================================================================

#[test]
fn navigation_law() {
    let mut h = fresh(100);
    assert_eq!(h.navigate(Direction::Down), None);
    h.add("X");
    assert_eq!(h.navigate(Direction::Up), Some("X"));
    assert_eq!(h.navigate(Direction::Down), None);
}

proptest! {
    #[test]
    fn bound_keeps_the_newest(max in 1usize..20, extra in 1usize..20) {
        let mut h = fresh(max);
        let total = max + extra;
        for i in 1..=total {
            h.add(&format!("CMD{i}"));
        }
        prop_assert_eq!(h.len(), max);
        let oldest = format!("CMD{}", extra + 1);
        prop_assert_eq!(h.iter().next(), Some(oldest.as_str()));
    }

    #[test]
    fn up_then_down_returns_to_the_start(
        entries in prop::collection::vec("[A-Z][0-9]", 1..10),
        steps in 1usize..12,
    ) {
        let mut h = fresh(100);
        for entry in &entries {
            h.add(entry);
        }
        let len = h.len();
        for _ in 0..steps {
            h.navigate(Direction::Up);
        }
        let shown = h.current().map(str::to_string);
        let expected_index = len - steps.min(len);
        prop_assert_eq!(shown.as_deref(), h.iter().nth(expected_index));

        for _ in 0..len {
            h.navigate(Direction::Down);
        }
        prop_assert!(!h.is_navigating());
    }
}

// =============================================================================
// Persistence
// =============================================================================

fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("fleetcmd_it_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn file_store_survives_restarts() {
    let dir = temp_dir("restart");
    {
        let mut h = CommandHistory::load(FileStore::new(&dir), DEFAULT_HISTORY_KEY, 10);
        h.add("F1W2");
        h.add("TURN");
    }
    let h = CommandHistory::load(FileStore::new(&dir), DEFAULT_HISTORY_KEY, 10);
    assert_eq!(h.iter().collect::<Vec<_>>(), vec!["F1W2", "TURN"]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_file_loads_empty() {
    let dir = temp_dir("corrupt");
    let mut store = FileStore::new(&dir);
    store.set(DEFAULT_HISTORY_KEY, b"not msgpack").unwrap();
    let history = CommandHistory::load(store, DEFAULT_HISTORY_KEY, 10);
    assert!(history.is_empty());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn keys_are_independent() {
    let mut store = MemoryStore::new();
    {
        let mut a = CommandHistory::new(&mut store, "a", 10);
        a.add("TURN");
    }
    assert!(CommandHistory::load(&mut store, "b", 10).is_empty());
    assert_eq!(CommandHistory::load(&mut store, "a", 10).len(), 1);
}
