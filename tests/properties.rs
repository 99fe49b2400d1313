//! Property tests for the simulator invariants.

use std::collections::{HashMap, HashSet, VecDeque};

use pagesim::{simulate, PageId, Policy, SimulationConfig, Simulator};
use proptest::prelude::*;

fn policy() -> impl Strategy<Value = Policy> {
    prop_oneof![Just(Policy::Fifo), Just(Policy::Frequency)]
}

/// Small id space so traces revisit pages often.
fn trace() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..12, 0..200)
}

fn to_pages(ids: &[u32]) -> Vec<PageId> {
    ids.iter().copied().map(PageId::new).collect()
}

proptest! {
    #[test]
    fn prop_one_result_per_reference_in_order(
        policy in policy(),
        capacity in 1usize..8,
        ids in trace(),
    ) {
        let config = SimulationConfig::new(policy, capacity).unwrap();
        let report = simulate(config, to_pages(&ids)).unwrap();

        prop_assert_eq!(report.len(), ids.len());
        let seen: Vec<u32> = report.results().iter().map(|r| r.page_id.0).collect();
        prop_assert_eq!(seen, ids.clone());

        let stats = report.stats();
        prop_assert_eq!(stats.hits + stats.faults, ids.len() as u64);
        prop_assert!(stats.evictions <= stats.faults);

        if ids.is_empty() {
            prop_assert!(report.fault_rate().is_err());
        } else {
            let rate = report.fault_rate().unwrap();
            prop_assert!((0.0..=100.0).contains(&rate));
        }
    }

    #[test]
    fn prop_runs_are_deterministic(
        policy in policy(),
        capacity in 1usize..8,
        ids in trace(),
    ) {
        let config = SimulationConfig::new(policy, capacity).unwrap();
        let first = simulate(config, to_pages(&ids)).unwrap();
        let second = simulate(config, to_pages(&ids)).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_fifo_matches_queue_model(capacity in 1usize..8, ids in trace()) {
        let config = SimulationConfig::new(Policy::Fifo, capacity).unwrap();
        let report = simulate(config, to_pages(&ids)).unwrap();

        let mut queue = VecDeque::new();
        for (id, result) in ids.iter().zip(report.results()) {
            let hit = queue.contains(id);
            prop_assert_eq!(hit, !result.outcome.is_fault());
            if !hit {
                if queue.len() == capacity {
                    queue.pop_front();
                }
                queue.push_back(*id);
            }
        }
    }

    #[test]
    fn prop_frequency_evicts_a_minimum_count_page(capacity in 1usize..8, ids in trace()) {
        let config = SimulationConfig::new(Policy::Frequency, capacity).unwrap();
        let mut sim = Simulator::new(config).unwrap();

        // Independent bookkeeping: references since load, per resident page
        let mut counts: HashMap<u32, u64> = HashMap::new();

        for id in ids {
            let before: HashSet<u32> = sim.frames().resident_pages().map(|p| p.0).collect();
            let was_full = sim.frames().is_full();

            let result = sim.access(PageId::new(id)).unwrap();
            let after: HashSet<u32> = sim.frames().resident_pages().map(|p| p.0).collect();

            if result.outcome.is_fault() {
                let evicted: Vec<u32> = before.difference(&after).copied().collect();
                if was_full {
                    prop_assert_eq!(evicted.len(), 1);
                    let min = counts.values().copied().min().unwrap();
                    prop_assert_eq!(counts[&evicted[0]], min);
                    counts.remove(&evicted[0]);
                } else {
                    prop_assert!(evicted.is_empty());
                }
                counts.insert(id, 0);
            } else {
                // Hit bumps only this page
                *counts.get_mut(&id).unwrap() += 1;
                prop_assert_eq!(before, after);
            }

            // Frame set agrees with the model
            for slot in sim.frames().slots() {
                if let Some(page) = slot.occupant() {
                    prop_assert_eq!(slot.ref_count(), counts[&page.0]);
                }
            }
        }
    }

    #[test]
    fn prop_enough_frames_never_evict(policy in policy(), ids in trace()) {
        let distinct = ids.iter().collect::<HashSet<_>>().len();
        let config = SimulationConfig::new(policy, distinct.max(1)).unwrap();
        let report = simulate(config, to_pages(&ids)).unwrap();

        prop_assert_eq!(report.stats().faults as usize, distinct);
        prop_assert_eq!(report.stats().evictions, 0);
    }

    #[test]
    fn prop_single_frame_policies_agree(ids in trace()) {
        let fifo = simulate(SimulationConfig::new(Policy::Fifo, 1).unwrap(), to_pages(&ids)).unwrap();
        let freq = simulate(SimulationConfig::new(Policy::Frequency, 1).unwrap(), to_pages(&ids)).unwrap();

        prop_assert_eq!(fifo.results(), freq.results());
    }
}
