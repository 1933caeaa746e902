// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use affinity_poet::graph::WeightedDigraph;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Add(u8),
    Remove(u8),
    Set(u8, u8, u32),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut graph = WeightedDigraph::new();
    for op in ops {
        match op {
            Op::Add(v) => {
                graph.add(v);
            }
            Op::Remove(v) => {
                graph.remove(&v);
            }
            Op::Set(s, t, w) => {
                graph.set(s, t, w);
            }
        }
    }

    for a in graph.vertices() {
        for (b, w) in graph.targets(&a) {
            assert!(w >= 1);
            assert_eq!(graph.sources(&b).get(&a), Some(&w));
        }
    }
});
