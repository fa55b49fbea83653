// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::time::Duration;

use criterion::Criterion;
use graphedit::model::{Graph, Node};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    fn node_count(self) -> usize {
        match self {
            Self::Small => 16,
            Self::Medium => 256,
            Self::Large => 2048,
        }
    }
}

/// Each node links to its next three neighbours (wrapping) plus one dangling id every tenth node.
pub fn graph(case: Case) -> Graph {
    let count = case.node_count();
    let mut graph = Graph::new();
    for idx in 0..count {
        let mut targets = (1..=3)
            .map(|step| format!("N_{}", (idx + step) % count))
            .collect::<Vec<_>>();
        if idx % 10 == 0 {
            targets.push(format!("GONE_{idx}"));
        }
        let node = Node::with_connections(format!("N_{idx}"), format!("Node number {idx}"), targets);
        graph.add_node(node).expect("fixture ids are distinct");
    }
    graph
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<usize>().ok()).unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<u64>().ok()).unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let sample_size = env_usize("BENCH_SAMPLE_SIZE", 60).clamp(10, 200);
    let warmup_secs = env_u64("BENCH_WARMUP_SECS", 3).clamp(1, 60);
    let measurement_secs = env_u64("BENCH_MEASUREMENT_SECS", 5).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
}
