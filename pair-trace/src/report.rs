//! One-line text rendering of execution snapshots.

use pair_core::{
    geometry::Pair,
    snapshot::{ExecutionSnapshot, Partition},
};

/// Renders the partition stack as `left@x > right@x > ...`.
fn partitions(stack: &[Partition]) -> String {
    if stack.is_empty() {
        return "-".to_owned();
    }
    stack
        .iter()
        .map(|p| format!("{}@{}", p.side, p.median_x()))
        .collect::<Vec<_>>()
        .join(" > ")
}

fn pairs(pairs: &[Pair]) -> String {
    if pairs.is_empty() {
        return "-".to_owned();
    }
    pairs
        .iter()
        .map(|p| format!("{p} ({:.3})", p.distance()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Describes a snapshot in a single line.
///
/// Sweep fields are only printed while the snapshot is combining; the
/// result is only printed when present.
pub fn describe(s: &ExecutionSnapshot) -> String {
    let mut line = format!(
        "#{:<4} {:<15} [{}] best: {}",
        s.index,
        s.checkpoint.to_string(),
        partitions(&s.partition_stack),
        pairs(&s.best_pairs)
    );

    if s.combining {
        if let Some(w) = s.strip_width {
            line.push_str(&format!(" | strip ±{w:.3}"));
        }
        if let Some(b) = s.base_point {
            line.push_str(&format!(" base {b}"));
        }
        if let Some(c) = s.candidate_point {
            line.push_str(&format!(" vs {c}"));
        }
        if let Some(p) = s.current_best {
            line.push_str(&format!(" current {p}"));
        }
    }
    if let Some(r) = s.result {
        line.push_str(&format!(" => {r} ({:.3})", r.distance()));
    }
    line
}
