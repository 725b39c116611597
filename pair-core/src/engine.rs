//! Divide-and-conquer closest-pair search that stops at every checkpoint.
//!
//! The recursion is kept as an explicit stack of frames, one per open call
//! on `points[start..end]`. Each call of three or more points goes through:
//! 1. Divide left: push its median onto the partition stack, emit, and
//!    push a frame for `[start, mid]`.
//! 2. Divide right: once the left child returns, flip its partition entry
//!    to [`Side::Right`], emit, and push a frame for `[mid + 1, end)`.
//! 3. Combine: once the right child returns, start from the closer of the
//!    two sub-results and sweep the [`MergeStrip`] around the median,
//!    emitting before each base point, before each comparison and after
//!    each improvement.
//! 4. Return: pop the partition entry and emit the pair handed back to
//!    the parent.
//!
//! One- and two-point calls emit a single [`Checkpoint::BaseCase`].
//! [`Engine::advance`] runs frames until the next emit, so the caller can
//! drive the search one checkpoint at a time.

use crate::{
    error::{InputError, validate},
    geometry::{Pair, Point, closest_of},
    snapshot::{ExecutionSnapshot, Partition},
    strip::{MergeStrip, YWindow},
    types::{Checkpoint, Side},
};
use log::{debug, trace};
use std::ops::Range;

/// Where a frame is within its call.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Stage {
    Enter,
    AwaitLeft,
    AwaitRight,
    SweepBase,
    SweepCandidate(Point),
    Compare { base: Point, candidate: Point },
    Finish,
    Return(Option<Pair>),
}

/// Progress of one combine step.
#[derive(Debug)]
struct Sweep {
    median_x: f64,
    width: f64,
    best: Option<Pair>,
    strip: MergeStrip,
    next_left: usize,
    window: YWindow,
    candidates: Range<usize>,
}

impl Sweep {
    fn new(median_x: f64, width: f64, strip: MergeStrip) -> Self {
        Self {
            median_x,
            width,
            best: None,
            strip,
            next_left: 0,
            window: YWindow::new(),
            candidates: 0..0,
        }
    }
}

#[derive(Debug)]
struct Frame {
    start: usize,
    end: usize,
    stage: Stage,
    left: Option<Pair>,
    right: Option<Pair>,
    sweep: Option<Sweep>,
}

impl Frame {
    fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            stage: Stage::Enter,
            left: None,
            right: None,
            sweep: None,
        }
    }

    /// Last index of the left half. Only meaningful for three or more points.
    fn mid(&self) -> usize {
        self.start + (self.end - self.start) / 2 - 1
    }
}

enum Flow {
    Emit(Checkpoint),
    Continue,
    Done,
}

/// A closest-pair search that can be advanced one checkpoint at a time.
///
/// The engine owns its input and its [`ExecutionSnapshot`]. Each call to
/// [`Engine::advance`] resumes where the previous one stopped. A finished
/// engine stays finished; build a new one to run again.
#[derive(Debug)]
pub struct Engine {
    points: Vec<Point>,
    frames: Vec<Frame>,
    snapshot: ExecutionSnapshot,
    returned: Option<Pair>,
    emitted: usize,
    result: Option<Pair>,
    exhausted: bool,
}

impl Engine {
    /// Creates an engine over points sorted by ascending x.
    ///
    /// ### Errors
    /// Returns an [`InputError`] if `points` is empty, contains a non-finite
    /// coordinate, or is not ordered by x.
    pub fn new(points: Vec<Point>) -> Result<Self, InputError> {
        validate(&points)?;
        debug!("closest-pair engine created for {} points", points.len());

        let root = Frame::new(0, points.len());
        Ok(Self {
            points,
            frames: vec![root],
            snapshot: ExecutionSnapshot::default(),
            returned: None,
            emitted: 0,
            result: None,
            exhausted: false,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The snapshot of the last checkpoint reached.
    pub fn snapshot(&self) -> &ExecutionSnapshot {
        &self.snapshot
    }

    /// Number of checkpoints emitted so far.
    pub fn checkpoints(&self) -> usize {
        self.emitted
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The closest pair, available once [`Engine::advance`] has returned `None`.
    ///
    /// `None` before that, and for a single-point input.
    pub fn result(&self) -> Option<Pair> {
        self.result
    }

    /// Runs until the next checkpoint and returns its snapshot.
    ///
    /// Returns `None` once the root call has returned, and on every call
    /// after that.
    pub fn advance(&mut self) -> Option<&ExecutionSnapshot> {
        if self.exhausted {
            return None;
        }
        loop {
            match self.step() {
                Flow::Continue => {}
                Flow::Emit(kind) => {
                    self.snapshot.index = self.emitted;
                    self.snapshot.checkpoint = kind;
                    self.emitted += 1;
                    trace!(
                        "checkpoint #{} {} depth={} width={:?}",
                        self.snapshot.index,
                        kind,
                        self.snapshot.depth(),
                        self.snapshot.strip_width
                    );
                    return Some(&self.snapshot);
                }
                Flow::Done => {
                    self.exhausted = true;
                    debug!(
                        "closest-pair engine finished after {} checkpoints",
                        self.emitted
                    );
                    return None;
                }
            }
        }
    }

    /// Drains the remaining checkpoints and returns the final pair.
    pub fn run_to_end(&mut self) -> Option<Pair> {
        while self.advance().is_some() {}
        self.result
    }

    /// Turns the engine into an iterator over owned copies of every
    /// remaining snapshot.
    pub fn into_snapshots(mut self) -> impl Iterator<Item = ExecutionSnapshot> {
        std::iter::from_fn(move || self.advance().cloned())
    }

    fn step(&mut self) -> Flow {
        let Some(stage) = self.frames.last().map(|f| f.stage) else {
            return Flow::Done;
        };
        match stage {
            Stage::Enter => self.enter(),
            Stage::AwaitLeft => self.after_left(),
            Stage::AwaitRight => self.after_right(),
            Stage::SweepBase => self.sweep_base(),
            Stage::SweepCandidate(base) => self.sweep_candidate(base),
            Stage::Compare { base, candidate } => self.compare(base, candidate),
            Stage::Finish => self.finish(),
            Stage::Return(result) => {
                self.frames.pop();
                if self.frames.is_empty() {
                    self.result = result;
                    return Flow::Done;
                }
                self.returned = result;
                Flow::Continue
            }
        }
    }

    fn enter(&mut self) -> Flow {
        let Some(frame) = self.frames.last_mut() else {
            return Flow::Done;
        };
        match &self.points[frame.start..frame.end] {
            [] => {
                frame.stage = Stage::Return(None);
                Flow::Continue
            }
            [_] => {
                self.snapshot.result = None;
                frame.stage = Stage::Return(None);
                Flow::Emit(Checkpoint::BaseCase)
            }
            [a, b] => {
                let pair = Pair::new(*a, *b);
                self.snapshot.best_pairs.push(pair);
                self.snapshot.result = Some(pair);
                frame.stage = Stage::Return(Some(pair));
                Flow::Emit(Checkpoint::BaseCase)
            }
            _ => {
                let mid = frame.mid();
                let child = Frame::new(frame.start, mid + 1);
                frame.stage = Stage::AwaitLeft;

                self.snapshot
                    .partition_stack
                    .push(Partition::new(self.points[mid], Side::Left));
                self.snapshot.best_pairs.clear();
                self.snapshot.result = None;

                self.frames.push(child);
                Flow::Emit(Checkpoint::Divide)
            }
        }
    }

    fn after_left(&mut self) -> Flow {
        let left = self.returned.take();
        let Some(frame) = self.frames.last_mut() else {
            return Flow::Done;
        };
        let mid = frame.mid();
        let child = Frame::new(mid + 1, frame.end);
        frame.left = left;
        frame.stage = Stage::AwaitRight;

        self.set_partition_side(mid, Side::Right);
        self.snapshot.best_pairs.clear();
        self.snapshot.best_pairs.extend(left);
        self.snapshot.result = None;

        self.frames.push(child);
        Flow::Emit(Checkpoint::Divide)
    }

    fn after_right(&mut self) -> Flow {
        let right = self.returned.take();
        let Some(frame) = self.frames.last_mut() else {
            return Flow::Done;
        };
        frame.right = right;
        let mid = frame.mid();
        let (start, end, left) = (frame.start, frame.end, frame.left);

        self.set_partition_side(mid, Side::AtMedian);
        // The sub-results are superseded by what this combine step commits.
        self.snapshot.best_pairs.clear();
        self.snapshot.result = None;
        self.snapshot.combining = true;
        self.snapshot.clear_sweep();

        // A single-point left half has no pair, so the right result stands alone.
        let initial = match (left, right) {
            (Some(l), Some(r)) => Some(if l.closer_than(&r) { l } else { r }),
            (l, r) => r.or(l),
        };
        let Some(initial) = initial else {
            self.set_stage(Stage::Finish);
            return Flow::Continue;
        };

        let median_x = self.points[mid].x;
        let width = initial.distance();
        self.snapshot.best_pairs.push(initial);
        self.snapshot.strip_width = Some(width);

        let strip = MergeStrip::build(
            &self.points[start..=mid],
            &self.points[mid + 1..end],
            median_x,
            width,
        );
        debug!(
            "combining [{start}, {end}) at x={median_x}: {} left and {} right strip points, width {width}",
            strip.left.len(),
            strip.right.len()
        );

        if let Some(frame) = self.frames.last_mut() {
            frame.sweep = Some(Sweep::new(median_x, width, strip));
            frame.stage = Stage::SweepBase;
        }
        Flow::Continue
    }

    fn sweep_base(&mut self) -> Flow {
        let Some(frame) = self.frames.last_mut() else {
            return Flow::Done;
        };
        let Some(sweep) = frame.sweep.as_mut() else {
            frame.stage = Stage::Finish;
            return Flow::Continue;
        };

        while let Some(&base) = sweep.strip.left.get(sweep.next_left) {
            sweep.next_left += 1;
            // The width may have shrunk since the strip was built.
            if base.x < sweep.median_x - sweep.width {
                continue;
            }
            sweep.candidates = sweep.window.slide(&sweep.strip.right, base.y, sweep.width);

            self.snapshot.base_point = Some(base);
            self.snapshot.candidate_point = None;
            frame.stage = Stage::SweepCandidate(base);
            return Flow::Emit(Checkpoint::SweepBase);
        }

        frame.stage = Stage::Finish;
        Flow::Continue
    }

    fn sweep_candidate(&mut self, base: Point) -> Flow {
        let Some(frame) = self.frames.last_mut() else {
            return Flow::Done;
        };
        let Some(sweep) = frame.sweep.as_mut() else {
            frame.stage = Stage::Finish;
            return Flow::Continue;
        };

        for i in sweep.candidates.by_ref() {
            let candidate = sweep.strip.right[i];
            if candidate.x > sweep.median_x + sweep.width {
                continue;
            }
            self.snapshot.candidate_point = Some(candidate);
            frame.stage = Stage::Compare { base, candidate };
            return Flow::Emit(Checkpoint::SweepCandidate);
        }

        frame.stage = Stage::SweepBase;
        Flow::Continue
    }

    fn compare(&mut self, base: Point, candidate: Point) -> Flow {
        let Some(frame) = self.frames.last_mut() else {
            return Flow::Done;
        };
        frame.stage = Stage::SweepCandidate(base);
        let Some(sweep) = frame.sweep.as_mut() else {
            return Flow::Continue;
        };

        let d = base.distance(candidate);
        if d < sweep.width {
            let pair = Pair::new(base, candidate);
            sweep.width = d;
            sweep.best = Some(pair);
            self.snapshot.current_best = Some(pair);
            self.snapshot.strip_width = Some(d);
            return Flow::Emit(Checkpoint::Improvement);
        }
        Flow::Continue
    }

    fn finish(&mut self) -> Flow {
        let Some(frame) = self.frames.last_mut() else {
            return Flow::Done;
        };
        let strip_best = frame.sweep.take().and_then(|s| s.best);
        let sub_best = closest_of([frame.left, frame.right]);

        let result = match strip_best {
            Some(s) if sub_best.is_none_or(|b| s.closer_than(&b)) => {
                match self.snapshot.best_pairs.last_mut() {
                    Some(top) => *top = s,
                    None => self.snapshot.best_pairs.push(s),
                }
                Some(s)
            }
            _ => sub_best,
        };
        frame.stage = Stage::Return(result);
        debug!(
            "call [{}, {}) returns {:?}",
            frame.start,
            frame.end,
            result.map(|p| p.distance())
        );

        self.snapshot.partition_stack.pop();
        self.snapshot.combining = false;
        self.snapshot.clear_sweep();
        self.snapshot.result = result;
        Flow::Emit(Checkpoint::Return)
    }

    fn set_partition_side(&mut self, mid: usize, side: Side) {
        let entry = Partition::new(self.points[mid], side);
        match self.snapshot.partition_stack.last_mut() {
            Some(top) => *top = entry,
            None => self.snapshot.partition_stack.push(entry),
        }
    }

    fn set_stage(&mut self, stage: Stage) {
        if let Some(frame) = self.frames.last_mut() {
            frame.stage = stage;
        }
    }
}

/// Runs a full search over x-sorted points and returns the closest pair.
///
/// Returns `Ok(None)` for a single point.
pub fn closest_pair(points: &[Point]) -> Result<Option<Pair>, InputError> {
    Ok(Engine::new(points.to_vec())?.run_to_end())
}
