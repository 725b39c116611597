use std::fmt;

/// Which half of its range a recursive call is currently working on.
///
/// One of these is recorded per open call in
/// [`crate::snapshot::ExecutionSnapshot::partition_stack`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Descending into the left half.
    Left,
    /// Descending into the right half.
    Right,
    /// Both halves returned; combining at the median.
    AtMedian,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::AtMedian => "median",
        })
    }
}

/// The kind of checkpoint that produced a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Checkpoint {
    /// About to descend into one half of a call with three or more points.
    #[default]
    Divide,
    /// A one- or two-point call produced its result.
    BaseCase,
    /// A new left-strip point is being swept.
    SweepBase,
    /// A right-strip point is about to be compared with the base point.
    SweepCandidate,
    /// The last comparison produced a closer pair.
    Improvement,
    /// A call with three or more points returned its result.
    Return,
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Checkpoint::Divide => "divide",
            Checkpoint::BaseCase => "base",
            Checkpoint::SweepBase => "sweep-base",
            Checkpoint::SweepCandidate => "sweep-candidate",
            Checkpoint::Improvement => "improvement",
            Checkpoint::Return => "return",
        })
    }
}
