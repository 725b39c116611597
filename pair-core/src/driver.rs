//! Play / pause / step / reset control over a closest-pair search.
//!
//! [`Driver`] owns the point set and at most one [`Engine`]. It does no
//! rendering and reads no clock: the caller passes the current time in
//! seconds to [`Driver::play`] and [`Driver::tick`], and renders whatever
//! [`Driver::snapshot`] holds.

use crate::{
    config::Config,
    engine::Engine,
    error::InputError,
    geometry::{Pair, Point},
    point_set::PointSet,
    snapshot::ExecutionSnapshot,
};
use log::{debug, warn};

/// Playback state of a [`Driver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// No run in progress; points may be edited.
    Stopped,
    /// Advancing once every `Config::step_interval` seconds.
    Playing,
    /// Advancing only on [`Driver::step`].
    Paused,
}

/// Drives an [`Engine`] from user commands and timer ticks.
///
/// ### Fields
/// - `points` - Input set, always x-sorted.
/// - `cfg` - Pacing configuration.
/// - `engine` - The run in progress, if any.
/// - `state` - Current [`Playback`] state.
/// - `snapshot` - Copy of the last snapshot reached, kept after a run ends.
/// - `result` - Final pair of the last completed run.
/// - `last_step_time` - Time stamp of the last automatic step.
/// - `last_step_dt` - Time between the last two automatic steps.
#[derive(Debug)]
pub struct Driver {
    points: PointSet,
    cfg: Config,
    engine: Option<Engine>,
    state: Playback,
    snapshot: Option<ExecutionSnapshot>,
    result: Option<Pair>,
    last_step_time: f64,
    last_step_dt: f64,
}

impl Driver {
    pub fn new(points: PointSet, cfg: Config) -> Self {
        Self {
            points,
            cfg,
            engine: None,
            state: Playback::Stopped,
            snapshot: None,
            result: None,
            last_step_time: 0.0,
            last_step_dt: 0.0,
        }
    }

    pub fn state(&self) -> Playback {
        self.state
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// The last snapshot reached, if any.
    pub fn snapshot(&self) -> Option<&ExecutionSnapshot> {
        self.snapshot.as_ref()
    }

    /// Final pair of the most recently completed run.
    pub fn result(&self) -> Option<Pair> {
        self.result
    }

    pub fn last_step_dt(&self) -> f64 {
        self.last_step_dt
    }

    /// Starts or resumes automatic stepping.
    ///
    /// From [`Playback::Stopped`] a fresh engine is built from the current
    /// points; from [`Playback::Paused`] the paused run continues.
    ///
    /// ### Errors
    /// Returns the engine's [`InputError`] if a fresh engine cannot be built,
    /// leaving the driver unchanged.
    pub fn play(&mut self, now: f64) -> Result<(), InputError> {
        match self.state {
            Playback::Playing => return Ok(()),
            Playback::Stopped => {
                self.arm()?;
                self.snapshot = None;
            }
            Playback::Paused => {
                if self.engine.is_none() {
                    self.arm()?;
                    self.snapshot = None;
                }
            }
        }
        debug!("playback {:?} -> Playing", self.state);
        self.state = Playback::Playing;
        self.last_step_time = now;
        Ok(())
    }

    /// Stops automatic stepping, keeping the run where it is.
    pub fn pause(&mut self) {
        if self.state == Playback::Playing {
            debug!("playback Playing -> Paused");
            self.state = Playback::Paused;
        }
    }

    /// Advances by exactly one checkpoint.
    ///
    /// From [`Playback::Stopped`] this builds a fresh engine and pauses.
    /// While paused, reaching the end of a run returns `Ok(None)` and the
    /// next step starts the search again from scratch. Ignored while playing.
    ///
    /// ### Errors
    /// Returns the engine's [`InputError`] if a fresh engine cannot be built.
    pub fn step(&mut self) -> Result<Option<&ExecutionSnapshot>, InputError> {
        match self.state {
            Playback::Playing => {
                debug!("step ignored while playing");
                return Ok(None);
            }
            Playback::Stopped => {
                self.arm()?;
                self.snapshot = None;
                debug!("playback Stopped -> Paused");
                self.state = Playback::Paused;
            }
            Playback::Paused => {
                if self.engine.is_none() {
                    self.arm()?;
                }
            }
        }
        if self.advance_engine() {
            Ok(self.snapshot.as_ref())
        } else {
            Ok(None)
        }
    }

    /// Timer callback while playing.
    ///
    /// Advances once if at least `step_interval` seconds have passed since
    /// the last step and returns the new snapshot. When the run ends the
    /// driver stops and the last snapshot stays available.
    pub fn tick(&mut self, now: f64) -> Option<&ExecutionSnapshot> {
        if self.state != Playback::Playing {
            return None;
        }
        let elapsed = now - self.last_step_time;
        if elapsed < self.cfg.step_interval {
            return None;
        }
        self.last_step_dt = elapsed;
        self.last_step_time = now;

        if !self.advance_engine() {
            debug!("playback Playing -> Stopped");
            self.state = Playback::Stopped;
            return None;
        }
        self.snapshot.as_ref()
    }

    /// Discards the current run and prepares a fresh one, paused.
    ///
    /// ### Errors
    /// Returns the engine's [`InputError`] if the points cannot be searched.
    pub fn restart(&mut self) -> Result<(), InputError> {
        self.arm()?;
        self.snapshot = None;
        self.state = Playback::Paused;
        Ok(())
    }

    /// Clears the points and every trace of the previous run.
    pub fn reset(&mut self) {
        self.points.clear();
        self.engine = None;
        self.snapshot = None;
        self.result = None;
        self.state = Playback::Stopped;
        debug!("driver reset");
    }

    /// Adds a point while stopped. Returns `false` if a run is in progress.
    pub fn add_point(&mut self, p: Point) -> bool {
        if self.state != Playback::Stopped {
            warn!("cannot add {p} while {:?}", self.state);
            return false;
        }
        self.points.insert(p);
        self.discard_run();
        true
    }

    /// Replaces the point set while stopped. Returns `false` if a run is in progress.
    pub fn replace_points(&mut self, points: PointSet) -> bool {
        if self.state != Playback::Stopped {
            warn!("cannot replace points while {:?}", self.state);
            return false;
        }
        self.points = points;
        self.discard_run();
        true
    }

    fn discard_run(&mut self) {
        self.engine = None;
        self.snapshot = None;
        self.result = None;
    }

    fn arm(&mut self) -> Result<(), InputError> {
        let engine = Engine::new(self.points.as_slice().to_vec())?;
        self.engine = Some(engine);
        self.result = None;
        Ok(())
    }

    /// Returns `false` when there is no engine or it just ran out.
    fn advance_engine(&mut self) -> bool {
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };
        let next = engine.advance().cloned();
        match next {
            Some(s) => {
                self.snapshot = Some(s);
                true
            }
            None => {
                self.result = engine.result();
                self.engine = None;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Checkpoint;

    fn two_points() -> PointSet {
        PointSet::from_points(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)])
    }

    fn driver(points: PointSet) -> Driver {
        let cfg = Config {
            step_interval: 0.5,
            ..Config::default()
        };
        Driver::new(points, cfg)
    }

    #[test]
    fn play_steps_only_after_the_interval() {
        let mut d = driver(PointSet::demo());
        d.play(1.0).unwrap();
        assert_eq!(d.state(), Playback::Playing);

        assert!(d.tick(1.2).is_none());
        let s = d.tick(1.5).cloned().unwrap();
        assert_eq!(s.index, 0);
        assert_eq!(s.checkpoint, Checkpoint::Divide);
        assert!(d.tick(1.7).is_none());
        assert_eq!(d.tick(2.1).map(|s| s.index), Some(1));
        assert!((d.last_step_dt() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn end_of_run_while_playing_stops_and_keeps_snapshot() {
        let mut d = driver(two_points());
        d.play(0.0).unwrap();
        assert!(d.tick(0.5).is_some());
        assert!(d.tick(1.0).is_none());

        assert_eq!(d.state(), Playback::Stopped);
        assert_eq!(d.snapshot().map(|s| s.checkpoint), Some(Checkpoint::BaseCase));
        assert_eq!(d.result().map(|p| p.distance()), Some(5.0));
    }

    #[test]
    fn step_from_stopped_pauses_and_advances() {
        let mut d = driver(PointSet::demo());
        let first = d.step().unwrap().cloned().unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(d.state(), Playback::Paused);
        assert_eq!(d.step().unwrap().map(|s| s.index), Some(1));
    }

    #[test]
    fn step_after_end_while_paused_starts_over() {
        let mut d = driver(two_points());
        assert!(d.step().unwrap().is_some());
        assert!(d.step().unwrap().is_none());
        assert_eq!(d.state(), Playback::Paused);
        assert!(d.result().is_some());

        let again = d.step().unwrap().cloned().unwrap();
        assert_eq!(again.index, 0);
        assert!(d.result().is_none());
    }

    #[test]
    fn pause_and_resume_continue_the_same_run() {
        let mut d = driver(PointSet::demo());
        d.play(0.0).unwrap();
        d.tick(0.5);
        d.pause();
        assert_eq!(d.state(), Playback::Paused);
        assert!(d.tick(5.0).is_none());

        assert_eq!(d.step().unwrap().map(|s| s.index), Some(1));
        d.play(10.0).unwrap();
        assert_eq!(d.tick(10.5).map(|s| s.index), Some(2));
    }

    #[test]
    fn play_after_end_while_paused_drops_the_old_snapshot() {
        let mut d = driver(two_points());
        assert!(d.step().unwrap().is_some());
        assert!(d.step().unwrap().is_none());
        assert!(d.snapshot().is_some());

        d.play(0.0).unwrap();
        assert_eq!(d.state(), Playback::Playing);
        assert!(d.snapshot().is_none());
        assert_eq!(d.tick(0.5).map(|s| s.index), Some(0));
    }

    #[test]
    fn config_is_the_one_given() {
        let d = driver(two_points());
        assert_eq!(d.config().step_interval, 0.5);
    }

    #[test]
    fn step_is_ignored_while_playing() {
        let mut d = driver(PointSet::demo());
        d.play(0.0).unwrap();
        assert!(d.step().unwrap().is_none());
        assert!(d.snapshot().is_none());
    }

    #[test]
    fn play_without_points_fails_and_stays_stopped() {
        let mut d = driver(PointSet::new());
        assert_eq!(d.play(0.0), Err(InputError::Empty));
        assert_eq!(d.state(), Playback::Stopped);
        assert_eq!(d.step().unwrap_err(), InputError::Empty);
    }

    #[test]
    fn reset_clears_everything() {
        let mut d = driver(PointSet::demo());
        d.step().unwrap();
        d.reset();

        assert_eq!(d.state(), Playback::Stopped);
        assert!(d.points().is_empty());
        assert!(d.snapshot().is_none());
        assert!(d.result().is_none());
    }

    #[test]
    fn restart_begins_a_fresh_paused_run() {
        let mut d = driver(PointSet::demo());
        d.step().unwrap();
        d.step().unwrap();
        d.restart().unwrap();
        assert_eq!(d.state(), Playback::Paused);
        assert!(d.snapshot().is_none());
        assert_eq!(d.step().unwrap().map(|s| s.index), Some(0));
    }

    #[test]
    fn points_can_only_change_while_stopped() {
        let mut d = driver(two_points());
        assert!(d.add_point(Point::new(1.0, 1.0)));
        assert_eq!(d.points().len(), 3);
        assert_eq!(d.points().as_slice()[1], Point::new(1.0, 1.0));

        d.play(0.0).unwrap();
        assert!(!d.add_point(Point::new(2.0, 2.0)));
        assert!(!d.replace_points(PointSet::new()));
        assert_eq!(d.points().len(), 3);
    }
}
