use glam::DVec2;

/// Playback and spawning parameters shared by the driver and the trace tool.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Seconds between automatic steps while playing.
    pub step_interval: f64,
    /// Number of points generated by a random spawn.
    pub spawn_count: usize,
    pub spawn_center: DVec2,
    pub spawn_half_extents: DVec2,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_interval: 0.5,
            spawn_count: 16,
            spawn_center: DVec2::new(600.0, 280.0),
            spawn_half_extents: DVec2::new(600.0, 280.0),
        }
    }
}
