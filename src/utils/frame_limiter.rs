use std::time::{Duration, Instant};

/// Cadence la boucle à un budget de frame fixe (ex. 1/60 s).
///
/// Le délai est un simple sleep "best effort" : une frame trop longue n'est
/// pas rattrapée, la durée réelle des frames reste variable sous charge.
#[derive(Debug)]
pub struct FrameLimiter {
    frame_budget: Duration,
    last_frame: Instant,
}

impl FrameLimiter {
    pub fn new(target_fps: f32) -> Self {
        Self {
            frame_budget: Duration::from_secs_f32(1.0 / target_fps),
            last_frame: Instant::now(),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Bloque jusqu'à la fin du budget de la frame courante.
    pub fn wait(&mut self) {
        let elapsed = self.last_frame.elapsed();
        if elapsed < self.frame_budget {
            std::thread::sleep(self.frame_budget - elapsed);
        }
        self.last_frame = Instant::now();
    }
}
