use log::{debug, info};
use std::time::Instant;

use crate::physic_engine::types::BLACK;
use crate::physic_engine::PhysicEngineFull;
use crate::renderer_engine::RendererEngine;
use crate::utils::FrameLimiter;
use crate::window_engine::{WindowEngine, WindowEvent};

/// Pilote de la boucle de simulation : un moteur physique, un renderer et
/// une fenêtre, avancés puis dessinés une fois par frame.
///
/// Deux états seulement : en cours (`step` retourne `true`) et arrêté (la
/// fenêtre a enregistré une demande de fermeture ; l'arrêt est définitif).
pub struct Simulator<R, P, W>
where
    R: RendererEngine,
    P: PhysicEngineFull,
    W: WindowEngine,
{
    renderer_engine: R,
    physic_engine: P,

    // Window & Loop management
    window_engine: W,
    limiter: FrameLimiter,

    // Loop state
    frames: u64,
    last_time: Instant,
    fps_avg: f32,
    last_log: Instant,
    first_frame: bool,
}

impl<R, P, W> Simulator<R, P, W>
where
    R: RendererEngine,
    P: PhysicEngineFull,
    W: WindowEngine,
{
    pub fn new(renderer_engine: R, physic_engine: P, window_engine: W, target_fps: f32) -> Self {
        let window_size = window_engine.get_size();
        info!("🖥 Simulator ready: {} x {}", window_size.0, window_size.1);

        Self {
            renderer_engine,
            physic_engine,
            window_engine,
            limiter: FrameLimiter::new(target_fps),

            frames: 0,
            last_time: Instant::now(),
            fps_avg: 0.0,
            last_log: Instant::now(),
            first_frame: true,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        while self.step() {}

        Ok(())
    }

    /// Une frame complète. Retourne `false` une fois la boucle arrêtée.
    pub fn step(&mut self) -> bool {
        if self.window_engine.should_close() {
            return false;
        }

        // Fond + étoiles (jamais régénérées).
        self.renderer_engine.clear(BLACK);
        self.physic_engine
            .starfield()
            .draw(&mut self.renderer_engine);

        // Une demande de fermeture n'interrompt pas la frame en cours : la
        // file est drainée entièrement, le dessin continue, la boucle
        // s'arrête au tour suivant.
        for event in self.window_engine.drain_events() {
            match event {
                WindowEvent::CloseRequested => {
                    debug!("Close requested, stopping after this frame");
                    self.window_engine.set_should_close(true);
                }
            }
        }

        // Avance la simulation d'une frame (fusée, émission, particules).
        self.physic_engine.update();

        // Les particules sont émises à la base de la fusée : dessinées
        // après elle pour ne pas être masquées.
        self.physic_engine.rocket().draw(&mut self.renderer_engine);
        self.physic_engine
            .particle_system()
            .draw(&mut self.renderer_engine);

        let vertices_drawn = self.renderer_engine.flush();
        self.window_engine.swap_buffers();

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }

        self.update_fps_metrics(vertices_drawn);

        self.limiter.wait();

        true
    }

    fn update_fps_metrics(&mut self, vertices_drawn: usize) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_time).as_secs_f32();
        self.last_time = now;
        self.frames += 1;

        // 🔹 Calcul FPS instantané
        let fps = if delta > 0.0 { 1.0 / delta } else { 0.0 };

        // moyenne pondérée EMA
        let alpha = 0.15;
        self.fps_avg = alpha * fps + (1.0 - alpha) * self.fps_avg;

        // affichage périodique
        let log_interval = std::time::Duration::from_secs(5);
        if self.last_log.elapsed() >= log_interval {
            info!("FPS moyen (EMA): {:.2}", self.fps_avg);
            info!(
                "Frame {}: {} particules vivantes, {} sommets dessinés",
                self.frames,
                self.physic_engine.particle_system().len(),
                vertices_drawn
            );
            self.last_log = Instant::now();
        }
    }

    pub fn close(&mut self) {
        self.renderer_engine.close();
        self.physic_engine.close();
        // Window engine cleanup happens automatically when dropped
    }

    pub fn renderer_engine(&self) -> &R {
        &self.renderer_engine
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn window_engine(&self) -> &W {
        &self.window_engine
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
