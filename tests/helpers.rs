#![allow(dead_code)]

use std::collections::VecDeque;

use takeoff_sim::physic_engine::types::{Color, Vec2};
use takeoff_sim::renderer_engine::RendererEngine;
use takeoff_sim::window_engine::{WindowEngine, WindowEvent};

/// Primitive de dessin enregistrée par le `LoggingRenderer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Clear,
    Rect,
    Polygon,
    Circle,
    Flush,
}

/// Renderer factice : enregistre les appels de dessin dans l'ordre, sans
/// aucun contexte GL.
#[derive(Debug, Default)]
pub struct LoggingRenderer {
    pub calls: Vec<DrawCall>,
    pub closed: bool,
}

impl LoggingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appels de la dernière frame (depuis le dernier `Clear`).
    pub fn last_frame_calls(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == DrawCall::Clear)
            .unwrap_or(0);
        &self.calls[start..]
    }
}

impl RendererEngine for LoggingRenderer {
    fn clear(&mut self, _color: Color) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, _pos: Vec2, _size: Vec2, _color: Color) {
        self.calls.push(DrawCall::Rect);
    }

    fn fill_polygon(&mut self, _points: &[Vec2], _color: Color) {
        self.calls.push(DrawCall::Polygon);
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
        self.calls.push(DrawCall::Circle);
    }

    fn flush(&mut self) -> usize {
        self.calls.push(DrawCall::Flush);
        0
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Fenêtre factice : file d'évènements scriptée, aucun contexte GL.
#[derive(Debug, Default)]
pub struct MockWindow {
    pub should_close: bool,
    pub swaps: usize,
    /// Évènements à remonter, une entrée par frame.
    pub scripted_events: VecDeque<Vec<WindowEvent>>,
}

impl MockWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Programme une demande de fermeture à la frame `frame` (base 0).
    pub fn close_at_frame(frame: usize) -> Self {
        let mut scripted_events = VecDeque::new();
        for _ in 0..frame {
            scripted_events.push_back(Vec::new());
        }
        scripted_events.push_back(vec![WindowEvent::CloseRequested]);
        Self {
            scripted_events,
            ..Self::default()
        }
    }
}

impl WindowEngine for MockWindow {
    fn init(_width: i32, _height: i32, _title: &str) -> anyhow::Result<Self> {
        Ok(Self::new())
    }

    fn drain_events(&mut self) -> Vec<WindowEvent> {
        self.scripted_events.pop_front().unwrap_or_default()
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, value: bool) {
        self.should_close = value;
    }

    fn get_size(&self) -> (i32, i32) {
        (400, 600)
    }
}
