use anyhow::Result;

/// Évènements fenêtre remontés à la boucle de simulation.
///
/// Seule la demande de fermeture est significative ici ; tout le reste est
/// drainé et ignoré par l'implémentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    CloseRequested,
}

pub trait WindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self>
    where
        Self: Sized;

    /// Vide la file d'évènements en attente et retourne ceux qui
    /// intéressent la simulation.
    fn drain_events(&mut self) -> Vec<WindowEvent>;

    fn swap_buffers(&mut self);
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
    fn get_size(&self) -> (i32, i32);
}
