mod helpers;

use helpers::{DrawCall, LoggingRenderer, MockWindow};
use takeoff_sim::physic_engine::config::PhysicConfig;
use takeoff_sim::physic_engine::PhysicEngineTakeoff;
use takeoff_sim::Simulator;

const WINDOW_SIZE: (i32, i32) = (400, 600);

fn seeded_config() -> PhysicConfig {
    PhysicConfig {
        random_seed: Some(42),
        ..PhysicConfig::default()
    }
}

fn make_simulator(
    window: MockWindow,
) -> Simulator<LoggingRenderer, PhysicEngineTakeoff, MockWindow> {
    let physic = PhysicEngineTakeoff::new(&seeded_config(), WINDOW_SIZE);
    // Budget de frame court : les tests ne dorment quasiment pas.
    Simulator::new(LoggingRenderer::new(), physic, window, 1000.0)
}

// ==================================
// 1. Transition Running -> Stopped
// ==================================

#[test]
fn test_close_event_stops_loop_after_current_frame() {
    let mut simulator = make_simulator(MockWindow::close_at_frame(0));

    // La frame qui reçoit l'évènement se termine normalement...
    assert!(simulator.step());
    // ... et la boucle s'arrête au tour suivant.
    assert!(!simulator.step());
    assert_eq!(simulator.frames(), 1);
}

#[test]
fn test_run_exits_on_scripted_close() {
    let mut simulator = make_simulator(MockWindow::close_at_frame(4));

    simulator.run().unwrap();
    assert_eq!(simulator.frames(), 5);
}

#[test]
fn test_stopped_is_terminal() {
    let mut simulator = make_simulator(MockWindow::close_at_frame(0));

    simulator.run().unwrap();
    assert!(!simulator.step());
    assert!(!simulator.step());
}

// ==================================
// 2. Ordre de dessin par frame
// ==================================

#[test]
fn test_draw_order_background_stars_rocket_particles() {
    let mut simulator = make_simulator(MockWindow::close_at_frame(0));
    assert!(simulator.step());

    let star_count = seeded_config().star_count;
    let calls = &simulator.renderer_engine().calls;

    // Fond d'abord...
    assert_eq!(calls[0], DrawCall::Clear);
    // ... puis les étoiles (un cercle chacune)...
    for call in &calls[1..=star_count] {
        assert_eq!(*call, DrawCall::Circle);
    }
    // ... puis le corps et le cône de la fusée...
    assert_eq!(calls[star_count + 1], DrawCall::Rect);
    assert_eq!(calls[star_count + 2], DrawCall::Polygon);
    // ... et les particules au-dessus, avant le flush final.
    let tail = &calls[star_count + 3..];
    assert_eq!(*tail.last().unwrap(), DrawCall::Flush);
    assert!(
        tail.len() > 1,
        "particles should be drawn after the rocket"
    );
    for call in &tail[..tail.len() - 1] {
        assert_eq!(*call, DrawCall::Circle);
    }
}

#[test]
fn test_frame_in_progress_completes_on_close() {
    // Même la frame qui reçoit la demande de fermeture est dessinée et
    // présentée en entier.
    let mut simulator = make_simulator(MockWindow::close_at_frame(0));
    simulator.run().unwrap();

    let calls = &simulator.renderer_engine().calls;
    assert_eq!(*calls.last().unwrap(), DrawCall::Flush);
    assert_eq!(simulator.window_engine().swaps, 1);
}

#[test]
fn test_swap_happens_every_frame() {
    let mut simulator = make_simulator(MockWindow::close_at_frame(2));

    simulator.run().unwrap();
    assert_eq!(simulator.window_engine().swaps, 3);
}

// ==================================
// 3. Fermeture des moteurs
// ==================================

#[test]
fn test_close_shuts_down_engines() {
    let mut simulator = make_simulator(MockWindow::close_at_frame(0));

    simulator.run().unwrap();
    simulator.close();
    assert!(simulator.renderer_engine().closed);
}
