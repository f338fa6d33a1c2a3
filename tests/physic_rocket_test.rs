use takeoff_sim::physic_engine::config::PhysicConfig;
use takeoff_sim::physic_engine::rocket::Rocket;
use takeoff_sim::physic_engine::types::Vec2;

const EPSILON: f32 = 1e-5;

// ==================================
// 1. Cinématique
// ==================================

#[test]
fn test_single_step_kinematics() {
    let config = PhysicConfig::default();
    let mut rocket = Rocket::new(Vec2::new(185.0, 500.0), &config);

    rocket.step();

    // v = 0 + (-0.2 + 0.05) ; y = 500 + v
    assert!(
        (rocket.velocity - (-0.15)).abs() < EPSILON,
        "velocity = {}",
        rocket.velocity
    );
    // Tolérance plus large : l'addition se fait autour de 500.0 en f32.
    assert!((rocket.pos.y - 499.85).abs() < 1e-4, "y = {}", rocket.pos.y);
    // La position horizontale ne bouge jamais.
    assert_eq!(rocket.pos.x, 185.0);
}

#[test]
fn test_velocity_strictly_decreasing() {
    let config = PhysicConfig::default();
    let mut rocket = Rocket::new(Vec2::new(185.0, 500.0), &config);

    let mut previous = rocket.velocity;
    for frame in 0..200 {
        rocket.step();
        assert!(
            rocket.velocity < previous,
            "velocity should decrease at frame {}: {} >= {}",
            frame,
            rocket.velocity,
            previous
        );
        previous = rocket.velocity;
    }
}

#[test]
fn test_velocity_increment_is_constant() {
    let config = PhysicConfig::default();
    let net = config.rocket_thrust + config.rocket_gravity;
    let mut rocket = Rocket::new(Vec2::new(185.0, 500.0), &config);

    for _ in 0..100 {
        let before = rocket.velocity;
        rocket.step();
        assert!((rocket.velocity - (before + net)).abs() < EPSILON);
    }
}

#[test]
fn test_no_altitude_clamp() {
    // La montée est sans borne : la fusée sort de l'écran et continue.
    let config = PhysicConfig::default();
    let mut rocket = Rocket::new(Vec2::new(185.0, 500.0), &config);

    for _ in 0..2000 {
        rocket.step();
    }
    assert!(rocket.pos.y < -1000.0, "y = {}", rocket.pos.y);
}

// ==================================
// 2. Point d'échappement et géométrie
// ==================================

#[test]
fn test_exhaust_point_centered_at_base() {
    let config = PhysicConfig::default();
    let rocket = Rocket::new(Vec2::new(185.0, 500.0), &config);

    let exhaust = rocket.exhaust_point();
    assert_eq!(
        exhaust,
        Vec2::new(
            185.0 + config.rocket_width / 2.0,
            500.0 + config.rocket_height
        )
    );
}

#[test]
fn test_exhaust_point_follows_rocket() {
    let config = PhysicConfig::default();
    let mut rocket = Rocket::new(Vec2::new(185.0, 500.0), &config);

    for _ in 0..50 {
        rocket.step();
        let exhaust = rocket.exhaust_point();
        assert_eq!(exhaust.y, rocket.pos.y + rocket.size.y);
        assert_eq!(exhaust.x, rocket.pos.x + rocket.size.x / 2.0);
    }
}

#[test]
fn test_size_is_immutable_across_steps() {
    let config = PhysicConfig::default();
    let mut rocket = Rocket::new(Vec2::new(185.0, 500.0), &config);

    for _ in 0..100 {
        rocket.step();
    }
    assert_eq!(rocket.size, Vec2::new(30.0, 70.0));
}

// ==================================
// 3. Reload de configuration
// ==================================

#[test]
fn test_reload_config_preserves_kinematic_state() {
    let config = PhysicConfig::default();
    let mut rocket = Rocket::new(Vec2::new(185.0, 500.0), &config);

    for _ in 0..10 {
        rocket.step();
    }
    let (pos, vel) = (rocket.pos, rocket.velocity);

    let stronger = PhysicConfig {
        rocket_thrust: -0.5,
        ..PhysicConfig::default()
    };
    rocket.reload_config(&stronger);

    assert_eq!(rocket.pos, pos);
    assert_eq!(rocket.velocity, vel);

    // Le nouveau couple poussée/gravité s'applique dès le pas suivant.
    let before = rocket.velocity;
    rocket.step();
    assert!((rocket.velocity - (before - 0.5 + 0.05)).abs() < EPSILON);
}
