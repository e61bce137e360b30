#[cfg(test)]
mod tests {
    use crate::commands::PlayerIntent;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::player::Player;
    use crate::state::GameStateSnapshot;
    use crate::types::{deadline_reached, Position, SimClock, Velocity, ViewPoint};

    /// Intents arrive from the input collaborator as internally tagged JSON.
    #[test]
    fn test_intent_json_shape() {
        let intent: PlayerIntent =
            serde_json::from_str(r#"{"type":"ShiftDimension","direction":-1}"#).unwrap();
        assert_eq!(intent, PlayerIntent::ShiftDimension { direction: -1 });

        let intent: PlayerIntent =
            serde_json::from_str(r#"{"type":"AimAt","x":120.5,"y":80.0}"#).unwrap();
        assert_eq!(intent, PlayerIntent::AimAt { x: 120.5, y: 80.0 });

        let json = serde_json::to_string(&PlayerIntent::Fire).unwrap();
        assert_eq!(json, r#"{"type":"Fire"}"#);
    }

    #[test]
    fn test_event_json_tagged() {
        let event = SimEvent::WaveCleared {
            level: 2,
            wave_size: 7,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"WaveCleared""#));
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_default_snapshot_is_menu() {
        let snapshot = GameStateSnapshot::default();
        assert_eq!(snapshot.phase, GamePhase::Menu);
        assert!(snapshot.enemies.is_empty());
        assert!(serde_json::to_string(&snapshot).is_ok());
    }

    #[test]
    fn test_world_to_view_translation() {
        let pos = Position::new(-50.0, 20.0, 99.0, -40.0);
        let view = pos.to_view();
        assert_eq!(view.x, 350.0);
        assert_eq!(view.y, 320.0);

        // Depth and dimension never enter planar math.
        let other = Position::new(-50.0, 20.0, -500.0, 1000.0);
        assert_eq!(pos.planar_distance_to(&other), 0.0);
    }

    #[test]
    fn test_view_center() {
        let center = ViewPoint::center();
        assert_eq!(center.x, VIEW_OFFSET_X);
        assert_eq!(center.y, VIEW_OFFSET_Y);
        assert!(center.is_finite());
        assert!(!ViewPoint::new(f64::NAN, 0.0).is_finite());
    }

    #[test]
    fn test_velocity_from_angle() {
        let vel = Velocity::from_angle(std::f64::consts::FRAC_PI_2, 4.0);
        assert!(vel.x.abs() < 1e-12);
        assert!((vel.y - 4.0).abs() < 1e-12);
        assert!((vel.speed() - 4.0).abs() < 1e-12);
        assert!((vel.heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_clock_advance() {
        let mut clock = SimClock::default();
        clock.advance(16.0);
        clock.advance(32.0);
        assert_eq!(clock.tick, 2);
        assert_eq!(clock.now_ms, 48.0);
    }

    #[test]
    fn test_deadline_reached_tolerates_rounding() {
        let step = 5000.0 / 3.0;
        let mut clock = SimClock::default();
        for _ in 0..3 {
            clock.advance(step);
        }
        assert!(deadline_reached(clock.now_ms, 5000.0));
        assert!(!deadline_reached(4999.0, 5000.0));
        assert!(deadline_reached(5000.5, 5000.0));
    }

    #[test]
    fn test_time_warp_toggle() {
        assert_eq!(TimeWarp::default().factor(), 1.0);
        assert_eq!(TimeWarp::Normal.toggled(), TimeWarp::Slow);
        assert_eq!(TimeWarp::Slow.factor(), 0.5);
        assert_eq!(TimeWarp::Normal.toggled().toggled(), TimeWarp::Normal);
    }

    #[test]
    fn test_player_lethal_damage_clamps() {
        let mut player = Player::new(PLAYER_MAX_HEALTH, PLAYER_MAX_AMMO);
        assert!(!player.apply_damage(90.0, 100.0));
        assert_eq!(player.health.current(), 10.0);

        assert!(player.apply_damage(15.0, 250.0));
        assert_eq!(player.health.current(), 0.0);
        assert_eq!(player.last_damaged_at_ms, Some(250.0));
        assert!(player.is_dead());
    }

    #[test]
    fn test_player_score_and_level() {
        let mut player = Player::new(PLAYER_MAX_HEALTH, PLAYER_MAX_AMMO);
        assert_eq!(player.level(), 1);
        player.award_kill();
        player.award_kill();
        assert_eq!(player.score(), 2 * KILL_SCORE);
        assert_eq!(player.advance_level(), 2);
    }

    #[test]
    fn test_player_w_unbounded() {
        let mut player = Player::new(PLAYER_MAX_HEALTH, PLAYER_MAX_AMMO);
        for _ in 0..100 {
            player.nudge_w(PLAYER_W_STEP);
        }
        assert_eq!(player.position.w, 500.0);
        player.nudge_w(f64::NAN);
        assert_eq!(player.position.w, 500.0);
    }
}
