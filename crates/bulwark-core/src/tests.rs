#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::{Damage, Health};
    use crate::enums::*;
    use crate::error::CommandError;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    /// Hosts feed commands as JSON, so the wire shape matters.
    #[test]
    fn test_player_command_json_shape() {
        let json = serde_json::to_string(&PlayerCommand::PlaceTower { x: 10.0, y: 20.0 }).unwrap();
        assert_eq!(json, r#"{"type":"PlaceTower","x":10.0,"y":20.0}"#);

        let parsed: PlayerCommand = serde_json::from_str(r#"{"type":"SpawnMonster"}"#).unwrap();
        assert_eq!(parsed, PlayerCommand::SpawnMonster);

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"AddWaypoint","x":1.5,"y":-2.0}"#).unwrap();
        assert_eq!(parsed, PlayerCommand::AddWaypoint { x: 1.5, y: -2.0 });
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        let parsed = serde_json::from_str::<PlayerCommand>(r#"{"type":"LaunchNukes"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_game_event_is_tagged() {
        let event = GameEvent::MonsterBreached {
            damage: 5,
            player_health: 95,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.starts_with(r#"{"type":"MonsterBreached""#), "got {json}");
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert_eq!(back.phase, GamePhase::Active);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_health_damage_saturates_at_zero() {
        let mut health = Health::new(30);
        health.apply(Damage::new(50));
        assert_eq!(health.value, 0);
        assert!(health.is_depleted());

        health.apply(Damage::new(50));
        assert_eq!(health.value, 0, "depleted health must not wrap");
    }

    #[test]
    fn test_health_partial_damage() {
        let mut health = Health::new(100);
        health.apply(Damage::new(5));
        assert_eq!(health.value, 95);
        assert!(!health.is_depleted());
    }

    #[test]
    fn test_position_distance_and_finiteness() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
        assert!(a.is_finite());
        assert!(!Position::new(f32::NAN, 0.0).is_finite());
        assert!(!Position::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_command_error_messages() {
        assert_eq!(
            CommandError::NoWaypoints.to_string(),
            "cannot spawn a monster: no waypoints exist"
        );
        assert_eq!(
            CommandError::GameOver("SpawnMonster").to_string(),
            "the session is over; reset before issuing SpawnMonster"
        );
    }
}
