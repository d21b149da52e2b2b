#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::SimCommand;
    use crate::config::*;
    use crate::constants::*;
    use crate::damage::apply_percentage_modifiers;
    use crate::enums::{AnimationClip, PopupState};
    use crate::events::SimEvent;
    use crate::types::*;

    // ---- Facing ----

    #[test]
    fn test_facing_between_cardinal_directions() {
        let origin = DVec2::ZERO;
        assert_eq!(facing_between(origin, DVec2::new(0.0, 10.0), 99), 0);
        assert_eq!(facing_between(origin, DVec2::new(10.0, 0.0), 99), 64);
        assert_eq!(facing_between(origin, DVec2::new(0.0, -10.0), 99), 128);
        assert_eq!(facing_between(origin, DVec2::new(-10.0, 0.0), 99), 192);
    }

    #[test]
    fn test_facing_between_same_point_keeps_current() {
        let p = DVec2::new(5.0, 5.0);
        assert_eq!(facing_between(p, p, 37), 37);
    }

    #[test]
    fn test_tick_facing_steps_by_turn_speed() {
        assert_eq!(tick_facing(0, 64, 8), 8);
        assert_eq!(tick_facing(64, 0, 8), 56);
    }

    #[test]
    fn test_tick_facing_takes_shorter_arc_across_north() {
        // 250 -> 20 is 26 steps clockwise through north, 230 the other way
        assert_eq!(tick_facing(250, 20, 8), 2);
        // 10 -> 200 is 66 steps counter-clockwise
        assert_eq!(tick_facing(10, 200, 8), 2);
    }

    #[test]
    fn test_tick_facing_snaps_within_reach() {
        assert_eq!(tick_facing(250, 2, 8), 2);
        assert_eq!(tick_facing(5, 0, 8), 0);
        assert_eq!(tick_facing(0, 0, 8), 0);
    }

    #[test]
    fn test_normalize_facing_wraps_negative() {
        assert_eq!(normalize_facing(-1), FACING_STEPS - 1);
        assert_eq!(normalize_facing(FACING_STEPS), 0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Damage ----

    #[test]
    fn test_percentage_modifiers_identity_and_halving() {
        assert_eq!(apply_percentage_modifiers(100, []), 100);
        assert_eq!(apply_percentage_modifiers(100, [FULL_DAMAGE_PERCENT]), 100);
        assert_eq!(apply_percentage_modifiers(40, [50]), 20);
    }

    #[test]
    fn test_percentage_modifiers_compose_multiplicatively() {
        assert_eq!(apply_percentage_modifiers(100, [50, 50]), 25);
        assert_eq!(apply_percentage_modifiers(100, [200, 50]), 100);
    }

    #[test]
    fn test_percentage_modifiers_truncate_once() {
        // 33 * 0.5 = 16.5 -> 16
        assert_eq!(apply_percentage_modifiers(33, [50]), 16);
        // Exact product 15 * 0.5 * 0.5 = 3.75 -> 3, independent of order
        assert_eq!(apply_percentage_modifiers(15, [50, 50]), 3);
        assert_eq!(apply_percentage_modifiers(7, [150, 50]), 5);
        assert_eq!(apply_percentage_modifiers(7, [50, 150]), 5);
    }

    #[test]
    fn test_percentage_modifier_zero_nullifies() {
        assert_eq!(apply_percentage_modifiers(500, [0]), 0);
    }

    // ---- Enums ----

    #[test]
    fn test_clip_names() {
        assert_eq!(AnimationClip::Opening.name(), "opening");
        assert_eq!(AnimationClip::Idle.name(), "idle");
        assert_eq!(AnimationClip::Closing.name(), "closing");
        assert_eq!(AnimationClip::ClosedIdle.name(), "closed-idle");
        assert_eq!(AnimationClip::Make.to_string(), "make");
    }

    #[test]
    fn test_clip_serializes_as_clip_name() {
        let json = serde_json::to_string(&AnimationClip::ClosedIdle).unwrap();
        assert_eq!(json, "\"closed-idle\"");
    }

    #[test]
    fn test_popup_state_defaults_open() {
        assert_eq!(PopupState::default(), PopupState::Open);
    }

    #[test]
    fn test_event_is_tagged() {
        let event = SimEvent::MountStateChanged {
            unit: UnitId(3),
            from: PopupState::Transitioning,
            to: PopupState::Closed,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"MountStateChanged\""), "{json}");
    }

    #[test]
    fn test_command_parses_from_json() {
        let json = r#"{"type":"SpawnTurret","position":[10.0,-4.0],"skip_make_animation":true}"#;
        let command: SimCommand = serde_json::from_str(json).unwrap();
        match command {
            SimCommand::SpawnTurret {
                position,
                skip_make_animation,
            } => {
                assert_eq!(position, DVec2::new(10.0, -4.0));
                assert!(skip_make_animation);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    // ---- Config ----

    #[test]
    fn test_mount_config_defaults() {
        let config = PopupMountConfig::default();
        assert_eq!(config.close_delay, 125);
        assert_eq!(config.default_facing, 0);
        assert_eq!(config.closed_damage_multiplier, 50);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let def = PopupTurretDef::from_json("{}").unwrap();
        assert_eq!(def, PopupTurretDef::default());
        let defs = UnitDefs::from_json("{}").unwrap();
        assert_eq!(defs, UnitDefs::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let def = PopupTurretDef::from_json(r#"{"mount":{"close_delay":60}}"#).unwrap();
        assert_eq!(def.mount.close_delay, 60);
        assert_eq!(def.mount.closed_damage_multiplier, 50);
        assert_eq!(def.turret, TurretConfig::default());
    }

    #[test]
    fn test_negative_close_delay_rejected_by_parser() {
        let err = PopupTurretDef::from_json(r#"{"mount":{"close_delay":-5}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn test_negative_closed_multiplier_rejected() {
        let err =
            PopupTurretDef::from_json(r#"{"mount":{"closed_damage_multiplier":-1}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "closed_damage_multiplier",
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_range_rest_facing_rejected() {
        let err = PopupTurretDef::from_json(r#"{"mount":{"default_facing":256}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "default_facing",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_turn_speed_rejected() {
        let err = PopupTurretDef::from_json(r#"{"turret":{"turn_speed":0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "turn_speed", .. }));
    }

    #[test]
    fn test_zero_length_opening_rejected() {
        let err = PopupTurretDef::from_json(r#"{"animation":{"opening_ticks":0}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "opening_ticks",
                ..
            }
        ));
    }

    #[test]
    fn test_bad_weapon_range_rejected() {
        let err = PopupTurretDef::from_json(
            r#"{"armament":{"range":0.0,"damage":10,"reload_ticks":5}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "range", .. }));
    }

    #[test]
    fn test_raider_speed_rejected_through_unit_defs() {
        let err = UnitDefs::from_json(r#"{"raider":{"speed":0.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "speed", .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = UnitDefs::load(std::path::Path::new("/nonexistent/bulwark/defs.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_clip_lengths() {
        let animation = AnimationConfig::default();
        assert_eq!(animation.length_of(AnimationClip::Opening), Some(DEFAULT_OPENING_TICKS));
        assert_eq!(animation.length_of(AnimationClip::Closing), Some(DEFAULT_CLOSING_TICKS));
        assert_eq!(animation.length_of(AnimationClip::Idle), None);
        assert_eq!(animation.length_of(AnimationClip::ClosedIdle), None);
    }
}
