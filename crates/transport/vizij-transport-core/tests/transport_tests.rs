use vizij_transport_core::{
    center_viewport, new_player, pause, play, reset, seek, set_bound, set_bounds, set_direction,
    set_playback, set_speed, set_viewport, set_viewport_bound, Bound, Direction, ManualClock,
    Playback, Player,
};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn at(stamp: f64) -> Player {
    Player {
        stamp,
        ..Player::default()
    }
}

#[test]
fn new_player_is_stopped_with_zero_timescale() {
    let clock = ManualClock::new(0.0);
    let p = new_player(&clock);
    assert!(!p.running);
    assert_eq!(p.stamp, 0.0);
    assert_eq!(p.timescale, 0.0);

    // speed defaults to 1 only once play is called
    let p = play(&p, None, None);
    assert_eq!(p.timescale, 1.0);
}

#[test]
fn play_normalizes_speed_and_signs_by_direction() {
    let p = at(0.5);
    assert_eq!(play(&p, Some(-3.0), None).timescale, 3.0);
    assert_eq!(play(&p, Some(2.0), Some(Direction::Reverse)).timescale, -2.0);
    assert_eq!(play(&p, Some(-2.0), Some(Direction::Reverse)).timescale, -2.0);
    assert_eq!(play(&p, Some(0.5), Some(Direction::Forward)).timescale, 0.5);
}

#[test]
fn play_without_direction_keeps_current_direction() {
    let p = play(&at(0.5), Some(1.5), Some(Direction::Reverse));
    let p = play(&p, Some(4.0), None);
    assert_eq!(p.timescale, -4.0);
}

#[test]
fn reverse_play_from_start_moves_to_end() {
    let p = play(&at(0.0), None, Some(Direction::Reverse));
    assert_eq!(p.stamp, 1.0);
    assert_eq!(p.direction(), Direction::Reverse);

    let p = play(&at(0.0005), None, Some(Direction::Reverse));
    assert_eq!(p.stamp, 1.0);
}

#[test]
fn reverse_play_from_middle_stays() {
    let p = play(&at(0.5), None, Some(Direction::Reverse));
    assert_eq!(p.stamp, 0.5);
    assert!(p.running);
}

#[test]
fn reverse_play_respects_custom_bounds() {
    let clock = ManualClock::new(0.0);
    let p = new_player(&clock);
    let p = set_bounds(&p, [0.2, 0.8]);
    let p = reset(&p, &clock, Some(0.2));
    let p = play(&p, None, Some(Direction::Reverse));
    assert_eq!(p.stamp, 0.8);
}

#[test]
fn forward_play_from_end_moves_to_start() {
    assert_eq!(play(&at(1.0), None, Some(Direction::Forward)).stamp, 0.0);
    assert_eq!(play(&at(0.9995), None, None).stamp, 0.0);

    let p = set_bounds(&at(0.8), [0.2, 0.8]);
    assert_eq!(play(&p, None, None).stamp, 0.2);
}

#[test]
fn forward_play_just_outside_tolerance_stays() {
    let p = play(&at(0.998), None, None);
    assert_eq!(p.stamp, 0.998);
}

#[test]
fn play_outside_bounds_does_not_jump() {
    let p = set_bounds(&at(0.1), [0.4, 0.6]);
    assert_eq!(play(&p, None, None).stamp, 0.1);
    assert_eq!(play(&p, None, Some(Direction::Reverse)).stamp, 0.1);
}

#[test]
fn once_mode_replays_from_opposite_end() {
    let p = set_playback(&set_bounds(&at(0.3), [0.3, 0.7]), Playback::Once);
    let p = play(&p, None, Some(Direction::Reverse));
    assert_eq!(p.stamp, 0.7);

    let p = set_playback(&set_bounds(&at(0.7), [0.3, 0.7]), Playback::Once);
    let p = play(&p, None, Some(Direction::Forward));
    assert_eq!(p.stamp, 0.3);
}

#[test]
fn pause_always_clears_running_and_timescale() {
    let p = play(&at(0.4), Some(2.0), Some(Direction::Reverse));
    let paused = pause(&p);
    assert!(!paused.running);
    assert_eq!(paused.timescale, 0.0);
    assert_eq!(paused.stamp, 0.4);

    let again = pause(&paused);
    assert!(!again.running);
    assert_eq!(again.timescale, 0.0);
}

#[test]
fn set_bounds_touches_only_bounds() {
    let p = play(&at(0.4), Some(2.0), None);
    let q = set_bounds(&p, [0.1, 0.9]);
    assert_eq!(q.bounds, [0.1, 0.9]);
    assert_eq!(
        q,
        Player {
            bounds: [0.1, 0.9],
            ..p
        }
    );
    // source value is untouched
    assert_eq!(p.bounds, [0.0, 1.0]);
}

#[test]
fn set_viewport_and_duration_are_plain_replacements() {
    let p = set_viewport(&at(0.4), [0.3, 0.5]);
    assert_eq!(p.viewport, [0.3, 0.5]);
    let p = vizij_transport_core::set_duration(&p, 250.0);
    assert_eq!(p.duration, 250.0);
    assert_eq!(p.stamp, 0.4);
}

#[test]
fn reset_sets_stamp_and_syncs_times() {
    let clock = ManualClock::new(10.0);
    let p = new_player(&clock);
    clock.advance(900.0);
    let p = reset(&p, &clock, Some(0.7));
    assert_eq!(p.stamp, 0.7);
    assert_eq!(p.current_time, p.previous_time);
    assert_eq!(p.current_time, 910.0);
}

#[test]
fn seek_refits_viewport_around_stamp() {
    let clock = ManualClock::new(0.0);
    let p = set_viewport(&new_player(&clock), [0.0, 0.2]);

    let p = seek(&p, &clock, 0.5);
    assert_eq!(p.stamp, 0.5);
    approx(p.viewport[0], 0.4, 1e-12);
    approx(p.viewport[1], 0.6, 1e-12);

    let p = seek(&p, &clock, 0.95);
    approx(p.viewport[0], 0.8, 1e-12);
    assert_eq!(p.viewport[1], 1.0);

    let p = seek(&p, &clock, 0.0);
    assert_eq!(p.viewport[0], 0.0);
    approx(p.viewport[1], 0.2, 1e-12);
}

#[test]
fn center_viewport_defaults_to_playhead() {
    let clock = ManualClock::new(0.0);
    let p = set_viewport(&at(0.5), [0.0, 0.4]);
    let p = center_viewport(&p, &clock, None);
    assert_eq!(p.stamp, 0.5);
    approx(p.viewport[0], 0.3, 1e-12);
    approx(p.viewport[1], 0.7, 1e-12);
}

#[test]
fn speed_and_direction_setters_compose() {
    let p = set_speed(&at(0.5), -2.0);
    assert_eq!(p.timescale, 2.0);

    let p = set_direction(&p, Direction::Reverse);
    assert_eq!(p.timescale, -2.0);

    let p = set_speed(&p, 3.0);
    assert_eq!(p.timescale, -3.0);

    let p = vizij_transport_core::reverse(&p);
    assert_eq!(p.timescale, 3.0);
    assert_eq!(vizij_transport_core::timescale(&p), 3.0);
}

#[test]
fn single_bound_edits_keep_ranges_ordered() {
    let p = set_bounds(&at(0.5), [0.2, 0.6]);
    assert_eq!(set_bound(&p, Bound::Start, 0.3).bounds, [0.3, 0.6]);
    assert_eq!(set_bound(&p, Bound::Start, 0.9).bounds, [0.6, 0.9]);
    assert_eq!(set_bound(&p, Bound::End, 0.1).bounds, [0.1, 0.2]);

    let p = set_viewport(&p, [0.25, 0.75]);
    assert_eq!(set_viewport_bound(&p, Bound::End, 0.5).viewport, [0.25, 0.5]);
    assert_eq!(set_viewport_bound(&p, Bound::Start, 0.8).viewport, [0.75, 0.8]);
}
