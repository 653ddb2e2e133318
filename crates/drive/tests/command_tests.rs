use drive::{Direction, DriveCommand, InvalidRemoteCommand};

#[test]
fn test_remote_literals_map_one_to_one() {
    let cases = [
        ("forward", DriveCommand::Forward),
        ("backward", DriveCommand::Backward),
        ("left", DriveCommand::Left),
        ("right", DriveCommand::Right),
        ("stop", DriveCommand::Stop),
    ];
    for (literal, command) in cases {
        assert_eq!(literal.parse::<DriveCommand>(), Ok(command));
        assert_eq!(command.to_string(), literal);
    }
}

#[test]
fn test_unknown_literals_are_rejected() {
    for literal in ["", "Forward", "STOP", "spin", "left "] {
        assert_eq!(
            literal.parse::<DriveCommand>(),
            Err(InvalidRemoteCommand(literal.to_string()))
        );
    }
}

#[test]
fn test_stop_setting_is_all_zero() {
    let stop = DriveCommand::Stop.setting();
    assert_eq!(stop.a.duty, 0);
    assert_eq!(stop.b.duty, 0);
    assert_eq!(stop.a.direction.levels(), (false, false));
    assert_eq!(stop.b.direction.levels(), (false, false));
}

#[test]
fn test_straight_settings_are_symmetric() {
    let forward = DriveCommand::Forward.setting();
    assert_eq!(forward.a, forward.b);
    assert_eq!(forward.a.duty, 90);
    assert_eq!(forward.a.direction, Direction::Forward);

    let backward = DriveCommand::Backward.setting();
    assert_eq!(backward.a, backward.b);
    assert_eq!(backward.a.duty, 90);
    assert_eq!(backward.a.direction, Direction::Reverse);
}

#[test]
fn test_turn_settings_have_small_duty_differential() {
    let left = DriveCommand::Left.setting();
    assert_eq!((left.a.duty, left.b.duty), (85, 90));
    assert_eq!(left.a.direction, Direction::Reverse);
    assert_eq!(left.b.direction, Direction::Forward);

    let right = DriveCommand::Right.setting();
    assert_eq!((right.a.duty, right.b.duty), (90, 85));
    assert_eq!(right.a.direction, Direction::Forward);
    assert_eq!(right.b.direction, Direction::Reverse);
}

#[test]
fn test_direction_levels() {
    assert_eq!(Direction::Forward.levels(), (true, false));
    assert_eq!(Direction::Reverse.levels(), (false, true));
    assert_eq!(Direction::Released.levels(), (false, false));
}
