use super::*;
use crate::scheduler::compute_schedule;

#[test]
fn test_pairing_display_and_other_side() {
    let pairing = Pairing {
        player: 2,
        opponent: 7,
    };
    assert_eq!(pairing.to_string(), "2 vs 7");
    assert_eq!(pairing.other(2), Some(7));
    assert_eq!(pairing.other(7), Some(2));
    assert_eq!(pairing.other(3), None);
    assert!(pairing.involves(7));
}

#[test]
fn test_report_has_one_line_per_round() {
    let schedule = compute_schedule(4).unwrap();
    assert_eq!(
        schedule.generate_report(),
        "Round 1 : 1 vs 3 2 vs 4\nRound 2 : 1 vs 4 2 vs 3\nRound 3 : 1 vs 2 3 vs 4\n"
    );
    assert_eq!(schedule.to_string(), schedule.generate_report());
}

#[test]
fn test_round_lookup() {
    let schedule = compute_schedule(6).unwrap();
    assert_eq!(schedule.round(1).unwrap().number, 1);
    assert_eq!(schedule.round(5).unwrap().number, 5);
    assert_eq!(
        schedule.round(0),
        Err(ScheduleError::RoundOutOfRange { round: 0, rounds: 5 })
    );
    assert!(schedule.round(6).is_err());
}

#[test]
fn test_opponents_of_player() {
    let schedule = compute_schedule(4).unwrap();
    assert_eq!(schedule.opponents_of(1).unwrap(), vec![Some(3), Some(4), Some(2)]);
    assert_eq!(schedule.opponents_of(4).unwrap(), vec![Some(2), Some(1), Some(3)]);
}

#[test]
fn test_idle_rounds_with_bye() {
    let schedule = compute_schedule(5).unwrap();
    assert_eq!(schedule.bye(), Some(6));
    assert_eq!(schedule.idle_rounds(3).unwrap(), vec![1]);
    assert_eq!(schedule.idle_rounds(5).unwrap(), vec![5]);

    let opponents = schedule.opponents_of(3).unwrap();
    assert_eq!(opponents[0], None);
    assert!(opponents[1..].iter().all(Option::is_some));
}

#[test]
fn test_bye_is_not_a_known_player() {
    let schedule = compute_schedule(5).unwrap();
    assert_eq!(
        schedule.opponents_of(6),
        Err(ScheduleError::UnknownPlayer {
            player: 6,
            players: 5
        })
    );
    assert!(schedule.idle_rounds(0).is_err());
}

#[test]
fn test_even_schedule_has_no_idle_players() {
    let schedule = compute_schedule(8).unwrap();
    assert!(schedule.rounds.iter().all(|round| round.idle.is_none()));
    assert!(schedule.idle_rounds(1).unwrap().is_empty());
}
