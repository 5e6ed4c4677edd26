use super::*;

fn standing(wins: u32, matches_played: u32) -> StandingRecord {
    StandingRecord {
        id: 1,
        name: "Ada".to_string(),
        wins,
        matches_played,
    }
}

#[test]
fn test_losses_from_played_and_wins() {
    assert_eq!(standing(0, 0).losses(), 0);
    assert_eq!(standing(2, 5).losses(), 3);
}

#[test]
fn test_losses_floor_at_zero_when_wins_exceed_played() {
    // Records deserialized from elsewhere are not guaranteed consistent
    assert_eq!(standing(2, 1).losses(), 0);
}

#[test]
fn test_pairing_snapshot_and_membership() {
    let a = standing(1, 1);
    let b = StandingRecord {
        id: 4,
        name: "Di".to_string(),
        ..standing(1, 1)
    };
    let pairing = Pairing::from_records(&a, &b);

    assert_eq!(pairing.ids(), (1, 4));
    assert_eq!((pairing.name1.as_str(), pairing.name2.as_str()), ("Ada", "Di"));
    assert!(pairing.contains(4));
    assert!(!pairing.contains(2));
}
