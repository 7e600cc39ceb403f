//! Property tests for the score engine.

mod common;

use proptest::prelude::*;
use tennis_score::{advance, game::replay, Game, Player, Point, Score};

proptest! {
    /// A won game never changes.
    #[test]
    fn prop_game_is_absorbing(holder in common::player(), winners in common::winners(32)) {
        let start = Score::game(holder);
        prop_assert_eq!(replay(start, winners), start);
    }

    /// Same inputs, same output.
    #[test]
    fn prop_advance_is_deterministic(score in common::score(), winner in common::player()) {
        prop_assert_eq!(advance(score, winner), advance(score, winner));
    }

    /// Losing a point never hands the game to the loser.
    #[test]
    fn prop_point_winner_never_loses_game(score in common::live_score(), winner in common::player()) {
        let next = advance(score, winner);
        if let Some(game_winner) = next.winner() {
            prop_assert_eq!(game_winner, winner);
        }
    }

    /// From points, the winner's point goes up and the other is unchanged.
    #[test]
    fn prop_points_rule(points in common::points_data(), winner in common::player()) {
        match advance(Score::Points(points), winner) {
            Score::Points(next) => {
                prop_assert_eq!(Some(next[winner]), points[winner].next());
                prop_assert_eq!(next[winner.other()], points[winner.other()]);
            }
            Score::Forty(forty) => {
                prop_assert_eq!(points[winner], Point::Thirty);
                prop_assert_eq!(forty.player, winner);
                prop_assert_eq!(forty.other_point, points[winner.other()]);
            }
            other => prop_assert!(false, "unexpected successor {:?}", other),
        }
    }

    /// From forty, the holder wins or the opponent moves up a point.
    #[test]
    fn prop_forty_rule(forty in common::forty_data(), winner in common::player()) {
        let next = advance(Score::Forty(forty), winner);
        if winner == forty.player {
            prop_assert_eq!(next, Score::game(winner));
        } else {
            match forty.other_point.next() {
                Some(point) => prop_assert_eq!(next, Score::forty(forty.player, point)),
                None => prop_assert_eq!(next, Score::Deuce),
            }
        }
    }

    /// From deuce the winner always takes the advantage.
    #[test]
    fn prop_deuce_rule(winner in common::player()) {
        prop_assert_eq!(advance(Score::Deuce, winner), Score::advantage(winner));
    }

    /// From advantage: game for the holder, deuce otherwise.
    #[test]
    fn prop_advantage_rule(holder in common::player(), winner in common::player()) {
        let next = advance(Score::advantage(holder), winner);
        if winner == holder {
            prop_assert_eq!(next, Score::game(holder));
        } else {
            prop_assert_eq!(next, Score::Deuce);
        }
    }

    /// Every score reached from Love - Love is consistent with the points
    /// each player has won.
    #[test]
    fn prop_reachable_scores_match_point_counts(winners in common::winners(40)) {
        let mut game = Game::new();
        let mut won = [0u32; 2];
        for winner in winners {
            if game.is_over() {
                break;
            }
            game.point_won_by(winner).unwrap();
            won[winner as usize] += 1;

            let (one, two) = (won[0], won[1]);
            match game.score() {
                Score::Points(points) => {
                    prop_assert!(one <= 2 && two <= 2);
                    prop_assert_eq!(points.player_one.value(), [0u8, 15, 30][one as usize]);
                    prop_assert_eq!(points.player_two.value(), [0u8, 15, 30][two as usize]);
                }
                Score::Forty(forty) => {
                    let (leader, trailer) = match forty.player {
                        Player::PlayerOne => (one, two),
                        Player::PlayerTwo => (two, one),
                    };
                    prop_assert_eq!(leader, 3);
                    prop_assert!(trailer <= 2);
                    prop_assert_eq!(forty.other_point.value(), [0u8, 15, 30][trailer as usize]);
                }
                Score::Deuce => {
                    prop_assert!(one >= 3);
                    prop_assert_eq!(one, two);
                }
                Score::Advantage { player } => {
                    prop_assert!(one >= 3 && two >= 3);
                    let (ahead, behind) = match player {
                        Player::PlayerOne => (one, two),
                        Player::PlayerTwo => (two, one),
                    };
                    prop_assert_eq!(ahead, behind + 1);
                }
                Score::Game { player } => {
                    let (ahead, behind) = match player {
                        Player::PlayerOne => (one, two),
                        Player::PlayerTwo => (two, one),
                    };
                    prop_assert!(ahead >= 4);
                    prop_assert!(ahead >= behind + 2);
                }
            }
        }
    }

    /// Data-model values survive a JSON round trip.
    #[test]
    fn prop_score_json(score in common::score()) {
        let json = serde_json::to_string(&score).unwrap();
        let back: Score = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(score, back);
    }
}
