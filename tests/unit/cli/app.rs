use gambit::chess::{CastleSide, ChessError, PieceType, Square};
use gambit::cli::{parse_command, Command};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[cfg(test)]
mod accepted_forms_tests {
    use super::*;

    #[test]
    fn test_plain_coordinate_pair() {
        assert_eq!(
            parse_command("e2e4").unwrap(),
            Command::Move {
                from: sq("e2"),
                to: sq("e4"),
                promotion: None,
            }
        );
    }

    #[test]
    fn test_spelled_out_to_form() {
        assert_eq!(
            parse_command("e2 to e4").unwrap(),
            Command::Move {
                from: sq("e2"),
                to: sq("e4"),
                promotion: None,
            }
        );
    }

    #[test]
    fn test_case_and_surrounding_whitespace_ignored() {
        assert_eq!(
            parse_command("  E2E4  ").unwrap(),
            Command::Move {
                from: sq("e2"),
                to: sq("e4"),
                promotion: None,
            }
        );
        assert_eq!(parse_command("QUIT").unwrap(), Command::Quit);
    }

    #[test]
    fn test_promotion_suffix() {
        assert_eq!(
            parse_command("e7e8q").unwrap(),
            Command::Move {
                from: sq("e7"),
                to: sq("e8"),
                promotion: Some(PieceType::Queen),
            }
        );
        assert_eq!(
            parse_command("a2a1n").unwrap(),
            Command::Move {
                from: sq("a2"),
                to: sq("a1"),
                promotion: Some(PieceType::Knight),
            }
        );
    }

    #[test]
    fn test_castling_spellings() {
        for input in ["O-O", "o-o", "0-0"] {
            assert_eq!(
                parse_command(input).unwrap(),
                Command::Castle(CastleSide::Kingside),
                "'{input}' should castle kingside"
            );
        }
        for input in ["O-O-O", "o-o-o", "0-0-0"] {
            assert_eq!(
                parse_command(input).unwrap(),
                Command::Castle(CastleSide::Queenside),
                "'{input}' should castle queenside"
            );
        }
    }

    #[test]
    fn test_keyword_commands() {
        assert_eq!(parse_command("reset").unwrap(), Command::Reset);
        assert_eq!(parse_command("history").unwrap(), Command::History);
        assert_eq!(parse_command("moves").unwrap(), Command::History);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }
}

#[cfg(test)]
mod rejection_tests {
    use super::*;

    #[test]
    fn test_malformed_input_rejected() {
        for input in ["", "e2", "e2e", "e2 e4", "zzzz", "e9e4", "castle", "e2e4e6"] {
            assert!(
                matches!(parse_command(input), Err(ChessError::InvalidSquare(_))),
                "expected InvalidSquare for '{input}'"
            );
        }
    }

    #[test]
    fn test_bad_promotion_letter_rejected() {
        assert!(matches!(
            parse_command("e7e8x"),
            Err(ChessError::InvalidPromotion(_))
        ));
    }

    #[test]
    fn test_multibyte_input_rejected_without_panicking() {
        // These are 5 bytes but fewer characters; slicing by byte index
        // would split a character, so they must fall through to rejection
        for input in ["\u{265f}e4", "\u{00e9}2e4"] {
            assert!(
                matches!(parse_command(input), Err(ChessError::InvalidSquare(_))),
                "expected InvalidSquare for '{input}'"
            );
        }
    }
}
