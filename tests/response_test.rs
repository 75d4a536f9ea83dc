//! Tests for move response parsing and classification.

use strictly_moves::{Board, BoardPayload, Glyph, MoveResponse, RawMoveResponse, TransportErrorKind};

#[test]
fn test_error_response() {
    let response = MoveResponse::from_json(r#"{"err": "illegal move"}"#).expect("Parse failed");
    assert_eq!(
        response,
        MoveResponse::ValidationError {
            message: "illegal move".to_string()
        }
    );
}

#[test]
fn test_error_wins_over_winner() {
    let response = MoveResponse::from_json(r#"{"err": "not your turn", "winner": "white"}"#)
        .expect("Parse failed");
    assert!(response.is_validation_error());
}

#[test]
fn test_empty_error_falls_through() {
    let response = MoveResponse::from_json(
        r#"{"err": "", "next_player": "black", "board": [[["a1", "R"]]]}"#,
    )
    .expect("Parse failed");
    assert!(matches!(response, MoveResponse::BoardUpdate { .. }));
}

#[test]
fn test_winner_with_board() {
    let response = MoveResponse::from_json(r#"{"winner": "white", "board": [[["a1", "K"], ["a2", "."]]]}"#)
        .expect("Parse failed");
    match response {
        MoveResponse::GameEnd { winner, board } => {
            assert_eq!(winner, "white");
            match board {
                Some(BoardPayload::Snapshot(board)) => assert_eq!(board.len(), 2),
                other => panic!("Expected snapshot, got {:?}", other),
            }
        }
        other => panic!("Expected game end, got {:?}", other),
    }
}

#[test]
fn test_winner_without_board() {
    let response = MoveResponse::from_json(r#"{"winner": "black"}"#).expect("Parse failed");
    assert_eq!(
        response,
        MoveResponse::GameEnd {
            winner: "black".to_string(),
            board: None
        }
    );
}

#[test]
fn test_board_update() {
    let response = MoveResponse::from_json(
        r#"{"next_player": "black", "board": [[["a1", "R"], ["a2", "."]]]}"#,
    )
    .expect("Parse failed");
    let expected_board = Board::new(vec![vec![
        ("a1".into(), "R".into()),
        ("a2".into(), ".".into()),
    ]]);
    assert_eq!(
        response,
        MoveResponse::BoardUpdate {
            next_player: Some("black".to_string()),
            board: expected_board,
        }
    );
}

#[test]
fn test_point_update() {
    let response =
        MoveResponse::from_json(r#"{"from_image": ".", "to_image": "R"}"#).expect("Parse failed");
    assert_eq!(
        response,
        MoveResponse::PointUpdate {
            next_player: None,
            from_glyph: ".".into(),
            to_glyph: "R".into(),
        }
    );
}

#[test]
fn test_snapshot_preferred_over_delta() {
    let response = MoveResponse::from_json(
        r#"{"board": [[["a1", "R"]]], "from_image": ".", "to_image": "R"}"#,
    )
    .expect("Parse failed");
    assert!(matches!(response, MoveResponse::BoardUpdate { .. }));
}

#[test]
fn test_unknown_fields_ignored() {
    let raw = RawMoveResponse::from_json(r#"{"from_image": "x", "to_image": "y", "extra": 1}"#)
        .expect("Parse failed");
    assert_eq!(raw.from_image, Some(Glyph::from("x")));
}

#[test]
fn test_no_board_data_is_malformed() {
    let err = MoveResponse::from_json(r#"{"next_player": "white"}"#).expect_err("Should fail");
    assert!(matches!(err.kind(), TransportErrorKind::Malformed(_)));
}

#[test]
fn test_half_delta_is_malformed() {
    let err = MoveResponse::from_json(r#"{"from_image": "."}"#).expect_err("Should fail");
    assert!(matches!(err.kind(), TransportErrorKind::Malformed(_)));
}

#[test]
fn test_invalid_json_is_malformed() {
    let err = MoveResponse::from_json("<html>500</html>").expect_err("Should fail");
    assert!(matches!(err.kind(), TransportErrorKind::Malformed(_)));
}
