//! Tests for board rendering onto the in-memory surface.

use strictly_moves::{
    Board, BoardRenderer, BoardSurface, BoardUpdate, ErrorPresenter, GameEndHandler,
    PresentationSurface, Region, SquareId,
};

fn ids(row: &[&str]) -> Vec<SquareId> {
    row.iter().map(|&id| SquareId::from(id)).collect()
}

fn surface() -> BoardSurface {
    BoardSurface::from_layout(vec![ids(&["a1", "a2"]), ids(&["b1", "b2"])])
}

fn glyph(surface: &BoardSurface, id: &str) -> String {
    surface
        .square(&id.into())
        .expect("Square missing")
        .glyph()
        .to_string()
}

fn full_board() -> Board {
    Board::new(vec![
        vec![("a1".into(), "R".into()), ("a2".into(), ".".into())],
        vec![("b1".into(), "p".into()), ("b2".into(), "K".into())],
    ])
}

#[test]
fn test_full_board_sets_every_glyph() {
    let mut surface = surface();
    let written = BoardRenderer::apply(&mut surface, &BoardUpdate::Full(full_board()));

    assert_eq!(written, 4);
    assert_eq!(glyph(&surface, "a1"), "R");
    assert_eq!(glyph(&surface, "a2"), ".");
    assert_eq!(glyph(&surface, "b1"), "p");
    assert_eq!(glyph(&surface, "b2"), "K");
}

#[test]
fn test_full_board_is_idempotent() {
    let mut once = surface();
    BoardRenderer::apply(&mut once, &BoardUpdate::Full(full_board()));

    let mut twice = surface();
    BoardRenderer::apply(&mut twice, &BoardUpdate::Full(full_board()));
    BoardRenderer::apply(&mut twice, &BoardUpdate::Full(full_board()));

    assert_eq!(once.rows(), twice.rows());
}

#[test]
fn test_point_update_touches_two_squares() {
    let mut surface = surface();
    BoardRenderer::apply(&mut surface, &BoardUpdate::Full(full_board()));

    let update = BoardUpdate::Point {
        from: "a1".into(),
        to: "a2".into(),
        from_glyph: ".".into(),
        to_glyph: "R".into(),
    };
    let written = BoardRenderer::apply(&mut surface, &update);

    assert_eq!(written, 2);
    assert_eq!(glyph(&surface, "a1"), ".");
    assert_eq!(glyph(&surface, "a2"), "R");
    assert_eq!(glyph(&surface, "b1"), "p");
    assert_eq!(glyph(&surface, "b2"), "K");
}

#[test]
fn test_unknown_squares_skipped() {
    let mut surface = surface();
    let board = Board::new(vec![vec![("a1".into(), "Q".into()), ("z9".into(), "R".into())]]);
    let written = BoardRenderer::apply(&mut surface, &BoardUpdate::Full(board));

    assert_eq!(written, 1);
    assert_eq!(glyph(&surface, "a1"), "Q");
    assert!(surface.square(&"z9".into()).is_none());
}

#[test]
fn test_freeze_disables_every_square() {
    let mut surface = surface();
    BoardRenderer::freeze(&mut surface);
    assert!(surface.rows().iter().flatten().all(|s| !*s.interactive()));
}

#[test]
fn test_surface_from_board_keeps_layout() {
    let surface = BoardSurface::from_board(&full_board());
    assert_eq!(surface.rows().len(), 2);
    assert_eq!(surface.square_ids(), ids(&["a1", "a2", "b1", "b2"]));
    assert_eq!(glyph(&surface, "b2"), "K");
}

#[test]
fn test_error_presenter_show_and_clear() {
    let mut surface = surface();
    ErrorPresenter::show(&mut surface, "illegal move");
    assert_eq!(surface.text(Region::Error), "illegal move");
    ErrorPresenter::clear(&mut surface);
    assert_eq!(surface.text(Region::Error), "");
}

#[test]
fn test_game_end_renders_and_freezes() {
    let mut surface = surface();
    surface.set_text(Region::Error, "stale");
    GameEndHandler::finish(&mut surface, "white", Some(&BoardUpdate::Full(full_board())));

    assert_eq!(
        surface.text(Region::Winner),
        "white wins!!! Refresh to play again."
    );
    assert_eq!(surface.text(Region::Error), "");
    assert_eq!(glyph(&surface, "b2"), "K");
    assert!(surface.rows().iter().flatten().all(|s| !*s.interactive()));
}
