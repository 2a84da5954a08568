use grid_chess::chess::moves::Move;
use grid_chess::chess::piece::{Color, PieceKind};
use grid_chess::core::position::Position;
use grid_chess::core::square::Square;
use grid_chess::game::Game;
use grid_chess::notation::{move_name, parse_move, parse_square};
use grid_chess::rules::legal::legal_moves;
use grid_chess::rules::movegen::pseudo_moves;

fn sq(name: &str) -> Square {
    let mut c = name.chars();
    parse_square(c.next().unwrap(), c.next().unwrap()).unwrap()
}

fn pos(rows: [&str; 8], side: Color) -> Position {
    Position::from_rows(&rows, side).unwrap()
}

fn from_square(moves: &[Move], from: Square) -> Vec<Move> {
    moves.iter().copied().filter(|m| m.from == from).collect()
}

#[test]
fn starting_position_has_twenty_moves_for_each_side() {
    let start = Position::starting();
    assert_eq!(legal_moves(&start, Color::White).len(), 20);
    assert_eq!(legal_moves(&start, Color::Black).len(), 20);
}

#[test]
fn starting_moves_come_in_board_scan_order() {
    let names: Vec<String> = legal_moves(&Position::starting(), Color::White)
        .iter()
        .map(move_name)
        .collect();
    let expected = [
        "a2a3", "a2a4", "b2b3", "b2b4", "c2c3", "c2c4", "d2d3", "d2d4", "e2e3", "e2e4", "f2f3",
        "f2f4", "g2g3", "g2g4", "h2h3", "h2h4", "b1a3", "b1c3", "g1f3", "g1h3",
    ];
    assert_eq!(names, expected);
}

#[test]
fn rook_stops_before_friendly_blocker() {
    let p = pos(
        [
            "........", "........", "........", "........", "........", "........", "........",
            "R.P.....",
        ],
        Color::White,
    );
    let rook = from_square(&pseudo_moves(&p, Color::White), sq("a1"));
    let along_rank: Vec<Square> = rook
        .iter()
        .filter(|m| m.to.row() == 7)
        .map(|m| m.to)
        .collect();
    assert_eq!(along_rank, vec![sq("b1")]);
    // a2..a8 plus b1
    assert_eq!(rook.len(), 8);
}

#[test]
fn rook_captures_opponent_and_stops_there() {
    let p = pos(
        [
            "........", "........", "........", "........", "R..n....", "........", "........",
            "........",
        ],
        Color::White,
    );
    let rook = from_square(&pseudo_moves(&p, Color::White), sq("a4"));
    let along_rank: Vec<Square> = rook
        .iter()
        .filter(|m| m.to.row() == 4)
        .map(|m| m.to)
        .collect();
    assert_eq!(along_rank, vec![sq("b4"), sq("c4"), sq("d4")]);
    assert!(!rook.iter().any(|m| m.to == sq("e4")));
}

#[test]
fn queen_walks_diagonals_before_lines() {
    let p = pos(
        [
            "........", "........", "........", "........", "........", "........", "........",
            "Q.......",
        ],
        Color::White,
    );
    let queen = pseudo_moves(&p, Color::White);
    // From a1 only the up-right diagonal and the up/right lines are open.
    assert_eq!(queen.len(), 21);
    assert_eq!(queen[0].to, sq("b2"));
    assert_eq!(queen[6].to, sq("h8"));
    assert_eq!(queen[7].to, sq("a2"));
    assert_eq!(queen[20].to, sq("h1"));
}

#[test]
fn knight_jumps_skip_own_pieces_only() {
    let p = pos(
        [
            "........", "........", "........", "........", "........", "..p.....", "...P....",
            ".N......",
        ],
        Color::White,
    );
    let knight = from_square(&pseudo_moves(&p, Color::White), sq("b1"));
    let targets: Vec<Square> = knight.iter().map(|m| m.to).collect();
    // a3 empty, c3 enemy pawn, d2 own pawn
    assert_eq!(targets, vec![sq("a3"), sq("c3")]);
}

#[test]
fn pawn_promotes_to_queen_on_push_and_capture() {
    let p = pos(
        [
            "...r...k", "....P...", "........", "........", "........", "........", "........",
            "K.......",
        ],
        Color::White,
    );
    let pawn = from_square(&legal_moves(&p, Color::White), sq("e7"));
    assert_eq!(pawn.len(), 2);
    assert!(pawn.contains(&Move::new(sq("e7"), sq("e8")).with_promotion(PieceKind::Queen)));
    assert!(pawn.contains(&Move::new(sq("e7"), sq("d8")).with_promotion(PieceKind::Queen)));
}

#[test]
fn black_pawn_promotes_on_row_seven() {
    let p = pos(
        [
            "k.......", "........", "........", "........", "........", "........", "..p.....",
            "......K.",
        ],
        Color::Black,
    );
    let pawn = from_square(&pseudo_moves(&p, Color::Black), sq("c2"));
    assert_eq!(
        pawn,
        vec![Move::new(sq("c2"), sq("c1")).with_promotion(PieceKind::Queen)]
    );
}

#[test]
fn double_push_needs_both_squares_empty() {
    let p = pos(
        [
            "........", "........", "........", "........", "....n...", "...n....", "...PP...",
            "........",
        ],
        Color::White,
    );
    let moves = pseudo_moves(&p, Color::White);
    // d2 is blocked at once, e2 may step once but not twice.
    assert!(from_square(&moves, sq("d2")).is_empty());
    assert_eq!(
        from_square(&moves, sq("e2")),
        vec![Move::new(sq("e2"), sq("e3")), Move::new(sq("e2"), sq("d3"))]
    );
}

#[test]
fn no_en_passant_after_double_step() {
    let mut game = Game::new();
    for text in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        game.play(parse_move(text).unwrap()).unwrap();
    }
    let pawn = from_square(&game.legal_moves(Color::White), sq("e5"));
    assert!(!pawn.iter().any(|m| m.to == sq("d6")));
    assert_eq!(pawn, vec![Move::new(sq("e5"), sq("e6"))]);
}
