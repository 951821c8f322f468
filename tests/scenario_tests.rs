use skillboard::{
    BoardError, CellState, CodeView, Orientation, Origin, Overlay, Scenario, SkillShape,
    SymbolView, DEMO_FLEET,
};

#[test]
fn test_demo_scenario() {
    let outcome = Scenario::demo().run().unwrap();
    let board = &outcome.board;

    // the main diagonal ship runs into the horizontal one at (2, 2)
    assert_eq!(outcome.placed.len(), 3);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].0, DEMO_FLEET[2]);
    assert_eq!(outcome.skipped[0].1, BoardError::ShipOverlaps { row: 2, col: 2 });

    assert_eq!(board.count(CellState::Ship), 4);
    assert_eq!(board.count(CellState::ShipUnderAreaEffect), 5);
    assert_eq!(board.count(CellState::AreaEffect), 26);
    assert_eq!(board.count(CellState::Water), 65);

    for (r, c) in [(2, 2), (2, 3), (2, 7), (5, 7), (6, 7)] {
        assert_eq!(board.cell(r, c).unwrap(), CellState::ShipUnderAreaEffect, "({}, {})", r, c);
    }
    for (r, c) in [(2, 1), (7, 7), (0, 9), (1, 8)] {
        assert_eq!(board.cell(r, c).unwrap(), CellState::Ship, "({}, {})", r, c);
    }

    let marked: Vec<usize> = outcome.reports.iter().map(|(_, r)| r.marked).collect();
    assert_eq!(marked, vec![9, 9, 13]);
}

#[test]
fn test_demo_board_codes() {
    let outcome = Scenario::demo().run().unwrap();
    let rows = [
        "0 0 0 0 0 0 0 0 0 3",
        "0 0 0 5 0 0 0 0 3 0",
        "0 3 8 8 5 0 0 8 0 0",
        "0 5 5 5 5 5 5 5 5 0",
        "0 0 5 0 0 5 5 5 5 5",
        "0 0 5 0 0 0 5 8 5 0",
        "5 5 5 5 5 0 0 8 0 0",
        "0 0 5 0 0 0 0 3 0 0",
        "0 0 5 0 0 0 0 0 0 0",
        "0 0 0 0 0 0 0 0 0 0",
    ];
    let expected: Vec<String> = rows.iter().map(|r| format!("{} ", r)).collect();
    assert_eq!(CodeView(&outcome.board).to_string(), expected.join("\n"));
}

#[test]
fn test_symbol_view() {
    let outcome = Scenario {
        placements: vec![],
        overlays: vec![Overlay::new(SkillShape::Cross, Origin::new(0, 0))],
    }
    .run()
    .unwrap();
    let text = SymbolView(&outcome.board).to_string();
    let first_line = text.lines().next().unwrap();
    assert_eq!(first_line, "* * * ~ ~ ~ ~ ~ ~ ~ ");
    assert_eq!(text.lines().count(), 10);
}

#[test]
fn test_out_of_bounds_placement_is_skipped() {
    let mut scenario = Scenario::demo();
    scenario.placements[0].col = 8;
    scenario.placements[0].orientation = Orientation::Horizontal;
    let outcome = scenario.run().unwrap();
    assert!(outcome
        .skipped
        .iter()
        .any(|(_, e)| *e == BoardError::ShipOutOfBounds));
}

#[test]
fn test_overlay_order_does_not_matter() {
    let forward = Scenario::demo().run().unwrap();
    let mut reversed = Scenario::demo();
    reversed.overlays.reverse();
    let backward = reversed.run().unwrap();
    assert_eq!(forward.board, backward.board);
}
