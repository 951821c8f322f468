#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use skillboard::{
    init_logging, print_board, print_mask, CellState, Origin, Scenario, ScenarioOutcome,
    SkillMask, SkillShape, BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use serde_json::json;

/// Place the demo fleet, stamp cone, cross and diamond skills, and print the board.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, value_name = "ROW,COL", allow_hyphen_values = true, help = "Origin of the cone skill (default 3,3)")]
    cone: Option<Origin>,
    #[arg(long, value_name = "ROW,COL", allow_hyphen_values = true, help = "Origin of the cross skill (default 6,2)")]
    cross: Option<Origin>,
    #[arg(long, value_name = "ROW,COL", allow_hyphen_values = true, help = "Origin of the diamond skill (default 4,7)")]
    diamond: Option<Origin>,
    /// Print symbols instead of numeric codes.
    #[arg(long)]
    symbols: bool,
    /// Print the three skill masks before the board.
    #[arg(long)]
    show_masks: bool,
    /// Print the result as JSON.
    #[arg(long, conflicts_with_all = ["symbols", "show_masks"])]
    json: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut scenario = Scenario::demo();
    for overlay in scenario.overlays.iter_mut() {
        let custom = match overlay.shape {
            SkillShape::Cone => cli.cone,
            SkillShape::Cross => cli.cross,
            SkillShape::Diamond => cli.diamond,
        };
        if let Some(origin) = custom {
            overlay.origin = origin;
        }
    }

    if cli.show_masks {
        for shape in SkillShape::ALL {
            let mask: SkillMask = shape.mask()?;
            print_mask(shape.name(), &mask);
        }
    }

    let outcome = scenario.run()?;

    if cli.json {
        println!("{}", serde_json::to_string(&outcome_json(&outcome))?);
    } else {
        print_board(&outcome.board, cli.symbols);
    }
    Ok(())
}

#[cfg(feature = "std")]
fn outcome_json(outcome: &ScenarioOutcome) -> serde_json::Value {
    let board = &outcome.board;
    let codes: Vec<u8> = board.cells().map(|(_, s)| s.code()).collect();
    let rows: Vec<&[u8]> = codes.chunks(BOARD_SIZE).collect();
    let skipped: Vec<_> = outcome
        .skipped
        .iter()
        .map(|(p, e)| json!({ "placement": p, "error": e.to_string() }))
        .collect();
    let overlays: Vec<_> = outcome
        .reports
        .iter()
        .map(|(o, report)| json!({ "shape": o.shape, "origin": o.origin, "report": report }))
        .collect();

    json!({
        "board": rows,
        "placed": outcome.placed.len(),
        "skipped": skipped,
        "overlays": overlays,
        "counts": {
            "water": board.count(CellState::Water),
            "ship": board.count(CellState::Ship),
            "area_effect": board.count(CellState::AreaEffect),
            "ship_under_area_effect": board.count(CellState::ShipUnderAreaEffect),
        },
    })
}
