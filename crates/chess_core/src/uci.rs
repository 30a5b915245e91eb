use crate::{board::Position, error::AdapterError, RulesAdapter};

/// Finds the legal move whose coordinate notation matches `txt`.
///
/// Matching is case-insensitive and ignores surrounding whitespace, so human
/// input like ` E2E4 ` and GUI input like `e7e8q` both resolve.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<<Position as RulesAdapter>::Move> {
    let wanted = txt.trim().to_ascii_lowercase();
    if wanted.len() < 4 {
        return None;
    }
    pos.legal_moves()
        .into_iter()
        .find(|mv| pos.notation(mv) == wanted)
}

/// Applies the arguments of a UCI `position` command.
///
/// Supports `startpos` and `fen <fields...>`, each optionally followed by
/// `moves ...`. The position is left untouched if any part fails.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), AdapterError> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let (setup, moves) = match moves_at {
        Some(i) => (&args[..i], &args[i + 1..]),
        None => (args, &[][..]),
    };

    let mut next = match setup.split_first() {
        Some((&"fen", fields)) => Position::from_fen(&fields.join(" "))?,
        _ => Position::startpos(),
    };

    for txt in moves {
        let mv = parse_uci_move(&next, txt).ok_or_else(|| AdapterError::UnknownMove {
            text: (*txt).to_string(),
        })?;
        next.apply(&mv)?;
    }

    *pos = next;
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
