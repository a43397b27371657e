//! Terminal presentation of the search state. The engine only exposes
//! plain data; everything drawn here could equally feed a map renderer.

use crate::area::SearchArea;
use crate::common::SearchEvidence;

/// Print the per-area belief table with geometry and the effectiveness
/// assigned in the last round.
pub fn print_area_table(areas: &[SearchArea]) {
    println!("\n{:>4}  {:>16}  {:>11}  {:>7}", "Area", "Bounds", "Probability", "SEP");
    for (i, area) in areas.iter().enumerate() {
        let (ulx, uly) = area.upper_left();
        let (lrx, lry) = area.lower_right();
        println!(
            "{:>4}  ({:>3},{:>3})-({:>3},{:>3})  {:>11.4}  {:>7.3}",
            i + 1,
            ulx,
            uly,
            lrx,
            lry,
            area.probability,
            area.effectiveness
        );
    }
}

/// Print the outcome of a search round.
pub fn print_round_result(round: usize, area_number: usize, evidence: &SearchEvidence) {
    if evidence.is_found() {
        println!(
            "\nRound {}: target FOUND in area {} after examining {} cells!",
            round,
            area_number,
            evidence.examined.len()
        );
    } else {
        println!(
            "\nRound {}: searched {} cells of area {}, nothing found.",
            round,
            evidence.examined.len(),
            area_number
        );
    }
}

/// Print the last-known anchor, shown from the start of the exercise.
pub fn print_last_known(global: (i32, i32)) {
    println!("+ = Last known position at ({}, {})", global.0, global.1);
}

/// Print the actual position, revealed once the search concludes.
pub fn print_actual(global: (i32, i32)) {
    println!("* = Actual position was ({}, {})", global.0, global.1);
}
