//! Default low/high unit prices, in dollars.
//!
//! Regional callers are expected to supply their own table; these figures
//! track typical bagged-material and cedar retail prices.

use crate::models::materials::{CostRange, PriceTable};

fn range(low: f64, high: f64) -> CostRange {
    CostRange { low, high }
}

pub fn default_price_table() -> PriceTable {
    PriceTable {
        soil_per_cu_ft: range(1.50, 3.00),
        compost_per_cu_ft: range(1.00, 2.50),
        mulch_per_cu_ft: range(0.75, 2.00),
        lumber_per_board_foot: range(2.00, 4.50),
        screw_each: range(0.05, 0.10),
        irrigation_line_per_ft: range(0.30, 0.60),
        emitter_each: range(0.40, 0.90),
        liner_per_sq_ft: range(0.50, 1.20),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bracket_is_ordered() {
        let table = default_price_table();
        for bracket in [
            table.soil_per_cu_ft,
            table.compost_per_cu_ft,
            table.mulch_per_cu_ft,
            table.lumber_per_board_foot,
            table.screw_each,
            table.irrigation_line_per_ft,
            table.emitter_each,
            table.liner_per_sq_ft,
        ] {
            assert!(bracket.low > 0.0);
            assert!(bracket.low <= bracket.high);
        }
    }
}
