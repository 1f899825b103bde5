//! Credit portfolio fixtures.

use chrono::NaiveDate;
use risk_core::model::{CreditMetrics, CreditRatingBucket, MigrationDay, SectorExposure, TopExposure};
use risk_core::types::CreditRating;

use crate::generator::{date_window, SyntheticRng};

/// Rated book, best grade first.
pub fn portfolio_by_rating() -> Vec<CreditRatingBucket> {
    let rows: [(CreditRating, u64, f64, f64, u32); 8] = [
        (CreditRating::AAA, 1_200_000_000, 3.8, 0.01, 12),
        (CreditRating::AA, 3_800_000_000, 12.2, 0.02, 45),
        (CreditRating::A, 7_600_000_000, 24.4, 0.05, 134),
        (CreditRating::BBB, 9_400_000_000, 30.1, 0.18, 278),
        (CreditRating::BB, 5_200_000_000, 16.7, 0.82, 189),
        (CreditRating::B, 2_800_000_000, 9.0, 2.10, 156),
        (CreditRating::CccPlus, 890_000_000, 2.9, 5.80, 67),
        (CreditRating::CccMinus, 310_000_000, 1.0, 15.40, 23),
    ];
    rows.into_iter()
        .map(|(rating, exposure, percentage, pd, count)| CreditRatingBucket {
            rating,
            exposure,
            percentage,
            pd,
            count,
        })
        .collect()
}

/// Sector concentration.
pub fn portfolio_by_sector() -> Vec<SectorExposure> {
    let rows: [(&str, u64, f64, &str, f64); 8] = [
        ("Commercial Real Estate", 8_200_000_000, 26.3, "BBB", 2.1),
        ("Financial Services", 5_400_000_000, 17.3, "A-", 0.8),
        ("Healthcare", 3_900_000_000, 12.5, "BBB+", 1.2),
        ("Technology", 3_200_000_000, 10.3, "BBB", 1.5),
        ("Energy", 2_800_000_000, 9.0, "BB+", 3.4),
        ("Consumer Retail", 2_600_000_000, 8.3, "BB+", 2.8),
        ("Manufacturing", 2_400_000_000, 7.7, "BBB-", 1.9),
        ("Residential Mortgage", 2_700_000_000, 8.7, "A", 0.6),
    ];
    rows.into_iter()
        .map(|(sector, exposure, percentage, avg_rating, npl)| SectorExposure {
            sector: sector.to_string(),
            exposure,
            percentage,
            avg_rating: avg_rating.to_string(),
            npl,
        })
        .collect()
}

/// Ten largest single-name exposures, largest first.
pub fn top_exposures() -> Vec<TopExposure> {
    let rows: [(&str, &str, u64, &str, bool, f64); 10] = [
        ("Meridian Holdings Corp", "CRE", 890_000_000, "BBB-", true, 3.2),
        ("Pacific Gateway REIT", "CRE", 720_000_000, "BBB", false, 0.9),
        ("NovaTech Solutions", "Technology", 650_000_000, "BBB+", false, 0.4),
        ("Apex Energy Partners", "Energy", 580_000_000, "BB", true, 4.1),
        ("HealthCore Systems", "Healthcare", 520_000_000, "A-", false, 0.2),
        ("Silverline Financial", "Financial", 490_000_000, "A", false, 0.15),
        ("Metro Developments LLC", "CRE", 460_000_000, "BB+", true, 2.7),
        ("Continental Retail Group", "Retail", 420_000_000, "BB-", true, 5.3),
        ("Riverside Manufacturing", "Manufacturing", 380_000_000, "BBB", false, 0.7),
        ("Eastern Seaboard Logistics", "Transport", 340_000_000, "BBB-", false, 1.1),
    ];
    rows.into_iter()
        .map(|(name, sector, exposure, rating, watchlist, pd)| TopExposure {
            name: name.to_string(),
            sector: sector.to_string(),
            exposure,
            rating: rating.to_string(),
            watchlist,
            pd,
        })
        .collect()
}

/// Portfolio loss figures.
pub fn credit_metrics() -> CreditMetrics {
    CreditMetrics {
        expected_loss: 486_000_000,
        unexpected_loss: 1_240_000_000,
        economic_capital: 1_726_000_000,
        provision_coverage: 112.0,
        npl_ratio: 1.82,
        watchlist_loans: 4_800_000_000,
        write_offs_ytd: 89_000_000,
        recovery_rate: 42.3,
    }
}

/// Daily rating migration counts.
///
/// Downgrades widen after day 20 and defaults after day 25.
pub fn migration_trend(rng: &mut SyntheticRng, reference_date: NaiveDate, days: usize) -> Vec<MigrationDay> {
    date_window(reference_date, days)
        .enumerate()
        .map(|(i, date)| {
            let upgrades = rng.rand_int(2, 8);
            let downgrade_cap = if i > 20 { 16 } else { 12 };
            let downgrades = rng.rand_int(3, downgrade_cap);
            let defaults = rng.rand_int(0, if i > 25 { 2 } else { 1 });
            MigrationDay {
                date,
                upgrades: upgrades as u32,
                downgrades: downgrades as u32,
                defaults: defaults as u32,
            }
        })
        .collect()
}
