//! Score aggregation: pass ratios to ratings, module ratings to an overall rating.

use super::RatingThresholds;
use crate::model::{ModuleVerdict, OverallRating, Rating};

/// Rate a module from its pass and total counts.
///
/// `total == 0` yields [`Rating::InsufficientData`]; otherwise the ratio
/// `pass / total` is bucketed by the thresholds, boundaries inclusive.
pub fn rate(pass: u32, total: u32, thresholds: &RatingThresholds) -> Rating {
    if total == 0 {
        return Rating::InsufficientData;
    }
    let ratio = f64::from(pass.min(total)) / f64::from(total);
    if ratio >= thresholds.compliant {
        Rating::Compliant
    } else if ratio >= thresholds.partial {
        Rating::Partial
    } else {
        Rating::NonCompliant
    }
}

/// Build a verdict from counts.
pub fn verdict(pass: u32, total: u32, thresholds: &RatingThresholds) -> ModuleVerdict {
    ModuleVerdict::new(pass, total, rate(pass, total, thresholds))
}

/// Fold module ratings into the overall rating.
///
/// Worst case dominates: any non-compliant module makes the page
/// non-compliant, otherwise any partial module makes it partially
/// compliant. Modules with insufficient data are left out; if nothing is
/// left the page is compliant.
pub fn overall<I>(ratings: I) -> OverallRating
where
    I: IntoIterator<Item = Rating>,
{
    ratings
        .into_iter()
        .filter(Rating::is_rated)
        .fold(OverallRating::Compliant, |acc, rating| match (acc, rating) {
            (OverallRating::NonCompliant, _) | (_, Rating::NonCompliant) => {
                OverallRating::NonCompliant
            }
            (_, Rating::Partial) => OverallRating::PartiallyCompliant,
            (acc, _) => acc,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t() -> RatingThresholds {
        RatingThresholds::default()
    }

    #[test]
    fn test_rate_boundaries() {
        assert_eq!(rate(8, 10, &t()), Rating::Compliant);
        assert_eq!(rate(10, 10, &t()), Rating::Compliant);
        assert_eq!(rate(4, 5, &t()), Rating::Compliant);
        assert_eq!(rate(79, 100, &t()), Rating::Partial);
        assert_eq!(rate(5, 10, &t()), Rating::Partial);
        assert_eq!(rate(1, 2, &t()), Rating::Partial);
        assert_eq!(rate(4, 10, &t()), Rating::NonCompliant);
        assert_eq!(rate(49, 100, &t()), Rating::NonCompliant);
        assert_eq!(rate(1, 10, &t()), Rating::NonCompliant);
        assert_eq!(rate(0, 3, &t()), Rating::NonCompliant);
    }

    #[test]
    fn test_rate_zero_total() {
        assert_eq!(rate(0, 0, &t()), Rating::InsufficientData);
        assert_eq!(rate(5, 0, &t()), Rating::InsufficientData);
    }

    #[test]
    fn test_rate_monotonic() {
        fn rank(r: Rating) -> u8 {
            match r {
                Rating::NonCompliant => 0,
                Rating::Partial => 1,
                Rating::Compliant => 2,
                Rating::InsufficientData => unreachable!(),
            }
        }
        for total in 1..=40u32 {
            let mut last = 0;
            for pass in 0..=total {
                let r = rank(rate(pass, total, &t()));
                assert!(r >= last, "rating dropped at {}/{}", pass, total);
                last = r;
            }
        }
    }

    #[test]
    fn test_rate_custom_thresholds() {
        let strict = RatingThresholds {
            compliant: 1.0,
            partial: 0.9,
        };
        assert_eq!(rate(9, 10, &strict), Rating::Partial);
        assert_eq!(rate(10, 10, &strict), Rating::Compliant);
    }

    #[test]
    fn test_overall_worst_case() {
        use Rating::*;
        assert_eq!(
            overall([NonCompliant, Compliant, Compliant]),
            OverallRating::NonCompliant
        );
        assert_eq!(
            overall([Compliant, Compliant, NonCompliant]),
            OverallRating::NonCompliant
        );
        assert_eq!(
            overall([Partial, NonCompliant, Compliant]),
            OverallRating::NonCompliant
        );
        assert_eq!(
            overall([Compliant, Partial, Compliant]),
            OverallRating::PartiallyCompliant
        );
        assert_eq!(
            overall([Compliant, Compliant, Compliant]),
            OverallRating::Compliant
        );
    }

    #[test]
    fn test_overall_skips_insufficient() {
        use Rating::*;
        assert_eq!(
            overall([InsufficientData, Compliant, Compliant]),
            OverallRating::Compliant
        );
        assert_eq!(
            overall([InsufficientData, InsufficientData, InsufficientData]),
            OverallRating::Compliant
        );
        assert_eq!(
            overall([Partial, InsufficientData]),
            OverallRating::PartiallyCompliant
        );
    }

    #[test]
    fn test_overall_order_independent() {
        use Rating::*;
        let all = [Compliant, Partial, NonCompliant, InsufficientData];
        for a in all {
            for b in all {
                for c in all {
                    let expected = overall([a, b, c]);
                    assert_eq!(overall([c, b, a]), expected);
                    assert_eq!(overall([b, c, a]), expected);
                    assert_eq!(overall([a, c, b]), expected);
                }
            }
        }
    }

    #[test]
    fn test_verdict() {
        let v = verdict(3, 4, &t());
        assert_eq!(v.pass, 3);
        assert_eq!(v.total, 4);
        assert_eq!(v.rating, Rating::Partial);
    }
}
