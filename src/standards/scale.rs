use super::types::TierCutoffs;

/// Default headroom below the loosest cutoff on a standings scale
pub const DEFAULT_SCALE_PADDING: f64 = 1.15;

/// Places a time on a 0..=1 scale for one event cell: 1 at or under the
/// fastest cutoff, 0 at or over `loosest * padding`, linear between.
pub fn scale_position(time_seconds: f64, cutoffs: &TierCutoffs, padding: f64) -> Option<f64> {
    if !time_seconds.is_finite() || time_seconds <= 0.0 {
        return None;
    }

    let fastest = cutoffs.values().copied().reduce(f64::min)?;
    let slowest = cutoffs.values().copied().reduce(f64::max)?;
    let padded_slowest = slowest * padding;

    if time_seconds >= padded_slowest {
        return Some(0.0);
    }
    if time_seconds <= fastest {
        return Some(1.0);
    }

    Some((padded_slowest - time_seconds) / (padded_slowest - fastest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standards::types::Tier;

    fn cutoffs() -> TierCutoffs {
        TierCutoffs::from([(Tier::AAAA, 28.0), (Tier::A, 34.0), (Tier::B, 40.0)])
    }

    #[test]
    fn test_scale_is_clamped() {
        assert_eq!(scale_position(27.0, &cutoffs(), DEFAULT_SCALE_PADDING), Some(1.0));
        assert_eq!(scale_position(28.0, &cutoffs(), DEFAULT_SCALE_PADDING), Some(1.0));
        assert_eq!(scale_position(46.0, &cutoffs(), DEFAULT_SCALE_PADDING), Some(0.0));
        assert_eq!(scale_position(60.0, &cutoffs(), DEFAULT_SCALE_PADDING), Some(0.0));
    }

    #[test]
    fn test_scale_interpolates() {
        let position = scale_position(37.0, &cutoffs(), DEFAULT_SCALE_PADDING).unwrap();
        assert!((position - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_scale_needs_time_and_cutoffs() {
        assert_eq!(scale_position(30.0, &TierCutoffs::new(), DEFAULT_SCALE_PADDING), None);
        assert_eq!(scale_position(0.0, &cutoffs(), DEFAULT_SCALE_PADDING), None);
    }
}
