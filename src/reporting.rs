/// Campaign performance arithmetic used by the reporting binaries.

/// Return on ad spend as a percentage. Zero spend yields 0 rather than a
/// division error.
pub fn roas(spend: f64, revenue: f64) -> f64 {
    if spend == 0.0 {
        return 0.0;
    }
    (revenue / spend) * 100.0
}

/// Cost per lead. Zero leads yields 0 rather than a division error.
pub fn cost_per_lead(cost: f64, leads: u64) -> f64 {
    if leads == 0 {
        return 0.0;
    }
    cost / leads as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roas() {
        assert_eq!(roas(3000.0, 15000.0), 500.0);
    }

    #[test]
    fn test_roas_zero_spend() {
        assert_eq!(roas(0.0, 15000.0), 0.0);
    }

    #[test]
    fn test_cost_per_lead() {
        assert_eq!(cost_per_lead(3000.0, 15), 200.0);
    }

    #[test]
    fn test_cost_per_lead_zero_leads() {
        assert_eq!(cost_per_lead(3000.0, 0), 0.0);
    }
}
