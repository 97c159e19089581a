//! Dashboard summary cards.
//!
//! The four figures are display placeholders derived from the loaded record
//! count alone (fixed ratios, not real per-record aggregation).

/// Values backing the four dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total_users: usize,
    pub active_users: usize,
    pub new_registrations: usize,
    /// Rupees.
    pub revenue: u64,
}

impl DashboardMetrics {
    /// Derive the card values from the loaded record count:
    /// total = n, active = ⌊n × 0.7⌋, new = ⌊n × 0.3⌋, revenue = n × 500.
    pub fn for_population(count: usize) -> Self {
        Self {
            total_users: count,
            active_users: count * 7 / 10,
            new_registrations: count * 3 / 10,
            revenue: count as u64 * 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_floor() {
        let m = DashboardMetrics::for_population(10);
        assert_eq!(m.total_users, 10);
        assert_eq!(m.active_users, 7);
        assert_eq!(m.new_registrations, 3);
        assert_eq!(m.revenue, 5000);

        // 9 × 0.7 = 6.3 and 9 × 0.3 = 2.7 both round down.
        let m = DashboardMetrics::for_population(9);
        assert_eq!(m.active_users, 6);
        assert_eq!(m.new_registrations, 2);
    }

    #[test]
    fn empty_population_is_all_zero() {
        assert_eq!(DashboardMetrics::for_population(0), DashboardMetrics::default());
    }
}
