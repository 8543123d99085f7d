//! Pension escalation and forward annuity valuation

/// Present and nominal value of a pension stream.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PensionStreamValue {
    pub present_value: f64,
    pub nominal_value: f64,
}

impl PensionStreamValue {
    pub fn add(&mut self, other: PensionStreamValue) {
        self.present_value += other.present_value;
        self.nominal_value += other.nominal_value;
    }

    pub fn add_lump_sum(&mut self, amount: f64) {
        self.present_value += amount;
        self.nominal_value += amount;
    }
}

/// Escalate a monthly pension from its base year to a target year.
///
/// At each pay-commission anniversary of the base year the pension is
/// multiplied by the fitment factor and the dearness-relief counter resets;
/// every other year after the first applies dearness relief. A target year
/// before the base year returns the initial amount unchanged.
pub fn pension_for_year(
    initial_pension: f64,
    base_year: i32,
    target_year: i32,
    pay_commission_interval: u32,
    fitment_factor: f64,
    dearness_relief_rate: f64,
) -> f64 {
    let mut pension = initial_pension;
    let mut dr_years = 0u32;

    let mut year = base_year;
    while year <= target_year {
        let commission_year = pay_commission_interval > 0
            && year > base_year
            && (year - base_year) % pay_commission_interval as i32 == 0;
        if commission_year {
            pension *= fitment_factor;
            dr_years = 0;
        }
        if dr_years > 0 {
            pension *= 1.0 + dearness_relief_rate;
        }
        dr_years += 1;
        year += 1;
    }

    pension
}

/// Value an escalating monthly pension paid from a start month for a number
/// of whole years (inclusive of the starting year).
///
/// The nominal value sums annual amounts; the present value discounts each
/// year at the monthly-compounded inflation rate from the start month. The
/// first calendar year discounts only the months remaining after the start
/// month. A negative duration contributes nothing.
pub fn pension_stream_value(
    start_year: i32,
    start_month: u32,
    monthly_pension: f64,
    duration_years: i32,
    inflation_rate: f64,
    escalation_rate: f64,
) -> PensionStreamValue {
    let mut value = PensionStreamValue::default();
    if duration_years < 0 {
        return value;
    }

    let monthly_discount = 1.0 + inflation_rate / 12.0;
    let mut current_pension = monthly_pension;

    for offset in 0..=duration_years {
        let year = start_year + offset;
        if year > start_year {
            current_pension *= 1.0 + escalation_rate;
        }

        let annual = current_pension * 12.0;
        value.nominal_value += annual;

        let months_since_start = if year == start_year {
            12 - start_month as i32
        } else {
            (year - start_year) * 12
        };
        value.present_value += annual / monthly_discount.powi(months_since_start);
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_year_pension_is_initial() {
        let p = pension_for_year(10_000.0, 2050, 2050, 10, 1.8, 0.02);
        assert_relative_eq!(p, 10_000.0);
    }

    #[test]
    fn test_target_before_base_is_initial() {
        let p = pension_for_year(10_000.0, 2056, 2050, 10, 1.8, 0.02);
        assert_relative_eq!(p, 10_000.0);
    }

    #[test]
    fn test_dearness_relief_after_first_year() {
        // Base year gets no relief; each following year compounds 2%
        let p = pension_for_year(10_000.0, 2050, 2053, 10, 1.8, 0.02);
        assert_relative_eq!(p, 10_000.0 * 1.02_f64.powi(3), max_relative = 1e-12);
    }

    #[test]
    fn test_commission_year_applies_fitment_and_resets_relief() {
        // 2050..=2060 with a 10-year interval: relief in 2051-2059 (9 years),
        // fitment in 2060 with no relief that year
        let p = pension_for_year(10_000.0, 2050, 2060, 10, 1.8, 0.02);
        assert_relative_eq!(p, 10_000.0 * 1.02_f64.powi(9) * 1.8, max_relative = 1e-12);

        // The year after the commission resumes relief
        let p_next = pension_for_year(10_000.0, 2050, 2061, 10, 1.8, 0.02);
        assert_relative_eq!(p_next, p * 1.02, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_interval_never_applies_fitment() {
        let p = pension_for_year(10_000.0, 2050, 2060, 0, 1.8, 0.02);
        assert_relative_eq!(p, 10_000.0 * 1.02_f64.powi(10), max_relative = 1e-12);
    }

    #[test]
    fn test_stream_zero_inflation_pv_equals_nominal() {
        let v = pension_stream_value(2060, 12, 5_000.0, 10, 0.0, 0.02);
        assert_relative_eq!(v.present_value, v.nominal_value, max_relative = 1e-12);
    }

    #[test]
    fn test_stream_discounting_reduces_pv() {
        let v = pension_stream_value(2060, 12, 5_000.0, 10, 0.05, 0.02);
        assert!(v.present_value < v.nominal_value);
        assert!(v.present_value > 0.0);
    }

    #[test]
    fn test_stream_negative_duration_is_empty() {
        let v = pension_stream_value(2060, 12, 5_000.0, -3, 0.05, 0.02);
        assert_eq!(v, PensionStreamValue::default());
    }

    #[test]
    fn test_stream_single_year() {
        // One year starting in December: nominal is one annual payment,
        // discounted zero months (12 - 12)
        let v = pension_stream_value(2060, 12, 5_000.0, 0, 0.05, 0.02);
        assert_relative_eq!(v.nominal_value, 60_000.0);
        assert_relative_eq!(v.present_value, 60_000.0);
    }

    #[test]
    fn test_stream_escalates_following_years() {
        let v = pension_stream_value(2060, 12, 5_000.0, 1, 0.0, 0.02);
        assert_relative_eq!(v.nominal_value, 60_000.0 + 60_000.0 * 1.02, max_relative = 1e-12);
    }
}
