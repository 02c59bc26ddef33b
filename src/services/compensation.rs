use crate::domain::team_member::{CompensationType, TeamMember};

pub const WORKING_DAYS_PER_MONTH: f64 = 20.0;
pub const HOURS_PER_DAY: f64 = 8.0;
/// A full work-month. Every hour based calculation goes through this value.
pub const HOURS_PER_MONTH: f64 = WORKING_DAYS_PER_MONTH * HOURS_PER_DAY;

/// Cost of one full-time month at the given rate.
pub fn full_time_monthly_cost(compensation_type: CompensationType, cost_value: f64) -> f64 {
    match compensation_type {
        CompensationType::Monthly => cost_value,
        CompensationType::Hourly => cost_value * HOURS_PER_MONTH,
    }
}

/// Monthly cost of a member at their allocation.
///
/// Expects `allocation_percentage` in `[0, 100]` and a non-negative cost;
/// input is validated where projects are loaded, nothing is clamped here.
pub fn normalize_monthly_cost(member: &TeamMember) -> f64 {
    full_time_monthly_cost(member.compensation_type, member.cost_value)
        * (member.allocation_percentage / 100.0)
}

/// Converts a rate between hourly and monthly units, keeping the full-time
/// monthly cost unchanged.
pub fn convert_cost_value(cost_value: f64, from: CompensationType, to: CompensationType) -> f64 {
    match (from, to) {
        (CompensationType::Monthly, CompensationType::Hourly) => cost_value / HOURS_PER_MONTH,
        (CompensationType::Hourly, CompensationType::Monthly) => cost_value * HOURS_PER_MONTH,
        _ => cost_value,
    }
}

/// Returns a copy of `member` switched to `new_type` with the rate converted
/// to the new unit.
pub fn convert_compensation_type(member: &TeamMember, new_type: CompensationType) -> TeamMember {
    TeamMember {
        compensation_type: new_type,
        cost_value: convert_cost_value(member.cost_value, member.compensation_type, new_type),
        ..member.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_close, hourly_member, monthly_member};

    #[test]
    fn a_work_month_has_160_hours() {
        assert_eq!(HOURS_PER_MONTH, 160.0);
    }

    #[test]
    fn hourly_rate_is_scaled_to_a_full_month() {
        let member = hourly_member("Backend Developer", 90.0, 100.0);
        assert_eq!(normalize_monthly_cost(&member), 14_400.0);
    }

    #[test]
    fn monthly_salary_is_scaled_by_allocation() {
        let member = monthly_member("Project Manager", 6000.0, 60.0);
        assert_close(normalize_monthly_cost(&member), 3600.0);
    }

    #[test]
    fn zero_allocation_costs_nothing() {
        let member = hourly_member("QA Engineer", 70.0, 0.0);
        assert_eq!(normalize_monthly_cost(&member), 0.0);
    }

    #[test]
    fn converting_monthly_to_hourly_divides_by_hours_per_month() {
        let member = monthly_member("Frontend Developer", 5500.0, 100.0);
        let converted = convert_compensation_type(&member, CompensationType::Hourly);

        assert_eq!(converted.compensation_type, CompensationType::Hourly);
        assert_close(converted.cost_value, 34.375);
        assert_close(
            normalize_monthly_cost(&converted),
            normalize_monthly_cost(&member),
        );
        assert_eq!(member.compensation_type, CompensationType::Monthly);
        assert_eq!(member.cost_value, 5500.0);
    }

    #[test]
    fn converting_hourly_to_monthly_multiplies_by_hours_per_month() {
        let member = hourly_member("Backend Developer", 90.0, 50.0);
        let converted = convert_compensation_type(&member, CompensationType::Monthly);

        assert_eq!(converted.compensation_type, CompensationType::Monthly);
        assert_eq!(converted.cost_value, 14_400.0);
        assert_eq!(converted.allocation_percentage, 50.0);
        assert_eq!(normalize_monthly_cost(&converted), 7200.0);
    }

    #[test]
    fn converting_to_the_same_type_changes_nothing() {
        let member = hourly_member("Backend Developer", 90.0, 100.0);
        let converted = convert_compensation_type(&member, CompensationType::Hourly);
        assert_eq!(converted, member);
    }

    #[test]
    fn round_trip_conversion_restores_the_rate() {
        for rate in [0.01, 1.0, 37.5, 90.0, 123.456] {
            let monthly = convert_cost_value(rate, CompensationType::Hourly, CompensationType::Monthly);
            let hourly = convert_cost_value(monthly, CompensationType::Monthly, CompensationType::Hourly);
            assert_close(hourly, rate);
        }
    }
}
