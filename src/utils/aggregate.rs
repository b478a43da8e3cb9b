use serde::Serialize;

use crate::models::department::Department;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_departments: usize,
    pub total_employees: u64,
    pub total_budget: f64,
}

pub fn total_employees(departments: &[Department]) -> u64 {
    departments.iter().map(|d| u64::from(d.employee_count)).sum()
}

pub fn total_budget(departments: &[Department]) -> f64 {
    departments.iter().map(|d| d.budget).sum()
}

pub fn summarize(departments: &[Department]) -> Summary {
    Summary {
        total_departments: departments.len(),
        total_employees: total_employees(departments),
        total_budget: total_budget(departments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::department::seed_departments;
    use chrono::Utc;

    #[test]
    fn empty_collection_totals_are_zero() {
        assert_eq!(total_employees(&[]), 0);
        assert_eq!(total_budget(&[]), 0.0);
        assert_eq!(summarize(&[]).total_departments, 0);
    }

    #[test]
    fn seeded_totals() {
        let seeded = seed_departments(Utc::now());
        assert_eq!(
            summarize(&seeded),
            Summary {
                total_departments: 3,
                total_employees: 85,
                total_budget: 950_000.0,
            }
        );
    }

    #[test]
    fn employee_total_does_not_overflow_u32() {
        let mut seeded = seed_departments(Utc::now());
        seeded[0].employee_count = u32::MAX;
        seeded[1].employee_count = 1;
        assert_eq!(total_employees(&seeded), u64::from(u32::MAX) + 1 + 28);
    }
}
