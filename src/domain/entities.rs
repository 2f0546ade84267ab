//! Domain entities: core data structures

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned employee identifier.
pub type EmployeeId = u32;

/// A single employee record as kept in the data file.
///
/// Field names are serialized in PascalCase (`Id`, `FirstName`, `LastName`,
/// `SalaryPerHour`) so existing data files stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    /// Hourly salary, written as a JSON number with its exact decimal digits
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary_per_hour: Decimal,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary_per_hour: Decimal,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary_per_hour,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id = {}, FirstName = {}, LastName = {}, SalaryPerHour = {}",
            self.id,
            self.first_name,
            self.last_name,
            display_money(self.salary_per_hour)
        )
    }
}

/// Render a money amount with at least two fractional digits.
pub fn display_money(amount: Decimal) -> Decimal {
    let mut amount = amount;
    if amount.scale() < 2 {
        amount.rescale(2);
    }
    amount
}

/// Partial update of an employee record.
///
/// `None` leaves a field untouched. An empty text value is treated the same
/// as `None`: names cannot be cleared through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub salary: Option<Decimal>,
}

impl EmployeeUpdate {
    /// True if applying this update would not change any record.
    pub fn is_empty(&self) -> bool {
        non_empty(&self.first_name).is_none()
            && non_empty(&self.last_name).is_none()
            && self.salary.is_none()
    }

    /// Overwrite the fields of `employee` that this update carries.
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(first_name) = non_empty(&self.first_name) {
            employee.first_name = first_name.to_string();
        }
        if let Some(last_name) = non_empty(&self.last_name) {
            employee.last_name = last_name.to_string();
        }
        if let Some(salary) = self.salary {
            employee.salary_per_hour = salary;
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn john() -> Employee {
        Employee::new(1, "John", "Doe", dec!(100.50))
    }

    #[test]
    fn given_employee_when_serialized_then_uses_pascal_case_keys() {
        let json = serde_json::to_string(&john()).unwrap();

        assert_eq!(
            json,
            r#"{"Id":1,"FirstName":"John","LastName":"Doe","SalaryPerHour":100.50}"#
        );
    }

    #[test]
    fn given_json_with_number_salary_when_deserialized_then_keeps_exact_value() {
        let json = r#"{"Id":2,"FirstName":"Jane","LastName":"Smith","SalaryPerHour":120.75}"#;

        let employee: Employee = serde_json::from_str(json).unwrap();

        assert_eq!(employee, Employee::new(2, "Jane", "Smith", dec!(120.75)));
    }

    #[test]
    fn given_whole_salary_when_displayed_then_shows_two_decimals() {
        let employee = Employee::new(3, "Max", "Mustermann", dec!(15));

        assert_eq!(
            employee.to_string(),
            "Id = 3, FirstName = Max, LastName = Mustermann, SalaryPerHour = 15.00"
        );
    }

    #[test]
    fn given_salary_only_update_when_applied_then_names_unchanged() {
        let mut employee = john();
        let update = EmployeeUpdate {
            salary: Some(dec!(130)),
            ..Default::default()
        };

        update.apply_to(&mut employee);

        assert_eq!(employee.first_name, "John");
        assert_eq!(employee.last_name, "Doe");
        assert_eq!(employee.salary_per_hour, dec!(130));
    }

    #[test]
    fn given_empty_name_in_update_when_applied_then_name_kept() {
        let mut employee = john();
        let update = EmployeeUpdate {
            first_name: Some(String::new()),
            last_name: Some("Roe".into()),
            salary: None,
        };

        update.apply_to(&mut employee);

        assert_eq!(employee.first_name, "John");
        assert_eq!(employee.last_name, "Roe");
        assert!(!update.is_empty());
    }

    #[test]
    fn given_only_empty_strings_when_checking_then_update_is_empty() {
        let update = EmployeeUpdate {
            first_name: Some(String::new()),
            last_name: Some(String::new()),
            salary: None,
        };

        assert!(update.is_empty());
    }
}
