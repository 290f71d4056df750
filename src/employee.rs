use std::fmt;

use serde::{Deserialize, Serialize};

/// A single employee record.  The employee's numeric ID is not part of the
/// record; it is the key the registry files the record under.
///
/// Age is deliberately free text, not a number.  Nothing downstream does
/// arithmetic on it, and the entry flow accepts whatever the user types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    age: String,
    department: String,
    salary: f64,
}

impl Employee {
    pub fn new(name: &str, age: &str, department: &str, salary: f64) -> Self {
        Employee {
            name: String::from(name),
            age: String::from(age),
            department: String::from(department),
            salary,
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn age(&self) -> &String {
        &self.age
    }

    pub fn department(&self) -> &String {
        &self.department
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Department: {}, Salary: {}",
            self.name, self.age, self.department, self.salary
        )
    }
}
