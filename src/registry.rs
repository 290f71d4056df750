use std::collections::hash_map;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::employee::Employee;

pub type Result<T> = std::result::Result<T, RegistryError>;

/// The roster every session starts out with.  Parsed once at startup; kept
/// as JSON so the record layout stays in one obvious place.
const SEED_DATA: &str = r#"
{
    "101": { "name": "Satya",  "age": "27", "department": "HR",         "salary": 500000 },
    "102": { "name": "Veeba",  "age": "30", "department": "IT",         "salary": 600000 },
    "103": { "name": "Prerna", "age": "25", "department": "Finance",    "salary": 300000 },
    "104": { "name": "Rohan",  "age": "31", "department": "Marketting", "salary": 550000 },
    "105": { "name": "Esha",   "age": "32", "department": "Operations", "salary": 650000 }
}
"#;

/// Registry and its related methods represent the main API for managing
/// employee records.  It owns the one mapping from employee ID to record;
/// nothing else in the program holds roster state.
pub struct Registry {
    employees: HashMap<u32, Employee>,
}

impl Registry {
    /// Initialize a registry pre-populated with the seed roster.  This is
    /// what the interactive session starts from.
    pub fn init() -> Self {
        let employees: HashMap<u32, Employee> =
            serde_json::from_str(SEED_DATA).expect("seed roster is well-formed JSON");

        Registry { employees }
    }

    /// An empty registry, with no seed entries.
    pub fn new() -> Self {
        Registry {
            employees: HashMap::new(),
        }
    }

    /// Insert a new record under `id`.  A duplicate ID is a soft rejection:
    /// the registry is left untouched and the caller gets
    /// `RegistryError::DuplicateId` to report however it likes.
    pub fn add(&mut self, id: u32, employee: Employee) -> Result<()> {
        if self.employees.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }

        self.employees.insert(id, employee);

        Ok(())
    }

    /// Iterate over every record for display.  Order is whatever the map
    /// yields.  An empty registry is reported as `RegistryError::Empty`
    /// rather than a zero-length iterator so the caller can print something
    /// useful instead of nothing.
    pub fn entries(&self) -> Result<hash_map::Iter<'_, u32, Employee>> {
        if self.employees.is_empty() {
            return Err(RegistryError::Empty);
        }

        Ok(self.employees.iter())
    }

    /// Look up a single record by ID.
    pub fn search(&self, id: u32) -> Result<&Employee> {
        self.employees.get(&id).ok_or(RegistryError::NotFound(id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.employees.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

#[derive(Debug, PartialEq)]
pub enum RegistryError {
    DuplicateId(u32),
    NotFound(u32),
    Empty,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::RegistryError::*;

        match self {
            DuplicateId(id) => write!(f, "Employee ID {} already exists, try again", id),
            NotFound(id) => write!(f, "Employee not found: {}", id),
            Empty => write!(f, "No employees found."),
        }
    }
}

impl Error for RegistryError {}
