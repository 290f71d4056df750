use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use crate::employee::Employee;
use crate::registry::Registry;

pub type Result<T> = std::result::Result<T, TextInterfaceError>;

/// The interactive menu session.  Owns the registry for the lifetime of the
/// process and drives all console I/O through the `TextIO` seam, so the
/// whole session can run against in-memory buffers in tests.
pub struct TextInterface<R, W> {
    io: TextIO<R, W>,
    data: Registry,
}

impl TextInterface<io::BufReader<io::Stdin>, io::Stdout> {
    /// Set up a session on the real console, seeded with the startup roster.
    pub fn init() -> Self {
        TextInterface::with_io(
            io::BufReader::new(io::stdin()),
            io::stdout(),
            Registry::init(),
        )
    }
}

impl<R: BufRead, W: Write> TextInterface<R, W> {
    pub fn with_io(input: R, output: W, data: Registry) -> Self {
        TextInterface {
            io: TextIO { input, output },
            data,
        }
    }

    /// The main menu loop.  Runs until the user picks Exit (a graceful
    /// `Ok(())`) or a numeric prompt receives something unparseable, which
    /// ends the session with `TextInterfaceError` as there is no retry path
    /// for malformed numbers anywhere in the flow.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let choice: i64 = self.io.get_number("your choice")?;

            match choice {
                1 => self.add_employee()?,
                2 => self.view_employees()?,
                3 => self.search_employee()?,
                4 => {
                    writeln!(self.io.output, "Exiting the program. Thank you!")?;
                    return Ok(());
                }
                _ => writeln!(self.io.output, "Invalid Input!")?,
            };
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.io.output, "Employee Management System")?;
        writeln!(self.io.output, "1. Add Employee")?;
        writeln!(self.io.output, "2. View All Employee")?;
        writeln!(self.io.output, "3. Search an employee")?;
        writeln!(self.io.output, "4. Exit")?;

        Ok(())
    }

    /// Prompt for each field in turn and insert the record.  The duplicate
    /// check runs right after the ID prompt so the user is not made to type
    /// four more fields for an entry that will be rejected anyway.
    fn add_employee(&mut self) -> Result<()> {
        let id: u32 = self.io.get_number("the employee ID")?;

        if self.data.contains(id) {
            writeln!(self.io.output, "Employee ID {} already exists, try again", id)?;
            return Ok(());
        }

        let name = self.io.get_string("your name")?;
        let age = self.io.get_string("your age")?;
        let department = self.io.get_string("your department")?;
        let salary: f64 = self.io.get_number("your salary")?;

        match self.data.add(id, Employee::new(&name, &age, &department, salary)) {
            Ok(()) => writeln!(self.io.output, "Details added successfully")?,
            Err(e) => writeln!(self.io.output, "{}", e)?,
        };

        Ok(())
    }

    fn view_employees(&mut self) -> Result<()> {
        match self.data.entries() {
            Ok(entries) => {
                writeln!(self.io.output, "\nEmployee List:")?;
                for (id, employee) in entries {
                    writeln!(self.io.output, "ID: {}, {}", id, employee)?;
                }
                writeln!(self.io.output)?;
            }
            Err(e) => writeln!(self.io.output, "{}", e)?,
        };

        Ok(())
    }

    fn search_employee(&mut self) -> Result<()> {
        let id: u32 = self.io.get_number("Employee ID to search")?;

        match self.data.search(id) {
            Ok(employee) => {
                writeln!(self.io.output, "\nEmployee Found:")?;
                writeln!(self.io.output, "ID: {}, {}\n", id, employee)?;
            }
            Err(_) => writeln!(self.io.output, "Employee not found!")?,
        };

        Ok(())
    }
}

struct TextIO<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextIO<R, W> {
    fn get_string(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "Enter {}: ", prompt)?;
        self.output.flush()?;

        let mut io_buffer = String::new();
        self.input.read_line(&mut io_buffer)?;

        Ok(String::from(io_buffer.trim()))
    }

    /// Prompt for a number.  A line that does not parse is returned as an
    /// error for the caller to propagate; the caller decides whether that is
    /// fatal (here it always is, since no prompt in this program retries).
    fn get_number<T>(&mut self, prompt: &str) -> Result<T>
    where
        T: FromStr,
        TextInterfaceError: From<T::Err>,
    {
        let line = self.get_string(prompt)?;

        Ok(T::from_str(&line)?)
    }
}

#[derive(Debug)]
pub enum TextInterfaceError {
    ParseInt(ParseIntError),
    ParseFloat(ParseFloatError),
    IOError(io::Error),
}

impl Error for TextInterfaceError {}

impl fmt::Display for TextInterfaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::TextInterfaceError::*;

        match self {
            ParseInt(e) => write!(f, "Invalid number({})", e),
            ParseFloat(e) => write!(f, "Invalid number({})", e),
            IOError(e) => write!(f, "IO Error({})", e),
        }
    }
}

impl From<ParseIntError> for TextInterfaceError {
    fn from(e: ParseIntError) -> Self {
        TextInterfaceError::ParseInt(e)
    }
}

impl From<ParseFloatError> for TextInterfaceError {
    fn from(e: ParseFloatError) -> Self {
        TextInterfaceError::ParseFloat(e)
    }
}

impl From<io::Error> for TextInterfaceError {
    fn from(e: io::Error) -> Self {
        TextInterfaceError::IOError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run a whole scripted session against in-memory buffers and hand back
    /// the session result plus everything it printed.
    fn run_session(script: &str, data: Registry) -> (Result<()>, String) {
        let mut output: Vec<u8> = Vec::new();

        let result = {
            let mut interface = TextInterface::with_io(Cursor::new(script), &mut output, data);
            interface.run()
        };

        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn view_lists_all_five_seed_records() {
        let (result, output) = run_session("2\n4\n", Registry::init());

        assert!(result.is_ok());
        assert!(output.contains("Employee List:"));
        assert!(output.contains("ID: 101, Name: Satya, Age: 27, Department: HR, Salary: 500000"));
        assert!(output.contains("ID: 102, Name: Veeba, Age: 30, Department: IT, Salary: 600000"));
        assert!(output.contains("ID: 103, Name: Prerna, Age: 25, Department: Finance, Salary: 300000"));
        assert!(output.contains("ID: 104, Name: Rohan, Age: 31, Department: Marketting, Salary: 550000"));
        assert!(output.contains("ID: 105, Name: Esha, Age: 32, Department: Operations, Salary: 650000"));
    }

    #[test]
    fn view_on_empty_registry_prints_empty_message_and_no_rows() {
        let (result, output) = run_session("2\n4\n", Registry::new());

        assert!(result.is_ok());
        assert!(output.contains("No employees found."));
        assert!(!output.contains("ID:"));
    }

    #[test]
    fn added_employee_shows_up_in_view() {
        let script = "1\n106\nAlice\n28\nLegal\n400000\n2\n4\n";
        let (result, output) = run_session(script, Registry::init());

        assert!(result.is_ok());
        assert!(output.contains("Details added successfully"));
        assert!(output.contains("ID: 106, Name: Alice, Age: 28, Department: Legal, Salary: 400000"));
    }

    #[test]
    fn added_employee_is_found_by_search() {
        let script = "1\n107\nBob\n41\nIT\n123456.5\n3\n107\n4\n";
        let (_, output) = run_session(script, Registry::init());

        assert!(output.contains("Employee Found:"));
        assert!(output.contains("ID: 107, Name: Bob, Age: 41, Department: IT, Salary: 123456.5"));
    }

    #[test]
    fn duplicate_id_is_rejected_without_prompting_for_fields() {
        let script = "1\n101\n4\n";
        let (result, output) = run_session(script, Registry::init());

        assert!(result.is_ok());
        assert!(output.contains("Employee ID 101 already exists, try again"));
        assert!(!output.contains("Enter your name"));
    }

    #[test]
    fn duplicate_add_leaves_original_record_intact() {
        // Reject a duplicate for 101, then search 101 in the same session.
        let script = "1\n101\n3\n101\n4\n";
        let (_, output) = run_session(script, Registry::init());

        assert!(output.contains("ID: 101, Name: Satya, Age: 27, Department: HR, Salary: 500000"));
    }

    #[test]
    fn search_for_absent_id_reports_not_found() {
        let (result, output) = run_session("3\n999\n4\n", Registry::init());

        assert!(result.is_ok());
        assert!(output.contains("Employee not found!"));
    }

    #[test]
    fn out_of_range_choice_reprompts_with_menu() {
        let (result, output) = run_session("5\n4\n", Registry::init());

        assert!(result.is_ok());
        assert!(output.contains("Invalid Input!"));
        assert_eq!(output.matches("Employee Management System").count(), 2);
    }

    #[test]
    fn exit_prints_farewell_and_returns_ok() {
        let (result, output) = run_session("4\n", Registry::init());

        assert!(result.is_ok());
        assert!(output.contains("Exiting the program. Thank you!"));
    }

    #[test]
    fn non_numeric_menu_choice_is_fatal() {
        let (result, _) = run_session("abc\n", Registry::init());

        assert!(matches!(result, Err(TextInterfaceError::ParseInt(_))));
    }

    #[test]
    fn non_numeric_employee_id_is_fatal() {
        let (result, _) = run_session("3\nnot-an-id\n", Registry::init());

        assert!(matches!(result, Err(TextInterfaceError::ParseInt(_))));
    }

    #[test]
    fn non_numeric_salary_is_fatal() {
        let script = "1\n106\nAlice\n28\nLegal\nlots\n";
        let (result, _) = run_session(script, Registry::init());

        assert!(matches!(result, Err(TextInterfaceError::ParseFloat(_))));
    }

    #[test]
    fn end_of_input_is_fatal_rather_than_looping() {
        // EOF reads as an empty line, which fails the choice parse.
        let (result, _) = run_session("", Registry::init());

        assert!(matches!(result, Err(TextInterfaceError::ParseInt(_))));
    }
}
