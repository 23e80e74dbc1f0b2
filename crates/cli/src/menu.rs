//! Interactive text menu over the Bank registry
//!
//! Reads one command at a time from any `BufRead` and writes prompts and
//! results to any `Write`, so the loop runs the same on a terminal and in tests.

use loanbank_business::Bank;
use loanbank_config::DisplayFormat;
use loanbank_core::{Customer, CustomerUpdate, Loan, LoanUpdate, MAX_SCHEDULE_MONTHS};
use loanbank_reports::{
    CsvExporter, CustomerReport, JsonExporter, LoanReport, MarkdownExporter, ReportData,
    ReportExporter, ScheduleReport, TableExporter,
};
use rust_decimal::Decimal;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::input::{optional_text, parse_optional, parse_required, InputError};

const MENU: &str = "\
=== Bank Loan Management System ===
1. Add Customer
2. Update Customer
3. Delete Customer
4. Add Loan
5. Update Loan
6. Delete Loan
7. Calculate Interest
8. Generate Payment Schedule
9. View Customer and Loan Details
10. Display All Customers
11. Display All Loans
12. Exit
13. Show Amortization Schedule";

#[derive(Debug, Error)]
enum MenuError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("end of input")]
    Eof,
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive loop that owns the registry for the whole session
pub struct Menu<R, W> {
    bank: Bank,
    input: R,
    output: W,
    format: DisplayFormat,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(bank: Bank, input: R, output: W, format: DisplayFormat) -> Self {
        Self {
            bank,
            input,
            output,
            format,
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let flow = self
                .ask("Enter your choice: ")
                .and_then(|choice| self.dispatch(choice.trim()));

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(MenuError::Eof) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Err(MenuError::Input(err)) => {
                    tracing::debug!(error = %err, "rejected input");
                    writeln!(self.output, "Invalid input: {}", err)?;
                }
                Err(MenuError::Io(err)) => return Err(err),
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow, MenuError> {
        match choice {
            "1" => self.add_customer()?,
            "2" => self.update_customer()?,
            "3" => {
                let id = self.ask("Enter customer ID to delete: ")?;
                let result = self.bank.delete_customer(&id);
                notify(&mut self.output, result)?;
            }
            "4" => self.add_loan()?,
            "5" => self.update_loan()?,
            "6" => {
                let id = self.ask("Enter customer ID to delete loan: ")?;
                let result = self.bank.delete_loan(&id);
                notify(&mut self.output, result)?;
            }
            "7" => {
                let id = self.ask("Enter customer ID to calculate interest: ")?;
                let result = self.bank.find_loan(&id).map(|loan| {
                    format!(
                        "Total interest over the loan term: {}",
                        two_places(loan.calculate_interest())
                    )
                });
                notify(&mut self.output, result)?;
            }
            "8" => {
                let id = self.ask("Enter customer ID to generate payment schedule: ")?;
                let result = self.bank.find_loan(&id).map(|loan| {
                    format!(
                        "Monthly Payment: {}",
                        two_places(loan.generate_payment_schedule())
                    )
                });
                notify(&mut self.output, result)?;
            }
            "9" => {
                let id = self.ask("Enter customer ID to view details: ")?;
                notify(&mut self.output, self.bank.get_customer_details(&id))?;
            }
            "10" => {
                if self.bank.customer_count() == 0 {
                    writeln!(self.output, "No customers found.")?;
                } else {
                    let report = CustomerReport::from_bank(&self.bank);
                    self.show(&report, false)?;
                }
            }
            "11" => {
                if self.bank.loan_count() == 0 {
                    writeln!(self.output, "No loans found.")?;
                } else {
                    let report = LoanReport::from_bank(&self.bank);
                    self.show(&report, false)?;
                }
            }
            "12" => return Ok(Flow::Exit),
            "13" => {
                let id = self.ask("Enter customer ID to show amortization schedule: ")?;
                match self.bank.find_loan(&id) {
                    Ok(loan) => match ScheduleReport::from_loan(loan) {
                        Some(report) => self.show(&report, true)?,
                        None => writeln!(
                            self.output,
                            "Schedule too long to display: {} months (limit {}).",
                            loan.loan_term, MAX_SCHEDULE_MONTHS
                        )?,
                    },
                    Err(err) => writeln!(self.output, "{}", err)?,
                }
            }
            _ => writeln!(self.output, "Invalid choice. Please try again.")?,
        }

        Ok(Flow::Continue)
    }

    fn add_customer(&mut self) -> Result<(), MenuError> {
        let id = self.ask("Enter customer ID: ")?;
        let name = self.ask("Enter customer name: ")?;
        let address = self.ask("Enter customer address: ")?;

        let result = self.bank.add_customer(Customer::new(id, name, address));
        notify(&mut self.output, result)?;
        Ok(())
    }

    fn update_customer(&mut self) -> Result<(), MenuError> {
        let id = self.ask("Enter customer ID to update: ")?;
        let name = self.ask("Enter new name (leave blank to skip): ")?;
        let address = self.ask("Enter new address (leave blank to skip): ")?;

        let update = CustomerUpdate {
            name: optional_text(&name),
            address: optional_text(&address),
        };
        let result = self.bank.update_customer(&id, update);
        notify(&mut self.output, result)?;
        Ok(())
    }

    fn add_loan(&mut self) -> Result<(), MenuError> {
        let id = self.ask("Enter customer ID for the loan: ")?;
        let amount: Decimal = parse_required(&self.ask("Enter loan amount: ")?, "loan amount")?;
        let rate: Decimal = parse_required(
            &self.ask("Enter interest rate (as a percentage): ")?,
            "interest rate",
        )?;
        let term: i32 = parse_required(&self.ask("Enter loan term (in years): ")?, "loan term")?;

        let result = self.bank.add_loan(Loan::new(id, amount, rate, term));
        notify(&mut self.output, result)?;
        Ok(())
    }

    fn update_loan(&mut self) -> Result<(), MenuError> {
        let id = self.ask("Enter customer ID to update loan: ")?;
        let amount = self.ask("Enter new loan amount (leave blank to skip): ")?;
        let rate = self.ask("Enter new interest rate (leave blank to skip): ")?;
        let term = self.ask("Enter new loan term in years (leave blank to skip): ")?;

        let update = LoanUpdate {
            loan_amount: parse_optional(&amount, "loan amount")?,
            interest_rate: parse_optional(&rate, "interest rate")?,
            loan_term: parse_optional(&term, "loan term")?,
        };
        let result = self.bank.update_loan(&id, update);
        notify(&mut self.output, result)?;
        Ok(())
    }

    /// Render a report with the configured exporter, after a blank line
    fn show(&mut self, report: &dyn ReportData, with_summary: bool) -> io::Result<()> {
        let rendered = exporter(self.format, with_summary).export(report);
        writeln!(self.output)?;
        write!(self.output, "{}", rendered)?;
        if !rendered.ends_with('\n') {
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Prompt and read one line, without its line ending
    fn ask(&mut self, prompt: &str) -> Result<String, MenuError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::Eof);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

fn exporter(format: DisplayFormat, with_summary: bool) -> Box<dyn ReportExporter> {
    match format {
        DisplayFormat::Table if with_summary => Box::new(TableExporter::new().with_summary()),
        DisplayFormat::Table => Box::new(TableExporter::new()),
        DisplayFormat::Csv => Box::new(CsvExporter::new()),
        DisplayFormat::Json => Box::new(JsonExporter::new()),
        DisplayFormat::Markdown if with_summary => Box::new(MarkdownExporter::new()),
        DisplayFormat::Markdown => Box::new(MarkdownExporter::new().without_summary()),
    }
}

fn two_places(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Print either the success value or the failure notification
fn notify<W: Write, T: Display, E: Display>(output: &mut W, result: Result<T, E>) -> io::Result<()> {
    match result {
        Ok(value) => writeln!(output, "{}", value),
        Err(err) => writeln!(output, "{}", err),
    }
}
