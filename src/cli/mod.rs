//! Interactive console shell for the contact book.
//!
//! The shell reads menu choices and field values line by line, calls the
//! contact store, and turns every store error into a message. It works over
//! any `BufRead`/`Write` pair so whole sessions can be scripted in tests.

pub mod menu;
pub mod prompt;

pub use menu::MenuChoice;
pub use prompt::Prompter;

use crate::domain::{Birthdate, EmailAddress, MobileNumber};
use crate::models::{Contact, ContactUpdate};
use crate::repositories::ContactRepository;
use crate::services::{Confirmation, ContactStore, Position};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// One interactive session over a contact store.
pub struct Session<'a, R: ContactRepository, I, O> {
    store: &'a mut ContactStore<R>,
    prompter: Prompter<I, O>,
}

impl<'a, R: ContactRepository, I: BufRead, O: Write> Session<'a, R, I, O> {
    pub fn new(store: &'a mut ContactStore<R>, input: I, output: O) -> Self {
        Self {
            store,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// Returns the output sink so callers can inspect what was written.
    pub fn run(mut self) -> io::Result<O> {
        info!(contacts = self.store.len(), "Session started");

        match self.menu_loop() {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("Input closed, ending session");
            }
            Err(e) => return Err(e),
        }

        info!(contacts = self.store.len(), "Session ended");
        Ok(self.prompter.into_output())
    }

    fn menu_loop(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let answer = self.prompter.ask("Enter your choice: ")?;

            let Some(choice) = MenuChoice::parse(&answer) else {
                self.say("Error: Invalid input! Please enter a number from the menu.")?;
                self.say("")?;
                continue;
            };

            self.say("")?;
            match choice {
                MenuChoice::Add => self.add_contact()?,
                MenuChoice::ShowAll => self.show_all_contacts()?,
                MenuChoice::ShowDetails => self.show_contact_details()?,
                MenuChoice::Update => self.update_contact()?,
                MenuChoice::Delete => self.delete_contact()?,
                MenuChoice::Exit => {
                    self.say("Exiting the application. Goodbye!")?;
                    return Ok(());
                }
                MenuChoice::Unknown(_) => {
                    self.say("Invalid choice! Please select from the menu.")?;
                }
            }
            self.say("")?;
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        self.say(menu::RULE)?;
        self.say("           Main Menu")?;
        self.say(menu::RULE)?;
        for option in menu::MENU_OPTIONS {
            self.say(option)?;
        }
        self.say(menu::RULE)
    }

    fn add_contact(&mut self) -> io::Result<()> {
        self.say("=== Add New Contact ===")?;

        let first_name = self.prompter.ask("First Name: ")?;
        let last_name = self.prompter.ask("Last Name: ")?;
        let company = self.prompter.ask("Company: ")?;
        let mobile = self
            .prompter
            .ask_until("Mobile Number (9-digit, non-zero): ", |s| MobileNumber::new(s))?;
        let email = self.prompter.ask_until("Email: ", |s| EmailAddress::new(s))?;
        let birthdate = self
            .prompter
            .ask_until("Birthdate (e.g. 1 Jan 1990): ", |s| Birthdate::parse(&s))?;

        self.store.add(Contact::new(
            first_name, last_name, company, mobile, email, birthdate,
        ));
        self.say("Contact added successfully!")
    }

    fn show_all_contacts(&mut self) -> io::Result<()> {
        self.say("=== All Contacts ===")?;
        self.print_list()
    }

    fn print_list(&mut self) -> io::Result<()> {
        let lines: Vec<String> = match self.store.list() {
            Some(entries) => entries
                .map(|(index, summary)| format!("{}. {}", index, summary))
                .collect(),
            None => vec!["No contacts available.".to_string()],
        };

        for line in &lines {
            self.say(line)?;
        }
        Ok(())
    }

    fn show_contact_details(&mut self) -> io::Result<()> {
        self.say("=== Show Contact Details ===")?;
        let Some(position) = self.choose_contact("No contacts to show.")? else {
            return Ok(());
        };

        match self.store.detail(position) {
            Ok(details) => {
                self.say("")?;
                self.say(&details)
            }
            Err(e) => self.say(&format!("Error: {}", e)),
        }
    }

    fn update_contact(&mut self) -> io::Result<()> {
        self.say("=== Update Contact ===")?;
        let Some(position) = self.choose_contact("No contacts to update.")? else {
            return Ok(());
        };

        let current = match self.store.get(position) {
            Ok(contact) => contact.clone(),
            Err(e) => return self.say(&format!("Error: {}", e)),
        };

        self.say("Leave field blank to keep the current value.")?;
        self.say("")?;

        let update = ContactUpdate {
            first_name: self.ask_with_current("First Name", &current.first_name)?,
            last_name: self.ask_with_current("Last Name", &current.last_name)?,
            company: self.ask_with_current("Company", &current.company)?,
            mobile: self.ask_with_current("Mobile Number", current.mobile.as_str())?,
            email: self.ask_with_current("Email", current.email.as_str())?,
            birthdate: self.ask_with_current("Birthdate", &current.birthdate.to_string())?,
        };

        match self.store.update(position, &update) {
            Ok(report) => {
                for warning in &report.warnings {
                    self.say(&format!("Error: {}", warning))?;
                }
                self.say("Contact updated successfully!")
            }
            Err(e) => self.say(&format!("Error: {}", e)),
        }
    }

    fn delete_contact(&mut self) -> io::Result<()> {
        self.say("=== Delete Contact ===")?;
        let Some(position) = self.choose_contact("No contacts to delete.")? else {
            return Ok(());
        };

        let summary = match self.store.get(position) {
            Ok(contact) => contact.to_string(),
            Err(e) => return self.say(&format!("Error: {}", e)),
        };

        self.say(&format!("Are you sure you want to delete {}? (y/n)", summary))?;
        let answer = self.prompter.ask("")?;

        match self.store.delete(position, Confirmation::from_answer(&answer)) {
            Ok(Some(_)) => self.say("Contact deleted successfully!"),
            Ok(None) => self.say("Delete cancelled."),
            Err(e) => self.say(&format!("Error: {}", e)),
        }
    }

    /// Show the list and read one index.
    ///
    /// Returns `None` after printing a message when the store is empty or the
    /// index is rejected.
    fn choose_contact(&mut self, empty_message: &str) -> io::Result<Option<Position>> {
        if self.store.is_empty() {
            self.say(empty_message)?;
            return Ok(None);
        }

        self.print_list()?;
        let answer = self.prompter.ask("Enter index of the contact number: ")?;

        match self.store.resolve_index(&answer) {
            Ok(position) => Ok(Some(position)),
            Err(e) => {
                self.say(&format!("Error: {}", e))?;
                Ok(None)
            }
        }
    }

    fn ask_with_current(&mut self, label: &str, current: &str) -> io::Result<String> {
        self.prompter.ask(&format!("{} ({}): ", label, current))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        self.prompter.say(line)
    }
}

/// Run an interactive session over stdin and stdout.
pub fn run_stdio<R: ContactRepository>(store: &mut ContactStore<R>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let _stdout = Session::new(store, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
