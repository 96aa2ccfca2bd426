//! Interactive numbered menu.
//!
//! One blocking read-eval loop: print the menu, read a choice, run the
//! operation to completion, repeat. The store is loaded once before the
//! loop and saved once when the user exits (or input ends).

use crate::domain::{clean_phone, validate_email};
use crate::models::{Contact, ContactStore};
use crate::reports::{export_csv, ContactStatistics, DEFAULT_EXPORT_FILE};
use crate::repositories::ContactRepository;
use crate::services::{
    is_confirmation, ContactService, ContactUpdate, DeleteOutcome, NewContact,
};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};

const RULE: &str = "========================================";

/// A top-level menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Update,
    Delete,
    ViewAll,
    Export,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Search),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::ViewAll),
            "6" => Some(Self::Export),
            "7" => Some(Self::Statistics),
            "8" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The menu session: owns the I/O handles and borrows the repository.
pub struct Menu<'r, R, W> {
    input: R,
    output: W,
    repository: &'r dyn ContactRepository,
    service: ContactService,
    export_file: PathBuf,
}

impl<'r, R: BufRead, W: Write> Menu<'r, R, W> {
    /// Create a menu reading commands from `input` and echoing to `output`.
    pub fn new(repository: &'r dyn ContactRepository, input: R, output: W) -> Self {
        Self {
            input,
            output,
            repository,
            service: ContactService::new(),
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }

    /// Use a specific service (e.g. one with a pinned clock).
    pub fn with_service(mut self, service: ContactService) -> Self {
        self.service = service;
        self
    }

    /// Set where "Export to CSV" writes.
    pub fn with_export_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_file = path.into();
        self
    }

    /// Run until the user picks Exit or input ends, then save.
    ///
    /// Load and save failures are fatal and returned; everything else is
    /// reported on the output and the loop continues. The final store is
    /// returned after a successful save.
    pub fn run(mut self) -> Result<ContactStore> {
        let mut store = match self.repository.load().context("Failed to load contacts")? {
            Some(store) => {
                writeln!(self.output, "✔ Loaded {} contact(s).", store.len())?;
                store
            }
            None => {
                writeln!(self.output, "✔ Starting with an empty contact book.")?;
                ContactStore::new()
            }
        };

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice (1-8): ")? else {
                info!("Input closed, saving and exiting");
                writeln!(self.output)?;
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add_contact(&mut store)?,
                Some(MenuChoice::Search) => self.search_contacts(&store)?,
                Some(MenuChoice::Update) => self.update_contact(&mut store)?,
                Some(MenuChoice::Delete) => self.delete_contact(&mut store)?,
                Some(MenuChoice::ViewAll) => self.display_all(&store)?,
                Some(MenuChoice::Export) => self.export(&store)?,
                Some(MenuChoice::Statistics) => self.show_statistics(&store)?,
                Some(MenuChoice::Exit) => break,
                None => writeln!(self.output, "Invalid choice. Please select 1-8.")?,
            }
        }

        self.repository
            .save(&store)
            .context("Failed to save contacts")?;
        writeln!(self.output, "✔ Contacts saved successfully.")?;
        writeln!(self.output, "Thank you for using Contact Book!")?;
        self.output.flush()?;
        Ok(store)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "     CONTACT BOOK")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "1. Add Contact")?;
        writeln!(self.output, "2. Search Contact")?;
        writeln!(self.output, "3. Update Contact")?;
        writeln!(self.output, "4. Delete Contact")?;
        writeln!(self.output, "5. View All Contacts")?;
        writeln!(self.output, "6. Export to CSV")?;
        writeln!(self.output, "7. View Statistics")?;
        writeln!(self.output, "8. Exit")?;
        Ok(())
    }

    /// Print `label` and read one line. `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn report(&mut self, message: impl std::fmt::Display) -> Result<()> {
        info!(%message, "Operation rejected");
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn add_contact(&mut self, store: &mut ContactStore) -> Result<()> {
        writeln!(self.output, "\n--- ADD NEW CONTACT ---")?;

        let Some(name) = self.prompt("Enter contact name: ")? else {
            return Ok(());
        };
        if let Err(e) = self.service.check_new_name(store, &name) {
            return self.report(e);
        }

        let Some(phone) = self.prompt("Enter phone number: ")? else {
            return Ok(());
        };
        if let Err(e) = clean_phone(phone.trim()) {
            return self.report(e);
        }

        let Some(email) = self.prompt("Enter email (optional): ")? else {
            return Ok(());
        };
        if !validate_email(email.trim()) {
            return self.report("Invalid email format.");
        }

        let Some(address) = self.prompt("Enter address (optional): ")? else {
            return Ok(());
        };
        let Some(group) = self.prompt("Enter group (Friends/Work/Family): ")? else {
            return Ok(());
        };

        let input = NewContact {
            name,
            phone,
            email,
            address,
            group,
        };
        match self.service.add(store, input) {
            Ok((name, _)) => writeln!(self.output, "✔ Contact '{}' added successfully.", name)?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn search_contacts(&mut self, store: &ContactStore) -> Result<()> {
        let Some(query) = self.prompt("Enter name to search: ")? else {
            return Ok(());
        };

        let matches = self.service.search(store, &query);
        if matches.is_empty() {
            writeln!(self.output, "No matching contacts found.")?;
            return Ok(());
        }

        for (name, contact) in matches {
            write_details(&mut self.output, name, contact)?;
        }
        Ok(())
    }

    fn update_contact(&mut self, store: &mut ContactStore) -> Result<()> {
        let Some(name) = self.prompt("Enter contact name to update: ")? else {
            return Ok(());
        };
        let name = name.trim().to_string();
        if !store.contains(&name) {
            return self.report(format!("Contact '{}' not found.", name));
        }

        let Some(phone) = self.prompt("Enter new phone (leave blank to keep old): ")? else {
            return Ok(());
        };
        if !phone.trim().is_empty() {
            if let Err(e) = clean_phone(phone.trim()) {
                return self.report(e);
            }
        }

        let Some(email) = self.prompt("Enter new email (leave blank to keep old): ")? else {
            return Ok(());
        };
        if !validate_email(email.trim()) {
            return self.report("Invalid email format.");
        }

        let Some(address) = self.prompt("Enter new address (leave blank to keep old): ")? else {
            return Ok(());
        };
        let Some(group) = self.prompt("Enter new group (leave blank to keep old): ")? else {
            return Ok(());
        };

        let changes = ContactUpdate {
            phone,
            email,
            address,
            group,
        };
        match self.service.update(store, &name, changes) {
            Ok(_) => writeln!(self.output, "✔ Contact '{}' updated successfully.", name)?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn delete_contact(&mut self, store: &mut ContactStore) -> Result<()> {
        let Some(name) = self.prompt("Enter contact name to delete: ")? else {
            return Ok(());
        };
        let name = name.trim().to_string();
        if !store.contains(&name) {
            return self.report(format!("Contact '{}' not found.", name));
        }

        let question = format!("Are you sure you want to delete '{}'? (y/n): ", name);
        let confirmed = self
            .prompt(&question)?
            .map(|answer| is_confirmation(&answer))
            .unwrap_or(false);

        match self.service.delete(store, &name, confirmed) {
            Ok(DeleteOutcome::Deleted(_)) => writeln!(self.output, "✔ Contact '{}' deleted.", name)?,
            Ok(DeleteOutcome::Cancelled) => writeln!(self.output, "Deletion cancelled.")?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn display_all(&mut self, store: &ContactStore) -> Result<()> {
        let contacts = self.service.list(store);
        if contacts.is_empty() {
            writeln!(self.output, "No contacts available.")?;
            return Ok(());
        }

        writeln!(self.output, "\n--- ALL CONTACTS ---")?;
        for (name, contact) in contacts {
            writeln!(self.output, "\n{}", name)?;
            writeln!(self.output, " Phone: {}", contact.phone)?;
            writeln!(self.output, " Group: {}", contact.group)?;
        }
        Ok(())
    }

    fn export(&mut self, store: &ContactStore) -> Result<()> {
        match export_csv(store, &self.export_file) {
            Ok(rows) => writeln!(
                self.output,
                "✔ Exported {} contact(s) to {}.",
                rows,
                self.export_file.display()
            )?,
            Err(e) => {
                error!(error = %e, "CSV export failed");
                writeln!(self.output, "Export failed: {}", e)?;
            }
        }
        Ok(())
    }

    fn show_statistics(&mut self, store: &ContactStore) -> Result<()> {
        writeln!(self.output, "\n--- CONTACT STATISTICS ---")?;
        write!(self.output, "{}", ContactStatistics::from_store(store))?;
        Ok(())
    }
}

/// Full view of one contact, as printed by search.
fn write_details<W: Write>(out: &mut W, name: &str, contact: &Contact) -> Result<()> {
    writeln!(out, "\nName: {}", name)?;
    writeln!(out, " Phone: {}", contact.phone)?;
    if let Some(email) = &contact.email {
        writeln!(out, " Email: {}", email)?;
    }
    if let Some(address) = &contact.address {
        writeln!(out, " Address: {}", address)?;
    }
    writeln!(out, " Group: {}", contact.group)?;
    Ok(())
}
