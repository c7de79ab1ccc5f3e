//! # Menu Loop
//!
//! The interactive session: one inventory, five actions, until saved or
//! abandoned.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   load + low-stock alerts                                              │
//! │          │                                                              │
//! │          ▼                                                              │
//! │   ┌─────────────┐  1 view │ 2 daily │ 3 order │ 4 waste │ other        │
//! │   │   Running   │◄────────────────────────────────────────────┐        │
//! │   └──────┬──────┘                                             │        │
//! │          │                                                    │        │
//! │          ├── 5, save ok ─────► Terminated   (SessionEnd::Saved)        │
//! │          ├── 5, save fails ──► error shown, still Running ────┘        │
//! │          └── EOF / Ctrl-C ───► Terminated   (SessionEnd::Abandoned)    │
//! │                                 nothing is written                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;
use std::ops::ControlFlow;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info, warn};

use stockroom_core::{Inventory, OrderBuilder, SkipReason, TaxRate, WasteLog};
use stockroom_store::InventoryFile;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::input::{InputError, LineSource};
use crate::render::Renderer;

const MENU: &str = "
========== MENU ==========
1. View Inventory
2. Daily Inventory Entry
3. Place Order (with GST)
4. Log Wasted Products
5. Save and Exit
==========================
";

// =============================================================================
// Menu Choice
// =============================================================================

/// One of the five menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewInventory,
    DailyEntry,
    PlaceOrder,
    LogWaste,
    SaveAndExit,
}

/// Input that is not a menu option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a menu option: '{0}'")]
pub struct InvalidOption(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::ViewInventory),
            "2" => Ok(MenuChoice::DailyEntry),
            "3" => Ok(MenuChoice::PlaceOrder),
            "4" => Ok(MenuChoice::LogWaste),
            "5" => Ok(MenuChoice::SaveAndExit),
            other => Err(InvalidOption(other.to_string())),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Option 5 succeeded; the file holds the session's changes.
    Saved,

    /// Input ended or was interrupted; the file was not touched.
    Abandoned,
}

/// `Break` when input ended in the middle of an action.
type Step = ControlFlow<()>;

/// An interactive session over one loaded inventory.
pub struct Session<I, W> {
    inventory: Inventory,
    file: InventoryFile,
    tax_rate: TaxRate,
    renderer: Renderer,
    input: I,
    out: W,
    state: SessionState,
}

impl<I: LineSource, W: Write> Session<I, W> {
    pub fn new(config: &AppConfig, file: InventoryFile, inventory: Inventory, input: I, out: W) -> Self {
        Session {
            inventory,
            file,
            tax_rate: config.tax_rate,
            renderer: Renderer::new(config.currency_symbol.as_str()),
            input,
            out,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The in-memory inventory, including unsaved changes.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Runs the menu until the session terminates.
    ///
    /// ## Returns
    /// - `Ok(SessionEnd::Saved)` after a successful option 5
    /// - `Ok(SessionEnd::Abandoned)` on end of input or Ctrl-C
    /// - `Err(AppError)` if the terminal itself fails
    pub fn run(&mut self) -> AppResult<SessionEnd> {
        self.renderer.low_stock_alerts(&mut self.out, &self.inventory)?;

        while self.state == SessionState::Running {
            write!(self.out, "{}", MENU)?;

            let Some(line) = self.prompt("Choose an option: ")? else {
                return Ok(self.abandon());
            };

            let step = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(InvalidOption(other)) => {
                    debug!(input = %other, "Unknown menu option");
                    writeln!(self.out, "Invalid option.")?;
                    ControlFlow::Continue(())
                }
            };

            if step.is_break() {
                return Ok(self.abandon());
            }
        }

        Ok(SessionEnd::Saved)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> AppResult<Step> {
        debug!(?choice, "Menu choice");

        match choice {
            MenuChoice::ViewInventory => {
                self.renderer.low_stock_alerts(&mut self.out, &self.inventory)?;
                self.renderer.inventory_table(&mut self.out, &self.inventory)?;
                Ok(ControlFlow::Continue(()))
            }
            MenuChoice::DailyEntry => {
                self.renderer.low_stock_alerts(&mut self.out, &self.inventory)?;
                self.daily_entry()
            }
            MenuChoice::PlaceOrder => {
                self.renderer.low_stock_alerts(&mut self.out, &self.inventory)?;
                self.place_order()
            }
            MenuChoice::LogWaste => self.log_waste(),
            MenuChoice::SaveAndExit => {
                self.save()?;
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    /// Overwrites each item's box count in turn; bad entries are skipped.
    fn daily_entry(&mut self) -> AppResult<Step> {
        writeln!(self.out, "\n================= Daily Inventory Entry =================")?;

        let (mut updated, mut skipped) = (0usize, 0usize);
        for index in 0..self.inventory.len() {
            let Some(prompt) = self.item_prompt(index, "Boxes on hand") else {
                continue;
            };
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(ControlFlow::Break(()));
            };

            let Some(item) = self.inventory.get_mut(index) else {
                continue;
            };
            match item.record_count(&line) {
                Ok(count) => {
                    debug!(name = %item.name, count, "Recorded box count");
                    updated += 1;
                }
                Err(skip) => {
                    debug!(name = %item.name, %skip, "Skipped box count");
                    writeln!(self.out, "Invalid input, skipping.")?;
                    skipped += 1;
                }
            }
        }

        info!(updated, skipped, "Daily entry complete");
        Ok(ControlFlow::Continue(()))
    }

    /// Collects order lines until `done`, then prints the receipt.
    fn place_order(&mut self) -> AppResult<Step> {
        self.renderer.inventory_table(&mut self.out, &self.inventory)?;
        writeln!(self.out, "\n================= Place Order =================")?;

        let mut order = OrderBuilder::new(self.tax_rate);
        loop {
            let Some(choice) = self.prompt("Enter product number to order (or 'done'): ")? else {
                return Ok(ControlFlow::Break(()));
            };
            let choice = choice.trim();
            if choice.eq_ignore_ascii_case("done") {
                break;
            }

            let Ok(index) = self.inventory.resolve(choice) else {
                writeln!(self.out, "Invalid choice.")?;
                continue;
            };
            let Some(prompt) = self
                .inventory
                .get(index)
                .map(|item| format!("How many boxes of {} to order? ", item.display_name()))
            else {
                continue;
            };

            let Some(quantity) = self.prompt(&prompt)? else {
                return Ok(ControlFlow::Break(()));
            };

            let Some(item) = self.inventory.get(index) else {
                continue;
            };
            match order.add_line(index, item, &quantity) {
                Ok(line) => debug!(name = %line.name, boxes = line.boxes, "Order line accepted"),
                Err(skip) if skip.reason == SkipReason::Zero => writeln!(self.out, "Must be > 0")?,
                Err(skip) if skip.reason == SkipReason::TooLarge => {
                    warn!(%skip, "Order line would overflow the order total");
                    writeln!(self.out, "Order total too large, skipping.")?;
                }
                Err(skip) => {
                    debug!(%skip, "Order line skipped");
                    writeln!(self.out, "Invalid quantity.")?;
                }
            }
        }

        match order.finish() {
            Ok(receipt) => {
                info!(
                    lines = receipt.lines.len(),
                    boxes = receipt.total_boxes(),
                    total = %receipt.total,
                    "Order priced"
                );
                self.renderer.receipt(&mut self.out, &receipt)?;
            }
            Err(err) => debug!(%err, "No order placed"),
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Prices wasted units for every item; stock is not changed.
    fn log_waste(&mut self) -> AppResult<Step> {
        writeln!(self.out, "\n=== Waste Tracking ===")?;

        let mut log = WasteLog::new();
        for index in 0..self.inventory.len() {
            let Some(prompt) = self.item_prompt(index, "Units wasted") else {
                continue;
            };
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(ControlFlow::Break(()));
            };

            let Some(item) = self.inventory.get(index) else {
                continue;
            };
            if let Err(skip) = log.record(item, &line) {
                debug!(name = %item.name, %skip, "Skipped waste entry");
                match skip.reason {
                    SkipReason::NoUnitPrice => writeln!(
                        self.out,
                        "{} has no units per box, skipping.",
                        item.display_name()
                    )?,
                    SkipReason::TooLarge => writeln!(self.out, "Waste total too large, skipping.")?,
                    _ => writeln!(self.out, "Invalid input, skipping.")?,
                }
            }
        }

        self.renderer.waste_total(&mut self.out, &log)?;
        info!(
            items = log.lines().len(),
            units = log.total_units(),
            total = %log.total(),
            "Waste logged"
        );
        Ok(ControlFlow::Continue(()))
    }

    fn save(&mut self) -> AppResult<()> {
        match self.file.save(&self.inventory) {
            Ok(()) => {
                writeln!(self.out, "Saved and exiting.")?;
                self.state = SessionState::Terminated;
            }
            Err(err) => {
                warn!(%err, "Save failed; session continues");
                writeln!(self.out, "Save failed: {err}")?;
            }
        }
        Ok(())
    }

    fn abandon(&mut self) -> SessionEnd {
        info!("Session ended without saving");
        self.state = SessionState::Terminated;
        SessionEnd::Abandoned
    }

    /// `"2. Cheese Slice - {label}: "`
    fn item_prompt(&self, index: usize, label: &str) -> Option<String> {
        self.inventory
            .get(index)
            .map(|item| format!("{}. {} - {label}: ", index + 1, item.display_name()))
    }

    /// Reads one answer. End of input and Ctrl-C both come back as `None`.
    fn prompt(&mut self, prompt: &str) -> AppResult<Option<String>> {
        self.out.flush()?;
        match self.input.read_line(prompt) {
            Ok(line) => Ok(line),
            Err(InputError::Interrupted) => {
                writeln!(self.out)?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ReaderInput;
    use std::fs;
    use std::io;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    const SAMPLE: &str = "\
name,quantity,price,units_per_box,critical_level
burger bun,5,7.85,144,2
cheese slice,1,12.00,200,1
";

    struct Harness {
        _dir: TempDir,
        file: InventoryFile,
    }

    impl Harness {
        fn new() -> Self {
            let dir = tempdir().unwrap();
            let path = dir.path().join("inventory.csv");
            fs::write(&path, SAMPLE).unwrap();
            Harness {
                _dir: dir,
                file: InventoryFile::new(path),
            }
        }

        fn path(&self) -> &Path {
            self.file.path()
        }

        fn with_contents(text: &str) -> Self {
            let harness = Harness::new();
            fs::write(harness.path(), text).unwrap();
            harness
        }

        /// Runs a scripted session and returns how it ended plus its output.
        fn run(&self, script: &str) -> (SessionEnd, String, Inventory) {
            self.run_bytes(script.as_bytes())
        }

        fn run_bytes(&self, script: &[u8]) -> (SessionEnd, String, Inventory) {
            let mut file = self.file.clone();
            let inventory = file.load().unwrap();
            let input = ReaderInput::new(script, io::sink());
            let mut session = Session::new(
                &AppConfig::default(),
                file,
                inventory,
                input,
                Vec::new(),
            );

            let end = session.run().unwrap();
            assert_eq!(session.state(), SessionState::Terminated);
            let inventory = session.inventory().clone();
            (end, String::from_utf8(session.out).unwrap(), inventory)
        }
    }

    /// Input that reports Ctrl-C on the first prompt.
    struct Interrupt;

    impl LineSource for Interrupt {
        fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, InputError> {
            Err(InputError::Interrupted)
        }
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(" 3 ".parse::<MenuChoice>(), Ok(MenuChoice::PlaceOrder));
        assert_eq!("5".parse::<MenuChoice>(), Ok(MenuChoice::SaveAndExit));
        assert!("6".parse::<MenuChoice>().is_err());
        assert!("view".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_startup_shows_alerts_and_menu() {
        let harness = Harness::new();
        let (end, output, _) = harness.run("");

        assert_eq!(end, SessionEnd::Abandoned);
        assert!(output.starts_with("\n !!! LOW STOCK ALERTS !!!\n- Cheese Slice: Only 1 boxes left"));
        assert!(output.contains("1. View Inventory\n"));
    }

    #[test]
    fn test_unsaved_exit_leaves_file_untouched() {
        let harness = Harness::new();
        let (end, _, inventory) = harness.run("2\n9\n8\n");

        assert_eq!(end, SessionEnd::Abandoned);
        assert_eq!(inventory.items()[0].quantity, 9);
        assert_eq!(fs::read_to_string(harness.path()).unwrap(), SAMPLE);
    }

    #[test]
    fn test_save_writes_new_counts() {
        let harness = Harness::new();
        let (end, output, _) = harness.run("2\n9\nlots\n5\n");

        assert_eq!(end, SessionEnd::Saved);
        assert!(output.contains("Invalid input, skipping.\n"));
        assert!(output.ends_with("Saved and exiting.\n"));
        assert_eq!(
            fs::read_to_string(harness.path()).unwrap(),
            SAMPLE.replace("burger bun,5,", "burger bun,9,")
        );
    }

    #[test]
    fn test_view_shows_alerts_then_listing() {
        let harness = Harness::new();
        let (_, output, _) = harness.run("1\n");

        let alerts = output.rfind("!!! LOW STOCK ALERTS !!!").unwrap();
        let table = output.find("INVENTORY =").unwrap();
        assert!(alerts < table);
        assert!(output.contains("2   Cheese Slice         1        $12.00     $0.060\n"));
    }

    #[test]
    fn test_order_prints_receipt_and_keeps_stock() {
        let harness = Harness::new();
        let script = "3\nburger bun\n2\n9\n2\nx\n2\n0\n2\n1\ndone\n";
        let (_, output, inventory) = harness.run(script);

        assert!(output.contains("Invalid choice.\n"));
        assert!(output.contains("Invalid quantity.\n"));
        assert!(output.contains("Must be > 0\n"));
        assert!(output.contains("Subtotal: $27.70\nGST (5%): $1.39\nTotal: $29.09\n"));

        assert_eq!(inventory.items()[0].quantity, 5);
        assert_eq!(inventory.items()[1].quantity, 1);
    }

    #[test]
    fn test_empty_order_prints_no_receipt() {
        let harness = Harness::new();
        let (_, output, _) = harness.run("3\ndone\n");
        assert!(!output.contains("Order Summary"));
    }

    #[test]
    fn test_waste_total() {
        let harness = Harness::new();
        let (_, output, inventory) = harness.run("4\n10\nnone\n");

        assert!(output.contains("Invalid input, skipping.\n"));
        assert!(output.contains("Total cost of waste: $0.55\n"));
        assert_eq!(inventory.items()[0].quantity, 5);
    }

    #[test]
    fn test_invalid_option() {
        let harness = Harness::new();
        let (_, output, _) = harness.run("9\n");
        assert!(output.contains("Invalid option.\n"));
    }

    #[test]
    fn test_failed_save_keeps_session_running() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        fs::write(&path, SAMPLE).unwrap();
        let inventory = InventoryFile::new(&path).load().unwrap();
        let unwritable = InventoryFile::new(dir.path().join("gone").join("inventory.csv"));
        let input = ReaderInput::new("5\n".as_bytes(), io::sink());
        let mut session = Session::new(&AppConfig::default(), unwritable, inventory, input, Vec::new());

        let end = session.run().unwrap();
        let output = String::from_utf8(session.out).unwrap();

        assert_eq!(end, SessionEnd::Abandoned);
        assert!(output.contains("Save failed: "));
        assert!(!output.contains("Saved and exiting."));
        // The menu came back after the failure.
        assert_eq!(output.matches("5. Save and Exit").count(), 2);
    }

    #[test]
    fn test_interrupt_abandons_session() {
        let harness = Harness::new();
        let mut file = harness.file.clone();
        let inventory = file.load().unwrap();
        let mut session = Session::new(
            &AppConfig::default(),
            file,
            inventory,
            Interrupt,
            Vec::new(),
        );

        assert_eq!(session.run().unwrap(), SessionEnd::Abandoned);
        assert_eq!(fs::read_to_string(harness.path()).unwrap(), SAMPLE);
    }

    #[test]
    fn test_garbled_answer_is_skipped() {
        let harness = Harness::new();
        let (end, output, _) = harness.run_bytes(b"2\n\xff\xfe\n3\n5\n");

        assert_eq!(end, SessionEnd::Saved);
        assert!(output.contains("Invalid input, skipping.\n"));
        assert_eq!(
            fs::read_to_string(harness.path()).unwrap(),
            SAMPLE.replace("cheese slice,1,", "cheese slice,3,")
        );
    }

    #[test]
    fn test_crlf_file_is_saved_with_crlf() {
        let crlf = SAMPLE.replace('\n', "\r\n");
        let harness = Harness::with_contents(&crlf);
        let (end, _, _) = harness.run("2\n9\n1\n5\n");

        assert_eq!(end, SessionEnd::Saved);
        assert_eq!(
            fs::read(harness.path()).unwrap(),
            crlf.replace("burger bun,5,", "burger bun,9,").into_bytes()
        );
    }

    #[test]
    fn test_oversized_amounts_are_skipped() {
        let text = format!("{SAMPLE}gold bar,1,79228162514264337593543950335,1,1\n");
        let harness = Harness::with_contents(&text);

        let (_, output, _) = harness.run("3\n3\n2\n2\n1\ndone\n");
        assert!(output.contains("Order total too large, skipping.\n"));
        assert!(output.contains("Total: $12.60\n"));

        let (_, output, _) = harness.run("4\n0\n0\n2\n");
        assert!(output.contains("Waste total too large, skipping.\n"));
        assert!(output.contains("Total cost of waste: $0.00\n"));
    }
}
