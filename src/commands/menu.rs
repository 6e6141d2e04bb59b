//! # Menu Command
//!
//! Numbered text menu over the tracker. Reads from any `BufRead` and writes
//! to any `Write`, so sessions can be scripted.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use super::{open_tracker, parse_coordinate};
use crate::{
    config::Config,
    item::{timestamp, Item, ItemKind, Region},
    tracker::{NewItem, Tracker},
};

const RULE: &str =
    "--------------------------------------------------------------------------------";

/// Answers that confirm saving on exit.
const YES_ANSWERS: [&str; 4] = ["y", "yes", "да", "д"];

/// Whether the menu loop keeps going.
enum Flow {
    Continue,
    Exit,
}

/// Text menu session.
pub struct Menu<'a, R, W> {
    tracker: &'a mut Tracker,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(tracker: &'a mut Tracker, input: R, output: W) -> Self {
        Self {
            tracker,
            input,
            output,
        }
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("\nChoose an action (1-7): ")? else {
                return Ok(());
            };

            let flow = match choice.as_str() {
                "1" => self.add()?,
                "2" => self.list_all()?,
                "3" => self.list_by_region()?,
                "4" => self.mark()?,
                "5" => self.stats()?,
                "6" => {
                    self.save()?;
                    Flow::Continue
                }
                "7" => {
                    self.exit()?;
                    Flow::Exit
                }
                _ => {
                    writeln!(
                        self.output,
                        "\nInvalid choice. Please enter a number from 1 to 7."
                    )?;
                    Flow::Continue
                }
            };

            if matches!(flow, Flow::Exit) {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "=".repeat(50))?;
        writeln!(self.output, "      lootlist - Menu")?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        writeln!(self.output, "1. Add item")?;
        writeln!(self.output, "2. List all items")?;
        writeln!(self.output, "3. List items by region")?;
        writeln!(self.output, "4. Mark item as collected")?;
        writeln!(self.output, "5. Show statistics")?;
        writeln!(self.output, "6. Save")?;
        writeln!(self.output, "7. Exit")
    }

    /// Prints the prompt and reads a trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nRegions:")?;
        for (i, region) in Region::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {region}", i + 1)?;
        }
        let Some(answer) = self.prompt("\nRegion number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(region) = pick(&Region::ALL, &answer) else {
            writeln!(self.output, "Invalid region number")?;
            return Ok(Flow::Continue);
        };

        let Some(name) = self.prompt("Item name: ")? else {
            return Ok(Flow::Exit);
        };
        if name.is_empty() {
            writeln!(self.output, "Name cannot be empty")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\nItem types:")?;
        for (i, kind) in ItemKind::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, kind.label())?;
        }
        let Some(answer) = self.prompt("\nType number: ")? else {
            return Ok(Flow::Exit);
        };
        if answer.parse::<i64>().is_err() {
            writeln!(self.output, "Error: enter a valid number")?;
            return Ok(Flow::Continue);
        }
        let kind = pick(&ItemKind::ALL, &answer).unwrap_or_default();

        let Some(x) = self.prompt("X coordinate: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(y) = self.prompt("Y coordinate: ")? else {
            return Ok(Flow::Exit);
        };
        let (x, y) = match (parse_coordinate(&x), parse_coordinate(&y)) {
            (Ok(x), Ok(y)) => (x, y),
            (Err(reason), _) | (_, Err(reason)) => {
                writeln!(self.output, "Error: {reason}")?;
                return Ok(Flow::Continue);
            }
        };

        let result = self.tracker.add(NewItem {
            name,
            region,
            x,
            y,
            kind,
        });
        match result {
            Ok(item) => {
                let line = format!("Added '{}' to {} (id {})", item.name, item.region, item.id);
                writeln!(self.output, "{line}")?;
            }
            Err(err) => writeln!(self.output, "Could not add item: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn list_all(&mut self) -> Result<Flow> {
        if self.tracker.is_empty() {
            writeln!(self.output, "\nThe item list is empty.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\nTotal items: {}", self.tracker.len())?;
        writeln!(self.output, "\n{RULE}")?;
        for (i, item) in self.tracker.list_all().iter().enumerate() {
            write_entry(&mut self.output, i + 1, item, true)?;
        }
        Ok(Flow::Continue)
    }

    fn list_by_region(&mut self) -> Result<Flow> {
        writeln!(self.output, "\nRegions:")?;
        for (i, region) in Region::ALL.iter().enumerate() {
            let items = self.tracker.list_by_region(*region);
            let collected = items.iter().filter(|item| item.collected).count();
            writeln!(
                self.output,
                "{}. {region} ({collected}/{})",
                i + 1,
                items.len()
            )?;
        }

        let Some(answer) = self.prompt("\nRegion number to view: ")? else {
            return Ok(Flow::Exit);
        };
        if answer.parse::<i64>().is_err() {
            writeln!(self.output, "Enter a valid number")?;
            return Ok(Flow::Continue);
        }
        let Some(region) = pick(&Region::ALL, &answer) else {
            writeln!(self.output, "Invalid region number")?;
            return Ok(Flow::Continue);
        };

        let items = self.tracker.list_by_region(region);
        if items.is_empty() {
            writeln!(self.output, "\nNo items in {region}.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\nItems in {region}: {}", items.len())?;
        writeln!(self.output, "\n{RULE}")?;
        for item in items {
            // Numbered by overall position so the number works with "mark"
            let number = self.tracker.position(&item.id).map_or(0, |p| p + 1);
            write_entry(&mut self.output, number, item, false)?;
        }
        Ok(Flow::Continue)
    }

    fn mark(&mut self) -> Result<Flow> {
        if self.tracker.is_empty() {
            writeln!(self.output, "\nThe item list is empty.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\nTotal items: {}", self.tracker.len())?;
        writeln!(self.output, "Enter an item number to mark it as collected.")?;
        writeln!(
            self.output,
            "Enter a negative number to mark it as not collected (e.g. -5)."
        )?;

        let Some(answer) = self.prompt("Item number: ")? else {
            return Ok(Flow::Exit);
        };
        if answer.is_empty() {
            return Ok(Flow::Continue);
        }
        let Ok(number) = answer.parse::<i64>() else {
            writeln!(self.output, "Enter a valid number")?;
            return Ok(Flow::Continue);
        };
        if number == 0 {
            writeln!(self.output, "Item number cannot be 0")?;
            return Ok(Flow::Continue);
        }

        let collected = number > 0;
        let id = usize::try_from(number.unsigned_abs() - 1)
            .ok()
            .and_then(|position| self.tracker.id_at(position));
        let Some(id) = id else {
            writeln!(self.output, "Invalid item number")?;
            return Ok(Flow::Continue);
        };

        let Some(notes) = self.prompt("Notes (Enter to skip): ")? else {
            return Ok(Flow::Exit);
        };

        match self.tracker.mark_collected(&id, collected, Some(&notes)) {
            Ok(item) => {
                let status = if collected { "collected" } else { "not collected" };
                let line = format!("'{}' marked as {status}", item.name);
                writeln!(self.output, "{line}")?;
            }
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn stats(&mut self) -> Result<Flow> {
        let stats = self.tracker.stats();
        writeln!(self.output, "\n{}", "=".repeat(40))?;
        writeln!(self.output, "           STATISTICS")?;
        writeln!(self.output, "{}", "=".repeat(40))?;
        writeln!(self.output, "Total items: {}", stats.total)?;
        writeln!(self.output, "Collected: {}", stats.collected)?;
        writeln!(self.output, "Remaining: {}", stats.remaining)?;
        writeln!(self.output, "Collected percentage: {:.1}%", stats.percentage)?;

        writeln!(self.output, "\nBy region:")?;
        for entry in self.tracker.region_stats() {
            writeln!(
                self.output,
                "  {}: {}/{} ({:.1}%)",
                entry.region, entry.stats.collected, entry.stats.total, entry.stats.percentage
            )?;
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> Result<()> {
        match self.tracker.save() {
            Ok(metadata) => writeln!(
                self.output,
                "Saved {} items to {}",
                metadata.total_items,
                self.tracker.path().display()
            )?,
            Err(err) => writeln!(self.output, "Error while saving: {err}")?,
        }
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        if self.tracker.is_dirty() {
            let stats = self.tracker.stats();
            writeln!(self.output, "\nCurrent progress:")?;
            writeln!(
                self.output,
                "Collected: {}/{} ({:.1}%)",
                stats.collected, stats.total, stats.percentage
            )?;

            let answer = self
                .prompt("\nSave before exiting? (y/n): ")?
                .unwrap_or_default()
                .to_lowercase();
            if YES_ANSWERS.contains(&answer.as_str()) {
                self.save()?;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }
}

/// Picks the option with the given 1-based number.
fn pick<T: Copy>(options: &[T], answer: &str) -> Option<T> {
    let number: usize = answer.parse().ok()?;
    options.get(number.checked_sub(1)?).copied()
}

fn write_entry<W: Write>(
    out: &mut W,
    number: usize,
    item: &Item,
    show_region: bool,
) -> io::Result<()> {
    let status = if item.collected {
        "✓ Collected"
    } else {
        "○ Not collected"
    };
    writeln!(out, "{number:2}. [{status}] {}", item.name)?;
    if show_region {
        writeln!(out, "     Region: {} | Type: {}", item.region, item.kind.label())?;
    } else {
        writeln!(out, "     Type: {}", item.kind.label())?;
    }
    let notes = if item.notes.is_empty() {
        String::new()
    } else {
        format!(" | Notes: {}", item.notes)
    };
    writeln!(
        out,
        "     Coordinates: X={:.1}, Y={:.1} | Added: {}{notes}",
        item.x,
        item.y,
        timestamp::format(&item.date_added)
    )?;
    writeln!(out, "{RULE}")
}

/// Executes the menu command on stdin/stdout.
pub fn execute(config: &Config) -> Result<()> {
    let mut tracker = open_tracker(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut tracker, stdin.lock(), stdout.lock()).run()
}
