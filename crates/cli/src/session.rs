//! The interactive inventory session: menu → read → validate → execute → loop.

use std::io::{self, BufRead, Read, Write};

use tracing::{debug, info, warn};

use stocktrack_core::{Aggregate, DomainError, Event};
use stocktrack_inventory::{AddItem, Inventory, InventoryCommand, InventoryEvent, Item};

use crate::config::SessionConfig;
use crate::error::{InputError, SessionError};
use crate::input::{self, Field};
use crate::menu::MenuChoice;
use crate::render;

/// Longest input line kept, in bytes; the rest of the line is skipped.
pub const MAX_LINE_BYTES: u64 = 1024;

/// What the loop does after one menu iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The operator chose Exit.
    Exit,
    /// Input was closed; the session ends without the exit message.
    EndOfInput,
}

/// One line of operator input.
struct InputLine {
    /// Text including its terminator, cut at [`MAX_LINE_BYTES`].
    text: String,
    /// The line was longer than [`MAX_LINE_BYTES`].
    overlong: bool,
}

/// Outcome of prompting for one field.
enum Answer<T> {
    Value(T),
    Rejected,
    Closed,
}

/// Unwrap an [`Answer`], abandoning the current operation otherwise.
macro_rules! answer {
    ($prompted:expr) => {
        match $prompted? {
            Answer::Value(value) => value,
            Answer::Rejected => return Ok(Flow::Continue),
            Answer::Closed => return Ok(Flow::EndOfInput),
        }
    };
}

/// A running session over line-oriented input and a console output.
pub struct Session<R, W> {
    input: R,
    output: W,
    inventory: Inventory,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &SessionConfig) -> Self {
        Self {
            input,
            output,
            inventory: Inventory::with_capacity(config.capacity),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the operator exits or input ends.
    ///
    /// Only console I/O failures escape as errors; every input or domain problem
    /// is reported on the console and the loop continues.
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!(capacity = self.inventory.capacity(), "inventory session started");

        loop {
            match self.step()? {
                Flow::Continue => {}
                Flow::Exit => break,
                Flow::EndOfInput => {
                    info!("input closed");
                    break;
                }
            }
        }

        info!(records = self.inventory.len(), "inventory session ended");
        Ok(())
    }

    /// Show the menu, read one selection and dispatch it.
    pub fn step(&mut self) -> Result<Flow, SessionError> {
        render::menu(&mut self.output)?;
        let Some(line) = self.read_line()? else {
            return Ok(Flow::EndOfInput);
        };

        let parsed = if line.overlong {
            Err(InputError::malformed(Field::MenuChoice, "<overlong line>"))
        } else {
            input::parse_selection(&line.text)
        };
        let selection = match parsed {
            Ok(selection) => selection,
            Err(err) => {
                self.reject(&err)?;
                return Ok(Flow::Continue);
            }
        };

        let Some(choice) = MenuChoice::from_selection(selection) else {
            debug!(selection, "menu selection out of range");
            render::line(&mut self.output, render::OUT_OF_RANGE)?;
            return Ok(Flow::Continue);
        };

        debug!(?choice, "dispatching menu choice");
        match choice {
            MenuChoice::AddItem => self.add_item(),
            MenuChoice::ViewInventory => self.view_inventory(),
            MenuChoice::SearchItem => self.search_item(),
            MenuChoice::TotalValue => self.total_value(),
            MenuChoice::Exit => {
                render::line(&mut self.output, render::EXITING)?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add_item(&mut self) -> Result<Flow, SessionError> {
        if self.inventory.is_full() {
            debug!(capacity = self.inventory.capacity(), "add refused: inventory full");
            render::line(&mut self.output, render::INVENTORY_FULL)?;
            return Ok(Flow::Continue);
        }

        let id = answer!(self.ask_parsed(Field::ItemId, |line| {
            input::parse_item_id(Field::ItemId, line)
        }));
        let Some(line) = self.ask(Field::ItemName)? else {
            return Ok(Flow::EndOfInput);
        };
        let name = input::parse_name(&line.text);
        let quantity = answer!(self.ask_parsed(Field::Quantity, input::parse_quantity));
        let price = answer!(self.ask_parsed(Field::Price, input::parse_price));

        let command = InventoryCommand::AddItem(AddItem {
            item: Item::new(id, name, quantity, price),
        });
        match self.inventory.execute(&command) {
            Ok(events) => {
                events.iter().for_each(log_event);
                info!(
                    records = self.inventory.len(),
                    remaining = self.inventory.remaining(),
                    version = self.inventory.version(),
                    "item added"
                );
                render::line(&mut self.output, render::ITEM_ADDED)?;
            }
            Err(DomainError::CapacityExceeded { capacity }) => {
                debug!(capacity, "add refused: inventory full");
                render::line(&mut self.output, render::INVENTORY_FULL)?;
            }
            Err(DomainError::Validation(reason)) => {
                // Only the price can push the stock value out of range.
                debug!(%reason, "add refused");
                self.reject(&InputError::rejected(
                    Field::Price,
                    DomainError::Validation(reason),
                ))?;
            }
            Err(err) => {
                warn!(error = %err, "add refused");
                render::line(&mut self.output, &format!("Item not added: {err}"))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn view_inventory(&mut self) -> Result<Flow, SessionError> {
        if self.inventory.is_empty() {
            render::line(&mut self.output, render::INVENTORY_EMPTY)?;
        } else {
            render::item_table(&mut self.output, self.inventory.items())?;
        }
        Ok(Flow::Continue)
    }

    fn search_item(&mut self) -> Result<Flow, SessionError> {
        let id = answer!(self.ask_parsed(Field::SearchId, |line| {
            input::parse_item_id(Field::SearchId, line)
        }));

        match self.inventory.find(id) {
            Some(item) => render::found(&mut self.output, item)?,
            None => {
                debug!(%id, "search miss");
                render::line(&mut self.output, render::ITEM_NOT_FOUND)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn total_value(&mut self) -> Result<Flow, SessionError> {
        render::total_value(&mut self.output, self.inventory.total_value())?;
        Ok(Flow::Continue)
    }

    fn ask(&mut self, field: Field) -> Result<Option<InputLine>, SessionError> {
        render::prompt(&mut self.output, field)?;
        self.read_line()
    }

    fn ask_parsed<T>(
        &mut self,
        field: Field,
        parse: impl FnOnce(&str) -> Result<T, InputError>,
    ) -> Result<Answer<T>, SessionError> {
        let Some(line) = self.ask(field)? else {
            return Ok(Answer::Closed);
        };
        let parsed = if line.overlong {
            Err(InputError::malformed(field, "<overlong line>"))
        } else {
            parse(&line.text)
        };
        match parsed {
            Ok(value) => Ok(Answer::Value(value)),
            Err(err) => {
                self.reject(&err)?;
                Ok(Answer::Rejected)
            }
        }
    }

    fn reject(&mut self, err: &InputError) -> Result<(), SessionError> {
        debug!(field = %err.field(), error = %err, "input rejected");
        if let Some(message) = err.field().rejection_message() {
            render::line(&mut self.output, message)?;
        }
        Ok(())
    }

    /// Next input line including its terminator; `None` at end of input.
    ///
    /// At most [`MAX_LINE_BYTES`] are buffered. Bytes that are not UTF-8 are
    /// replaced rather than treated as fatal.
    fn read_line(&mut self) -> Result<Option<InputLine>, SessionError> {
        let mut buf = Vec::new();
        let read = (&mut self.input)
            .take(MAX_LINE_BYTES)
            .read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }

        let mut overlong = false;
        if !buf.ends_with(b"\n") && read as u64 == MAX_LINE_BYTES {
            let next = self.input.fill_buf()?.first().copied();
            match next {
                None => {}
                Some(b'\n') => {
                    self.input.consume(1);
                    buf.push(b'\n');
                }
                Some(_) => {
                    overlong = true;
                    self.skip_rest_of_line()?;
                }
            }
        }
        if overlong {
            debug!(limit = MAX_LINE_BYTES, "overlong input line cut");
        }

        Ok(Some(InputLine {
            text: String::from_utf8_lossy(&buf).into_owned(),
            overlong,
        }))
    }

    fn skip_rest_of_line(&mut self) -> io::Result<()> {
        loop {
            let (consumed, done) = {
                let available = self.input.fill_buf()?;
                if available.is_empty() {
                    return Ok(());
                }
                match available.iter().position(|&b| b == b'\n') {
                    Some(end) => (end + 1, true),
                    None => (available.len(), false),
                }
            };
            self.input.consume(consumed);
            if done {
                return Ok(());
            }
        }
    }
}

fn log_event(event: &InventoryEvent) {
    match serde_json::to_string(event) {
        Ok(payload) => info!(event_type = event.event_type(), %payload, "event applied"),
        Err(err) => warn!(event_type = event.event_type(), error = %err, "event not serializable"),
    }
}
