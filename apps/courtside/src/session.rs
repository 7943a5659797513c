//! # Terminal Session
//!
//! A line-oriented storefront: one command per line in, one reply out.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Session::open ──► cart id issued                                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ┌───────────┐  "add 0 3"   ┌──────────┐   commands::*   ┌─────────┐  │
//! │  │ read line │─────────────►│ Command  │────────────────►│  Reply  │  │
//! │  └───────────┘  FromStr     └──────────┘                 └─────────┘  │
//! │        ▲                                                      │        │
//! │        └──────────────── table or JSON line ◄─────────────────┘        │
//! │                                                                         │
//! │  "quit" or EOF ──► reserved stock returned, cart closed, loop ends      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failed commands print `error: <message>` and the session keeps going.

use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, warn};

use courtside_core::{CartId, Money, ProductId, Receipt};

use crate::commands::{
    self, CartResponse, InventoryResponse, QuitResponse, StockResponse, TotalResponse,
};
use crate::error::ApiError;
use crate::state::{AppConfig, OutputFormat, StoreState};

const HELP: &[(&str, &str)] = &[
    ("help", "list commands"),
    ("list | inventory", "inventory table: id, name, price, stock"),
    ("stock <product-id>", "stock for one product"),
    ("add <product-id> <qty>", "reserve units"),
    ("remove <product-id> <qty>", "release units"),
    ("cart", "cart lines and total"),
    ("total", "cart total"),
    ("checkout", "print receipt, start an empty cart"),
    ("quit | exit", "return reservations to inventory and leave"),
];

// =============================================================================
// Command Parsing
// =============================================================================

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Stock(ProductId),
    Add { product_id: ProductId, quantity: i64 },
    Remove { product_id: ProductId, quantity: i64 },
    Cart,
    Total,
    Checkout,
    Quit,
}

/// Why a line is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),

    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(ParseCommandError::Empty)?.to_lowercase();

        let command = match verb.as_str() {
            "help" | "?" => Command::Help,
            "list" | "inventory" | "ls" => Command::List,
            "stock" => Command::Stock(product_arg(words.next(), "stock")?),
            "add" => Command::Add {
                product_id: product_arg(words.next(), "add")?,
                quantity: quantity_arg(words.next(), "add")?,
            },
            "remove" | "rm" => Command::Remove {
                product_id: product_arg(words.next(), "remove")?,
                quantity: quantity_arg(words.next(), "remove")?,
            },
            "cart" => Command::Cart,
            "total" => Command::Total,
            "checkout" | "pay" => Command::Checkout,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ParseCommandError::UnknownCommand(verb)),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn product_arg(word: Option<&str>, command: &'static str) -> Result<ProductId, ParseCommandError> {
    let word = word.ok_or(ParseCommandError::MissingArgument {
        command,
        argument: "product id",
    })?;
    word.parse::<u32>()
        .map(ProductId::new)
        .map_err(|_| ParseCommandError::InvalidNumber(word.to_string()))
}

// Negative quantities parse here and are rejected by the store.
fn quantity_arg(word: Option<&str>, command: &'static str) -> Result<i64, ParseCommandError> {
    let word = word.ok_or(ParseCommandError::MissingArgument {
        command,
        argument: "quantity",
    })?;
    word.parse::<i64>()
        .map_err(|_| ParseCommandError::InvalidNumber(word.to_string()))
}

// =============================================================================
// Replies
// =============================================================================

/// The outcome of one command, ready to render.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum Reply {
    Help(Vec<String>),
    Inventory(InventoryResponse),
    Stock(StockResponse),
    Cart(CartResponse),
    Total(TotalResponse),
    Receipt(Receipt),
    Quit(QuitResponse),
    Error(ApiError),
}

impl Reply {
    fn from_result<T>(result: Result<T, ApiError>, ok: impl FnOnce(T) -> Reply) -> Reply {
        result.map_or_else(Reply::Error, ok)
    }

    /// Renders the reply as human-readable text.
    pub fn render_table(&self, config: &AppConfig) -> String {
        match self {
            Reply::Help(lines) => lines.join("\n"),
            Reply::Inventory(inventory) => {
                let mut out =
                    format!("{:>4} | {:<20} | {:>10} | {:>5}", "Id", "Name", "Price", "Stock");
                for product in &inventory.products {
                    out.push_str(&format!(
                        "\n{:>4} | {:<20} | {:>10} | {:>5}",
                        product.id,
                        product.name,
                        config.format_currency(product.price),
                        product.stock
                    ));
                }
                out
            }
            Reply::Stock(stock) => {
                format!("{} (#{}): {} in stock", stock.name, stock.product_id, stock.stock)
            }
            Reply::Cart(cart) if cart.lines.is_empty() => {
                format!("Cart {} is empty", cart.cart_id)
            }
            Reply::Cart(cart) => {
                let mut out = String::new();
                for line in &cart.lines {
                    out.push_str(&format!(
                        "{:>8} | {:>15} | {:>10}\n",
                        line.quantity,
                        line.name,
                        config.format_currency(line.line_total)
                    ));
                }
                out.push_str(&format!(
                    "{} item(s), total {}",
                    cart.total_quantity,
                    config.format_currency(cart.total)
                ));
                out
            }
            Reply::Total(total) => format!("Total: {}", config.format_currency(total.total)),
            Reply::Receipt(receipt) => receipt.to_string(),
            Reply::Quit(quit) => format!(
                "Returned {} unit(s) to the shelf. Thanks for visiting {}!",
                quit.returned_units, config.store_name
            ),
            Reply::Error(err) => format!("error: {}", err.message),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// What happened over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub commands: usize,
    pub checkouts: usize,
    pub revenue: Money,
}

/// One shopper's session, bound to a single cart.
pub struct Session<'a> {
    store: &'a StoreState,
    config: &'a AppConfig,
    cart_id: CartId,
    closed: bool,
    summary: SessionSummary,
}

impl<'a> Session<'a> {
    /// Starts a session with a fresh cart.
    pub fn open(store: &'a StoreState, config: &'a AppConfig) -> Self {
        let cart_id = commands::open_cart(store);
        info!(cart_id = %cart_id, "Session opened");
        Session {
            store,
            config,
            cart_id,
            closed: false,
            summary: SessionSummary::default(),
        }
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// The cart is always closed before returning, even when reading input or
    /// writing a reply fails, so reserved units never outlive the session.
    pub fn run<R, W>(mut self, input: R, mut output: W) -> io::Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
    {
        let served = self.serve(input, &mut output);

        if !self.closed {
            let reply = self.close();
            if served.is_ok() {
                self.write_reply(&mut output, &reply)?;
            }
        }

        if let Err(e) = served {
            warn!(cart_id = %self.cart_id, error = %e, "Session aborted, cart closed");
            return Err(e);
        }
        output.flush()?;

        info!(
            cart_id = %self.cart_id,
            commands = self.summary.commands,
            checkouts = self.summary.checkouts,
            revenue = %self.summary.revenue,
            "Session closed"
        );
        Ok(self.summary)
    }

    /// The read/eval loop. Returns once `quit` has run or input ends.
    fn serve<R, W>(&mut self, input: R, output: &mut W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        if self.config.output == OutputFormat::Table {
            writeln!(
                output,
                "Welcome to {}! Type 'help' for a list of commands.",
                self.config.store_name
            )?;
        }

        for line in input.lines() {
            let line = line?;
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(ParseCommandError::Empty) => continue,
                Err(e) => {
                    debug!(line = %line, error = %e, "Unparseable session input");
                    let reply = Reply::Error(ApiError::invalid_command(e.to_string()));
                    self.write_reply(output, &reply)?;
                    continue;
                }
            };

            self.summary.commands += 1;
            let reply = self.execute(command);
            self.write_reply(output, &reply)?;
            if self.closed {
                break;
            }
        }

        Ok(())
    }

    /// Runs one command against the store.
    ///
    /// `Quit` closes the cart; every later command then fails with a
    /// cart-not-found error.
    pub fn execute(&mut self, command: Command) -> Reply {
        let store = self.store;
        let cart = self.cart_id;

        match command {
            Command::Help => Reply::Help(
                HELP.iter()
                    .map(|(usage, what)| format!("{:<26} {}", usage, what))
                    .collect(),
            ),
            Command::List => Reply::Inventory(commands::list_inventory(store)),
            Command::Stock(id) => Reply::from_result(commands::get_stock(store, id), Reply::Stock),
            Command::Add {
                product_id,
                quantity,
            } => Reply::from_result(
                commands::add_to_cart(store, cart, product_id, quantity),
                Reply::Cart,
            ),
            Command::Remove {
                product_id,
                quantity,
            } => Reply::from_result(
                commands::remove_from_cart(store, cart, product_id, quantity),
                Reply::Cart,
            ),
            Command::Cart => Reply::from_result(commands::get_cart(store, cart), Reply::Cart),
            Command::Total => Reply::from_result(commands::cart_total(store, cart), Reply::Total),
            Command::Checkout => {
                let result = commands::checkout(store, cart);
                if let Ok(receipt) = &result {
                    self.summary.checkouts += 1;
                    self.summary.revenue = self.summary.revenue.saturating_add(receipt.total());
                }
                Reply::from_result(result, Reply::Receipt)
            }
            Command::Quit => self.close(),
        }
    }

    fn close(&mut self) -> Reply {
        self.closed = true;
        Reply::from_result(commands::quit(self.store, self.cart_id), Reply::Quit)
    }

    fn write_reply<W: Write>(&self, output: &mut W, reply: &Reply) -> io::Result<()> {
        match self.config.output {
            OutputFormat::Table => writeln!(output, "{}", reply.render_table(self.config)),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *output, reply)?;
                writeln!(output)
            }
        }
    }
}
