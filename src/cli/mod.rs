use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::application::{AddFriendForm, Session, SplitBillForm};
use crate::domain::{format_dollars, parse_amount, Cents, Friend, Payer, PLACEHOLDER_IMAGE};

/// Tabsplit - split shared expenses with friends
#[derive(Parser)]
#[command(name = "tabsplit")]
#[command(about = "An interactive session for splitting shared expenses with friends")]
#[command(version)]
pub struct Cli {
    /// JSON seed file with the initial roster (array of {name, image, balance})
    #[arg(short, long)]
    pub seed: Option<PathBuf>,

    /// Echo each applied state transition to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// One roster entry in a seed file. Balance is in cents and defaults to
/// settled; the image falls back to the placeholder avatar.
#[derive(Deserialize)]
struct SeedFriend {
    name: String,
    #[serde(default = "default_image")]
    image: String,
    #[serde(default)]
    balance: Cents,
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

/// Load a roster from a JSON seed file.
pub fn load_seed(path: &Path) -> Result<Vec<Friend>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Cannot read seed file '{}'", path.display()))?;
    parse_seed(&contents).with_context(|| format!("Invalid seed file '{}'", path.display()))
}

/// Parse seed JSON into a roster of friends with fresh ids.
pub fn parse_seed(contents: &str) -> Result<Vec<Friend>> {
    let entries: Vec<SeedFriend> =
        serde_json::from_str(contents).context("Expected a JSON array of friends")?;

    Ok(entries
        .into_iter()
        .map(|entry| Friend::new(entry.name, entry.image).with_balance(entry.balance))
        .collect())
}

/// The built-in roster used when no seed file is given.
pub fn demo_roster() -> Vec<Friend> {
    vec![
        Friend::new("Clark", format!("{}?u=clark", PLACEHOLDER_IMAGE)).with_balance(-700),
        Friend::new("Sarah", format!("{}?u=sarah", PLACEHOLDER_IMAGE)).with_balance(2000),
        Friend::new("Anthony", format!("{}?u=anthony", PLACEHOLDER_IMAGE)),
    ]
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let roster = match &self.seed {
            Some(path) => load_seed(path)?,
            None => demo_roster(),
        };

        let mut session = Session::new(roster);
        let mut add_form = AddFriendForm::new();
        let mut split_form = SplitBillForm::new();

        println!("tabsplit - type 'help' for commands, 'quit' to exit.");
        render_roster(&session);

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("> ");
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if matches!(input, "quit" | "exit") {
                break;
            }

            self.dispatch(input, &mut session, &mut add_form, &mut split_form);
        }

        Ok(())
    }

    fn dispatch(
        &self,
        input: &str,
        session: &mut Session,
        add_form: &mut AddFriendForm,
        split_form: &mut SplitBillForm,
    ) {
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "help" => print_help(),
            "list" => render_roster(session),
            "select" => self.select(rest, session, split_form),
            "add" => {
                let open = session.toggle_add_friend_form();
                if open {
                    render_add_form(add_form);
                } else {
                    println!("Add-friend form closed.");
                }
            }
            "name" if session.is_adding_friend() => {
                add_form.set_name(rest);
                self.trace(format!("name = '{}'", rest));
            }
            "image" if session.is_adding_friend() => {
                add_form.set_image(rest);
                self.trace(format!("image = '{}'", rest));
            }
            "save" if session.is_adding_friend() => match add_form.submit(session) {
                Ok(friend) => {
                    println!("Added {}.", friend.name);
                    self.trace(format!("friend {} added", friend.id));
                    render_roster(session);
                }
                Err(_) => {
                    if let Some(message) = add_form.error() {
                        println!("  ! {}", message);
                    }
                }
            },
            "name" | "image" | "save" => {
                println!("Open the add-friend form first with 'add'.");
            }
            "bill" | "yours" | "payer" | "show" | "split" => {
                self.split_command(command, rest, session, split_form)
            }
            _ => println!("Unknown command '{}'. Type 'help'.", command),
        }
    }

    fn select(&self, rest: &str, session: &mut Session, split_form: &mut SplitBillForm) {
        let Ok(index) = rest.parse::<usize>() else {
            println!("Usage: select <number> (see 'list')");
            return;
        };
        let Some(friend) = session.friends().get(index.wrapping_sub(1)) else {
            println!("No friend at position {}.", rest);
            return;
        };

        let id = friend.id;
        match session.toggle_selection(id) {
            Ok(Some(_)) => {
                // Switching friends starts a fresh split draft
                *split_form = SplitBillForm::new();
                if let Some(friend) = session.selected_friend() {
                    println!("Split a bill with {}.", friend.name);
                    render_split_form(split_form, friend);
                }
                self.trace(format!("selected {}", id));
            }
            Ok(None) => {
                *split_form = SplitBillForm::new();
                println!("Selection cleared.");
                self.trace("selection cleared".to_string());
            }
            Err(err) => println!("  ! {}", err),
        }
    }

    fn split_command(
        &self,
        command: &str,
        rest: &str,
        session: &mut Session,
        split_form: &mut SplitBillForm,
    ) {
        let Some(name) = session.selected_friend().map(|f| f.name.clone()) else {
            println!("Select a friend first with 'select <number>'.");
            return;
        };

        match command {
            "bill" => match parse_amount(rest) {
                Ok(amount) => {
                    if split_form.set_bill(amount) {
                        self.trace(format!("bill = {}", format_dollars(amount)));
                    } else {
                        println!("  ! bill cannot be negative; keeping the previous value");
                    }
                }
                Err(err) => println!("  ! {}", err),
            },
            "yours" => match parse_amount(rest) {
                Ok(amount) => {
                    if split_form.set_user_expense(amount) {
                        self.trace(format!("yours = {}", format_dollars(amount)));
                    } else {
                        println!(
                            "  ! your expense must be between $0.00 and the bill; keeping the previous value"
                        );
                    }
                }
                Err(err) => println!("  ! {}", err),
            },
            "payer" => match rest.parse::<Payer>() {
                Ok(payer) => {
                    split_form.set_payer(payer);
                    self.trace(format!("payer = {}", payer));
                }
                Err(err) => println!("  ! {}", err),
            },
            "show" => {
                if let Some(friend) = session.selected_friend() {
                    render_split_form(split_form, friend);
                }
            }
            "split" => match split_form.submit() {
                Some(delta) => match session.settle_split(delta) {
                    Ok(new_balance) => {
                        println!(
                            "Split recorded: {} applied to {}.",
                            format_dollars(delta),
                            name
                        );
                        self.trace(format!("balance = {}", format_dollars(new_balance)));
                        render_roster(session);
                    }
                    Err(err) => println!("  ! {}", err),
                },
                // Missing fields: the submission is silently ignored
                None => self.trace("split ignored (incomplete form)".to_string()),
            },
            _ => unreachable!("split_command only receives split-form commands"),
        }
    }

    fn trace(&self, message: String) {
        if self.verbose {
            eprintln!("[state] {}", message);
        }
    }
}

fn render_roster(session: &Session) {
    if session.friends().is_empty() {
        println!("No friends yet. Use 'add' to create one.");
        return;
    }

    println!("{:<4} {:<16} STATUS", "#", "FRIEND");
    println!("{}", "-".repeat(52));
    for (position, friend) in session.friends().iter().enumerate() {
        let marker = if session.selected_id() == Some(friend.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{:<4} {:<16} {}",
            format!("{}{}", position + 1, marker),
            friend.name,
            friend.relationship_message()
        );
    }
}

fn render_add_form(form: &AddFriendForm) {
    println!("Add a friend ('name <text>', 'image <uri>', then 'save'):");
    println!("  Friend name: {}", form.name);
    println!("  Image url:   {}", form.image);
    if let Some(message) = form.error() {
        println!("  ! {}", message);
    }
}

fn render_split_form(form: &SplitBillForm, friend: &Friend) {
    let unset = "-".to_string();
    println!(
        "  Bill value:      {}",
        form.bill().map(format_dollars).unwrap_or_else(|| unset.clone())
    );
    println!(
        "  Your expense:    {}",
        form.user_expense()
            .map(format_dollars)
            .unwrap_or_else(|| unset.clone())
    );
    println!(
        "  {}'s expense: {}",
        friend.name,
        form.friend_expense().map(format_dollars).unwrap_or(unset)
    );
    println!("  Who pays:        {}", form.payer());
}

fn print_help() {
    println!("Commands:");
    println!("  list              Show the roster with balances");
    println!("  select <number>   Select a friend (again to deselect)");
    println!("  add               Open/close the add-friend form");
    println!("    name <text>     Set the friend name");
    println!("    image <uri>     Set the avatar url");
    println!("    save            Submit the add-friend form");
    println!("  bill <amount>     Set the bill total (friend selected)");
    println!("  yours <amount>    Set your share of the bill");
    println!("  payer user|friend Set who fronted the bill");
    println!("  show              Show the split form");
    println!("  split             Apply the split to the selected friend");
    println!("  quit              Exit");
}
