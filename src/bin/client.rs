//! chatlink interactive client
//!
//! Menu-driven front end for the chat session. All protocol and state
//! logic lives in the library; this binary only prints menus, collects
//! free-text input, and dispatches state-gated actions.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use chatlink::protocol::Inbox;
use chatlink::{Action, ChatError, Config, Session};

/// chatlink chat client
#[derive(Parser, Debug)]
#[command(name = "chatlink")]
#[command(about = "Synchronous line-protocol chat client")]
#[command(version)]
struct Args {
    /// Chat server hostname or IP address
    #[arg(long, default_value = chatlink::config::DEFAULT_HOST)]
    host: String,

    /// Chat server TCP port
    #[arg(long, default_value_t = chatlink::config::DEFAULT_PORT)]
    port: u16,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,chatlink=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();
    let config = Config::builder().host(args.host).port(args.port).build();

    tracing::info!("chatlink v{}, server {}", chatlink::VERSION, config.address());

    let mut session = Session::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu(&session);
        let Some(action) = select_action(&mut input, &session) else {
            continue;
        };
        if matches!(action, Action::Quit) {
            break;
        }
        if let Err(e) = perform_action(action, &mut session, &mut input, &config) {
            println!("{e}");
        }
    }

    println!("Bye!");
}

/// Print the numbered menu, showing only actions valid in the current state
fn print_menu(session: &Session) {
    println!("==============================================");
    println!("What do you want to do now? (state: {})", session.state());
    println!("==============================================");
    println!("Available options:");
    for (i, action) in Action::ALL.iter().enumerate() {
        if action.is_available(session.state()) {
            println!("  {}) {}", i + 1, action.description());
        }
    }
}

/// Read a menu selection; `None` when the choice is not currently valid.
///
/// A closed stdin can never produce a valid choice, so EOF at the menu
/// selects Quit instead of re-printing the menu forever.
fn select_action(input: &mut impl BufRead, session: &Session) -> Option<Action> {
    let choice = match prompt(input, "Choose an option: ") {
        Ok(line) => line,
        Err(_) => return Some(Action::Quit),
    };
    let index: usize = match choice.trim().parse() {
        Ok(n) if (1..=Action::ALL.len()).contains(&n) => n - 1,
        _ => {
            println!("Please enter a number from the menu.");
            return None;
        }
    };

    let action = Action::ALL[index];
    if !action.is_available(session.state()) {
        println!("That option is not available right now.");
        return None;
    }
    Some(action)
}

/// Collect any needed arguments and invoke the chosen action
fn perform_action(
    action: Action,
    session: &mut Session,
    input: &mut impl BufRead,
    config: &Config,
) -> Result<(), ChatError> {
    match action {
        Action::Connect => {
            session.connect(config)?;
            println!("Connected to {}.", config.address());
        }
        Action::Disconnect => {
            session.disconnect()?;
            println!("Disconnected.");
        }
        Action::Login => {
            let username = prompt(input, "Enter username: ")?;
            session.login(username.trim())?;
            println!("Login successful!");
        }
        Action::PublicMessage => {
            let text = prompt(input, "Enter message: ")?;
            session.send_public_message(text.trim_end())?;
            println!("Message sent.");
        }
        Action::PrivateMessage => {
            let recipient = prompt(input, "Enter user: ")?;
            let text = prompt(input, "Message: ")?;
            session.send_private_message(recipient.trim(), text.trim_end())?;
            println!("Message sent.");
        }
        Action::ReadInbox => {
            let inbox = session.fetch_inbox()?;
            print_inbox(&inbox);
        }
        Action::ListUsers => {
            let users = session.list_users()?;
            println!("Logged users:");
            for (i, user) in users.iter().enumerate() {
                println!(" {}) {}", i + 1, user);
            }
        }
        Action::Joke => {
            let joke = session.fetch_joke()?;
            println!("{joke}");
        }
        Action::Quit => {}
    }
    Ok(())
}

/// Print retrieved inbox messages, private first, grouped by kind
fn print_inbox(inbox: &Inbox) {
    println!("You have {} message(s) in the inbox.", inbox.len());

    if !inbox.private.is_empty() {
        println!("Private messages:");
        for message in &inbox.private {
            println!("  {}: {}", message.sender, message.body);
        }
    }
    if !inbox.public.is_empty() {
        println!("Public messages:");
        for message in &inbox.public {
            println!("  {}: {}", message.sender, message.body);
        }
    }
}

/// Print a prompt and read one line of input.
///
/// A zero-byte read means stdin is closed and is surfaced as an error
/// rather than an empty answer.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
}
