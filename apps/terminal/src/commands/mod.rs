//! # Terminal Commands
//!
//! Every line typed at the prompt is one command. The first word picks the
//! command, the rest are its arguments.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (parsing + dispatch)
//! ├── auth.rs        ◄─── start, login, logout
//! ├── booking.rs     ◄─── book, date, slot, racket, next, pay, end
//! ├── navigation.rs  ◄─── back, open, tab
//! └── account.rs     ◄─── promo, challenge, club, card, toggle
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  "slot 2 10"                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Command::parse ──► Command::Slot { table_id: 2, slot: "10:00" }        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  execute(&mut SessionState, &TerminalConfig, command)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  booking::select_slot ──► Session::set_table_and_slot                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Outcome::Render  (run loop redraws the current screen)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod account;
pub mod auth;
pub mod booking;
pub mod navigation;

use chrono::NaiveDate;
use tenergy_core::validation::{parse_booking_date, parse_time_slot};
use tenergy_core::{NavSection, Screen, SettingKey};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::state::{SessionState, TerminalConfig};

/// What the run loop does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the current screen.
    Render,
    /// Show a pop-up line, then redraw.
    Notice(String),
    /// Print text instead of the screen.
    Output(String),
    /// Stop reading input.
    Quit,
}

/// Date argument of the `date` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateArg {
    /// Explicit `YYYY-MM-DD`.
    Exact(NaiveDate),
    /// 1-based position in the date picker.
    Option(usize),
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    State,

    Start,
    Login { name: String, phone: String },
    Logout,

    Book,
    Date(DateArg),
    Slot { table_id: u32, slot: &'static str },
    Racket(String),
    Next,
    Pay,
    End,

    Back,
    Open(Screen),
    Tab(NavSection),

    Promo(u32),
    Challenge(String),
    Club,
    AddCard,
    Toggle(SettingKey),
}

impl Command {
    /// Parses one line. Blank lines yield `None`.
    pub fn parse(line: &str) -> AppResult<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match word.to_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "state" => Command::State,

            "start" => Command::Start,
            "login" => {
                let (name, phone) = split_login(&args);
                Command::Login { name, phone }
            }
            "logout" => Command::Logout,

            "book" => Command::Book,
            "date" => Command::Date(parse_date_arg(arg(&args, 0, "date <N|YYYY-MM-DD>")?)?),
            "slot" => {
                let usage = "slot <table> <time>";
                let table_id = arg(&args, 0, usage)?
                    .parse::<u32>()
                    .map_err(|_| AppError::validation(format!("usage: {}", usage)))?;
                let slot = parse_time_slot(arg(&args, 1, usage)?)?;
                Command::Slot { table_id, slot }
            }
            "racket" => Command::Racket(arg(&args, 0, "racket <id>")?.to_string()),
            "next" => Command::Next,
            "pay" => Command::Pay,
            "end" => Command::End,

            "back" => Command::Back,
            "open" => Command::Open(arg(&args, 0, "open <screen>")?.parse()?),
            "tab" => Command::Tab(arg(&args, 0, "tab <home|booking|partners|profile>")?.parse()?),

            "promo" => {
                let usage = "promo <id>";
                let id = arg(&args, 0, usage)?
                    .parse::<u32>()
                    .map_err(|_| AppError::validation(format!("usage: {}", usage)))?;
                Command::Promo(id)
            }
            "challenge" => Command::Challenge(arg(&args, 0, "challenge <partner>")?.to_string()),
            "club" => Command::Club,
            "card" => match arg(&args, 0, "card add")? {
                "add" => Command::AddCard,
                other => return Err(AppError::validation(format!("Unknown card action: {}", other))),
            },
            "toggle" => Command::Toggle(arg(&args, 0, "toggle <setting>")?.parse()?),

            other => return Err(AppError::unknown_command(other)),
        };

        debug!(?command, "Parsed command");
        Ok(Some(command))
    }
}

fn arg<'a>(args: &[&'a str], index: usize, usage: &str) -> AppResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or_else(|| AppError::validation(format!("usage: {}", usage)))
}

/// `login Алексей Петров 79991234567` → name and phone. The last word is
/// the phone when it looks like one; everything else is the name.
fn split_login(args: &[&str]) -> (String, String) {
    match args.split_last() {
        Some((last, rest)) if looks_like_phone(last) => (rest.join(" "), last.to_string()),
        _ => (args.join(" "), String::new()),
    }
}

fn looks_like_phone(word: &str) -> bool {
    let digits = word.strip_prefix('+').unwrap_or(word);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn parse_date_arg(input: &str) -> AppResult<DateArg> {
    if let Ok(position) = input.parse::<usize>() {
        return Ok(DateArg::Option(position));
    }
    Ok(DateArg::Exact(parse_booking_date(input)?))
}

/// Runs one command against the session.
pub fn execute(
    state: &mut SessionState,
    config: &TerminalConfig,
    command: Command,
) -> AppResult<Outcome> {
    match command {
        Command::Help => Ok(Outcome::Output(HELP.to_string())),
        Command::Quit => Ok(Outcome::Quit),
        Command::State => {
            let json = serde_json::to_string_pretty(state.session())?;
            Ok(Outcome::Output(json))
        }

        Command::Start => auth::start(state),
        Command::Login { name, phone } => auth::login(state, &name, &phone),
        Command::Logout => auth::logout(state),

        Command::Book => booking::start(state),
        Command::Date(date) => booking::select_date(state, date),
        Command::Slot { table_id, slot } => booking::select_slot(state, table_id, slot),
        Command::Racket(id) => booking::toggle_racket(state, &id),
        Command::Next => booking::next(state),
        Command::Pay => booking::pay(state, config),
        Command::End => booking::end(state),

        Command::Back => navigation::back(state),
        Command::Open(screen) => navigation::open(state, screen),
        Command::Tab(section) => navigation::tab(state, section),

        Command::Promo(id) => account::activate_promo(state, id),
        Command::Challenge(id) => account::challenge(state, &id),
        Command::Club => account::open_club(state),
        Command::AddCard => account::add_card(state),
        Command::Toggle(key) => account::toggle(state, key),
    }
}

pub const HELP: &str = "\
Команды:
  start                       экран входа
  login [имя] [телефон]       войти (пустые поля = гость)
  logout                      выйти
  book                        новая бронь
  date <N|YYYY-MM-DD>         выбрать дату
  slot <стол> <время>         выбрать стол и время, напр. `slot 2 10:00`
  racket <r1|r2|r3>           добавить/убрать ракетку
  next                        следующий шаг брони
  pay                         подтвердить платеж
  end                         завершить сессию
  back                        назад
  open <screen>               перейти по ссылке (partners, history, profile, ...)
  tab <home|booking|partners|profile>
  promo <id> | challenge <p1..p4> | club | card add | toggle <setting>
  state                       состояние сессии в JSON
  quit                        выход";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_login_split() {
        assert_eq!(
            Command::parse("login Алексей Петров 79991234567").unwrap(),
            Some(Command::Login {
                name: "Алексей Петров".to_string(),
                phone: "79991234567".to_string(),
            })
        );
        assert_eq!(
            Command::parse("login").unwrap(),
            Some(Command::Login {
                name: String::new(),
                phone: String::new(),
            })
        );
        assert_eq!(
            Command::parse("login +79991234567").unwrap(),
            Some(Command::Login {
                name: String::new(),
                phone: "+79991234567".to_string(),
            })
        );
    }

    #[test]
    fn test_slot_short_form() {
        assert_eq!(
            Command::parse("slot 2 10").unwrap(),
            Some(Command::Slot {
                table_id: 2,
                slot: "10:00"
            })
        );
        assert!(Command::parse("slot two 10:00").is_err());
        assert!(Command::parse("slot 2").is_err());
        assert!(Command::parse("slot 2 23:00").is_err());
    }

    #[test]
    fn test_date_forms() {
        assert_eq!(
            Command::parse("date 3").unwrap(),
            Some(Command::Date(DateArg::Option(3)))
        );
        assert_eq!(
            Command::parse("date 2026-10-20").unwrap(),
            Some(Command::Date(DateArg::Exact(
                NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
            )))
        );
        assert!(Command::parse("date tomorrow").is_err());
    }

    #[test]
    fn test_navigation_forms() {
        assert_eq!(
            Command::parse("open my_cards").unwrap(),
            Some(Command::Open(Screen::MyCards))
        );
        assert_eq!(
            Command::parse("TAB profile").unwrap(),
            Some(Command::Tab(NavSection::Profile))
        );
        assert!(Command::parse("open lobby").is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::parse("dance").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::UnknownCommand);
    }

    #[test]
    fn test_state_is_json() {
        let mut state = SessionState::default();
        let config = TerminalConfig::default();
        match execute(&mut state, &config, Command::State).unwrap() {
            Outcome::Output(json) => {
                let value: serde_json::Value = serde_json::from_str(&json).unwrap();
                assert_eq!(value["screen"], "ONBOARDING");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
