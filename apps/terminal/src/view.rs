//! # Screen Rendering
//!
//! Draws the current screen as plain text: header, body, bottom nav.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ← Время                                                   [А]          │  header
//! │─────────────────────────────────────────────────────────────────────────│
//! │  Стол №1   08:00 09:00  ----  11:00 ...                                 │  body
//! │  Стол №2  [10:00] ...                                                   │
//! │─────────────────────────────────────────────────────────────────────────│
//! │  Главная  [Бронь]  Партнеры  Профиль                                    │  nav
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Rendering reads the session only; it never mutates it.

use chrono::{DateTime, Utc};
use tenergy_core::availability::TableRow;
use tenergy_core::entry::qr_code_url;
use tenergy_core::validation::date_options;
use tenergy_core::{catalog, Booking, NavSection, Screen, Session, SettingKey};

use crate::state::{SessionState, TerminalConfig};

const RULE: &str = "────────────────────────────────────────";

/// Renders the whole current screen.
pub fn render(state: &SessionState, config: &TerminalConfig, now: DateTime<Utc>) -> String {
    let session = state.session();
    let screen = session.screen();
    let mut lines = Vec::new();

    if !screen.hides_header() {
        lines.push(header(session, config));
        lines.push(RULE.to_string());
    }

    match screen {
        Screen::Onboarding => onboarding(&mut lines, config),
        Screen::Auth => auth(&mut lines),
        Screen::Dashboard => dashboard(&mut lines, session, config),
        Screen::BookingDate => booking_date(&mut lines, session, now),
        Screen::BookingTime => booking_time(&mut lines, session, state.slot_grid()),
        Screen::BookingRackets => booking_rackets(&mut lines, session, config),
        Screen::BookingSummary => booking_summary(&mut lines, session, config),
        Screen::Payment => payment(&mut lines, session, config),
        Screen::Partners => partners(&mut lines),
        Screen::ActiveSession => active_session(&mut lines, session, config, now),
        Screen::Profile => profile(&mut lines, session, config),
        Screen::History => history(&mut lines, session, config),
        Screen::MyCards => my_cards(&mut lines, session),
        Screen::Settings => settings(&mut lines, session),
        Screen::Support => support(&mut lines),
    }

    if screen.shows_nav(session.is_logged_in()) {
        lines.push(RULE.to_string());
        lines.push(nav_bar(screen.section()));
    }

    lines.join("\n")
}

fn header(session: &Session, config: &TerminalConfig) -> String {
    let screen = session.screen();
    let back = if screen.back_target().is_some() { "← " } else { "" };
    let title = screen.title().unwrap_or(config.club_name.as_str());
    let avatar = session
        .user()
        .and_then(|u| u.initial())
        .map(|c| format!("  [{}]", c))
        .unwrap_or_default();
    format!("{}{}{}", back, title, avatar)
}

fn nav_bar(current: Option<NavSection>) -> String {
    NavSection::ALL
        .iter()
        .map(|section| {
            if Some(*section) == current {
                format!("[{}]", section.label())
            } else {
                section.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn table_name(table_id: u32) -> String {
    catalog::find_table(table_id)
        .map(|t| t.name)
        .unwrap_or_else(|| format!("Стол №{}", table_id))
}

fn booking_line(booking: &Booking, config: &TerminalConfig) -> String {
    format!(
        "{} · {} {} · {} · {}",
        table_name(booking.table_id),
        booking.date.format("%d.%m.%Y"),
        booking.time_slot,
        config.format_currency(booking.total_price),
        booking.status
    )
}

// =============================================================================
// Entry Screens
// =============================================================================

fn onboarding(lines: &mut Vec<String>, config: &TerminalConfig) {
    lines.push(config.club_name.to_uppercase());
    lines.push("Бронируйте столы, арендуйте ракетки и находите партнеров.".to_string());
    lines.push(String::new());
    lines.push("> start".to_string());
}

fn auth(lines: &mut Vec<String>) {
    lines.push("Вход".to_string());
    lines.push("Имя и телефон можно оставить пустыми.".to_string());
    lines.push(String::new());
    lines.push("> login [имя] [телефон]".to_string());
}

// =============================================================================
// Dashboard
// =============================================================================

fn dashboard(lines: &mut Vec<String>, session: &Session, config: &TerminalConfig) {
    if let Some(user) = session.user() {
        lines.push(format!("Привет, {}!  Рейтинг RTTF: {}", user.name, user.rating));
    }
    lines.push(String::new());

    match session.active_booking() {
        Some(booking) => {
            lines.push("Активная бронь".to_string());
            lines.push(format!("  {}", booking_line(booking, config)));
            lines.push("  > open active_session".to_string());
        }
        None => lines.push("Забронировать стол  > book".to_string()),
    }

    lines.push(String::new());
    lines.push("Акции".to_string());
    for promo in catalog::promos() {
        lines.push(format!("  [{}] {}", promo.id, promo.text));
    }
    lines.push(String::new());
    lines.push("> open partners | open history | promo <id>".to_string());
}

// =============================================================================
// Booking Wizard
// =============================================================================

fn booking_date(lines: &mut Vec<String>, session: &Session, now: DateTime<Utc>) {
    let selected = session.draft().map(|d| d.date);
    lines.push("Выберите дату".to_string());
    for (position, date) in date_options(now.date_naive()).into_iter().enumerate() {
        let mark = if Some(date) == selected { "*" } else { " " };
        lines.push(format!("{} {:>2}) {}", mark, position + 1, date.format("%d.%m %a")));
    }
    if let Some(date) = selected {
        lines.push(format!("Выбрано: {}", date.format("%d.%m.%Y")));
    }
    lines.push(String::new());
    lines.push("> date <N|YYYY-MM-DD> | next".to_string());
}

fn booking_time(lines: &mut Vec<String>, session: &Session, grid: Option<Vec<TableRow>>) {
    let Some(draft) = session.draft() else {
        lines.push("Нет активной брони  > book".to_string());
        return;
    };

    lines.push(format!("Выберите стол и время на {}", draft.date.format("%d.%m.%Y")));
    for row in grid.unwrap_or_default() {
        let cells: Vec<String> = row
            .slots
            .iter()
            .map(|cell| {
                let chosen =
                    draft.table_id() == Some(row.table.id) && draft.time_slot() == Some(cell.slot);
                match (chosen, cell.available) {
                    (true, _) => format!("[{}]", cell.slot),
                    (false, true) => format!(" {} ", cell.slot),
                    (false, false) => " ---- ".to_string(),
                }
            })
            .collect();
        lines.push(format!("{:<8} {}", row.table.name, cells.join("")));
    }
    lines.push(String::new());
    lines.push("> slot <стол> <время> | next".to_string());
}

fn booking_rackets(lines: &mut Vec<String>, session: &Session, config: &TerminalConfig) {
    let draft = session.draft();
    lines.push("Аренда ракеток".to_string());
    for racket in catalog::rackets() {
        let selected = draft.map_or(false, |d| d.is_selected(&racket.id));
        lines.push(format!(
            "  [{}] {} {} ({}, ★{:.1}) +{}",
            if selected { "x" } else { " " },
            racket.id,
            racket.name,
            racket.racket_type,
            racket.rating,
            config.format_currency(racket.price)
        ));
    }
    lines.push(String::new());
    lines.push("> racket <id> | next".to_string());
}

fn booking_summary(lines: &mut Vec<String>, session: &Session, config: &TerminalConfig) {
    let Some(draft) = session.draft() else {
        lines.push("Нет активной брони  > book".to_string());
        return;
    };

    lines.push(format!("Дата:   {}", draft.date.format("%d.%m.%Y")));
    lines.push(format!("Время:  {}", draft.time_slot().unwrap_or("не выбрано")));
    lines.push(format!(
        "Стол:   {}",
        draft.table_id().map(table_name).unwrap_or_else(|| "не выбран".to_string())
    ));
    lines.push(format!(
        "Аренда стола (1 час)  {}",
        config.format_currency(tenergy_core::BASE_SESSION_FEE)
    ));
    for racket in draft.rackets() {
        lines.push(format!(
            "Ракетка {}  {}",
            racket.name,
            config.format_currency(racket.price)
        ));
    }
    lines.push(format!("Итого: {}", config.format_currency(draft.total())));
    lines.push(String::new());
    lines.push("> next".to_string());
}

fn payment(lines: &mut Vec<String>, session: &Session, config: &TerminalConfig) {
    if let Some(total) = session.draft_total() {
        lines.push(format!("К оплате: {}", config.format_currency(total)));
    }
    if let Some(card) = session.wallet().primary() {
        lines.push(format!("Карта: {} {}  {}", card.brand, card.number, card.expiry));
    }
    lines.push(String::new());
    lines.push("> pay".to_string());
}

// =============================================================================
// Active Session
// =============================================================================

fn active_session(
    lines: &mut Vec<String>,
    session: &Session,
    config: &TerminalConfig,
    now: DateTime<Utc>,
) {
    let Some(booking) = session.active_booking() else {
        lines.push("Нет активной сессии".to_string());
        return;
    };

    lines.push(format!(
        "{} · {} мин",
        table_name(booking.table_id),
        tenergy_core::SESSION_LENGTH_MINUTES
    ));
    lines.push(format!("Осталось: {}", booking.countdown(now)));
    match qr_code_url(&booking.entry_payload(), config.qr_size) {
        Ok(url) => lines.push(format!("QR для входа: {}", url)),
        Err(e) => lines.push(format!("QR недоступен: {}", e)),
    }
    lines.push(String::new());
    lines.push("> club | end".to_string());
}

// =============================================================================
// Partners, Profile, History
// =============================================================================

fn partners(lines: &mut Vec<String>) {
    lines.push("Найти партнера".to_string());
    for partner in catalog::partners() {
        lines.push(format!(
            "  {} {}  рейтинг {} · игр {}",
            partner.id, partner.name, partner.rating, partner.games_count
        ));
    }
    lines.push(String::new());
    lines.push("> challenge <id>".to_string());
}

fn profile(lines: &mut Vec<String>, session: &Session, config: &TerminalConfig) {
    let Some(user) = session.user() else {
        return;
    };
    lines.push(format!(
        "[{}] {}",
        user.initial().unwrap_or('?'),
        user.name
    ));
    lines.push(format!("Телефон: {}", user.phone));
    lines.push(format!(
        "Рейтинг: {} · Бонусы: {} · Баланс: {}",
        user.rating,
        user.bonus_points,
        config.format_currency(user.balance)
    ));
    lines.push(String::new());
    lines.push("> open my_cards | open settings | open support | logout".to_string());
}

fn history(lines: &mut Vec<String>, session: &Session, config: &TerminalConfig) {
    if session.bookings().is_empty() {
        lines.push("Пока нет бронирований".to_string());
        return;
    }
    for booking in session.bookings() {
        lines.push(format!("  {}", booking_line(booking, config)));
    }
}

// =============================================================================
// Profile Pages
// =============================================================================

fn my_cards(lines: &mut Vec<String>, session: &Session) {
    for card in &session.wallet().cards {
        lines.push(format!("  {} {}  {}", card.brand, card.number, card.expiry));
    }
    lines.push(String::new());
    lines.push("> card add".to_string());
}

fn settings(lines: &mut Vec<String>, session: &Session) {
    let settings = session.settings();
    for key in SettingKey::ALL {
        let mark = if settings.get(key) { "вкл " } else { "выкл" };
        lines.push(format!("  [{}] {}", mark, key.label()));
    }
    lines.push(String::new());
    lines.push("> toggle <notifications|dark_mode|auto_rating>".to_string());
}

fn support(lines: &mut Vec<String>) {
    for contact in catalog::support_contacts() {
        lines.push(format!("  {}: {}", contact.label, contact.url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_now(state: &SessionState) -> String {
        render(state, &TerminalConfig::default(), Utc::now())
    }

    fn walk_to_payment(state: &mut SessionState) {
        while state.session().screen() != Screen::Payment {
            state.session_mut().advance().unwrap();
        }
    }

    #[test]
    fn test_onboarding_has_no_chrome() {
        let state = SessionState::default();
        let text = render_now(&state);
        assert!(text.starts_with("TENERGY"));
        assert!(!text.contains("Главная"));
    }

    #[test]
    fn test_dashboard_greets_user() {
        let mut state = SessionState::default();
        state.session_mut().login("Алексей", "79991234567");
        let text = render_now(&state);

        assert!(text.contains("Привет, Алексей!"));
        assert!(text.contains("[А]"));
        assert!(text.contains("[Главная]"));
        assert!(text.contains("> book"));
    }

    #[test]
    fn test_time_grid_marks_selection() {
        let mut state = SessionState::default();
        state.session_mut().login("A", "1");
        state.session_mut().start_booking().unwrap();
        state.session_mut().set_table_and_slot(2, "10:00").unwrap();
        state.session_mut().advance().unwrap();

        let text = render_now(&state);
        assert!(text.starts_with("← Время"));
        assert!(text.contains("[10:00]"));
        assert!(text.contains("[Бронь]"));
    }

    #[test]
    fn test_active_session_shows_qr_and_countdown() {
        let mut state = SessionState::default();
        state.session_mut().login("A", "1");
        state.session_mut().start_booking().unwrap();
        state.session_mut().set_table_and_slot(3, "18:00").unwrap();
        walk_to_payment(&mut state);
        let booking = state.session_mut().confirm_payment().unwrap().clone();

        let text = render(&state, &TerminalConfig::default(), booking.activated_at);
        assert!(text.contains("Стол №3 · 60 мин"));
        assert!(text.contains("Осталось: 60:00"));
        assert!(text.contains(&format!("data=TENERGY-ENTRY-{}", booking.id)));
    }

    #[test]
    fn test_history_lists_bookings() {
        let mut state = SessionState::default();
        state.session_mut().login("A", "1");
        state.session_mut().open(Screen::History).unwrap();
        assert!(render_now(&state).contains("Пока нет бронирований"));

        state.session_mut().start_booking().unwrap();
        state.session_mut().set_table_and_slot(1, "21:00").unwrap();
        walk_to_payment(&mut state);
        state.session_mut().confirm_payment().unwrap();
        state.session_mut().end_session();
        state.session_mut().open(Screen::History).unwrap();

        let text = render_now(&state);
        assert!(text.contains("Стол №1"));
        assert!(text.contains("21:00 · 500 ₽ · completed"));
    }
}
