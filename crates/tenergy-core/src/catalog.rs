//! # Catalog
//!
//! Static club data: tables, time slots, rental rackets, partners, promos and
//! support contacts. Nothing here changes at runtime.

use crate::money::Money;
use crate::types::{Partner, Promo, Racket, RacketType, SupportContact, Table};

/// Hourly slot start times offered for every table.
pub const TIME_SLOTS: [&str; 15] = [
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
    "18:00", "19:00", "20:00", "21:00", "22:00",
];

/// All tables in the hall, in display order.
pub fn tables() -> Vec<Table> {
    (1..=4)
        .map(|id| Table {
            id,
            name: format!("Стол №{}", id),
        })
        .collect()
}

pub fn find_table(id: u32) -> Option<Table> {
    tables().into_iter().find(|t| t.id == id)
}

/// Returns the catalog spelling of `slot`, if offered.
pub fn find_time_slot(slot: &str) -> Option<&'static str> {
    TIME_SLOTS.iter().copied().find(|s| *s == slot)
}

/// Rental rackets, in display order.
pub fn rackets() -> Vec<Racket> {
    vec![
        racket("r1", "Tenergy Elite Pro", RacketType::Attack, 9.8, 350),
        racket("r2", "Control Master X", RacketType::Control, 9.2, 250),
        racket("r3", "All-Rounder V2", RacketType::Universal, 8.5, 200),
    ]
}

pub fn find_racket(id: &str) -> Option<Racket> {
    rackets().into_iter().find(|r| r.id == id)
}

fn racket(id: &str, name: &str, racket_type: RacketType, rating: f32, price: i64) -> Racket {
    Racket {
        id: id.to_string(),
        name: name.to_string(),
        racket_type,
        rating,
        price: Money::from_rubles(price),
        image: format!("https://picsum.photos/seed/racket{}/200/200", id.trim_start_matches('r')),
    }
}

/// Players offered by the partner finder.
pub fn partners() -> Vec<Partner> {
    vec![
        partner("p1", "Дмитрий С.", 420, 156),
        partner("p2", "Анна М.", 380, 89),
        partner("p3", "Игорь К.", 510, 230),
        partner("p4", "Елена В.", 450, 45),
    ]
}

pub fn find_partner(id: &str) -> Option<Partner> {
    partners().into_iter().find(|p| p.id == id)
}

fn partner(id: &str, name: &str, rating: u32, games_count: u32) -> Partner {
    Partner {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        games_count,
        avatar: format!("https://i.pravatar.cc/150?u={}", id),
    }
}

/// Dashboard promo cards.
pub fn promos() -> Vec<Promo> {
    [
        ("Аренда второй ракетки бесплатно в ПН", "Акция активирована!"),
        ("Турнир Tenergy Open: 24 Сентября", "Вы записаны на турнир!"),
        (
            "Скидка 20% на утренние часы (08:00 - 11:00)",
            "Скидка применена!",
        ),
        (
            "Приведи друга и получи 200 бонусов",
            "Ссылка для приглашения скопирована!",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((text, notice), id)| Promo {
        id,
        text: text.to_string(),
        notice: notice.to_string(),
    })
    .collect()
}

pub fn find_promo(id: u32) -> Option<Promo> {
    promos().into_iter().find(|p| p.id == id)
}

/// Contacts on the support screen.
pub fn support_contacts() -> Vec<SupportContact> {
    [
        ("Чат в Telegram", "https://t.me/tenergy_club"),
        ("Написать в WhatsApp", "https://wa.me/79990000000"),
        ("Позвонить администратору", "tel:+79990000000"),
    ]
    .into_iter()
    .map(|(label, url)| SupportContact {
        label: label.to_string(),
        url: url.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        assert_eq!(find_table(2).map(|t| t.name), Some("Стол №2".to_string()));
        assert!(find_table(5).is_none());

        assert_eq!(find_time_slot("10:00"), Some("10:00"));
        assert!(find_time_slot("10:30").is_none());
        assert!(find_time_slot("07:00").is_none());

        let r1 = find_racket("r1").unwrap();
        assert_eq!(r1.price, Money::from_rubles(350));
        assert_eq!(r1.image, "https://picsum.photos/seed/racket1/200/200");
        assert!(find_racket("r9").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let rackets = rackets();
        for (i, r) in rackets.iter().enumerate() {
            assert!(rackets[i + 1..].iter().all(|o| o.id != r.id));
        }

        let partners = partners();
        for (i, p) in partners.iter().enumerate() {
            assert!(partners[i + 1..].iter().all(|o| o.id != p.id));
        }
    }

    #[test]
    fn test_promos_numbered_from_one() {
        let ids: Vec<u32> = promos().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(find_promo(3).unwrap().notice, "Скидка применена!");
    }

    #[test]
    fn test_slots_are_hourly() {
        assert_eq!(TIME_SLOTS.first(), Some(&"08:00"));
        assert_eq!(TIME_SLOTS.last(), Some(&"22:00"));
        assert_eq!(support_contacts().len(), 3);
    }
}
