//! Static directory of nearby mosques.
//!
//! The list is fixed at build time; there is no location lookup. Each entry
//! carries the display strings shown on the mosque list and detail screens.

use anyhow::{Result, bail};
use serde::Serialize;

/// A mosque as listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mosque {
    pub id: &'static str,
    pub name: &'static str,
    /// Distance label, e.g. "0.5 km"
    pub distance: &'static str,
    pub location: &'static str,
    /// Next-prayer label shown on the list card, e.g. "Asr - 4:45 PM"
    pub next_prayer: &'static str,
}

static MOSQUES: [Mosque; 5] = [
    Mosque {
        id: "1",
        name: "Masjid Al-Noor",
        distance: "0.5 km",
        location: "Block 15, Gulistan-e-Johar",
        next_prayer: "Asr - 4:45 PM",
    },
    Mosque {
        id: "2",
        name: "Jamia Masjid Baitul Mukarram",
        distance: "1.2 km",
        location: "Gulshan-e-Iqbal",
        next_prayer: "Asr - 4:50 PM",
    },
    Mosque {
        id: "3",
        name: "Masjid Bilal",
        distance: "1.8 km",
        location: "Buffer Zone",
        next_prayer: "Asr - 4:45 PM",
    },
    Mosque {
        id: "4",
        name: "Masjid-e-Tooba",
        distance: "2.3 km",
        location: "Defence Housing Authority",
        next_prayer: "Asr - 5:00 PM",
    },
    Mosque {
        id: "5",
        name: "Grand Jamia Masjid",
        distance: "3.1 km",
        location: "Bahria Town",
        next_prayer: "Asr - 4:55 PM",
    },
];

/// Every mosque in directory order.
pub fn all() -> &'static [Mosque] {
    &MOSQUES
}

/// Look up a mosque by id.
pub fn find(id: &str) -> Result<&'static Mosque> {
    let id = id.trim();
    match MOSQUES.iter().find(|mosque| mosque.id == id) {
        Some(mosque) => Ok(mosque),
        None => {
            let valid: Vec<&str> = MOSQUES.iter().map(|mosque| mosque.id).collect();
            bail!(
                "No mosque with id '{}' (available ids: {})",
                id,
                valid.join(", ")
            )
        }
    }
}
