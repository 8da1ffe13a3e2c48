//! Kanten: bemalbare Grenzen zwischen zwei benachbarten Zellen.
//!
//! Kanten sind ungerichtet — die Ostkante von Zelle A ist dieselbe Kante wie
//! die Westkante ihres rechten Nachbarn. Damit pro Grenze höchstens ein
//! Eintrag existiert, werden alle Schlüssel auf die kanonische Form
//! (Nord/West) gefaltet.

use super::cell::Rgba;
use serde::{Deserialize, Serialize};

/// Seite einer Zelle. Nur `North` und `West` sind kanonisch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EdgeSide {
    North,
    South,
    East,
    West,
}

/// Kanonischer Kanten-Schlüssel `(x, y, side)` mit side ∈ {North, West}.
///
/// Die Y-Achse wächst nach Norden: die Nordkante von `(x, y)` liegt auf der
/// Gitterlinie `y + 1`, die Westkante auf der Gitterlinie `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    pub x: i32,
    pub y: i32,
    pub side: EdgeSide,
}

impl EdgeKey {
    /// Faltet eine beliebige `(x, y, side)`-Adressierung auf die kanonische
    /// Form: Süd → Nordkante der Zelle darunter, Ost → Westkante der Zelle
    /// rechts daneben.
    pub fn canonical(x: i32, y: i32, side: EdgeSide) -> Self {
        match side {
            EdgeSide::North | EdgeSide::West => Self { x, y, side },
            EdgeSide::South => Self {
                x,
                y: y - 1,
                side: EdgeSide::North,
            },
            EdgeSide::East => Self {
                x: x + 1,
                y,
                side: EdgeSide::West,
            },
        }
    }
}

/// Bemalte Kante.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub color: Rgba,
}
