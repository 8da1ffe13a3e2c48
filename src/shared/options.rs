//! Zentrale Konfiguration der Interaktionsschicht.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 64.0;
/// Zoom-Schritt bei stufenweisem Zoom (Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Gesten-Disambiguierung ──────────────────────────────────────────

/// Unterdrückungsfenster für synthetische Maus-Events nach Touch (Sekunden).
pub const SYNTHETIC_MOUSE_SUPPRESS_S: f64 = 0.5;
/// Abklingzeit nach Multi-Touch, bevor Einzel-Touch wieder Tools auslöst.
pub const MULTI_TOUCH_COOLDOWN_S: f64 = 0.3;
/// Aufschub eines Einzel-Touch-Tool-Starts (wartet auf zweiten Finger).
pub const TAP_DEFER_S: f64 = 0.05;
/// Maximale Zeigerbewegung in Pixeln, die noch als Klick gilt.
pub const CLICK_TRAVEL_THRESHOLD_PX: f32 = 5.0;

// ── Tools ───────────────────────────────────────────────────────────

/// Maximaler Abstand zur Gitterlinie für Kanten-Treffer (Anteil einer Zelle).
pub const EDGE_HIT_THRESHOLD: f32 = 0.15;
/// Suchradius (Zellen) für den Touch-Endpunkt-Kandidaten der Diagonal-Füllung.
pub const DIAGONAL_TOUCH_SEARCH_RADIUS: i32 = 3;
/// Maximaler Abstand (Gitterzellen) eines Bestätigungs-Taps zum Segment-Kandidaten.
pub const DIAGONAL_CONFIRM_DISTANCE: f32 = 1.5;

// ── Selektion & History ─────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln für Objekt-/Label-Hit-Tests.
pub const SELECTION_PICK_RADIUS_PX: f32 = 12.0;
/// Maximale Anzahl History-Snapshots pro Layer.
pub const HISTORY_MAX_DEPTH: usize = 200;

/// Laufzeit-Optionen des Editors.
///
/// Wird als `mapwright.toml` neben der Host-Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Malen ───────────────────────────────────────────────────
    /// Aktive Malfarbe (RGBA)
    pub paint_color: [f32; 4],
    /// Aktive Kantenfarbe (RGBA)
    pub edge_color: [f32; 4],
    /// Maximaler Abstand zur Gitterlinie für Kanten-Treffer (Zellanteil)
    pub edge_hit_threshold: f32,

    // ── Gesten ──────────────────────────────────────────────────
    /// Unterdrückungsfenster für synthetische Maus-Events nach Touch (s)
    pub synthetic_mouse_suppress_s: f64,
    /// Abklingzeit nach Multi-Touch (s)
    pub multi_touch_cooldown_s: f64,
    /// Aufschub eines Einzel-Touch-Tool-Starts (s)
    pub tap_defer_s: f64,
    /// Maximale Klick-Bewegung in Pixeln
    pub click_travel_threshold_px: f32,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Objekt-/Label-Hit-Tests in Screen-Pixeln
    pub selection_pick_radius_px: f32,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Snapshot-Anzahl pro Layer
    #[serde(default = "default_history_max_depth")]
    pub history_max_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            paint_color: [0.2, 0.5, 0.9, 1.0],
            edge_color: [0.1, 0.1, 0.1, 1.0],
            edge_hit_threshold: EDGE_HIT_THRESHOLD,
            synthetic_mouse_suppress_s: SYNTHETIC_MOUSE_SUPPRESS_S,
            multi_touch_cooldown_s: MULTI_TOUCH_COOLDOWN_S,
            tap_defer_s: TAP_DEFER_S,
            click_travel_threshold_px: CLICK_TRAVEL_THRESHOLD_PX,
            selection_pick_radius_px: SELECTION_PICK_RADIUS_PX,
            history_max_depth: HISTORY_MAX_DEPTH,
        }
    }
}

/// Serde-Default für `history_max_depth` (ältere Konfigdateien).
fn default_history_max_depth() -> usize {
    HISTORY_MAX_DEPTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}
