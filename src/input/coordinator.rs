//! Zustandsbehaftete Event-Auflösung.
//!
//! Auflösungsreihenfolge: Zwei-Finger-Geste (gewinnt immer, bricht laufende
//! Striche ab) → rechte/mittlere Maustaste (Kamera-Pan, nie ein Tool) →
//! linke Taste bzw. Einzel-Touch (Tool-Dispatch). Zeitfenster laufen als
//! Deadlines gegen eine vom Host injizierte monotone Uhr.

use crate::app::use_cases::pick;
use crate::app::{AppState, EditorIntent, PointerSource, ToolId};
use glam::Vec2;
use std::collections::HashMap;

use super::{InputEvent, Key, PointerButton};

/// Aufgeschobener Einzel-Touch-Start (wartet auf einen zweiten Finger).
#[derive(Debug, Clone, Copy)]
struct PendingTap {
    screen: Vec2,
    deadline: f64,
}

/// Was der aktuell gedrückte Zeiger gerade tut.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragMode {
    #[default]
    None,
    /// Rechte/mittlere Taste oder Leerflächen-Pan
    CameraPan { last_screen: Vec2 },
    /// Linksklick auf leere Fläche: Pan, unter 5 px Bewegung ein Deselect
    EmptyPress { start_screen: Vec2, last_screen: Vec2 },
    /// Laufender Tool-Strich
    ToolStroke,
    /// Laufender Gruppen-Drag der Selektion
    GroupDrag,
    /// Zwei Finger: Pinch-Zoom und Pan
    TwoFinger { centroid: Vec2, distance: f32 },
}

/// Eingabe-Koordinator mit kurzlebigem Disambiguierungszustand.
#[derive(Default)]
pub struct InputState {
    mode: DragMode,
    /// Aktive Touch-Punkte (id → Screen-Position)
    touches: HashMap<u64, Vec2>,
    /// Zeitpunkt des letzten Touch-Events (synthetische Maus-Unterdrückung)
    last_touch_time: f64,
    /// In dieser Touch-Episode waren zwei Finger unten
    multi_touch: bool,
    /// Einzel-Touch-Tool-Aktionen blockiert bis zu diesem Zeitpunkt
    cooldown_until: f64,
    pending_tap: Option<PendingTap>,
}

fn world_at(state: &AppState, screen: Vec2) -> Vec2 {
    state.view.camera.screen_to_world(screen, state.view.viewport_vec())
}

/// Screen-Delta → Kamera-Delta: der Inhalt folgt dem Zeiger, Welt-Y wächst
/// nach Norden.
fn pan_delta(state: &AppState, screen_delta: Vec2) -> Vec2 {
    let wpp = state.view.camera.world_per_pixel(state.view.viewport_size[1]);
    Vec2::new(-screen_delta.x * wpp, screen_delta.y * wpp)
}

fn tool_for_digit(digit: u8) -> Option<ToolId> {
    match digit {
        1 => Some(ToolId::Select),
        2 => Some(ToolId::Paint),
        3 => Some(ToolId::Erase),
        4 => Some(ToolId::RectFill),
        5 => Some(ToolId::CircleFill),
        6 => Some(ToolId::ClearArea),
        7 => Some(ToolId::EdgePaint),
        8 => Some(ToolId::EdgeErase),
        9 => Some(ToolId::EdgeLine),
        0 => Some(ToolId::Segment),
        _ => None,
    }
}

impl InputState {
    /// Erstellt einen leeren Koordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft allen Disambiguierungszustand (Unmount, Fokusverlust).
    pub fn reset(&mut self) {
        self.mode = DragMode::None;
        self.touches.clear();
        self.multi_touch = false;
        self.cooldown_until = 0.0;
        self.pending_tap = None;
    }

    /// Verarbeitet ein rohes Eingabe-Event. `now` ist eine monotone Uhr in
    /// Sekunden; der Rückgabewert geht in Reihenfolge an den Controller.
    pub fn handle_event(
        &mut self,
        state: &AppState,
        event: InputEvent,
        now: f64,
    ) -> Vec<EditorIntent> {
        match event {
            InputEvent::PointerDown { pos, button, ctrl } => {
                self.pointer_down(state, pos, button, ctrl, now)
            }
            InputEvent::PointerMove { pos } => self.pointer_move(state, pos),
            InputEvent::PointerUp { pos, .. } => self.pointer_up(state, pos),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::TouchStart { id, pos } => self.touch_start(state, id, pos, now),
            InputEvent::TouchMove { id, pos } => self.touch_move(state, id, pos, now),
            InputEvent::TouchEnd { id, pos } => self.touch_end(state, id, pos, now),
            InputEvent::Wheel { pos, delta } => self.wheel(state, pos, delta),
            InputEvent::KeyDown { key, ctrl, shift } => Self::key_down(key, ctrl, shift),
            InputEvent::DoubleClick { pos } => {
                if self.mouse_suppressed(state, now) {
                    return Vec::new();
                }
                vec![EditorIntent::LabelEditRequested {
                    world: world_at(state, pos),
                }]
            }
            InputEvent::ContextMenu { pos } => {
                let world = world_at(state, pos);
                vec![
                    EditorIntent::ItemPickRequested {
                        world,
                        additive: false,
                    },
                    EditorIntent::ContextTargetRequested { world },
                ]
            }
        }
    }

    /// Flusht fällige Deadlines (aufgeschobene Taps). Vom Host pro Frame
    /// aufzurufen.
    pub fn tick(&mut self, state: &AppState, now: f64) -> Vec<EditorIntent> {
        if self
            .pending_tap
            .is_some_and(|pending| pending.deadline <= now)
        {
            return self.flush_pending(state);
        }
        Vec::new()
    }

    // ── Maus ────────────────────────────────────────────────────

    fn mouse_suppressed(&self, state: &AppState, now: f64) -> bool {
        now - self.last_touch_time < state.options.synthetic_mouse_suppress_s
    }

    fn pointer_down(
        &mut self,
        state: &AppState,
        pos: Vec2,
        button: PointerButton,
        ctrl: bool,
        now: f64,
    ) -> Vec<EditorIntent> {
        if self.mouse_suppressed(state, now) {
            return Vec::new();
        }
        match button {
            PointerButton::Secondary | PointerButton::Middle => {
                self.mode = DragMode::CameraPan { last_screen: pos };
                Vec::new()
            }
            PointerButton::Primary => self.left_press(state, pos, ctrl, PointerSource::Mouse),
        }
    }

    /// Tool-Dispatch für die linke Taste bzw. einen (ggf. aufgeschobenen)
    /// Einzel-Touch. Select-Tool-Reihenfolge: selektiertes Element →
    /// Objekt/Label-Treffer → Leerflächen-Pan.
    fn left_press(
        &mut self,
        state: &AppState,
        screen: Vec2,
        additive: bool,
        source: PointerSource,
    ) -> Vec<EditorIntent> {
        let world = world_at(state, screen);
        if state.editor.active_tool != ToolId::Select {
            self.mode = DragMode::ToolStroke;
            return vec![EditorIntent::ToolStrokeBegan { world, source }];
        }
        if additive {
            return vec![EditorIntent::ItemPickRequested {
                world,
                additive: true,
            }];
        }
        let layer = state.document.active();
        let geometry = state.geometry.as_ref();
        if pick::selected_item_at(layer, &state.selection, geometry, world).is_some() {
            self.mode = DragMode::GroupDrag;
            return vec![EditorIntent::GroupDragStarted { world }];
        }
        if pick::item_at(layer, geometry, world).is_some() {
            self.mode = DragMode::GroupDrag;
            return vec![
                EditorIntent::ItemPickRequested {
                    world,
                    additive: false,
                },
                EditorIntent::GroupDragStarted { world },
            ];
        }
        self.mode = DragMode::EmptyPress {
            start_screen: screen,
            last_screen: screen,
        };
        Vec::new()
    }

    fn pointer_move(&mut self, state: &AppState, pos: Vec2) -> Vec<EditorIntent> {
        match self.mode {
            DragMode::CameraPan { last_screen } => {
                self.mode = DragMode::CameraPan { last_screen: pos };
                vec![EditorIntent::CameraPan {
                    delta: pan_delta(state, pos - last_screen),
                }]
            }
            DragMode::EmptyPress {
                start_screen,
                last_screen,
            } => {
                self.mode = DragMode::EmptyPress {
                    start_screen,
                    last_screen: pos,
                };
                vec![EditorIntent::CameraPan {
                    delta: pan_delta(state, pos - last_screen),
                }]
            }
            DragMode::ToolStroke => vec![EditorIntent::ToolStrokeMoved {
                world: world_at(state, pos),
                source: PointerSource::Mouse,
            }],
            DragMode::GroupDrag => vec![EditorIntent::GroupDragMoved {
                world: world_at(state, pos),
            }],
            DragMode::None | DragMode::TwoFinger { .. } => Vec::new(),
        }
    }

    fn pointer_up(&mut self, state: &AppState, pos: Vec2) -> Vec<EditorIntent> {
        let mode = std::mem::take(&mut self.mode);
        match mode {
            DragMode::ToolStroke => vec![EditorIntent::ToolStrokeEnded {
                world: world_at(state, pos),
                source: PointerSource::Mouse,
            }],
            DragMode::GroupDrag => vec![EditorIntent::GroupDragEnded],
            DragMode::EmptyPress { start_screen, .. } => {
                if (pos - start_screen).length() < state.options.click_travel_threshold_px {
                    vec![EditorIntent::DeselectRequested]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    fn pointer_leave(&mut self) -> Vec<EditorIntent> {
        self.pending_tap = None;
        let mode = std::mem::take(&mut self.mode);
        match mode {
            DragMode::ToolStroke => vec![EditorIntent::ToolStrokeCancelled],
            DragMode::GroupDrag => vec![EditorIntent::GroupDragEnded],
            _ => Vec::new(),
        }
    }

    // ── Touch ───────────────────────────────────────────────────

    fn two_finger_shape(&self) -> Option<(Vec2, f32)> {
        let mut points = self.touches.values();
        let (a, b) = (points.next()?, points.next()?);
        Some(((*a + *b) / 2.0, a.distance(*b)))
    }

    fn touch_start(
        &mut self,
        state: &AppState,
        id: u64,
        pos: Vec2,
        now: f64,
    ) -> Vec<EditorIntent> {
        self.last_touch_time = now;
        self.touches.insert(id, pos);

        if self.touches.len() == 2 {
            // Zweiter Finger: gewinnt immer. Aufgeschobener Tap verfällt,
            // ein laufender Strich wird abgebrochen.
            self.multi_touch = true;
            self.pending_tap = None;
            let interrupted = matches!(self.mode, DragMode::ToolStroke | DragMode::GroupDrag);
            let (centroid, distance) = self.two_finger_shape().unwrap_or((pos, 0.0));
            self.mode = DragMode::TwoFinger { centroid, distance };
            if interrupted {
                // Bricht auch einen Gruppen-Drag ab: die Maschine stellt
                // ihre Baselines wieder her und die Gesten-Klammer schließt.
                return vec![EditorIntent::ToolStrokeCancelled];
            }
            return Vec::new();
        }

        if self.touches.len() == 1 {
            if now < self.cooldown_until {
                return Vec::new();
            }
            self.pending_tap = Some(PendingTap {
                screen: pos,
                deadline: now + state.options.tap_defer_s,
            });
        }
        Vec::new()
    }

    fn flush_pending(&mut self, state: &AppState) -> Vec<EditorIntent> {
        let Some(pending) = self.pending_tap.take() else {
            return Vec::new();
        };
        self.left_press(state, pending.screen, false, PointerSource::Touch)
    }

    fn touch_move(
        &mut self,
        state: &AppState,
        id: u64,
        pos: Vec2,
        now: f64,
    ) -> Vec<EditorIntent> {
        self.last_touch_time = now;
        self.touches.insert(id, pos);

        if let DragMode::TwoFinger { centroid, distance } = self.mode {
            let Some((new_centroid, new_distance)) = self.two_finger_shape() else {
                return Vec::new();
            };
            let mut intents = Vec::new();
            let delta = new_centroid - centroid;
            if delta != Vec2::ZERO {
                intents.push(EditorIntent::CameraPan {
                    delta: pan_delta(state, delta),
                });
            }
            if distance > 1.0 && new_distance > 1.0 && new_distance != distance {
                intents.push(EditorIntent::CameraZoom {
                    factor: new_distance / distance,
                    focus_world: Some(world_at(state, new_centroid)),
                });
            }
            self.mode = DragMode::TwoFinger {
                centroid: new_centroid,
                distance: new_distance,
            };
            return intents;
        }

        // Einzel-Finger: ein aufgeschobener Tap, der die Klick-Schwelle
        // überschreitet, wird sofort als Strich-Start geflusht.
        if let Some(pending) = self.pending_tap {
            if (pos - pending.screen).length() <= state.options.click_travel_threshold_px {
                return Vec::new();
            }
            let mut intents = self.flush_pending(state);
            intents.extend(self.single_touch_move(state, pos));
            return intents;
        }
        self.single_touch_move(state, pos)
    }

    fn single_touch_move(&mut self, state: &AppState, pos: Vec2) -> Vec<EditorIntent> {
        match self.mode {
            DragMode::ToolStroke => vec![EditorIntent::ToolStrokeMoved {
                world: world_at(state, pos),
                source: PointerSource::Touch,
            }],
            DragMode::GroupDrag => vec![EditorIntent::GroupDragMoved {
                world: world_at(state, pos),
            }],
            DragMode::EmptyPress {
                start_screen,
                last_screen,
            } => {
                self.mode = DragMode::EmptyPress {
                    start_screen,
                    last_screen: pos,
                };
                vec![EditorIntent::CameraPan {
                    delta: pan_delta(state, pos - last_screen),
                }]
            }
            _ => Vec::new(),
        }
    }

    fn touch_end(&mut self, state: &AppState, id: u64, pos: Vec2, now: f64) -> Vec<EditorIntent> {
        self.last_touch_time = now;
        self.touches.remove(&id);

        if self.multi_touch {
            if self.touches.is_empty() {
                self.multi_touch = false;
                self.cooldown_until = now + state.options.multi_touch_cooldown_s;
                self.mode = DragMode::None;
            }
            return Vec::new();
        }

        // Tap innerhalb des Aufschub-Fensters: Start und Ende in einem Zug
        if self.pending_tap.is_some() {
            let mut intents = self.flush_pending(state);
            intents.extend(self.finish_single_touch(state, pos));
            return intents;
        }
        self.finish_single_touch(state, pos)
    }

    fn finish_single_touch(&mut self, state: &AppState, pos: Vec2) -> Vec<EditorIntent> {
        let mode = std::mem::take(&mut self.mode);
        match mode {
            DragMode::ToolStroke => vec![EditorIntent::ToolStrokeEnded {
                world: world_at(state, pos),
                source: PointerSource::Touch,
            }],
            DragMode::GroupDrag => vec![EditorIntent::GroupDragEnded],
            DragMode::EmptyPress { start_screen, .. } => {
                if (pos - start_screen).length() < state.options.click_travel_threshold_px {
                    vec![EditorIntent::DeselectRequested]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    // ── Rad & Tastatur ──────────────────────────────────────────

    fn wheel(&self, state: &AppState, pos: Vec2, delta: f32) -> Vec<EditorIntent> {
        if delta == 0.0 {
            return Vec::new();
        }
        let step = state.options.camera_scroll_zoom_step;
        let factor = if delta > 0.0 { step } else { 1.0 / step };
        vec![EditorIntent::CameraZoom {
            factor,
            focus_world: Some(world_at(state, pos)),
        }]
    }

    fn key_down(key: Key, ctrl: bool, shift: bool) -> Vec<EditorIntent> {
        match key {
            Key::Z if ctrl && shift => vec![EditorIntent::RedoRequested],
            Key::Z if ctrl => vec![EditorIntent::UndoRequested],
            Key::Y if ctrl => vec![EditorIntent::RedoRequested],
            Key::Escape => vec![EditorIntent::EscapePressed],
            Key::Delete => vec![EditorIntent::DeleteSelectedRequested],
            Key::Digit(digit) => tool_for_digit(digit)
                .map(|tool| vec![EditorIntent::SetToolRequested { tool }])
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}
