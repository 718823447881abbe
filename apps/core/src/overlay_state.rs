use crate::core_service::CoreService;
use crate::model::LaunchTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Insert(char),
    InsertText(String),
    SetText(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    Home,
    End,
    Up,
    Down,
    AcceptCompletion,
    Escape,
    FocusLost,
    Close,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Dismissed,
    Launch(LaunchTarget),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Popup {
    visible: bool,
    candidates: Vec<String>,
    selected: Option<usize>,
}

/// The input box and its completion popup, from startup until the session
/// ends in [`Phase::Terminal`].
pub struct OverlayState {
    service: CoreService,
    phase: Phase,
    text: String,
    cursor: usize,
    popup: Popup,
}

impl OverlayState {
    pub fn new(service: CoreService) -> Self {
        Self {
            service,
            phase: Phase::Editing,
            text: String::new(),
            cursor: 0,
            popup: Popup::default(),
        }
    }

    pub fn service(&self) -> &CoreService {
        &self.service
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_popup_visible(&self) -> bool {
        self.popup.visible
    }

    pub fn candidates(&self) -> &[String] {
        &self.popup.candidates
    }

    pub fn selected_candidate(&self) -> Option<usize> {
        self.popup.selected
    }

    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        if self.phase == Phase::Terminal {
            return Outcome::Continue;
        }

        match event {
            InputEvent::Insert(ch) => {
                if !ch.is_control() {
                    let at = self.byte_offset(self.cursor);
                    self.text.insert(at, ch);
                    self.cursor += 1;
                    self.on_text_changed();
                }
            }
            InputEvent::InsertText(text) => {
                let single_line = single_line(&text);
                if !single_line.is_empty() {
                    let at = self.byte_offset(self.cursor);
                    self.text.insert_str(at, &single_line);
                    self.cursor += single_line.chars().count();
                    self.on_text_changed();
                }
            }
            InputEvent::SetText(text) => self.set_text(single_line(&text)),
            InputEvent::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.text.remove(at);
                    self.on_text_changed();
                }
            }
            InputEvent::Delete => {
                if self.cursor < self.char_len() {
                    let at = self.byte_offset(self.cursor);
                    self.text.remove(at);
                    self.on_text_changed();
                }
            }
            InputEvent::CursorLeft => self.cursor = self.cursor.saturating_sub(1),
            InputEvent::CursorRight => self.cursor = (self.cursor + 1).min(self.char_len()),
            InputEvent::Home => self.cursor = 0,
            InputEvent::End => self.cursor = self.char_len(),
            InputEvent::Down => {
                if self.popup.visible {
                    self.move_selection(1);
                } else {
                    self.show_popup();
                }
            }
            InputEvent::Up => {
                if self.popup.visible {
                    self.move_selection(-1);
                }
            }
            InputEvent::AcceptCompletion => {
                self.accept_completion();
            }
            InputEvent::Escape => {
                if self.popup.visible {
                    self.hide_popup();
                } else {
                    return self.dismiss("escape");
                }
            }
            InputEvent::FocusLost => return self.dismiss("focus lost"),
            InputEvent::Close => return self.dismiss("close"),
            InputEvent::Submit => return self.submit(),
        }

        Outcome::Continue
    }

    /// Enter on a highlighted candidate submits that candidate in one step.
    fn submit(&mut self) -> Outcome {
        self.accept_completion();

        let Some(target) = self.service.submit(&self.text) else {
            return Outcome::Continue;
        };
        self.hide_popup();
        self.phase = Phase::Terminal;
        Outcome::Launch(target)
    }

    fn dismiss(&mut self, reason: &str) -> Outcome {
        tracing::info!("dismissed: {reason}");
        self.hide_popup();
        self.phase = Phase::Terminal;
        Outcome::Dismissed
    }

    fn accept_completion(&mut self) -> bool {
        if !self.popup.visible {
            return false;
        }
        let Some(chosen) = self
            .popup
            .selected
            .and_then(|index| self.popup.candidates.get(index))
            .cloned()
        else {
            return false;
        };

        self.text = chosen;
        self.cursor = self.char_len();
        self.hide_popup();
        true
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.char_len();
        self.on_text_changed();
    }

    fn on_text_changed(&mut self) {
        self.popup.candidates = self.service.candidates(&self.text);
        self.popup.selected = None;
        self.popup.visible = !self.text.trim().is_empty() && !self.popup.candidates.is_empty();
    }

    fn show_popup(&mut self) {
        self.popup.candidates = self.service.candidates(&self.text);
        self.popup.selected = None;
        self.popup.visible = !self.popup.candidates.is_empty();
    }

    fn hide_popup(&mut self) {
        self.popup.visible = false;
        self.popup.selected = None;
    }

    fn move_selection(&mut self, direction: i32) {
        let len = self.popup.candidates.len();
        if len == 0 {
            return;
        }

        self.popup.selected = Some(match self.popup.selected {
            None if direction > 0 => 0,
            None => return,
            Some(current) => next_selection_index(current, len, direction),
        });
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

fn single_line(text: &str) -> String {
    text.chars()
        .map(|ch| if ch == '\n' || ch == '\r' || ch == '\t' { ' ' } else { ch })
        .filter(|ch| !ch.is_control())
        .collect()
}

pub fn next_selection_index(current: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }

    let max = len - 1;
    if direction < 0 {
        current.saturating_sub(1)
    } else if direction > 0 {
        (current + 1).min(max)
    } else {
        current.min(max)
    }
}
