use usradmin_core::events::CoreEvent;
use usradmin_core::{CoreHandle, Panel, UserProfile};

const SPINNER_FRAMES: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes edit the search term
    Searching,
}

/// Buttons of the delete confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Cancel,
    Delete,
}

impl ConfirmChoice {
    pub fn toggle(self) -> Self {
        match self {
            ConfirmChoice::Cancel => ConfirmChoice::Delete,
            ConfirmChoice::Delete => ConfirmChoice::Cancel,
        }
    }
}

/// Terminal-side state wrapped around the headless [`Panel`]
pub struct App {
    pub panel: Panel,
    pub running: bool,
    /// First Ctrl+C seen; a second one quits
    pub pending_quit: bool,
    pub input_mode: InputMode,
    /// Index into the filtered list
    pub selected_index: usize,
    pub confirm_choice: ConfirmChoice,
    /// Running inside an embedding parent
    pub embedded: bool,
    frame_counter: u64,
    core_handle: CoreHandle,
}

impl App {
    pub fn new(core_handle: CoreHandle, embedded: bool) -> Self {
        Self {
            panel: Panel::new(),
            running: true,
            pending_quit: false,
            input_mode: InputMode::Normal,
            selected_index: 0,
            confirm_choice: ConfirmChoice::Cancel,
            embedded,
            frame_counter: 0,
            core_handle,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Advance animations
    pub fn tick(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[(self.frame_counter / 2) as usize % SPINNER_FRAMES.len()]
    }

    /// Feed a background result through the panel and run what it asks for
    pub fn handle_core_event(&mut self, event: CoreEvent) {
        let effects = self.panel.apply(event);
        self.core_handle.dispatch_all(effects);
        self.clamp_selection();
    }

    // ===== Selection =====

    pub fn visible_count(&self) -> usize {
        self.panel.visible_profiles().len()
    }

    pub fn selected_profile(&self) -> Option<UserProfile> {
        self.panel
            .visible_profiles()
            .get(self.selected_index)
            .map(|p| (*p).clone())
    }

    pub fn select_next(&mut self) {
        let count = self.visible_count();
        if count > 0 && self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_count();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    // ===== Search =====

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Searching;
    }

    pub fn stop_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_push(&mut self, c: char) {
        self.panel.push_search_char(c);
        self.selected_index = 0;
    }

    pub fn search_pop(&mut self) {
        self.panel.pop_search_char();
        self.selected_index = 0;
    }

    pub fn clear_search(&mut self) {
        self.panel.set_search_term("");
        self.selected_index = 0;
    }

    // ===== Deletion =====

    pub fn is_confirming_delete(&self) -> bool {
        self.panel.pending_deletion().is_some()
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(profile) = self.selected_profile() {
            self.panel.request_delete(profile);
            self.confirm_choice = ConfirmChoice::Cancel;
        }
    }

    pub fn confirm_delete(&mut self) {
        let effects = self.panel.confirm_delete();
        self.core_handle.dispatch_all(effects);
    }

    pub fn cancel_delete(&mut self) {
        self.panel.cancel_delete();
    }

    // ===== Misc actions =====

    pub fn reload(&mut self) {
        let effects = self.panel.reload();
        self.core_handle.dispatch_all(effects);
    }

    pub fn dismiss_notice(&mut self) {
        self.panel.dismiss_notice();
        self.panel.dismiss_refresh_error();
    }
}
