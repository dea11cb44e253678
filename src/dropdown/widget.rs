use eframe::egui;
use egui::{Id, Response, RichText, Ui, WidgetText};
use log::{debug, info};
use std::hash::Hash;

use super::registry::OpenRegistry;
use super::search::SearchProvider;
use super::state::{Choice, DropdownState};
use crate::theme::DropdownStyle;

/// Draws one row of the open panel.
pub trait OptionRenderer {
    fn render(&mut self, ui: &mut Ui, choice: &Choice, selected: bool) -> Response;
}

impl<F> OptionRenderer for F
where
    F: FnMut(&mut Ui, &Choice, bool) -> Response,
{
    fn render(&mut self, ui: &mut Ui, choice: &Choice, selected: bool) -> Response {
        self(ui, choice, selected)
    }
}

/// Default row: a plain selectable label.
pub struct LabelRow;

impl OptionRenderer for LabelRow {
    fn render(&mut self, ui: &mut Ui, choice: &Choice, selected: bool) -> Response {
        ui.selectable_label(selected, choice.label.as_str())
    }
}

/// Produces the text shown on the closed trigger.
pub trait ValueRenderer {
    fn render(&mut self, selected: Option<&Choice>) -> WidgetText;
}

impl<F> ValueRenderer for F
where
    F: FnMut(Option<&Choice>) -> WidgetText,
{
    fn render(&mut self, selected: Option<&Choice>) -> WidgetText {
        self(selected)
    }
}

/// Default value display: the selected label, or a weak prompt.
pub struct LabelValue {
    prompt: String,
}

impl LabelValue {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl ValueRenderer for LabelValue {
    fn render(&mut self, selected: Option<&Choice>) -> WidgetText {
        match selected {
            Some(choice) => choice.label.clone().into(),
            None => RichText::new(self.prompt.as_str()).weak().into(),
        }
    }
}

/// What one frame of the dropdown reported back to the host.
pub struct DropdownResponse {
    /// The choice the user picked this frame, at most one. The host owns
    /// the selection and decides what to do with it.
    pub picked: Option<Choice>,
    pub is_open: bool,
    /// Response of the trigger button.
    pub response: Response,
}

/// A searchable dropdown. Built fresh each frame around host-owned state,
/// in the same borrowed-state style as the rest of the widgets here:
///
/// ```ignore
/// let reply = Dropdown::new("fruit", &mut state, &mut registry, &fruits)
///     .selected(selected.as_ref())
///     .show(ui);
/// if let Some(choice) = reply.picked {
///     selected = Some(choice);
/// }
/// ```
pub struct Dropdown<'a> {
    id: Id,
    state: &'a mut DropdownState,
    registry: &'a mut OpenRegistry,
    options: &'a [Choice],
    selected: Option<&'a Choice>,
    placeholder: String,
    prompt: String,
    style: DropdownStyle,
    option_renderer: Option<Box<dyn OptionRenderer + 'a>>,
    value_renderer: Option<Box<dyn ValueRenderer + 'a>>,
    provider: Option<&'a mut dyn SearchProvider>,
}

impl<'a> Dropdown<'a> {
    pub fn new(
        id_salt: impl Hash,
        state: &'a mut DropdownState,
        registry: &'a mut OpenRegistry,
        options: &'a [Choice],
    ) -> Self {
        Self {
            id: Id::new(id_salt),
            state,
            registry,
            options,
            selected: None,
            placeholder: "Search...".to_string(),
            prompt: "Choose...".to_string(),
            style: DropdownStyle::default(),
            option_renderer: None,
            value_renderer: None,
            provider: None,
        }
    }

    /// Current selection, owned by the host. May be none.
    pub fn selected(mut self, selected: Option<&'a Choice>) -> Self {
        self.selected = selected;
        self
    }

    /// Hint text for the empty filter input.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Trigger text when nothing is selected. Only used by the default
    /// value renderer.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn style(mut self, style: DropdownStyle) -> Self {
        self.style = style;
        self
    }

    /// Override how each panel row is drawn.
    pub fn render_option(mut self, renderer: impl OptionRenderer + 'a) -> Self {
        self.option_renderer = Some(Box::new(renderer));
        self
    }

    /// Override how the closed trigger displays the selection.
    pub fn render_value(mut self, renderer: impl ValueRenderer + 'a) -> Self {
        self.value_renderer = Some(Box::new(renderer));
        self
    }

    /// Replace the built-in substring filter with a host search, which may
    /// answer synchronously or over a channel.
    pub fn search_provider(mut self, provider: &'a mut dyn SearchProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn show(self, ui: &mut Ui) -> DropdownResponse {
        let Dropdown {
            id,
            state,
            registry,
            options,
            selected,
            placeholder,
            prompt,
            style,
            option_renderer,
            value_renderer,
            provider,
        } = self;

        let mut option_renderer = option_renderer.unwrap_or_else(|| Box::new(LabelRow));
        let mut value_renderer =
            value_renderer.unwrap_or_else(|| Box::new(LabelValue::new(prompt)));

        // Another dropdown may have claimed the open slot since our last
        // frame; if so we lost it and must collapse.
        if state.is_open() && !registry.is_holder(id) {
            info!("dropdown {id:?} closing, another dropdown opened");
            state.close();
        }

        if state.is_open() && state.poll_search() {
            ui.ctx().request_repaint();
        }

        let trigger = ui.add_sized(
            egui::vec2(style.width, style.trigger_height),
            egui::Button::new(value_renderer.render(selected))
                .selected(state.is_open())
                .shortcut_text("▼"),
        );

        if trigger.is_pointer_button_down_on() {
            state.note_trigger_pointer_down();
        }

        let mut open_now = false;

        // Keyboard focus landing on the trigger opens the panel, unless the
        // focus rode in on the pointer gesture we are already handling.
        if trigger.gained_focus() && state.focus_should_open() && !state.is_open() {
            debug!("dropdown {id:?} opening on focus");
            open_now = true;
        }

        // A click is an unconditional toggle.
        if trigger.clicked() {
            if state.is_open() {
                state.close();
                registry.release(id);
            } else {
                open_now = true;
            }
        }

        if open_now {
            info!("dropdown {id:?} opening");
            state.open(options);
            if let Some(displaced) = registry.acquire(id) {
                info!("dropdown {id:?} displaced {displaced:?}");
            }
        }

        let mut picked = None;
        let mut panel_rect = None;

        if state.is_open() {
            let area = egui::Area::new(id.with("panel"))
                .order(egui::Order::Foreground)
                .fixed_pos(trigger.rect.left_bottom() + egui::vec2(0.0, style.panel_gap))
                .constrain(true)
                .movable(false)
                .show(ui.ctx(), |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_min_width(trigger.rect.width());

                        let filter_edit = ui.add(
                            egui::TextEdit::singleline(&mut state.query)
                                .hint_text(placeholder)
                                .desired_width(f32::INFINITY),
                        );
                        if state.take_focus_request() {
                            filter_edit.request_focus();
                        }
                        if filter_edit.changed() {
                            state.run_search(options, provider);
                        }

                        ui.add_space(4.0);

                        if state.has_pending_search() {
                            ui.label(RichText::new("Searching...").weak());
                        }

                        egui::ScrollArea::vertical()
                            .id_salt(id.with("choices"))
                            .max_height(style.panel_max_height)
                            .auto_shrink([false, true])
                            .show(ui, |ui| {
                                if state.filtered.is_empty() {
                                    ui.vertical_centered(|ui| {
                                        ui.label(RichText::new("No match").weak());
                                    });
                                } else {
                                    for choice in &state.filtered {
                                        let is_selected = selected
                                            .map_or(false, |sel| sel.value == choice.value);
                                        let row =
                                            option_renderer.render(ui, choice, is_selected);
                                        if row.clicked() {
                                            picked = Some(choice.clone());
                                        }
                                    }
                                }
                            });
                    });
                });
            panel_rect = Some(area.response.rect);
        }

        if let Some(choice) = &picked {
            info!("dropdown {id:?} picked '{}'", choice.value);
            state.close();
            registry.release(id);
        }

        // A pointer pressed outside both the trigger and the panel while we
        // are open collapses the panel without reporting a pick.
        if state.is_open() {
            let pressed_at = ui.input(|i| {
                if i.pointer.any_pressed() {
                    i.pointer.press_origin()
                } else {
                    None
                }
            });
            if let Some(pos) = pressed_at {
                let inside = trigger.rect.contains(pos)
                    || panel_rect.is_some_and(|rect| rect.contains(pos));
                if !inside {
                    debug!("dropdown {id:?} closing on outside press");
                    state.close();
                    registry.release(id);
                }
            }
        }

        DropdownResponse {
            picked,
            is_open: state.is_open(),
            response: trigger,
        }
    }
}
