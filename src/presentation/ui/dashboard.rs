use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::application::dto::{EmergencyMessageRequest, SosRequest, WeatherRequest};
use crate::domain::entities::{SosDispatch, TrainStatus, WeatherReport};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::RequestState;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::{Appearance, Theme};
use crate::presentation::widgets::{
    FieldList, FieldRow, FocusContext, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle,
    TextInput, TextInputView,
};
use crate::{NAME, VERSION};

/// Label of the link rendered for a dispatched SOS.
pub const MAP_LINK_LABEL: &str = "View on Map";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    TrainInput,
    CityInput,
    SosCategories,
    ContactInput,
}

impl Focus {
    const fn next(self) -> Self {
        match self {
            Self::TrainInput => Self::CityInput,
            Self::CityInput => Self::SosCategories,
            Self::SosCategories => Self::ContactInput,
            Self::ContactInput => Self::TrainInput,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::TrainInput => Self::ContactInput,
            Self::CityInput => Self::TrainInput,
            Self::SosCategories => Self::CityInput,
            Self::ContactInput => Self::SosCategories,
        }
    }

    #[must_use]
    pub const fn to_focus_context(self) -> FocusContext {
        match self {
            Self::TrainInput => FocusContext::Train,
            Self::CityInput => FocusContext::Weather,
            Self::SosCategories => FocusContext::Sos,
            Self::ContactInput => FocusContext::Emergency,
        }
    }
}

/// Panels that own a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Train,
    Weather,
    Sos,
    Emergency,
}

/// Display slots of the train panel, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainField {
    Name,
    CurrentStation,
    NextStation,
    ScheduledArrival,
    DelayMinutes,
    PredictedDelay,
    DelayReason,
    Platform,
}

impl TrainField {
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::CurrentStation,
        Self::NextStation,
        Self::ScheduledArrival,
        Self::DelayMinutes,
        Self::PredictedDelay,
        Self::DelayReason,
        Self::Platform,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Train",
            Self::CurrentStation => "Current Station",
            Self::NextStation => "Next Station",
            Self::ScheduledArrival => "Scheduled Arrival",
            Self::DelayMinutes => "Delay (min)",
            Self::PredictedDelay => "Predicted Delay",
            Self::DelayReason => "Delay Reason",
            Self::Platform => "Platform",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    fn value_of(self, status: &TrainStatus) -> &str {
        match self {
            Self::Name => &status.train_name,
            Self::CurrentStation => &status.current_station,
            Self::NextStation => &status.next_station,
            Self::ScheduledArrival => &status.scheduled_arrival,
            Self::DelayMinutes => &status.delay_minutes,
            Self::PredictedDelay => &status.predicted_delay,
            Self::DelayReason => status.delay_reason_text(),
            Self::Platform => &status.platform,
        }
    }
}

/// Display slots of the weather panel, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherField {
    City,
    Temperature,
    Condition,
    Humidity,
    WindSpeed,
}

impl WeatherField {
    pub const ALL: [Self; 5] = [
        Self::City,
        Self::Temperature,
        Self::Condition,
        Self::Humidity,
        Self::WindSpeed,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::City => "City",
            Self::Temperature => "Temperature",
            Self::Condition => "Condition",
            Self::Humidity => "Humidity",
            Self::WindSpeed => "Wind Speed",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    fn value_of(self, report: &WeatherReport) -> &str {
        match self {
            Self::City => &report.city,
            Self::Temperature => &report.temperature,
            Self::Condition => &report.condition,
            Self::Humidity => &report.humidity,
            Self::WindSpeed => &report.wind_speed,
        }
    }
}

/// Link opened in the system browser rather than inside the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    pub label: &'static str,
    pub target: String,
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SosView {
    pub responder: String,
    pub link: Hyperlink,
}

impl SosView {
    #[must_use]
    pub fn responder_text(&self) -> String {
        format!("Responder: {}", self.responder)
    }
}

/// Outcome of a key press on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardKeyResult {
    Consumed,
    Quit,
    ToggleTheme,
    CheckTrain(String),
    GetWeather(WeatherRequest),
    SendSos(SosRequest),
    SendEmergency(EmergencyMessageRequest),
    OpenMap(String),
}

pub struct DashboardState {
    focus: Focus,
    appearance: Appearance,
    date_text: String,
    train_input: TextInput,
    city_input: TextInput,
    contact_input: TextInput,
    categories: Vec<String>,
    selected_category: usize,
    train_slots: [Option<String>; 8],
    train_extras: Vec<(&'static str, String)>,
    weather_slots: [Option<String>; 5],
    sos: Option<SosView>,
    train_state: RequestState,
    weather_state: RequestState,
    sos_state: RequestState,
    emergency_state: RequestState,
}

impl DashboardState {
    #[must_use]
    pub fn new(
        categories: Vec<String>,
        contact: Option<String>,
        date_text: String,
        appearance: Appearance,
    ) -> Self {
        let mut train_input = TextInput::new(" Train No ").placeholder("e.g. 12951");
        train_input.set_focused(true);
        let mut contact_input =
            TextInput::new(" Emergency Contact ").placeholder("phone or address");
        if let Some(contact) = contact {
            contact_input.set_value(contact);
        }

        Self {
            focus: Focus::default(),
            appearance,
            date_text,
            train_input,
            city_input: TextInput::new(" City ").placeholder("e.g. Mumbai"),
            contact_input,
            categories,
            selected_category: 0,
            train_slots: Default::default(),
            train_extras: Vec::new(),
            weather_slots: Default::default(),
            sos: None,
            train_state: RequestState::Idle,
            weather_state: RequestState::Idle,
            sos_state: RequestState::Idle,
            emergency_state: RequestState::Idle,
        }
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub const fn appearance(&self) -> Appearance {
        self.appearance
    }

    #[must_use]
    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    #[must_use]
    pub fn train_slot(&self, field: TrainField) -> Option<&str> {
        self.train_slots[field.index()].as_deref()
    }

    #[must_use]
    pub fn train_extras(&self) -> &[(&'static str, String)] {
        &self.train_extras
    }

    #[must_use]
    pub fn weather_slot(&self, field: WeatherField) -> Option<&str> {
        self.weather_slots[field.index()].as_deref()
    }

    #[must_use]
    pub const fn sos(&self) -> Option<&SosView> {
        self.sos.as_ref()
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.categories.get(self.selected_category).map(String::as_str)
    }

    #[must_use]
    pub const fn request_state(&self, panel: Panel) -> RequestState {
        match panel {
            Panel::Train => self.train_state,
            Panel::Weather => self.weather_state,
            Panel::Sos => self.sos_state,
            Panel::Emergency => self.emergency_state,
        }
    }

    pub fn set_request_state(&mut self, panel: Panel, state: RequestState) {
        let slot = match panel {
            Panel::Train => &mut self.train_state,
            Panel::Weather => &mut self.weather_state,
            Panel::Sos => &mut self.sos_state,
            Panel::Emergency => &mut self.emergency_state,
        };
        *slot = state;
    }

    pub fn toggle_appearance(&mut self) -> Appearance {
        self.appearance = self.appearance.toggled();
        self.appearance
    }

    pub fn apply_train(&mut self, status: &TrainStatus) {
        for field in TrainField::ALL {
            self.train_slots[field.index()] = Some(field.value_of(status).to_string());
        }

        self.train_extras.clear();
        if let Some(actual) = &status.actual_arrival {
            self.train_extras.push(("Actual Arrival", actual.clone()));
        }
        if let Some(position) = status.current_position() {
            self.train_extras.push(("Current Position", position.to_string()));
        }
        if let Some(position) = status.next_position() {
            self.train_extras.push(("Next Position", position.to_string()));
        }
        if let Some(weather) = &status.weather {
            self.train_extras.push((
                "Station Weather",
                format!("{}, {}", weather.condition, weather.temperature),
            ));
        }
        self.train_state = RequestState::Loaded;
    }

    pub fn apply_weather(&mut self, report: &WeatherReport) {
        for field in WeatherField::ALL {
            self.weather_slots[field.index()] = Some(field.value_of(report).to_string());
        }
        self.weather_state = RequestState::Loaded;
    }

    pub fn apply_sos(&mut self, dispatch: &SosDispatch) {
        self.sos = Some(SosView {
            responder: dispatch.responder_name.clone(),
            link: Hyperlink {
                label: MAP_LINK_LABEL,
                target: dispatch.link.clone(),
                external: true,
            },
        });
        self.sos_state = RequestState::Loaded;
    }

    pub fn handle_key(&mut self, key: KeyEvent, registry: &CommandRegistry) -> DashboardKeyResult {
        if let Some(action) = registry.find_action(key) {
            return self.handle_action(action);
        }

        if self.focus == Focus::SosCategories {
            return self.handle_category_hotkey(key);
        }

        if let Some(input) = self.focused_input_mut() {
            Self::edit_input(input, key);
        }
        DashboardKeyResult::Consumed
    }

    fn handle_action(&mut self, action: Action) -> DashboardKeyResult {
        match action {
            Action::Quit => DashboardKeyResult::Quit,
            Action::ToggleTheme => {
                self.toggle_appearance();
                DashboardKeyResult::ToggleTheme
            }
            Action::FocusNext => {
                self.set_focus(self.focus.next());
                DashboardKeyResult::Consumed
            }
            Action::FocusPrevious => {
                self.set_focus(self.focus.previous());
                DashboardKeyResult::Consumed
            }
            Action::Submit => self.submit(),
            Action::WeatherHere => DashboardKeyResult::GetWeather(WeatherRequest::CurrentLocation),
            Action::OpenMap => self
                .sos
                .as_ref()
                .map_or(DashboardKeyResult::Consumed, |sos| {
                    DashboardKeyResult::OpenMap(sos.link.target.clone())
                }),
            Action::NextCategory => {
                if self.focus == Focus::SosCategories && !self.categories.is_empty() {
                    self.selected_category = (self.selected_category + 1) % self.categories.len();
                }
                DashboardKeyResult::Consumed
            }
            Action::PreviousCategory => {
                if self.focus == Focus::SosCategories && !self.categories.is_empty() {
                    self.selected_category = self
                        .selected_category
                        .checked_sub(1)
                        .unwrap_or(self.categories.len() - 1);
                }
                DashboardKeyResult::Consumed
            }
            Action::ClearInput => {
                if let Some(input) = self.focused_input_mut() {
                    input.clear();
                }
                DashboardKeyResult::Consumed
            }
            Action::Dismiss => DashboardKeyResult::Consumed,
        }
    }

    fn submit(&mut self) -> DashboardKeyResult {
        match self.focus {
            Focus::TrainInput => DashboardKeyResult::CheckTrain(self.train_input.value().to_string()),
            Focus::CityInput => DashboardKeyResult::GetWeather(WeatherRequest::City(
                self.city_input.value().to_string(),
            )),
            Focus::SosCategories => self
                .selected_category()
                .map_or(DashboardKeyResult::Consumed, |category| {
                    DashboardKeyResult::SendSos(SosRequest::new(category))
                }),
            Focus::ContactInput => DashboardKeyResult::SendEmergency(EmergencyMessageRequest::new(
                self.contact_input.value(),
            )),
        }
    }

    fn handle_category_hotkey(&mut self, key: KeyEvent) -> DashboardKeyResult {
        let KeyCode::Char(c) = key.code else {
            return DashboardKeyResult::Consumed;
        };
        let index = c
            .to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .and_then(|d| d.checked_sub(1));

        match index {
            Some(index) if index < self.categories.len() => {
                self.selected_category = index;
                DashboardKeyResult::SendSos(SosRequest::new(self.categories[index].as_str()))
            }
            _ => DashboardKeyResult::Consumed,
        }
    }

    fn edit_input(input: &mut TextInput, key: KeyEvent) {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }
        match key.code {
            KeyCode::Char(c) => input.input_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::TrainInput => Some(&mut self.train_input),
            Focus::CityInput => Some(&mut self.city_input),
            Focus::ContactInput => Some(&mut self.contact_input),
            Focus::SosCategories => None,
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.train_input.set_focused(focus == Focus::TrainInput);
        self.city_input.set_focused(focus == Focus::CityInput);
        self.contact_input.set_focused(focus == Focus::ContactInput);
    }

    fn train_rows(&self) -> Vec<FieldRow<'_>> {
        TrainField::ALL
            .iter()
            .map(|&field| FieldRow::new(field.label(), self.train_slot(field)))
            .chain(
                self.train_extras
                    .iter()
                    .map(|(label, value)| FieldRow::new(label, Some(value.as_str()))),
            )
            .collect()
    }

    fn weather_rows(&self) -> Vec<FieldRow<'_>> {
        WeatherField::ALL
            .iter()
            .map(|&field| FieldRow::new(field.label(), self.weather_slot(field)))
            .collect()
    }
}

impl HasCommands for DashboardState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut commands = Vec::new();
        let mut add = |action: Action, label: &'static str| {
            if let Some(key) = registry.get(action) {
                commands.push(Keybind::new(key, action, label));
            }
        };

        let submit_label = match self.focus {
            Focus::TrainInput => "Check",
            Focus::CityInput => "Weather",
            Focus::SosCategories => "Send SOS",
            Focus::ContactInput => "Notify",
        };
        add(Action::Submit, submit_label);
        add(Action::FocusNext, "Next");
        if self.focus == Focus::SosCategories {
            add(Action::NextCategory, "Category");
        }
        add(Action::WeatherHere, "Local Weather");
        if self.sos.is_some() {
            add(Action::OpenMap, "Map");
        }
        add(Action::ToggleTheme, "Theme");
        add(Action::Quit, "Quit");
        commands
    }
}

pub struct DashboardScreen<'a> {
    theme: &'a Theme,
    registry: &'a CommandRegistry,
}

impl<'a> DashboardScreen<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme, registry: &'a CommandRegistry) -> Self {
        Self { theme, registry }
    }

    fn render_sos_panel(&self, state: &DashboardState, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let border_style = if state.focus == Focus::SosCategories {
            theme.focused_border_style
        } else {
            theme.border_style
        };
        let mut title = vec![Span::raw(" SOS ")];
        if state.sos_state == RequestState::Pending {
            title.push(Span::styled("locating… ", theme.dimmed_style));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::from(title));

        let mut lines: Vec<Line> = state
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let style = if i == state.selected_category && state.focus == Focus::SosCategories
                {
                    theme.selection_style
                } else {
                    theme.base_style
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), theme.dimmed_style),
                    Span::styled(category.as_str(), style),
                ])
            })
            .collect();

        if let Some(sos) = &state.sos {
            lines.push(Line::default());
            lines.push(Line::styled(sos.responder_text(), theme.value_style));
            lines.push(Line::from(vec![
                Span::styled(sos.link.label, theme.link_style),
                Span::styled(format!("  {}", sos.link.target), theme.dimmed_style),
            ]));
        }

        Paragraph::new(lines)
            .block(block)
            .style(theme.base_style)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

impl StatefulWidget for DashboardScreen<'_> {
    type State = DashboardState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        buf.set_style(area, self.theme.base_style);

        let [header_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .areas(area);

        HeaderBar::new(NAME, VERSION)
            .date(&state.date_text)
            .appearance(state.appearance)
            .style(HeaderBarStyle::from_theme(self.theme))
            .render(header_area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(content_area);

        let [train_input_area, train_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(left);
        TextInputView::new(&state.train_input, self.theme).render(train_input_area, buf);
        FieldList::new("Train Status", state.train_rows(), self.theme)
            .state(state.train_state)
            .render(train_area, buf);

        let [city_area, weather_area, sos_area, contact_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .areas(right);
        TextInputView::new(&state.city_input, self.theme).render(city_area, buf);
        FieldList::new("Weather", state.weather_rows(), self.theme)
            .state(state.weather_state)
            .render(weather_area, buf);
        self.render_sos_panel(state, sos_area, buf);
        TextInputView::new(&state.contact_input, self.theme).render(contact_area, buf);

        let commands = state.get_commands(self.registry);
        FooterBar::new(&commands)
            .focus_context(state.focus.to_focus_context())
            .style(FooterBarStyle::from_theme(self.theme))
            .render(footer_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DashboardState {
        DashboardState::new(
            vec!["police".into(), "hospital".into(), "fire".into()],
            None,
            "Thursday, March 7, 2024".into(),
            Appearance::Dark,
        )
    }

    fn press(state: &mut DashboardState, code: KeyCode) -> DashboardKeyResult {
        state.handle_key(
            KeyEvent::new(code, KeyModifiers::NONE),
            &CommandRegistry::new(),
        )
    }

    fn type_text(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_focus_cycles() {
        let mut state = state();
        assert_eq!(state.focus(), Focus::TrainInput);
        for expected in [
            Focus::CityInput,
            Focus::SosCategories,
            Focus::ContactInput,
            Focus::TrainInput,
        ] {
            press(&mut state, KeyCode::Tab);
            assert_eq!(state.focus(), expected);
        }
        state.handle_key(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            &CommandRegistry::new(),
        );
        assert_eq!(state.focus(), Focus::ContactInput);
    }

    #[test]
    fn test_submit_sends_typed_text() {
        let mut state = state();
        type_text(&mut state, "12951");
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            DashboardKeyResult::CheckTrain("12951".into())
        );
    }

    #[test]
    fn test_empty_input_is_still_sent() {
        let mut state = state();
        press(&mut state, KeyCode::Tab);
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            DashboardKeyResult::GetWeather(WeatherRequest::City(String::new()))
        );
    }

    #[test]
    fn test_category_navigation_and_hotkeys() {
        let mut state = state();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Tab);

        press(&mut state, KeyCode::Up);
        assert_eq!(state.selected_category(), Some("fire"));
        press(&mut state, KeyCode::Down);
        assert_eq!(state.selected_category(), Some("police"));

        assert_eq!(
            press(&mut state, KeyCode::Char('2')),
            DashboardKeyResult::SendSos(SosRequest::new("hospital"))
        );
        assert_eq!(press(&mut state, KeyCode::Char('9')), DashboardKeyResult::Consumed);
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            DashboardKeyResult::SendSos(SosRequest::new("hospital"))
        );
    }

    #[test]
    fn test_contact_prefill() {
        let mut state = DashboardState::new(
            vec![],
            Some("+1 555 0100".into()),
            String::new(),
            Appearance::Dark,
        );
        press(&mut state, KeyCode::BackTab);
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            DashboardKeyResult::SendEmergency(EmergencyMessageRequest::new("+1 555 0100"))
        );
    }

    #[test]
    fn test_open_map_needs_dispatch() {
        let mut state = state();
        let ctrl_o = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL);
        let registry = CommandRegistry::new();
        assert_eq!(state.handle_key(ctrl_o, &registry), DashboardKeyResult::Consumed);

        state.apply_sos(&SosDispatch {
            responder_name: "Unit 7".into(),
            link: "https://maps.example/?q=1,2".into(),
        });
        assert_eq!(
            state.handle_key(ctrl_o, &registry),
            DashboardKeyResult::OpenMap("https://maps.example/?q=1,2".into())
        );
        let sos = state.sos().unwrap();
        assert_eq!(sos.responder_text(), "Responder: Unit 7");
        assert_eq!(sos.link.label, "View on Map");
        assert!(sos.link.external);
    }

    #[test]
    fn test_toggle_twice_restores_appearance() {
        let mut state = state();
        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        let registry = CommandRegistry::new();

        assert_eq!(state.handle_key(ctrl_t, &registry), DashboardKeyResult::ToggleTheme);
        assert_eq!(state.appearance(), Appearance::Light);
        state.handle_key(ctrl_t, &registry);
        assert_eq!(state.appearance(), Appearance::Dark);
    }

    #[test]
    fn test_train_extras_listed_when_present() {
        let status: TrainStatus = serde_json::from_value(serde_json::json!({
            "train_name": "Deccan Queen",
            "current_station": "Lonavala",
            "next_station": "Karjat",
            "scheduled_arrival": "10:25",
            "delay_minutes": 0,
            "predicted_delay": 2,
            "platform": 1,
            "actual_arrival": "10:27",
            "current_lat": 18.75,
            "current_lon": 73.4,
            "weather": {
                "city": "Lonavala",
                "temperature": "21 °C",
                "condition": "Mist",
                "humidity": "90%",
                "wind_speed": "1 m/s"
            }
        }))
        .unwrap();

        let mut state = state();
        state.apply_train(&status);

        assert_eq!(state.train_slot(TrainField::DelayReason), Some("-"));
        let labels: Vec<&str> = state.train_extras().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["Actual Arrival", "Current Position", "Station Weather"]);
        assert_eq!(state.train_extras()[2].1, "Mist, 21 °C");
    }

    #[test]
    fn test_screen_renders() {
        let theme = Theme::default();
        let registry = CommandRegistry::new();
        let mut state = state();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        DashboardScreen::new(&theme, &registry).render(area, &mut buf, &mut state);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Train Status"));
        assert!(text.contains("police"));
        assert!(text.contains("Thursday, March 7, 2024"));
    }
}
