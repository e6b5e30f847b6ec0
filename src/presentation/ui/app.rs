//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::dto::{EmergencyMessageRequest, SosRequest, WeatherRequest};
use crate::application::services::{Completion, NotificationManager, RequestSlot};
use crate::application::use_cases::{
    EmergencyMessageUseCase, SosUseCase, TrainStatusUseCase, WeatherUseCase,
};
use crate::domain::entities::{SosDispatch, TrainStatus, WeatherReport};
use crate::domain::errors::DashboardError;
use crate::domain::keybinding::Action as Command;
use crate::domain::ports::{DashboardPort, LocationPort};
use crate::domain::{Alert, RequestState};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::{Appearance, Theme};
use crate::presentation::ui::{
    AlertPopup, DashboardKeyResult, DashboardScreen, DashboardState, NotificationPopup, Panel,
};

const UI_TICK_RATE: Duration = Duration::from_millis(250);

/// Confirmation shown once the backend accepts an emergency message.
pub const EMERGENCY_SENT_MESSAGE: &str = "Emergency message sent!";

#[derive(Debug)]
enum Action {
    TrainLoaded(Completion<TrainStatus>),
    WeatherLoaded(Completion<WeatherReport>),
    SosDispatched(Completion<SosDispatch>),
    EmergencySent(Completion<()>),
}

/// Startup settings for the dashboard.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub accent_color: String,
    pub appearance: Appearance,
    pub request_timeout: Option<Duration>,
    pub notification_duration: Duration,
    pub sos_categories: Vec<String>,
    pub emergency_contact: Option<String>,
    pub date_text: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            accent_color: "Cyan".to_string(),
            appearance: Appearance::Dark,
            request_timeout: None,
            notification_duration: Duration::from_secs(5),
            sos_categories: vec!["police".into(), "hospital".into(), "fire".into()],
            emergency_contact: None,
            date_text: String::new(),
        }
    }
}

pub struct App {
    running: bool,
    dashboard: DashboardState,
    registry: CommandRegistry,
    theme: Theme,
    accent_color: String,
    notifications: NotificationManager,
    train_use_case: TrainStatusUseCase,
    weather_use_case: WeatherUseCase,
    sos_use_case: SosUseCase,
    emergency_use_case: EmergencyMessageUseCase,
    train_slot: RequestSlot,
    weather_slot: RequestSlot,
    sos_slot: RequestSlot,
    emergency_slot: RequestSlot,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    #[must_use]
    pub fn new(
        backend: Arc<dyn DashboardPort>,
        location: Arc<dyn LocationPort>,
        options: AppOptions,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let timeout = options.request_timeout;

        Self {
            running: true,
            dashboard: DashboardState::new(
                options.sos_categories,
                options.emergency_contact,
                options.date_text,
                options.appearance,
            ),
            registry: CommandRegistry::new(),
            theme: Theme::new(&options.accent_color, options.appearance),
            accent_color: options.accent_color,
            notifications: NotificationManager::new(options.notification_duration),
            train_use_case: TrainStatusUseCase::new(backend.clone()),
            weather_use_case: WeatherUseCase::new(backend.clone(), location.clone()),
            sos_use_case: SosUseCase::new(backend.clone(), location),
            emergency_use_case: EmergencyMessageUseCase::new(backend),
            train_slot: RequestSlot::new("train_status", timeout),
            weather_slot: RequestSlot::new("weather", timeout),
            sos_slot: RequestSlot::new("sos", timeout),
            emergency_slot: RequestSlot::new("emergency_message", timeout),
            action_tx,
            action_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(appearance = self.theme.appearance.label(), "Dashboard started");
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick = interval(UI_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if let Some(key) = EventHandler::key_press(&event) {
                        self.handle_key(key);
                    }
                }

                _ = tick.tick() => {
                    self.notifications.tick();
                }
            }
            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_stateful_widget(
            DashboardScreen::new(&self.theme, &self.registry),
            area,
            &mut self.dashboard,
        );

        if let Some(notification) = self.notifications.current_notification() {
            frame.render_widget(NotificationPopup::new(notification, &self.theme), area);
        }
        if let Some(alert) = self.notifications.current_alert() {
            frame.render_widget(AlertPopup::new(alert, &self.theme), area);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if EventHandler::is_quit_event(&key) {
            self.running = false;
            return;
        }

        if self.notifications.current_alert().is_some() {
            if self.registry.find_modal_action(key) == Some(Command::Dismiss) {
                self.notifications.dismiss_alert();
            }
            return;
        }

        match self.dashboard.handle_key(key, &self.registry) {
            DashboardKeyResult::Consumed => {}
            DashboardKeyResult::Quit => self.running = false,
            DashboardKeyResult::ToggleTheme => {
                self.theme = Theme::new(&self.accent_color, self.dashboard.appearance());
                debug!(appearance = self.theme.appearance.label(), "Theme toggled");
            }
            DashboardKeyResult::CheckTrain(train_no) => self.check_train(train_no),
            DashboardKeyResult::GetWeather(request) => self.get_weather(request),
            DashboardKeyResult::SendSos(request) => self.send_sos(request),
            DashboardKeyResult::SendEmergency(request) => self.send_emergency(request),
            DashboardKeyResult::OpenMap(target) => self.open_link(&target),
        }
    }

    fn check_train(&mut self, train_no: String) {
        self.dashboard
            .set_request_state(Panel::Train, RequestState::Pending);
        let use_case = self.train_use_case.clone();
        self.train_slot.start(
            async move { use_case.execute(train_no).await },
            self.action_tx.clone(),
            Action::TrainLoaded,
        );
    }

    fn get_weather(&mut self, request: WeatherRequest) {
        self.dashboard
            .set_request_state(Panel::Weather, RequestState::Pending);
        let use_case = self.weather_use_case.clone();
        self.weather_slot.start(
            async move { use_case.execute(request).await },
            self.action_tx.clone(),
            Action::WeatherLoaded,
        );
    }

    fn send_sos(&mut self, request: SosRequest) {
        self.dashboard
            .set_request_state(Panel::Sos, RequestState::Pending);
        let use_case = self.sos_use_case.clone();
        self.sos_slot.start(
            async move { use_case.execute(request).await },
            self.action_tx.clone(),
            Action::SosDispatched,
        );
    }

    fn send_emergency(&mut self, request: EmergencyMessageRequest) {
        self.dashboard
            .set_request_state(Panel::Emergency, RequestState::Pending);
        let use_case = self.emergency_use_case.clone();
        self.emergency_slot.start(
            async move { use_case.execute(request).await },
            self.action_tx.clone(),
            Action::EmergencySent,
        );
    }

    fn open_link(&mut self, target: &str) {
        info!(target, "Opening map link");
        if let Err(e) = opener::open_browser(target) {
            warn!(error = %e, target, "Failed to open map link");
            self.notifications
                .error("Map", format!("Could not open browser: {e}"));
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::TrainLoaded(completion) => {
                if !self.train_slot.accept(&completion) {
                    return;
                }
                match completion.result {
                    Ok(status) => self.dashboard.apply_train(&status),
                    Err(e) => self.fail(Panel::Train, "Train Status", &e),
                }
            }
            Action::WeatherLoaded(completion) => {
                if !self.weather_slot.accept(&completion) {
                    return;
                }
                match completion.result {
                    Ok(report) => self.dashboard.apply_weather(&report),
                    Err(e) => self.fail(Panel::Weather, "Weather", &e),
                }
            }
            Action::SosDispatched(completion) => {
                if !self.sos_slot.accept(&completion) {
                    return;
                }
                match completion.result {
                    Ok(dispatch) => self.dashboard.apply_sos(&dispatch),
                    Err(e) => self.fail(Panel::Sos, "SOS", &e),
                }
            }
            Action::EmergencySent(completion) => {
                if !self.emergency_slot.accept(&completion) {
                    return;
                }
                match completion.result {
                    Ok(()) => {
                        self.dashboard
                            .set_request_state(Panel::Emergency, RequestState::Loaded);
                        self.notifications.alert(Alert::info(EMERGENCY_SENT_MESSAGE));
                    }
                    Err(e) => self.fail(Panel::Emergency, "Emergency Message", &e),
                }
            }
        }
    }

    fn fail(&mut self, panel: Panel, title: &str, error: &DashboardError) {
        self.dashboard.set_request_state(panel, RequestState::Failed);
        self.notifications.report(title, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Coordinates, EMERGENCY_MESSAGE_BODY, WeatherQuery};
    use crate::domain::errors::LocationError;
    use crate::domain::ports::mocks::{BackendCall, MockDashboardPort, MockLocationPort};
    use crate::presentation::ui::{TrainField, WeatherField};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn train_status(reason: serde_json::Value) -> TrainStatus {
        serde_json::from_value(serde_json::json!({
            "train_name": "Rajdhani Express",
            "current_station": "Kota Jn",
            "next_station": "Ratlam Jn",
            "scheduled_arrival": "2024-03-07T14:05:00",
            "delay_minutes": 5,
            "predicted_delay": 4.5,
            "delay_reason": reason,
            "platform": "3"
        }))
        .unwrap()
    }

    fn weather_report() -> WeatherReport {
        serde_json::from_value(serde_json::json!({
            "city": "Delhi",
            "temperature": 31.2,
            "condition": "Haze",
            "humidity": 40,
            "wind_speed": "2.6 m/s"
        }))
        .unwrap()
    }

    fn app(backend: &MockDashboardPort, location: MockLocationPort) -> App {
        App::new(
            Arc::new(backend.clone()),
            Arc::new(location),
            AppOptions::default(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    async fn settle(app: &mut App) {
        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action);
    }

    #[tokio::test]
    async fn test_train_fields_land_verbatim() {
        let backend = MockDashboardPort::new().with_train(train_status(serde_json::json!(
            "Signal failure"
        )));
        let mut app = app(&backend, MockLocationPort::at(0.0, 0.0));

        type_text(&mut app, "12951");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        let expected = [
            (TrainField::Name, "Rajdhani Express"),
            (TrainField::CurrentStation, "Kota Jn"),
            (TrainField::NextStation, "Ratlam Jn"),
            (TrainField::ScheduledArrival, "2024-03-07T14:05:00"),
            (TrainField::DelayMinutes, "5"),
            (TrainField::PredictedDelay, "4.5"),
            (TrainField::DelayReason, "Signal failure"),
            (TrainField::Platform, "3"),
        ];
        for (field, value) in expected {
            assert_eq!(app.dashboard.train_slot(field), Some(value), "{field:?}");
        }
        assert_eq!(
            backend.recorded(),
            vec![BackendCall::TrainStatus("12951".into())]
        );
        assert_eq!(
            app.dashboard.request_state(Panel::Train),
            RequestState::Loaded
        );
    }

    #[tokio::test]
    async fn test_missing_delay_reason_uses_placeholder() {
        let backend = MockDashboardPort::new().with_train(train_status(serde_json::Value::Null));
        let mut app = app(&backend, MockLocationPort::at(0.0, 0.0));

        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert_eq!(app.dashboard.train_slot(TrainField::DelayReason), Some("-"));
    }

    #[tokio::test]
    async fn test_failed_request_leaves_fields_and_notifies() {
        let backend = MockDashboardPort::new().failing();
        let mut app = app(&backend, MockLocationPort::at(0.0, 0.0));

        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        for field in TrainField::ALL {
            assert_eq!(app.dashboard.train_slot(field), None);
        }
        assert_eq!(
            app.dashboard.request_state(Panel::Train),
            RequestState::Failed
        );
        let toast = app.notifications.current_notification().unwrap();
        assert_eq!(toast.title, "Train Status");
        assert!(app.notifications.current_alert().is_none());
    }

    #[tokio::test]
    async fn test_weather_fields_land_verbatim() {
        let backend = MockDashboardPort::new().with_weather(weather_report());
        let mut app = app(&backend, MockLocationPort::at(0.0, 0.0));

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "New Delhi");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        let expected = [
            (WeatherField::City, "Delhi"),
            (WeatherField::Temperature, "31.2"),
            (WeatherField::Condition, "Haze"),
            (WeatherField::Humidity, "40"),
            (WeatherField::WindSpeed, "2.6 m/s"),
        ];
        for (field, value) in expected {
            assert_eq!(app.dashboard.weather_slot(field), Some(value), "{field:?}");
        }
        assert_eq!(
            backend.recorded(),
            vec![BackendCall::Weather(WeatherQuery::City("New Delhi".into()))]
        );
    }

    #[tokio::test]
    async fn test_weather_here_uses_location() {
        let backend = MockDashboardPort::new().with_weather(weather_report());
        let mut app = app(&backend, MockLocationPort::at(28.6139, 77.209));

        app.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        settle(&mut app).await;

        let position = Coordinates::new(28.6139, 77.209).unwrap();
        assert_eq!(
            backend.recorded(),
            vec![BackendCall::Weather(WeatherQuery::Position(position))]
        );
    }

    #[tokio::test]
    async fn test_sos_without_location_sends_nothing() {
        let backend = MockDashboardPort::new();
        let mut app = app(&backend, MockLocationPort::failing(LocationError::Unsupported));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert!(backend.recorded().is_empty());
        let alert = app.notifications.current_alert().unwrap();
        assert_eq!(alert.message, "Geolocation not supported.");
        assert!(app.dashboard.sos().is_none());

        press(&mut app, KeyCode::Enter);
        assert!(app.notifications.current_alert().is_none());
    }

    #[tokio::test]
    async fn test_denied_location_blocks_weather_here() {
        let backend = MockDashboardPort::new();
        let mut app = app(&backend, MockLocationPort::failing(LocationError::Denied));

        app.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        settle(&mut app).await;

        assert!(backend.recorded().is_empty());
        let alert = app.notifications.current_alert().unwrap();
        assert_eq!(alert.message, "Could not get your location.");
        assert!(app.notifications.current_notification().is_none());
    }

    #[tokio::test]
    async fn test_sos_dispatch_renders_map_link() {
        let backend = MockDashboardPort::new().with_sos(SosDispatch {
            responder_name: "City Police Unit 12".into(),
            link: "https://maps.example.com/?q=12.971598765432,77.594562123456".into(),
        });
        let mut app = app(&backend, MockLocationPort::at(12.971_598_765_432, 77.594_562_123_456));

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('2'));
        settle(&mut app).await;

        let position = Coordinates::new(12.971_598_765_432, 77.594_562_123_456).unwrap();
        assert_eq!(
            backend.recorded(),
            vec![BackendCall::Sos {
                position,
                category: "hospital".into()
            }]
        );

        let sos = app.dashboard.sos().unwrap();
        assert_eq!(sos.responder_text(), "Responder: City Police Unit 12");
        assert_eq!(sos.link.label, "View on Map");
        assert_eq!(
            sos.link.target,
            "https://maps.example.com/?q=12.971598765432,77.594562123456"
        );
        assert!(sos.link.external);
    }

    #[tokio::test]
    async fn test_emergency_message_confirms_with_alert() {
        let backend = MockDashboardPort::new();
        let mut app = app(&backend, MockLocationPort::at(0.0, 0.0));

        press(&mut app, KeyCode::BackTab);
        type_text(&mut app, "+1 555 0100");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert_eq!(
            backend.recorded(),
            vec![BackendCall::EmergencyMessage {
                to: "+1 555 0100".into(),
                message: EMERGENCY_MESSAGE_BODY.into()
            }]
        );
        assert_eq!(
            app.notifications.current_alert().map(|a| a.message.as_str()),
            Some(EMERGENCY_SENT_MESSAGE)
        );

        press(&mut app, KeyCode::Esc);
        assert!(app.notifications.current_alert().is_none());
        assert!(app.running);
    }

    #[tokio::test]
    async fn test_superseded_train_request_is_dropped() {
        let backend = MockDashboardPort::new()
            .with_train(train_status(serde_json::Value::Null))
            .with_delay(Duration::from_millis(50));
        let mut app = app(&backend, MockLocationPort::at(0.0, 0.0));

        press(&mut app, KeyCode::Enter);
        tokio::task::yield_now().await;
        type_text(&mut app, "2");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert_eq!(app.train_slot.generation(), 2);
        assert_eq!(
            app.dashboard.train_slot(TrainField::Name),
            Some("Rajdhani Express")
        );
        assert!(app.action_rx.try_recv().is_err());
    }

    #[test]
    fn test_theme_toggle_twice_is_identity() {
        let backend = MockDashboardPort::new();
        let mut app = app(&backend, MockLocationPort::at(0.0, 0.0));
        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);

        app.handle_key(ctrl_t);
        assert_eq!(app.theme.appearance, Appearance::Light);
        app.handle_key(ctrl_t);
        assert_eq!(app.theme.appearance, Appearance::Dark);
    }

    #[test]
    fn test_quit_keys() {
        let backend = MockDashboardPort::new();
        let mut app = app(&backend, MockLocationPort::at(0.0, 0.0));
        press(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }
}
