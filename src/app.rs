use crate::backend::{self, FallbackPolicy, HttpBackend, PredictionBackend};
use crate::components::toast_stack;
use crate::config::{Config, ThemeChoice};
use crate::error::StartupError;
use crate::message::Message;
use crate::model::loader::{first_candidate, load_image};
use crate::model::{
    Completion, DropZone, Intake, NotificationLevel, Notifications, ResultSource, Session,
};
use crate::views::{analysis_panel, header, upload_panel, BackendStatus};
use iced::widget::{column, container, scrollable};
use iced::{application, event, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const APP_TITLE: &str = "NeuroScan";

pub fn run() -> Result<(), StartupError> {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let config = Config::load_or_default()?;
    let endpoint = config.backend.endpoint_url()?;
    let backend = HttpBackend::new(&config.backend, endpoint)?;
    log::info!("Prediction endpoint: {}", backend.endpoint());
    if config.demo.enabled {
        log::warn!("Demo mode enabled: unreachable-service failures will show simulated results");
    }

    let app = App::new(&config, Arc::new(backend));

    application(APP_TITLE, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .run_with(move || {
            let startup = app.check_health();
            (app, startup)
        })?;

    Ok(())
}

pub struct App {
    session: Session,
    backend: Arc<dyn PredictionBackend>,
    endpoint: String,
    fallback: FallbackPolicy,
    notifications: Notifications,
    notification_ttl: Duration,
    drop_zone: DropZone,
    backend_status: BackendStatus,
    theme: ThemeChoice,
}

impl App {
    pub fn new(config: &Config, backend: Arc<dyn PredictionBackend>) -> Self {
        Self {
            session: Session::default(),
            backend,
            endpoint: config.backend.endpoint.clone(),
            fallback: FallbackPolicy::from(&config.demo),
            notifications: Notifications::default(),
            notification_ttl: Duration::from_secs(config.ui.notification_secs),
            drop_zone: DropZone::default(),
            backend_status: BackendStatus::default(),
            theme: config.ui.theme,
        }
    }

    fn check_health(&self) -> Task<Message> {
        let backend = Arc::clone(&self.backend);
        Task::perform(async move { backend.health().await }, Message::HealthChecked)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFile => Task::perform(
                async {
                    AsyncFileDialog::new()
                        .set_title("Select MRI Image")
                        .add_filter("MRI image", &["jpg", "jpeg", "png"])
                        .pick_file()
                        .await
                        .map(|handle| vec![handle.path().to_path_buf()])
                        .unwrap_or_default()
                },
                Message::FilesSelected,
            ),
            Message::FilesSelected(paths) => self.begin_intake(paths),
            Message::DragEntered => {
                self.drop_zone.hover();
                Task::none()
            }
            Message::DragLeft => {
                self.drop_zone.leave();
                Task::none()
            }
            Message::FileDropped(path) => match self.drop_zone.drop_file(path) {
                Some(path) => self.begin_intake(vec![path]),
                None => Task::none(),
            },
            Message::ImageStaged(token, outcome) => {
                match self.session.finish_intake(token, outcome) {
                    Intake::Staged(_) => {
                        self.drop_zone.settle();
                        Task::none()
                    }
                    Intake::Rejected(err) => {
                        self.drop_zone.settle();
                        self.notify(NotificationLevel::Error, err.to_string())
                    }
                    Intake::Stale => {
                        log::debug!(
                            "Dropped intake {token:?}, current is {:?}",
                            self.session.intake()
                        );
                        Task::none()
                    }
                }
            }
            Message::Clear => {
                self.session.clear();
                self.drop_zone.settle();
                Task::none()
            }
            Message::Analyze => match self.session.begin_analysis() {
                Err(err) => self.notify(NotificationLevel::Error, err.to_string()),
                Ok(None) => Task::none(),
                Ok(Some(ticket)) => {
                    let generation = ticket.generation;
                    Task::perform(
                        backend::analyze(Arc::clone(&self.backend), ticket.upload, self.fallback),
                        move |outcome| Message::AnalysisFinished(generation, outcome),
                    )
                }
            },
            Message::AnalysisFinished(generation, outcome) => {
                match self.session.complete(generation, outcome) {
                    Completion::Published(ResultSource::Backend) => {
                        self.notify(NotificationLevel::Success, "Analysis complete!")
                    }
                    Completion::Published(ResultSource::Demo) => self.notify(
                        NotificationLevel::Demo,
                        "Analysis complete! (Demo mode: service unreachable, result is simulated)",
                    ),
                    Completion::Failed(err) => self.notify(NotificationLevel::Error, err.to_string()),
                    Completion::Stale => {
                        log::debug!(
                            "Dropped outcome for {generation:?}, current is {:?}",
                            self.session.generation()
                        );
                        Task::none()
                    }
                }
            }
            Message::HealthChecked(online) => {
                self.backend_status = if online {
                    BackendStatus::Online
                } else {
                    BackendStatus::Offline
                };
                Task::none()
            }
            Message::DismissNotification(id) => {
                self.notifications.dismiss(id);
                Task::none()
            }
        }
    }

    fn begin_intake(&mut self, paths: Vec<PathBuf>) -> Task<Message> {
        match first_candidate(paths) {
            Some(path) => {
                let token = self.session.begin_intake();
                Task::perform(load_image(path), move |outcome| {
                    Message::ImageStaged(token, outcome)
                })
            }
            None => {
                self.drop_zone.settle();
                Task::none()
            }
        }
    }

    fn notify(&mut self, level: NotificationLevel, text: impl Into<String>) -> Task<Message> {
        let id = self.notifications.push(level, text);
        let ttl = self.notification_ttl;
        Task::perform(
            async move { tokio::time::sleep(ttl).await },
            move |_| Message::DismissNotification(id),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = header(
            APP_TITLE,
            &self.endpoint,
            self.backend_status,
            self.fallback.enabled,
        );

        let body = match self.session.staged() {
            Some(image) => analysis_panel(
                image,
                self.session.request_state(),
                self.session.result(),
            ),
            None => upload_panel(self.drop_zone.is_hovering()),
        };

        let mut content = column![header, body]
            .spacing(24)
            .padding(24)
            .max_width(960.0)
            .align_x(Alignment::Center);

        if !self.notifications.is_empty() {
            content = content.push(toast_stack(&self.notifications));
        }

        scrollable(
            container(content)
                .width(Length::Fill)
                .align_x(Alignment::Center),
        )
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(file_drop_event)
    }

    pub fn theme(&self) -> Theme {
        match self.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

fn file_drop_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::DragEntered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::DragLeft),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}
