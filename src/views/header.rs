use crate::message::Message;
use iced::border::{Border, Radius};
use iced::widget::{column, container, row, text, Space};
use iced::{Alignment, Background, Color, Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

pub fn header<'a>(
    title: &'a str,
    endpoint: &'a str,
    status: BackendStatus,
    demo_enabled: bool,
) -> Element<'a, Message> {
    let status_label = match status {
        BackendStatus::Unknown => "checking…",
        BackendStatus::Online => "online",
        BackendStatus::Offline => "offline",
    };

    let mut badges = row![text(format!("Service {status_label}")).size(13)]
        .spacing(12)
        .align_y(Alignment::Center);

    if demo_enabled {
        badges = badges.push(
            container(text("DEMO MODE").size(12))
                .padding([3, 10])
                .style(demo_badge_style),
        );
    }

    row![
        column![
            text(title).size(28),
            text("AI-assisted dementia classification from MRI scans").size(14),
            text(endpoint).size(11),
        ]
        .spacing(4),
        Space::with_width(Length::Fill),
        badges,
    ]
    .align_y(Alignment::Center)
    .into()
}

fn demo_badge_style(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(Color::from_rgb8(0xd9, 0x77, 0x06))),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Radius::new(999.0),
        },
        ..Default::default()
    }
}
