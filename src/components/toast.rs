use crate::message::Message;
use crate::model::{Notification, NotificationLevel, Notifications};
use iced::border::{Border, Radius};
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Background, Color, Element, Length, Shadow, Theme, Vector};

const TOAST_WIDTH: f32 = 380.0;

pub fn toast_stack(notifications: &Notifications) -> Element<'_, Message> {
    notifications
        .iter()
        .fold(column![].spacing(8), |stack, notification| {
            stack.push(toast(notification))
        })
        .into()
}

fn toast(notification: &Notification) -> Element<'_, Message> {
    let level = notification.level;
    let icon = match level {
        NotificationLevel::Success => "✓",
        NotificationLevel::Error => "✕",
        NotificationLevel::Demo => "!",
    };

    let content = row![
        text(icon).size(16),
        text(&notification.text)
            .size(14)
            .wrapping(Wrapping::Word)
            .width(Length::Fill),
        button(text("Dismiss").size(12))
            .padding([2, 8])
            .style(button::text)
            .on_press(Message::DismissNotification(notification.id)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(content)
        .padding([10, 14])
        .width(Length::Fixed(TOAST_WIDTH))
        .style(move |theme| toast_style(theme, level))
        .into()
}

fn toast_style(theme: &Theme, level: NotificationLevel) -> container::Style {
    let palette = theme.extended_palette();

    let background = match level {
        NotificationLevel::Success => palette.success.base.color,
        NotificationLevel::Error => palette.danger.base.color,
        NotificationLevel::Demo => Color::from_rgb8(0xd9, 0x77, 0x06),
    };

    container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(background)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Radius::new(8.0),
        },
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.2),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
    }
}
