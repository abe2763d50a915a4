use crate::message::Message;
use iced::border::{Border, Radius};
use iced::widget::{button, column, container, text};
use iced::{Alignment, Background, Element, Length, Theme};

pub fn upload_panel(hovering: bool) -> Element<'static, Message> {
    let content = column![
        text("Upload MRI Scan").size(22),
        text("Drag and drop your MRI image here, or click to browse").size(15),
        button(text("Select MRI Image"))
            .padding([8, 18])
            .on_press(Message::PickFile),
        text("Supports JPG, JPEG, PNG • Max 10MB").size(12),
    ]
    .spacing(14)
    .align_x(Alignment::Center);

    container(content)
        .padding(40)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .style(move |theme| drop_zone_style(theme, hovering))
        .into()
}

fn drop_zone_style(theme: &Theme, hovering: bool) -> container::Style {
    let palette = theme.extended_palette();

    let (background, border_color) = if hovering {
        (palette.primary.weak.color, palette.primary.strong.color)
    } else {
        (palette.background.base.color, palette.background.strong.color)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: 2.0,
            radius: Radius::new(12.0),
        },
        ..Default::default()
    }
}
