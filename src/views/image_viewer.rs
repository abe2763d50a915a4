use crate::message::Message;
use crate::model::StagedImage;
use iced::widget::{container, text, Image};
use iced::{Alignment, Element, Length};

const PREVIEW_HEIGHT: f32 = 280.0;

pub fn image_panel(image: &StagedImage) -> Element<'static, Message> {
    let content: Element<'static, Message> = if let Some(handle) = &image.preview {
        Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .into()
    } else {
        text("No preview available for this file").into()
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(PREVIEW_HEIGHT))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(container::rounded_box)
        .into()
}
