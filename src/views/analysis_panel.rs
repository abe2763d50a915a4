use super::{image_panel, result_panel};
use crate::message::Message;
use crate::model::{DisplayModel, PredictionResult, RequestState, StagedImage};
use crate::utils::format_file_size;
use iced::widget::{button, column, row, text, Space};
use iced::{Alignment, Element, Length};

pub fn analysis_panel<'a>(
    image: &'a StagedImage,
    state: RequestState,
    result: Option<&'a PredictionResult>,
) -> Element<'a, Message> {
    let mut details = format!("{} · {}", image.mime, format_file_size(image.size));
    if let Some((width, height)) = image.dimensions {
        details.push_str(&format!(" · {width}×{height} px"));
    }

    let header = row![
        column![
            text("MRI Analysis").size(20),
            text(&image.file_name).size(14),
            text(details).size(12),
            text(image.path.display().to_string()).size(11),
        ]
        .spacing(4),
        Space::with_width(Length::Fill),
        button(text("Clear")).on_press(Message::Clear),
    ]
    .align_y(Alignment::Center);

    let action: Element<'a, Message> = match state {
        RequestState::Idle => button(text("Analyze MRI"))
            .padding([8, 18])
            .on_press(Message::Analyze)
            .into(),
        RequestState::Failed => button(text("Retry Analysis"))
            .padding([8, 18])
            .on_press(Message::Analyze)
            .into(),
        RequestState::InFlight => text("Analyzing MRI...").size(16).into(),
        RequestState::Succeeded => Space::with_height(Length::Shrink).into(),
    };

    let mut content = column![header, image_panel(image), action]
        .spacing(20)
        .align_x(Alignment::Center);

    if let Some(result) = result {
        content = content.push(result_panel(&DisplayModel::from_result(result)));
    }

    content.into()
}
