use crate::components::closeness_chart;
use crate::message::Message;
use crate::model::DisplayModel;
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

pub fn result_panel(model: &DisplayModel) -> Element<'static, Message> {
    let mut summary = column![
        text("PREDICTED CLASS").size(13),
        text(model.label.clone()).size(26),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    if model.is_demo {
        summary = summary
            .push(text("Demo mode: simulated result, not a clinical finding").size(12));
    }

    let mut content = column![container(summary)
        .padding(16)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .style(container::rounded_box)]
    .spacing(16);

    if let Some(bars) = &model.bars {
        content = content.push(
            container(
                column![text("CLASS CLOSENESS").size(13), closeness_chart(bars)].spacing(12),
            )
            .padding(16)
            .width(Length::Fill)
            .style(container::rounded_box),
        );
    }

    content.into()
}
