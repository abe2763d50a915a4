use crate::message::Message;
use crate::model::{BarModel, Emphasis};
use iced::alignment::Horizontal;
use iced::border::{Border, Radius};
use iced::widget::text::Wrapping;
use iced::widget::{column, container, row, text, tooltip, Space};
use iced::{Alignment, Background, Color, Element, Length, Theme};

const PLOT_HEIGHT: f32 = 240.0;
const MIN_BAR_HEIGHT: f32 = 2.0;

/// Vertical bar chart with one column per class, in response order.
pub fn closeness_chart(bars: &[BarModel]) -> Element<'static, Message> {
    let plot = bars
        .iter()
        .fold(row![].spacing(18).align_y(Alignment::End), |plot, bar| {
            plot.push(bar_column(bar))
        });

    column![
        text("Closeness (%)").size(13),
        plot.width(Length::Fill),
        text("Class Categories").size(13),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .into()
}

fn bar_column(bar: &BarModel) -> Element<'static, Message> {
    let emphasis = bar.emphasis;
    let height = ((bar.score / 100.0) as f32 * PLOT_HEIGHT).max(MIN_BAR_HEIGHT);

    let fill = container(Space::new(Length::Fill, Length::Fixed(height)))
        .width(Length::Fill)
        .style(move |theme| bar_style(theme, emphasis));

    let hover = container(text(bar.tooltip.clone()).size(13))
        .padding([4, 8])
        .style(container::rounded_box);

    column![
        text(bar.value_label.clone()).size(14),
        tooltip(fill, hover, tooltip::Position::Top),
        text(bar.class.clone())
            .size(13)
            .wrapping(Wrapping::Word)
            .align_x(Horizontal::Center),
    ]
    .spacing(6)
    .width(Length::FillPortion(1))
    .align_x(Alignment::Center)
    .into()
}

fn bar_style(theme: &Theme, emphasis: Emphasis) -> container::Style {
    let palette = theme.extended_palette();

    let color = match emphasis {
        Emphasis::Predicted => palette.primary.strong.color,
        Emphasis::Other => Color::from_rgb8(0xf9, 0x73, 0x16),
    };

    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Radius {
                top_left: 10.0,
                top_right: 10.0,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
        },
        ..Default::default()
    }
}
