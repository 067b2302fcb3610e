// SPDX-License-Identifier: MPL-2.0
//! The single page: hero, tabs, fact ticker, adoption chart and audio card.
//!
//! Tab selection and the breed carousel are local view state; every other
//! control is forwarded to the application as an [`Event`].

use crate::catalog::{self, Breed};
use crate::series::AdoptionSeries;
use crate::session::ThemeFlag;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AdoptionChart;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, slider, text, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Tabs of the information card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    About,
    Characteristics,
    Breeds,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::About, Tab::Characteristics, Tab::Breeds];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::About => "About Cats",
            Tab::Characteristics => "Characteristics",
            Tab::Breeds => "Popular Breeds",
        }
    }
}

/// Local view state that survives between frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    tab: Tab,
    breed: usize,
}

impl State {
    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Currently shown breed of the carousel.
    #[must_use]
    pub fn breed(&self) -> &'static Breed {
        &catalog::BREEDS[self.breed % catalog::BREEDS.len()]
    }

    #[must_use]
    pub fn breed_index(&self) -> usize {
        self.breed
    }

    fn next_breed(&mut self) {
        self.breed = (self.breed + 1) % catalog::BREEDS.len();
    }

    fn previous_breed(&mut self) {
        let len = catalog::BREEDS.len();
        self.breed = (self.breed + len - 1) % len;
    }
}

/// Messages emitted by the page.
#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    PreviousBreed,
    NextBreed,
    Like,
    TogglePlayback,
    VolumeChanged(f32),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Like,
    TogglePlayback,
    VolumeChanged(f32),
    ToggleTheme,
}

/// Applies local changes and returns what the application must handle.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SelectTab(tab) => {
            state.tab = tab;
            Event::None
        }
        Message::PreviousBreed => {
            state.previous_breed();
            Event::None
        }
        Message::NextBreed => {
            state.next_breed();
            Event::None
        }
        Message::Like => Event::Like,
        Message::TogglePlayback => Event::TogglePlayback,
        Message::VolumeChanged(value) => Event::VolumeChanged(value),
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub scheme: &'a ColorScheme,
    pub theme: ThemeFlag,
    pub likes: u64,
    pub fact_index: usize,
    pub fact_count: usize,
    pub is_playing: bool,
    pub volume: f32,
    pub like_scale: f32,
    pub series: &'a AdoptionSeries,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header(&ctx))
        .push(hero(&ctx))
        .push(info_tabs(&ctx))
        .push(fact_ticker(&ctx))
        .push(adoption_chart(&ctx))
        .push(audio_card(&ctx));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle_label = if ctx.theme.is_dark() {
        "\u{2600} Light mode"
    } else {
        "\u{263e} Dark mode"
    };

    Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new("Feline Fascination")
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(
            button(text(toggle_label).size(typography::BODY))
                .on_press(Message::ToggleTheme)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::tab(ctx.scheme, false)),
        )
        .into()
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let scale = ctx.like_scale;
    let like_button = button(
        text(format!("\u{2665} Love cats ({})", ctx.likes)).size(typography::BODY_LG * scale),
    )
    .on_press(Message::Like)
    .padding([spacing::SM * scale, spacing::LG * scale])
    .style(styles::button::primary(ctx.scheme));

    let body = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new("The Wonderful World of Cats").size(typography::DISPLAY))
        .push(
            Text::new("Discover the mysteries and marvels of our feline friends")
                .size(typography::BODY_LG)
                .style(secondary_text(ctx.scheme)),
        )
        .push(like_button);

    card(ctx.scheme, body.width(Length::Fill).into())
}

fn info_tabs<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.state.tab();
    let tabs = Tab::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, &tab| {
        row.push(
            button(text(tab.label()).size(typography::BODY))
                .on_press(Message::SelectTab(tab))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::tab(ctx.scheme, tab == current)),
        )
    });

    let body: Element<'a, Message> = match current {
        Tab::About => Text::new(catalog::ABOUT).size(typography::BODY).into(),
        Tab::Characteristics => catalog::FEATURES
            .iter()
            .fold(Column::new().spacing(spacing::XS), |col, feature| {
                col.push(Text::new(format!("\u{2022} {feature}")).size(typography::BODY))
            })
            .into(),
        Tab::Breeds => breed_carousel(ctx),
    };

    card(
        ctx.scheme,
        Column::new()
            .spacing(spacing::MD)
            .push(tabs)
            .push(body)
            .into(),
    )
}

fn breed_carousel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let breed = ctx.state.breed();

    let badges = breed
        .traits()
        .fold(Row::new().spacing(spacing::XS), |row, trait_name| {
            row.push(
                Container::new(Text::new(trait_name).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::badge(ctx.scheme)),
            )
        });

    let details = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Text::new(breed.name).size(typography::TITLE_SM))
        .push(
            Text::new(format!("Origin: {}", breed.origin))
                .size(typography::BODY)
                .style(secondary_text(ctx.scheme)),
        )
        .push(badges)
        .push(
            Text::new(format!(
                "{} / {}",
                ctx.state.breed_index() + 1,
                catalog::BREEDS.len()
            ))
            .size(typography::CAPTION),
        );

    let arrow = |label: &'static str, message: Message| {
        button(text(label).size(typography::TITLE_SM))
            .on_press(message)
            .padding(spacing::XS)
            .style(styles::button::tab(ctx.scheme, false))
    };

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(arrow("\u{2039}", Message::PreviousBreed))
        .push(details)
        .push(arrow("\u{203a}", Message::NextBreed))
        .into()
}

fn fact_ticker<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let dots: String = (0..ctx.fact_count)
        .map(|i| if i == ctx.fact_index { '\u{25cf}' } else { '\u{25cb}' })
        .collect();

    card(
        ctx.scheme,
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new("Did You Know?").size(typography::TITLE_SM))
            .push(Text::new(catalog::fact(ctx.fact_index)).size(typography::BODY_LG))
            .push(
                Text::new(dots)
                    .size(typography::CAPTION)
                    .style(secondary_text(ctx.scheme)),
            )
            .into(),
    )
}

fn adoption_chart<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    card(
        ctx.scheme,
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new("Cat Adoptions by Month").size(typography::TITLE_SM))
            .push(
                AdoptionChart::new(ctx.series, ctx.scheme.brand_primary, ctx.scheme.text_secondary)
                    .into_element(),
            )
            .push(
                Text::new(format!("{} adoptions this year", ctx.series.total()))
                    .size(typography::CAPTION)
                    .style(secondary_text(ctx.scheme)),
            )
            .into(),
    )
}

fn audio_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let play_label = if ctx.is_playing {
        "\u{23f8} Pause"
    } else {
        "\u{25b6} Play"
    };

    let controls = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            button(text(play_label).size(typography::BODY))
                .on_press(Message::TogglePlayback)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary(ctx.scheme)),
        )
        .push(
            slider(0.0..=1.0, ctx.volume, Message::VolumeChanged)
                .step(0.01)
                .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH))
                .style(styles::slider::volume(ctx.scheme)),
        )
        .push(Text::new(volume_label(ctx.volume)).size(typography::BODY));

    card(
        ctx.scheme,
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new("Relaxing Purr Sounds").size(typography::TITLE_SM))
            .push(controls)
            .into(),
    )
}

fn card<'a>(scheme: &ColorScheme, content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card(scheme))
        .into()
}

fn secondary_text(scheme: &ColorScheme) -> impl Fn(&Theme) -> text::Style {
    let color = scheme.text_secondary;
    move |_theme: &Theme| text::Style { color: Some(color) }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn volume_label(volume: f32) -> String {
    format!("{}%", (volume.clamp(0.0, 1.0) * 100.0).round() as u8)
}
