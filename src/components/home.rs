//! Home screen rendering
//!
//! Draws the tab bar, dispatches the body to the active tab's component,
//! and renders the status and help bars. Key handling lives in the tab
//! components; this module is rendering only.

use crate::components::{
    calculate_main_layout, ActivityTable, DatabaseTable, SetupForm, SummaryPanel,
};
use crate::model::domain::DomainState;
use crate::model::ui::Tab;
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub domain: &'a DomainState,
    pub active_tab: Tab,
    pub status_message: Option<&'a str>,
    pub error: Option<&'a str>,
}

/// Draw the home screen
#[allow(clippy::too_many_arguments)]
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    setup_form: &mut SetupForm,
    database_table: &mut DatabaseTable,
    activity_table: &mut ActivityTable,
    summary_panel: &SummaryPanel,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    render_tabs(frame, layout.tabs, ctx.active_tab);

    match ctx.active_tab {
        Tab::Setup => setup_form.render(frame, layout.body, ctx.domain),
        Tab::Databases => database_table.render(frame, layout.body, ctx.domain),
        Tab::Activities => activity_table.render(frame, layout.body, ctx.domain),
        Tab::Summary => summary_panel.render(frame, layout.body, ctx.domain),
    }

    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help, ctx.active_tab);

    Ok(())
}

fn render_tabs(frame: &mut Frame, area: Rect, active_tab: Tab) {
    let all_tabs = Tab::all();
    let titles: Vec<&str> = all_tabs.iter().map(|t| t.name()).collect();
    let selected = all_tabs.iter().position(|t| *t == active_tab).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", ctx.domain.config.client_name),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", ctx.domain.config.environment.label()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!(
                "{} databases · {} GB",
                ctx.domain.summary.database_count, ctx.domain.summary.total_size_gb
            ),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some(error) = ctx.error {
        spans.clear();
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!("  {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, active_tab: Tab) {
    let key = |text: &str| {
        Span::styled(
            format!(" {} ", text),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };
    let label = |text: &str| Span::raw(format!("{}  ", text));

    let mut spans = match active_tab {
        Tab::Setup => vec![
            key("j/k"),
            label("Move"),
            key("Enter"),
            label("Edit field"),
        ],
        Tab::Databases => vec![
            key("e"),
            label("Edit list"),
            key("a"),
            label("Add"),
            key("d"),
            label("Delete"),
            key("i"),
            label("Import CSV"),
            key("j/k"),
            label("Move"),
        ],
        Tab::Activities => vec![
            key("a"),
            label("Add"),
            key("D"),
            label("Duplicate"),
            key("x"),
            label("Delete"),
            key("J/K"),
            label("Reorder"),
            key("Enter"),
            label("Describe"),
            key("t"),
            label("Time"),
            key("m"),
            label("Team"),
            key("s"),
            label("Status"),
            key("r"),
            label("Template"),
        ],
        Tab::Summary => vec![key("x"), label("Export report")],
    };

    spans.push(Span::styled(
        " Tab ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw("Switch  "));
    spans.push(Span::styled(
        " ? ",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw("Help  "));
    spans.push(Span::styled(
        " q ",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw("Quit"));

    let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
