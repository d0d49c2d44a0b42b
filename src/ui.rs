use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Field};
use crate::format::{format_currency, format_percent, group_digits};

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Min(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new("Car Loan Calculator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    for (field, area) in Field::ALL.into_iter().zip(chunks[1..4].iter()) {
        render_input(f, app, field, *area);
    }

    render_result(f, app, chunks[4]);

    let help = Paragraph::new("Tab/↑/↓: switch field | Enter: calculate | Ctrl-U: clear | Esc/q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[5]);
}

fn render_input(f: &mut Frame, app: &App, field: Field, area: Rect) {
    let raw = app.field(field);
    let shown = match field {
        Field::Otr => format!("Rp {}", group_digits(raw)),
        Field::DownPayment => format!("{}%", raw),
        Field::Duration => format!("{} months", raw),
    };

    let focused = app.focus == field;
    let (border_style, text_style) = if focused {
        (
            Style::default().fg(Color::Yellow),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };

    let input = Paragraph::new(shown).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(field.label()),
    );
    f.render_widget(input, area);
}

fn render_result(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Monthly Installment");

    let text = match &app.installment {
        None => vec![Line::from(Span::styled(
            "Press Enter to calculate",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(installment) => vec![
            Line::from(Span::styled(
                installment.formatted(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Down payment: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format_currency(installment.down_payment_amount)),
            ]),
            Line::from(vec![
                Span::styled("Loan amount: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format_currency(installment.loan_amount)),
            ]),
            Line::from(vec![
                Span::styled("Flat rate: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format_percent(installment.rate)),
            ]),
        ],
    };

    let result = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(result, area);
}
