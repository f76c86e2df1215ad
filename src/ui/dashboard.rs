use crate::model::Value;
use crate::table::{split_quantity, total_count, DataFrame, SplitBy};
use crate::ui::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        BarChart, Block, Borders, List, ListItem, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, Tabs,
    },
    Frame,
};

// Brandbook colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C); // #1f2f3c
const BRAND_ACCENT: Color = Color::Rgb(0x58, 0x6B, 0x71); // #586b71
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0); // #c3d3e0
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68); // #829a68
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // #9e683c
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // #716565

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const COUNT_COLOR: Color = BRAND_GREEN;
const LINK_COLOR: Color = BRAND_ACCENT;

/// Columns shown at once in the table tab.
const VISIBLE_COLUMNS: usize = 8;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header + tabs
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    match app.tab {
        Tab::Table => draw_table_tab(frame, chunks[1], app),
        Tab::Quantities => draw_quantities_tab(frame, chunks[1], app),
        Tab::Inspector => draw_inspector_tab(frame, chunks[1], app),
    }
    draw_footer(frame, chunks[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.session.summary() {
        Ok(summary) => format!(
            " IFC Stream | {} | {} | {} | {} entities ",
            summary.name, summary.file_name, summary.schema, summary.entity_count
        ),
        Err(_) => " IFC Stream ".to_string(),
    };

    let selected = Tab::ALL.iter().position(|t| *t == app.tab).unwrap_or(0);
    let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()).collect::<Vec<_>>())
        .select(selected)
        .style(Style::default().fg(BRAND_MUTED))
        .highlight_style(SELECTED_STYLE)
        .block(
            Block::default()
                .title(Span::styled(title, HEADER_STYLE))
                .borders(Borders::ALL),
        );

    frame.render_widget(tabs, area);
}

fn draw_table_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(20), // Classes
        Constraint::Percentage(80), // Rows
    ])
    .split(area);

    draw_classes(frame, chunks[0], app);
    draw_rows(frame, chunks[1], app);
}

fn class_counts(frame: &DataFrame, classes: &[String]) -> Vec<usize> {
    let values = frame.column("Class").unwrap_or_default();
    classes
        .iter()
        .map(|class| {
            values
                .iter()
                .filter(|v| v.as_str() == Some(class.as_str()))
                .count()
        })
        .collect()
}

fn draw_classes(frame: &mut Frame, area: Rect, app: &App) {
    let classes = app.session.classes();
    let counts = app
        .session
        .frame()
        .map(|f| class_counts(f, classes))
        .unwrap_or_default();
    let total = app.session.frame().map_or(0, total_count);

    let names = std::iter::once("All").chain(classes.iter().map(String::as_str));
    let amounts = std::iter::once(total).chain(counts);

    let items: Vec<ListItem> = names
        .zip(amounts)
        .enumerate()
        .map(|(i, (name, count))| {
            let style = if i == app.selected_class {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(name.to_string(), style),
                Span::raw(" "),
                Span::styled(format!("({count})"), Style::default().fg(COUNT_COLOR)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Classes ({}) ", classes.len()))
            .borders(Borders::ALL),
    );

    frame.render_widget(list, area);
}

fn draw_rows(frame: &mut Frame, area: Rect, app: &App) {
    let view = &app.view;

    // Borders and header take three lines.
    let visible_rows = (area.height as usize).saturating_sub(3);
    let scroll_offset = if app.selected_row >= visible_rows {
        app.selected_row - visible_rows + 1
    } else {
        0
    };

    let shown: Vec<usize> = (app.column_offset..view.width())
        .take(VISIBLE_COLUMNS)
        .collect();

    let header = Row::new(shown.iter().map(|&c| view.columns()[c].clone()))
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = view
        .rows()
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, row)| {
            let style = if i == app.selected_row {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            Row::new(shown.iter().map(|&c| cell_text(&row[c]))).style(style)
        })
        .collect();

    let widths = vec![Constraint::Min(12); shown.len()];
    let title = format!(
        " {} ({} rows, columns {}-{} of {}) ",
        app.selected_class_name().unwrap_or("All"),
        view.height(),
        app.column_offset + 1,
        app.column_offset + shown.len(),
        view.width()
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(table, area);
    draw_scrollbar(frame, area, view.height(), visible_rows, app.selected_row);
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

fn draw_scrollbar(frame: &mut Frame, area: Rect, len: usize, visible: usize, position: usize) {
    if len <= visible || area.height < 4 {
        return;
    }
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));
    let mut scrollbar_state = ScrollbarState::new(len).position(position);

    let scrollbar_area = Rect {
        x: area.x + area.width - 1,
        y: area.y + 2,
        width: 1,
        height: area.height - 3,
    };
    frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

fn draw_quantities_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(30), // Sets and quantities
        Constraint::Percentage(70), // Charts
    ])
    .split(area);
    let left = Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[0]);
    let right = Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let sets = app.quantity_sets();
    draw_choice_list(frame, left[0], " Quantity Sets ", &sets, app.selected_set);
    let quantities = app.quantities();
    draw_choice_list(frame, left[1], " Quantities ", &quantities, app.selected_quantity);

    match (app.selected_set_name(), quantities.get(app.selected_quantity)) {
        (Some(set), Some(quantity)) => {
            let totals = split_quantity(&app.view, &set, quantity, app.split);
            let by = match app.split {
                SplitBy::Level => "Level",
                SplitBy::Type => "Type",
            };
            let title = format!(" {quantity} by {by} ({} objects) ", total_count(&app.view));
            draw_bars(frame, right[0], &title, &totals);
        }
        _ => {
            let empty = Paragraph::new("No quantity sets in this selection")
                .style(Style::default().fg(BRAND_MUTED))
                .block(Block::default().title(" Quantities ").borders(Borders::ALL));
            frame.render_widget(empty, right[0]);
        }
    }

    let frequency: Vec<(String, f64)> = app
        .session
        .class_frequency()
        .unwrap_or_default()
        .into_iter()
        .map(|(class, count)| (class, count as f64))
        .collect();
    draw_bars(frame, right[1], " Class Frequency ", &frequency);
}

fn draw_choice_list(frame: &mut Frame, area: Rect, title: &str, items: &[String], selected: usize) {
    let items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == selected {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(item.clone(), style))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}

#[allow(clippy::cast_sign_loss)]
fn draw_bars(frame: &mut Frame, area: Rect, title: &str, totals: &[(String, f64)]) {
    let data: Vec<(&str, u64)> = totals
        .iter()
        .map(|(group, total)| {
            let label = if group.is_empty() { "-" } else { group.as_str() };
            (label, total.max(0.0).round() as u64)
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(1)
        .bar_style(Style::default().fg(BRAND_GREEN))
        .value_style(Style::default().fg(BRAND_DARK).bg(BRAND_GREEN))
        .label_style(Style::default().fg(BRAND_MUTED));

    frame.render_widget(chart, area);
}

fn draw_inspector_tab(frame: &mut Frame, area: Rect, app: &App) {
    let debug = app.session.debug();
    let rows_data = app.inspector_rows();

    let visible_rows = (area.height as usize).saturating_sub(3);
    let scroll_offset = if app.selected_attribute >= visible_rows {
        app.selected_attribute - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(vec!["Attribute", "Value"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = rows_data
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, (name, value, target))| {
            let style = if i == app.selected_attribute {
                SELECTED_STYLE
            } else if target.is_some() {
                Style::default().fg(LINK_COLOR)
            } else {
                Style::default()
            };
            Row::new(vec![name.clone(), value.clone()]).style(style)
        })
        .collect();

    let breadcrumb = debug
        .breadcrumb
        .iter()
        .map(|id| format!("#{id}"))
        .collect::<Vec<_>>()
        .join(" > ");
    let title = if breadcrumb.is_empty() {
        " Inspector: press Enter on a table row ".to_string()
    } else {
        format!(" {breadcrumb} ")
    };

    let widths = [Constraint::Percentage(30), Constraint::Percentage(70)];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BRAND_ORANGE)),
    );

    frame.render_widget(table, area);
    draw_scrollbar(frame, area, rows_data.len(), visible_rows, app.selected_attribute);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let help = match app.tab {
        Tab::Table => " ↑↓ Row | ←→ Columns | [ ] Class | Enter Inspect | c CSV | x Excel | J JSON | q Quit ",
        Tab::Quantities => " ←→ Set | ↑↓ Quantity | s Level/Type | c CSV | x Excel | J JSON | q Quit ",
        Tab::Inspector => " ↑↓ Attribute | Enter Follow | e Edit | Backspace Back | Tab Switch | q Quit ",
    };
    let text = if let Some(edit) = &app.editing {
        format!(" #{}.{} = {}_ | Enter Apply | Esc Cancel ", edit.id, edit.attribute, edit.input)
    } else if app.status.is_empty() {
        help.to_string()
    } else {
        format!(" {} |{help}", app.status)
    };

    let footer = Paragraph::new(text)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
