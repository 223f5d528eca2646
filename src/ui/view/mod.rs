//! 视图层模块
//!
//! 纯函数：将 App 状态映射为 ratatui 组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::state::{App, AppMode, PendingDeletion};
use components::{render_dialog_framework, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(5),    // 列表
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_todo_list(frame, app, chunks[1]);
    render_help(frame, app, chunks[2]);

    // 渲染弹窗
    match &app.mode {
        AppMode::AddingTodo => render_add_dialog(frame, app),
        AppMode::Editing(_) => render_edit_dialog(frame, app),
        AppMode::ConfirmDelete(pending) => render_confirm_dialog(frame, app, pending),
        AppMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("📝 待办清单")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_todo_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.todos.is_empty() {
        let empty = Paragraph::new("暂无事项，按 'a' 添加第一条")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().title("事项").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .todos
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let checkbox = if item.completed { "[x] " } else { "[ ] " };
            let content = format!("{}{}", checkbox, item.text);

            let style = if i == app.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if item.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::Green)
            };

            ListItem::new(Line::from(vec![Span::styled(content, style)]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(Block::default().title("事项").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list_widget, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Normal => {
            "[a] 添加  [e] 编辑  [空格/x] 完成  [d] 删除  [j/k] 导航  [q] 退出"
        }
        AppMode::AddingTodo => "输入内容后按 [Enter] 添加  [Esc] 取消",
        AppMode::Editing(_) => "[Enter] 保存  [Esc] 取消",
        AppMode::ConfirmDelete(_) => "[y] 确认删除  [n] 取消",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_add_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 25, frame.area());
    let inner = render_dialog_framework(frame, area, "添加事项");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    render_input_widget(frame, chunks[0], "内容", &app.input_buffer);

    let hint = Paragraph::new("首尾空白会被去除，空内容不会添加")
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(hint, chunks[1]);
}

fn render_edit_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 25, frame.area());
    let inner = render_dialog_framework(frame, area, "编辑事项");

    let draft = match &app.mode {
        AppMode::Editing(session) => session.draft.as_str(),
        _ => "",
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    render_input_widget(frame, chunks[0], "内容", draft);

    let hint = Paragraph::new("按 Enter 保存，Esc 放弃修改").style(Style::default().fg(Color::Gray));
    frame.render_widget(hint, chunks[1]);
}

fn render_confirm_dialog(frame: &mut Frame, app: &App, pending: &PendingDeletion) {
    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let target = app
        .todos
        .get(pending.target_id)
        .map(|item| item.text.as_str())
        .unwrap_or("");

    let dialog = Paragraph::new(format!(
        "确认删除「{}」？此操作不可撤销。\n\n[y] 确认  [n] 取消",
        target
    ))
    .style(Style::default().fg(Color::Red))
    .block(Block::default().title("⚠️ 确认删除").borders(Borders::ALL));

    frame.render_widget(dialog, area);
}
