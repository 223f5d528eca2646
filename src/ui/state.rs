//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::models::{TodoItem, TodoList};

/// 应用状态
pub struct App {
    pub todos: TodoList,
    pub selected_index: usize,
    pub mode: AppMode,
    pub input_buffer: String, // 新事项的输入缓冲
    pub message: Option<String>,
}

/// 应用模式
///
/// 编辑会话和待确认删除都挂在模式上，
/// 因此二者结构上互斥，同一时刻最多存在一个
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    AddingTodo,
    Editing(EditSession),
    ConfirmDelete(PendingDeletion),
}

/// 编辑会话：正在编辑哪一项，以及尚未保存的草稿
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub target_id: u64,
    pub draft: String,
}

/// 待确认的删除请求
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDeletion {
    pub target_id: u64,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            todos: TodoList::new(),
            selected_index: 0,
            mode: AppMode::Normal,
            input_buffer: String::new(),
            message: None,
        }
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        if self.todos.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.todos.len() {
            self.selected_index = self.todos.len() - 1;
        }
    }

    /// 获取当前选中的事项
    pub fn selected_todo(&self) -> Option<&TodoItem> {
        self.todos.items.get(self.selected_index)
    }

    /// 获取当前选中的事项 id
    pub fn selected_todo_id(&self) -> Option<u64> {
        self.selected_todo().map(|item| item.id)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
