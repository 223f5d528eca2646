//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法
//!
//! 所有前置条件不满足的操作（id 不存在、没有活跃会话等）
//! 一律静默降级为 no-op，不向调用方报错

use super::actions::Action;
use super::state::{App, AppMode, EditSession, PendingDeletion};

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::StartAddTodo => self.start_add(),
            Action::StartEditTodo => self.start_edit(),
            Action::ToggleCompleted => self.toggle_completed(),
            Action::StartDeleteTodo => self.start_delete(),

            Action::Cancel => self.cancel(),

            Action::Submit => match &self.mode {
                AppMode::AddingTodo => self.confirm_add(),
                AppMode::Editing(_) => self.save_edit(),
                AppMode::ConfirmDelete(_) => self.confirm_delete(),
                AppMode::Normal => {}
            },

            Action::Input(c) => match &mut self.mode {
                AppMode::AddingTodo => self.input_buffer.push(c),
                AppMode::Editing(session) => session.draft.push(c),
                _ => {}
            },

            Action::DeleteChar => match &mut self.mode {
                AppMode::AddingTodo => {
                    self.input_buffer.pop();
                }
                AppMode::Editing(session) => {
                    session.draft.pop();
                }
                _ => {}
            },
        }
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.todos.len() {
            self.selected_index += 1;
        }
    }

    // ============ 添加事项相关 ============

    /// 开始添加事项
    pub fn start_add(&mut self) {
        self.mode = AppMode::AddingTodo;
        self.input_buffer.clear();
        self.message = None;
    }

    /// 确认添加事项
    ///
    /// 输入去除空白后为空则不提交，停留在输入框中
    pub fn confirm_add(&mut self) {
        if self.todos.add(&self.input_buffer).is_some() {
            self.input_buffer.clear();
            self.selected_index = self.todos.len() - 1;
            self.mode = AppMode::Normal;
            self.message = Some("已添加".to_string());
        }
    }

    // ============ 编辑相关 ============

    /// 开始编辑当前选中的事项，草稿初始化为现有文本
    pub fn start_edit(&mut self) {
        if let Some(item) = self.selected_todo() {
            self.mode = AppMode::Editing(EditSession {
                target_id: item.id,
                draft: item.text.clone(),
            });
        }
    }

    /// 保存编辑：草稿原样写入目标事项（不做裁剪或空白校验）
    pub fn save_edit(&mut self) {
        if let AppMode::Editing(session) = &self.mode {
            let EditSession { target_id, draft } = session.clone();
            self.todos.set_text(target_id, draft);
            self.mode = AppMode::Normal;
            self.message = Some("已保存".to_string());
        }
    }

    // ============ 完成状态相关 ============

    /// 翻转当前选中事项的完成状态
    pub fn toggle_completed(&mut self) {
        if let Some(id) = self.selected_todo_id() {
            self.todos.toggle_completed(id);
        }
    }

    // ============ 删除相关 ============

    /// 对当前选中的事项发起删除请求，等待确认
    pub fn start_delete(&mut self) {
        if let Some(id) = self.selected_todo_id() {
            self.mode = AppMode::ConfirmDelete(PendingDeletion { target_id: id });
        }
    }

    /// 确认删除：移除目标事项并清除待确认状态
    pub fn confirm_delete(&mut self) {
        if let AppMode::ConfirmDelete(pending) = &self.mode {
            let target_id = pending.target_id;
            self.todos.remove(target_id);
            self.clamp_selection();
            self.mode = AppMode::Normal;
            self.message = Some("已删除".to_string());
        }
    }

    // ============ 通用操作 ============

    /// 取消当前操作：丢弃草稿或待确认删除，列表不变
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
        self.message = None;
    }
}
